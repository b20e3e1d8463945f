// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Density curves.

use alloc::vec::Vec;

use plotweave_core::{Length, Point, RegionMut, Style};

use crate::elements::Element;
use crate::error::PlotError;
use crate::kde::{DEFAULT_KERNEL, Samples, sweep};
use crate::plot::PlotFrame;
use crate::stats::Stats;

/// A kernel density estimate drawn along the x axis.
///
/// Densities are normalized to a peak of `1.0` and mapped through the y axis, so range
/// detection puts the y axis at `[0, 1]`.
#[derive(Clone, Debug, Default)]
pub struct Density {
    /// Curve style; an empty style falls back to the theme's line.
    ///
    /// A fill closes the curve down to the `y = 0` baseline.
    pub style: Style,
    /// Kernel half-width in canvas units; `None` uses [`DEFAULT_KERNEL`].
    pub kernel: Option<Length>,
    samples: Samples,
}

impl Density {
    /// A density over a sorted copy of `values`.
    pub fn new(values: &[f64]) -> Self {
        Self {
            samples: Samples::new(values),
            ..Self::default()
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the kernel half-width.
    pub fn with_kernel(mut self, kernel: Length) -> Self {
        self.kernel = Some(kernel);
        self
    }

    /// The sorted samples.
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Builds the outline in local canvas coordinates.
    pub fn points(&self, plot: &PlotFrame<'_>, size: Point) -> Result<Vec<Point>, PlotError> {
        let (x, y) = (plot.x, plot.y);
        let kernel = self.kernel.unwrap_or(DEFAULT_KERNEL);
        let curve = sweep(&self.samples, x, size.x, kernel)?;

        let filled = self.style.fill.is_some();
        let mut points = Vec::with_capacity(curve.points.len() + 3);
        let mut baseline = None;
        if filled {
            let base = y.to_canvas(0.0, 0.0, size.y)?;
            let mut x0 = x.to_canvas(x.min, 0.0, size.x)?;
            let mut x1 = x.to_canvas(x.max, 0.0, size.x)?;
            // The sweep runs in ascending canvas order, flipped or not.
            if x0 > x1 {
                core::mem::swap(&mut x0, &mut x1);
            }
            points.push(Point::new(x0, base));
            baseline = Some((x0, x1, base));
        }
        for p in &curve.points {
            points.push(Point::new(p.at, y.to_canvas(p.density, 0.0, size.y)?));
        }
        if let Some((x0, x1, base)) = baseline {
            points.push(Point::new(x1, base));
            points.push(Point::new(x0, base));
        }
        Ok(points)
    }
}

impl Element for Density {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let points = self.points(plot, region.size())?;
        region.poly(points, self.style.or(&plot.theme.line))?;
        Ok(())
    }

    fn stats(&self) -> Option<Stats> {
        if self.samples.is_empty() {
            return Some(Stats::NAN);
        }
        let (min, median, max) = self.samples.extent();
        Some(Stats {
            discrete_x: false,
            discrete_y: false,
            min: Point::new(min, 0.0),
            center: Point::new(median, 0.5),
            max: Point::new(max, 1.0),
        })
    }
}
