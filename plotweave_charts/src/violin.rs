// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Violin plots.

use alloc::vec::Vec;

use plotweave_core::{Length, Point, RegionMut, Style};

use crate::elements::Element;
use crate::error::PlotError;
use crate::kde::{DEFAULT_KERNEL, Samples, sweep};
use crate::plot::PlotFrame;
use crate::stats::Stats;

/// Which side of the center line a violin grows towards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViolinSide {
    /// Towards positive x.
    #[default]
    Positive,
    /// Towards negative x.
    Negative,
    /// Both sides, mirrored into one closed outline.
    Symmetric,
}

/// A kernel density estimate drawn along the y axis around `x = 0`.
///
/// Densities are mapped through the x axis, so range detection puts it at `[-1, 1]`.
#[derive(Clone, Debug, Default)]
pub struct Violin {
    /// Outline style; an empty style falls back to the theme's line.
    pub style: Style,
    /// Growth direction.
    pub side: ViolinSide,
    /// Kernel half-width in canvas units; `None` uses [`DEFAULT_KERNEL`].
    pub kernel: Option<Length>,
    samples: Samples,
}

impl Violin {
    /// A one-sided violin over a sorted copy of `values`.
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

    /// Sets the side.
    pub fn with_side(mut self, side: ViolinSide) -> Self {
        self.side = side;
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
        let curve = sweep(&self.samples, y, size.y, kernel)?;

        let mut y0 = y.to_canvas(y.min, 0.0, size.y)?;
        let mut y1 = y.to_canvas(y.max, 0.0, size.y)?;
        if y0 > y1 {
            core::mem::swap(&mut y0, &mut y1);
        }

        // (density, canvas y) pairs, closed at both ends when the outline is a polygon.
        let closed = self.style.fill.is_some() || self.side == ViolinSide::Symmetric;
        let mut half = Vec::with_capacity(curve.points.len() + 2);
        if closed {
            half.push((0.0, y0));
        }
        half.extend(curve.points.iter().map(|p| (p.density, p.at)));
        if closed {
            half.push((0.0, y1));
        }

        let sign = match self.side {
            ViolinSide::Negative => -1.0,
            ViolinSide::Positive | ViolinSide::Symmetric => 1.0,
        };
        let mut points = Vec::with_capacity(half.len() * 2);
        for &(d, at) in &half {
            points.push(Point::new(x.to_canvas(sign * d, 0.0, size.x)?, at));
        }
        if self.side == ViolinSide::Symmetric {
            for &(d, at) in half.iter().rev() {
                points.push(Point::new(x.to_canvas(-d, 0.0, size.x)?, at));
            }
        }
        Ok(points)
    }
}

impl Element for Violin {
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
            discrete_x: true,
            discrete_y: false,
            min: Point::new(-1.0, min),
            center: Point::new(0.0, median),
            max: Point::new(1.0, max),
        })
    }
}
