// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background grid.

use alloc::vec;

use plotweave_core::{Point, RegionMut, Style};

use crate::elements::Element;
use crate::error::PlotError;
use crate::plot::PlotFrame;
use crate::theme::GridTheme;
use crate::z_order;

/// A filled background with a line at every tick of both axes.
///
/// The fill goes on the [`z_order::BACKGROUND`] layer and the lines on
/// [`z_order::GRID_LINES`], so a grid added after the series still renders behind them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Grid {
    /// Colors; `None` uses the plot theme's grid colors.
    pub colors: Option<GridTheme>,
    /// Width of major and minor lines.
    pub line_width: Option<f64>,
}

impl Grid {
    /// A grid using the theme colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the theme colors.
    pub fn with_colors(mut self, colors: GridTheme) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Overrides the line width (default `1`).
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }
}

impl Element for Grid {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let (x, y) = (plot.x, plot.y);
        let colors = self.colors.unwrap_or(plot.theme.grid);
        let width = self.line_width.unwrap_or(1.0);
        let bounds = region.bounds();
        let size = region.size();

        let x0 = x.to_canvas(x.min, 0.0, size.x)?;
        let x1 = x.to_canvas(x.max, 0.0, size.x)?;
        let y0 = y.to_canvas(y.min, 0.0, size.y)?;
        let y1 = y.to_canvas(y.max, 0.0, size.y)?;

        region
            .layer(z_order::BACKGROUND)
            .rect(bounds, &Style::filled(colors.fill))?;

        let major = Style::stroked(colors.major, width);
        let minor = Style::stroked(colors.minor, width);
        let mut lines = region.layer(z_order::GRID_LINES);
        for tick in x.ticks()? {
            let p = x.to_canvas(tick.value, 0.0, size.x)?;
            let style = if tick.minor { &minor } else { &major };
            lines.poly(vec![Point::new(p, y0), Point::new(p, y1)], style)?;
        }
        for tick in y.ticks()? {
            let p = y.to_canvas(tick.value, 0.0, size.y)?;
            let style = if tick.minor { &minor } else { &major };
            lines.poly(vec![Point::new(x0, p), Point::new(x1, p)], style)?;
        }
        Ok(())
    }
}
