// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text guides: tick labels, free labels, and text boxes.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use plotweave_core::{Length, Point, Rect, RegionMut, Style};

use crate::elements::Element;
use crate::error::PlotError;
use crate::plot::PlotFrame;
use crate::z_order;

/// Labels at the major ticks of one or both axes.
///
/// X labels sit on the `y.min` edge and y labels on the `x.min` edge.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabels {
    /// Label the x axis.
    pub x: bool,
    /// Label the y axis.
    pub y: bool,
    /// Text style; an empty style uses the theme's small font.
    pub style: Style,
}

impl Default for TickLabels {
    fn default() -> Self {
        Self {
            x: true,
            y: true,
            style: Style::default(),
        }
    }
}

impl TickLabels {
    /// Labels for both axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels for the x axis only.
    pub fn x_only() -> Self {
        Self {
            y: false,
            ..Self::default()
        }
    }

    /// Labels for the y axis only.
    pub fn y_only() -> Self {
        Self {
            x: false,
            ..Self::default()
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Element for TickLabels {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let (x, y) = (plot.x, plot.y);
        let size = region.size();
        let style = self.style.or(&plot.theme.font_small);
        let mut layer = region.layer(z_order::TICK_LABELS);

        if self.x {
            let base = y.to_canvas(y.min, 0.0, size.y)?;
            for tick in x.ticks()? {
                if tick.label.is_empty() {
                    continue;
                }
                let p = x.to_canvas(tick.value, 0.0, size.x)?;
                layer.text(tick.label, Point::new(p, base), style)?;
            }
        }
        if self.y {
            let base = x.to_canvas(x.min, 0.0, size.x)?;
            for tick in y.ticks()? {
                if tick.label.is_empty() {
                    continue;
                }
                let p = y.to_canvas(tick.value, 0.0, size.y)?;
                layer.text(tick.label, Point::new(base, p), style)?;
            }
        }
        Ok(())
    }
}

/// A single line of text placed at a unit location of its region.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The text.
    pub text: String,
    /// Position in unit coordinates of the region (`(0, 0)` is `min`, `(1, 1)` is `max`).
    pub placement: Point,
    /// Text style. When empty, the theme font is used with this style's origin and
    /// rotation.
    pub style: Style,
}

impl Label {
    /// A label at `placement`.
    pub fn new(text: impl Into<String>, placement: Point) -> Self {
        Self {
            text: text.into(),
            placement,
            style: Style::default(),
        }
    }

    /// A label centered under the region, hanging below its anchor.
    pub fn x_label(text: impl Into<String>) -> Self {
        let mut label = Self::new(text, Point::new(0.5, 1.0));
        label.style.origin = Point::new(0.0, -1.0);
        label
    }

    /// A label centered on the left edge, rotated to read bottom to top.
    pub fn y_label(text: impl Into<String>) -> Self {
        let mut label = Self::new(text, Point::new(0.0, 0.5));
        label.style.origin = Point::new(0.0, 1.0);
        label.style.rotation = -90.0;
        label
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn resolved_style<'a>(&'a self, plot: &PlotFrame<'a>) -> Cow<'a, Style> {
        if !self.style.is_empty() {
            return Cow::Borrowed(&self.style);
        }
        let mut style = plot.theme.font.clone();
        style.origin = self.style.origin;
        style.rotation = self.style.rotation;
        Cow::Owned(style)
    }
}

impl Element for Label {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let at = region.bounds().unit_location(self.placement);
        let style = self.resolved_style(plot);
        region
            .layer(z_order::LABELS)
            .text(self.text.clone(), at, &*style)?;
        Ok(())
    }
}

/// Lines of text stacked top to bottom inside a clipped, inset region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Textbox {
    /// Inset from the region bounds.
    pub margin: Rect,
    /// Text style; an empty style uses the theme font.
    pub style: Style,
    /// One entry per line.
    pub lines: Vec<String>,
}

impl Textbox {
    /// Font size used when the resolved style has none.
    pub const DEFAULT_FONT_SIZE: Length = 10.0;

    /// A text box holding `lines`.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Appends a line.
    pub fn add(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the margin.
    pub fn with_margin(mut self, margin: Rect) -> Self {
        self.margin = margin;
        self
    }
}

impl Element for Textbox {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let bounds = region.bounds().inset(self.margin);
        let mut clip = region.clip(bounds);
        let mut style = self.style.or(&plot.theme.font).clone();
        if style.size == 0.0 {
            style.size = Self::DEFAULT_FONT_SIZE;
        }

        let line_height = style.size * 1.1;
        let mut at = Point::new(0.0, line_height);
        for line in &self.lines {
            clip.text(line.clone(), at, &style)?;
            at.y += line_height;
        }
        Ok(())
    }
}
