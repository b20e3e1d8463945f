// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The top-level plot.

use plotweave_core::{Point, RegionMut, Scene};
use tracing::debug;

use crate::axis::Axis;
use crate::detect::detect_axes;
use crate::elements::{Element, Elements};
use crate::error::PlotError;
use crate::theme::Theme;

/// Axes, elements, and theme for one chart.
///
/// The plot owns its axes. Drawing never mutates them: when a bound is unset, the
/// detected axes are computed on a copy that only lives for the draw call.
#[derive(Debug)]
pub struct Plot {
    /// Size of the scene produced by [`Plot::render`].
    pub size: Point,
    /// Horizontal axis.
    pub x: Axis,
    /// Vertical axis.
    pub y: Axis,
    /// Root elements, drawn in insertion order.
    pub elements: Elements,
    /// Fallback styles.
    pub theme: Theme,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            size: Point::new(800.0, 600.0),
            x: Axis::new(),
            y: Axis::new(),
            elements: Elements::new(),
            theme: Theme::default(),
        }
    }
}

/// What an element sees while drawing: resolved axes and the plot theme.
#[derive(Clone, Copy, Debug)]
pub struct PlotFrame<'a> {
    /// Horizontal axis with valid bounds.
    pub x: &'a Axis,
    /// Vertical axis with valid bounds.
    pub y: &'a Axis,
    /// Fallback styles.
    pub theme: &'a Theme,
}

impl Plot {
    /// An 800×600 plot with unset axes and the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output size.
    pub fn with_size(mut self, size: Point) -> Self {
        self.size = size;
        self
    }

    /// Sets the horizontal axis.
    pub fn with_x(mut self, x: Axis) -> Self {
        self.x = x;
        self
    }

    /// Sets the vertical axis.
    pub fn with_y(mut self, y: Axis) -> Self {
        self.y = y;
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Appends a root element.
    pub fn add(&mut self, element: impl Element + 'static) {
        self.elements.add(element);
    }

    /// The axes elements will see: the plot's own when both are valid, detected otherwise.
    pub fn detected_axes(&self) -> (Axis, Axis) {
        if self.x.is_valid() && self.y.is_valid() {
            return (self.x.clone(), self.y.clone());
        }
        detect_axes(&self.x, &self.y, self.elements.stats())
    }

    /// Draws every element into `region`.
    pub fn draw(&self, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let (x, y) = self.detected_axes();
        let frame = PlotFrame {
            x: &x,
            y: &y,
            theme: &self.theme,
        };
        self.elements.draw(&frame, region)
    }

    /// Draws the plot into a fresh scene of [`Plot::size`].
    pub fn render(&self) -> Result<Scene, PlotError> {
        let mut scene = Scene::new(self.size);
        self.draw(&mut scene.root())?;
        debug!(
            width = self.size.x,
            height = self.size.y,
            regions = scene.region_count(),
            "rendered plot"
        );
        Ok(scene)
    }
}
