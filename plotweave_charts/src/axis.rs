// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis range state and data ↔ canvas mapping.

use alloc::vec::Vec;

use crate::error::AxisError;
use crate::ticks::{Tick, Ticks};
use crate::transform::Transform;

/// A data-space range mapped onto a canvas interval.
///
/// `min` and `max` start out as NaN. They are set explicitly, widened with
/// [`Axis::include`], or filled in by range detection when a plot is drawn.
#[derive(Clone, Debug)]
pub struct Axis {
    /// Lower data bound (NaN until set).
    pub min: f64,
    /// Upper data bound (NaN until set).
    pub max: f64,
    /// Map `max` to the start of the canvas interval instead of `min`.
    pub flip: bool,
    /// Reparameterization of the normalized position.
    pub transform: Transform,
    /// Tick generator used by grids and tick labels.
    pub ticks: Ticks,
    /// Number of major ticks for automatic ticks and range detection.
    pub major_ticks: usize,
    /// Number of minor subdivisions per major tick.
    pub minor_ticks: usize,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            min: f64::NAN,
            max: f64::NAN,
            flip: false,
            transform: Transform::Identity,
            ticks: Ticks::Automatic,
            major_ticks: 5,
            minor_ticks: 2,
        }
    }
}

impl Axis {
    /// An axis with unset bounds, identity transform, and automatic ticks.
    pub fn new() -> Self {
        Self::default()
    }

    /// An axis pinned to `[min, max]`.
    pub fn with_range(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Sets the flip flag.
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Sets the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the tick generator.
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the major and minor tick counts.
    pub fn with_tick_counts(mut self, major: usize, minor: usize) -> Self {
        self.major_ticks = major;
        self.minor_ticks = minor;
        self
    }

    /// Returns `true` once both bounds are set.
    pub fn is_valid(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan()
    }

    /// Widens the tracked range to cover `[min, max]`.
    ///
    /// An unset bound is replaced outright; a NaN input never widens a set bound.
    pub fn include(&mut self, min: f64, max: f64) {
        // `f64::min`/`f64::max` return the non-NaN operand.
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    /// The `(low, high)` pair that maps to `(screen_min, screen_max)`, honoring `flip`.
    pub fn low_high(&self) -> Result<(f64, f64), AxisError> {
        if !self.is_valid() {
            return Err(AxisError::Unset {
                min: self.min,
                max: self.max,
            });
        }
        if self.min == self.max {
            return Err(AxisError::Degenerate { value: self.min });
        }
        if self.flip {
            Ok((self.max, self.min))
        } else {
            Ok((self.min, self.max))
        }
    }

    /// Maps a data value into `[screen_min, screen_max]`.
    pub fn to_canvas(
        &self,
        value: f64,
        screen_min: f64,
        screen_max: f64,
    ) -> Result<f64, AxisError> {
        let (low, high) = self.low_high()?;
        let t = self.transform.normalize(low, high, value)?;
        Ok(screen_min + t * (screen_max - screen_min))
    }

    /// Maps a canvas position back into data space; the inverse of [`Axis::to_canvas`].
    pub fn from_canvas(
        &self,
        screen: f64,
        screen_min: f64,
        screen_max: f64,
    ) -> Result<f64, AxisError> {
        let (low, high) = self.low_high()?;
        if screen_min == screen_max {
            return Err(AxisError::DegenerateScreen);
        }
        let t = (screen - screen_min) / (screen_max - screen_min);
        self.transform.denormalize(low, high, t)
    }

    /// Runs the axis's tick generator.
    pub fn ticks(&self) -> Result<Vec<Tick>, AxisError> {
        self.ticks.generate(self)
    }
}
