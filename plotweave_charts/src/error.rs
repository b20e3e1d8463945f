// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for axis mapping and plot drawing.

use plotweave_core::{GeomError, SceneError};
use thiserror::Error;

/// Errors raised when an axis cannot map between data and canvas space.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AxisError {
    /// At least one bound is still NaN; set the bounds or run range detection first.
    #[error("axis bounds are unset (min = {min}, max = {max})")]
    Unset {
        /// Current minimum.
        min: f64,
        /// Current maximum.
        max: f64,
    },
    /// `min == max`, so positions cannot be normalized.
    #[error("axis range is empty (min = max = {value})")]
    Degenerate {
        /// The shared bound.
        value: f64,
    },
    /// The transform maps both bounds to the same (or a non-finite) value.
    #[error("transformed axis range is empty or non-finite")]
    DegenerateTransform,
    /// `screen_min == screen_max` on an inverse mapping.
    #[error("screen interval is empty")]
    DegenerateScreen,
}

/// Errors raised while drawing a plot into a scene.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum PlotError {
    /// Axis mapping failed.
    #[error(transparent)]
    Axis(#[from] AxisError),
    /// Scene construction failed.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// Geometry input was malformed.
    #[error(transparent)]
    Geom(#[from] GeomError),
}
