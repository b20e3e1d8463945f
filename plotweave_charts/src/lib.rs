// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes, transforms, and chart elements for `plotweave_core` scenes.
//!
//! This crate turns data into scene commands:
//! - **Axes** map data values onto canvas intervals, optionally through a nonlinear
//!   [`Transform`], and produce [`Tick`]s.
//! - **Range detection** fills in unset axis bounds from element [`Stats`], snapped to
//!   nice numbers.
//! - **Density estimation** turns raw samples into smooth [`Density`] and [`Violin`] curves.
//! - **Elements** ([`Element`]) draw into [`plotweave_core::RegionMut`] handles; layout
//!   containers nest them.
//!
//! A [`Plot`] ties these together and renders into a [`plotweave_core::Scene`].
//!
//! The crate is `no_std` with `alloc`. Enable `std`, or keep the default `libm` feature, for
//! float math.

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod axis;
mod density;
mod detect;
mod elements;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod grid;
mod kde;
mod labels;
mod nice;
mod plot;
#[cfg(test)]
mod scenario_tests;
mod stats;
mod theme;
mod ticks;
mod transform;
mod violin;
mod z_order;

pub use axis::Axis;
pub use density::Density;
pub use detect::detect_axes;
pub use elements::{Element, Elements, HFlex, HStack, Margin, VStack};
pub use error::{AxisError, PlotError};
pub use grid::Grid;
pub use kde::{CurvePoint, DEFAULT_KERNEL, DensityCurve, SWEEP_STEP, Samples, cubic_pulse, sweep};
pub use labels::{Label, TickLabels, Textbox};
pub use nice::{NiceBounds, nice_bounds, nice_number};
pub use plot::{Plot, PlotFrame};
pub use stats::{Stats, maximal_stats};
pub use theme::{GridTheme, Theme};
pub use ticks::{Tick, Ticks};
pub use transform::{Log1p, Percentile, ScreenWarp, Transform};
pub use violin::{Violin, ViolinSide};
pub use z_order::*;
