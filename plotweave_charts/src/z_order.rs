// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conventional z-layers for chart elements.
//!
//! Elements draw into [`RegionMut::layer`](plotweave_core::RegionMut::layer) with these
//! indexes so a plot composes as background, grid, series, guides and labels no matter
//! which order the elements were added in.
//!
//! Layers below zero are emitted before a region's own commands; layer `0` is the region
//! itself.

/// Plot background fills.
pub const BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Series (densities, violins, and other data marks).
pub const SERIES: i32 = 0;

/// Tick labels.
pub const TICK_LABELS: i32 = 40;
/// Free-standing labels and titles.
pub const LABELS: i32 = 50;
