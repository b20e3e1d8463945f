// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-agnostic building blocks for Plotweave.
//!
//! This crate holds everything a rendering backend needs and nothing it doesn't:
//! - **Geometry**: [`Point`] and [`Rect`] in canvas units, with subdivision helpers.
//! - **Styles**: [`Style`], an opaque paint/text payload attached to draw commands.
//! - **Scenes**: [`Scene`], a tree of offset, optionally clipped regions with integer
//!   z-layers, walked in a fixed order by [`Scene::walk`].
//!
//! Axes, transforms, and chart elements live in `plotweave_charts`, which writes into a
//! [`Scene`] through [`RegionMut`] handles.
//!
//! Text shaping is out of scope; text commands store unshaped strings.

#![no_std]

extern crate alloc;

mod geom;
mod scene;
mod style;

pub use geom::{GeomError, Length, Point, Rect, points_from_coords, points_from_xy};
pub use scene::{
    DrawCommand, Item, PolyCommand, Region, RegionId, RegionMut, Scene, SceneError,
    SceneVisitor, TextCommand,
};
pub use style::Style;
