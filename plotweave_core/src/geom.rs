// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points and rectangles in canvas units.
//!
//! These are deliberately plain value types: every operation returns a new value and
//! nothing here knows about axes or data space. Conversions into `kurbo` types are provided
//! so renderers can hand geometry to the wider kurbo ecosystem.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Add, Neg, Sub};

use thiserror::Error;

/// A length in canvas units.
pub type Length = f64;

/// A 2-D point (or offset) in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: Length,
    /// Vertical coordinate.
    pub y: Length,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// A point with both coordinates unset.
    pub const NAN: Self = Self {
        x: f64::NAN,
        y: f64::NAN,
    };

    /// Creates a new point.
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are exactly zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Per-axis minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Per-axis maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Multiplies both coordinates by `v`.
    pub fn scale(self, v: f64) -> Self {
        Self::new(self.x * v, self.y * v)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// An axis-aligned rectangle given by its `min` and `max` corners.
///
/// Unlike `kurbo::Rect`, the corners are not normalized: a rectangle with `max < min` on
/// an axis is preserved as given, since subdivision and insets are defined in terms of the
/// corners rather than the extents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// The first corner (usually top-left).
    pub min: Point,
    /// The second corner (usually bottom-right).
    pub max: Point,
}

impl Rect {
    /// Creates a rectangle from corner coordinates.
    pub const fn new(x0: Length, y0: Length, x1: Length, y1: Length) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Creates a rectangle from two corners.
    pub const fn from_points(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a zero-based rectangle of the given size.
    pub const fn from_size(size: Point) -> Self {
        Self {
            min: Point::ZERO,
            max: size,
        }
    }

    /// Returns `true` if both corners are at the origin.
    pub fn is_empty(&self) -> bool {
        self.min.is_zero() && self.max.is_zero()
    }

    /// `max - min`.
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Horizontal extent.
    pub fn width(&self) -> Length {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> Length {
        self.max.y - self.min.y
    }

    /// The same size, moved so that `min` is at the origin.
    pub fn zero(&self) -> Self {
        Self::from_size(self.size())
    }

    /// Translates both corners by `by`.
    pub fn offset(&self, by: Point) -> Self {
        Self::from_points(self.min + by, self.max + by)
    }

    /// Moves both corners inward by `radius`.
    pub fn shrink(&self, radius: Point) -> Self {
        Self::from_points(self.min + radius, self.max - radius)
    }

    /// Insets each side independently.
    ///
    /// `by.min` is the left/top amount and `by.max` the right/bottom amount.
    pub fn inset(&self, by: Self) -> Self {
        Self::from_points(self.min + by.min, self.max - by.max)
    }

    /// Interpolates a location inside the rectangle.
    ///
    /// `u` is in unit coordinates: `0` maps to `min` and `1` maps to `max` on each axis.
    pub fn unit_location(&self, u: Point) -> Point {
        Point::new(
            lerp_unit(u.x, self.min.x, self.max.x),
            lerp_unit(u.y, self.min.y, self.max.y),
        )
    }

    /// Returns the closed outline of the rectangle (five points, first repeated last).
    pub fn points(&self) -> Vec<Point> {
        alloc::vec![
            self.min,
            Point::new(self.min.x, self.max.y),
            self.max,
            Point::new(self.max.x, self.min.y),
            self.min,
        ]
    }

    /// The `i`-th of `count` equal-width columns.
    ///
    /// A `count` of zero returns the rectangle unchanged.
    pub fn column(&self, i: usize, count: usize) -> Self {
        if count == 0 {
            return *self;
        }
        let w = self.width() / count as f64;
        let x0 = self.min.x + i as f64 * w;
        let x1 = self.min.x + (i + 1) as f64 * w;
        Self::new(x0, self.min.y, x1, self.max.y)
    }

    /// The `i`-th of `count` equal-height rows.
    ///
    /// A `count` of zero returns the rectangle unchanged.
    pub fn row(&self, i: usize, count: usize) -> Self {
        if count == 0 {
            return *self;
        }
        let h = self.height() / count as f64;
        let y0 = self.min.y + i as f64 * h;
        let y1 = self.min.y + (i + 1) as f64 * h;
        Self::new(self.min.x, y0, self.max.x, y1)
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(r.min.x, r.min.y, r.max.x, r.max.y)
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

fn lerp_unit(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Errors produced while building geometry from raw coordinates.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    /// A flat coordinate list did not contain whole `x, y` pairs.
    #[error("coordinate list has odd length {len}; expected x, y pairs")]
    OddCoordinateCount {
        /// Length of the rejected list.
        len: usize,
    },
}

/// Builds points from a flat `[x0, y0, x1, y1, ...]` list.
pub fn points_from_coords(coords: &[Length]) -> Result<Vec<Point>, GeomError> {
    if coords.len() % 2 != 0 {
        return Err(GeomError::OddCoordinateCount { len: coords.len() });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

/// Zips separate coordinate columns into points.
///
/// If one column is shorter, the missing coordinate defaults to the point index.
pub fn points_from_xy(xs: &[f64], ys: &[f64]) -> Vec<Point> {
    let n = xs.len().max(ys.len());
    (0..n)
        .map(|i| {
            let x = xs.get(i).copied().unwrap_or(i as f64);
            let y = ys.get(i).copied().unwrap_or(i as f64);
            Point::new(x, y)
        })
        .collect()
}
