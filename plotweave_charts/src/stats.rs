// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data extents reported by chart elements.

use plotweave_core::Point;

/// The data extent of one chart element.
///
/// Used only for range detection; drawing never reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    /// The element's x values are categories rather than a continuum.
    pub discrete_x: bool,
    /// The element's y values are categories rather than a continuum.
    pub discrete_y: bool,
    /// Lower corner of the extent.
    pub min: Point,
    /// A representative central value (e.g. the median).
    pub center: Point,
    /// Upper corner of the extent.
    pub max: Point,
}

impl Stats {
    /// Stats with every coordinate NaN.
    pub const NAN: Self = Self {
        discrete_x: false,
        discrete_y: false,
        min: Point::NAN,
        center: Point::NAN,
        max: Point::NAN,
    };

    /// Widens `self` to cover `other`.
    ///
    /// NaN coordinates in `other` never widen a set coordinate, and a NaN coordinate in
    /// `self` is replaced outright. Discrete flags and the center are left alone.
    pub fn merge(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

/// The NaN-safe union of several element extents.
///
/// Discrete flags and the center come from the first entry. Returns `None` when `stats`
/// is empty.
pub fn maximal_stats(stats: impl IntoIterator<Item = Stats>) -> Option<Stats> {
    let mut stats = stats.into_iter();
    let mut acc = stats.next()?;
    for s in stats {
        acc.merge(&s);
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn extent(min: (f64, f64), max: (f64, f64)) -> Stats {
        Stats {
            min: min.into(),
            max: max.into(),
            ..Stats::NAN
        }
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(maximal_stats(vec![]), None);
    }

    #[test]
    fn union_skips_nan() {
        let a = Stats {
            discrete_x: true,
            ..extent((1.0, f64::NAN), (4.0, f64::NAN))
        };
        let b = extent((-2.0, 3.0), (2.0, 8.0));
        let s = maximal_stats(vec![a, b]).unwrap();
        assert!(s.discrete_x);
        assert_eq!(s.min, Point::new(-2.0, 3.0));
        assert_eq!(s.max, Point::new(4.0, 8.0));
    }

    #[test]
    fn nan_entries_do_not_shrink() {
        let s = maximal_stats(vec![extent((0.0, 0.0), (1.0, 1.0)), Stats::NAN]).unwrap();
        assert_eq!(s.min, Point::ZERO);
        assert_eq!(s.max, Point::new(1.0, 1.0));
    }
}
