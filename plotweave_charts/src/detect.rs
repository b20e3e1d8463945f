// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range auto-detection.

use tracing::debug;

use crate::axis::Axis;
use crate::nice::nice_bounds;
use crate::stats::Stats;

/// Fills in the unset bounds of `x` and `y` from the combined element extent.
///
/// Each detected range is widened to nice bounds using the axis's own tick counts. Bounds
/// the caller already set are kept. Bounds that are still unset afterwards default to
/// `0` and `1`.
pub fn detect_axes(x: &Axis, y: &Axis, stats: Option<Stats>) -> (Axis, Axis) {
    let stats = stats.unwrap_or(Stats::NAN);
    let x = detect_axis(x, stats.min.x, stats.max.x);
    let y = detect_axis(y, stats.min.y, stats.max.y);
    debug!(
        x_min = x.min,
        x_max = x.max,
        y_min = y.min,
        y_max = y.max,
        "detected axes"
    );
    (x, y)
}

fn detect_axis(axis: &Axis, min: f64, max: f64) -> Axis {
    let mut span = Axis::new();
    span.include(min, max);
    let (mut low, mut high) = (span.min, span.max);

    if low.is_finite() && high.is_finite() {
        if low == high {
            low -= 0.5;
            high += 0.5;
        }
        let nice = nice_bounds(low, high, axis.major_ticks, axis.minor_ticks);
        debug!(
            low,
            high,
            nice_min = nice.min,
            nice_max = nice.max,
            spacing = nice.spacing,
            "nice bounds"
        );
        low = nice.min;
        high = nice.max;
    }

    let mut out = axis.clone();
    if out.min.is_nan() {
        out.min = if low.is_finite() { low } else { 0.0 };
    }
    if out.max.is_nan() {
        out.max = if high.is_finite() { high } else { 1.0 };
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use plotweave_core::Point;

    use super::*;

    fn extent(min: (f64, f64), max: (f64, f64)) -> Option<Stats> {
        Some(Stats {
            min: min.into(),
            max: max.into(),
            ..Stats::NAN
        })
    }

    #[test]
    fn unset_axes_snap_to_nice_bounds() {
        let stats = extent((0.3, -3.2), (9.7, 47.0));
        let x = Axis::new().with_tick_counts(2, 1);
        let y = Axis::new().with_tick_counts(5, 2);
        let (x, y) = detect_axes(&x, &y, stats);
        assert_eq!((x.min, x.max), (0.0, 10.0));
        assert_eq!((y.min, y.max), (-10.0, 50.0));
    }

    #[test]
    fn pinned_bounds_win() {
        let stats = extent((0.3, 0.3), (9.7, 9.7));
        let x = Axis::with_range(-5.0, f64::NAN).with_tick_counts(2, 1);
        let (x, _) = detect_axes(&x, &Axis::new(), stats);
        assert_eq!((x.min, x.max), (-5.0, 10.0));
    }

    #[test]
    fn no_data_defaults_to_unit_range() {
        let (x, y) = detect_axes(&Axis::new(), &Axis::new(), None);
        assert_eq!((x.min, x.max), (0.0, 1.0));
        assert_eq!((y.min, y.max), (0.0, 1.0));
    }

    #[test]
    fn single_value_is_widened() {
        let stats = Some(Stats {
            min: Point::new(3.0, 0.0),
            max: Point::new(3.0, 1.0),
            ..Stats::NAN
        });
        let (x, _) = detect_axes(&Axis::new(), &Axis::new(), stats);
        assert!(x.min < 3.0 && x.max > 3.0, "{x:?}");
        assert!(x.low_high().is_ok());
    }

    #[test]
    fn set_axes_are_untouched() {
        let x = Axis::with_range(2.0, 3.0);
        let (out, _) = detect_axes(&x, &Axis::new(), extent((0.0, 0.0), (100.0, 1.0)));
        assert_eq!((out.min, out.max), (2.0, 3.0));
    }
}
