// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" numbers for axis bounds and tick spacing.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Snaps `span` to `m * 10^e` with `m` in `{1, 2, 5, 10}`.
///
/// With `round`, the mantissa is rounded to the nearest nice value (thresholds `1.5`, `3`,
/// `7`). Without it, the mantissa is taken outward to the next nice value at or above it.
///
/// Non-finite or non-positive spans are returned unchanged.
pub fn nice_number(span: f64, round: bool) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return span;
    }
    let exp = span.log10().floor();
    let base = 10_f64.powf(exp);
    let frac = span / base;
    let nice = if round {
        if frac < 1.5 {
            1.0
        } else if frac < 3.0 {
            2.0
        } else if frac < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// A nice `(min, max)` pair together with the tick spacing it was snapped to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NiceBounds {
    /// Lower bound, a multiple of `spacing` at or below the input minimum.
    pub min: f64,
    /// Upper bound, a multiple of `spacing` at or above the input maximum.
    pub max: f64,
    /// Tick spacing.
    pub spacing: f64,
}

/// Expands `[min, max]` outward to multiples of a nice tick spacing.
///
/// The spacing targets `major_ticks * minor_ticks - 1` intervals across the nice span.
pub fn nice_bounds(min: f64, max: f64, major_ticks: usize, minor_ticks: usize) -> NiceBounds {
    let span = nice_number(max - min, false);
    let intervals = (major_ticks * minor_ticks).saturating_sub(1).max(1);
    let spacing = nice_number(span / intervals as f64, true);
    NiceBounds {
        min: (min / spacing).floor() * spacing,
        max: (max / spacing).ceil() * spacing,
        spacing,
    }
}
