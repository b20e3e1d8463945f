// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis transforms.
//!
//! A [`Transform`] reparameterizes the normalized position of a value between an axis's
//! `low` and `high` bounds. Every variant is strictly monotonic and has an exact inverse,
//! so `denormalize(normalize(v)) == v` up to floating-point error.
//!
//! Transforms are owned by value by the axis that uses them. The log1p variant caches its
//! transformed bounds in a [`Cell`], keyed by the raw bounds it last saw.

use alloc::sync::Arc;
use core::cell::Cell;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::AxisError;

/// A bidirectional mapping between an axis's data space and the unit interval.
#[derive(Clone, Debug, Default)]
pub enum Transform {
    /// Canvas position is linear in the data value.
    #[default]
    Identity,
    /// An arbitrary monotonic `[0, 1] -> [0, 1]` warp applied after linear normalization.
    ScreenWarp(ScreenWarp),
    /// Symmetric `log1p` compression that handles negative, zero, and positive values.
    Log1p(Log1p),
    /// Spreads out tail percentiles near `1.0`.
    Percentile(Percentile),
}

impl Transform {
    /// A symmetric-log transform with the given compression.
    ///
    /// A negative `compress` inverts which end is compressed. Zero yields [`Transform::Identity`].
    pub fn log1p(compress: f64) -> Self {
        if compress == 0.0 {
            return Self::Identity;
        }
        Self::Log1p(Log1p::new(compress))
    }

    /// A screen-space warp `t -> log1p(t * c) / log1p(c)`.
    ///
    /// A negative `compress` swaps the warp and its inverse. Zero yields
    /// [`Transform::Identity`].
    pub fn screen_log1p(compress: f64) -> Self {
        if compress == 0.0 {
            return Self::Identity;
        }
        let c = compress.abs();
        let mul = 1.0 / c.ln_1p();
        let forward = move |t: f64| (t * c).ln_1p() * mul;
        let inverse = move |t: f64| ((c + 1.0).powf(t) - 1.0) / c;
        let warp = if compress < 0.0 {
            ScreenWarp::new(inverse, forward)
        } else {
            ScreenWarp::new(forward, inverse)
        };
        Self::ScreenWarp(warp)
    }

    /// A percentile transform resolving `levels` nines (e.g. `3` spreads out `99.9%`).
    pub fn percentile(levels: u32) -> Self {
        Self::Percentile(Percentile::new(levels))
    }

    /// Maps `v` to its normalized position between `low` and `high`.
    ///
    /// `low` and `high` are the (already flip-resolved) raw axis bounds and must differ.
    pub fn normalize(&self, low: f64, high: f64, v: f64) -> Result<f64, AxisError> {
        match self {
            Self::Identity => Ok((v - low) / (high - low)),
            Self::ScreenWarp(w) => Ok((w.forward)((v - low) / (high - low))),
            Self::Log1p(tx) => {
                let (tl, th) = tx.bounds(low, high)?;
                Ok((tx.forward(v) - tl) / (th - tl))
            }
            Self::Percentile(tx) => {
                let (tl, th) = tx.bounds(low, high)?;
                Ok((tx.forward(v) - tl) / (th - tl))
            }
        }
    }

    /// Maps a normalized position back to a data value; the inverse of [`Self::normalize`].
    pub fn denormalize(&self, low: f64, high: f64, t: f64) -> Result<f64, AxisError> {
        match self {
            Self::Identity => Ok(low + t * (high - low)),
            Self::ScreenWarp(w) => Ok(low + (w.inverse)(t) * (high - low)),
            Self::Log1p(tx) => {
                let (tl, th) = tx.bounds(low, high)?;
                Ok(tx.inverse(tl + t * (th - tl)))
            }
            Self::Percentile(tx) => {
                let (tl, th) = tx.bounds(low, high)?;
                Ok(tx.inverse(tl + t * (th - tl)))
            }
        }
    }

    /// Returns `true` for the linear identity mapping.
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

type WarpFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A monotonic warp of the unit interval and its inverse.
#[derive(Clone)]
pub struct ScreenWarp {
    forward: WarpFn,
    inverse: WarpFn,
}

impl ScreenWarp {
    /// Creates a warp from a forward function and its inverse.
    ///
    /// Both must be monotonic on `[0, 1]`, map `0 -> 0` and `1 -> 1`, and invert each other.
    pub fn new(
        forward: impl Fn(f64) -> f64 + Send + Sync + 'static,
        inverse: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            forward: Arc::new(forward),
            inverse: Arc::new(inverse),
        }
    }
}

impl core::fmt::Debug for ScreenWarp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScreenWarp").finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct BoundsCache {
    low: f64,
    high: f64,
    t_low: f64,
    t_high: f64,
}

/// `sign(v) * log1p(|v| * c) / log1p(c)`.
#[derive(Clone, Debug)]
pub struct Log1p {
    invert: bool,
    compress: f64,
    mul: f64,
    cache: Cell<Option<BoundsCache>>,
}

impl Log1p {
    fn new(compress: f64) -> Self {
        let c = compress.abs();
        Self {
            invert: compress < 0.0,
            compress: c,
            mul: 1.0 / c.ln_1p(),
            cache: Cell::new(None),
        }
    }

    fn log(&self, v: f64) -> f64 {
        if v == 0.0 {
            0.0
        } else if v < 0.0 {
            -(-v * self.compress).ln_1p() * self.mul
        } else {
            (v * self.compress).ln_1p() * self.mul
        }
    }

    fn exp(&self, v: f64) -> f64 {
        let magnitude = ((self.compress + 1.0).powf(v.abs()) - 1.0) / self.compress;
        if v < 0.0 { -magnitude } else { magnitude }
    }

    fn forward(&self, v: f64) -> f64 {
        if self.invert { self.exp(v) } else { self.log(v) }
    }

    fn inverse(&self, v: f64) -> f64 {
        if self.invert { self.log(v) } else { self.exp(v) }
    }

    fn bounds(&self, low: f64, high: f64) -> Result<(f64, f64), AxisError> {
        if let Some(c) = self.cache.get()
            && c.low == low
            && c.high == high
        {
            return Ok((c.t_low, c.t_high));
        }
        let (t_low, t_high) = checked_bounds(self.forward(low), self.forward(high))?;
        self.cache.set(Some(BoundsCache {
            low,
            high,
            t_low,
            t_high,
        }));
        Ok((t_low, t_high))
    }

    #[cfg(test)]
    fn cached(&self) -> Option<(f64, f64)> {
        self.cache.get().map(|c| (c.low, c.high))
    }
}

/// `-log(1 - v) / log(1 / base)` with `base = 0.1^levels`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentile {
    levels: u32,
    base: f64,
    mul: f64,
}

impl Percentile {
    fn new(levels: u32) -> Self {
        let levels = levels.max(1);
        let base = 0.1_f64.powf(f64::from(levels));
        Self {
            levels,
            base,
            mul: 1.0 / base.ln(),
        }
    }

    /// Number of nines this transform resolves.
    pub fn levels(&self) -> u32 {
        self.levels
    }

    fn forward(&self, v: f64) -> f64 {
        (1.0 - v).ln() * self.mul
    }

    fn inverse(&self, v: f64) -> f64 {
        1.0 - self.base.powf(v)
    }

    fn bounds(&self, low: f64, high: f64) -> Result<(f64, f64), AxisError> {
        checked_bounds(self.forward(low), self.forward(high))
    }
}

fn checked_bounds(t_low: f64, t_high: f64) -> Result<(f64, f64), AxisError> {
    let span = t_high - t_low;
    if !span.is_finite() || span == 0.0 {
        return Err(AxisError::DegenerateTransform);
    }
    Ok((t_low, t_high))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use proptest::prelude::*;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn identity_is_linear() {
        let tx = Transform::Identity;
        assert_eq!(tx.normalize(0.0, 10.0, 5.0).unwrap(), 0.5);
        assert_eq!(tx.denormalize(0.0, 10.0, 0.25).unwrap(), 2.5);
    }

    #[test]
    fn log1p_preserves_bounds() {
        let tx = Transform::log1p(2.0);
        assert_eq!(tx.normalize(0.0, 10.0, 0.0).unwrap(), 0.0);
        assert!(close(tx.normalize(0.0, 10.0, 10.0).unwrap(), 1.0));
        // Compression pushes the midpoint past the linear midpoint.
        assert!(tx.normalize(0.0, 10.0, 5.0).unwrap() > 0.5);
    }

    #[test]
    fn log1p_is_symmetric_around_zero() {
        let tx = Transform::log1p(3.0);
        let lo = tx.normalize(-10.0, 10.0, -4.0).unwrap();
        let hi = tx.normalize(-10.0, 10.0, 4.0).unwrap();
        assert!(close(lo + hi, 1.0));
        assert!(close(tx.normalize(-10.0, 10.0, 0.0).unwrap(), 0.5));
    }

    #[test]
    fn negative_compress_inverts_direction() {
        let tx = Transform::log1p(-2.0);
        assert!(tx.normalize(0.0, 10.0, 5.0).unwrap() < 0.5);
        assert!(Transform::log1p(0.0).is_identity());
    }

    #[test]
    fn log1p_cache_tracks_last_bounds() {
        let Transform::Log1p(tx) = Transform::log1p(2.0) else {
            unreachable!();
        };
        assert_eq!(tx.cached(), None);
        let a = tx.bounds(0.0, 10.0).unwrap();
        assert_eq!(tx.cached(), Some((0.0, 10.0)));
        assert_eq!(tx.bounds(0.0, 10.0).unwrap(), a);
        let b = tx.bounds(-5.0, 10.0).unwrap();
        assert_eq!(tx.cached(), Some((-5.0, 10.0)));
        assert!(b.0 < 0.0);
        assert_eq!(b.1, a.1);
    }

    #[test]
    fn cloned_transforms_do_not_share_cache() {
        let tx = Transform::log1p(2.0);
        tx.normalize(0.0, 10.0, 1.0).unwrap();
        let other = tx.clone();
        other.normalize(-100.0, 100.0, 1.0).unwrap();
        let (Transform::Log1p(a), Transform::Log1p(b)) = (&tx, &other) else {
            unreachable!();
        };
        assert_eq!(a.cached(), Some((0.0, 10.0)));
        assert_eq!(b.cached(), Some((-100.0, 100.0)));
    }

    #[test]
    fn percentile_spreads_the_tail() {
        let tx = Transform::percentile(3);
        let low = 0.0;
        let high = 0.999;
        assert!(close(tx.normalize(low, high, 0.0).unwrap(), 0.0));
        assert!(close(tx.normalize(low, high, 0.999).unwrap(), 1.0));
        // 90% sits at one third of the way for three levels.
        assert!(close(tx.normalize(low, high, 0.9).unwrap(), 1.0 / 3.0));
        assert!(close(tx.normalize(low, high, 0.99).unwrap(), 2.0 / 3.0));
    }

    #[test]
    fn percentile_rejects_full_range() {
        let tx = Transform::percentile(2);
        assert_eq!(
            tx.normalize(0.0, 1.0, 0.5),
            Err(AxisError::DegenerateTransform)
        );
    }

    #[test]
    fn screen_warp_ignores_bounds() {
        let tx = Transform::ScreenWarp(ScreenWarp::new(|t| t * t, |t: f64| t.sqrt()));
        assert_eq!(tx.normalize(0.0, 10.0, 5.0).unwrap(), 0.25);
        assert_eq!(tx.normalize(100.0, 110.0, 105.0).unwrap(), 0.25);
    }

    fn variants() -> [Transform; 6] {
        [
            Transform::Identity,
            Transform::screen_log1p(4.0),
            Transform::screen_log1p(-4.0),
            Transform::log1p(2.0),
            Transform::log1p(-0.5),
            Transform::percentile(3),
        ]
    }

    proptest! {
        #[test]
        fn round_trip_within_bounds(
            low in -100.0f64..0.5,
            width in 0.01f64..0.45,
            frac in 0.0f64..=1.0,
            flip in any::<bool>(),
        ) {
            let high = low + width;
            let (low, high) = if flip { (high, low) } else { (low, high) };
            let v = low + frac * (high - low);
            for tx in variants() {
                let t = tx.normalize(low, high, v).unwrap();
                let back = tx.denormalize(low, high, t).unwrap();
                prop_assert!(
                    (back - v).abs() <= 1e-6 * (1.0 + v.abs()),
                    "{tx:?}: {v} -> {t} -> {back}"
                );
            }
        }

        #[test]
        fn transforms_are_monotonic(a in 0.0f64..0.9, b in 0.0f64..0.9) {
            prop_assume!(a < b);
            for tx in variants() {
                let ta = tx.normalize(0.0, 0.9, a).unwrap();
                let tb = tx.normalize(0.0, 0.9, b).unwrap();
                prop_assert!(ta <= tb, "{tx:?}: {a} -> {ta}, {b} -> {tb}");
            }
        }
    }
}
