// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kernel density estimation shared by [`Density`](crate::Density) and
//! [`Violin`](crate::Violin).
//!
//! The estimator sweeps a canvas axis in half-unit steps. At each step it maps a window of
//! `±kernel` canvas units back into data space and sums a cubic pulse over the samples that
//! fall inside the window. The curve is then normalized so its peak is exactly `1.0`.
//!
//! Samples are sorted once, so each window is found by advancing a cursor. Windows that move
//! backwards (a flipped axis) fall back to a binary search.

use alloc::vec::Vec;

use plotweave_core::Length;
use tracing::trace;

use crate::axis::Axis;
use crate::error::AxisError;

/// Default kernel half-width in canvas units.
pub const DEFAULT_KERNEL: Length = 4.0;

/// Distance between sweep positions in canvas units.
pub const SWEEP_STEP: Length = 0.5;

/// An owned, ascending copy of a sample set.
///
/// NaN values are dropped at construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    data: Vec<f64>,
}

impl Samples {
    /// Copies and sorts `values`.
    pub fn new(values: &[f64]) -> Self {
        let mut data: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        data.sort_unstable_by(f64::total_cmp);
        Self { data }
    }

    /// The sorted samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `(min, median, max)`, with the median taken by index. NaN when empty.
    pub fn extent(&self) -> (f64, f64, f64) {
        match (self.data.first(), self.data.last()) {
            (Some(&min), Some(&max)) => (min, self.data[self.data.len() / 2], max),
            _ => (f64::NAN, f64::NAN, f64::NAN),
        }
    }
}

impl From<&[f64]> for Samples {
    fn from(values: &[f64]) -> Self {
        Self::new(values)
    }
}

/// `1 - u²(3 - 2u)` for `u = |x - center| * inv_radius`, zero when `u > 1`.
///
/// Smooth at both the center and the edge of its support.
pub fn cubic_pulse(center: f64, inv_radius: f64, x: f64) -> f64 {
    let u = (x - center).abs() * inv_radius;
    if u > 1.0 {
        return 0.0;
    }
    1.0 - u * u * (3.0 - 2.0 * u)
}

/// One sweep position and its normalized density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    /// Position along the swept canvas axis.
    pub at: Length,
    /// Density in `[0, 1]`.
    pub density: f64,
}

/// A density curve normalized to a peak of `1.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DensityCurve {
    /// Sweep positions in ascending canvas order.
    pub points: Vec<CurvePoint>,
    /// The raw (unnormalized) peak; `0.0` when no window held a sample.
    pub peak: f64,
}

/// Estimates the density of `samples` along `axis` mapped onto `[0, extent]`.
///
/// `kernel` is the half-width of the window in canvas units; non-positive or NaN values
/// use [`DEFAULT_KERNEL`]. An empty sample set yields an all-zero curve.
pub fn sweep(
    samples: &Samples,
    axis: &Axis,
    extent: Length,
    kernel: Length,
) -> Result<DensityCurve, AxisError> {
    if !(extent > 0.0 && extent.is_finite()) {
        return Ok(DensityCurve::default());
    }
    let kernel = if kernel > 0.0 { kernel } else { DEFAULT_KERNEL };
    let data = samples.as_slice();

    let mut points = Vec::new();
    let mut index = 0;
    let mut previous_low = f64::NEG_INFINITY;
    let mut peak = 0.0_f64;
    let mut step = 0_u32;
    loop {
        let at = f64::from(step) * SWEEP_STEP;
        if at >= extent {
            break;
        }
        step += 1;

        let mut low = window_end(axis, at - kernel, extent)?;
        let mut high = window_end(axis, at + kernel, extent)?;
        if low > high {
            core::mem::swap(&mut low, &mut high);
        }

        if low < previous_low {
            index = data.partition_point(|v| *v < low);
        } else {
            while index < data.len() && data[index] < low {
                index += 1;
            }
        }
        previous_low = low;

        let center = (low + high) / 2.0;
        let inv_radius = 2.0 / (high - low);
        let density: f64 = data[index..]
            .iter()
            .take_while(|v| **v <= high)
            .map(|v| cubic_pulse(center, inv_radius, *v))
            .sum();
        peak = peak.max(density);
        points.push(CurvePoint { at, density });
    }

    if peak > 0.0 {
        for p in &mut points {
            p.density /= peak;
        }
    }
    trace!(steps = points.len(), samples = data.len(), peak, "density sweep");
    Ok(DensityCurve { points, peak })
}

/// Maps a window end back into data space.
///
/// Ends past the canvas may leave a screen warp's domain; those are clamped to the canvas.
fn window_end(axis: &Axis, canvas: Length, extent: Length) -> Result<f64, AxisError> {
    let v = axis.from_canvas(canvas, 0.0, extent)?;
    if v.is_finite() {
        return Ok(v);
    }
    axis.from_canvas(canvas.clamp(0.0, extent), 0.0, extent)
}
