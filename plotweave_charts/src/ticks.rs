// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::Axis;
use crate::error::AxisError;

/// A tick position in data space.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Data value.
    pub value: f64,
    /// Display label; empty for minor ticks.
    pub label: String,
    /// Minor ticks are drawn lighter and carry no label.
    pub minor: bool,
}

impl Tick {
    /// A labeled major tick.
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            minor: false,
        }
    }

    /// An unlabeled minor tick.
    pub fn minor(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
            minor: true,
        }
    }
}

/// How an axis produces its ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Ticks {
    /// Evenly spaced majors across `[min, max]` with minor subdivisions.
    #[default]
    Automatic,
    /// A fixed list, returned as given.
    ///
    /// Use this for transformed axes, where even spacing in data space is uneven on
    /// the canvas.
    Manual(Vec<Tick>),
}

impl Ticks {
    /// Produces the ticks for `axis`.
    ///
    /// Manual ticks never fail. Automatic ticks need a valid, non-degenerate range.
    pub fn generate(&self, axis: &Axis) -> Result<Vec<Tick>, AxisError> {
        match self {
            Self::Manual(ticks) => Ok(ticks.clone()),
            Self::Automatic => automatic_ticks(axis),
        }
    }
}

fn automatic_ticks(axis: &Axis) -> Result<Vec<Tick>, AxisError> {
    axis.low_high()?;
    let (min, max) = (axis.min, axis.max);
    let majors = axis.major_ticks;
    if majors == 0 {
        return Ok(Vec::new());
    }
    let minors = axis.minor_ticks.max(1);

    let major_spacing = (max - min) / majors as f64;
    let minor_spacing = major_spacing / minors as f64;
    let decimals = label_decimals(major_spacing);

    let mut ticks = Vec::with_capacity(majors * minors + 1);
    for i in 0..majors {
        let mut major = min + i as f64 * major_spacing;
        // Snap accumulated drift so a zero crossing reads as exactly zero.
        if major.abs() < major_spacing.abs() * 1e-9 {
            major = 0.0;
        }
        ticks.push(Tick::major(major, format_value(major, decimals)));
        for k in 1..minors {
            ticks.push(Tick::minor(major + k as f64 * minor_spacing));
        }
    }

    if min < 0.0 && 0.0 < max && !ticks.iter().any(|t| !t.minor && t.value == 0.0) {
        ticks.push(Tick::major(0.0, format_value(0.0, decimals)));
    }
    Ok(ticks)
}

fn label_decimals(spacing: f64) -> usize {
    let magnitude = spacing.abs().log10().floor();
    if !magnitude.is_finite() || magnitude >= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range"
    )]
    {
        (-magnitude).min(17.0) as usize
    }
}

fn format_value(v: f64, decimals: usize) -> String {
    // Avoid "-0" labels.
    let v = if v == 0.0 { 0.0 } else { v };
    let label = format!("{v:.decimals$}");
    match label.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => String::from(rest),
        _ => label,
    }
}
