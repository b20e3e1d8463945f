// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw styles attached to scene commands.
//!
//! The composition tree treats a [`Style`] as an opaque payload. The only question it
//! ever asks is [`Style::is_empty`], which chart elements use to decide whether to fall
//! back to a theme default.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use smallvec::SmallVec;

use crate::geom::{Length, Point};

/// Stroke, fill, and text settings for a draw command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Stroke paint (lines, text outline color).
    pub stroke: Option<Color>,
    /// Fill paint (areas, glyph fill).
    pub fill: Option<Color>,
    /// Stroke width for polylines, font size for text.
    pub size: Length,

    /// Dash pattern lengths; empty means solid.
    pub dash: SmallVec<[Length; 4]>,
    /// Offset into the dash pattern.
    pub dash_offset: Length,

    /// Font family for text.
    pub font: Option<String>,
    /// Text rotation in degrees.
    pub rotation: f64,
    /// Text anchor in unit coordinates, each axis in `-1..=1` (`0` is centered).
    pub origin: Point,

    /// Optional class hint for backends that support it (e.g. CSS classes).
    pub class: Option<String>,
}

impl Style {
    /// A stroke-only style.
    pub fn stroked(color: Color, size: Length) -> Self {
        Self {
            stroke: Some(color),
            size,
            ..Self::default()
        }
    }

    /// A fill-only style.
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    /// Returns `true` if no stroke, fill, or size has been set.
    pub fn is_empty(&self) -> bool {
        self.stroke.is_none() && self.fill.is_none() && self.size == 0.0
    }

    /// Returns `self`, or `fallback` when `self` is empty.
    pub fn or<'a>(&'a self, fallback: &'a Self) -> &'a Self {
        if self.is_empty() { fallback } else { self }
    }

    /// Sets the stroke paint.
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Sets the stroke width / font size.
    pub fn with_size(mut self, size: Length) -> Self {
        self.size = size;
        self
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: impl IntoIterator<Item = Length>) -> Self {
        self.dash = dash.into_iter().collect();
        self
    }

    /// Sets the font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the text rotation in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Sets the text anchor.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the class hint.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn emptiness_ignores_text_settings() {
        let s = Style::default().with_font("serif").with_origin(Point::new(0.0, -1.0));
        assert!(s.is_empty());
        assert!(!Style::default().with_size(1.0).is_empty());
        assert!(!Style::filled(css::WHITE).is_empty());
    }

    #[test]
    fn or_falls_back_only_when_empty() {
        let theme = Style::stroked(css::BLACK, 1.0);
        let own = Style::stroked(css::RED, 2.0);
        assert_eq!(Style::default().or(&theme), &theme);
        assert_eq!(own.or(&theme), &own);
    }
}
