// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default styles for elements that don't carry their own.

use peniko::Color;
use peniko::color::palette::css;
use plotweave_core::Style;

/// Fallback styles passed to every element draw call.
///
/// Elements use their own [`Style`] when it is non-empty and borrow the matching theme
/// style otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Lines and curves.
    pub line: Style,
    /// Labels and titles.
    pub font: Style,
    /// Tick labels.
    pub font_small: Style,
    /// Filled shapes.
    pub fill: Style,
    /// Grid colors.
    pub grid: GridTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            line: Style::stroked(css::BLACK, 1.0),
            font: Style::filled(css::BLACK).with_size(12.0),
            font_small: Style::filled(css::BLACK).with_size(10.0),
            fill: Style::filled(css::WHITE).with_size(1.0),
            grid: GridTheme::default(),
        }
    }
}

/// Grid background and line colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTheme {
    /// Plot background.
    pub fill: Color,
    /// Major gridlines.
    pub major: Color,
    /// Minor gridlines.
    pub minor: Color,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba8(230, 230, 230, 255),
            major: Color::from_rgba8(255, 255, 255, 255),
            minor: Color::from_rgba8(255, 255, 255, 100),
        }
    }
}
