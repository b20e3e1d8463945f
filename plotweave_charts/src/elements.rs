// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Element`] trait and layout containers.
//!
//! Containers carve their region into sub-regions with
//! [`RegionMut::context`] and draw each child into its own cell. They forward the combined
//! [`Stats`] of their children, so a stack of densities still drives range detection.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use plotweave_core::{Length, Rect, RegionMut};

use crate::error::PlotError;
use crate::plot::PlotFrame;
use crate::stats::{Stats, maximal_stats};

/// Something that can be drawn into a plot region.
pub trait Element: fmt::Debug {
    /// Draws into `region` using the resolved axes and theme in `plot`.
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError>;

    /// The data extent for range detection; `None` for elements without data.
    fn stats(&self) -> Option<Stats> {
        None
    }
}

/// An ordered group of elements drawn into the same region.
#[derive(Debug, Default)]
pub struct Elements(Vec<Box<dyn Element>>);

impl Elements {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element.
    pub fn add(&mut self, element: impl Element + 'static) {
        self.0.push(Box::new(element));
    }

    /// Appends an already boxed element.
    pub fn push(&mut self, element: Box<dyn Element>) {
        self.0.push(element);
    }

    /// Builder form of [`Elements::add`].
    pub fn with(mut self, element: impl Element + 'static) -> Self {
        self.add(element);
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Element> {
        self.0.iter().map(|e| &**e)
    }
}

impl From<Vec<Box<dyn Element>>> for Elements {
    fn from(elements: Vec<Box<dyn Element>>) -> Self {
        Self(elements)
    }
}

impl Element for Elements {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        for element in &self.0 {
            element.draw(plot, region)?;
        }
        Ok(())
    }

    fn stats(&self) -> Option<Stats> {
        maximal_stats(self.0.iter().filter_map(|e| e.stats()))
    }
}

/// Draws its children into an inset sub-region.
#[derive(Debug, Default)]
pub struct Margin {
    /// Left/top inset in `amount.min`, right/bottom inset in `amount.max`.
    pub amount: Rect,
    /// Children.
    pub elements: Elements,
}

impl Margin {
    /// Wraps `elements` with the given inset.
    pub fn new(amount: Rect, elements: Elements) -> Self {
        Self { amount, elements }
    }
}

impl Element for Margin {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let bounds = region.bounds().inset(self.amount);
        self.elements.draw(plot, &mut region.context(bounds))
    }

    fn stats(&self) -> Option<Stats> {
        self.elements.stats()
    }
}

/// Stacks children top to bottom in equal-height rows.
#[derive(Debug, Default)]
pub struct VStack {
    /// Inset applied to every row.
    pub margin: Rect,
    /// Children, one per row.
    pub elements: Elements,
}

impl VStack {
    /// A stack of `elements` with no margin.
    pub fn new(elements: Elements) -> Self {
        Self {
            margin: Rect::default(),
            elements,
        }
    }

    /// Sets the per-row inset.
    pub fn with_margin(mut self, margin: Rect) -> Self {
        self.margin = margin;
        self
    }
}

impl Element for VStack {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let bounds = region.bounds();
        let n = self.elements.len();
        for (i, element) in self.elements.iter().enumerate() {
            let cell = bounds.row(i, n).inset(self.margin);
            element.draw(plot, &mut region.context(cell))?;
        }
        Ok(())
    }

    fn stats(&self) -> Option<Stats> {
        self.elements.stats()
    }
}

/// Places children left to right in equal-width columns.
#[derive(Debug, Default)]
pub struct HStack {
    /// Inset applied to every column.
    pub margin: Rect,
    /// Children, one per column.
    pub elements: Elements,
}

impl HStack {
    /// A stack of `elements` with no margin.
    pub fn new(elements: Elements) -> Self {
        Self {
            margin: Rect::default(),
            elements,
        }
    }

    /// Sets the per-column inset.
    pub fn with_margin(mut self, margin: Rect) -> Self {
        self.margin = margin;
        self
    }
}

impl Element for HStack {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let bounds = region.bounds();
        let n = self.elements.len();
        for (i, element) in self.elements.iter().enumerate() {
            let cell = bounds.column(i, n).inset(self.margin);
            element.draw(plot, &mut region.context(cell))?;
        }
        Ok(())
    }

    fn stats(&self) -> Option<Stats> {
        self.elements.stats()
    }
}

/// Places children left to right with fixed or flexible widths.
///
/// A cell with a positive width gets exactly that width. The width left over is shared
/// equally by the cells added with a width of `0`.
#[derive(Debug, Default)]
pub struct HFlex {
    /// Inset applied to every cell.
    pub margin: Rect,
    cells: Vec<(Length, Box<dyn Element>)>,
}

impl HFlex {
    /// An empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell; `width == 0` makes it flexible.
    pub fn add(&mut self, width: Length, element: impl Element + 'static) {
        self.cells.push((width, Box::new(element)));
    }

    /// Builder form of [`HFlex::add`].
    pub fn with(mut self, width: Length, element: impl Element + 'static) -> Self {
        self.add(width, element);
        self
    }

    /// Sets the per-cell inset.
    pub fn with_margin(mut self, margin: Rect) -> Self {
        self.margin = margin;
        self
    }

    fn widths(&self, total: Length) -> Vec<Length> {
        let fixed: Length = self.cells.iter().map(|(w, _)| w.max(0.0)).sum();
        let flexible = self.cells.iter().filter(|(w, _)| *w <= 0.0).count();
        let share = if flexible > 0 {
            ((total - fixed) / flexible as f64).max(0.0)
        } else {
            0.0
        };
        self.cells
            .iter()
            .map(|(w, _)| if *w > 0.0 { *w } else { share })
            .collect()
    }
}

impl Element for HFlex {
    fn draw(&self, plot: &PlotFrame<'_>, region: &mut RegionMut<'_>) -> Result<(), PlotError> {
        let bounds = region.bounds();
        let mut x = bounds.min.x;
        for ((_, element), width) in self.cells.iter().zip(self.widths(bounds.width())) {
            let cell = Rect::new(x, bounds.min.y, x + width, bounds.max.y).inset(self.margin);
            element.draw(plot, &mut region.context(cell))?;
            x += width;
        }
        Ok(())
    }

    fn stats(&self) -> Option<Stats> {
        maximal_stats(self.cells.iter().filter_map(|(_, e)| e.stats()))
    }
}
