// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end rendering tests across axes, elements, and the scene.

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use plotweave_core::{DrawCommand, Item, Point, Region, RegionId, Scene, SceneVisitor};

use crate::{
    Axis, AxisError, Density, Elements, Grid, HStack, Label, Plot, PlotError, TickLabels, Tick,
    Ticks, Transform, Violin, ViolinSide, z_order,
};

#[derive(Debug, PartialEq)]
enum Kind {
    Poly,
    Text(String),
}

/// Records `(z_index of the innermost region, command kind)` in emission order.
#[derive(Default)]
struct Emitted {
    stack: Vec<i32>,
    out: Vec<(i32, Kind)>,
}

impl SceneVisitor for Emitted {
    fn enter_region(&mut self, _: RegionId, region: &Region) {
        self.stack.push(region.z_index());
    }

    fn command(&mut self, _: RegionId, command: &DrawCommand) {
        let z = self.stack.last().copied().unwrap_or(0);
        let kind = match command {
            DrawCommand::Poly(_) => Kind::Poly,
            DrawCommand::Text(t) => Kind::Text(t.text.clone()),
        };
        self.out.push((z, kind));
    }

    fn exit_region(&mut self, _: RegionId, _: &Region) {
        self.stack.pop();
    }
}

fn emitted(scene: &Scene) -> Vec<(i32, Kind)> {
    let mut v = Emitted::default();
    scene.walk(&mut v);
    v.out
}

fn samples() -> Vec<f64> {
    vec![1.0, 2.0, 2.5, 3.0, 3.0, 3.5, 4.0, 6.0, 9.0]
}

#[test]
fn layers_order_output_regardless_of_insertion() {
    let mut plot = Plot::new().with_size(Point::new(200.0, 100.0));
    plot.add(Label::x_label("value"));
    plot.add(TickLabels::x_only());
    plot.add(Density::new(&samples()));
    plot.add(Grid::new());
    let scene = plot.render().unwrap();

    let out = emitted(&scene);
    let zs: Vec<i32> = out.iter().map(|(z, _)| *z).collect();
    let mut sorted = zs.clone();
    sorted.sort_unstable();
    assert_eq!(zs, sorted, "emission is not layer ordered: {zs:?}");

    assert_eq!(out[0], (z_order::BACKGROUND, Kind::Poly));
    assert!(out.contains(&(z_order::SERIES, Kind::Poly)));
    assert_eq!(
        out.last(),
        Some(&(z_order::LABELS, Kind::Text(String::from("value"))))
    );
    assert!(
        out.iter()
            .any(|(z, k)| *z == z_order::TICK_LABELS && *k == Kind::Text(String::from("1")))
    );
}

#[test]
fn detection_uses_a_copy() {
    let mut plot = Plot::new();
    plot.add(Density::new(&samples()));
    let (x, y) = plot.detected_axes();
    assert!(x.min <= 1.0 && x.max >= 9.0, "{x:?}");
    assert_eq!((y.min, y.max), (0.0, 1.0));

    plot.render().unwrap();
    assert!(!plot.x.is_valid());
    assert!(!plot.y.is_valid());
}

#[test]
fn pinned_bounds_survive_detection() {
    let mut plot = Plot::new().with_x(Axis::with_range(-20.0, f64::NAN));
    plot.add(Density::new(&samples()));
    let (x, _) = plot.detected_axes();
    assert_eq!(x.min, -20.0);
    assert!(x.max >= 9.0);
}

#[test]
fn degenerate_axis_fails_the_render() {
    let mut plot = Plot::new()
        .with_x(Axis::with_range(3.0, 3.0))
        .with_y(Axis::with_range(0.0, 1.0));
    plot.add(Density::new(&samples()));
    assert_eq!(
        plot.render().unwrap_err(),
        PlotError::Axis(AxisError::Degenerate { value: 3.0 })
    );
}

#[test]
fn violins_in_columns() {
    let mut plot = Plot::new()
        .with_size(Point::new(200.0, 100.0))
        .with_x(Axis::with_range(-1.0, 1.0));
    plot.add(HStack::new(
        Elements::new()
            .with(Violin::new(&samples()).with_side(ViolinSide::Symmetric))
            .with(Violin::new(&[5.0, 5.5, 7.0]).with_side(ViolinSide::Symmetric)),
    ));
    let (_, y) = plot.detected_axes();
    assert!(y.min <= 1.0 && y.max >= 9.0, "{y:?}");

    let scene = plot.render().unwrap();
    let root = scene.region(Scene::ROOT).unwrap();
    assert_eq!(root.items().len(), 2, "one column region per violin");
    for item in root.items() {
        let Item::Region(id) = item else {
            panic!("expected a column region");
        };
        let column = scene.region(*id).unwrap();
        assert_eq!(column.bounds().width(), 100.0);
        let [Item::Draw(DrawCommand::Poly(outline))] = column.items() else {
            panic!("expected one outline per column");
        };
        // Symmetric outlines are centered on the middle of their column.
        let (min, max) = outline
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            });
        assert!((min + max - 100.0).abs() < 1e-9, "{min} {max}");
    }
}

#[test]
fn manual_ticks_follow_a_percentile_axis() {
    let y = Axis::with_range(0.0, 0.999)
        .with_transform(Transform::percentile(3))
        .with_ticks(Ticks::Manual(vec![
            Tick::major(0.9, "90%"),
            Tick::major(0.99, "99%"),
        ]));
    let mut plot = Plot::new()
        .with_size(Point::new(100.0, 90.0))
        .with_x(Axis::with_range(0.0, 1.0))
        .with_y(y);
    plot.add(TickLabels::y_only());
    let scene = plot.render().unwrap();

    let root = scene.region(Scene::ROOT).unwrap();
    let (_, layer) = root.layers()[0];
    let at: Vec<f64> = scene
        .region(layer)
        .unwrap()
        .items()
        .iter()
        .filter_map(|item| match item {
            Item::Draw(DrawCommand::Text(t)) => Some(t.at.y),
            _ => None,
        })
        .collect();
    assert_eq!(at.len(), 2);
    assert!((at[0] - 30.0).abs() < 1e-9, "{at:?}");
    assert!((at[1] - 60.0).abs() < 1e-9, "{at:?}");
}
