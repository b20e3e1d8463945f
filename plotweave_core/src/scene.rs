// Copyright 2025 the Plotweave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layered composition tree.
//!
//! A [`Scene`] is an arena of [`Region`]s. Each region has bounds relative to its parent,
//! an optional clip flag, an ordered list of [`Item`]s (draw commands interleaved with
//! nested sub-regions), and a sorted list of z-layers.
//!
//! Emission order for a region is fixed and every backend must reproduce it:
//! 1. layers with a negative z-index, ascending,
//! 2. the region's own items, in insertion order,
//! 3. layers with a positive z-index, ascending.
//!
//! Layer `0` is the region itself, so content drawn through `layer(0)` interleaves with
//! content drawn directly.
//!
//! Renderers consume a finished scene through [`Scene::walk`] and never need to know
//! about axes, transforms, or density math.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::BezPath;
use smallvec::SmallVec;
use thiserror::Error;

use crate::geom::{Point, Rect};
use crate::style::Style;

/// Identifies a region within a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(usize);

impl RegionId {
    /// Returns the arena index of this region.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors returned while building a scene.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// A draw command was issued without any style.
    #[error("draw command has no style")]
    MissingStyle,
    /// The region id does not belong to this scene.
    #[error("unknown region {0:?}")]
    UnknownRegion(RegionId),
}

/// A stroked and/or filled polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyCommand {
    /// Vertices in the region's local coordinates.
    pub points: Vec<Point>,
    /// Paint settings.
    pub style: Style,
}

impl PolyCommand {
    /// Converts the polyline into an open `kurbo` path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter().copied();
        if let Some(first) = it.next() {
            path.move_to(kurbo::Point::from(first));
            for p in it {
                path.line_to(kurbo::Point::from(p));
            }
        }
        path
    }
}

/// A text placement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    /// Unshaped text.
    pub text: String,
    /// Anchor position in the region's local coordinates.
    pub at: Point,
    /// Font and paint settings.
    pub style: Style,
}

/// A primitive draw command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Polyline or polygon.
    Poly(PolyCommand),
    /// Text placement.
    Text(TextCommand),
}

/// One entry in a region's ordered item list.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// A draw command.
    Draw(DrawCommand),
    /// A nested sub-region created by `context` or `clip`.
    Region(RegionId),
}

/// A rectangular drawing region.
#[derive(Clone, Debug)]
pub struct Region {
    bounds: Rect,
    clip: bool,
    z_index: i32,
    items: Vec<Item>,
    layers: SmallVec<[(i32, RegionId); 2]>,
}

impl Region {
    fn new(bounds: Rect, clip: bool, z_index: i32) -> Self {
        Self {
            bounds,
            clip,
            z_index,
            items: Vec::new(),
            layers: SmallVec::new(),
        }
    }

    /// Bounds relative to the parent region.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether content outside `[0, size]` in local space must be hidden.
    pub fn clip(&self) -> bool {
        self.clip
    }

    /// The z-index this region was registered under (`0` for non-layer regions).
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Layers sorted by ascending z-index.
    pub fn layers(&self) -> &[(i32, RegionId)] {
        &self.layers
    }
}

/// Receives a scene in emission order.
///
/// All methods have empty defaults so visitors only implement what they need.
pub trait SceneVisitor {
    /// Called before any content of `region`.
    fn enter_region(&mut self, id: RegionId, region: &Region) {
        let _ = (id, region);
    }

    /// Called for each draw command, in emission order.
    fn command(&mut self, region: RegionId, command: &DrawCommand) {
        let _ = (region, command);
    }

    /// Called after all content of `region`.
    fn exit_region(&mut self, id: RegionId, region: &Region) {
        let _ = (id, region);
    }
}

/// The composition tree for a single rendering.
#[derive(Clone, Debug)]
pub struct Scene {
    regions: Vec<Region>,
}

impl Scene {
    /// The root region id.
    pub const ROOT: RegionId = RegionId(0);

    /// Creates a scene whose root region spans `size`.
    pub fn new(size: Point) -> Self {
        Self {
            regions: alloc::vec![Region::new(Rect::from_size(size), false, 0)],
        }
    }

    /// Total number of regions, including the root and all layers.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Looks up a region.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    /// Returns a mutable handle to the root region.
    pub fn root(&mut self) -> RegionMut<'_> {
        RegionMut {
            scene: self,
            id: Self::ROOT,
        }
    }

    /// Returns a mutable handle to an arbitrary region.
    pub fn region_mut(&mut self, id: RegionId) -> Result<RegionMut<'_>, SceneError> {
        if id.0 >= self.regions.len() {
            return Err(SceneError::UnknownRegion(id));
        }
        Ok(RegionMut { scene: self, id })
    }

    /// Visits the whole scene in emission order.
    pub fn walk(&self, visitor: &mut impl SceneVisitor) {
        self.walk_region(Self::ROOT, visitor);
    }

    fn walk_region(&self, id: RegionId, visitor: &mut impl SceneVisitor) {
        let region = &self.regions[id.0];
        visitor.enter_region(id, region);

        let split = region.layers.partition_point(|(z, _)| *z < 0);
        let (below, above) = region.layers.split_at(split);

        for &(_, layer) in below {
            self.walk_region(layer, visitor);
        }
        for item in &region.items {
            match item {
                Item::Draw(cmd) => visitor.command(id, cmd),
                Item::Region(child) => self.walk_region(*child, visitor),
            }
        }
        for &(_, layer) in above {
            self.walk_region(layer, visitor);
        }

        visitor.exit_region(id, region);
    }

    fn push_region(&mut self, region: Region) -> RegionId {
        let id = RegionId(self.regions.len());
        self.regions.push(region);
        id
    }
}

/// A mutable handle to one region of a [`Scene`].
///
/// Child handles borrow their parent, so a chart element can only write to one region
/// at a time; the tree itself stays acyclic because regions reference each other by id.
#[derive(Debug)]
pub struct RegionMut<'a> {
    scene: &'a mut Scene,
    id: RegionId,
}

impl RegionMut<'_> {
    /// The id of this region.
    pub fn id(&self) -> RegionId {
        self.id
    }

    fn region(&self) -> &Region {
        &self.scene.regions[self.id.0]
    }

    fn region_mut(&mut self) -> &mut Region {
        &mut self.scene.regions[self.id.0]
    }

    /// Local bounds: the origin is at the region's `min` corner.
    pub fn bounds(&self) -> Rect {
        self.region().bounds.zero()
    }

    /// Available size.
    pub fn size(&self) -> Point {
        self.region().bounds.size()
    }

    fn child(&mut self, r: Rect, clip: bool) -> RegionMut<'_> {
        let id = self.scene.push_region(Region::new(r, clip, 0));
        self.region_mut().items.push(Item::Region(id));
        RegionMut {
            scene: &mut *self.scene,
            id,
        }
    }

    /// Creates a sub-region offset to `r.min` with size `r.size()`, without clipping.
    pub fn context(&mut self, r: Rect) -> RegionMut<'_> {
        self.child(r, false)
    }

    /// Creates a sub-region like [`RegionMut::context`] that also clips to its size.
    pub fn clip(&mut self, r: Rect) -> RegionMut<'_> {
        self.child(r, true)
    }

    /// Returns the layer registered under `z_index`, creating it on first use.
    ///
    /// `layer(0)` returns this region.
    pub fn layer(&mut self, z_index: i32) -> RegionMut<'_> {
        if z_index == 0 {
            return RegionMut {
                scene: &mut *self.scene,
                id: self.id,
            };
        }
        let found = self
            .region()
            .layers
            .binary_search_by_key(&z_index, |(z, _)| *z);
        let id = match found {
            Ok(i) => self.region().layers[i].1,
            Err(i) => {
                let bounds = self.bounds();
                let layer = self.scene.push_region(Region::new(bounds, false, z_index));
                self.region_mut().layers.insert(i, (z_index, layer));
                layer
            }
        };
        RegionMut {
            scene: &mut *self.scene,
            id,
        }
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.region_mut().items.push(Item::Draw(cmd));
    }

    /// Appends a polyline.
    pub fn poly<'s>(
        &mut self,
        points: impl Into<Vec<Point>>,
        style: impl Into<Option<&'s Style>>,
    ) -> Result<(), SceneError> {
        let style = style.into().ok_or(SceneError::MissingStyle)?;
        self.push(DrawCommand::Poly(PolyCommand {
            points: points.into(),
            style: style.clone(),
        }));
        Ok(())
    }

    /// Appends the closed outline of `r` as a polyline.
    pub fn rect<'s>(
        &mut self,
        r: Rect,
        style: impl Into<Option<&'s Style>>,
    ) -> Result<(), SceneError> {
        self.poly(r.points(), style)
    }

    /// Appends a text placement.
    pub fn text<'s>(
        &mut self,
        text: impl Into<String>,
        at: Point,
        style: impl Into<Option<&'s Style>>,
    ) -> Result<(), SceneError> {
        let style = style.into().ok_or(SceneError::MissingStyle)?;
        self.push(DrawCommand::Text(TextCommand {
            text: text.into(),
            at,
            style: style.clone(),
        }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use peniko::color::palette::css;

    use super::*;

    #[derive(Default)]
    struct Collect {
        order: Vec<(f64, f64)>,
        regions: Vec<RegionId>,
    }

    impl SceneVisitor for Collect {
        fn enter_region(&mut self, id: RegionId, _region: &Region) {
            self.regions.push(id);
        }

        fn command(&mut self, _region: RegionId, command: &DrawCommand) {
            if let DrawCommand::Poly(p) = command {
                // Tests encode (layer, sequence) in the first point.
                let first = p.points[0];
                self.order.push((first.x, first.y));
            }
        }
    }

    fn mark(region: &mut RegionMut<'_>, z: i32, seq: f64, style: &Style) {
        region
            .poly(vec![Point::new(f64::from(z), seq)], style)
            .unwrap();
    }

    #[test]
    fn layers_emit_in_bucket_order_regardless_of_creation_order() {
        let style = Style::stroked(css::BLACK, 1.0);
        let mut scene = Scene::new(Point::new(100.0, 100.0));
        let mut root = scene.root();
        for (seq, z) in [2, -1, 0, -3].into_iter().enumerate() {
            let mut layer = root.layer(z);
            mark(&mut layer, z, seq as f64, &style);
            mark(&mut layer, z, seq as f64 + 0.5, &style);
        }

        let mut out = Collect::default();
        scene.walk(&mut out);
        let groups: Vec<f64> = out.order.iter().map(|(z, _)| *z).collect();
        assert_eq!(groups, vec![-3.0, -3.0, -1.0, -1.0, 0.0, 0.0, 2.0, 2.0]);
        // Insertion order within one layer is preserved.
        assert!(out.order[0].1 < out.order[1].1);
        assert!(out.order[6].1 < out.order[7].1);
    }

    #[test]
    fn layer_lookup_is_idempotent() {
        let mut scene = Scene::new(Point::new(10.0, 10.0));
        let mut root = scene.root();
        let a = root.layer(5).id();
        let b = root.layer(-2).id();
        assert_eq!(root.layer(5).id(), a);
        assert_eq!(root.layer(-2).id(), b);
        assert_eq!(root.layer(0).id(), Scene::ROOT);
        assert_eq!(scene.region_count(), 3);
        let root = scene.region(Scene::ROOT).unwrap();
        let layers: Vec<i32> = root.layers().iter().map(|l| l.0).collect();
        assert_eq!(layers, vec![-2, 5]);
    }

    #[test]
    fn sub_regions_interleave_with_commands() {
        let style = Style::stroked(css::BLACK, 1.0);
        let mut scene = Scene::new(Point::new(100.0, 100.0));
        let mut root = scene.root();
        mark(&mut root, 0, 0.0, &style);
        {
            let mut child = root.clip(Rect::new(10.0, 10.0, 60.0, 40.0));
            assert_eq!(child.bounds(), Rect::new(0.0, 0.0, 50.0, 30.0));
            let mut under = child.layer(-1);
            mark(&mut under, 1, 1.0, &style);
            mark(&mut child, 1, 2.0, &style);
        }
        mark(&mut root, 0, 3.0, &style);

        let mut out = Collect::default();
        scene.walk(&mut out);
        let seqs: Vec<f64> = out.order.iter().map(|(_, s)| *s).collect();
        assert_eq!(seqs, vec![0.0, 1.0, 2.0, 3.0]);

        let child = scene.region(RegionId(1)).unwrap();
        assert!(child.clip());
        assert_eq!(child.bounds(), Rect::new(10.0, 10.0, 60.0, 40.0));
    }

    #[test]
    fn context_does_not_clip() {
        let mut scene = Scene::new(Point::new(100.0, 100.0));
        let id = scene.root().context(Rect::new(0.0, 0.0, 5.0, 5.0)).id();
        assert!(!scene.region(id).unwrap().clip());
    }

    #[test]
    fn missing_style_is_rejected() {
        let mut scene = Scene::new(Point::new(10.0, 10.0));
        let mut root = scene.root();
        assert_eq!(
            root.poly(vec![Point::ZERO], None::<&Style>),
            Err(SceneError::MissingStyle)
        );
        assert_eq!(
            root.text("x", Point::ZERO, None::<&Style>),
            Err(SceneError::MissingStyle)
        );
        assert!(scene.region(Scene::ROOT).unwrap().items().is_empty());
    }

    #[test]
    fn unknown_region_is_an_error() {
        let mut scene = Scene::new(Point::new(10.0, 10.0));
        assert_eq!(
            scene.region_mut(RegionId(7)).err(),
            Some(SceneError::UnknownRegion(RegionId(7)))
        );
    }

    #[test]
    fn poly_converts_to_open_path() {
        let cmd = PolyCommand {
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)],
            style: Style::default(),
        };
        let path = cmd.to_bez_path();
        assert_eq!(path.elements().len(), 3);
    }
}
