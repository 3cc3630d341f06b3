//! # Canvas Boundary
//!
//! The rebar models never draw pixels or write files. They emit
//! primitives through the [`Canvas`] trait and collect the returned
//! handles into [`DrawGroups`], which the caller can then move around as
//! whole groups with [`Canvas::transform`].
//!
//! [`Sketch`] is the in-memory implementation: it records every entity
//! and is what the tests draw on.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::canvas::{Canvas, Sketch};
//! use rebar_core::geometry::{Point, Transform};
//!
//! let mut sketch = Sketch::new();
//! let line = sketch.draw_line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
//! sketch.transform(&[line], &Transform::translation(0.0, 2.0));
//! assert_eq!(sketch.len(), 1);
//! ```

pub mod entities;
pub mod segment;
pub mod sketch;

pub use entities::{
    Alignment, Arc, Circle, Entity, Hatch, Line, LinearDimension, Polyline, Text, Transformable,
};
pub use segment::{draw_segments, rect_sides, RoundedRect, Segment, Sides, ALL_SIDES};
pub use sketch::{EntityId, Sketch};

use crate::geometry::{Point, Transform};

/// Drawing capability consumed by every model.
///
/// Angles are degrees, counterclockwise from +x.
pub trait Canvas {
    /// Opaque handle to something drawn.
    type Handle: Clone;

    fn draw_line(&mut self, start: Point, end: Point) -> Self::Handle;

    fn draw_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self::Handle;

    /// Arc plus, when `thickness` is non-zero, a concentric arc at
    /// `radius + thickness`.
    fn draw_thick_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        thickness: f64,
    ) -> Vec<Self::Handle> {
        let mut handles = vec![self.draw_arc(center, radius, start_angle, end_angle)];
        if thickness != 0.0 {
            handles.push(self.draw_arc(center, radius + thickness, start_angle, end_angle));
        }
        handles
    }

    fn draw_circle(&mut self, center: Point, radius: f64) -> Self::Handle;

    fn draw_polyline(&mut self, points: &[Point], closed: bool) -> Self::Handle;

    fn draw_text(
        &mut self,
        text: &str,
        height: f64,
        position: Point,
        rotation: f64,
        alignment: Alignment,
    ) -> Self::Handle;

    fn draw_linear_dimension(
        &mut self,
        base: Point,
        p1: Point,
        p2: Point,
        rotation: f64,
        style: &str,
    ) -> Self::Handle;

    /// Hatched fill of a closed outline.
    fn draw_filled_rect(&mut self, corners: &[Point]) -> Self::Handle;

    /// Apply one affine transform to every entity behind `handles`.
    fn transform(&mut self, handles: &[Self::Handle], transform: &Transform);
}

/// Handles produced by one drawing call, bucketed by role.
///
/// `all` holds every handle in emission order; the other buckets are
/// subsets of it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawGroups<H> {
    pub steel: Vec<H>,
    pub concrete: Vec<H>,
    pub dimensions: Vec<H>,
    pub denominations: Vec<H>,
    pub all: Vec<H>,
}

impl<H> Default for DrawGroups<H> {
    fn default() -> Self {
        DrawGroups {
            steel: Vec::new(),
            concrete: Vec::new(),
            dimensions: Vec::new(),
            denominations: Vec::new(),
            all: Vec::new(),
        }
    }
}

impl<H: Clone> DrawGroups<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_steel(&mut self, handle: H) {
        self.steel.push(handle.clone());
        self.all.push(handle);
    }

    pub fn push_concrete(&mut self, handle: H) {
        self.concrete.push(handle.clone());
        self.all.push(handle);
    }

    pub fn push_dimension(&mut self, handle: H) {
        self.dimensions.push(handle.clone());
        self.all.push(handle);
    }

    pub fn push_denomination(&mut self, handle: H) {
        self.denominations.push(handle.clone());
        self.all.push(handle);
    }

    pub fn extend_steel(&mut self, handles: impl IntoIterator<Item = H>) {
        handles.into_iter().for_each(|h| self.push_steel(h));
    }

    /// Merge another group into this one, bucket by bucket.
    pub fn merge(&mut self, other: DrawGroups<H>) {
        self.steel.extend(other.steel);
        self.concrete.extend(other.concrete);
        self.dimensions.extend(other.dimensions);
        self.denominations.extend(other.denominations);
        self.all.extend(other.all);
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_track_all() {
        let mut groups: DrawGroups<usize> = DrawGroups::new();
        groups.push_steel(0);
        groups.push_dimension(1);
        groups.push_denomination(2);
        groups.extend_steel([3, 4]);

        assert_eq!(groups.steel, vec![0, 3, 4]);
        assert_eq!(groups.dimensions, vec![1]);
        assert_eq!(groups.denominations, vec![2]);
        assert_eq!(groups.all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_merge() {
        let mut a: DrawGroups<usize> = DrawGroups::new();
        a.push_steel(0);
        let mut b = DrawGroups::new();
        b.push_dimension(1);
        a.merge(b);
        assert_eq!(a.all, vec![0, 1]);
        assert_eq!(a.dimensions, vec![1]);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_thick_arc_default() {
        let mut sketch = Sketch::new();
        let thin = sketch.draw_thick_arc(Point::origin(), 0.01, 90.0, 180.0, 0.0);
        let thick = sketch.draw_thick_arc(Point::origin(), 0.01, 90.0, 180.0, 0.012);
        assert_eq!(thin.len(), 1);
        assert_eq!(thick.len(), 2);
        match sketch.get(thick[1]) {
            Some(Entity::Arc(arc)) => assert_eq!(arc.radius, 0.01 + 0.012),
            other => panic!("expected arc, got {:?}", other),
        }
    }
}
