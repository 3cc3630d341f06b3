//! Concrete drawable entities and the [`Transformable`] capability.
//!
//! Every entity knows how to move itself under an affine [`Transform`],
//! so a group of heterogeneous handles can be placed with one call and no
//! type switching at the call site.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Transform};

/// Text anchor relative to the insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

/// In-place placement mutation shared by every drawable.
pub trait Transformable {
    fn apply(&mut self, transform: &Transform);
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Text direction that never reads upside down: `(-90, 90]`.
pub fn readable_degrees(angle: f64) -> f64 {
    let a = normalize_degrees(angle);
    if a > 90.0 && a <= 270.0 {
        a - 180.0
    } else if a > 270.0 {
        a - 360.0
    } else {
        a
    }
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

/// Counterclockwise arc from `start_angle` to `end_angle` (degrees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn start_point(&self) -> Point {
        let a = self.start_angle.to_radians();
        self.center.offset(self.radius * a.cos(), self.radius * a.sin())
    }

    pub fn end_point(&self) -> Point {
        let a = self.end_angle.to_radians();
        self.center.offset(self.radius * a.cos(), self.radius * a.sin())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    pub height: f64,
    pub position: Point,
    /// Degrees
    pub rotation: f64,
    pub alignment: Alignment,
}

/// Linear dimension measuring `p1 -> p2` along `rotation`, with the
/// dimension line passing through `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearDimension {
    pub base: Point,
    pub p1: Point,
    pub p2: Point,
    /// Degrees
    pub rotation: f64,
    pub style: String,
}

impl LinearDimension {
    /// Measured value: projection of `p1 -> p2` on the dimension direction
    pub fn measurement(&self) -> f64 {
        let (s, c) = self.rotation.to_radians().sin_cos();
        ((self.p2.x - self.p1.x) * c + (self.p2.y - self.p1.y) * s).abs()
    }
}

/// Solid/hatched fill bounded by a closed point loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hatch {
    pub boundary: Vec<Point>,
}

/// Any drawable the recording canvas can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
    Dimension(LinearDimension),
    Hatch(Hatch),
}

impl Entity {
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Line(_) => "LINE",
            Entity::Arc(_) => "ARC",
            Entity::Circle(_) => "CIRCLE",
            Entity::Polyline(_) => "POLYLINE",
            Entity::Text(_) => "TEXT",
            Entity::Dimension(_) => "DIMENSION",
            Entity::Hatch(_) => "HATCH",
        }
    }
}

// ============================================================================
// Transformable impls
// ============================================================================

impl Transformable for Point {
    fn apply(&mut self, transform: &Transform) {
        *self = transform.apply(*self);
    }
}

impl Transformable for Line {
    fn apply(&mut self, transform: &Transform) {
        self.start.apply(transform);
        self.end.apply(transform);
    }
}

impl Transformable for Arc {
    fn apply(&mut self, transform: &Transform) {
        let start = normalize_degrees(transform.apply_angle(self.start_angle));
        let end = normalize_degrees(transform.apply_angle(self.end_angle));

        self.center.apply(transform);
        self.radius *= transform.length_scale();
        // a reflection reverses the sweep, so the endpoints trade places
        if transform.is_reflection() {
            self.start_angle = end;
            self.end_angle = start;
        } else {
            self.start_angle = start;
            self.end_angle = end;
        }
    }
}

impl Transformable for Circle {
    fn apply(&mut self, transform: &Transform) {
        self.center.apply(transform);
        self.radius *= transform.length_scale();
    }
}

impl Transformable for Polyline {
    fn apply(&mut self, transform: &Transform) {
        self.points.iter_mut().for_each(|p| p.apply(transform));
    }
}

impl Transformable for Text {
    fn apply(&mut self, transform: &Transform) {
        self.position.apply(transform);
        self.height *= transform.length_scale();
        self.rotation = readable_degrees(transform.apply_angle(self.rotation));
    }
}

impl Transformable for LinearDimension {
    fn apply(&mut self, transform: &Transform) {
        self.base.apply(transform);
        self.p1.apply(transform);
        self.p2.apply(transform);
        // measurement direction is unsigned
        self.rotation = normalize_degrees(transform.apply_angle(self.rotation)).rem_euclid(180.0);
    }
}

impl Transformable for Hatch {
    fn apply(&mut self, transform: &Transform) {
        self.boundary.iter_mut().for_each(|p| p.apply(transform));
    }
}

impl Transformable for Entity {
    fn apply(&mut self, transform: &Transform) {
        match self {
            Entity::Line(e) => e.apply(transform),
            Entity::Arc(e) => e.apply(transform),
            Entity::Circle(e) => e.apply(transform),
            Entity::Polyline(e) => e.apply(transform),
            Entity::Text(e) => e.apply(transform),
            Entity::Dimension(e) => e.apply(transform),
            Entity::Hatch(e) => e.apply(transform),
        }
    }
}
