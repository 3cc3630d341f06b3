//! # Geometry Kernel
//!
//! Pure 2D math used by every reinforcement model:
//!
//! - [`line`] - slope/intercept lines, intersections, parallels, angles
//! - [`polygon`] - the [`Polygon`] value type (area, perimeter, centroid,
//!   extremal queries, winding, side chains)
//! - [`transform`] - affine [`Transform`] applied to whole groups of
//!   drawn entities
//!
//! Nothing in here allocates state that outlives a call or depends on
//! any other module of the crate.

pub mod line;
pub mod polygon;
pub mod transform;

pub use line::{LineEq, VERTICAL_SLOPE};
pub use polygon::{area, centroid, perimeter, Axis, Extreme, Polygon, RotationDirection};
pub use transform::Transform;

use serde::{Deserialize, Serialize};

/// A point (or displacement) in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The origin `(0, 0)`
    pub const fn origin() -> Self {
        Point { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Midpoint of the segment `self -> other`
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// This point shifted by `(dx, dy)`
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Coordinate along the given axis
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Tolerance-based comparison used by tests across the crate.
#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
pub(crate) fn approx_point(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}
