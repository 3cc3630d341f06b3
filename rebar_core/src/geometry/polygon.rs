//! # Polygon
//!
//! Immutable polygon value: vertices plus perimeter, area and centroid
//! computed once at construction.
//!
//! ## Conventions
//!
//! - `perimeter` is the length of the OPEN vertex chain: the closing edge
//!   from the last vertex back to the first is not counted.
//! - `centroid` is the arithmetic mean of the vertices, not the area
//!   centroid.
//! - Extremal queries compare coordinates with exact equality.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::geometry::{Point, Polygon, RotationDirection};
//!
//! let square = Polygon::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ]).unwrap();
//!
//! assert_eq!(square.area(), 1.0);
//! assert_eq!(square.perimeter(), 3.0);
//! assert_eq!(square.rotation_direction(), RotationDirection::Clockwise);
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Deserializer, Serialize};

use super::line::LineEq;
use super::Point;
use crate::errors::{RebarError, RebarResult};

// ============================================================================
// Selectors
// ============================================================================

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The perpendicular axis
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Which end of an axis an extremal query looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extreme {
    Max,
    Min,
}

/// Winding of a vertex sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    Counterclockwise,
}

impl RotationDirection {
    pub fn display_name(&self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "Clockwise",
            RotationDirection::Counterclockwise => "Counterclockwise",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::Counterclockwise,
            RotationDirection::Counterclockwise => RotationDirection::Clockwise,
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Sum of segment lengths along the open chain.
pub fn perimeter(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// Shoelace area (absolute value).
pub fn area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

/// Shoelace area, positive for counterclockwise vertex order.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice / 2.0
}

/// Arithmetic mean of the points. Empty input gives the origin.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::origin();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

// ============================================================================
// Polygon
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    vertices: Vec<Point>,
    perimeter: f64,
    area: f64,
    centroid: Point,
}

/// Only `vertices` is read back; the derived fields are recomputed and the
/// vertex list is validated like [`Polygon::new`].
impl<'de> Deserialize<'de> for Polygon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Record {
            vertices: Vec<Point>,
        }

        let record = Record::deserialize(deserializer)?;
        Polygon::new(record.vertices).map_err(serde::de::Error::custom)
    }
}

impl Polygon {
    /// Build a polygon from at least three vertices.
    pub fn new(vertices: Vec<Point>) -> RebarResult<Self> {
        if vertices.len() < 3 {
            return Err(RebarError::invalid_input(
                "vertices",
                vertices.len().to_string(),
                "A polygon needs at least 3 vertices",
            ));
        }
        if vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(RebarError::invalid_input(
                "vertices",
                format!("{:?}", vertices),
                "Vertex coordinates must be finite",
            ));
        }

        Ok(Polygon {
            perimeter: perimeter(&vertices),
            area: area(&vertices),
            centroid: centroid(&vertices),
            vertices,
        })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Vertex at `index`, wrapping modulo the vertex count.
    pub fn vertex(&self, index: usize) -> Point {
        self.vertices[index % self.vertices.len()]
    }

    /// First index holding `point`
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.vertices.iter().position(|v| *v == point)
    }

    // ------------------------------------------------------------------------
    // Extremal queries
    // ------------------------------------------------------------------------

    /// All vertices sharing the max/min coordinate on `axis`, sorted
    /// ascending by the other axis.
    pub fn extremal(&self, axis: Axis, extreme: Extreme) -> Vec<Point> {
        let coords = self.vertices.iter().map(|p| p.coord(axis));
        let target = match extreme {
            Extreme::Max => coords.fold(f64::NEG_INFINITY, f64::max),
            Extreme::Min => coords.fold(f64::INFINITY, f64::min),
        };

        let mut points: Vec<Point> = self
            .vertices
            .iter()
            .copied()
            .filter(|p| p.coord(axis) == target)
            .collect();
        let other = axis.other();
        points.sort_by(|a, b| a.coord(other).total_cmp(&b.coord(other)));
        points
    }

    /// Vertices with the greatest y, sorted by x
    pub fn top_points(&self) -> Vec<Point> {
        self.extremal(Axis::Y, Extreme::Max)
    }

    /// Vertices with the smallest y, sorted by x
    pub fn bottom_points(&self) -> Vec<Point> {
        self.extremal(Axis::Y, Extreme::Min)
    }

    /// Vertices with the greatest x, sorted by y
    pub fn right_points(&self) -> Vec<Point> {
        self.extremal(Axis::X, Extreme::Max)
    }

    /// Vertices with the smallest x, sorted by y
    pub fn left_points(&self) -> Vec<Point> {
        self.extremal(Axis::X, Extreme::Min)
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        let (min_x, max_x) = (self.left_points()[0].x, self.right_points()[0].x);
        let (min_y, max_y) = (self.bottom_points()[0].y, self.top_points()[0].y);
        (Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    // ------------------------------------------------------------------------
    // Winding
    // ------------------------------------------------------------------------

    /// Winding detected from the neighbor of the topmost vertex.
    ///
    /// Takes the right-most top vertex. When it sits at index 2 or later,
    /// the previous vertex decides: `prev.x <= top.x` means clockwise.
    /// Otherwise the next vertex (wrapping) decides: `next.x >= top.x`
    /// means clockwise.
    ///
    /// This only looks at one neighbor, so a polygon whose top vertex has
    /// a vertical neighbor can be misread; [`Polygon::winding`] is the
    /// signed-area answer.
    pub fn rotation_direction(&self) -> RotationDirection {
        let top_points = self.top_points();
        let top = top_points[top_points.len() - 1];
        let top_index = self.index_of(top).unwrap_or(0);

        let clockwise = if top_index > 1 {
            self.vertices[top_index - 1].x <= top.x
        } else {
            self.vertex(top_index + 1).x >= top.x
        };

        if clockwise {
            RotationDirection::Clockwise
        } else {
            RotationDirection::Counterclockwise
        }
    }

    /// Winding from the sign of the shoelace area.
    pub fn winding(&self) -> RotationDirection {
        if signed_area(&self.vertices) < 0.0 {
            RotationDirection::Clockwise
        } else {
            RotationDirection::Counterclockwise
        }
    }

    /// Vertices from `start` to `end` (both inclusive, wrapping) walking
    /// the polygon in `direction`.
    ///
    /// When `direction` matches [`Polygon::rotation_direction`] the walk
    /// follows index order, otherwise it runs backwards through the
    /// indices.
    pub fn slice_by_rotation(
        &self,
        start: usize,
        end: usize,
        direction: RotationDirection,
    ) -> Vec<Point> {
        let n = self.vertices.len();
        let (start, end) = (start % n, end % n);
        let forward = direction == self.rotation_direction();

        let mut out = vec![self.vertices[start]];
        let mut i = start;
        while i != end {
            i = if forward { (i + 1) % n } else { (i + n - 1) % n };
            out.push(self.vertices[i]);
        }
        out
    }

    // ------------------------------------------------------------------------
    // Sides
    // ------------------------------------------------------------------------

    /// Side `index` as `(vertex[index], vertex[index + 1])`, wrapping.
    pub fn side(&self, index: usize) -> (Point, Point) {
        (self.vertex(index), self.vertex(index + 1))
    }

    /// Line equation of every side, including the closing one.
    pub fn side_equations(&self) -> Vec<LineEq> {
        self.side_equations_in(0..self.vertices.len())
    }

    /// Line equations of the sides whose start index is in `range`.
    pub fn side_equations_in(&self, range: Range<usize>) -> Vec<LineEq> {
        range
            .map(|i| {
                let (a, b) = self.side(i);
                LineEq::from_points(a, b)
            })
            .collect()
    }

    /// Midpoint of every side, including the closing one.
    pub fn side_centers(&self) -> Vec<Point> {
        self.side_centers_in(0..self.vertices.len())
    }

    /// Midpoints of the sides whose start index is in `range`.
    pub fn side_centers_in(&self, range: Range<usize>) -> Vec<Point> {
        range
            .map(|i| {
                let (a, b) = self.side(i);
                a.midpoint(b)
            })
            .collect()
    }
}
