//! Lines in slope/intercept form and the trig helpers built on them.
//!
//! Vertical lines are represented with a large finite slope
//! ([`VERTICAL_SLOPE`]) instead of infinity, so intersections against
//! them stay ordinary arithmetic. Parallel lines have no intersection;
//! [`LineEq::intersection`] reports that with `None`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Axis, Point};

/// Finite stand-in for the slope of a vertical line.
pub const VERTICAL_SLOPE: f64 = 1e16;

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineEq {
    pub slope: f64,
    pub intercept: f64,
}

impl LineEq {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        LineEq { slope, intercept }
    }

    /// Line through `p` with the given slope
    pub fn through(p: Point, slope: f64) -> Self {
        LineEq::new(slope, p.y - slope * p.x)
    }

    /// Line through two points. Equal x coordinates give a vertical line
    /// with slope [`VERTICAL_SLOPE`] and intercept `-VERTICAL_SLOPE * x`.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        if p1.x == p2.x {
            LineEq::new(VERTICAL_SLOPE, -VERTICAL_SLOPE * p1.x)
        } else {
            let slope = (p2.y - p1.y) / (p2.x - p1.x);
            LineEq::new(slope, p1.y - slope * p1.x)
        }
    }

    /// Evaluate `y` at `x`
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Normal line keeping the same intercept (negative reciprocal slope).
    pub fn normal(&self) -> Self {
        let slope = if self.slope == 0.0 {
            VERTICAL_SLOPE
        } else {
            -1.0 / self.slope
        };
        LineEq::new(slope, self.intercept)
    }

    /// Intercept of the parallel line at signed perpendicular `distance`.
    pub fn parallel_intercept(&self, distance: f64) -> f64 {
        self.intercept + distance * (1.0 + self.slope.powi(2)).sqrt()
    }

    /// Parallel line at signed perpendicular `distance`.
    pub fn parallel_at_distance(&self, distance: f64) -> Self {
        LineEq::new(self.slope, self.parallel_intercept(distance))
    }

    /// Closed-form intersection; `None` when the slopes are equal.
    pub fn intersection(&self, other: &LineEq) -> Option<Point> {
        if self.slope == other.slope {
            warn!(slope = self.slope, "intersection requested for parallel lines");
            return None;
        }
        let x = (other.intercept - self.intercept) / (self.slope - other.slope);
        Some(Point::new(x, self.y_at(x)))
    }
}

/// Shorthand for [`LineEq::from_points`].
pub fn line_equation(p1: Point, p2: Point) -> LineEq {
    LineEq::from_points(p1, p2)
}

/// Point displaced from `p` by `distance` perpendicular to a line of the
/// given `slope`. A horizontal line displaces straight up.
pub fn displace_perpendicular(p: Point, slope: f64, distance: f64) -> Point {
    let (ux, uy) = if slope == 0.0 {
        (0.0, 1.0)
    } else {
        let norm = ((1.0 / slope).powi(2) + 1.0).sqrt();
        (1.0 / norm, (-1.0 / slope) / norm)
    };
    Point::new(p.x + distance * ux, p.y + distance * uy)
}

/// The two parallel copies of segment `p1 -> p2` at distance `d`.
///
/// Returns `[a1, a2, b1, b2]` where `a1 -> a2` is shifted towards +y
/// (for non-vertical input) and `b1 -> b2` the opposite way. With `sort`
/// the endpoints are first ordered by x.
pub fn parallel_points(p1: Point, p2: Point, d: f64, sort: bool) -> [Point; 4] {
    let (p1, p2) = if sort && p2.x < p1.x { (p2, p1) } else { (p1, p2) };
    let m = LineEq::from_points(p1, p2).slope;

    let delta_y = d / (1.0 + m * m).sqrt();
    let delta_x = -m * delta_y;

    [
        p1.offset(delta_x, delta_y),
        p2.offset(delta_x, delta_y),
        p1.offset(-delta_x, -delta_y),
        p2.offset(-delta_x, -delta_y),
    ]
}

/// Angle in degrees of the segment between two points, after ordering
/// the points by `axis` ascending.
pub fn angle_between(p1: Point, p2: Point, axis: Axis) -> f64 {
    let (a, b) = if p2.coord(axis) < p1.coord(axis) { (p2, p1) } else { (p1, p2) };
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Angle in degrees of `point` seen from `origin`, measured
/// counterclockwise from +x and normalized to `[0, 360)`.
pub fn angle_from_axis(point: Point, origin: Point) -> f64 {
    let angle = (point.y - origin.y).atan2(point.x - origin.x).to_degrees();
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// True when `x` lies within `[min(x1, x2), max(x1, x2)]`.
pub fn is_in_range(x: f64, x1: f64, x2: f64) -> bool {
    let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    lo <= x && x <= hi
}
