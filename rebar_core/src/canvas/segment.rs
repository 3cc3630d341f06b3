//! Geometric segment plans and the outline primitives built from them.
//!
//! Models describe their steel as an ordered `Vec<Segment>` in local
//! coordinates. That plan is what tests assert on; drawing is just
//! emitting each segment onto a [`Canvas`].

use serde::{Deserialize, Serialize};

use super::entities::{Arc, Transformable};
use super::Canvas;
use crate::geometry::{Point, Transform};

/// Side mask in `[top, right, bottom, left]` order.
pub type Sides = [bool; 4];

/// All four sides drawn
pub const ALL_SIDES: Sides = [true; 4];

/// One straight line or circular arc of a segment plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    /// Counterclockwise from `start_angle` to `end_angle`, degrees.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl Segment {
    pub fn line(start: Point, end: Point) -> Self {
        Segment::Line { start, end }
    }

    pub fn arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Segment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// The arc, followed by a concentric arc at `radius + thickness` when
    /// `thickness` is non-zero.
    pub fn thick_arc(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        thickness: f64,
    ) -> Vec<Segment> {
        let mut arcs = vec![Segment::arc(center, radius, start_angle, end_angle)];
        if thickness != 0.0 {
            arcs.push(Segment::arc(center, radius + thickness, start_angle, end_angle));
        }
        arcs
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Segment::Line { .. })
    }

    /// Start and end points (arc endpoints at their angles).
    pub fn endpoints(&self) -> (Point, Point) {
        match *self {
            Segment::Line { start, end } => (start, end),
            Segment::Arc { .. } => {
                let arc = self.as_arc_entity();
                (arc.start_point(), arc.end_point())
            }
        }
    }

    /// Line length, or arc length along the counterclockwise sweep
    pub fn length(&self) -> f64 {
        match *self {
            Segment::Line { start, end } => start.distance_to(end),
            Segment::Arc {
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                let sweep = (end_angle - start_angle).rem_euclid(360.0);
                radius * sweep.to_radians()
            }
        }
    }

    /// Copy of this segment mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Segment {
        match *self {
            Segment::Line { mut start, mut end } => {
                start.apply(transform);
                end.apply(transform);
                Segment::Line { start, end }
            }
            Segment::Arc { .. } => {
                let mut arc = self.as_arc_entity();
                arc.apply(transform);
                Segment::arc(arc.center, arc.radius, arc.start_angle, arc.end_angle)
            }
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> C::Handle {
        match *self {
            Segment::Line { start, end } => canvas.draw_line(start, end),
            Segment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => canvas.draw_arc(center, radius, start_angle, end_angle),
        }
    }

    fn as_arc_entity(&self) -> Arc {
        match *self {
            Segment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => Arc {
                center,
                radius,
                start_angle,
                end_angle,
            },
            Segment::Line { start, .. } => Arc {
                center: start,
                radius: 0.0,
                start_angle: 0.0,
                end_angle: 0.0,
            },
        }
    }
}

/// Emit every segment in order, returning the handles in the same order.
pub fn draw_segments<C: Canvas>(segments: &[Segment], canvas: &mut C) -> Vec<C::Handle> {
    segments.iter().map(|s| s.draw(canvas)).collect()
}

/// Axis-aligned rectangle outline with bottom-left corner `(x, y)`.
///
/// `sides` is `[top, right, bottom, left]`; the lines come out in the
/// order top, bottom, right, left.
pub fn rect_sides(x: f64, y: f64, width: f64, height: f64, sides: Sides) -> Vec<Segment> {
    let [top, right, bottom, left] = sides;
    let mut lines = Vec::with_capacity(4);
    if top {
        lines.push(Segment::line(Point::new(x, y + height), Point::new(x + width, y + height)));
    }
    if bottom {
        lines.push(Segment::line(Point::new(x, y), Point::new(x + width, y)));
    }
    if right {
        lines.push(Segment::line(Point::new(x + width, y), Point::new(x + width, y + height)));
    }
    if left {
        lines.push(Segment::line(Point::new(x, y), Point::new(x, y + height)));
    }
    lines
}

/// Rectangle with rounded corners and an optional parallel outer outline.
///
/// Corner indices run top-left, top-right, bottom-right, bottom-left.
/// A corner arc is drawn when its mask bit is set and at least one of the
/// two sides meeting there is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Offset of the outer outline; zero draws a single outline
    pub thickness: f64,
    pub sides: Sides,
    pub corners: [bool; 4],
    pub radii: [f64; 4],
}

impl RoundedRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        RoundedRect {
            x,
            y,
            width,
            height,
            thickness: 0.0,
            sides: ALL_SIDES,
            corners: [true; 4],
            radii: [radius; 4],
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    pub fn with_corners(mut self, corners: [bool; 4]) -> Self {
        self.corners = corners;
        self
    }

    pub fn with_radii(mut self, radii: [f64; 4]) -> Self {
        self.radii = radii;
        self
    }

    /// Inner lines, then outer lines, then corner arcs.
    pub fn segments(&self) -> Vec<Segment> {
        let RoundedRect {
            x,
            y,
            width: w,
            height: h,
            thickness: t,
            ..
        } = *self;
        let [top, right, bottom, left] = self.sides;
        let [r0, r1, r2, r3] = self.radii;
        let mut out = Vec::new();

        let outline = |offset: f64, out: &mut Vec<Segment>| {
            if top {
                out.push(Segment::line(
                    Point::new(x + r0, y + h + offset),
                    Point::new(x - r1 + w, y + h + offset),
                ));
            }
            if bottom {
                out.push(Segment::line(
                    Point::new(x + r3, y - offset),
                    Point::new(x - r2 + w, y - offset),
                ));
            }
            if right {
                out.push(Segment::line(
                    Point::new(x + w + offset, y + r2),
                    Point::new(x + w + offset, y - r1 + h),
                ));
            }
            if left {
                out.push(Segment::line(
                    Point::new(x - offset, y + r3),
                    Point::new(x - offset, y - r0 + h),
                ));
            }
        };

        outline(0.0, &mut out);
        if t != 0.0 {
            outline(t, &mut out);
        }

        let corners = [
            (top || left, Point::new(x + r0, y - r0 + h), r0, 90.0, 180.0),
            (top || right, Point::new(x - r1 + w, y - r1 + h), r1, 0.0, 90.0),
            (right || bottom, Point::new(x - r2 + w, y + r2), r2, 270.0, 360.0),
            (bottom || left, Point::new(x + r3, y + r3), r3, 180.0, 270.0),
        ];
        for (i, (adjacent, center, radius, start, end)) in corners.into_iter().enumerate() {
            if adjacent && self.corners[i] {
                out.extend(Segment::thick_arc(center, radius, start, end, t));
            }
        }

        out
    }
}
