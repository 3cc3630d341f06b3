//! # Longitudinal Bar
//!
//! A single reinforcing bar: a straight run with optional hooked anchors
//! at either end and an optional symmetric center bend.
//!
//! All derived quantities (developed length, bounding box, weight) are
//! fixed at construction. Geometry is produced as an ordered segment plan
//! in local coordinates, left to right, with the box's bottom-left corner
//! at the origin; [`Bar::placement_transform`] turns that into drawing
//! coordinates for the requested direction and orientation.
//!
//! ## Segment Plan
//!
//! 1. Left anchor: straight leg, then the 90°-180° mandrel curve
//! 2. Right anchor: the 0°-90° mandrel curve, then the straight leg
//! 3. Center bend: first run, four bend curves with two diagonal legs
//!    each side of a raised middle run, last run
//! 4. Otherwise a single straight body
//!
//! In unifilar mode the bar is drawn as a single line: diameter and
//! external mandrel radius collapse to zero and curves are skipped.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::canvas::Sketch;
//! use rebar_core::geometry::Point;
//! use rebar_core::reinforcement::{Bar, BarDrawOptions, BarInput};
//! use rebar_core::settings::BarSettings;
//!
//! let bar = Bar::new(BarInput::new(12.0, 0.012));
//! let mut sketch = Sketch::new();
//! let groups = bar.draw_longitudinal(
//!     &mut sketch,
//!     Point::new(2.0, 1.0),
//!     &BarDrawOptions::default(),
//!     &BarSettings::default(),
//! );
//!
//! assert_eq!(groups.steel.len(), 4);
//! assert!((bar.length() - 12.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{bar_weight, Direction, Orientation};
use crate::canvas::{draw_segments, rect_sides, Alignment, Canvas, DrawGroups, Segment, Sides};
use crate::geometry::{Point, Transform};
use crate::settings::BarSettings;
use crate::units::rads;

const FULL_ANCHOR_SIDES: Sides = [false, true, true, true];
const UNIFILAR_LEFT_ANCHOR_SIDES: Sides = [false, false, false, true];
const UNIFILAR_RIGHT_ANCHOR_SIDES: Sides = [false, true, false, false];
const UNIFILAR_RUN_SIDES: Sides = [true, false, false, false];

// ============================================================================
// Input Types
// ============================================================================

/// Construction parameters for a [`Bar`].
///
/// Lengths are meters, angles degrees. A zero anchor or bend length means
/// "none".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarInput {
    /// Clear span the bar covers
    pub reinforcement_length: f64,
    pub diameter: f64,
    /// Bottom-left corner of the bounding box
    pub x: f64,
    pub y: f64,
    pub left_anchor: f64,
    pub right_anchor: f64,
    pub mandrel_radius: f64,
    /// Length of the raised middle run
    pub bend_length: f64,
    /// Bend leg declination from horizontal
    pub bend_angle: f64,
    /// Rise of the middle run
    pub bend_height: f64,
    pub direction: Direction,
    pub orientation: Orientation,
    /// Offset applied to the cross-section circle
    pub transverse_center: Option<Point>,
    pub denomination: Option<String>,
}

impl Default for BarInput {
    fn default() -> Self {
        BarInput {
            reinforcement_length: 0.0,
            diameter: 0.0,
            x: 0.0,
            y: 0.0,
            left_anchor: 0.0,
            right_anchor: 0.0,
            mandrel_radius: 0.0,
            bend_length: 0.0,
            bend_angle: 0.0,
            bend_height: 0.0,
            direction: Direction::Horizontal,
            orientation: Orientation::Bottom,
            transverse_center: None,
            denomination: None,
        }
    }
}

impl BarInput {
    /// Straight horizontal bar at the origin
    pub fn new(reinforcement_length: f64, diameter: f64) -> Self {
        BarInput {
            reinforcement_length,
            diameter,
            ..Default::default()
        }
    }
}

/// Which parts of a longitudinal view to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDrawOptions {
    pub unifilar: bool,
    /// Anchor and box length labels
    pub dimensions: bool,
    /// Denomination text, when the bar has one
    pub denomination: bool,
}

impl Default for BarDrawOptions {
    fn default() -> Self {
        BarDrawOptions {
            unifilar: false,
            dimensions: true,
            denomination: true,
        }
    }
}

/// A label in local coordinates, before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLabel {
    pub text: String,
    pub position: Point,
    pub rotation: f64,
    pub height: f64,
    /// Denomination rather than a length label
    pub is_denomination: bool,
}

// ============================================================================
// Bar
// ============================================================================

/// One reinforcing bar with its derived geometry and physics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    input: BarInput,
    bend_projection: f64,
    mandrel_radius_ext: f64,
    radius: f64,
    length: f64,
    weight: f64,
    box_width: f64,
    box_height: f64,
}

impl Bar {
    pub fn new(input: BarInput) -> Self {
        let d = input.diameter;
        let l = input.reinforcement_length;

        let bend_projection = if input.bend_angle != 0.0 {
            input.bend_height / rads(input.bend_angle).tan()
        } else {
            0.0
        };
        let mandrel_radius_ext = d + input.mandrel_radius;
        let length = l
            + (1.0 / rads(input.bend_angle).cos() - 1.0) * bend_projection * 2.0
            + input.left_anchor
            + input.right_anchor;

        let box_height =
            if input.left_anchor != 0.0 || input.right_anchor != 0.0 || input.bend_height != 0.0 {
                let max_anchor = input.left_anchor.max(input.right_anchor);
                (mandrel_radius_ext + max_anchor).max(d * 2.0 + input.bend_height)
            } else {
                d
            };

        let bar = Bar {
            bend_projection,
            mandrel_radius_ext,
            radius: d / 2.0,
            length,
            weight: bar_weight(d, length),
            box_width: l,
            box_height,
            input,
        };

        debug!(
            length = bar.length,
            weight = bar.weight,
            box_width = bar.box_width,
            box_height = bar.box_height,
            "bar built"
        );
        bar
    }

    pub fn input(&self) -> &BarInput {
        &self.input
    }

    pub fn reinforcement_length(&self) -> f64 {
        self.input.reinforcement_length
    }

    pub fn diameter(&self) -> f64 {
        self.input.diameter
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> Point {
        Point::new(self.input.x, self.input.y)
    }

    pub fn left_anchor(&self) -> f64 {
        self.input.left_anchor
    }

    pub fn right_anchor(&self) -> f64 {
        self.input.right_anchor
    }

    pub fn mandrel_radius(&self) -> f64 {
        self.input.mandrel_radius
    }

    /// Mandrel radius plus one diameter
    pub fn mandrel_radius_ext(&self) -> f64 {
        self.mandrel_radius_ext
    }

    pub fn bend_length(&self) -> f64 {
        self.input.bend_length
    }

    pub fn bend_angle(&self) -> f64 {
        self.input.bend_angle
    }

    pub fn bend_height(&self) -> f64 {
        self.input.bend_height
    }

    /// Horizontal projection of one bend leg, `bend_height / tan(angle)`
    pub fn bend_projection(&self) -> f64 {
        self.bend_projection
    }

    pub fn direction(&self) -> Direction {
        self.input.direction
    }

    pub fn orientation(&self) -> Orientation {
        self.input.orientation
    }

    pub fn transverse_center(&self) -> Option<Point> {
        self.input.transverse_center
    }

    pub fn denomination(&self) -> Option<&str> {
        self.input.denomination.as_deref()
    }

    /// Developed steel length including anchors and bend correction
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Weight in kg
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn box_width(&self) -> f64 {
        self.box_width
    }

    pub fn box_height(&self) -> f64 {
        self.box_height
    }

    // ------------------------------------------------------------------------
    // Segment plan
    // ------------------------------------------------------------------------

    /// Ordered steel outline in local coordinates.
    pub fn segments(&self, unifilar: bool) -> Vec<Segment> {
        let (d, mre) = if unifilar {
            (0.0, 0.0)
        } else {
            (self.input.diameter, self.mandrel_radius_ext)
        };
        let l = self.input.reinforcement_length;
        let bh = self.box_height;
        let la = self.input.left_anchor;
        let ra = self.input.right_anchor;
        let mandrel = self.input.mandrel_radius;

        let mut first_len = l;
        let mut first_x = 0.0;
        let mut first_sides: Sides = [true; 4];
        let mut third_len = l;
        let mut third_sides: Sides = [true, true, true, false];

        let mut out = Vec::new();

        if la != 0.0 {
            let sides = if unifilar {
                UNIFILAR_LEFT_ANCHOR_SIDES
            } else {
                FULL_ANCHOR_SIDES
            };
            out.extend(rect_sides(0.0, bh - mre - la, d, la, sides));
            if !unifilar {
                out.extend(Segment::thick_arc(
                    Point::new(mre, bh - mre),
                    mandrel,
                    90.0,
                    180.0,
                    d,
                ));
            }
            first_len -= mre;
            first_x += mre;
            first_sides[3] = false;
        }

        if ra != 0.0 {
            if !unifilar {
                out.extend(Segment::thick_arc(
                    Point::new(l - mre, bh - mre),
                    mandrel,
                    0.0,
                    90.0,
                    d,
                ));
            }
            let sides = if unifilar {
                UNIFILAR_RIGHT_ANCHOR_SIDES
            } else {
                FULL_ANCHOR_SIDES
            };
            out.extend(rect_sides(l - d, bh - mre - ra, d, ra, sides));

            if self.input.bend_length == 0.0 {
                first_len -= mre;
            }
            first_sides[1] = false;
            third_len -= mre;
            third_sides = [true, false, true, false];
        }

        let run_sides = |sides: Sides| if unifilar { UNIFILAR_RUN_SIDES } else { sides };

        if self.input.bend_length != 0.0 {
            first_sides[1] = false;
            out.extend(self.bend_segments(
                d,
                unifilar,
                (first_x, first_len, run_sides(first_sides)),
                (third_len, run_sides(third_sides)),
            ));
        } else {
            out.extend(rect_sides(first_x, bh - d, first_len, d, run_sides(first_sides)));
        }

        out
    }

    /// Runs and legs of the center bend, left to right.
    fn bend_segments(
        &self,
        d: f64,
        unifilar: bool,
        (first_x, first_len, first_sides): (f64, f64, Sides),
        (third_len, third_sides): (f64, Sides),
    ) -> Vec<Segment> {
        let l = self.input.reinforcement_length;
        let bh = self.box_height;
        let bl = self.input.bend_length;
        let ba = self.input.bend_angle;
        let rise = self.input.bend_height;

        let alpha = rads(ba / 2.0);
        let (s, c) = alpha.sin_cos();
        let dx1 = c * s * d * 2.0;
        let dy1 = s * s * d * 2.0;
        let dx2 = c * s * d * 4.0;
        let dy2 = s * s * d * 4.0;

        let mid = (l + bl) / 2.0;
        let start = (l - bl) / 2.0;
        let curves = dx1 + dx2;
        let slope = (alpha * 2.0).tan();
        let projection = if slope != 0.0 {
            (rise + d - dy1 - dy2) / slope
        } else {
            warn!(bend_length = bl, "bend with zero angle, legs collapse to vertical");
            0.0
        };

        let first_len = first_len - (mid + curves + projection);
        let third_len = third_len - (mid + curves + projection);
        let third_x = mid + curves + projection;

        let mut out = rect_sides(first_x, bh - d, first_len, d, first_sides);

        // rising legs
        if !unifilar {
            out.extend(Segment::thick_arc(
                Point::new(first_x + first_len, bh - d * 2.0),
                d,
                90.0 - ba,
                90.0,
                d,
            ));
            out.push(Segment::line(
                Point::new(start - dx1, bh - rise - d + dy1),
                Point::new(start - dx1 - projection, bh - dy2),
            ));
        }
        out.push(Segment::line(
            Point::new(start - dx2, bh - rise - d * 2.0 + dy2),
            Point::new(start - dx2 - projection, bh - d - dy1),
        ));
        if !unifilar {
            out.extend(Segment::thick_arc(
                Point::new(start, bh - rise),
                d,
                270.0 - ba,
                270.0,
                d,
            ));
        }

        let middle_sides = if unifilar {
            UNIFILAR_RUN_SIDES
        } else {
            [true, false, true, false]
        };
        out.extend(rect_sides(start, bh - d * 2.0 - rise, bl, d, middle_sides));

        // falling legs
        if !unifilar {
            out.extend(Segment::thick_arc(
                Point::new(mid, bh - rise),
                d,
                270.0,
                270.0 + ba,
                d,
            ));
            out.push(Segment::line(
                Point::new(mid + dx1, bh - rise - d + dy1),
                Point::new(mid + dx1 + projection, bh - dy2),
            ));
        }
        out.push(Segment::line(
            Point::new(mid + dx2, bh - rise - d * 2.0 + dy2),
            Point::new(mid + dx2 + projection, bh - d - dy1),
        ));
        if !unifilar {
            out.extend(Segment::thick_arc(
                Point::new(third_x, bh - d * 2.0),
                d,
                90.0,
                90.0 + ba,
                d,
            ));
        }

        out.extend(rect_sides(third_x, bh - d, third_len, d, third_sides));
        out
    }

    /// Length and denomination labels in local coordinates.
    pub fn labels(&self, options: &BarDrawOptions, settings: &BarSettings) -> Vec<BarLabel> {
        let d = if options.unifilar { 0.0 } else { self.input.diameter };
        let mut labels = Vec::new();

        let length_label = |value: f64, position: Point, rotation: f64| BarLabel {
            text: format!("({:.2})", value),
            position,
            rotation,
            height: settings.text_dim_height,
            is_denomination: false,
        };

        if options.dimensions {
            if self.input.left_anchor != 0.0 {
                labels.push(length_label(
                    self.input.left_anchor,
                    Point::new(
                        -settings.text_dim_distance_horizontal,
                        self.input.left_anchor / 2.0,
                    ),
                    90.0,
                ));
            }
            if self.input.right_anchor != 0.0 {
                labels.push(length_label(
                    self.input.right_anchor,
                    Point::new(
                        self.box_width - d + settings.text_dim_distance_horizontal,
                        self.input.right_anchor / 2.0,
                    ),
                    90.0,
                ));
            }
            labels.push(length_label(
                self.box_width,
                Point::new(
                    self.box_width / 2.0,
                    self.box_height - settings.text_dim_distance_vertical,
                ),
                0.0,
            ));
        }

        if options.denomination {
            if let Some(name) = self.denomination() {
                labels.push(BarLabel {
                    text: name.to_string(),
                    position: Point::new(
                        self.box_width / 2.0,
                        self.box_height / 2.0
                            + settings.text_denomination_height
                            + settings.text_denomination_distance,
                    ),
                    rotation: 0.0,
                    height: settings.text_denomination_height,
                    is_denomination: true,
                });
            }
        }

        labels
    }

    // ------------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------------

    /// Local-to-drawing transform for a bar whose box corner lands at `at`.
    ///
    /// Unifilar drawings drop by one external mandrel radius first so the
    /// single line sits on the bar axis. Vertical bars are rotated a
    /// quarter turn into their box; top and left orientations mirror the
    /// box onto itself.
    pub fn placement_transform(&self, at: Point, unifilar: bool) -> Transform {
        let mre = self.mandrel_radius_ext;
        let (mut t, h) = if unifilar {
            (Transform::translation(0.0, -mre), self.box_height - mre)
        } else {
            (Transform::identity(), self.box_height)
        };

        let (span_x, span_y) = match self.input.direction {
            Direction::Horizontal => (self.box_width, h),
            Direction::Vertical => {
                // (a, b) -> (h - b, a)
                t = t.then(Transform::from_coefficients(0.0, -1.0, h, 1.0, 0.0, 0.0));
                (h, self.box_width)
            }
        };

        t = match self.input.orientation {
            Orientation::Top => t.then(Transform::mirror_horizontal(span_y / 2.0)),
            Orientation::Left => t.then(Transform::mirror_vertical(span_x / 2.0)),
            Orientation::Right | Orientation::Bottom => t,
        };

        t.then(Transform::translation(at.x, at.y))
    }

    /// The segment plan mapped into drawing coordinates.
    pub fn placed_segments(&self, at: Point, unifilar: bool) -> Vec<Segment> {
        let t = self.placement_transform(at, unifilar);
        self.segments(unifilar)
            .iter()
            .map(|s| s.transformed(&t))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    /// Emit the longitudinal view with its box corner at `at`.
    pub fn draw_longitudinal<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        options: &BarDrawOptions,
        settings: &BarSettings,
    ) -> DrawGroups<C::Handle> {
        let mut groups = DrawGroups::new();
        groups.extend_steel(draw_segments(&self.segments(options.unifilar), canvas));

        for label in self.labels(options, settings) {
            let handle = canvas.draw_text(
                &label.text,
                label.height,
                label.position,
                label.rotation,
                Alignment::BottomCenter,
            );
            if label.is_denomination {
                groups.push_denomination(handle);
            } else {
                groups.push_dimension(handle);
            }
        }

        canvas.transform(&groups.all, &self.placement_transform(at, options.unifilar));
        groups
    }

    /// Emit the cross-section circle.
    pub fn draw_transverse<C: Canvas>(&self, canvas: &mut C, at: Point) -> C::Handle {
        let offset = self.input.transverse_center.unwrap_or_default();
        let center = Point::new(at.x + offset.x + self.radius, at.y + offset.y + self.radius);
        canvas.draw_circle(center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Entity, Sketch};
    use crate::geometry::{approx_eq, approx_point};
    use std::f64::consts::PI;

    fn straight_horizontal() -> Bar {
        Bar::new(BarInput {
            x: 1.0,
            y: 1.0,
            denomination: Some("@bar_straight_horizontal".to_string()),
            ..BarInput::new(12.0, 0.012)
        })
    }

    fn left_anchored(orientation: Orientation) -> Bar {
        Bar::new(BarInput {
            left_anchor: 0.15,
            mandrel_radius: 0.01,
            orientation,
            denomination: Some("lab".to_string()),
            ..BarInput::new(4.0, 0.01)
        })
    }

    fn right_anchored(orientation: Orientation) -> Bar {
        Bar::new(BarInput {
            right_anchor: 0.15,
            mandrel_radius: 0.01,
            orientation,
            ..BarInput::new(4.0, 0.01)
        })
    }

    fn bent() -> Bar {
        Bar::new(BarInput {
            bend_length: 1.0,
            bend_angle: 45.0,
            bend_height: 0.2,
            ..BarInput::new(4.0, 0.01)
        })
    }

    fn line_at(segments: &[Segment], index: usize) -> (Point, Point) {
        match segments[index] {
            Segment::Line { start, end } => (start, end),
            other => panic!("expected line at {}, got {:?}", index, other),
        }
    }

    fn assert_line(segments: &[Segment], index: usize, start: (f64, f64), end: (f64, f64)) {
        let (s, e) = line_at(segments, index);
        assert!(approx_point(s, start.into()), "start {:?} != {:?}", s, start);
        assert!(approx_point(e, end.into()), "end {:?} != {:?}", e, end);
    }

    #[test]
    fn test_straight_attributes() {
        let bar = straight_horizontal();
        assert_eq!(bar.bend_projection(), 0.0);
        assert_eq!(bar.mandrel_radius_ext(), 0.012);
        assert_eq!(bar.radius(), 0.006);
        assert_eq!(bar.length(), 12.0);
        assert_eq!(bar.weight(), (0.012f64.powi(2) * PI / 4.0) * 12.0 * 7850.0);
        assert_eq!(bar.box_width(), 12.0);
        assert_eq!(bar.box_height(), 0.012);
        assert_eq!(bar.position(), Point::new(1.0, 1.0));
        assert_eq!(bar.denomination(), Some("@bar_straight_horizontal"));
    }

    #[test]
    fn test_left_anchor_attributes() {
        let bar = left_anchored(Orientation::Bottom);
        assert!(approx_eq(bar.mandrel_radius_ext(), 0.02));
        assert!(approx_eq(bar.length(), 4.15));
        assert!(approx_eq(bar.box_height(), 0.17));
        assert_eq!(bar.box_width(), 4.0);
        assert!(approx_eq(bar.weight(), (0.01f64.powi(2) * PI / 4.0) * 4.15 * 7850.0));
    }

    #[test]
    fn test_bend_length_correction() {
        let bar = bent();
        assert!(approx_eq(bar.bend_projection(), 0.2));
        let expected = 4.0 + (2f64.sqrt() - 1.0) * 0.2 * 2.0;
        assert!(approx_eq(bar.length(), expected));
        // 2d + rise dominates without anchors
        assert!(approx_eq(bar.box_height(), 0.22));
    }

    #[test]
    fn test_straight_draw_counts() {
        let bar = straight_horizontal();
        let settings = BarSettings::default();
        let cases = [
            (false, false, true, 5),
            (false, true, false, 5),
            (false, true, true, 6),
            (true, true, true, 3),
        ];
        for (unifilar, dimensions, denomination, expected) in cases {
            let mut sketch = Sketch::new();
            let options = BarDrawOptions {
                unifilar,
                dimensions,
                denomination,
            };
            let groups = bar.draw_longitudinal(&mut sketch, Point::new(2.0, 1.0), &options, &settings);
            assert_eq!(groups.all.len(), expected, "{:?}", options);
        }
    }

    #[test]
    fn test_straight_horizontal_placed() {
        let bar = straight_horizontal();
        let full = bar.placed_segments(Point::new(2.0, -1.0), false);
        assert_line(&full, 0, (2.0, -0.988), (14.0, -0.988));
        assert_line(&full, 1, (2.0, -1.0), (14.0, -1.0));

        let single = bar.placed_segments(Point::new(-12.0, 2.0), true);
        assert_eq!(single.len(), 1);
        assert_line(&single, 0, (-12.0, 2.0), (0.0, 2.0));
    }

    #[test]
    fn test_straight_vertical_placed() {
        let bar = Bar::new(BarInput {
            direction: Direction::Vertical,
            ..BarInput::new(12.0, 0.01)
        });
        let full = bar.placed_segments(Point::new(-2.0, 1.0), false);
        assert_line(&full, 0, (-2.0, 1.0), (-2.0, 13.0));
        assert_line(&full, 1, (-1.99, 1.0), (-1.99, 13.0));

        let single = bar.placed_segments(Point::new(1.0, 1.0), true);
        assert_line(&single, 0, (1.0, 1.0), (1.0, 13.0));
    }

    #[test]
    fn test_left_anchor_bottom() {
        let bar = left_anchored(Orientation::Bottom);
        let full = bar.placed_segments(Point::new(5.0, 5.0), false);
        assert_line(&full, 5, (5.02, 5.17), (9.0, 5.17));
        assert_line(&full, 6, (5.02, 5.16), (9.0, 5.16));
        assert!(matches!(full[3], Segment::Arc { .. }));

        let single = bar.placed_segments(Point::new(10.0, 5.0), true);
        assert_line(&single, 0, (10.0, 5.0), (10.0, 5.15));
    }

    #[test]
    fn test_right_anchor_bottom() {
        let bar = right_anchored(Orientation::Bottom);
        let full = bar.placed_segments(Point::new(5.0, 5.0), false);
        assert_line(&full, 5, (5.0, 5.17), (8.98, 5.17));
        assert_line(&full, 6, (5.0, 5.16), (8.98, 5.16));

        let single = bar.placed_segments(Point::new(10.0, 5.0), true);
        assert_line(&single, 0, (14.0, 5.0), (14.0, 5.15));
    }

    #[test]
    fn test_top_orientation_mirrors_box() {
        let bar = left_anchored(Orientation::Top);
        let full = bar.placed_segments(Point::new(5.0, 5.0), false);
        assert_line(&full, 5, (5.02, 5.0), (9.0, 5.0));
        assert_line(&full, 6, (5.02, 5.01), (9.0, 5.01));

        let single = bar.placed_segments(Point::new(10.0, 5.0), true);
        assert_line(&single, 0, (10.0, 5.15), (10.0, 5.0));

        let right = right_anchored(Orientation::Top);
        let single = right.placed_segments(Point::new(10.0, 5.0), true);
        assert_line(&single, 0, (14.0, 5.15), (14.0, 5.0));
    }

    #[test]
    fn test_left_orientation_mirrors_box() {
        let bar = left_anchored(Orientation::Left);
        let single = bar.placed_segments(Point::new(0.0, 0.0), true);
        // the anchor ends up on the right edge of the box
        assert_line(&single, 0, (4.0, 0.0), (4.0, 0.15));
    }

    #[test]
    fn test_bent_segment_counts() {
        let bar = bent();
        assert_eq!(bar.segments(false).len(), 20);
        assert_eq!(bar.segments(true).len(), 5);
    }

    #[test]
    fn test_bent_unifilar_is_continuous() {
        let bar = bent();
        let plan = bar.segments(true);
        let run1 = line_at(&plan, 0);
        let leg1 = line_at(&plan, 1);
        let middle = line_at(&plan, 2);
        let leg2 = line_at(&plan, 3);
        let run2 = line_at(&plan, 4);

        assert!(approx_point(run1.1, leg1.1));
        assert!(approx_point(leg1.0, middle.0));
        assert!(approx_point(middle.1, leg2.0));
        assert!(approx_point(leg2.1, run2.0));
        assert!(approx_eq(run2.1.x, 4.0));
        assert!(approx_eq(middle.0.y, bar.box_height() - 0.2));
    }

    #[test]
    fn test_labels() {
        let bar = Bar::new(BarInput {
            left_anchor: 0.1,
            right_anchor: 0.15,
            mandrel_radius: 0.012,
            denomination: Some("N1".to_string()),
            ..BarInput::new(4.0, 0.012)
        });
        let labels = bar.labels(&BarDrawOptions::default(), &BarSettings::default());
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["(0.10)", "(0.15)", "(4.00)", "N1"]);
        assert_eq!(labels[0].position, Point::new(-0.05, 0.05));
        assert_eq!(labels[0].rotation, 90.0);
        assert!(labels[3].is_denomination);

        let none = bar.labels(
            &BarDrawOptions {
                dimensions: false,
                denomination: false,
                unifilar: false,
            },
            &BarSettings::default(),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_vertical_texts_stay_readable() {
        let bar = Bar::new(BarInput {
            left_anchor: 0.15,
            mandrel_radius: 0.01,
            direction: Direction::Vertical,
            ..BarInput::new(4.0, 0.01)
        });
        let mut sketch = Sketch::new();
        let groups = bar.draw_longitudinal(
            &mut sketch,
            Point::origin(),
            &BarDrawOptions::default(),
            &BarSettings::default(),
        );
        for entity in sketch.resolve(&groups.dimensions) {
            match entity {
                Entity::Text(text) => assert!(text.rotation > -90.0 && text.rotation <= 90.0),
                other => panic!("expected text, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_draw_transverse() {
        let bar = Bar::new(BarInput {
            transverse_center: Some(Point::new(0.5, 0.0)),
            ..BarInput::new(4.0, 0.02)
        });
        let mut sketch = Sketch::new();
        let handle = bar.draw_transverse(&mut sketch, Point::new(1.0, 1.0));
        match sketch.get(handle) {
            Some(Entity::Circle(circle)) => {
                assert!(approx_point(circle.center, Point::new(1.51, 1.01)));
                assert_eq!(circle.radius, 0.01);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_derived_fields_are_stable() {
        let bar = bent();
        let again = Bar::new(bar.input().clone());
        assert_eq!(bar, again);
        let _ = bar.segments(false);
        assert_eq!(bar.length(), again.length());
    }
}
