//! Closed rectangular hoops with 45° hooks at the top-left corner.
//!
//! The hook pivots are found by intersecting slope -1 anchor lines with
//! either the 45° diagonal through the rounded corner's center or the top
//! edge of the hoop. In unifilar mode the bar thickness collapses to zero.

use std::f64::consts::FRAC_1_SQRT_2;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{bar_weight, Direction, Orientation};
use crate::canvas::{draw_segments, Alignment, Canvas, DrawGroups, RoundedRect, Segment};
use crate::geometry::{LineEq, Point, Transform};
use crate::settings::StirrupSettings;
use crate::units::Meters;

const SIN45: f64 = FRAC_1_SQRT_2;
const COS45: f64 = FRAC_1_SQRT_2;

/// Construction parameters for a [`Stirrup`]. Lengths in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StirrupInput {
    /// External width of the hoop
    pub width: f64,
    /// External height of the hoop
    pub height: f64,
    pub diameter: f64,
    /// Run over which the hoop repeats
    pub reinforcement_length: f64,
    pub spacing: f64,
    pub x: f64,
    pub y: f64,
    pub mandrel_radius_top: f64,
    pub mandrel_radius_bottom: f64,
    /// Hook length
    pub anchor: f64,
    pub direction: Direction,
    pub orientation: Orientation,
    pub denomination: Option<String>,
}

impl Default for StirrupInput {
    fn default() -> Self {
        StirrupInput {
            width: 0.0,
            height: 0.0,
            diameter: 0.0,
            reinforcement_length: 0.0,
            spacing: 0.0,
            x: 0.0,
            y: 0.0,
            mandrel_radius_top: 0.0,
            mandrel_radius_bottom: 0.0,
            anchor: 0.15,
            direction: Direction::Horizontal,
            orientation: Orientation::Bottom,
            denomination: None,
        }
    }
}

impl StirrupInput {
    pub fn new(
        width: f64,
        height: f64,
        diameter: f64,
        reinforcement_length: f64,
        spacing: f64,
    ) -> Self {
        StirrupInput {
            width,
            height,
            diameter,
            reinforcement_length,
            spacing,
            ..Default::default()
        }
    }
}

/// One straight hook leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HookLine {
    /// Where the leg leaves the corner
    pub pivot: Point,
    /// Free end
    pub end: Point,
}

impl HookLine {
    pub fn segment(&self) -> Segment {
        Segment::line(self.pivot, self.end)
    }
}

/// The four hook faces in local coordinates.
///
/// `top_*` is the hook leaving the top edge, `bottom_*` the one leaving
/// the left edge. In unifilar mode the exterior faces coincide with the
/// interior ones except for `top_ext`, which is not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StirrupHooks {
    pub top_int: HookLine,
    pub top_ext: HookLine,
    pub bottom_int: HookLine,
    pub bottom_ext: HookLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stirrup {
    input: StirrupInput,
    mandrel_radius_ext_top: f64,
    mandrel_radius_ext_bottom: f64,
    quantity: usize,
    length: f64,
    weight: f64,
}

impl Stirrup {
    pub fn new(input: StirrupInput) -> Self {
        let d = input.diameter;
        let length = (input.width + input.height + input.anchor) * 2.0;

        let run = Meters(input.reinforcement_length).to_centi();
        let step = Meters(input.spacing).to_centi();
        let quantity = if step.0 > 0 {
            (run.0.max(0) / step.0) as usize + 1
        } else {
            warn!(spacing = input.spacing, "stirrup spacing below 1cm, drawing a single hoop");
            1
        };

        let stirrup = Stirrup {
            mandrel_radius_ext_top: input.mandrel_radius_top + d,
            mandrel_radius_ext_bottom: input.mandrel_radius_bottom + d,
            quantity,
            length,
            weight: bar_weight(d, length),
            input,
        };
        debug!(
            quantity = stirrup.quantity,
            length = stirrup.length,
            weight = stirrup.weight,
            "stirrup built"
        );
        stirrup
    }

    pub fn input(&self) -> &StirrupInput {
        &self.input
    }

    pub fn width(&self) -> f64 {
        self.input.width
    }

    pub fn height(&self) -> f64 {
        self.input.height
    }

    pub fn diameter(&self) -> f64 {
        self.input.diameter
    }

    pub fn reinforcement_length(&self) -> f64 {
        self.input.reinforcement_length
    }

    pub fn spacing(&self) -> f64 {
        self.input.spacing
    }

    pub fn anchor(&self) -> f64 {
        self.input.anchor
    }

    pub fn position(&self) -> Point {
        Point::new(self.input.x, self.input.y)
    }

    pub fn mandrel_radius_top(&self) -> f64 {
        self.input.mandrel_radius_top
    }

    pub fn mandrel_radius_bottom(&self) -> f64 {
        self.input.mandrel_radius_bottom
    }

    pub fn mandrel_radius_ext_top(&self) -> f64 {
        self.mandrel_radius_ext_top
    }

    pub fn mandrel_radius_ext_bottom(&self) -> f64 {
        self.mandrel_radius_ext_bottom
    }

    /// Hoops along the run, `floor(run / spacing) + 1` in centi-units
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Developed length of one hoop
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Weight of one hoop in kg
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn box_width(&self) -> f64 {
        self.input.width
    }

    pub fn box_height(&self) -> f64 {
        self.input.height
    }

    pub fn direction(&self) -> Direction {
        self.input.direction
    }

    pub fn orientation(&self) -> Orientation {
        self.input.orientation
    }

    pub fn denomination(&self) -> Option<&str> {
        self.input.denomination.as_deref()
    }

    // ------------------------------------------------------------------------
    // Transverse geometry
    // ------------------------------------------------------------------------

    pub fn hooks(&self, unifilar: bool) -> StirrupHooks {
        let h = self.input.height;
        let r = self.input.mandrel_radius_top;
        let d = self.input.diameter;
        let diff = if unifilar { 0.0 } else { d };
        let anchor = self.input.anchor;

        // corner center the hooks leave from
        let corner = Point::new(r + diff, h - r - diff);
        let on_circle = |radius: f64, sign: f64| {
            corner.offset(sign * radius * COS45, sign * radius * SIN45)
        };

        let top_side = LineEq::new(0.0, if unifilar { h } else { h - d });
        let circle_line = if unifilar {
            LineEq::through(Point::new(r, h - r), 1.0)
        } else {
            let mre = self.mandrel_radius_ext_top;
            LineEq::through(Point::new(mre, h - mre), 1.0)
        };

        // slopes -1 vs 0/1 never coincide
        let pivot = |through: Point, other: &LineEq| {
            LineEq::through(through, -1.0)
                .intersection(other)
                .unwrap_or(through)
        };
        let leg = |pivot: Point| HookLine {
            pivot,
            end: pivot.offset(COS45 * anchor, -SIN45 * anchor),
        };

        let top_int = leg(pivot(on_circle(r, 1.0), &circle_line));
        let mut top_ext = leg(pivot(on_circle(r + diff, 1.0), &top_side));
        let bottom_int = leg(pivot(on_circle(r, -1.0), &circle_line));
        let bottom_ext = if unifilar {
            bottom_int
        } else {
            leg(pivot(on_circle(r + diff, -1.0), &circle_line))
        };

        if !unifilar {
            top_ext.end = top_int.end.offset(d * COS45, d * SIN45);
        }

        StirrupHooks {
            top_int,
            top_ext,
            bottom_int,
            bottom_ext,
        }
    }

    /// Cross-section outline in local coordinates.
    pub fn transverse_segments(&self, unifilar: bool) -> Vec<Segment> {
        let w = self.input.width;
        let h = self.input.height;
        let d = self.input.diameter;
        let rt = self.input.mandrel_radius_top;
        let rb = self.input.mandrel_radius_bottom;
        let radii = [rt, rt, rb, rb];
        let hooks = self.hooks(unifilar);

        if unifilar {
            let mut out = vec![hooks.top_int.segment(), hooks.bottom_int.segment()];
            out.extend(RoundedRect::new(0.0, 0.0, w, h, rt).with_radii(radii).segments());
            return out;
        }

        let mre_top = self.mandrel_radius_ext_top;
        let mre_bottom = self.mandrel_radius_ext_bottom;

        let mut out = RoundedRect::new(d, d, w - 2.0 * d, h - 2.0 * d, rt)
            .with_thickness(d)
            .with_sides([true, true, true, false])
            .with_corners([false, true, true, true])
            .with_radii(radii)
            .segments();

        // outer left edge
        out.push(Segment::line(
            Point::new(0.0, mre_bottom),
            Point::new(0.0, h - mre_top),
        ));

        out.extend([
            hooks.top_ext.segment(),
            hooks.top_int.segment(),
            hooks.bottom_int.segment(),
            hooks.bottom_ext.segment(),
            Segment::line(hooks.bottom_int.end, hooks.bottom_ext.end),
            Segment::line(hooks.top_int.end, hooks.top_ext.end),
        ]);

        // inner left edge runs up to where the top hook's inner face starts
        let back = d * 2.0 + rt * 2.0;
        out.push(Segment::line(
            Point::new(d, mre_bottom),
            hooks.top_ext.pivot.offset(-back * COS45, -back * SIN45),
        ));

        let center = Point::new(mre_top, h - mre_top);
        out.push(Segment::arc(center, rt + d, 90.0, 225.0));
        out.push(Segment::arc(center, rt, 45.0, 225.0));

        out
    }

    /// One vertical leg per hoop, `spacing` apart.
    pub fn longitudinal_segments(&self) -> Vec<Segment> {
        let h = self.input.height;
        (0..self.quantity)
            .map(|i| {
                let x = self.input.spacing * i as f64;
                Segment::line(Point::new(x, 0.0), Point::new(x, h))
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------------

    /// `extent` is the horizontal size mirrored by a left orientation.
    fn placement(&self, at: Point, extent: f64) -> Transform {
        let h = self.input.height;
        let vertical = self.input.direction.is_vertical();
        let mut t = if vertical {
            Transform::from_coefficients(0.0, -1.0, h, 1.0, 0.0, 0.0)
        } else {
            Transform::identity()
        };
        if self.input.orientation == Orientation::Left {
            let span = if vertical { h } else { extent };
            t = t.then(Transform::mirror_vertical(span / 2.0));
        }
        t.then(Transform::translation(at.x, at.y))
    }

    pub fn transverse_transform(&self, at: Point) -> Transform {
        self.placement(at, self.input.width)
    }

    pub fn longitudinal_transform(&self, at: Point) -> Transform {
        self.placement(at, self.input.reinforcement_length)
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    pub fn draw_transverse<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        unifilar: bool,
        dimensions: bool,
        settings: &StirrupSettings,
    ) -> DrawGroups<C::Handle> {
        let mut groups = DrawGroups::new();
        groups.extend_steel(draw_segments(&self.transverse_segments(unifilar), canvas));

        if dimensions {
            let w = self.input.width;
            let h = self.input.height;
            let style = settings.dim_style.as_str();
            let hook = self.hooks(unifilar).bottom_ext;

            groups.push_dimension(canvas.draw_linear_dimension(
                Point::new(-settings.text_dim_distance_horizontal, h / 2.0),
                Point::origin(),
                Point::new(0.0, h),
                90.0,
                style,
            ));
            groups.push_dimension(canvas.draw_linear_dimension(
                Point::new(
                    w / 2.0 - settings.text_dim_distance_anchor,
                    h - settings.text_dim_distance_anchor,
                ),
                hook.pivot,
                hook.end,
                315.0,
                style,
            ));
            groups.push_dimension(canvas.draw_linear_dimension(
                Point::new(w / 2.0, h + settings.text_dim_distance_vertical),
                Point::new(0.0, h),
                Point::new(w, h),
                0.0,
                style,
            ));
            groups.push_dimension(canvas.draw_text(
                &format!("L: {:.2}", self.length),
                settings.text_length_count_height,
                Point::new(w / 2.0, -settings.text_distance_length_count),
                0.0,
                Alignment::BottomCenter,
            ));
        }

        canvas.transform(&groups.all, &self.transverse_transform(at));
        groups
    }

    pub fn draw_longitudinal<C: Canvas>(&self, canvas: &mut C, at: Point) -> DrawGroups<C::Handle> {
        let mut groups = DrawGroups::new();
        groups.extend_steel(draw_segments(&self.longitudinal_segments(), canvas));
        canvas.transform(&groups.all, &self.longitudinal_transform(at));
        groups
    }
}
