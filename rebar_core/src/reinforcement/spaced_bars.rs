//! # Spaced Bars
//!
//! A template bar repeated at a fixed spacing across a run, e.g. the
//! bottom mesh of a slab.
//!
//! ## Counting Rule
//!
//! The count is `floor(run / spacing) + 1`, plus one closing bar when the
//! run is an exact multiple of the spacing. Membership is decided in
//! integer centi-units (`round(value * 100)`), never on the float
//! remainder, so `1.2 / 0.12` gets its closing bar.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::reinforcement::{SpacedBars, SpacedBarsInput};
//!
//! let bars = SpacedBars::new(SpacedBarsInput::new(4.0, 6.0, 0.01, 0.12));
//! assert_eq!(bars.quantity(), 34);
//! assert!((bars.box_height() - 3.97).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Bar, BarDrawOptions, BarInput, Direction, Orientation};
use crate::canvas::{Canvas, DrawGroups};
use crate::errors::{RebarError, RebarResult};
use crate::geometry::{Point, Transform};
use crate::settings::SpacedBarsSettings;
use crate::units::Meters;

/// Default divisor picking the representative bar, `quantity / 3`
pub const ONE_BAR_DIVISOR: usize = 3;

// ============================================================================
// Input Types
// ============================================================================

/// Construction parameters for [`SpacedBars`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacedBarsInput {
    /// Run the bars are spread over
    pub reinforcement_length: f64,
    /// Clear length of each bar
    pub length: f64,
    pub diameter: f64,
    pub spacing: f64,
    pub x: f64,
    pub y: f64,
    pub direction: Direction,
    pub orientation: Orientation,
    pub transverse_center: Option<Point>,
    pub left_anchor: f64,
    pub right_anchor: f64,
    pub mandrel_radius: f64,
    pub bend_length: f64,
    pub bend_angle: f64,
    pub bend_height: f64,
    pub denomination: Option<String>,
}

impl Default for SpacedBarsInput {
    fn default() -> Self {
        SpacedBarsInput {
            reinforcement_length: 0.0,
            length: 0.0,
            diameter: 0.0,
            spacing: 0.0,
            x: 0.0,
            y: 0.0,
            direction: Direction::Horizontal,
            orientation: Orientation::Bottom,
            transverse_center: None,
            left_anchor: 0.0,
            right_anchor: 0.0,
            mandrel_radius: 0.0,
            bend_length: 0.0,
            bend_angle: 0.0,
            bend_height: 0.0,
            denomination: None,
        }
    }
}

impl SpacedBarsInput {
    pub fn new(reinforcement_length: f64, length: f64, diameter: f64, spacing: f64) -> Self {
        SpacedBarsInput {
            reinforcement_length,
            length,
            diameter,
            spacing,
            ..Default::default()
        }
    }

    /// Bar `index` of the array, before any group placement.
    fn bar_input(&self, index: usize) -> BarInput {
        BarInput {
            reinforcement_length: self.length,
            diameter: self.diameter,
            x: 0.0,
            y: index as f64 * self.spacing,
            left_anchor: self.left_anchor,
            right_anchor: self.right_anchor,
            mandrel_radius: self.mandrel_radius,
            bend_length: self.bend_length,
            bend_angle: self.bend_angle,
            bend_height: self.bend_height,
            direction: Direction::Horizontal,
            orientation: self.orientation,
            transverse_center: None,
            denomination: self.denomination.clone(),
        }
    }
}

/// Longitudinal drawing switches. Positions default to the one-bar index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacedBarsDrawOptions {
    pub unifilar: bool,
    pub dimensions: bool,
    /// Run dimensions (bar length on top, run on the left)
    pub reinforcement_dimensions: bool,
    /// Length labels on the sampled bar
    pub bar_dimension: bool,
    pub bar_dimension_position: Option<usize>,
    pub denomination: bool,
    pub denomination_position: Option<usize>,
    /// Draw only the representative bar
    pub one_bar: bool,
    pub one_bar_position: Option<usize>,
}

impl Default for SpacedBarsDrawOptions {
    fn default() -> Self {
        SpacedBarsDrawOptions {
            unifilar: false,
            dimensions: true,
            reinforcement_dimensions: true,
            bar_dimension: true,
            bar_dimension_position: None,
            denomination: true,
            denomination_position: None,
            one_bar: false,
            one_bar_position: None,
        }
    }
}

// ============================================================================
// Spaced Bars
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpacedBars {
    input: SpacedBarsInput,
    quantity: usize,
    bars: Vec<Bar>,
    template: Bar,
    /// Box along the run before any direction swap
    span_width: f64,
    span_height: f64,
    weight: f64,
}

/// Number of bars over `run` at `spacing`.
pub fn spaced_quantity(run: f64, spacing: f64) -> usize {
    let run_centi = Meters(run).to_centi();
    let step = Meters(spacing).to_centi();

    if step.0 <= 0 {
        warn!(spacing, "bar spacing below 1cm, keeping a single bar");
        return 1;
    }
    let mut quantity = (run / spacing).floor().max(0.0) as usize + 1;
    if run_centi.is_multiple_of(step) {
        quantity += 1;
    }
    quantity
}

impl SpacedBars {
    pub fn new(input: SpacedBarsInput) -> Self {
        let quantity = spaced_quantity(input.reinforcement_length, input.spacing);
        let template = Bar::new(input.bar_input(0));
        let bars: Vec<Bar> = (0..quantity).map(|i| Bar::new(input.bar_input(i))).collect();

        let span_width = template.box_width();
        let span_height = (quantity - 1) as f64 * input.spacing + template.box_height();
        let weight = template.weight() * quantity as f64;

        debug!(quantity, span_width, span_height, weight, "spaced bars built");

        SpacedBars {
            input,
            quantity,
            bars,
            template,
            span_width,
            span_height,
            weight,
        }
    }

    pub fn input(&self) -> &SpacedBarsInput {
        &self.input
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Every bar, bottom to top, in local coordinates
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The bar every copy is made from
    pub fn template(&self) -> &Bar {
        &self.template
    }

    pub fn reinforcement_length(&self) -> f64 {
        self.input.reinforcement_length
    }

    /// Clear length of one bar
    pub fn length(&self) -> f64 {
        self.input.length
    }

    pub fn diameter(&self) -> f64 {
        self.input.diameter
    }

    pub fn radius(&self) -> f64 {
        self.input.diameter / 2.0
    }

    pub fn spacing(&self) -> f64 {
        self.input.spacing
    }

    pub fn position(&self) -> Point {
        Point::new(self.input.x, self.input.y)
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

    /// Total weight in kg
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn box_width(&self) -> f64 {
        match self.input.direction {
            Direction::Horizontal => self.span_width,
            Direction::Vertical => self.span_height,
        }
    }

    pub fn box_height(&self) -> f64 {
        match self.input.direction {
            Direction::Horizontal => self.span_height,
            Direction::Vertical => self.span_width,
        }
    }

    /// Index drawn in one-bar mode unless told otherwise.
    pub fn one_bar_index(&self) -> usize {
        self.quantity / ONE_BAR_DIVISOR
    }

    /// Pick the top and bottom sampled bars for a schematic view.
    ///
    /// Defaults are two thirds and one third of the way along the run.
    pub fn sample_positions(
        &self,
        top: Option<usize>,
        bottom: Option<usize>,
    ) -> RebarResult<(usize, usize)> {
        let top = top.unwrap_or(self.quantity * 2 / ONE_BAR_DIVISOR);
        let bottom = bottom.unwrap_or(self.one_bar_index());

        for index in [top, bottom] {
            if index >= self.quantity {
                return Err(RebarError::invalid_input(
                    "sample_position",
                    index.to_string(),
                    format!("Only {} bars in the array", self.quantity),
                ));
            }
        }
        if top == bottom {
            return Err(RebarError::OneBarPositionConflict { top, bottom });
        }
        Ok((top, bottom))
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    /// Local-to-drawing transform of the whole array.
    pub fn placement_transform(&self, at: Point) -> Transform {
        let t = match self.input.direction {
            Direction::Horizontal => Transform::identity(),
            // (a, b) -> (span - b, a)
            Direction::Vertical => {
                Transform::from_coefficients(0.0, -1.0, self.span_height, 1.0, 0.0, 0.0)
            }
        };
        t.then(Transform::translation(at.x, at.y))
    }

    pub fn draw_longitudinal<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        options: &SpacedBarsDrawOptions,
        settings: &SpacedBarsSettings,
    ) -> DrawGroups<C::Handle> {
        let one_bar = options.one_bar_position.unwrap_or(self.one_bar_index());
        let dimension_at = options.bar_dimension_position.unwrap_or(one_bar);
        let denomination_at = options.denomination_position.unwrap_or(one_bar);

        let mut groups = DrawGroups::new();
        for (i, bar) in self.bars.iter().enumerate() {
            if options.one_bar && i != one_bar {
                continue;
            }
            let bar_options = BarDrawOptions {
                unifilar: options.unifilar,
                dimensions: options.bar_dimension && i == dimension_at,
                denomination: options.denomination && i == denomination_at,
            };
            groups.merge(bar.draw_longitudinal(canvas, bar.position(), &bar_options, &settings.bar));
        }

        if options.dimensions && options.reinforcement_dimensions {
            let length = self.input.length;
            let top_y = self.bars.last().map_or(0.0, |b| b.position().y);
            let style = settings.dim_style.as_str();

            groups.push_dimension(canvas.draw_linear_dimension(
                Point::new(length / 2.0, top_y + settings.text_dim_distance_vertical),
                Point::new(0.0, top_y),
                Point::new(length, top_y),
                0.0,
                style,
            ));
            groups.push_dimension(canvas.draw_linear_dimension(
                Point::new(
                    -settings.text_dim_distance_horizontal,
                    self.input.reinforcement_length / 2.0,
                ),
                Point::origin(),
                Point::new(0.0, top_y),
                90.0,
                style,
            ));
        }

        canvas.transform(&groups.all, &self.placement_transform(at));
        groups
    }

    /// Cross-section circles stacked at the spacing, plus an optional run
    /// dimension.
    pub fn draw_transverse<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        dimensions: bool,
        settings: &SpacedBarsSettings,
    ) -> DrawGroups<C::Handle> {
        let mut groups = DrawGroups::new();
        for i in 0..self.quantity {
            let handle = self
                .template
                .draw_transverse(canvas, Point::new(0.0, self.input.spacing * i as f64));
            groups.push_steel(handle);
        }

        if dimensions {
            groups.push_dimension(canvas.draw_linear_dimension(
                Point::new(-settings.text_dim_distance_vertical, self.span_height / 2.0),
                Point::origin(),
                Point::new(0.0, self.span_height),
                90.0,
                settings.dim_style.as_str(),
            ));
        }

        let offset = self.input.transverse_center.unwrap_or_default();
        let at = Point::new(at.x + offset.x, at.y + offset.y);
        canvas.transform(&groups.all, &self.placement_transform(at));
        groups
    }
}
