//! # Concrete Section
//!
//! A cross-section polygon extruded either vertically (`height`, columns)
//! or horizontally (`length`, beams). Volume and weight follow from the
//! polygon area and the extrusion; drawing produces the outline in
//! transverse, longitudinal and right views.
//!
//! ## Views
//!
//! - Transverse: the polygon itself, moved so its bounding-box corner
//!   lands on the requested point
//! - Longitudinal: for a beam, one line per level of the left profile
//!   (bottom-left vertex clockwise to the top-left vertex); for a column,
//!   one line per station of the bottom profile
//! - Right: the same using the right profile
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::concrete::{ConcreteInput, ConcreteSection};
//! use rebar_core::geometry::Point;
//!
//! let rect = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.2, 0.0),
//!     Point::new(0.2, 0.4),
//!     Point::new(0.0, 0.4),
//! ];
//! let beam = ConcreteSection::new(ConcreteInput::new(rect).with_length(5.0)).unwrap();
//!
//! assert!((beam.volume() - 0.4).abs() < 1e-12);
//! assert!((beam.weight() - 960.0).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::canvas::{Canvas, DrawGroups};
use crate::errors::{RebarError, RebarResult};
use crate::geometry::line::{angle_between, displace_perpendicular};
use crate::geometry::{Axis, Point, Polygon, RotationDirection, Transform};
use crate::settings::{ConcreteSettings, CONCRETE_DENSITY};

// ============================================================================
// Input Types
// ============================================================================

/// Which way the cross-section is extruded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Extrusion {
    /// Vertical, e.g. a column
    Height(f64),
    /// Horizontal, e.g. a beam
    Length(f64),
}

impl Extrusion {
    pub fn value(&self) -> f64 {
        match self {
            Extrusion::Height(v) | Extrusion::Length(v) => *v,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Extrusion::Height(_) => "Height",
            Extrusion::Length(_) => "Length",
        }
    }
}

impl fmt::Display for Extrusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_name(), self.value())
    }
}

/// Input for a concrete section. Exactly one of `height` and `length`
/// must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcreteInput {
    pub vertices: Vec<Point>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub x: f64,
    pub y: f64,
    /// kg/m³
    pub specific_weight: f64,
}

impl Default for ConcreteInput {
    fn default() -> Self {
        ConcreteInput {
            vertices: Vec::new(),
            height: None,
            length: None,
            x: 0.0,
            y: 0.0,
            specific_weight: CONCRETE_DENSITY,
        }
    }
}

impl ConcreteInput {
    pub fn new(vertices: Vec<Point>) -> Self {
        ConcreteInput {
            vertices,
            ..Default::default()
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcreteDrawOptions {
    pub dimensions: bool,
    /// Overall width and height dimensions
    pub boxing: bool,
    /// One dimension per polygon side or profile step
    pub inner: bool,
}

impl Default for ConcreteDrawOptions {
    fn default() -> Self {
        ConcreteDrawOptions {
            dimensions: true,
            boxing: true,
            inner: true,
        }
    }
}

// ============================================================================
// Concrete Section
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcreteSection {
    input: ConcreteInput,
    polygon: Polygon,
    extrusion: Extrusion,
    box_width: f64,
    box_height: f64,
    box_width_transverse: f64,
    box_height_transverse: f64,
    volume: f64,
    weight: f64,
}

/// Rebuilt from its `input` through [`ConcreteSection::new`].
impl<'de> Deserialize<'de> for ConcreteSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Record {
            input: ConcreteInput,
        }

        let record = Record::deserialize(deserializer)?;
        ConcreteSection::new(record.input).map_err(serde::de::Error::custom)
    }
}

impl ConcreteSection {
    pub fn new(input: ConcreteInput) -> RebarResult<Self> {
        let extrusion = match (input.height, input.length) {
            (Some(height), None) => Extrusion::Height(height),
            (None, Some(length)) => Extrusion::Length(length),
            (None, None) => return Err(RebarError::MissingCrossSectionDimension),
            (Some(height), Some(length)) => {
                return Err(RebarError::invalid_input(
                    "height/length",
                    format!("height={}, length={}", height, length),
                    "Give either a height or a length, not both",
                ))
            }
        };
        if !(extrusion.value() > 0.0) {
            return Err(RebarError::invalid_input(
                extrusion.display_name().to_lowercase(),
                extrusion.value().to_string(),
                "Must be positive",
            ));
        }

        let polygon = Polygon::new(input.vertices.clone())?;
        let (min, max) = polygon.bounds();
        let box_width_transverse = max.x - min.x;
        let box_height_transverse = max.y - min.y;

        let (box_width, box_height) = match extrusion {
            Extrusion::Height(height) => (box_width_transverse, height),
            Extrusion::Length(length) => (length, box_height_transverse),
        };

        let volume = polygon.area() * extrusion.value();
        let weight = volume * input.specific_weight;

        debug!(%extrusion, volume, weight, box_width, box_height, "concrete section");

        Ok(ConcreteSection {
            input,
            polygon,
            extrusion,
            box_width,
            box_height,
            box_width_transverse,
            box_height_transverse,
            volume,
            weight,
        })
    }

    pub fn input(&self) -> &ConcreteInput {
        &self.input
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn extrusion(&self) -> Extrusion {
        self.extrusion
    }

    /// Extrusion depth, whichever way it runs
    pub fn dim3d(&self) -> f64 {
        self.extrusion.value()
    }

    pub fn position(&self) -> Point {
        Point::new(self.input.x, self.input.y)
    }

    pub fn box_width(&self) -> f64 {
        self.box_width
    }

    pub fn box_height(&self) -> f64 {
        self.box_height
    }

    pub fn box_width_transverse(&self) -> f64 {
        self.box_width_transverse
    }

    pub fn box_height_transverse(&self) -> f64 {
        self.box_height_transverse
    }

    /// m³
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// kg
    pub fn weight(&self) -> f64 {
        self.weight
    }

    // ------------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------------

    /// Vertices from `start` to `end` walking clockwise.
    ///
    /// The walk direction comes from the signed area so that sections
    /// given counterclockwise produce the same profile.
    fn clockwise_chain(&self, start: Point, end: Point) -> Vec<Point> {
        let start = self.polygon.index_of(start).unwrap_or(0);
        let end = self.polygon.index_of(end).unwrap_or(0);
        let heuristic = self.polygon.rotation_direction();
        let direction = match self.polygon.winding() {
            RotationDirection::Clockwise => heuristic,
            RotationDirection::Counterclockwise => heuristic.opposite(),
        };
        self.polygon.slice_by_rotation(start, end, direction)
    }

    /// Bottom-left vertex up to the top-left vertex
    pub fn left_profile(&self) -> Vec<Point> {
        self.clockwise_chain(self.polygon.bottom_points()[0], self.polygon.top_points()[0])
    }

    /// Lowest right vertex round to the lowest left vertex
    pub fn bottom_profile(&self) -> Vec<Point> {
        self.clockwise_chain(self.polygon.right_points()[0], self.polygon.left_points()[0])
    }

    /// Top-right vertex down to the bottom-right vertex
    pub fn right_profile(&self) -> Vec<Point> {
        let top = self.polygon.top_points();
        let bottom = self.polygon.bottom_points();
        self.clockwise_chain(top[top.len() - 1], bottom[bottom.len() - 1])
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    /// Cross-section outline with its bounding-box corner at `at`.
    pub fn draw_transverse<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        options: &ConcreteDrawOptions,
        settings: &ConcreteSettings,
    ) -> DrawGroups<C::Handle> {
        let mut groups = DrawGroups::new();
        let (min, _) = self.polygon.bounds();
        let shift = Transform::translation(at.x - min.x, at.y - min.y);

        let outline = canvas.draw_polyline(self.polygon.vertices(), true);
        canvas.transform(std::slice::from_ref(&outline), &shift);
        groups.push_concrete(outline);

        if !options.dimensions {
            return groups;
        }
        if options.boxing {
            boxing_dimensions(
                canvas,
                &mut groups,
                at,
                self.box_width_transverse,
                self.box_height_transverse,
                settings,
            );
        }
        if options.inner {
            let equations = self.polygon.side_equations();
            let centers = self.polygon.side_centers();
            for (i, (equation, center)) in equations.iter().zip(&centers).enumerate() {
                let (p1, p2) = self.polygon.side(i);
                let base = displace_perpendicular(
                    *center,
                    equation.slope,
                    -settings.text_dim_inner_perpendicular_distance,
                );
                groups.push_dimension(canvas.draw_linear_dimension(
                    shift.apply(base),
                    shift.apply(p1),
                    shift.apply(p2),
                    angle_between(p1, p2, Axis::X),
                    &settings.dim_style_inner,
                ));
            }
        }
        groups
    }

    /// Side elevation along the extrusion.
    ///
    /// Beams show the left profile as horizontal lines over `length`;
    /// columns show the bottom profile as vertical lines over `height`.
    pub fn draw_longitudinal<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        options: &ConcreteDrawOptions,
        settings: &ConcreteSettings,
    ) -> DrawGroups<C::Handle> {
        let (min, _) = self.polygon.bounds();
        match self.extrusion {
            Extrusion::Length(length) => {
                let levels = levels(&self.left_profile(), Axis::Y, min.y);
                draw_run_view(
                    canvas,
                    at,
                    &levels,
                    length,
                    self.box_height_transverse,
                    options,
                    settings,
                )
            }
            Extrusion::Height(height) => {
                let stations = levels(&self.bottom_profile(), Axis::X, min.x);
                draw_column_view(
                    canvas,
                    at,
                    &stations,
                    self.box_width_transverse,
                    height,
                    options,
                    settings,
                )
            }
        }
    }

    /// Elevation seen from the right. Column profiles are laid out with
    /// their section depth running along x.
    pub fn draw_right_view<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        options: &ConcreteDrawOptions,
        settings: &ConcreteSettings,
    ) -> DrawGroups<C::Handle> {
        let (min, _) = self.polygon.bounds();
        let levels = levels(&self.right_profile(), Axis::Y, min.y);
        match self.extrusion {
            Extrusion::Length(length) => draw_run_view(
                canvas,
                at,
                &levels,
                length,
                self.box_height_transverse,
                options,
                settings,
            ),
            Extrusion::Height(height) => draw_column_view(
                canvas,
                at,
                &levels,
                self.box_height_transverse,
                height,
                options,
                settings,
            ),
        }
    }

    /// Front elevation: the cross-section for beams, the longitudinal view
    /// for columns.
    pub fn draw_front_view<C: Canvas>(
        &self,
        canvas: &mut C,
        at: Point,
        options: &ConcreteDrawOptions,
        settings: &ConcreteSettings,
    ) -> DrawGroups<C::Handle> {
        match self.extrusion {
            Extrusion::Length(_) => self.draw_transverse(canvas, at, options, settings),
            Extrusion::Height(_) => self.draw_longitudinal(canvas, at, options, settings),
        }
    }
}

// ============================================================================
// View Helpers
// ============================================================================

/// Profile coordinates on `axis` relative to `origin`, without repeats.
fn levels(profile: &[Point], axis: Axis, origin: f64) -> Vec<f64> {
    let mut out: Vec<f64> = profile.iter().map(|p| p.coord(axis) - origin).collect();
    out.dedup_by(|a, b| (*a - *b).abs() < 1e-12);
    out
}

fn boxing_dimensions<C: Canvas>(
    canvas: &mut C,
    groups: &mut DrawGroups<C::Handle>,
    at: Point,
    width: f64,
    height: f64,
    settings: &ConcreteSettings,
) {
    groups.push_dimension(canvas.draw_linear_dimension(
        at.offset(width / 2.0, height + settings.text_dim_distance_horizontal),
        at.offset(0.0, height),
        at.offset(width, height),
        0.0,
        &settings.dim_style_boxing,
    ));
    groups.push_dimension(canvas.draw_linear_dimension(
        at.offset(-settings.text_dim_distance_vertical, height / 2.0),
        at,
        at.offset(0.0, height),
        90.0,
        &settings.dim_style_boxing,
    ));
}

/// Horizontal member: one line per level over `run`, closed by end caps.
fn draw_run_view<C: Canvas>(
    canvas: &mut C,
    at: Point,
    levels: &[f64],
    run: f64,
    depth: f64,
    options: &ConcreteDrawOptions,
    settings: &ConcreteSettings,
) -> DrawGroups<C::Handle> {
    let mut groups = DrawGroups::new();
    for &y in levels {
        groups.push_concrete(canvas.draw_line(at.offset(0.0, y), at.offset(run, y)));
    }
    groups.push_concrete(canvas.draw_line(at.offset(0.0, depth), at));
    groups.push_concrete(canvas.draw_line(at.offset(run, depth), at.offset(run, 0.0)));

    if options.dimensions {
        if options.boxing {
            boxing_dimensions(canvas, &mut groups, at, run, depth, settings);
        }
        if options.inner {
            let offset = settings.text_dim_inner_perpendicular_distance;
            for pair in levels.windows(2) {
                groups.push_dimension(canvas.draw_linear_dimension(
                    at.offset(-offset, (pair[0] + pair[1]) / 2.0),
                    at.offset(0.0, pair[0]),
                    at.offset(0.0, pair[1]),
                    90.0,
                    &settings.dim_style_inner,
                ));
            }
        }
    }
    groups
}

/// Vertical member: one line per station over `height`, closed at the
/// bottom and top.
fn draw_column_view<C: Canvas>(
    canvas: &mut C,
    at: Point,
    stations: &[f64],
    width: f64,
    height: f64,
    options: &ConcreteDrawOptions,
    settings: &ConcreteSettings,
) -> DrawGroups<C::Handle> {
    let mut groups = DrawGroups::new();
    for &x in stations {
        groups.push_concrete(canvas.draw_line(at.offset(x, 0.0), at.offset(x, height)));
    }
    groups.push_concrete(canvas.draw_line(at, at.offset(width, 0.0)));
    groups.push_concrete(canvas.draw_line(at.offset(0.0, height), at.offset(width, height)));

    if options.dimensions {
        if options.boxing {
            boxing_dimensions(canvas, &mut groups, at, width, height, settings);
        }
        if options.inner {
            let offset = settings.text_dim_inner_perpendicular_distance;
            for pair in stations.windows(2) {
                groups.push_dimension(canvas.draw_linear_dimension(
                    at.offset((pair[0] + pair[1]) / 2.0, height + offset),
                    at.offset(pair[0], height),
                    at.offset(pair[1], height),
                    0.0,
                    &settings.dim_style_inner,
                ));
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Entity, Sketch};
    use crate::geometry::{approx_eq, approx_point};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
        vec![
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ]
    }

    /// Flanged beam: 0.2 web under a 0.8 wide, 0.1 deep flange
    fn tee() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.2, 0.0),
            Point::new(0.2, 0.4),
            Point::new(0.5, 0.4),
            Point::new(0.5, 0.5),
            Point::new(-0.3, 0.5),
            Point::new(-0.3, 0.4),
            Point::new(0.0, 0.4),
        ]
    }

    fn dims(sketch: &Sketch, ids: &[crate::canvas::EntityId]) -> Vec<crate::canvas::LinearDimension> {
        sketch
            .resolve(ids)
            .filter_map(|e| match e {
                Entity::Dimension(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_missing_dimension() {
        let err = ConcreteSection::new(ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5))).unwrap_err();
        assert_eq!(err, RebarError::MissingCrossSectionDimension);
    }

    #[test]
    fn test_both_dimensions_rejected() {
        let input = ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5))
            .with_height(3.0)
            .with_length(5.0);
        let err = ConcreteSection::new(input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_extrusion() {
        let input = ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_length(0.0);
        assert!(ConcreteSection::new(input).is_err());
    }

    #[test]
    fn test_degenerate_polygon() {
        let input = ConcreteInput::new(vec![Point::origin(), Point::new(1.0, 0.0)]).with_height(3.0);
        assert_eq!(ConcreteSection::new(input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_beam_attributes() {
        let beam = ConcreteSection::new(ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_length(5.0)).unwrap();
        assert_eq!(beam.dim3d(), 5.0);
        assert_eq!(beam.box_width(), 5.0);
        assert!(approx_eq(beam.box_height(), 0.5));
        assert!(approx_eq(beam.box_width_transverse(), 0.3));
        assert!(approx_eq(beam.box_height_transverse(), 0.5));
        assert!(approx_eq(beam.volume(), 0.75));
        assert!(approx_eq(beam.weight(), 1800.0));
    }

    #[test]
    fn test_column_attributes() {
        let input = ConcreteInput {
            specific_weight: 2500.0,
            ..ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_height(3.0)
        };
        let column = ConcreteSection::new(input).unwrap();
        assert!(approx_eq(column.box_width(), 0.3));
        assert_eq!(column.box_height(), 3.0);
        assert!(approx_eq(column.volume(), 0.45));
        assert!(approx_eq(column.weight(), 1125.0));
    }

    #[test]
    fn test_tee_attributes() {
        let beam = ConcreteSection::new(ConcreteInput::new(tee()).with_length(4.0)).unwrap();
        assert!(approx_eq(beam.box_width_transverse(), 0.8));
        assert!(approx_eq(beam.box_height_transverse(), 0.5));
        assert!(approx_eq(beam.volume(), 0.64));
        assert!(approx_eq(beam.weight(), 1536.0));
    }

    #[test]
    fn test_profiles() {
        let beam = ConcreteSection::new(ConcreteInput::new(tee()).with_length(4.0)).unwrap();
        assert_eq!(
            beam.left_profile(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.4),
                Point::new(-0.3, 0.4),
                Point::new(-0.3, 0.5),
            ]
        );
        assert_eq!(
            beam.right_profile(),
            vec![
                Point::new(0.5, 0.5),
                Point::new(0.5, 0.4),
                Point::new(0.2, 0.4),
                Point::new(0.2, 0.0),
            ]
        );
        assert_eq!(
            beam.bottom_profile(),
            vec![
                Point::new(0.5, 0.4),
                Point::new(0.2, 0.4),
                Point::new(0.2, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.4),
                Point::new(-0.3, 0.4),
            ]
        );
    }

    #[test]
    fn test_profile_ignores_winding() {
        let mut clockwise = rect(0.0, 0.0, 0.3, 0.5);
        clockwise.reverse();
        let a = ConcreteSection::new(ConcreteInput::new(clockwise).with_length(1.0)).unwrap();
        let b = ConcreteSection::new(ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_length(1.0)).unwrap();
        assert_eq!(a.left_profile(), b.left_profile());
        assert_eq!(a.left_profile(), vec![Point::new(0.0, 0.0), Point::new(0.0, 0.5)]);
    }

    #[test]
    fn test_transverse() {
        let beam = ConcreteSection::new(ConcreteInput::new(rect(1.0, 1.0, 0.3, 0.5)).with_length(5.0)).unwrap();
        let mut sketch = Sketch::new();
        let groups = beam.draw_transverse(
            &mut sketch,
            Point::new(2.0, 3.0),
            &ConcreteDrawOptions::default(),
            &ConcreteSettings::default(),
        );

        assert_eq!(groups.concrete.len(), 1);
        assert_eq!(groups.dimensions.len(), 2 + 4);
        assert_eq!(groups.all.len(), 7);

        match sketch.get(groups.concrete[0]) {
            Some(Entity::Polyline(outline)) => {
                assert!(outline.closed);
                assert!(approx_point(outline.points[0], Point::new(2.0, 3.0)));
                assert!(approx_point(outline.points[2], Point::new(2.3, 3.5)));
            }
            other => panic!("expected polyline, got {:?}", other),
        }

        let dims = dims(&sketch, &groups.dimensions);
        assert!(approx_point(dims[0].base, Point::new(2.15, 3.75)));
        assert!(approx_eq(dims[0].measurement(), 0.3));
        assert!(approx_point(dims[1].base, Point::new(1.75, 3.25)));
        assert!(approx_eq(dims[1].measurement(), 0.5));
        // bottom side dimension sits below the outline
        assert!(approx_point(dims[2].base, Point::new(2.15, 2.95)));
        assert!(approx_eq(dims[2].measurement(), 0.3));
    }

    #[test]
    fn test_transverse_without_dimensions() {
        let beam = ConcreteSection::new(ConcreteInput::new(tee()).with_length(5.0)).unwrap();
        let mut sketch = Sketch::new();
        let options = ConcreteDrawOptions {
            dimensions: false,
            ..Default::default()
        };
        let groups = beam.draw_transverse(&mut sketch, Point::origin(), &options, &ConcreteSettings::default());
        assert_eq!(groups.all.len(), 1);
        assert!(groups.dimensions.is_empty());
    }

    #[test]
    fn test_longitudinal_beam() {
        let beam = ConcreteSection::new(ConcreteInput::new(tee()).with_length(4.0)).unwrap();
        let mut sketch = Sketch::new();
        let at = Point::new(10.0, 0.0);
        let groups = beam.draw_longitudinal(
            &mut sketch,
            at,
            &ConcreteDrawOptions::default(),
            &ConcreteSettings::default(),
        );

        // levels 0.0, 0.4, 0.5 plus two end caps
        assert_eq!(groups.concrete.len(), 5);
        assert_eq!(groups.dimensions.len(), 2 + 2);

        match sketch.get(groups.concrete[1]) {
            Some(Entity::Line(line)) => {
                assert!(approx_point(line.start, Point::new(10.0, 0.4)));
                assert!(approx_point(line.end, Point::new(14.0, 0.4)));
            }
            other => panic!("expected line, got {:?}", other),
        }

        let dims = dims(&sketch, &groups.dimensions);
        assert!(approx_eq(dims[0].measurement(), 4.0));
        assert!(approx_eq(dims[1].measurement(), 0.5));
        assert!(approx_eq(dims[2].measurement(), 0.4));
        assert!(approx_eq(dims[3].measurement(), 0.1));
    }

    #[test]
    fn test_longitudinal_column() {
        let column = ConcreteSection::new(ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_height(3.0)).unwrap();
        let mut sketch = Sketch::new();
        let groups = column.draw_longitudinal(
            &mut sketch,
            Point::origin(),
            &ConcreteDrawOptions::default(),
            &ConcreteSettings::default(),
        );

        assert_eq!(groups.concrete.len(), 4);
        assert_eq!(groups.dimensions.len(), 3);
        match sketch.get(groups.concrete[0]) {
            Some(Entity::Line(line)) => {
                assert!(approx_point(line.start, Point::new(0.3, 0.0)));
                assert!(approx_point(line.end, Point::new(0.3, 3.0)));
            }
            other => panic!("expected line, got {:?}", other),
        }
        let dims = dims(&sketch, &groups.dimensions);
        assert!(approx_eq(dims[1].measurement(), 3.0));
        assert!(approx_eq(dims[2].p1.y, 3.0));
    }

    #[test]
    fn test_right_view() {
        let beam = ConcreteSection::new(ConcreteInput::new(tee()).with_length(4.0)).unwrap();
        let mut sketch = Sketch::new();
        let options = ConcreteDrawOptions {
            inner: false,
            ..Default::default()
        };
        let groups = beam.draw_right_view(&mut sketch, Point::origin(), &options, &ConcreteSettings::default());
        assert_eq!(groups.concrete.len(), 3 + 2);
        assert_eq!(groups.dimensions.len(), 2);

        let column = ConcreteSection::new(ConcreteInput::new(tee()).with_height(3.0)).unwrap();
        let mut sketch = Sketch::new();
        let groups = column.draw_right_view(&mut sketch, Point::origin(), &options, &ConcreteSettings::default());
        // section depth 0.5 runs along x
        let dims = dims(&sketch, &groups.dimensions);
        assert!(approx_eq(dims[0].measurement(), 0.5));
        assert!(approx_eq(dims[1].measurement(), 3.0));
    }

    #[test]
    fn test_front_view_dispatch() {
        let settings = ConcreteSettings::default();
        let options = ConcreteDrawOptions::default();

        let beam = ConcreteSection::new(ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_length(4.0)).unwrap();
        let mut sketch = Sketch::new();
        let groups = beam.draw_front_view(&mut sketch, Point::origin(), &options, &settings);
        assert!(matches!(sketch.get(groups.concrete[0]), Some(Entity::Polyline(_))));

        let column = ConcreteSection::new(ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_height(3.0)).unwrap();
        let mut sketch = Sketch::new();
        let groups = column.draw_front_view(&mut sketch, Point::origin(), &options, &settings);
        assert_eq!(groups.concrete.len(), 4);
    }

    #[test]
    fn test_input_json() {
        let input: ConcreteInput =
            serde_json::from_str(r#"{"vertices": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}], "height": 2.5}"#)
                .unwrap();
        assert_eq!(input.specific_weight, CONCRETE_DENSITY);
        let section = ConcreteSection::new(input).unwrap();
        assert_eq!(section.extrusion(), Extrusion::Height(2.5));
        assert!(approx_eq(section.volume(), 1.25));
    }

    #[test]
    fn test_section_json_is_validated() {
        let beam = ConcreteSection::new(ConcreteInput::new(rect(0.0, 0.0, 0.3, 0.5)).with_length(5.0)).unwrap();
        let json = serde_json::to_string(&beam).unwrap();
        assert_eq!(serde_json::from_str::<ConcreteSection>(&json).unwrap(), beam);

        for bad in [
            r#"{"input": {"vertices": [], "height": 1.0}}"#,
            r#"{"input": {"vertices": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}]}, "volume": 7}"#,
            r#"{"input": {"vertices": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}], "height": -2}}"#,
        ] {
            assert!(serde_json::from_str::<ConcreteSection>(bad).is_err(), "{}", bad);
        }
    }
}
