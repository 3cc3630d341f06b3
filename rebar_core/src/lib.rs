//! # rebar_core - Reinforced Concrete Rebar Geometry
//!
//! `rebar_core` turns rebar descriptions into quantities and drawings:
//! developed lengths, weights, bar counts, bounding boxes, and the line/arc
//! geometry a detailing drawing needs. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Derived at construction**: models compute every quantity once
//! - **Canvas-agnostic**: drawing goes through the [`canvas::Canvas`] trait
//! - **Segment plans first**: geometry is a plain `Vec<Segment>` before it
//!   is ever drawn, so it can be inspected and tested directly
//! - **Structured errors**: [`RebarError`] variants, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use rebar_core::reinforcement::{SpacedBars, SpacedBarsInput};
//!
//! // 10mm bars every 10cm across a 3.3m slab strip
//! let mesh = SpacedBars::new(SpacedBarsInput::new(3.3, 2.0, 0.01, 0.1));
//! assert_eq!(mesh.quantity(), 34);
//!
//! let json = serde_json::to_string(mesh.input()).unwrap();
//! assert!(json.contains("\"spacing\":0.1"));
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Points, line equations, polygons and affine transforms
//! - [`canvas`] - Drawing boundary, segment plans and the in-memory sketch
//! - [`reinforcement`] - Bars, stirrups and spaced bar arrays
//! - [`concrete`] - Extruded concrete sections
//! - [`layout`] - Bar notation, symmetric lists and side placement
//! - [`schedule`] - Bending schedule rows
//! - [`settings`] - Drawing offsets, text heights and dimension styles
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod canvas;
pub mod concrete;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod reinforcement;
pub mod schedule;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use concrete::{ConcreteInput, ConcreteSection};
pub use errors::{RebarError, RebarResult};
pub use geometry::{Point, Polygon, Transform};
pub use reinforcement::{Bar, BarInput, SpacedBars, SpacedBarsInput, Stirrup, StirrupInput};
pub use settings::DrawingSettings;
