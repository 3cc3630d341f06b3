//! # Error Types
//!
//! Structured error types for rebar_core. Every failure the engine can
//! raise happens while a model is being constructed; once a bar, hoop or
//! section exists it is an immutable value and no later call can fail.
//!
//! Degenerate geometry (zero-length hooks, zero mandrel radius) is NOT an
//! error: it yields degenerate-but-well-defined segments.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::errors::{RebarError, RebarResult};
//!
//! fn validate_spacing(spacing: f64) -> RebarResult<()> {
//!     if spacing <= 0.0 {
//!         return Err(RebarError::invalid_input(
//!             "spacing",
//!             spacing.to_string(),
//!             "Spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rebar_core operations
pub type RebarResult<T> = Result<T, RebarError>;

/// Structured error type for construction-time failures.
///
/// Each variant carries enough context to fix the offending input and
/// rebuild the model; there are no partial objects and nothing to retry.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RebarError {
    /// A side/axis selector outside its enumerated set
    #[error("Invalid side or axis selector: {value}")]
    InvalidSideOrAxis { value: String },

    /// More than one diameter group has an odd bar count
    #[error("Ambiguous symmetric center: diameters {first} and {second} both have odd counts")]
    AmbiguousSymmetricCenter { first: f64, second: f64 },

    /// A concrete section without height or length
    #[error("Missing cross-section dimension: either 'height' or 'length' is required")]
    MissingCrossSectionDimension,

    /// Top and bottom single-bar samples point at the same bar
    #[error("One-bar positions conflict: top {top} == bottom {bottom}")]
    OneBarPositionConflict { top: usize, bottom: usize },

    /// An input value is malformed (bad notation, too few vertices, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Settings JSON could not be parsed
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl RebarError {
    /// Create an InvalidSideOrAxis error
    pub fn invalid_side(value: impl Into<String>) -> Self {
        RebarError::InvalidSideOrAxis {
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RebarError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        RebarError::Serialization {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RebarError::InvalidSideOrAxis { .. } => "INVALID_SIDE_OR_AXIS",
            RebarError::AmbiguousSymmetricCenter { .. } => "AMBIGUOUS_SYMMETRIC_CENTER",
            RebarError::MissingCrossSectionDimension => "MISSING_CROSS_SECTION_DIMENSION",
            RebarError::OneBarPositionConflict { .. } => "ONE_BAR_POSITION_CONFLICT",
            RebarError::InvalidInput { .. } => "INVALID_INPUT",
            RebarError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for RebarError {
    fn from(err: serde_json::Error) -> Self {
        RebarError::serialization(err.to_string())
    }
}
