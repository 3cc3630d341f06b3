//! # Drawing Settings
//!
//! Plain key/value settings for each drawing function family, with the
//! documented defaults baked into `Default` impls. Every struct is
//! `#[serde(default)]`, so a caller only has to spell out the keys it
//! wants to override.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::settings::DrawingSettings;
//!
//! let settings = DrawingSettings::from_json(r#"{ "bar": { "text_dim_height": 0.08 } }"#).unwrap();
//! assert_eq!(settings.bar.text_dim_height, 0.08);
//! assert_eq!(settings.bar.text_denomination_distance, 0.1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::RebarResult;

// ============================================================================
// Physical Constants
// ============================================================================

/// Steel density in kg/m³
pub const STEEL_DENSITY: f64 = 7850.0;

/// Concrete density in kg/m³
pub const CONCRETE_DENSITY: f64 = 2400.0;

/// Dimension style used when a drawing function is not told otherwise
pub const DEFAULT_DIM_STYLE: &str = "EZ_M_10_H25_CM";

// ============================================================================
// Per-family Settings
// ============================================================================

/// Text offsets and heights for single-bar drawings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    pub text_dim_distance_horizontal: f64,
    pub text_dim_distance_vertical: f64,
    pub text_dim_height: f64,
    pub text_denomination_distance: f64,
    pub text_denomination_height: f64,
}

impl Default for BarSettings {
    fn default() -> Self {
        BarSettings {
            text_dim_distance_horizontal: 0.05,
            text_dim_distance_vertical: 0.05,
            text_dim_height: 0.05,
            text_denomination_distance: 0.1,
            text_denomination_height: 0.05,
        }
    }
}

/// Hoop cross-section drawing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StirrupSettings {
    pub text_dim_distance_horizontal: f64,
    pub text_dim_distance_vertical: f64,
    pub text_dim_distance_anchor: f64,
    pub text_distance_length_count: f64,
    pub text_length_count_height: f64,
    pub dim_style: String,
}

impl Default for StirrupSettings {
    fn default() -> Self {
        StirrupSettings {
            text_dim_distance_horizontal: 0.05,
            text_dim_distance_vertical: 0.10,
            text_dim_distance_anchor: 0.10,
            text_distance_length_count: 0.1,
            text_length_count_height: 0.05,
            dim_style: DEFAULT_DIM_STYLE.to_string(),
        }
    }
}

/// Settings for a bar array: the per-bar settings plus the run dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacedBarsSettings {
    pub bar: BarSettings,
    pub text_dim_distance_horizontal: f64,
    pub text_dim_distance_vertical: f64,
    pub dim_style: String,
}

impl Default for SpacedBarsSettings {
    fn default() -> Self {
        SpacedBarsSettings {
            bar: BarSettings::default(),
            text_dim_distance_horizontal: 0.05,
            text_dim_distance_vertical: 0.05,
            dim_style: DEFAULT_DIM_STYLE.to_string(),
        }
    }
}

/// Offsets and styles for concrete outline dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcreteSettings {
    /// Offset of the vertical boxing dimension from the outline
    pub text_dim_distance_horizontal: f64,
    /// Offset of the horizontal boxing dimension from the outline
    pub text_dim_distance_vertical: f64,
    /// Perpendicular offset of the per-side inner dimensions
    pub text_dim_inner_perpendicular_distance: f64,
    pub dim_style_boxing: String,
    pub dim_style_inner: String,
}

impl Default for ConcreteSettings {
    fn default() -> Self {
        ConcreteSettings {
            text_dim_distance_horizontal: 0.25,
            text_dim_distance_vertical: 0.25,
            text_dim_inner_perpendicular_distance: 0.05,
            dim_style_boxing: DEFAULT_DIM_STYLE.to_string(),
            dim_style_inner: DEFAULT_DIM_STYLE.to_string(),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// All drawing settings in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    pub bar: BarSettings,
    pub stirrup: StirrupSettings,
    pub spaced_bars: SpacedBarsSettings,
    pub concrete: ConcreteSettings,
}

impl DrawingSettings {
    /// Parse a (possibly partial) settings document.
    pub fn from_json(json: &str) -> RebarResult<Self> {
        let settings: DrawingSettings = serde_json::from_str(json)?;
        debug!(?settings, "loaded drawing settings");
        Ok(settings)
    }

    pub fn to_json(&self) -> RebarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
