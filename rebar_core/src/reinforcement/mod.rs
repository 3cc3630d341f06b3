//! # Reinforcement Models
//!
//! Value types for the steel in a reinforced-concrete member:
//!
//! - [`Bar`] - one longitudinal bar with optional end anchors and a
//!   symmetric center bend
//! - [`Stirrup`] - a closed rectangular hoop with 45° hooks, repeated
//!   along a run
//! - [`SpacedBars`] - a bar template replicated at a fixed spacing
//!
//! Every model computes its derived fields once, in its constructor, and
//! is immutable afterwards. Geometry is exposed as segment plans in local
//! coordinates; drawing emits the plan on a [`Canvas`](crate::canvas::Canvas)
//! and places it with a single [`Transform`](crate::geometry::Transform).
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::reinforcement::{Bar, BarInput};
//!
//! let bar = Bar::new(BarInput {
//!     left_anchor: 0.15,
//!     mandrel_radius: 0.01,
//!     ..BarInput::new(4.0, 0.01)
//! });
//!
//! assert!((bar.length() - 4.15).abs() < 1e-12);
//! assert!((bar.box_height() - 0.17).abs() < 1e-12);
//! ```

pub mod bar;
pub mod spaced_bars;
pub mod stirrup;

pub use bar::{Bar, BarDrawOptions, BarInput, BarLabel};
pub use spaced_bars::{SpacedBars, SpacedBarsDrawOptions, SpacedBarsInput};
pub use stirrup::{HookLine, Stirrup, StirrupHooks, StirrupInput};

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RebarError, RebarResult};
use crate::settings::STEEL_DENSITY;

/// Weight in kg of a round bar: `π/4 · d² · length · 7850`.
pub fn bar_weight(diameter: f64, length: f64) -> f64 {
    diameter.powi(2) * PI / 4.0 * length * STEEL_DENSITY
}

// ============================================================================
// Placement Selectors
// ============================================================================

/// Axis the element runs along on the drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::Horizontal => "Horizontal",
            Direction::Vertical => "Vertical",
        }
    }

    /// Parse `"horizontal"`/`"vertical"` in any case.
    pub fn from_str_flexible(s: &str) -> RebarResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" | "h" => Ok(Direction::Horizontal),
            "vertical" | "v" => Ok(Direction::Vertical),
            _ => Err(RebarError::invalid_side(s)),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Vertical)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which side of its box an element hangs from. For a bar this is where
/// the anchors point away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl Orientation {
    /// Index order: top, right, bottom, left
    pub const ALL: [Orientation; 4] = [
        Orientation::Top,
        Orientation::Right,
        Orientation::Bottom,
        Orientation::Left,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::Top => "Top",
            Orientation::Right => "Right",
            Orientation::Bottom => "Bottom",
            Orientation::Left => "Left",
        }
    }

    /// Side from its index (0 top, 1 right, 2 bottom, 3 left).
    pub fn from_index(index: usize) -> RebarResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| RebarError::invalid_side(index.to_string()))
    }

    pub fn index(&self) -> usize {
        match self {
            Orientation::Top => 0,
            Orientation::Right => 1,
            Orientation::Bottom => 2,
            Orientation::Left => 3,
        }
    }

    /// Parse a side name in any case; `"down"`/`"up"` are accepted too.
    pub fn from_str_flexible(s: &str) -> RebarResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "top" | "up" => Ok(Orientation::Top),
            "right" => Ok(Orientation::Right),
            "bottom" | "down" => Ok(Orientation::Bottom),
            "left" => Ok(Orientation::Left),
            _ => Err(RebarError::invalid_side(s)),
        }
    }

    /// Sides lying along a horizontal edge of the section
    pub fn is_horizontal_side(&self) -> bool {
        matches!(self, Orientation::Top | Orientation::Bottom)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
