//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the rebar engine juggles.
//! They are plain `f64`/`i64` newtypes that serialize as bare numbers.
//!
//! ## Conventions
//!
//! - Lengths are meters, weights kilograms, densities kg/m³.
//! - Angles given by callers are degrees; trigonometry runs on radians.
//! - Counting rules work in integer centi-units (hundredths of a meter) so
//!   that exact multiples are detected without binary floating error.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::units::{Degrees, Meters, Radians};
//!
//! let angle: Radians = Degrees(180.0).into();
//! assert!((angle.0 - std::f64::consts::PI).abs() < 1e-12);
//!
//! assert_eq!(Meters(1.2).to_centi().0, 120);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 * PI / 180.0)
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0 * 180.0 / PI)
    }
}

/// Shorthand for converting a degree value straight to radians.
pub fn rads(degrees: f64) -> f64 {
    Radians::from(Degrees(degrees)).0
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in integer hundredths of a meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CentiUnits(pub i64);

impl Meters {
    /// Round to the nearest centi-unit, i.e. `round(value * 100)`.
    pub fn to_centi(self) -> CentiUnits {
        CentiUnits((self.0 * 100.0).round() as i64)
    }
}

impl From<CentiUnits> for Meters {
    fn from(centi: CentiUnits) -> Self {
        Meters(centi.0 as f64 / 100.0)
    }
}

impl CentiUnits {
    /// True when `self` is an exact non-zero multiple of `step`.
    ///
    /// A zero step never divides anything.
    pub fn is_multiple_of(self, step: CentiUnits) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(Meters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(90.0).into();
        assert!((rad.0 - PI / 2.0).abs() < 1e-15);
        assert_eq!(rads(0.0), 0.0);
    }

    #[test]
    fn test_radians_to_degrees() {
        let deg: Degrees = Radians(PI).into();
        assert!((deg.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_centi_rounding() {
        // 0.12 * 100 is 12.000000000000002 in binary floating point
        assert_eq!(Meters(0.12).to_centi(), CentiUnits(12));
        assert_eq!(Meters(5.95).to_centi(), CentiUnits(595));
        assert_eq!(Meters::from(CentiUnits(340)), Meters(3.4));
    }

    #[test]
    fn test_exact_multiple() {
        assert!(CentiUnits(120).is_multiple_of(CentiUnits(12)));
        assert!(!CentiUnits(400).is_multiple_of(CentiUnits(12)));
        assert!(!CentiUnits(400).is_multiple_of(CentiUnits(0)));
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(4.0);
        let b = Meters(0.5);
        assert_eq!((a + b).value(), 4.5);
        assert_eq!((a - b).value(), 3.5);
        assert_eq!((a * 2.0).value(), 8.0);
        assert_eq!((a / 2.0).value(), 2.0);
    }

    #[test]
    fn test_serialization() {
        let angle = Degrees(45.0);
        let json = serde_json::to_string(&angle).unwrap();
        assert_eq!(json, "45.0");
        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(angle, roundtrip);
    }
}
