//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in pile cap design. These are
//! plain `f64` newtypes that serialize as bare numbers.
//!
//! ## Conventions
//!
//! - Input geometry arrives in millimeters, calculations run in meters
//! - Forces in kilonewtons (kN), moments in kilonewton-meters (kN·m)
//! - Material strengths in megapascals (MPa); intermediate stresses in kPa (kN/m²)
//! - Bar areas tabulated in mm², reported in cm² where that reads better
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::units::{Meters, Millimeters, SqCentimeters, SqMillimeters};
//!
//! let spacing: Meters = Millimeters(900.0).into();
//! assert_eq!(spacing.0, 0.9);
//!
//! let area: SqCentimeters = SqMillimeters(201.1).into();
//! assert!((area.0 - 2.011).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<KiloPascals> for MegaPascals {
    fn from(kpa: KiloPascals) -> Self {
        MegaPascals(kpa.0 / 1000.0)
    }
}

impl From<MegaPascals> for KiloPascals {
    fn from(mpa: MegaPascals) -> Self {
        KiloPascals(mpa.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMillimeters(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqCentimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMeters(pub f64);

impl From<SqMeters> for SqMillimeters {
    fn from(m2: SqMeters) -> Self {
        SqMillimeters(m2.0 * 1.0e6)
    }
}

impl From<SqMillimeters> for SqCentimeters {
    fn from(mm2: SqMillimeters) -> Self {
        SqCentimeters(mm2.0 / 100.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
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

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(KiloPascals);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(SqMillimeters);
impl_arithmetic!(SqCentimeters);
impl_arithmetic!(SqMeters);

/// Convert a length in millimeters to meters.
#[inline]
pub fn mm_to_m(mm: f64) -> f64 {
    Meters::from(Millimeters(mm)).value()
}

/// Convert a length in meters to millimeters.
#[inline]
pub fn m_to_mm(m: f64) -> f64 {
    Millimeters::from(Meters(m)).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let m: Meters = Millimeters(1500.0).into();
        assert_eq!(m.0, 1.5);
        assert_eq!(mm_to_m(600.0), 0.6);
    }

    #[test]
    fn test_kpa_to_mpa() {
        let mpa: MegaPascals = KiloPascals(119.5).into();
        assert!((mpa.0 - 0.1195).abs() < 1e-12);
    }

    #[test]
    fn test_area_conversions() {
        let mm2: SqMillimeters = SqMeters(0.000_201_1).into();
        assert!((mm2.0 - 201.1).abs() < 1e-9);
        let cm2: SqCentimeters = SqMillimeters(1206.6).into();
        assert!((cm2.0 - 12.066).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(0.9);
        let b = Meters(0.3);
        assert!(((a + b).0 - 1.2).abs() < 1e-12);
        assert!(((a - b).0 - 0.6).abs() < 1e-12);
        assert_eq!((b * 2.0).0, 0.6);
        assert_eq!((a / 2.0).0, 0.45);
    }

    #[test]
    fn test_serialization() {
        let d = Millimeters(16.0);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "16.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
