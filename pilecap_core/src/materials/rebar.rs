//! Reinforcing Bar Sizes (TIS 24-2548)
//!
//! Nominal bar diameters with cross-sectional area and linear unit weight.
//!
//! Two lookups are offered:
//!
//! - [`BarStandard::lookup`] is strict and fails with `UnknownBar`.
//! - [`BarStandard::resolve`] may fall back to the circular area πd²/4 for a
//!   diameter missing from the table. The returned [`BarArea`] records which
//!   path produced it so results stay auditable.
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::materials::{AreaProvenance, BarStandard};
//!
//! let bars = BarStandard::thai_tis();
//! let db16 = bars.resolve(16, true).unwrap();
//! assert_eq!(db16.area_mm2, 201.1);
//! assert_eq!(db16.provenance, AreaProvenance::Tabulated);
//!
//! let db18 = bars.resolve(18, true).unwrap();
//! assert_eq!(db18.provenance, AreaProvenance::Computed);
//! assert!(bars.resolve(18, false).is_err());
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A tabulated bar size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSize {
    /// Nominal diameter (mm)
    pub diameter_mm: u32,
    /// Nominal cross-sectional area (mm²)
    pub area_mm2: f64,
    /// Linear unit weight (kg/m)
    pub unit_weight_kg_m: f64,
}

impl BarSize {
    pub const fn new(diameter_mm: u32, area_mm2: f64, unit_weight_kg_m: f64) -> Self {
        BarSize {
            diameter_mm,
            area_mm2,
            unit_weight_kg_m,
        }
    }
}

/// Where a bar area value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaProvenance {
    /// Read from the bar standard table
    Tabulated,
    /// Computed as πd²/4 because the diameter is not tabulated
    Computed,
}

/// Resolved bar properties used by bar selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarArea {
    pub diameter_mm: u32,
    pub area_mm2: f64,
    /// Unit weight; only known for tabulated sizes
    pub unit_weight_kg_m: Option<f64>,
    pub provenance: AreaProvenance,
}

/// Circular cross-section area πd²/4 (mm²)
#[inline]
pub fn circular_area_mm2(diameter_mm: f64) -> f64 {
    PI * (diameter_mm / 2.0).powi(2)
}

/// Ordered table of bar sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStandard {
    pub sizes: Vec<BarSize>,
}

impl BarStandard {
    /// Thai TIS 24-2548 bar sizes
    pub fn thai_tis() -> Self {
        BarStandard {
            sizes: vec![
                BarSize::new(6, 28.3, 0.222),
                BarSize::new(9, 63.6, 0.499),
                BarSize::new(12, 113.1, 0.888),
                BarSize::new(16, 201.1, 1.578),
                BarSize::new(20, 314.2, 2.466),
                BarSize::new(25, 490.9, 3.854),
                BarSize::new(28, 615.8, 4.834),
                BarSize::new(32, 804.2, 6.313),
            ],
        }
    }

    /// Look up a bar by exact nominal diameter
    pub fn lookup(&self, diameter_mm: u32) -> CalcResult<&BarSize> {
        self.sizes
            .iter()
            .find(|b| b.diameter_mm == diameter_mm)
            .ok_or_else(|| CalcError::unknown_bar(diameter_mm))
    }

    /// Resolve bar area, optionally falling back to the computed circular area
    pub fn resolve(&self, diameter_mm: u32, allow_computed: bool) -> CalcResult<BarArea> {
        match self.lookup(diameter_mm) {
            Ok(bar) => Ok(BarArea {
                diameter_mm,
                area_mm2: bar.area_mm2,
                unit_weight_kg_m: Some(bar.unit_weight_kg_m),
                provenance: AreaProvenance::Tabulated,
            }),
            Err(_) if allow_computed && diameter_mm > 0 => Ok(BarArea {
                diameter_mm,
                area_mm2: circular_area_mm2(f64::from(diameter_mm)),
                unit_weight_kg_m: None,
                provenance: AreaProvenance::Computed,
            }),
            Err(e) => Err(e),
        }
    }

    /// Tabulated diameters in table order
    pub fn diameters(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.iter().map(|b| b.diameter_mm)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.sizes.is_empty() {
            return Err(CalcError::invalid_standards("bar table is empty"));
        }
        for (i, bar) in self.sizes.iter().enumerate() {
            if bar.diameter_mm == 0 || !(bar.area_mm2.is_finite() && bar.area_mm2 > 0.0) {
                return Err(CalcError::invalid_standards(format!(
                    "bar DB{} must have positive diameter and area",
                    bar.diameter_mm
                )));
            }
            if !(bar.unit_weight_kg_m.is_finite() && bar.unit_weight_kg_m >= 0.0) {
                return Err(CalcError::invalid_standards(format!(
                    "bar DB{} has invalid unit weight",
                    bar.diameter_mm
                )));
            }
            if self.sizes[..i].iter().any(|b| b.diameter_mm == bar.diameter_mm) {
                return Err(CalcError::invalid_standards(format!(
                    "duplicate bar diameter {} mm",
                    bar.diameter_mm
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tabulated_sizes() {
        let bars = BarStandard::thai_tis();
        assert_eq!(bars.sizes.len(), 8);
        let db12 = bars.lookup(12).unwrap();
        assert_eq!(db12.area_mm2, 113.1);
        assert_eq!(db12.unit_weight_kg_m, 0.888);
        assert_eq!(bars.diameters().last(), Some(32));
    }

    #[test]
    fn test_tabulated_areas_close_to_circular() {
        for bar in BarStandard::thai_tis().sizes {
            assert_relative_eq!(
                bar.area_mm2,
                circular_area_mm2(f64::from(bar.diameter_mm)),
                max_relative = 0.002
            );
        }
    }

    #[test]
    fn test_unknown_bar_is_strict() {
        let bars = BarStandard::thai_tis();
        assert_eq!(bars.lookup(10).unwrap_err(), CalcError::unknown_bar(10));
    }

    #[test]
    fn test_computed_fallback_is_tagged() {
        let bars = BarStandard::thai_tis();
        let db10 = bars.resolve(10, true).unwrap();
        assert_eq!(db10.provenance, AreaProvenance::Computed);
        assert_relative_eq!(db10.area_mm2, 78.539_816, epsilon = 1e-5);
        assert_eq!(db10.unit_weight_kg_m, None);
    }

    #[test]
    fn test_zero_diameter_never_computed() {
        let bars = BarStandard::thai_tis();
        assert!(bars.resolve(0, true).is_err());
    }
}
