//! # Materials Database
//!
//! Reference tables for reinforced-concrete design: steel grades, concrete
//! grades and reinforcing bar sizes. The built-in set follows the Thai
//! Industrial Standards (TIS 24-2548 for bars, TIS 166-2549 for concrete).
//!
//! Tables are read-only reference data. The built-in set is created once per
//! process; custom tables can be loaded from TOML by the host application.
//!
//! ## TOML Format
//!
//! ```toml
//! [steel]
//! grades = [{ code = "SD40", fy_mpa = 390.0 }]
//!
//! [concrete]
//! grades = [{ code = "C25/30", fc_mpa = 25.0 }]
//!
//! [concrete.properties]
//! unit_weight_kn_m3 = 24.0
//!
//! [bars]
//! sizes = [{ diameter_mm = 16, area_mm2 = 201.1, unit_weight_kg_m = 1.578 }]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::materials::Standards;
//!
//! let tis = Standards::thai_tis();
//! assert_eq!(tis.steel.fy_mpa("SD40").unwrap(), 390.0);
//! assert_eq!(tis.concrete.fc_mpa("C25/30").unwrap(), 25.0);
//! assert_eq!(tis.bars.lookup(16).unwrap().area_mm2, 201.1);
//! ```

pub mod concrete;
pub mod rebar;
pub mod steel;

pub use concrete::{ConcreteGrade, ConcreteProperties, ConcreteStandard};
pub use rebar::{circular_area_mm2, AreaProvenance, BarArea, BarSize, BarStandard};
pub use steel::{SteelGrade, SteelStandard};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

static THAI_TIS: Lazy<Standards> = Lazy::new(|| Standards {
    steel: SteelStandard::thai_tis(),
    concrete: ConcreteStandard::thai_tis(),
    bars: BarStandard::thai_tis(),
});

/// The three reference tables a design is computed against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standards {
    pub steel: SteelStandard,
    pub concrete: ConcreteStandard,
    pub bars: BarStandard,
}

impl Standards {
    /// Built-in Thai TIS tables, initialised on first use
    pub fn thai_tis() -> &'static Standards {
        &THAI_TIS
    }

    /// Parse and validate a full set of tables from TOML
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let standards: Standards = toml::from_str(source)?;
        standards.validate()?;
        Ok(standards)
    }

    /// Check every table is non-empty with unique codes and positive constants
    pub fn validate(&self) -> CalcResult<()> {
        self.steel.validate()?;
        self.concrete.validate()?;
        self.bars.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOM: &str = r#"
[steel]
grades = [
    { code = "SD40", fy_mpa = 390.0, description = "Deformed bar" },
    { code = "SR24", fy_mpa = 235.0 },
]

[concrete]
grades = [{ code = "C28", fc_mpa = 28.0 }]

[concrete.properties]
unit_weight_kn_m3 = 23.5

[bars]
sizes = [
    { diameter_mm = 10, area_mm2 = 78.5, unit_weight_kg_m = 0.617 },
    { diameter_mm = 16, area_mm2 = 201.1, unit_weight_kg_m = 1.578 },
]
"#;

    #[test]
    fn test_builtin_tables_are_valid() {
        assert!(Standards::thai_tis().validate().is_ok());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = Standards::thai_tis() as *const Standards;
        let b = Standards::thai_tis() as *const Standards;
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_toml() {
        let standards = Standards::from_toml_str(CUSTOM).unwrap();
        assert_eq!(standards.steel.fy_mpa("SR24").unwrap(), 235.0);
        assert_eq!(standards.concrete.fc_mpa("C28").unwrap(), 28.0);
        assert_eq!(standards.concrete.properties.unit_weight_kn_m3, 23.5);
        // Omitted properties keep their defaults
        assert_eq!(standards.concrete.properties.elastic_modulus_factor, 4700.0);
        assert_eq!(standards.bars.lookup(10).unwrap().area_mm2, 78.5);
        assert_eq!(standards.steel.lookup("SD40").unwrap().description, "Deformed bar");
    }

    #[test]
    fn test_empty_table_rejected() {
        let source = CUSTOM.replace(
            "grades = [{ code = \"C28\", fc_mpa = 28.0 }]",
            "grades = []",
        );
        let err = Standards::from_toml_str(&source).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_STANDARDS");
    }

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::to_string(Standards::thai_tis()).unwrap();
        let parsed: Standards = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, Standards::thai_tis());
    }
}
