//! # Design Settings
//!
//! Code factors and detailing constants applied by the calculation stages.
//! The defaults reproduce the strength design rules used with the Thai TIS
//! tables (1.4D + 1.7L, φ = 0.9 flexure, φ = 0.75 shear, 150 mm edge distance).
//!
//! Settings are serde-friendly and every field has a default, so a partial
//! TOML file only overrides what it names:
//!
//! ```rust
//! use pilecap_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_toml_str("phi_shear = 0.85").unwrap();
//! assert_eq!(settings.phi_shear, 0.85);
//! assert_eq!(settings.phi_flexure, 0.9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Global design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Clear distance from pile face to cap edge (mm)
    pub edge_distance_mm: f64,

    /// Load factor on dead load and dead moment
    pub dead_load_factor: f64,

    /// Load factor on live load and live moment
    pub live_load_factor: f64,

    /// Load factor on cap self-weight (treated as dead load)
    pub self_weight_factor: f64,

    /// Multiplier from allowable to estimated ultimate pile capacity
    pub pile_capacity_factor: f64,

    /// Strength reduction factor for flexure
    pub phi_flexure: f64,

    /// Strength reduction factor for shear
    pub phi_shear: f64,

    /// Secondary steel as a fraction of provided main steel
    pub secondary_steel_fraction: f64,

    /// Allow bar diameters missing from the bar standard (area computed as πd²/4)
    pub allow_computed_bar_area: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            edge_distance_mm: 150.0,
            dead_load_factor: 1.4,
            live_load_factor: 1.7,
            self_weight_factor: 1.4,
            pile_capacity_factor: 1.7,
            phi_flexure: 0.9,
            phi_shear: 0.75,
            secondary_steel_fraction: 0.2,
            allow_computed_bar_area: true,
        }
    }
}

impl DesignSettings {
    /// Parse settings from TOML, filling omitted fields with defaults.
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let settings: DesignSettings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every factor is usable.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("dead_load_factor", self.dead_load_factor),
            ("live_load_factor", self.live_load_factor),
            ("self_weight_factor", self.self_weight_factor),
            ("pile_capacity_factor", self.pile_capacity_factor),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Factor must be positive"));
            }
        }

        for (field, value) in [("phi_flexure", self.phi_flexure), ("phi_shear", self.phi_shear)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Strength reduction factor must be in (0, 1]",
                ));
            }
        }

        if !self.edge_distance_mm.is_finite() || self.edge_distance_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "edge_distance_mm",
                self.edge_distance_mm.to_string(),
                "Edge distance cannot be negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.secondary_steel_fraction) {
            return Err(CalcError::invalid_input(
                "secondary_steel_fraction",
                self.secondary_steel_fraction.to_string(),
                "Fraction must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = DesignSettings::default();
        assert_eq!(s.edge_distance_mm, 150.0);
        assert_eq!(s.dead_load_factor, 1.4);
        assert_eq!(s.live_load_factor, 1.7);
        assert!(s.allow_computed_bar_area);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_override() {
        let s = DesignSettings::from_toml_str(
            "edge_distance_mm = 200.0\nallow_computed_bar_area = false\n",
        )
        .unwrap();
        assert_eq!(s.edge_distance_mm, 200.0);
        assert!(!s.allow_computed_bar_area);
        assert_eq!(s.phi_shear, 0.75);
    }

    #[test]
    fn test_invalid_phi_rejected() {
        let err = DesignSettings::from_toml_str("phi_flexure = 1.2").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_malformed_toml() {
        let err = DesignSettings::from_toml_str("phi_flexure = \"high\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
