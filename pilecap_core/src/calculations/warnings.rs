//! Non-fatal design warnings
//!
//! A design that fails a check still produces a complete result; the failure
//! is reported here instead of as an error so that every number remains
//! visible to the engineer.

use serde::{Deserialize, Serialize};

/// Reinforcement layer a warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarLayer {
    /// Bars spanning between the piles (placed across the width B)
    Main,
    /// Distribution bars perpendicular to the main bars (placed along L)
    Secondary,
}

impl std::fmt::Display for BarLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarLayer::Main => write!(f, "main"),
            BarLayer::Secondary => write!(f, "secondary"),
        }
    }
}

/// Condition detected during a design that the engineer must review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DesignWarning {
    /// Cover plus bar diameter meets or exceeds the cap thickness
    NonPositiveEffectiveDepth { effective_depth_m: f64 },

    /// 2Rn exceeds 0.85fc'; no tension steel ratio can resist the moment
    OverstressedSection { rn_mpa: f64, limit_mpa: f64 },

    /// Maximum pile reaction exceeds the estimated ultimate pile capacity
    PileCapacityExceeded { reaction_kn: f64, capacity_kn: f64 },

    /// A manual bar count provides less area than required
    ManualBarsBelowRequired {
        layer: BarLayer,
        provided_mm2: f64,
        required_mm2: f64,
    },

    /// One-way shear demand exceeds the design strength
    OneWayShearFailure { demand_kn: f64, capacity_kn: f64 },

    /// Punching shear demand exceeds the design strength
    PunchingShearFailure { demand_kn: f64, capacity_kn: f64 },

    /// Bar diameter not in the bar standard; area computed as πd²/4
    ComputedBarArea { diameter_mm: u32, area_mm2: f64 },
}

impl DesignWarning {
    /// Short code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            DesignWarning::NonPositiveEffectiveDepth { .. } => "NON_POSITIVE_EFFECTIVE_DEPTH",
            DesignWarning::OverstressedSection { .. } => "OVERSTRESSED_SECTION",
            DesignWarning::PileCapacityExceeded { .. } => "PILE_CAPACITY_EXCEEDED",
            DesignWarning::ManualBarsBelowRequired { .. } => "MANUAL_BARS_BELOW_REQUIRED",
            DesignWarning::OneWayShearFailure { .. } => "ONE_WAY_SHEAR_FAILURE",
            DesignWarning::PunchingShearFailure { .. } => "PUNCHING_SHEAR_FAILURE",
            DesignWarning::ComputedBarArea { .. } => "COMPUTED_BAR_AREA",
        }
    }

    /// Message for the engineer, with a remedy where one applies
    pub fn message(&self) -> String {
        match self {
            DesignWarning::NonPositiveEffectiveDepth { effective_depth_m } => format!(
                "Effective depth is {:.3} m; increase the cap thickness or reduce the cover",
                effective_depth_m
            ),
            DesignWarning::OverstressedSection { rn_mpa, limit_mpa } => format!(
                "Section overstressed: Rn = {:.3} MPa exceeds {:.3} MPa; increase the cap depth",
                rn_mpa, limit_mpa
            ),
            DesignWarning::PileCapacityExceeded { reaction_kn, capacity_kn } => format!(
                "Pile reaction {:.2} kN exceeds ultimate capacity {:.2} kN; add piles or use larger piles",
                reaction_kn, capacity_kn
            ),
            DesignWarning::ManualBarsBelowRequired { layer, provided_mm2, required_mm2 } => format!(
                "Manual {} bars provide {:.1} mm², less than the required {:.1} mm²",
                layer, provided_mm2, required_mm2
            ),
            DesignWarning::OneWayShearFailure { demand_kn, capacity_kn } => format!(
                "One-way shear {:.2} kN exceeds capacity {:.2} kN; increase the cap depth",
                demand_kn, capacity_kn
            ),
            DesignWarning::PunchingShearFailure { demand_kn, capacity_kn } => format!(
                "Punching shear {:.2} kN exceeds capacity {:.2} kN; increase the cap depth",
                demand_kn, capacity_kn
            ),
            DesignWarning::ComputedBarArea { diameter_mm, area_mm2 } => format!(
                "DB{} is not in the bar standard; area computed as {:.1} mm²",
                diameter_mm, area_mm2
            ),
        }
    }
}

impl std::fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_serialization() {
        let warning = DesignWarning::ManualBarsBelowRequired {
            layer: BarLayer::Main,
            provided_mm2: 603.3,
            required_mm2: 1107.1,
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"type\":\"ManualBarsBelowRequired\""));
        assert!(json.contains("\"layer\":\"Main\""));

        let parsed: DesignWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, warning);
    }

    #[test]
    fn test_messages_advise_depth() {
        let w = DesignWarning::PunchingShearFailure { demand_kn: 3000.0, capacity_kn: 2541.7 };
        assert!(w.message().contains("increase the cap depth"));
        assert_eq!(w.code(), "PUNCHING_SHEAR_FAILURE");
    }

    #[test]
    fn test_display_includes_code() {
        let w = DesignWarning::ComputedBarArea { diameter_mm: 10, area_mm2: 78.54 };
        assert_eq!(
            w.to_string(),
            "[COMPUTED_BAR_AREA] DB10 is not in the bar standard; area computed as 78.5 mm²"
        );
    }
}
