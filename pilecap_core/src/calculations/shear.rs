//! # Shear Design Stage
//!
//! One-way shear at d from the column face and two-way (punching) shear on
//! the perimeter at d/2 around the column.
//!
//! The one-way demand is the full pile reaction when the pile centre lies
//! outside the critical section and zero otherwise. Punching demand is the
//! factored column load `Pu`, without the cap self-weight.

use serde::{Deserialize, Serialize};

use super::geometry::{CapDimensions, LoadSummary};
use super::reactions::PileReactions;
use super::warnings::DesignWarning;
use crate::equations::pile_cap::{
    column_aspect_ratio, one_way_critical_distance, one_way_shear_capacity, punching_perimeter,
    punching_shear_capacity, punching_stress_limits,
};
use crate::settings::DesignSettings;

/// One-way and punching shear checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearResult {
    /// Distance from pile centre to the one-way section (m); may be negative
    pub one_way_critical_distance_m: f64,
    pub one_way_demand_kn: f64,
    pub one_way_capacity_kn: f64,
    pub punch_demand_kn: f64,
    /// Critical perimeter b0 (m)
    pub punch_perimeter_m: f64,
    /// β, long over short column side
    pub column_aspect_ratio: f64,
    /// v1, v2, v3 (MPa)
    pub punch_stress_limits_mpa: [f64; 3],
    pub punch_capacity_kn: f64,
}

impl ShearResult {
    pub fn one_way_passes(&self) -> bool {
        self.one_way_demand_kn <= self.one_way_capacity_kn
    }

    pub fn punching_passes(&self) -> bool {
        self.punch_demand_kn <= self.punch_capacity_kn
    }

    /// Governing two-way stress limit (MPa)
    pub fn governing_stress_limit_mpa(&self) -> f64 {
        self.punch_stress_limits_mpa
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    pub fn warnings(&self) -> Vec<DesignWarning> {
        let mut warnings = Vec::new();
        if !self.one_way_passes() {
            warnings.push(DesignWarning::OneWayShearFailure {
                demand_kn: self.one_way_demand_kn,
                capacity_kn: self.one_way_capacity_kn,
            });
        }
        if !self.punching_passes() {
            warnings.push(DesignWarning::PunchingShearFailure {
                demand_kn: self.punch_demand_kn,
                capacity_kn: self.punch_capacity_kn,
            });
        }
        warnings
    }
}

/// Run the shear stage.
pub fn check(
    loads: &LoadSummary,
    dims: &CapDimensions,
    reactions: &PileReactions,
    fc_mpa: f64,
    settings: &DesignSettings,
) -> ShearResult {
    let d = dims.effective_depth_m;
    let bc = dims.column_width_m;
    let hc = dims.column_depth_m;

    let crit = one_way_critical_distance(dims.pile_spacing_m, bc, d);
    let one_way_demand = if crit > 0.0 { reactions.max_pile_reaction_kn } else { 0.0 };

    let perimeter = punching_perimeter(bc, hc, d);
    let beta = column_aspect_ratio(bc, hc);
    let limits = punching_stress_limits(fc_mpa, beta, d, perimeter);

    let (one_way_capacity, punch_capacity) = if dims.has_effective_depth() {
        (
            one_way_shear_capacity(settings.phi_shear, fc_mpa, dims.width_m, d),
            punching_shear_capacity(settings.phi_shear, &limits, perimeter, d),
        )
    } else {
        (0.0, 0.0)
    };

    ShearResult {
        one_way_critical_distance_m: crit,
        one_way_demand_kn: one_way_demand,
        one_way_capacity_kn: one_way_capacity,
        punch_demand_kn: loads.pu_kn,
        punch_perimeter_m: perimeter,
        column_aspect_ratio: beta,
        punch_stress_limits_mpa: limits,
        punch_capacity_kn: punch_capacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::geometry::analyze;
    use crate::calculations::reactions::distribute;
    use crate::calculations::PileCapInput;
    use crate::materials::ConcreteProperties;
    use approx::assert_relative_eq;

    fn run(input: &PileCapInput) -> ShearResult {
        let settings = DesignSettings::default();
        let (loads, dims) = analyze(input, &ConcreteProperties::default(), &settings);
        let reactions = distribute(&loads, &dims, input.pile_capacity_kn, &settings);
        check(&loads, &dims, &reactions, 25.0, &settings)
    }

    #[test]
    fn test_reference_one_way() {
        let shear = run(&PileCapInput::reference());
        assert!(shear.one_way_critical_distance_m < 0.0);
        assert_eq!(shear.one_way_demand_kn, 0.0);
        assert_relative_eq!(shear.one_way_capacity_kn, 192.75, epsilon = 1e-9);
        assert!(shear.one_way_passes());
    }

    #[test]
    fn test_reference_punching() {
        let shear = run(&PileCapInput::reference());
        assert_relative_eq!(shear.punch_perimeter_m, 3.956, epsilon = 1e-12);
        assert_relative_eq!(shear.column_aspect_ratio, 1.375, epsilon = 1e-12);
        assert_relative_eq!(shear.punch_stress_limits_mpa[0], 2.0455, epsilon = 1e-4);
        assert_relative_eq!(shear.punch_stress_limits_mpa[1], 2.9988, epsilon = 1e-4);
        assert_relative_eq!(shear.punch_stress_limits_mpa[2], 5.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(shear.governing_stress_limit_mpa(), 5.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(shear.punch_capacity_kn, 2541.73, epsilon = 0.01);
        assert_relative_eq!(shear.punch_demand_kn, 118.2, epsilon = 1e-9);
        assert!(shear.punching_passes());
        assert!(shear.warnings().is_empty());
    }

    #[test]
    fn test_wide_spacing_carries_reaction() {
        let input = PileCapInput {
            pile_spacing_mm: 2000.0,
            ..PileCapInput::reference()
        };
        let shear = run(&input);
        // 1.0 - 0.2 - 0.514
        assert_relative_eq!(shear.one_way_critical_distance_m, 0.286, epsilon = 1e-12);
        assert!(shear.one_way_demand_kn > 0.0);
    }

    #[test]
    fn test_heavy_load_fails_both() {
        let shear = run(&PileCapInput {
            dead_load_kn: 20_000.0,
            pile_spacing_mm: 2000.0,
            ..PileCapInput::reference()
        });
        let warnings = shear.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].message().contains("increase the cap depth"));
    }

    #[test]
    fn test_no_depth_no_capacity() {
        let shear = run(&PileCapInput {
            cap_thickness_mm: 80.0,
            ..PileCapInput::reference()
        });
        assert_eq!(shear.one_way_capacity_kn, 0.0);
        assert_eq!(shear.punch_capacity_kn, 0.0);
        assert!(!shear.punching_passes());
    }
}
