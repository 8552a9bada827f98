//! # Geometry & Load Stage
//!
//! Factors the column loads, sizes the cap in plan, and derives the cap
//! self-weight, the pile group load and the effective depth.
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::calculations::{geometry, PileCapInput};
//! use pilecap_core::materials::ConcreteProperties;
//! use pilecap_core::settings::DesignSettings;
//!
//! let input = PileCapInput::reference();
//! let (loads, dims) = geometry::analyze(&input, &ConcreteProperties::default(), &DesignSettings::default());
//!
//! assert!((loads.pu_kn - 118.2).abs() < 1e-9);
//! assert!((dims.length_m - 1.5).abs() < 1e-12);
//! assert!((dims.width_m - 0.6).abs() < 1e-12);
//! assert!((dims.effective_depth_m - 0.514).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use super::pile_cap::PileCapInput;
use super::warnings::DesignWarning;
use crate::equations::pile_cap::{cap_length, cap_self_weight, cap_width, effective_depth};
use crate::loads::{strength_combination, LoadCase, LoadType};
use crate::materials::ConcreteProperties;
use crate::settings::DesignSettings;
use crate::units::mm_to_m;

/// Factored loads delivered to the pile group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Combination used, e.g. "1.4D + 1.7L + 1.4SW"
    pub combination: String,
    /// Factored column axial load Pu (kN)
    pub pu_kn: f64,
    /// Factored column moment Mux (kN·m)
    pub mux_knm: f64,
    /// Unfactored cap self-weight (kN)
    pub cap_weight_kn: f64,
    /// Pu plus factored self-weight (kN)
    pub group_load_kn: f64,
}

/// Cap dimensions, all in meters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapDimensions {
    /// L, along the pile line
    pub length_m: f64,
    /// B, across the pile line
    pub width_m: f64,
    pub thickness_m: f64,
    pub effective_depth_m: f64,
    pub cover_m: f64,
    pub edge_distance_m: f64,
    pub pile_spacing_m: f64,
    pub pile_diameter_m: f64,
    pub column_width_m: f64,
    pub column_depth_m: f64,
    /// Pile centre positions measured from the cap centre (−S/2, +S/2)
    pub pile_offset_m: [f64; 2],
}

impl CapDimensions {
    /// Whether a positive effective depth is available for flexure and shear
    pub fn has_effective_depth(&self) -> bool {
        self.effective_depth_m > 0.0
    }

    pub fn warnings(&self) -> Vec<DesignWarning> {
        if self.has_effective_depth() {
            Vec::new()
        } else {
            vec![DesignWarning::NonPositiveEffectiveDepth {
                effective_depth_m: self.effective_depth_m,
            }]
        }
    }
}

/// Run the geometry and load stage.
///
/// Input is assumed to be validated.
pub fn analyze(
    input: &PileCapInput,
    concrete: &ConcreteProperties,
    settings: &DesignSettings,
) -> (LoadSummary, CapDimensions) {
    let combo = strength_combination(settings);

    let axial = LoadCase::new("Column axial")
        .with_load(LoadType::Dead, input.dead_load_kn)
        .with_load(LoadType::Live, input.live_load_kn);
    let moment = LoadCase::new("Column moment")
        .with_load(LoadType::Dead, input.dead_moment_knm)
        .with_load(LoadType::Live, input.live_moment_knm);

    let spacing = mm_to_m(input.pile_spacing_mm);
    let pile_d = mm_to_m(input.pile_diameter_mm);
    let edge = mm_to_m(settings.edge_distance_mm);
    let thickness = mm_to_m(input.cap_thickness_mm);
    let cover = mm_to_m(input.cover_mm);

    let length = cap_length(spacing, pile_d, edge);
    let width = cap_width(pile_d, edge);
    let cap_weight = cap_self_weight(length, width, thickness, concrete.unit_weight_kn_m3);

    let group = axial.clone().with_load(LoadType::SelfWeight, cap_weight);

    let loads = LoadSummary {
        combination: combo.equation.clone(),
        pu_kn: combo.apply(&axial),
        mux_knm: combo.apply(&moment),
        cap_weight_kn: cap_weight,
        group_load_kn: combo.apply(&group),
    };

    let dims = CapDimensions {
        length_m: length,
        width_m: width,
        thickness_m: thickness,
        effective_depth_m: effective_depth(
            thickness,
            cover,
            mm_to_m(f64::from(input.main_bar_diameter_mm)),
        ),
        cover_m: cover,
        edge_distance_m: edge,
        pile_spacing_m: spacing,
        pile_diameter_m: pile_d,
        column_width_m: mm_to_m(input.column_width_mm),
        column_depth_m: mm_to_m(input.column_depth_mm),
        pile_offset_m: [-spacing / 2.0, spacing / 2.0],
    };

    (loads, dims)
}
