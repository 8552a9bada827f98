//! # Flexural Design Stage
//!
//! Designs the bottom reinforcement for the moment at the column face and
//! selects main and secondary bar layers.
//!
//! ## Procedure
//!
//! 1. `Mu = R_max × (S/2 − bc/2)`
//! 2. `Rn = Mu / (φ B d²)`
//! 3. `ρ` from the rectangular stress block; undefined when `2Rn > 0.85fc'`
//! 4. `As = max(ρBd, As,min)`
//! 5. Main bars: `n = ⌈As / A_bar⌉`, spaced across B, running along L
//! 6. Secondary bars: `max(As,min, 0.2 As,main)`, spaced along L, running across B
//!
//! A section that cannot be designed (no effective depth, or overstressed)
//! still gets bars sized from the minimum steel, and the condition is
//! reported as a warning.

use serde::{Deserialize, Serialize};

use super::geometry::CapDimensions;
use super::reactions::PileReactions;
use super::warnings::{BarLayer, DesignWarning};
use crate::equations::pile_cap::{
    bar_count, bar_spacing_mm, bar_weight_kg, critical_moment, critical_section_distance,
    min_steel_ratio, nominal_moment_coefficient, required_steel_ratio, secondary_steel_area_mm2,
    steel_area_mm2, STRESS_BLOCK_FACTOR,
};
use crate::materials::{AreaProvenance, BarArea};
use crate::settings::DesignSettings;
use crate::units::mm_to_m;

/// How a bar count was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarSelection {
    /// Smallest count providing the required area
    Automatic,
    /// Count supplied by the user
    Manual,
}

/// One layer of reinforcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub layer: BarLayer,
    pub count: u32,
    pub diameter_mm: u32,
    /// Centre-to-centre spacing; 0 for fewer than two bars
    pub spacing_mm: f64,
    /// Area of one bar (mm²)
    pub bar_area_mm2: f64,
    pub area_provided_mm2: f64,
    pub area_required_mm2: f64,
    pub area_provenance: AreaProvenance,
    pub selection: BarSelection,
    pub unit_weight_kg_m: Option<f64>,
    /// Length of each bar (m)
    pub bar_length_m: f64,
    /// Total layer weight; unknown for computed bar areas
    pub total_weight_kg: Option<f64>,
}

impl BarLayout {
    /// Provided area meets the requirement
    pub fn is_adequate(&self) -> bool {
        self.area_provided_mm2 >= self.area_required_mm2
    }

    pub fn warnings(&self) -> Vec<DesignWarning> {
        let mut warnings = Vec::new();
        if self.area_provenance == AreaProvenance::Computed {
            warnings.push(DesignWarning::ComputedBarArea {
                diameter_mm: self.diameter_mm,
                area_mm2: self.bar_area_mm2,
            });
        }
        if self.selection == BarSelection::Manual && !self.is_adequate() {
            warnings.push(DesignWarning::ManualBarsBelowRequired {
                layer: self.layer,
                provided_mm2: self.area_provided_mm2,
                required_mm2: self.area_required_mm2,
            });
        }
        warnings
    }
}

/// Flexural design quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexureResult {
    /// Lever arm from pile centre to the column face (m)
    pub critical_distance_m: f64,
    /// Mu (kN·m)
    pub critical_moment_knm: f64,
    /// Rn (MPa); `None` without a positive effective depth
    pub nominal_coefficient_mpa: Option<f64>,
    /// Largest Rn the stress block can develop, 0.85fc'/2 (MPa)
    pub rn_limit_mpa: f64,
    /// ρ; `None` when Rn is undefined or exceeds the limit
    pub required_steel_ratio: Option<f64>,
    /// ρBd (mm²)
    pub required_steel_area_mm2: Option<f64>,
    pub min_steel_area_mm2: f64,
    /// max(As,req, As,min) (mm²)
    pub final_steel_area_mm2: f64,
    pub provided_main_area_mm2: f64,
    pub secondary_required_area_mm2: f64,
    pub provided_secondary_area_mm2: f64,
}

impl FlexureResult {
    /// Rn is defined but no steel ratio satisfies it
    pub fn is_overstressed(&self) -> bool {
        self.nominal_coefficient_mpa.is_some() && self.required_steel_ratio.is_none()
    }

    pub fn warnings(&self) -> Vec<DesignWarning> {
        match self.nominal_coefficient_mpa {
            Some(rn) if self.is_overstressed() => vec![DesignWarning::OverstressedSection {
                rn_mpa: rn,
                limit_mpa: self.rn_limit_mpa,
            }],
            _ => Vec::new(),
        }
    }
}

/// Choose a bar layer for a required area.
///
/// `span_width_m` is the dimension the bars are distributed across;
/// `bar_length_m` is the dimension they run along.
///
/// # Example
///
/// ```rust
/// use pilecap_core::calculations::flexure::{select_bars, BarSelection};
/// use pilecap_core::calculations::BarLayer;
/// use pilecap_core::materials::Standards;
///
/// let db16 = Standards::thai_tis().bars.resolve(16, false).unwrap();
/// let layout = select_bars(BarLayer::Main, 1107.1, &db16, None, 0.6, 0.07, 1.5);
/// assert_eq!(layout.count, 6);
/// assert_eq!(layout.selection, BarSelection::Automatic);
/// assert!((layout.spacing_mm - 88.8).abs() < 1e-9);
/// ```
pub fn select_bars(
    layer: BarLayer,
    required_mm2: f64,
    bar: &BarArea,
    manual_count: Option<u32>,
    span_width_m: f64,
    cover_m: f64,
    bar_length_m: f64,
) -> BarLayout {
    let (count, selection) = match manual_count {
        Some(n) => (n, BarSelection::Manual),
        None => (bar_count(required_mm2, bar.area_mm2), BarSelection::Automatic),
    };
    let bar_diameter_m = mm_to_m(f64::from(bar.diameter_mm));

    BarLayout {
        layer,
        count,
        diameter_mm: bar.diameter_mm,
        spacing_mm: bar_spacing_mm(span_width_m, cover_m, bar_diameter_m, count),
        bar_area_mm2: bar.area_mm2,
        area_provided_mm2: f64::from(count) * bar.area_mm2,
        area_required_mm2: required_mm2,
        area_provenance: bar.provenance,
        selection,
        unit_weight_kg_m: bar.unit_weight_kg_m,
        bar_length_m,
        total_weight_kg: bar
            .unit_weight_kg_m
            .map(|w| bar_weight_kg(w, count, bar_length_m)),
    }
}

/// Material strengths and bar choices for the flexural stage
#[derive(Debug, Clone, Copy)]
pub struct FlexureParams<'a> {
    pub fc_mpa: f64,
    pub fy_mpa: f64,
    pub main_bar: &'a BarArea,
    pub secondary_bar: &'a BarArea,
    pub main_count: Option<u32>,
    pub secondary_count: Option<u32>,
}

/// Run the flexural design stage.
///
/// Returns the design quantities with the main and secondary layouts.
pub fn design(
    dims: &CapDimensions,
    reactions: &PileReactions,
    params: &FlexureParams<'_>,
    settings: &DesignSettings,
) -> (FlexureResult, BarLayout, BarLayout) {
    let b = dims.width_m;
    let d = dims.effective_depth_m;

    let crit = critical_section_distance(dims.pile_spacing_m, dims.column_width_m);
    let mu = critical_moment(reactions.max_pile_reaction_kn, crit);

    let (rn, rho, as_req) = if dims.has_effective_depth() {
        let rn = nominal_moment_coefficient(mu, settings.phi_flexure, b, d);
        let rho = required_steel_ratio(rn, params.fc_mpa, params.fy_mpa);
        (Some(rn), rho, rho.map(|r| steel_area_mm2(r, b, d)))
    } else {
        (None, None, None)
    };

    let as_min = steel_area_mm2(min_steel_ratio(params.fc_mpa, params.fy_mpa), b, d).max(0.0);
    let as_final = as_req.map_or(as_min, |a| a.max(as_min));

    let main = select_bars(
        BarLayer::Main,
        as_final,
        params.main_bar,
        params.main_count,
        dims.width_m,
        dims.cover_m,
        dims.length_m,
    );

    let secondary_required =
        secondary_steel_area_mm2(as_min, main.area_provided_mm2, settings.secondary_steel_fraction);
    let secondary = select_bars(
        BarLayer::Secondary,
        secondary_required,
        params.secondary_bar,
        params.secondary_count,
        dims.length_m,
        dims.cover_m,
        dims.width_m,
    );

    let result = FlexureResult {
        critical_distance_m: crit,
        critical_moment_knm: mu,
        nominal_coefficient_mpa: rn,
        rn_limit_mpa: STRESS_BLOCK_FACTOR * params.fc_mpa / 2.0,
        required_steel_ratio: rho,
        required_steel_area_mm2: as_req,
        min_steel_area_mm2: as_min,
        final_steel_area_mm2: as_final,
        provided_main_area_mm2: main.area_provided_mm2,
        secondary_required_area_mm2: secondary_required,
        provided_secondary_area_mm2: secondary.area_provided_mm2,
    };

    (result, main, secondary)
}
