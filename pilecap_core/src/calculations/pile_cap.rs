//! # Two-Pile Cap Design
//!
//! Chains the calculation stages into one complete design:
//!
//! 1. Standards lookup (grades and bar areas)
//! 2. Geometry & loads
//! 3. Pile reactions
//! 4. Flexure and bar selection
//! 5. One-way and punching shear
//!
//! Malformed input and unknown standard codes are errors. A design that
//! fails a check is still returned in full, with [`DesignWarning`]s
//! describing every failed condition.
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::calculations::pile_cap::{calculate, PileCapInput};
//!
//! let input = PileCapInput {
//!     label: "PC-1".to_string(),
//!     dead_load_kn: 48.0,
//!     live_load_kn: 30.0,
//!     dead_moment_knm: 0.0,
//!     live_moment_knm: 0.0,
//!     pile_capacity_kn: 400.0,
//!     pile_diameter_mm: 300.0,
//!     pile_spacing_mm: 900.0,
//!     column_width_mm: 400.0,
//!     column_depth_mm: 550.0,
//!     cap_thickness_mm: 600.0,
//!     cover_mm: 70.0,
//!     concrete_grade: "C25/30".to_string(),
//!     steel_grade: "SD40".to_string(),
//!     main_bar_diameter_mm: 16,
//!     secondary_bar_diameter_mm: 12,
//!     main_bar_count: None,
//!     secondary_bar_count: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.main_bars.count, 6);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::flexure::{self, BarLayout, FlexureParams, FlexureResult};
use super::geometry::{self, CapDimensions, LoadSummary};
use super::reactions::{self, PileReactions};
use super::shear::{self, ShearResult};
use super::warnings::DesignWarning;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarStandard, ConcreteStandard, Standards, SteelStandard};
use crate::settings::DesignSettings;

/// Input parameters for a two-pile cap.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "PC-1",
///   "dead_load_kn": 48.0,
///   "live_load_kn": 30.0,
///   "dead_moment_knm": 0.0,
///   "live_moment_knm": 0.0,
///   "pile_capacity_kn": 400.0,
///   "pile_diameter_mm": 300.0,
///   "pile_spacing_mm": 900.0,
///   "column_width_mm": 400.0,
///   "column_depth_mm": 550.0,
///   "cap_thickness_mm": 600.0,
///   "cover_mm": 70.0,
///   "concrete_grade": "C25/30",
///   "steel_grade": "SD40",
///   "main_bar_diameter_mm": 16,
///   "secondary_bar_diameter_mm": 12,
///   "main_bar_count": null,
///   "secondary_bar_count": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileCapInput {
    /// User label for this cap (e.g., "PC-1", "Cap at Grid B/3")
    #[serde(default)]
    pub label: String,

    /// Service dead load from the column PD (kN)
    pub dead_load_kn: f64,

    /// Service live load from the column PL (kN)
    pub live_load_kn: f64,

    /// Service dead moment MxD (kN·m); sign is irrelevant
    #[serde(default)]
    pub dead_moment_knm: f64,

    /// Service live moment MxL (kN·m); sign is irrelevant
    #[serde(default)]
    pub live_moment_knm: f64,

    /// Allowable capacity of one pile Qa (kN)
    pub pile_capacity_kn: f64,

    /// Pile diameter D (mm)
    pub pile_diameter_mm: f64,

    /// Centre-to-centre pile spacing S (mm)
    pub pile_spacing_mm: f64,

    /// Column width along the pile line bc (mm)
    pub column_width_mm: f64,

    /// Column depth across the pile line hc (mm)
    pub column_depth_mm: f64,

    /// Cap thickness h (mm)
    pub cap_thickness_mm: f64,

    /// Clear cover to the main bars CL (mm)
    pub cover_mm: f64,

    /// Concrete grade code (e.g., "C25/30")
    pub concrete_grade: String,

    /// Steel grade code (e.g., "SD40")
    pub steel_grade: String,

    /// Main bar nominal diameter (mm)
    pub main_bar_diameter_mm: u32,

    /// Secondary bar nominal diameter (mm)
    pub secondary_bar_diameter_mm: u32,

    /// Manual main bar count; `None` selects automatically
    #[serde(default)]
    pub main_bar_count: Option<u32>,

    /// Manual secondary bar count; `None` selects automatically
    #[serde(default)]
    pub secondary_bar_count: Option<u32>,
}

impl PileCapInput {
    /// A worked example: 48 kN dead + 30 kN live on two 300 mm piles at 900 mm,
    /// 400 × 550 column, 600 mm cap, C25/30 concrete with SD40 bars.
    pub fn reference() -> Self {
        PileCapInput {
            label: "PC-1".to_string(),
            dead_load_kn: 48.0,
            live_load_kn: 30.0,
            dead_moment_knm: 0.0,
            live_moment_knm: 0.0,
            pile_capacity_kn: 400.0,
            pile_diameter_mm: 300.0,
            pile_spacing_mm: 900.0,
            column_width_mm: 400.0,
            column_depth_mm: 550.0,
            cap_thickness_mm: 600.0,
            cover_mm: 70.0,
            concrete_grade: "C25/30".to_string(),
            steel_grade: "SD40".to_string(),
            main_bar_diameter_mm: 16,
            secondary_bar_diameter_mm: 12,
            main_bar_count: None,
            secondary_bar_count: None,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let numbers = [
            ("dead_load_kn", self.dead_load_kn),
            ("live_load_kn", self.live_load_kn),
            ("dead_moment_knm", self.dead_moment_knm),
            ("live_moment_knm", self.live_moment_knm),
            ("pile_capacity_kn", self.pile_capacity_kn),
            ("pile_diameter_mm", self.pile_diameter_mm),
            ("pile_spacing_mm", self.pile_spacing_mm),
            ("column_width_mm", self.column_width_mm),
            ("column_depth_mm", self.column_depth_mm),
            ("cap_thickness_mm", self.cap_thickness_mm),
            ("cover_mm", self.cover_mm),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
            }
        }

        for (field, value) in [("dead_load_kn", self.dead_load_kn), ("live_load_kn", self.live_load_kn)] {
            if value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Load cannot be negative"));
            }
        }

        if self.pile_capacity_kn <= 0.0 {
            return Err(CalcError::invalid_input(
                "pile_capacity_kn",
                self.pile_capacity_kn.to_string(),
                "Pile capacity must be positive",
            ));
        }

        let dimensions = [
            ("pile_diameter_mm", self.pile_diameter_mm),
            ("pile_spacing_mm", self.pile_spacing_mm),
            ("column_width_mm", self.column_width_mm),
            ("column_depth_mm", self.column_depth_mm),
            ("cap_thickness_mm", self.cap_thickness_mm),
        ];
        for (field, value) in dimensions {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Dimension must be positive"));
            }
        }

        if self.cover_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover cannot be negative",
            ));
        }

        if self.pile_spacing_mm <= self.pile_diameter_mm {
            return Err(CalcError::invalid_input(
                "pile_spacing_mm",
                self.pile_spacing_mm.to_string(),
                "Pile spacing must exceed the pile diameter",
            ));
        }

        for (field, value) in [
            ("main_bar_diameter_mm", self.main_bar_diameter_mm),
            ("secondary_bar_diameter_mm", self.secondary_bar_diameter_mm),
        ] {
            if value == 0 {
                return Err(CalcError::invalid_input(field, "0", "Bar diameter must be positive"));
            }
        }

        for (field, value) in [
            ("main_bar_count", self.main_bar_count),
            ("secondary_bar_count", self.secondary_bar_count),
        ] {
            if value == Some(0) {
                return Err(CalcError::invalid_input(field, "0", "Manual bar count must be at least 1"));
            }
        }

        Ok(())
    }
}

/// Material properties resolved from the standards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSummary {
    pub concrete_grade: String,
    pub steel_grade: String,
    /// fc' (MPa)
    pub fc_mpa: f64,
    /// fy (MPa)
    pub fy_mpa: f64,
    /// Ec = 4700√fc' (MPa)
    pub ec_mpa: f64,
    /// γc (kN/m³)
    pub concrete_unit_weight_kn_m3: f64,
}

/// Complete design of a two-pile cap.
///
/// Every group is always populated, even when checks fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileCapResult {
    pub label: String,
    pub materials: MaterialSummary,
    pub loads: LoadSummary,
    pub dims: CapDimensions,
    pub reactions: PileReactions,
    pub flexure: FlexureResult,
    pub main_bars: BarLayout,
    pub secondary_bars: BarLayout,
    pub shear: ShearResult,
    /// Failed checks and other conditions for review, in stage order
    pub warnings: Vec<DesignWarning>,
}

impl PileCapResult {
    /// True when no warning is attached
    pub fn passes(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Total reinforcement weight, when both layers use tabulated bars (kg)
    pub fn total_steel_weight_kg(&self) -> Option<f64> {
        Some(self.main_bars.total_weight_kg? + self.secondary_bars.total_weight_kg?)
    }

    /// Concrete volume of the cap (m³)
    pub fn concrete_volume_m3(&self) -> f64 {
        self.dims.length_m * self.dims.width_m * self.dims.thickness_m
    }
}

/// Design a cap with the default [`DesignSettings`].
pub fn compute_design(
    input: &PileCapInput,
    steel: &SteelStandard,
    concrete: &ConcreteStandard,
    bars: &BarStandard,
) -> CalcResult<PileCapResult> {
    compute_design_with_settings(input, steel, concrete, bars, &DesignSettings::default())
}

/// Design a cap against the built-in Thai TIS tables with default settings.
pub fn calculate(input: &PileCapInput) -> CalcResult<PileCapResult> {
    let tis = Standards::thai_tis();
    compute_design(input, &tis.steel, &tis.concrete, &tis.bars)
}

/// Design a cap.
///
/// # Errors
///
/// - `InvalidInput` for malformed input or settings
/// - `InvalidStandards` when a table is empty or holds non-positive values
/// - `UnknownGrade` when a grade code is not in its table
/// - `UnknownBar` when a bar diameter is not tabulated and
///   `settings.allow_computed_bar_area` is false
#[tracing::instrument(level = "debug", skip_all, fields(label = %input.label))]
pub fn compute_design_with_settings(
    input: &PileCapInput,
    steel: &SteelStandard,
    concrete: &ConcreteStandard,
    bars: &BarStandard,
    settings: &DesignSettings,
) -> CalcResult<PileCapResult> {
    settings.validate()?;
    steel.validate()?;
    concrete.validate()?;
    bars.validate()?;
    input.validate()?;

    // === Standards lookup ===
    let concrete_grade = concrete.lookup(&input.concrete_grade)?;
    let steel_grade = steel.lookup(&input.steel_grade)?;
    let main_bar = bars.resolve(input.main_bar_diameter_mm, settings.allow_computed_bar_area)?;
    let secondary_bar = bars.resolve(input.secondary_bar_diameter_mm, settings.allow_computed_bar_area)?;

    let materials = MaterialSummary {
        concrete_grade: concrete_grade.code.clone(),
        steel_grade: steel_grade.code.clone(),
        fc_mpa: concrete_grade.fc_mpa,
        fy_mpa: steel_grade.fy_mpa,
        ec_mpa: concrete_grade.elastic_modulus_mpa(concrete.properties.elastic_modulus_factor),
        concrete_unit_weight_kn_m3: concrete.properties.unit_weight_kn_m3,
    };

    // === Geometry & loads ===
    let (loads, dims) = geometry::analyze(input, &concrete.properties, settings);
    debug!(
        pu_kn = loads.pu_kn,
        mux_knm = loads.mux_knm,
        group_load_kn = loads.group_load_kn,
        length_m = dims.length_m,
        width_m = dims.width_m,
        effective_depth_m = dims.effective_depth_m,
        "geometry"
    );

    // === Pile reactions ===
    let reactions = reactions::distribute(&loads, &dims, input.pile_capacity_kn, settings);
    debug!(
        max_pile_reaction_kn = reactions.max_pile_reaction_kn,
        safety_factor = reactions.safety_factor,
        "pile reactions"
    );

    // === Flexure ===
    let params = FlexureParams {
        fc_mpa: materials.fc_mpa,
        fy_mpa: materials.fy_mpa,
        main_bar: &main_bar,
        secondary_bar: &secondary_bar,
        main_count: input.main_bar_count,
        secondary_count: input.secondary_bar_count,
    };
    let (flexure, main_bars, secondary_bars) = flexure::design(&dims, &reactions, &params, settings);
    debug!(
        mu_knm = flexure.critical_moment_knm,
        as_final_mm2 = flexure.final_steel_area_mm2,
        main_count = main_bars.count,
        secondary_count = secondary_bars.count,
        "flexure"
    );

    // === Shear ===
    let shear = shear::check(&loads, &dims, &reactions, materials.fc_mpa, settings);
    debug!(
        one_way_demand_kn = shear.one_way_demand_kn,
        one_way_capacity_kn = shear.one_way_capacity_kn,
        punch_demand_kn = shear.punch_demand_kn,
        punch_capacity_kn = shear.punch_capacity_kn,
        "shear"
    );

    let mut warnings: Vec<DesignWarning> = Vec::new();
    let staged = dims
        .warnings()
        .into_iter()
        .chain(reactions.warnings())
        .chain(flexure.warnings())
        .chain(main_bars.warnings())
        .chain(secondary_bars.warnings())
        .chain(shear.warnings());
    for warning in staged {
        // Both layers may report the same computed bar
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }
    for warning in &warnings {
        warn!(code = warning.code(), "{}", warning.message());
    }

    Ok(PileCapResult {
        label: input.label.clone(),
        materials,
        loads,
        dims,
        reactions,
        flexure,
        main_bars,
        secondary_bars,
        shear,
        warnings,
    })
}
