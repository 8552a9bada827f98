//! # Design Equations
//!
//! All formulas used by the pile cap calculation live in one place. Having
//! equations in one place enables:
//! - Easy verification against code references (ACI 318, TIS)
//! - Documentation of assumptions and units
//! - Consistent implementation across calculation stages
//!
//! ## Modules
//!
//! - [`pile_cap`] - Closed-form two-pile cap formulas
//! - [`registry`] - Equation metadata for reports and EQUATIONS.md
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (compression into the piles)
//! - **Moment**: Sign is irrelevant to design; only |Mux| is used
//! - **Reactions**: Positive upward (resisting gravity)

pub mod pile_cap;
pub mod registry;

pub use pile_cap::{
    bar_count,
    bar_spacing_mm,
    bar_weight_kg,
    cap_length,
    cap_self_weight,
    cap_width,
    column_aspect_ratio,
    critical_moment,
    critical_section_distance,
    effective_depth,
    max_pile_reaction,
    min_steel_ratio,
    nominal_moment_coefficient,
    one_way_critical_distance,
    one_way_shear_capacity,
    pile_safety_factor,
    punching_perimeter,
    punching_shear_capacity,
    punching_stress_limits,
    required_steel_ratio,
    secondary_steel_area_mm2,
    steel_area_mm2,
    steel_ratio_discriminant,
    ultimate_pile_capacity,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
