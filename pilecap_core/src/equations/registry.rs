//! # Equation Registry
//!
//! Central registry of every formula applied in a pile cap design. Each
//! equation has metadata including code references, formulas, and variable
//! definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for reports and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use pilecap_core::equations::registry::Equation;
//!
//! let meta = Equation::RequiredSteelRatio.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Thai Industrial Standard
    TIS {
        number: &'static str,
        title: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{:02} Section {}", year % 100, section)
            }
            CodeReference::TIS { number, title } => format!("TIS {} ({})", number, title),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ACI318 { .. } => "ACI 318",
            CodeReference::TIS { .. } => "TIS",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

const ACI_YEAR: u16 = 1999;

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations, in calculation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Factored loads
    Loads,
    /// Cap plan dimensions, weight and effective depth
    Geometry,
    /// Pile reaction and capacity check
    PileReactions,
    /// Moment and required steel
    Flexure,
    /// Bar count, spacing and weight
    Reinforcement,
    /// One-way (beam) shear
    OneWayShear,
    /// Two-way (punching) shear
    PunchingShear,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Loads => "Loads",
            EquationCategory::Geometry => "Geometry",
            EquationCategory::PileReactions => "Pile Reactions",
            EquationCategory::Flexure => "Flexure",
            EquationCategory::Reinforcement => "Reinforcement",
            EquationCategory::OneWayShear => "One-Way Shear",
            EquationCategory::PunchingShear => "Punching Shear",
        }
    }

    /// Sort order for documentation (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Loads => 1,
            EquationCategory::Geometry => 2,
            EquationCategory::PileReactions => 3,
            EquationCategory::Flexure => 4,
            EquationCategory::Reinforcement => 5,
            EquationCategory::OneWayShear => 6,
            EquationCategory::PunchingShear => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Mu", "d", "fc'")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN", "m", "MPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula applied in a two-pile cap design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Loads
    /// U = 1.4D + 1.7L
    StrengthCombination,
    /// Pu_group = Pu + 1.4W
    GroupLoad,

    // Geometry
    /// L = S + D + 2e, B = D + 2e
    CapPlanDimensions,
    /// W = L B h γc
    CapSelfWeight,
    /// d = h - c - d_b
    EffectiveDepth,

    // Pile reactions
    /// R_max = P/2 + |M|/S
    MaxPileReaction,
    /// Qu = 1.7 Qa
    UltimatePileCapacity,
    /// SF = Qu / R_max
    PileSafetyFactor,

    // Flexure
    /// x = S/2 - bc/2
    CriticalSectionDistance,
    /// Mu = R_max x
    CriticalMoment,
    /// Rn = Mu / (φ b d²)
    NominalMomentCoefficient,
    /// ρ = 0.85fc'/fy (1 - √(1 - 2Rn/0.85fc'))
    RequiredSteelRatio,
    /// ρ_min = max(√fc'/4fy, 1.4/fy)
    MinimumSteelRatio,
    /// As = ρ b d
    SteelArea,

    // Reinforcement
    /// n = ⌈As / A_bar⌉
    BarCount,
    /// s = (W - 2c - d_b)/(n - 1)
    BarSpacing,
    /// As,sec = max(As,min, 0.2 As,main)
    SecondarySteelArea,
    /// W = w n ℓ
    BarWeight,

    // One-way shear
    /// x_v = S/2 - bc/2 - d
    OneWayCriticalDistance,
    /// φVc = φ (1/6)√fc' b d
    OneWayShearCapacity,

    // Punching shear
    /// b0 = 2(bc + d) + 2(hc + d)
    PunchingPerimeter,
    /// β = long side / short side
    ColumnAspectRatio,
    /// v1, v2, v3 two-way stress limits
    PunchingStressLimits,
    /// φVc = φ vc b0 d
    PunchingShearCapacity,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::StrengthCombination => EquationMetadata {
                name: "Strength Design Combination",
                description: "Factored column axial load and moment",
                formula_plain: "Pu = 1.4PD + 1.7PL, Mux = 1.4MxD + 1.7MxL",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "9.2.1" },
                variables: vec![
                    Variable::new("PD, PL", "Service dead and live axial load", "kN"),
                    Variable::new("MxD, MxL", "Service dead and live moment", "kN·m"),
                    Variable::new("Pu", "Factored axial load", "kN"),
                    Variable::new("Mux", "Factored moment", "kN·m"),
                ],
                assumptions: vec!["Gravity loads only", "Factors configurable in DesignSettings"],
                category: EquationCategory::Loads,
                source_module: "loads/combinations.rs",
                source_function: "strength_combination",
            },

            Equation::GroupLoad => EquationMetadata {
                name: "Pile Group Load",
                description: "Factored column load plus factored cap self-weight",
                formula_plain: "Pu_group = Pu + 1.4 Wcap",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "9.2.1" },
                variables: vec![
                    Variable::new("Wcap", "Cap self-weight", "kN"),
                    Variable::new("Pu_group", "Total factored load on the piles", "kN"),
                ],
                assumptions: vec!["Cap self-weight factored as dead load"],
                category: EquationCategory::Loads,
                source_module: "calculations/geometry.rs",
                source_function: "analyze",
            },

            Equation::CapPlanDimensions => EquationMetadata {
                name: "Cap Plan Dimensions",
                description: "Cap length along and width across the pile line",
                formula_plain: "L = S + D + 2e, B = D + 2e",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("S", "Pile spacing", "m"),
                    Variable::new("D", "Pile diameter", "m"),
                    Variable::new("e", "Edge distance from pile face", "m"),
                ],
                assumptions: vec!["Default edge distance 0.15 m"],
                category: EquationCategory::Geometry,
                source_module: "equations/pile_cap.rs",
                source_function: "cap_length",
            },

            Equation::CapSelfWeight => EquationMetadata {
                name: "Cap Self-Weight",
                description: "Weight of the concrete cap",
                formula_plain: "Wcap = L * B * h * γc",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("h", "Cap thickness", "m"),
                    Variable::new("γc", "Concrete unit weight", "kN/m³"),
                ],
                assumptions: vec!["γc = 24 kN/m³ unless the standards override it"],
                category: EquationCategory::Geometry,
                source_module: "equations/pile_cap.rs",
                source_function: "cap_self_weight",
            },

            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                description: "Depth from the top of the cap to the main reinforcement",
                formula_plain: "d = h - c - d_b",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("c", "Clear cover", "m"),
                    Variable::new("d_b", "Main bar diameter", "m"),
                    Variable::new("d", "Effective depth", "m"),
                ],
                assumptions: vec!["One full bar diameter deducted"],
                category: EquationCategory::Geometry,
                source_module: "equations/pile_cap.rs",
                source_function: "effective_depth",
            },

            Equation::MaxPileReaction => EquationMetadata {
                name: "Maximum Pile Reaction",
                description: "Axial load shared equally plus the moment couple across the piles",
                formula_plain: "R_max = Pu_group/2 + |Mux|/S",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("R_max", "Reaction of the heavier pile", "kN"),
                    Variable::new("S", "Pile spacing", "m"),
                ],
                assumptions: vec!["Rigid cap", "Moment about the axis perpendicular to the pile line"],
                category: EquationCategory::PileReactions,
                source_module: "equations/pile_cap.rs",
                source_function: "max_pile_reaction",
            },

            Equation::UltimatePileCapacity => EquationMetadata {
                name: "Ultimate Pile Capacity",
                description: "Estimated ultimate capacity from the allowable pile load",
                formula_plain: "Qu = 1.7 Qa",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Qa", "Allowable (service) pile capacity", "kN"),
                    Variable::new("Qu", "Estimated ultimate pile capacity", "kN"),
                ],
                assumptions: vec!["Multiplier matches the live load factor"],
                category: EquationCategory::PileReactions,
                source_module: "equations/pile_cap.rs",
                source_function: "ultimate_pile_capacity",
            },

            Equation::PileSafetyFactor => EquationMetadata {
                name: "Pile Safety Factor",
                description: "Ratio of ultimate pile capacity to maximum factored reaction",
                formula_plain: "SF = Qu / R_max (OK when SF > 1)",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("SF", "Safety factor", "-")],
                assumptions: vec!["Infinite when the reaction is zero"],
                category: EquationCategory::PileReactions,
                source_module: "equations/pile_cap.rs",
                source_function: "pile_safety_factor",
            },

            Equation::CriticalSectionDistance => EquationMetadata {
                name: "Flexural Critical Section",
                description: "Lever arm from pile centre to the column face",
                formula_plain: "x = S/2 - bc/2",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "15.4.2" },
                variables: vec![
                    Variable::new("bc", "Column width along the pile line", "m"),
                    Variable::new("x", "Lever arm", "m"),
                ],
                assumptions: vec!["Critical section at the face of the column"],
                category: EquationCategory::Flexure,
                source_module: "equations/pile_cap.rs",
                source_function: "critical_section_distance",
            },

            Equation::CriticalMoment => EquationMetadata {
                name: "Design Moment",
                description: "Factored moment at the column face",
                formula_plain: "Mu = R_max * x",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "15.4.1" },
                variables: vec![Variable::new("Mu", "Factored moment", "kN·m")],
                assumptions: vec!["Pile reaction acts at the pile centre"],
                category: EquationCategory::Flexure,
                source_module: "equations/pile_cap.rs",
                source_function: "critical_moment",
            },

            Equation::NominalMomentCoefficient => EquationMetadata {
                name: "Nominal Moment Coefficient",
                description: "Required flexural resistance per unit b·d²",
                formula_plain: "Rn = Mu / (φ b d²)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "9.3.2.1" },
                variables: vec![
                    Variable::new("φ", "Strength reduction factor for flexure (0.9)", "-"),
                    Variable::new("b", "Cap width B", "m"),
                    Variable::new("Rn", "Nominal moment coefficient", "MPa"),
                ],
                assumptions: vec!["Tension-controlled section"],
                category: EquationCategory::Flexure,
                source_module: "equations/pile_cap.rs",
                source_function: "nominal_moment_coefficient",
            },

            Equation::RequiredSteelRatio => EquationMetadata {
                name: "Required Steel Ratio",
                description: "Tension steel ratio from the rectangular stress block",
                formula_plain: "ρ = (0.85fc'/fy) * (1 - sqrt(1 - 2Rn/(0.85fc')))",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "10.2.7" },
                variables: vec![
                    Variable::new("fc'", "Concrete compressive strength", "MPa"),
                    Variable::new("fy", "Steel yield strength", "MPa"),
                    Variable::new("ρ", "Required steel ratio", "-"),
                ],
                assumptions: vec![
                    "Singly reinforced",
                    "Undefined when 2Rn > 0.85fc' (section overstressed)",
                ],
                category: EquationCategory::Flexure,
                source_module: "equations/pile_cap.rs",
                source_function: "required_steel_ratio",
            },

            Equation::MinimumSteelRatio => EquationMetadata {
                name: "Minimum Flexural Steel",
                description: "Lower bound on tension reinforcement",
                formula_plain: "As_min = max(0.25 sqrt(fc')/fy, 1.4/fy) * B * d",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "10.5.1" },
                variables: vec![Variable::new("As_min", "Minimum steel area", "mm²")],
                assumptions: vec!["Clamped to zero when d <= 0"],
                category: EquationCategory::Flexure,
                source_module: "equations/pile_cap.rs",
                source_function: "min_steel_ratio",
            },

            Equation::SteelArea => EquationMetadata {
                name: "Design Steel Area",
                description: "Required area governed by strength or the minimum",
                formula_plain: "As_req = ρ B d, As = max(As_req, As_min)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "10.5.1" },
                variables: vec![
                    Variable::new("As_req", "Strength-required steel area", "mm²"),
                    Variable::new("As", "Design steel area", "mm²"),
                ],
                assumptions: vec!["Only As_min applies when ρ is undefined"],
                category: EquationCategory::Flexure,
                source_module: "equations/pile_cap.rs",
                source_function: "steel_area_mm2",
            },

            Equation::BarCount => EquationMetadata {
                name: "Number of Bars",
                description: "Smallest whole number of bars providing the required area",
                formula_plain: "n = ceil(As / A_bar)",
                reference: CodeReference::TIS { number: "24-2548", title: "Steel bars for reinforced concrete: deformed bars" },
                variables: vec![
                    Variable::new("A_bar", "Nominal bar area", "mm²"),
                    Variable::new("n", "Number of bars", "-"),
                ],
                assumptions: vec!["A manual count replaces n verbatim"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/pile_cap.rs",
                source_function: "bar_count",
            },

            Equation::BarSpacing => EquationMetadata {
                name: "Bar Spacing",
                description: "Centre-to-centre spacing of a bar layer",
                formula_plain: "s = (W - 2c - d_b) / (n - 1)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("W", "Width spanned: B for main bars, L for secondary bars", "m"),
                    Variable::new("s", "Bar spacing", "mm"),
                ],
                assumptions: vec!["Zero when n <= 1"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/pile_cap.rs",
                source_function: "bar_spacing_mm",
            },

            Equation::SecondarySteelArea => EquationMetadata {
                name: "Secondary Steel Area",
                description: "Distribution steel perpendicular to the main bars",
                formula_plain: "As_sec = max(As_min, 0.2 As_main,provided)",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("As_sec", "Required secondary steel area", "mm²")],
                assumptions: vec!["Fraction configurable in DesignSettings"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/pile_cap.rs",
                source_function: "secondary_steel_area_mm2",
            },

            Equation::BarWeight => EquationMetadata {
                name: "Bar Weight",
                description: "Total weight of a bar layer",
                formula_plain: "W = w * n * l",
                reference: CodeReference::TIS { number: "24-2548", title: "Steel bars for reinforced concrete: deformed bars" },
                variables: vec![
                    Variable::new("w", "Bar unit weight", "kg/m"),
                    Variable::new("l", "Bar length: L for main bars, B for secondary bars", "m"),
                ],
                assumptions: vec!["Straight bars without hooks or laps"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/pile_cap.rs",
                source_function: "bar_weight_kg",
            },

            Equation::OneWayCriticalDistance => EquationMetadata {
                name: "One-Way Shear Critical Section",
                description: "Distance from pile centre to the section at d from the column face",
                formula_plain: "x_v = S/2 - bc/2 - d",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "11.1.3.1" },
                variables: vec![Variable::new("x_v", "Distance to the shear section", "m")],
                assumptions: vec![
                    "Shear demand is R_max when x_v > 0, otherwise zero",
                    "Simplification: a pile inside the critical section is assumed carried by direct strut action",
                ],
                category: EquationCategory::OneWayShear,
                source_module: "equations/pile_cap.rs",
                source_function: "one_way_critical_distance",
            },

            Equation::OneWayShearCapacity => EquationMetadata {
                name: "One-Way Shear Strength",
                description: "Design concrete shear strength of the cap as a beam",
                formula_plain: "φVc = 0.75 * (1/6) sqrt(fc') * B * d",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "11.3.1.1" },
                variables: vec![
                    Variable::new("φ", "Strength reduction factor for shear (0.75)", "-"),
                    Variable::new("φVc", "Design shear strength", "kN"),
                ],
                assumptions: vec!["No shear reinforcement", "OK when Vu <= φVc"],
                category: EquationCategory::OneWayShear,
                source_module: "equations/pile_cap.rs",
                source_function: "one_way_shear_capacity",
            },

            Equation::PunchingPerimeter => EquationMetadata {
                name: "Punching Shear Perimeter",
                description: "Critical perimeter at d/2 from the column faces",
                formula_plain: "b0 = 2(bc + d) + 2(hc + d)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "11.12.1.2" },
                variables: vec![
                    Variable::new("hc", "Column depth", "m"),
                    Variable::new("b0", "Critical perimeter", "m"),
                ],
                assumptions: vec!["Rectangular column"],
                category: EquationCategory::PunchingShear,
                source_module: "equations/pile_cap.rs",
                source_function: "punching_perimeter",
            },

            Equation::ColumnAspectRatio => EquationMetadata {
                name: "Column Aspect Ratio",
                description: "Ratio of the long to the short column side",
                formula_plain: "β = max(bc, hc) / min(bc, hc)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "11.12.2.1" },
                variables: vec![Variable::new("β", "Column aspect ratio", "-")],
                assumptions: vec![],
                category: EquationCategory::PunchingShear,
                source_module: "equations/pile_cap.rs",
                source_function: "column_aspect_ratio",
            },

            Equation::PunchingStressLimits => EquationMetadata {
                name: "Two-Way Shear Stress Limits",
                description: "Concrete stress limits for punching shear; the smallest governs",
                formula_plain: "v1 = (1/6)(1 + 2/β)sqrt(fc'), v2 = (1/12)(2 + 40d/b0)sqrt(fc'), v3 = (1/3)sqrt(fc')",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "11.12.2.1" },
                variables: vec![Variable::new("vc", "Governing stress limit", "MPa")],
                assumptions: vec!["Interior column (αs = 40)"],
                category: EquationCategory::PunchingShear,
                source_module: "equations/pile_cap.rs",
                source_function: "punching_stress_limits",
            },

            Equation::PunchingShearCapacity => EquationMetadata {
                name: "Punching Shear Strength",
                description: "Design two-way shear strength around the column",
                formula_plain: "φVc = 0.75 * vc * b0 * d",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "11.12.2.1" },
                variables: vec![Variable::new("φVc", "Design punching strength", "kN")],
                assumptions: vec![
                    "Demand is the factored column load Pu",
                    "Cap self-weight inside the perimeter is not deducted",
                ],
                category: EquationCategory::PunchingShear,
                source_module: "equations/pile_cap.rs",
                source_function: "punching_shear_capacity",
            },
        }
    }

    /// Get all equations in a specific category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sorted order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut cats = vec![
            EquationCategory::Loads,
            EquationCategory::Geometry,
            EquationCategory::PileReactions,
            EquationCategory::Flexure,
            EquationCategory::Reinforcement,
            EquationCategory::OneWayShear,
            EquationCategory::PunchingShear,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::StrengthCombination,
    Equation::GroupLoad,
    Equation::CapPlanDimensions,
    Equation::CapSelfWeight,
    Equation::EffectiveDepth,
    Equation::MaxPileReaction,
    Equation::UltimatePileCapacity,
    Equation::PileSafetyFactor,
    Equation::CriticalSectionDistance,
    Equation::CriticalMoment,
    Equation::NominalMomentCoefficient,
    Equation::RequiredSteelRatio,
    Equation::MinimumSteelRatio,
    Equation::SteelArea,
    Equation::BarCount,
    Equation::BarSpacing,
    Equation::SecondarySteelArea,
    Equation::BarWeight,
    Equation::OneWayCriticalDistance,
    Equation::OneWayShearCapacity,
    Equation::PunchingPerimeter,
    Equation::ColumnAspectRatio,
    Equation::PunchingStressLimits,
    Equation::PunchingShearCapacity,
];

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// Lists every equation in the registry organized by category, with
/// formulas, references, and source code links.
///
/// # Example
///
/// ```rust
/// use pilecap_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Pile Cap Equations Reference"));
/// assert!(markdown.contains("Punching Shear"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(r#"# Pile Cap Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used in the two-pile cap design.
Each equation includes its formula, code reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Length | m (inputs in mm) |
| Force | kN |
| Moment | kN·m |
| Strength, stress | MPa |
| Steel area | mm² |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
