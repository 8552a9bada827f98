//! # Calculation Report
//!
//! Renders a design as a step-by-step worked calculation in plain text
//! (Markdown-compatible). The four steps follow the calculation order:
//!
//! 1. Loads & dimensions
//! 2. Pile reactions
//! 3. Flexural design
//! 4. Shear design
//!
//! Each check ends with an `OK` or `NOT OK` verdict, and each step lists the
//! code references of the equations it applies.
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::calculations::{calculate, PileCapInput};
//! use pilecap_core::report::{render_report, render_step, ReportStep};
//!
//! let input = PileCapInput::reference();
//! let result = calculate(&input).unwrap();
//!
//! let report = render_report(&input, &result);
//! assert!(report.contains("Step 4: Shear Design"));
//!
//! let step = render_step(ReportStep::PileReactions, &input, &result);
//! assert!(step.contains("OK"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{BarLayout, PileCapInput, PileCapResult};
use crate::equations::registry::Equation;
use crate::units::{mm_to_m, SqCentimeters, SqMillimeters};

/// One step of the worked calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStep {
    LoadsAndDimensions,
    PileReactions,
    Flexure,
    Shear,
}

impl ReportStep {
    pub const ALL: [ReportStep; 4] = [
        ReportStep::LoadsAndDimensions,
        ReportStep::PileReactions,
        ReportStep::Flexure,
        ReportStep::Shear,
    ];

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            ReportStep::LoadsAndDimensions => 1,
            ReportStep::PileReactions => 2,
            ReportStep::Flexure => 3,
            ReportStep::Shear => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.number() == number)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportStep::LoadsAndDimensions => "Loads & Dimensions",
            ReportStep::PileReactions => "Pile Reactions",
            ReportStep::Flexure => "Flexural Design",
            ReportStep::Shear => "Shear Design",
        }
    }

    /// Equations applied in this step
    pub fn equations(&self) -> &'static [Equation] {
        match self {
            ReportStep::LoadsAndDimensions => &[
                Equation::StrengthCombination,
                Equation::CapPlanDimensions,
                Equation::CapSelfWeight,
                Equation::GroupLoad,
                Equation::EffectiveDepth,
            ],
            ReportStep::PileReactions => &[
                Equation::MaxPileReaction,
                Equation::UltimatePileCapacity,
                Equation::PileSafetyFactor,
            ],
            ReportStep::Flexure => &[
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
            ],
            ReportStep::Shear => &[
                Equation::OneWayCriticalDistance,
                Equation::OneWayShearCapacity,
                Equation::PunchingPerimeter,
                Equation::ColumnAspectRatio,
                Equation::PunchingStressLimits,
                Equation::PunchingShearCapacity,
            ],
        }
    }
}

impl std::fmt::Display for ReportStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "NOT OK"
    }
}

fn cm2(mm2: f64) -> f64 {
    SqCentimeters::from(SqMillimeters(mm2)).value()
}

fn optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "n/a".to_string(),
    }
}

/// Render a single step.
pub fn render_step(step: ReportStep, input: &PileCapInput, result: &PileCapResult) -> String {
    let mut out = format!("## {}\n\n", step);
    match step {
        ReportStep::LoadsAndDimensions => loads_and_dimensions(&mut out, input, result),
        ReportStep::PileReactions => pile_reactions(&mut out, result),
        ReportStep::Flexure => flexure(&mut out, result),
        ReportStep::Shear => shear(&mut out, result),
    }

    out.push_str("\nReferences:\n");
    for equation in step.equations() {
        let meta = equation.metadata();
        out.push_str(&format!("- {}: {}\n", meta.name, meta.reference.citation()));
    }
    out
}

/// Render the full report: header, every step, and a warning summary.
pub fn render_report(input: &PileCapInput, result: &PileCapResult) -> String {
    let mut out = String::with_capacity(4_096);
    let title = if result.label.is_empty() { "Two-Pile Cap" } else { result.label.as_str() };
    out.push_str(&format!("# {}: Two-Pile Cap Design\n\n", title));
    out.push_str(&format!(
        "Concrete {} (fc' = {:.0} MPa, Ec = {:.0} MPa), steel {} (fy = {:.0} MPa)\n\n",
        result.materials.concrete_grade,
        result.materials.fc_mpa,
        result.materials.ec_mpa,
        result.materials.steel_grade,
        result.materials.fy_mpa,
    ));

    for step in ReportStep::ALL {
        out.push_str(&render_step(step, input, result));
        out.push('\n');
    }

    out.push_str("## Summary\n\n");
    if result.passes() {
        out.push_str("All checks OK.\n");
    } else {
        for warning in &result.warnings {
            out.push_str(&format!("- {}\n", warning.message()));
        }
    }
    out
}

fn loads_and_dimensions(out: &mut String, input: &PileCapInput, r: &PileCapResult) {
    let loads = &r.loads;
    let dims = &r.dims;
    out.push_str(&format!("Combination: U = {}\n", loads.combination));
    out.push_str(&format!(
        "Pu  = factored {:.2} kN (PD = {:.2}, PL = {:.2})\n",
        loads.pu_kn, input.dead_load_kn, input.live_load_kn
    ));
    out.push_str(&format!(
        "Mux = factored {:.2} kN·m (MxD = {:.2}, MxL = {:.2})\n",
        loads.mux_knm, input.dead_moment_knm, input.live_moment_knm
    ));
    out.push_str(&format!(
        "L = S + D + 2e = {:.3} + {:.3} + 2 × {:.3} = {:.3} m\n",
        dims.pile_spacing_m, dims.pile_diameter_m, dims.edge_distance_m, dims.length_m
    ));
    out.push_str(&format!(
        "B = D + 2e = {:.3} + 2 × {:.3} = {:.3} m\n",
        dims.pile_diameter_m, dims.edge_distance_m, dims.width_m
    ));
    out.push_str(&format!(
        "Wcap = L × B × h × γc = {:.3} × {:.3} × {:.3} × {:.1} = {:.2} kN\n",
        dims.length_m,
        dims.width_m,
        dims.thickness_m,
        r.materials.concrete_unit_weight_kn_m3,
        loads.cap_weight_kn
    ));
    out.push_str(&format!("Pu,group = {:.2} kN\n", loads.group_load_kn));
    out.push_str(&format!(
        "d = h − c − db = {:.3} − {:.3} − {:.3} = {:.3} m  {}\n",
        dims.thickness_m,
        dims.cover_m,
        mm_to_m(f64::from(input.main_bar_diameter_mm)),
        dims.effective_depth_m,
        verdict(dims.has_effective_depth())
    ));
}

fn pile_reactions(out: &mut String, r: &PileCapResult) {
    let p = &r.reactions;
    out.push_str(&format!(
        "R_max = Pu,group/2 + |Mux|/S = {:.2}/2 + {:.2}/{:.3} = {:.2} kN\n",
        r.loads.group_load_kn,
        r.loads.mux_knm.abs(),
        r.dims.pile_spacing_m,
        p.max_pile_reaction_kn
    ));
    out.push_str(&format!("Qu = {:.2} kN\n", p.ultimate_pile_capacity_kn));
    let relation = if p.passes() { ">" } else { "≤" };
    out.push_str(&format!(
        "SF = Qu / R_max = {:.2} {} 1  {}\n",
        p.safety_factor,
        relation,
        verdict(p.passes())
    ));
}

fn bar_line(out: &mut String, name: &str, bars: &BarLayout) {
    out.push_str(&format!(
        "{}: {}-DB{} @ {:.0} mm ({:?}), As = {:.2} cm² (required {:.2} cm²)  {}\n",
        name,
        bars.count,
        bars.diameter_mm,
        bars.spacing_mm,
        bars.selection,
        cm2(bars.area_provided_mm2),
        cm2(bars.area_required_mm2),
        verdict(bars.is_adequate())
    ));
    if let Some(weight) = bars.total_weight_kg {
        out.push_str(&format!(
            "  weight = {:.3} kg/m × {} × {:.3} m = {:.2} kg\n",
            bars.unit_weight_kg_m.unwrap_or_default(),
            bars.count,
            bars.bar_length_m,
            weight
        ));
    }
}

fn flexure(out: &mut String, r: &PileCapResult) {
    let f = &r.flexure;
    out.push_str(&format!(
        "x = S/2 − bc/2 = {:.3} m\nMu = R_max × x = {:.2} kN·m\n",
        f.critical_distance_m, f.critical_moment_knm
    ));
    out.push_str(&format!(
        "Rn = Mu / (φ B d²) = {} MPa (limit {:.3} MPa)  {}\n",
        optional(f.nominal_coefficient_mpa, 3),
        f.rn_limit_mpa,
        verdict(!f.is_overstressed())
    ));
    out.push_str(&format!("ρ = {}\n", optional(f.required_steel_ratio, 5)));
    out.push_str(&format!(
        "As,req = {} cm², As,min = {:.2} cm², As = {:.2} cm²\n",
        optional(f.required_steel_area_mm2.map(cm2), 2),
        cm2(f.min_steel_area_mm2),
        cm2(f.final_steel_area_mm2)
    ));
    bar_line(out, "Main bars", &r.main_bars);
    bar_line(out, "Secondary bars", &r.secondary_bars);
}

fn shear(out: &mut String, r: &PileCapResult) {
    let s = &r.shear;
    out.push_str(&format!(
        "One-way: x_v = {:.3} m, Vu = {:.2} kN, φVc = {:.2} kN  {}\n",
        s.one_way_critical_distance_m,
        s.one_way_demand_kn,
        s.one_way_capacity_kn,
        verdict(s.one_way_passes())
    ));
    out.push_str(&format!(
        "Punching: b0 = {:.3} m, β = {:.3}, vc = min({:.3}, {:.3}, {:.3}) = {:.3} MPa\n",
        s.punch_perimeter_m,
        s.column_aspect_ratio,
        s.punch_stress_limits_mpa[0],
        s.punch_stress_limits_mpa[1],
        s.punch_stress_limits_mpa[2],
        s.governing_stress_limit_mpa()
    ));
    out.push_str(&format!(
        "Punching: Vu = {:.2} kN, φVc = {:.2} kN  {}\n",
        s.punch_demand_kn,
        s.punch_capacity_kn,
        verdict(s.punching_passes())
    ));
}
