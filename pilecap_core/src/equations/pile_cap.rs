//! # Two-Pile Cap Formulas
//!
//! Closed-form expressions used by the calculation stages. Every function is
//! pure and works in consistent SI units: lengths in meters, forces in kN,
//! moments in kN·m, strengths in MPa, steel areas in mm².
//!
//! ## Plan Layout
//!
//! ```text
//!   ┌───────────────────────────────────┐  ─┬─
//!   │   ╭───╮      ┌─────┐      ╭───╮   │   │
//!   │   │ P │      │ col │      │ P │   │   B
//!   │   ╰───╯      └─────┘      ╰───╯   │   │
//!   └───────────────────────────────────┘  ─┴─
//!   |<e>|<-------- S -------->|     |<e>|
//!   |<--------------- L --------------->|
//! ```
//!
//! The cap behaves as a deep beam spanning between the two piles; the
//! critical flexural section is at the column face.
//!
//! ## References
//!
//! - ACI 318-99 Chapters 9, 10, 11 and 15 (strength design, SI units)
//! - TIS 24-2548 (deformed bars), TIS 166-2549 (ready-mixed concrete)

use crate::units::{m_to_mm, KiloPascals, MegaPascals, SqMeters, SqMillimeters};

/// Equivalent stress block factor 0.85 applied to fc'
pub const STRESS_BLOCK_FACTOR: f64 = 0.85;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Cap length along the pile line
///
/// # Formula
/// L = S + D + 2e
///
/// # Example
/// ```rust
/// use pilecap_core::equations::pile_cap::cap_length;
///
/// assert!((cap_length(0.9, 0.3, 0.15) - 1.5).abs() < 1e-12);
/// ```
#[inline]
pub fn cap_length(spacing_m: f64, pile_diameter_m: f64, edge_m: f64) -> f64 {
    spacing_m + pile_diameter_m + 2.0 * edge_m
}

/// Cap width across the pile line
///
/// # Formula
/// B = D + 2e
#[inline]
pub fn cap_width(pile_diameter_m: f64, edge_m: f64) -> f64 {
    pile_diameter_m + 2.0 * edge_m
}

/// Self-weight of the cap (kN)
///
/// # Formula
/// W = L × B × h × γc
#[inline]
pub fn cap_self_weight(length_m: f64, width_m: f64, thickness_m: f64, unit_weight_kn_m3: f64) -> f64 {
    length_m * width_m * thickness_m * unit_weight_kn_m3
}

/// Effective depth of the main bars: thickness less cover less one bar diameter
///
/// # Formula
/// d = h − c − d_b
///
/// May be zero or negative for thin caps; callers decide what that means.
#[inline]
pub fn effective_depth(thickness_m: f64, cover_m: f64, bar_diameter_m: f64) -> f64 {
    thickness_m - cover_m - bar_diameter_m
}

// =============================================================================
// PILE REACTIONS
// =============================================================================

/// Largest reaction of the two piles (kN)
///
/// The axial load splits equally; the moment forms a couple across the
/// pile spacing and always adds to the more heavily loaded pile.
///
/// # Formula
/// R_max = P/2 + |M|/S
///
/// # Example
/// ```rust
/// use pilecap_core::equations::pile_cap::max_pile_reaction;
///
/// assert!((max_pile_reaction(200.0, 45.0, 0.9) - 150.0).abs() < 1e-9);
/// assert!((max_pile_reaction(200.0, -45.0, 0.9) - 150.0).abs() < 1e-9);
/// ```
#[inline]
pub fn max_pile_reaction(group_load_kn: f64, moment_knm: f64, spacing_m: f64) -> f64 {
    group_load_kn / 2.0 + moment_knm.abs() / spacing_m
}

/// Estimated ultimate pile capacity from the allowable (service) capacity
///
/// # Formula
/// Qu = k × Qa
#[inline]
pub fn ultimate_pile_capacity(allowable_kn: f64, factor: f64) -> f64 {
    factor * allowable_kn
}

/// Safety factor of the pile against the factored reaction
///
/// Returns `+∞` when the reaction is zero.
#[inline]
pub fn pile_safety_factor(ultimate_capacity_kn: f64, reaction_kn: f64) -> f64 {
    if reaction_kn == 0.0 {
        f64::INFINITY
    } else {
        ultimate_capacity_kn / reaction_kn
    }
}

// =============================================================================
// FLEXURE
// =============================================================================

/// Lever arm from pile centre to the column face (m)
///
/// # Formula
/// x = S/2 − b_c/2
#[inline]
pub fn critical_section_distance(spacing_m: f64, column_width_m: f64) -> f64 {
    spacing_m / 2.0 - column_width_m / 2.0
}

/// Factored moment at the column face (kN·m)
///
/// # Formula
/// Mu = R_max × x
#[inline]
pub fn critical_moment(reaction_kn: f64, distance_m: f64) -> f64 {
    reaction_kn * distance_m
}

/// Nominal moment coefficient Rn (MPa)
///
/// # Formula
/// Rn = Mu / (φ × b × d²)
///
/// Mu in kN·m with b, d in meters gives kN/m²; the result is divided by
/// 1000 to return MPa.
///
/// # Example
/// ```rust
/// use pilecap_core::equations::pile_cap::nominal_moment_coefficient;
///
/// let rn = nominal_moment_coefficient(17.043, 0.9, 0.6, 0.514);
/// assert!((rn - 0.119_46).abs() < 1e-5);
/// ```
#[inline]
pub fn nominal_moment_coefficient(moment_knm: f64, phi: f64, width_m: f64, depth_m: f64) -> f64 {
    let stress = KiloPascals(moment_knm / (phi * width_m * depth_m * depth_m));
    MegaPascals::from(stress).value()
}

/// Term under the square root of the steel ratio expression
///
/// # Formula
/// Δ = 1 − 2Rn / (0.85 fc')
///
/// Negative when the section cannot develop Rn with any amount of tension
/// steel.
#[inline]
pub fn steel_ratio_discriminant(rn_mpa: f64, fc_mpa: f64) -> f64 {
    1.0 - 2.0 * rn_mpa / (STRESS_BLOCK_FACTOR * fc_mpa)
}

/// Required tension steel ratio ρ
///
/// # Formula
/// ρ = (0.85 fc' / fy) × (1 − √(1 − 2Rn / (0.85 fc')))
///
/// Returns `None` when the discriminant is negative (overstressed section).
///
/// # Example
/// ```rust
/// use pilecap_core::equations::pile_cap::required_steel_ratio;
///
/// let rho = required_steel_ratio(0.119_46, 25.0, 390.0).unwrap();
/// assert!((rho - 0.000_307_2).abs() < 1e-7);
///
/// assert!(required_steel_ratio(24.5, 25.0, 390.0).is_none());
/// ```
pub fn required_steel_ratio(rn_mpa: f64, fc_mpa: f64, fy_mpa: f64) -> Option<f64> {
    let discriminant = steel_ratio_discriminant(rn_mpa, fc_mpa);
    if discriminant < 0.0 {
        return None;
    }
    Some(STRESS_BLOCK_FACTOR * fc_mpa / fy_mpa * (1.0 - discriminant.sqrt()))
}

/// Minimum flexural steel ratio
///
/// # Formula
/// ρ_min = max(√fc' / (4 fy), 1.4 / fy)
#[inline]
pub fn min_steel_ratio(fc_mpa: f64, fy_mpa: f64) -> f64 {
    (0.25 * fc_mpa.sqrt() / fy_mpa).max(1.4 / fy_mpa)
}

/// Steel area for a ratio over a b × d section (mm²)
///
/// # Formula
/// As = ρ × b × d
#[inline]
pub fn steel_area_mm2(ratio: f64, width_m: f64, depth_m: f64) -> f64 {
    SqMillimeters::from(SqMeters(ratio * width_m * depth_m)).value()
}

// =============================================================================
// REINFORCEMENT DETAILING
// =============================================================================

/// Number of bars needed to provide an area
///
/// # Formula
/// n = ⌈As / A_bar⌉
///
/// Zero or negative demand needs no bars.
///
/// # Example
/// ```rust
/// use pilecap_core::equations::pile_cap::bar_count;
///
/// assert_eq!(bar_count(1107.1, 201.1), 6);
/// assert_eq!(bar_count(0.0, 201.1), 0);
/// ```
pub fn bar_count(required_mm2: f64, bar_area_mm2: f64) -> u32 {
    if required_mm2 <= 0.0 || bar_area_mm2 <= 0.0 {
        return 0;
    }
    (required_mm2 / bar_area_mm2).ceil() as u32
}

/// Centre-to-centre bar spacing across a width (mm)
///
/// # Formula
/// s = (W − 2c − d_b) / (n − 1)
///
/// Zero when fewer than two bars are placed, or when cover and bar
/// diameter leave no clear width.
///
/// # Example
/// ```rust
/// use pilecap_core::equations::pile_cap::bar_spacing_mm;
///
/// assert!((bar_spacing_mm(0.6, 0.07, 0.016, 6) - 88.8).abs() < 1e-9);
/// assert_eq!(bar_spacing_mm(0.6, 0.07, 0.016, 1), 0.0);
/// ```
pub fn bar_spacing_mm(width_m: f64, cover_m: f64, bar_diameter_m: f64, count: u32) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    let clear_width_m = (width_m - 2.0 * cover_m - bar_diameter_m).max(0.0);
    m_to_mm(clear_width_m / f64::from(count - 1))
}

/// Area of secondary (distribution) steel
///
/// # Formula
/// As,sec = max(As,min, f × As,main)
#[inline]
pub fn secondary_steel_area_mm2(min_area_mm2: f64, main_provided_mm2: f64, fraction: f64) -> f64 {
    min_area_mm2.max(fraction * main_provided_mm2)
}

/// Total weight of a bar layer (kg)
///
/// # Formula
/// W = w × n × ℓ
#[inline]
pub fn bar_weight_kg(unit_weight_kg_m: f64, count: u32, length_m: f64) -> f64 {
    unit_weight_kg_m * f64::from(count) * length_m
}

// =============================================================================
// SHEAR
// =============================================================================

/// Distance from pile centre to the one-way shear section at d from the column face
///
/// # Formula
/// x_v = S/2 − b_c/2 − d
#[inline]
pub fn one_way_critical_distance(spacing_m: f64, column_width_m: f64, depth_m: f64) -> f64 {
    critical_section_distance(spacing_m, column_width_m) - depth_m
}

/// Design one-way shear strength (kN)
///
/// # Formula
/// φVc = φ × (1/6)√fc' × b × d
#[inline]
pub fn one_way_shear_capacity(phi: f64, fc_mpa: f64, width_m: f64, depth_m: f64) -> f64 {
    let stress = KiloPascals::from(MegaPascals(phi * fc_mpa.sqrt() / 6.0));
    stress.value() * width_m * depth_m
}

/// Critical perimeter for punching shear at d/2 from the column faces (m)
///
/// # Formula
/// b0 = 2(b_c + d) + 2(h_c + d)
#[inline]
pub fn punching_perimeter(column_width_m: f64, column_depth_m: f64, depth_m: f64) -> f64 {
    2.0 * (column_width_m + depth_m) + 2.0 * (column_depth_m + depth_m)
}

/// Ratio of the long to the short column side
#[inline]
pub fn column_aspect_ratio(column_width_m: f64, column_depth_m: f64) -> f64 {
    column_width_m.max(column_depth_m) / column_width_m.min(column_depth_m)
}

/// The three two-way shear stress limits (MPa)
///
/// # Formula
/// - v1 = (1/6)(1 + 2/β)√fc'
/// - v2 = (1/12)(2 + 40d/b0)√fc'
/// - v3 = (1/3)√fc'
///
/// The 40 in v2 is the interior-column value of αs.
pub fn punching_stress_limits(fc_mpa: f64, beta: f64, depth_m: f64, perimeter_m: f64) -> [f64; 3] {
    let root_fc = fc_mpa.sqrt();
    [
        (1.0 + 2.0 / beta) * root_fc / 6.0,
        (2.0 + 40.0 * depth_m / perimeter_m) * root_fc / 12.0,
        root_fc / 3.0,
    ]
}

/// Design punching shear strength (kN)
///
/// # Formula
/// φVc = φ × v_c × b0 × d, with v_c the smallest stress limit
///
/// # Example
/// ```rust
/// use pilecap_core::equations::pile_cap::{punching_shear_capacity, punching_stress_limits};
///
/// let limits = punching_stress_limits(25.0, 1.375, 0.514, 3.956);
/// let capacity = punching_shear_capacity(0.75, &limits, 3.956, 0.514);
/// assert!((capacity - 2541.7).abs() < 0.1);
/// ```
pub fn punching_shear_capacity(phi: f64, limits_mpa: &[f64; 3], perimeter_m: f64, depth_m: f64) -> f64 {
    let governing = limits_mpa.iter().copied().fold(f64::INFINITY, f64::min);
    let stress = KiloPascals::from(MegaPascals(phi * governing));
    stress.value() * perimeter_m * depth_m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cap_geometry() {
        assert_relative_eq!(cap_length(0.9, 0.3, 0.15), 1.5, epsilon = 1e-12);
        assert_relative_eq!(cap_width(0.3, 0.15), 0.6, epsilon = 1e-12);
        assert_relative_eq!(cap_self_weight(1.5, 0.6, 0.6, 24.0), 12.96, epsilon = 1e-9);
        assert_relative_eq!(effective_depth(0.6, 0.07, 0.016), 0.514, epsilon = 1e-12);
    }

    #[test]
    fn test_pile_reaction_moment_couple() {
        let r = max_pile_reaction(136.344, 0.0, 0.9);
        assert_relative_eq!(r, 68.172, epsilon = 1e-9);
        assert_relative_eq!(pile_safety_factor(680.0, r), 9.974_77, epsilon = 1e-4);
        assert!(pile_safety_factor(680.0, 0.0).is_infinite());
    }

    #[test]
    fn test_min_steel_ratio_governing_term() {
        // 1.4/fy governs below fc' = 31.36 MPa
        assert_relative_eq!(min_steel_ratio(25.0, 390.0), 1.4 / 390.0);
        assert_relative_eq!(min_steel_ratio(50.0, 390.0), 0.25 * 50f64.sqrt() / 390.0);
    }

    #[test]
    fn test_steel_ratio_at_zero_moment() {
        assert_eq!(required_steel_ratio(0.0, 25.0, 390.0), Some(0.0));
    }

    #[test]
    fn test_discriminant_boundary() {
        // Rn = 0.425 fc' makes the discriminant exactly zero
        let rn = 0.425 * 25.0;
        assert_relative_eq!(steel_ratio_discriminant(rn, 25.0), 0.0, epsilon = 1e-12);
        assert!(required_steel_ratio(rn * 0.999, 25.0, 390.0).is_some());
        assert!(required_steel_ratio(rn * 1.001, 25.0, 390.0).is_none());
    }

    #[test]
    fn test_bar_count_exact_multiple() {
        assert_eq!(bar_count(400.0, 200.0), 2);
        assert_eq!(bar_count(400.1, 200.0), 3);
    }

    #[test]
    fn test_bar_spacing_clamped_without_clear_width() {
        // 300 mm cover on each side of a 600 mm cap
        assert_eq!(bar_spacing_mm(0.6, 0.3, 0.016, 4), 0.0);
        assert_relative_eq!(bar_spacing_mm(0.6, 0.07, 0.016, 3), 222.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unit_conversions_in_formulas() {
        // kN/m² to MPa
        assert_relative_eq!(nominal_moment_coefficient(900.0, 1.0, 1.0, 1.0), 0.9, epsilon = 1e-12);
        // m² to mm²
        assert_relative_eq!(steel_area_mm2(0.01, 0.6, 0.5), 3000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shear_capacities() {
        assert_relative_eq!(one_way_shear_capacity(0.75, 25.0, 0.6, 0.514), 192.75, epsilon = 1e-9);
        assert_relative_eq!(punching_perimeter(0.4, 0.55, 0.514), 3.956, epsilon = 1e-12);
        assert_relative_eq!(column_aspect_ratio(0.55, 0.4), 1.375, epsilon = 1e-12);
        assert_relative_eq!(column_aspect_ratio(0.4, 0.55), 1.375, epsilon = 1e-12);
    }

    #[test]
    fn test_punching_limits_square_column() {
        // β = 1: v1 = 0.5√fc' exceeds v3
        let limits = punching_stress_limits(25.0, 1.0, 0.5, 4.0);
        assert_relative_eq!(limits[0], 2.5, epsilon = 1e-12);
        assert_relative_eq!(limits[2], 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bar_weight() {
        assert_relative_eq!(bar_weight_kg(1.578, 6, 1.5), 14.202, epsilon = 1e-9);
    }
}
