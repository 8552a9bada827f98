//! End-to-end design scenarios against the built-in Thai TIS tables.

use approx::assert_relative_eq;
use pilecap_core::calculations::{compute_design_with_settings, BarSelection};
use pilecap_core::{calculate, DesignSettings, DesignWarning, PileCapInput, PileCapResult, Standards};

fn design(input: &PileCapInput) -> PileCapResult {
    calculate(input).unwrap()
}

fn codes(result: &PileCapResult) -> Vec<&'static str> {
    result.warnings.iter().map(|w| w.code()).collect()
}

#[test]
fn test_reference_design() {
    let result = design(&PileCapInput::reference());

    assert_relative_eq!(result.loads.pu_kn, 118.2, epsilon = 1e-9);
    assert_relative_eq!(result.loads.cap_weight_kn, 12.96, epsilon = 1e-9);
    assert_relative_eq!(result.loads.group_load_kn, 136.344, epsilon = 1e-9);

    assert_relative_eq!(result.dims.length_m, 1.5, epsilon = 1e-12);
    assert_relative_eq!(result.dims.width_m, 0.6, epsilon = 1e-12);
    assert_relative_eq!(result.dims.effective_depth_m, 0.514, epsilon = 1e-12);

    assert_relative_eq!(result.reactions.max_pile_reaction_kn, 68.172, epsilon = 1e-9);
    assert_relative_eq!(result.reactions.ultimate_pile_capacity_kn, 680.0, epsilon = 1e-9);
    assert_relative_eq!(result.reactions.safety_factor, 9.97477, epsilon = 1e-4);

    assert_relative_eq!(result.flexure.critical_distance_m, 0.25, epsilon = 1e-12);
    assert_relative_eq!(result.flexure.critical_moment_knm, 17.043, epsilon = 1e-9);
    assert_relative_eq!(result.flexure.nominal_coefficient_mpa.unwrap(), 0.11946, epsilon = 1e-4);
    assert_relative_eq!(result.flexure.min_steel_area_mm2, 1107.08, epsilon = 0.01);
    assert_relative_eq!(result.flexure.final_steel_area_mm2, result.flexure.min_steel_area_mm2);

    assert_eq!(result.main_bars.count, 6);
    assert_eq!(result.main_bars.diameter_mm, 16);
    assert_eq!(result.main_bars.selection, BarSelection::Automatic);
    assert_relative_eq!(result.main_bars.spacing_mm, 88.8, epsilon = 1e-9);
    assert_relative_eq!(result.main_bars.area_provided_mm2, 1206.6, epsilon = 1e-9);

    assert_eq!(result.secondary_bars.count, 10);
    assert_relative_eq!(result.secondary_bars.spacing_mm, 149.7778, epsilon = 1e-3);

    assert_eq!(result.shear.one_way_demand_kn, 0.0);
    assert_relative_eq!(result.shear.one_way_capacity_kn, 192.75, epsilon = 1e-9);
    assert_relative_eq!(result.shear.punch_perimeter_m, 3.956, epsilon = 1e-9);
    assert_relative_eq!(result.shear.column_aspect_ratio, 1.375, epsilon = 1e-12);
    assert_relative_eq!(result.shear.governing_stress_limit_mpa(), 1.6667, epsilon = 1e-4);
    assert_relative_eq!(result.shear.punch_capacity_kn, 2541.73, epsilon = 0.01);

    assert!(result.warnings.is_empty());
    assert!(result.passes());
    assert!(result.total_steel_weight_kg().is_some());
}

#[test]
fn test_bar_count_never_decreases_with_steel_area() {
    // Below Rn = 0.425 fc' the required area grows with the load
    let mut previous_area = 0.0;
    let mut previous_count = 0;
    for step in 0..=160 {
        let input = PileCapInput {
            dead_load_kn: 50.0 * f64::from(step),
            ..PileCapInput::reference()
        };
        let result = design(&input);
        assert!(!result.flexure.is_overstressed());
        assert_eq!(result.main_bars.diameter_mm, 16);

        let area = result.flexure.final_steel_area_mm2;
        let count = result.main_bars.count;
        assert!(area >= previous_area, "As_final fell at PD = {}", input.dead_load_kn);
        assert!(count >= previous_count, "bar count fell at PD = {}", input.dead_load_kn);
        previous_area = area;
        previous_count = count;
    }
    assert!(previous_count > 6);
}

#[test]
fn test_bar_count_monotone_in_required_area() {
    let mut previous = 0;
    for i in 0..=50_000 {
        let required = f64::from(i) * 0.37;
        let count = pilecap_core::equations::bar_count(required, 201.1);
        assert!(count >= previous, "count fell at {} mm²", required);
        previous = count;
    }
}

#[test]
fn test_spacing_fits_within_clear_width() {
    let result = design(&PileCapInput::reference());
    let clear_mm = (result.dims.width_m - 2.0 * result.dims.cover_m - 0.016) * 1000.0;
    assert!(result.main_bars.spacing_mm <= clear_mm + 1e-9);
    assert!(result.main_bars.spacing_mm > 0.0);

    let clear_mm = (result.dims.length_m - 2.0 * result.dims.cover_m - 0.012) * 1000.0;
    assert!(result.secondary_bars.spacing_mm <= clear_mm + 1e-9);
}

#[test]
fn test_factored_load_is_linear() {
    let base = PileCapInput::reference();
    let scaled = PileCapInput {
        dead_load_kn: base.dead_load_kn * 3.0,
        live_load_kn: base.live_load_kn * 3.0,
        ..base.clone()
    };

    let a = design(&base);
    let b = design(&scaled);
    assert_relative_eq!(b.loads.pu_kn, 3.0 * a.loads.pu_kn, max_relative = 1e-12);
    // Self-weight does not scale with the column load
    assert_relative_eq!(b.loads.cap_weight_kn, a.loads.cap_weight_kn);
}

#[test]
fn test_moment_sign_does_not_matter() {
    let positive = PileCapInput {
        dead_moment_knm: 20.0,
        ..PileCapInput::reference()
    };
    let negative = PileCapInput {
        dead_moment_knm: -20.0,
        ..PileCapInput::reference()
    };

    let a = design(&positive);
    let b = design(&negative);
    assert_relative_eq!(a.reactions.max_pile_reaction_kn, b.reactions.max_pile_reaction_kn);
    assert_relative_eq!(a.reactions.max_pile_reaction_kn, 68.172 + 28.0 / 0.9, epsilon = 1e-9);
    assert_eq!(a.main_bars.count, b.main_bars.count);
}

#[test]
fn test_moment_increases_reaction() {
    let base = design(&PileCapInput::reference());
    let with_moment = design(&PileCapInput {
        live_moment_knm: 10.0,
        ..PileCapInput::reference()
    });
    assert!(with_moment.reactions.max_pile_reaction_kn > base.reactions.max_pile_reaction_kn);
    assert!(with_moment.reactions.safety_factor < base.reactions.safety_factor);
}

#[test]
fn test_overstressed_section_is_reported() {
    let input = PileCapInput {
        dead_load_kn: 20_000.0,
        ..PileCapInput::reference()
    };
    let result = design(&input);

    assert!(result.flexure.is_overstressed());
    assert!(result.flexure.nominal_coefficient_mpa.unwrap() > result.flexure.rn_limit_mpa);
    assert!(result.flexure.required_steel_ratio.is_none());
    assert!(result.flexure.required_steel_area_mm2.is_none());

    let codes = codes(&result);
    assert!(codes.contains(&"OVERSTRESSED_SECTION"));
    assert!(codes.contains(&"PILE_CAPACITY_EXCEEDED"));
    assert!(codes.contains(&"PUNCHING_SHEAR_FAILURE"));
    assert!(!result.passes());
}

#[test]
fn test_non_positive_effective_depth() {
    let input = PileCapInput {
        cap_thickness_mm: 80.0,
        ..PileCapInput::reference()
    };
    let result = design(&input);

    assert!(result.dims.effective_depth_m <= 0.0);
    assert!(result.flexure.nominal_coefficient_mpa.is_none());
    assert_eq!(result.shear.one_way_capacity_kn, 0.0);
    assert_eq!(result.shear.punch_capacity_kn, 0.0);
    assert!(codes(&result).contains(&"NON_POSITIVE_EFFECTIVE_DEPTH"));
    assert!(!result.passes());

    // Every value stays finite so the result serializes
    assert!(serde_json::to_string(&result).is_ok());
}

#[test]
fn test_manual_main_bars() {
    let input = PileCapInput {
        main_bar_count: Some(3),
        ..PileCapInput::reference()
    };
    let result = design(&input);

    assert_eq!(result.main_bars.count, 3);
    assert_eq!(result.main_bars.selection, BarSelection::Manual);
    assert_relative_eq!(result.main_bars.area_provided_mm2, 603.3, epsilon = 1e-9);
    assert_relative_eq!(result.main_bars.spacing_mm, 222.0, epsilon = 1e-9);
    assert!(!result.main_bars.is_adequate());
    assert!(codes(&result).contains(&"MANUAL_BARS_BELOW_REQUIRED"));
}

#[test]
fn test_wide_spacing_loads_one_way_section() {
    let input = PileCapInput {
        pile_spacing_mm: 2000.0,
        ..PileCapInput::reference()
    };
    let result = design(&input);

    assert_relative_eq!(result.shear.one_way_critical_distance_m, 0.286, epsilon = 1e-9);
    assert_relative_eq!(result.shear.one_way_demand_kn, result.reactions.max_pile_reaction_kn);
    assert!(result.shear.one_way_passes());
}

#[test]
fn test_unknown_codes_are_errors() {
    let concrete = PileCapInput {
        concrete_grade: "C99".to_string(),
        ..PileCapInput::reference()
    };
    assert_eq!(calculate(&concrete).unwrap_err().error_code(), "UNKNOWN_GRADE");

    let steel = PileCapInput {
        steel_grade: "SD99".to_string(),
        ..PileCapInput::reference()
    };
    assert_eq!(calculate(&steel).unwrap_err().error_code(), "UNKNOWN_GRADE");

    let bar = PileCapInput {
        main_bar_diameter_mm: 18,
        ..PileCapInput::reference()
    };
    let strict = DesignSettings {
        allow_computed_bar_area: false,
        ..DesignSettings::default()
    };
    let tis = Standards::thai_tis();
    let err = compute_design_with_settings(&bar, &tis.steel, &tis.concrete, &tis.bars, &strict)
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_BAR");
}

#[test]
fn test_untabulated_bar_computed_once() {
    let input = PileCapInput {
        main_bar_diameter_mm: 18,
        secondary_bar_diameter_mm: 18,
        ..PileCapInput::reference()
    };
    let result = design(&input);

    let computed: Vec<&DesignWarning> = result
        .warnings
        .iter()
        .filter(|w| w.code() == "COMPUTED_BAR_AREA")
        .collect();
    assert_eq!(computed.len(), 1);
    assert_relative_eq!(result.main_bars.bar_area_mm2, 254.469, epsilon = 1e-3);
    assert!(result.total_steel_weight_kg().is_none());
}

#[test]
fn test_invalid_input_rejected() {
    let input = PileCapInput {
        pile_capacity_kn: 0.0,
        ..PileCapInput::reference()
    };
    assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

    let input = PileCapInput {
        dead_load_kn: f64::NAN,
        ..PileCapInput::reference()
    };
    assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
}

#[test]
fn test_design_is_deterministic() {
    let input = PileCapInput {
        dead_moment_knm: 12.5,
        ..PileCapInput::reference()
    };
    let a = serde_json::to_string(&design(&input)).unwrap();
    let b = serde_json::to_string(&design(&input)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_result_json_roundtrip() {
    let result = design(&PileCapInput::reference());
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: PileCapResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.main_bars.count, result.main_bars.count);
    assert_eq!(parsed.warnings, result.warnings);
    assert_relative_eq!(parsed.shear.punch_capacity_kn, result.shear.punch_capacity_kn);
}

#[test]
fn test_input_from_minimal_json() {
    let json = r#"{
        "dead_load_kn": 48.0,
        "live_load_kn": 30.0,
        "pile_capacity_kn": 400.0,
        "pile_diameter_mm": 300.0,
        "pile_spacing_mm": 900.0,
        "column_width_mm": 400.0,
        "column_depth_mm": 550.0,
        "cap_thickness_mm": 600.0,
        "cover_mm": 70.0,
        "concrete_grade": "C25/30",
        "steel_grade": "SD40",
        "main_bar_diameter_mm": 16,
        "secondary_bar_diameter_mm": 12
    }"#;
    let input: PileCapInput = serde_json::from_str(json).unwrap();
    let result = design(&input);
    assert_eq!(result.main_bars.count, 6);
    assert_relative_eq!(result.loads.mux_knm, 0.0);
}

#[test]
fn test_custom_standards_from_toml() {
    let source = r#"
[steel]
grades = [{ code = "SD40", fy_mpa = 390.0 }]

[concrete]
grades = [{ code = "C25/30", fc_mpa = 25.0 }]

[bars]
sizes = [
    { diameter_mm = 12, area_mm2 = 113.1, unit_weight_kg_m = 0.888 },
    { diameter_mm = 16, area_mm2 = 201.1, unit_weight_kg_m = 1.578 },
]
"#;
    let custom = Standards::from_toml_str(source).unwrap();
    let result = compute_design_with_settings(
        &PileCapInput::reference(),
        &custom.steel,
        &custom.concrete,
        &custom.bars,
        &DesignSettings::default(),
    )
    .unwrap();
    let builtin = design(&PileCapInput::reference());
    assert_eq!(result.main_bars.count, builtin.main_bars.count);
    assert_relative_eq!(result.shear.punch_capacity_kn, builtin.shear.punch_capacity_kn);
}
