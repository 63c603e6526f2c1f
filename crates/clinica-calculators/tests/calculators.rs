use clinica_calculators::Calculator;
use clinica_calculators::calculators::anthropometry::{Anthropometry, AnthropometryInput};
use clinica_calculators::calculators::diabetes::{Diabetes, DiabetesInput};
use clinica_calculators::calculators::energy::Energy;
use clinica_calculators::calculators::geriatric::Geriatric;
use clinica_calculators::calculators::lactation::{Lactation, LactationInput};
use clinica_calculators::calculators::nutrition_support::NutritionSupport;
use clinica_calculators::calculators::pediatrics::{Pediatrics, PediatricsInput};
use clinica_calculators::calculators::pregnancy::{Pregnancy, PregnancyInput};
use clinica_calculators::calculators::renal::{Renal, StageSelection};
use clinica_calculators::calculators::screening::Must;
use clinica_calculators::formulas::energy::BmrFormula;
use clinica_calculators::formulas::renal::ProteinStage;
use clinica_core::models::result::Severity;
use clinica_core::models::vitals::{LabPanel, Sex, VitalsSnapshot};
use jiff::civil::date;

fn adult_female() -> VitalsSnapshot {
    VitalsSnapshot {
        weight_kg: Some(70.0),
        height_cm: Some(170.0),
        age_years: Some(30.0),
        sex: Some(Sex::Female),
        ..VitalsSnapshot::default()
    }
}

#[test]
fn energy_scenario_mifflin_sedentary() {
    let vitals = adult_female();
    let input = Energy.seed(&vitals);
    assert_eq!(input.formula, BmrFormula::Mifflin);

    let result = Energy.compute(&input, &vitals);
    assert_eq!(result.number("tmb_kcal"), Some(1452.0));
    assert_eq!(result.number("get_kcal"), Some(1742.0));
    assert_eq!(result.text("formula"), Some("Mifflin-St Jeor"));
}

#[test]
fn energy_withholds_everything_without_age() {
    let vitals = VitalsSnapshot {
        age_years: None,
        ..adult_female()
    };
    let result = Energy.compute(&Energy.seed(&vitals), &vitals);
    assert!(result.is_empty());
    assert!(result.derived_text.unwrap().starts_with("Datos insuficientes"));
}

#[test]
fn energy_recompute_is_identical() {
    let vitals = adult_female();
    let input = Energy.seed(&vitals);
    assert_eq!(Energy.compute(&input, &vitals), Energy.compute(&input, &vitals));
}

#[test]
fn energy_treats_negative_weight_as_missing() {
    let vitals = VitalsSnapshot {
        weight_kg: Some(-70.0),
        ..adult_female()
    };
    let result = Energy.compute(&Energy.seed(&vitals), &vitals);
    assert!(result.number("tmb_kcal").is_none());
}

#[test]
fn anthropometry_sub_results_are_independent() {
    let vitals = VitalsSnapshot {
        height_cm: None,
        waist_cm: Some(80.0),
        hip_cm: Some(100.0),
        ..adult_female()
    };
    let result = Anthropometry.compute(&Anthropometry.seed(&vitals), &vitals);
    assert!(result.number("bmi").is_none());
    assert!(result.number("waist_height_ratio").is_none());
    assert_eq!(result.number("waist_hip_ratio"), Some(0.8));
    assert_eq!(
        result.band("waist_hip_ratio").map(|b| b.severity),
        Some(Severity::Normal)
    );
}

#[test]
fn anthropometry_bmi_band_matches_reported_bmi() {
    let vitals = VitalsSnapshot {
        weight_kg: Some(72.13),
        ..adult_female()
    };
    let result = Anthropometry.compute(&Anthropometry.seed(&vitals), &vitals);
    assert_eq!(result.number("bmi"), Some(25.0));
    assert_eq!(result.band("bmi").map(|b| b.label.as_str()), Some("Sobrepeso"));
    assert!(result.derived_text.unwrap().starts_with("IMC 25.0 (Sobrepeso)"));
}

#[test]
fn anthropometry_waist_height_band_matches_reported_ratio() {
    let vitals = VitalsSnapshot {
        waist_cm: Some(84.2),
        ..adult_female()
    };
    let result = Anthropometry.compute(&Anthropometry.seed(&vitals), &vitals);
    assert_eq!(result.number("waist_height_ratio"), Some(0.5));
    assert_eq!(
        result.band("waist_height_ratio").map(|b| b.severity),
        Some(Severity::Risk)
    );
}

#[test]
fn anthropometry_shows_gain_with_sign_but_no_severity() {
    let vitals = adult_female();
    let input = AnthropometryInput {
        previous_weight_kg: Some(63.0),
        elapsed_months: Some(1.0),
        ..Anthropometry.seed(&vitals)
    };
    let result = Anthropometry.compute(&input, &vitals);
    assert_eq!(result.text("weight_change_display"), Some("+11.1%"));
    let band = result.band("weight_change").unwrap();
    assert_eq!(band.severity, Severity::Normal);
}

#[test]
fn anthropometry_flags_severe_loss() {
    let vitals = adult_female();
    let input = AnthropometryInput {
        previous_weight_kg: Some(80.0),
        elapsed_months: Some(3.0),
        ..Anthropometry.seed(&vitals)
    };
    let result = Anthropometry.compute(&input, &vitals);
    assert_eq!(result.number("weight_change_percent"), Some(-12.5));
    assert_eq!(
        result.band("weight_change").map(|b| b.label.as_str()),
        Some("Pérdida de peso severa")
    );
}

#[test]
fn metabolic_syndrome_from_seeded_vitals() {
    let vitals = VitalsSnapshot {
        sex: Some(Sex::Male),
        waist_cm: Some(110.0),
        blood_pressure: Some(clinica_core::models::vitals::BloodPressure {
            systolic: 135.0,
            diastolic: 80.0,
        }),
        labs: LabPanel {
            triglycerides: Some(200.0),
            ..LabPanel::default()
        },
        ..adult_female()
    };
    let result = Anthropometry.compute(&Anthropometry.seed(&vitals), &vitals);
    assert_eq!(result.number("metabolic_criteria_met"), Some(3.0));
    assert_eq!(result.text("metabolic_waist"), Some("cumple"));
    assert_eq!(
        result.band("metabolic_syndrome").map(|b| b.label.as_str()),
        Some("Síndrome metabólico")
    );
}

#[test]
fn metabolic_syndrome_undetermined_without_enough_criteria() {
    let vitals = VitalsSnapshot {
        waist_cm: Some(95.0),
        ..adult_female()
    };
    let result = Anthropometry.compute(&Anthropometry.seed(&vitals), &vitals);
    assert_eq!(result.number("metabolic_criteria_met"), Some(1.0));
    assert!(result.band("metabolic_syndrome").is_none());
}

#[test]
fn renal_scenario_is_g2() {
    let vitals = VitalsSnapshot {
        age_years: Some(50.0),
        labs: LabPanel {
            creatinine: Some(0.9),
            ..LabPanel::default()
        },
        ..adult_female()
    };
    let result = Renal.compute(&Renal.seed(&vitals), &vitals);
    assert_eq!(result.number("egfr"), Some(78.0));
    assert_eq!(result.text("ckd_stage"), Some("G2"));
    assert_eq!(result.text("stage_mode"), Some("auto"));
    assert_eq!(result.number("protein_min_g_day"), Some(56.0));
    assert_eq!(result.number("protein_max_g_day"), Some(70.0));
}

#[test]
fn renal_stage_matches_reported_egfr() {
    let vitals = VitalsSnapshot {
        age_years: Some(50.0),
        labs: LabPanel {
            creatinine: Some(0.798),
            ..LabPanel::default()
        },
        ..adult_female()
    };
    let result = Renal.compute(&Renal.seed(&vitals), &vitals);
    assert_eq!(result.number("egfr"), Some(90.0));
    assert_eq!(result.text("ckd_stage"), Some("G1"));
    assert_eq!(
        result.interpretation.map(|b| b.label),
        Some("G1 Normal o alta".to_string())
    );
}

#[test]
fn renal_pinned_stage_survives_egfr_changes() {
    let vitals = VitalsSnapshot {
        labs: LabPanel {
            creatinine: Some(0.9),
            ..LabPanel::default()
        },
        ..adult_female()
    };
    let mut input = Renal.seed(&vitals);
    input.pin_stage(ProteinStage::Hemodialysis);

    input.creatinine_mg_dl = Some(6.0);
    let result = Renal.compute(&input, &vitals);
    assert_eq!(result.text("protein_stage"), Some("Hemodiálisis"));
    assert_eq!(result.text("stage_mode"), Some("pinned"));

    input.follow_egfr();
    let result = Renal.compute(&input, &vitals);
    assert_eq!(result.text("protein_stage"), Some("ERC G4-G5 sin diálisis"));
}

#[test]
fn stage_selection_json_shape() {
    let json = serde_json::to_value(StageSelection::Pinned(ProteinStage::Hemodialysis)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"mode": "pinned", "stage": "hemodialysis"})
    );
    let auto: StageSelection = serde_json::from_value(serde_json::json!({"mode": "auto_following"})).unwrap();
    assert_eq!(auto, StageSelection::AutoFollowing);
}

#[test]
fn diabetes_eag_bands() {
    let vitals = VitalsSnapshot::default();
    let result = Diabetes.compute(&DiabetesInput { hba1c: Some(7.0) }, &vitals);
    assert_eq!(result.number("eag_mg_dl"), Some(154.2));
    assert_eq!(result.number("eag_mmol_l"), Some(8.5));
    assert_eq!(
        result.interpretation.map(|b| b.label),
        Some("Control regular".to_string())
    );

    let edge = Diabetes.compute(&DiabetesInput { hba1c: Some(8.002) }, &vitals);
    assert_eq!(edge.number("eag_mg_dl"), Some(183.0));
    assert_eq!(
        edge.interpretation.map(|b| b.label),
        Some("Control deficiente".to_string())
    );

    let missing = Diabetes.compute(&DiabetesInput { hba1c: Some(0.0) }, &vitals);
    assert!(missing.is_empty());
}

#[test]
fn must_scenario_is_high_risk() {
    let vitals = VitalsSnapshot {
        weight_kg: Some(49.13),
        height_cm: Some(170.0),
        ..VitalsSnapshot::default()
    };
    let mut input = Must.seed(&vitals);
    input.acutely_ill = true;

    let result = Must.compute(&input, &vitals);
    assert_eq!(result.number("bmi_score"), Some(2.0));
    assert_eq!(result.number("weight_loss_score"), Some(0.0));
    assert_eq!(result.text("weight_change_display"), Some("sin datos"));
    assert_eq!(result.number("acute_disease_score"), Some(2.0));
    assert_eq!(result.number("total"), Some(4.0));
    let band = result.interpretation.unwrap();
    assert_eq!(band.label, "Alto Riesgo");
    assert_eq!(band.severity, Severity::Severe);
}

#[test]
fn must_weight_gain_scores_zero() {
    let vitals = adult_female();
    let mut input = Must.seed(&vitals);
    input.previous_weight_kg = Some(60.0);

    let result = Must.compute(&input, &vitals);
    assert_eq!(result.text("weight_change_display"), Some("+16.7%"));
    assert_eq!(result.number("weight_loss_score"), Some(0.0));
    assert_eq!(result.number("total"), Some(0.0));
    assert_eq!(result.interpretation.unwrap().label, "Bajo Riesgo");
}

#[test]
fn must_total_requires_bmi() {
    let vitals = VitalsSnapshot::default();
    let mut input = Must.seed(&vitals);
    input.acutely_ill = true;
    let result = Must.compute(&input, &vitals);
    assert!(result.number("total").is_none());
    assert_eq!(result.number("acute_disease_score"), Some(2.0));
}

#[test]
fn pregnancy_scenario_insufficient_gain() {
    let vitals = VitalsSnapshot::default();
    let input = PregnancyInput {
        pregestational_weight_kg: Some(58.88),
        current_weight_kg: Some(61.88),
        height_cm: Some(160.0),
        age_years: Some(30.0),
        gestational_week: Some(20.0),
    };
    let result = Pregnancy.compute(&input, &vitals);
    assert_eq!(result.number("pregestational_bmi"), Some(23.0));
    assert_eq!(result.text("iom_category"), Some("Peso normal"));
    assert_eq!(result.number("expected_gain_kg"), Some(4.44));
    assert_eq!(
        result.interpretation.as_ref().map(|b| b.label.clone()),
        Some("Ganancia Insuficiente".to_string())
    );
    assert_eq!(result.number("trimester"), Some(2.0));
    assert_eq!(result.number("energy_kcal"), Some(1873.0));
}

#[test]
fn lactation_addition_by_postpartum_month() {
    let vitals = VitalsSnapshot::default();
    let early = LactationInput {
        weight_kg: Some(70.0),
        height_cm: Some(170.0),
        age_years: Some(30.0),
        months_postpartum: Some(0.0),
    };
    let late = LactationInput {
        months_postpartum: Some(9.0),
        ..early.clone()
    };
    assert_eq!(
        Lactation.compute(&early, &vitals).number("lactation_addition_kcal"),
        Some(500.0)
    );
    assert_eq!(
        Lactation.compute(&late, &vitals).number("energy_kcal"),
        Some(2142.0)
    );
}

#[test]
fn geriatric_sarcopenia_screen() {
    let vitals = VitalsSnapshot {
        age_years: Some(75.0),
        calf_cm: Some(29.0),
        ..adult_female()
    };
    let result = Geriatric.compute(&Geriatric.seed(&vitals), &vitals);
    assert_eq!(result.number("protein_min_g_day"), Some(70.0));
    assert_eq!(result.number("protein_max_g_day"), Some(84.0));
    assert_eq!(
        result.interpretation.map(|b| b.label),
        Some("Riesgo de sarcopenia".to_string())
    );
}

#[test]
fn infusion_follows_last_edited_field() {
    let vitals = adult_female();
    let mut input = NutritionSupport.seed(&vitals);
    input.volume_ml = Some(1500.0);
    input.kcal_per_ml = Some(1.0);

    let result = NutritionSupport.compute(&input, &vitals);
    assert_eq!(result.number("rate_ml_h"), Some(62.5));
    assert_eq!(result.number("kcal_per_kg"), Some(21.4));

    input.set_rate(100.0);
    let result = NutritionSupport.compute(&input, &vitals);
    assert_eq!(result.number("duration_h"), Some(15.0));

    input.set_duration(10.0);
    let result = NutritionSupport.compute(&input, &vitals);
    assert_eq!(result.number("rate_ml_h"), Some(150.0));
}

#[test]
fn pediatrics_rejects_birth_after_measurement() {
    let vitals = VitalsSnapshot::default();
    let input = PediatricsInput {
        sex: Some(Sex::Male),
        birth_date: Some(date(2024, 6, 1)),
        measured_on: Some(date(2024, 1, 1)),
        weight_kg: Some(8.0),
        height_cm: Some(70.0),
    };
    let result = Pediatrics::default().compute(&input, &vitals);
    assert!(result.is_empty());
    assert_eq!(
        result.derived_text.as_deref(),
        Some("La fecha de nacimiento es posterior a la fecha de medición")
    );
}

#[test]
fn pediatrics_median_child_is_normal() {
    let vitals = VitalsSnapshot::default();
    let input = PediatricsInput {
        sex: Some(Sex::Male),
        birth_date: Some(date(2022, 1, 10)),
        measured_on: Some(date(2024, 1, 10)),
        weight_kg: Some(12.1515),
        height_cm: Some(87.1161),
    };
    let result = Pediatrics::default().compute(&input, &vitals);
    assert_eq!(result.number("age_months"), Some(24.0));
    assert_eq!(result.number("weight_for_age_percentile"), Some(50.0));
    assert_eq!(result.number("height_for_age_percentile"), Some(50.0));
    assert_eq!(
        result.band("weight_for_age_percentile").map(|b| b.label.as_str()),
        Some("Normal")
    );
    assert!(result.number("weight_for_height_percentile").is_some());
}

#[test]
fn pediatrics_outside_coverage_is_absent() {
    let vitals = VitalsSnapshot::default();
    let input = PediatricsInput {
        sex: Some(Sex::Female),
        birth_date: Some(date(2015, 1, 1)),
        measured_on: Some(date(2024, 1, 1)),
        weight_kg: Some(28.0),
        height_cm: Some(132.0),
    };
    let result = Pediatrics::default().compute(&input, &vitals);
    assert_eq!(result.number("age_months"), Some(108.0));
    assert!(result.number("weight_for_age_percentile").is_none());
    assert!(result.number("weight_for_height_percentile").is_none());
    assert!(result.interpretation.is_none());
}

#[test]
fn describe_summarizes_result() {
    let vitals = adult_female();
    let result = Energy.compute(&Energy.seed(&vitals), &vitals);
    assert_eq!(
        Energy.describe(&result),
        "Requerimiento energético: TMB 1452 kcal/día, GET 1742 kcal/día (Mifflin-St Jeor)"
    );
}
