use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::{CalculatorResult, ClassificationBand, Severity};
use clinica_core::models::vitals::{Sex, VitalsSnapshot};

use crate::Calculator;
use crate::classification;
use crate::formulas::anthropometry::{
    MetabolicMeasurements, MetabolicSyndrome, bmi, healthy_weight_range, metabolic_syndrome,
    waist_height_ratio, waist_hip_ratio, waist_hip_table, weight_change_band,
    weight_change_percent,
};
use crate::formulas::{positive, round_to};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnthropometryInput {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub sex: Option<Sex>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub previous_weight_kg: Option<f64>,
    pub elapsed_months: Option<f64>,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub triglycerides: Option<f64>,
    pub hdl: Option<f64>,
    pub glucose: Option<f64>,
    #[serde(default)]
    pub on_blood_pressure_medication: bool,
    #[serde(default)]
    pub on_triglyceride_medication: bool,
    #[serde(default)]
    pub on_hdl_medication: bool,
    #[serde(default)]
    pub on_glucose_medication: bool,
}

/// BMI, body-fat distribution, weight change and metabolic syndrome panel.
/// Each sub-result is guarded by its own inputs.
pub struct Anthropometry;

impl Calculator for Anthropometry {
    type Input = AnthropometryInput;

    fn key(&self) -> &'static str {
        "anthropometry"
    }

    fn name(&self) -> &'static str {
        "Evaluación antropométrica"
    }

    fn log_type(&self) -> LogType {
        LogType::Anthropometry
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> AnthropometryInput {
        AnthropometryInput {
            weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
            sex: vitals.sex,
            waist_cm: vitals.waist_cm,
            hip_cm: vitals.hip_cm,
            systolic: vitals.blood_pressure.map(|bp| bp.systolic),
            diastolic: vitals.blood_pressure.map(|bp| bp.diastolic),
            triglycerides: vitals.labs.triglycerides,
            hdl: vitals.labs.hdl,
            glucose: vitals.labs.glucose,
            ..AnthropometryInput::default()
        }
    }

    fn compute(&self, input: &AnthropometryInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let weight = positive(input.weight_kg);
        let height = positive(input.height_cm);
        let waist = positive(input.waist_cm);
        let hip = positive(input.hip_cm);

        let mut result = CalculatorResult::default();
        let mut summary = Vec::new();

        if let (Some(weight), Some(height)) = (weight, height) {
            let value = round_to(bmi(weight, height), 1);
            let band = classification::BMI.classify(value);
            result.set_number("bmi", value);
            summary.push(format!("IMC {:.1} ({})", value, band.label));
            result.classify("bmi", band.clone());
            result.interpretation = Some(band);
        }

        if let Some(height) = height {
            let (min, max) = healthy_weight_range(height);
            result.set_number("healthy_weight_min_kg", round_to(min, 1));
            result.set_number("healthy_weight_max_kg", round_to(max, 1));
        }

        if let (Some(waist), Some(hip)) = (waist, hip) {
            let ratio = round_to(waist_hip_ratio(waist, hip), 2);
            result.set_number("waist_hip_ratio", ratio);
            if let Some(sex) = input.sex {
                result.classify("waist_hip_ratio", waist_hip_table(sex).classify(ratio));
            }
        }

        if let (Some(waist), Some(height)) = (waist, height) {
            let ratio = round_to(waist_height_ratio(waist, height), 2);
            result.set_number("waist_height_ratio", ratio);
            result.classify(
                "waist_height_ratio",
                classification::WAIST_HEIGHT.classify(ratio),
            );
        }

        if let (Some(current), Some(previous)) = (weight, positive(input.previous_weight_kg)) {
            let change = round_to(weight_change_percent(current, previous), 1);
            result.set_number("weight_change_percent", change);
            result.set_text("weight_change_display", format!("{change:+.1}%"));
            if let Some(months) = positive(input.elapsed_months) {
                let band = weight_change_band(change, months);
                if band.severity == Severity::Severe {
                    summary.push(band.label.clone());
                }
                result.classify("weight_change", band);
            }
        }

        let syndrome = metabolic_syndrome(&MetabolicMeasurements {
            sex: input.sex,
            waist_cm: waist,
            systolic: positive(input.systolic),
            diastolic: positive(input.diastolic),
            triglycerides: positive(input.triglycerides),
            hdl: positive(input.hdl),
            glucose: positive(input.glucose),
            on_blood_pressure_medication: input.on_blood_pressure_medication,
            on_triglyceride_medication: input.on_triglyceride_medication,
            on_hdl_medication: input.on_hdl_medication,
            on_glucose_medication: input.on_glucose_medication,
        });
        if let Some(line) = record_metabolic_syndrome(&mut result, &syndrome) {
            summary.push(line);
        }

        if !summary.is_empty() {
            result.derived_text = Some(summary.join("; "));
        }
        result
    }
}

/// Write the ATP III outcome into `result`. A diagnosis is only stated when
/// the evaluated criteria settle it either way.
fn record_metabolic_syndrome(
    result: &mut CalculatorResult,
    syndrome: &MetabolicSyndrome,
) -> Option<String> {
    if syndrome.evaluated_count() == 0 {
        return None;
    }

    for outcome in syndrome.outcomes.iter().filter(|o| o.evaluated) {
        let status = if outcome.met { "cumple" } else { "no cumple" };
        result.set_text(&format!("metabolic_{}", outcome.criterion.key()), status);
    }
    let met = syndrome.met_count();
    let unevaluated = syndrome.outcomes.len() - syndrome.evaluated_count();
    result.set_number("metabolic_criteria_met", met as f64);
    result.set_number(
        "metabolic_criteria_evaluated",
        syndrome.evaluated_count() as f64,
    );

    let band = if syndrome.is_positive() {
        ClassificationBand {
            label: "Síndrome metabólico".to_string(),
            severity: Severity::Risk,
        }
    } else if met + unevaluated < 3 {
        ClassificationBand {
            label: "Sin síndrome metabólico".to_string(),
            severity: Severity::Normal,
        }
    } else {
        return None;
    };

    let line = format!("{} ({met}/5 criterios)", band.label);
    result.classify("metabolic_syndrome", band);
    Some(line)
}
