use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::{Sex, VitalsSnapshot};

use crate::Calculator;
use crate::classification;
use crate::formulas::energy::{ActivityLevel, mifflin_st_jeor};
use crate::formulas::populations::GERIATRIC_PROTEIN_G_PER_KG;
use crate::formulas::{positive, round_to};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeriatricInput {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<Sex>,
    pub activity: ActivityLevel,
    pub calf_cm: Option<f64>,
}

/// Older-adult energy and protein targets with a sarcopenia screen.
pub struct Geriatric;

impl Calculator for Geriatric {
    type Input = GeriatricInput;

    fn key(&self) -> &'static str {
        "geriatric"
    }

    fn name(&self) -> &'static str {
        "Adulto mayor"
    }

    fn log_type(&self) -> LogType {
        LogType::SpecialPopulation
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> GeriatricInput {
        GeriatricInput {
            weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
            age_years: vitals.age_years,
            sex: vitals.sex,
            activity: ActivityLevel::Sedentary,
            calf_cm: vitals.calf_cm,
        }
    }

    fn compute(&self, input: &GeriatricInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let weight = positive(input.weight_kg);
        let mut result = CalculatorResult::default();
        let mut summary = Vec::new();

        if let (Some(weight), Some(height), Some(age), Some(sex)) = (
            weight,
            positive(input.height_cm),
            positive(input.age_years),
            input.sex,
        ) {
            let bmr = mifflin_st_jeor(sex, weight, height, age);
            if bmr > 0.0 {
                let energy = bmr * input.activity.factor();
                result.set_number("tmb_kcal", bmr.round());
                result.set_number("energy_kcal", energy.round());
                summary.push(format!("energía {:.0} kcal/día", energy.round()));
            }
        }

        if let Some(weight) = weight {
            let (min, max) = GERIATRIC_PROTEIN_G_PER_KG;
            result.set_number("protein_min_g_day", round_to(min * weight, 1));
            result.set_number("protein_max_g_day", round_to(max * weight, 1));
            summary.push(format!(
                "proteína {:.0}-{:.0} g/día",
                min * weight,
                max * weight
            ));
        }

        if let Some(calf) = positive(input.calf_cm) {
            let band = classification::CALF_CIRCUMFERENCE.classify(calf);
            result.set_number("calf_cm", calf);
            summary.push(format!("pantorrilla {calf} cm ({})", band.label));
            result.classify("calf_cm", band.clone());
            result.interpretation = Some(band);
        }

        if !summary.is_empty() {
            result.derived_text = Some(summary.join("; "));
        }
        result
    }
}
