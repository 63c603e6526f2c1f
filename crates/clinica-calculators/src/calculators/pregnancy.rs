use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::{Sex, VitalsSnapshot};

use super::insufficient;
use crate::Calculator;
use crate::classification;
use crate::formulas::anthropometry::bmi;
use crate::formulas::energy::mifflin_st_jeor;
use crate::formulas::populations::{IomCategory, Trimester, expected_gain, pregnancy_energy};
use crate::formulas::{positive, round_to};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PregnancyInput {
    pub pregestational_weight_kg: Option<f64>,
    pub current_weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub gestational_week: Option<f64>,
}

/// IOM 2009 gestational weight gain and pregnancy energy needs.
pub struct Pregnancy;

impl Calculator for Pregnancy {
    type Input = PregnancyInput;

    fn key(&self) -> &'static str {
        "pregnancy"
    }

    fn name(&self) -> &'static str {
        "Embarazo"
    }

    fn log_type(&self) -> LogType {
        LogType::SpecialPopulation
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> PregnancyInput {
        PregnancyInput {
            current_weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
            age_years: vitals.age_years,
            ..PregnancyInput::default()
        }
    }

    fn compute(&self, input: &PregnancyInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let (Some(pre_weight), Some(height)) = (
            positive(input.pregestational_weight_kg),
            positive(input.height_cm),
        ) else {
            return insufficient("peso pregestacional y talla");
        };

        let pre_bmi = round_to(bmi(pre_weight, height), 1);
        let category = IomCategory::from_bmi(pre_bmi);
        let (gain_min, gain_max) = category.total_gain_range();

        let mut result = CalculatorResult::default();
        let mut summary = vec![format!("IMC pregestacional {pre_bmi:.1} ({})", category.label())];
        result.set_number("pregestational_bmi", pre_bmi);
        result.set_text("iom_category", category.label());
        result.set_number("total_gain_min_kg", gain_min);
        result.set_number("total_gain_max_kg", gain_max);
        result.set_number("weekly_rate_kg", category.weekly_rate());

        let Some(week) = positive(input.gestational_week) else {
            result.derived_text = Some(summary.join("; "));
            return result;
        };
        let trimester = Trimester::from_week(week);
        let expected = expected_gain(week, category.weekly_rate());
        result.set_number("trimester", f64::from(trimester.number()));
        result.set_number("expected_gain_kg", round_to(expected, 2));

        if let Some(current) = positive(input.current_weight_kg) {
            let actual = current - pre_weight;
            let band = classification::GESTATIONAL_GAIN.classify(actual / expected);
            result.set_number("actual_gain_kg", round_to(actual, 2));
            summary.push(format!(
                "semana {week}: ganancia {actual:.1} kg de {expected:.1} kg esperados ({})",
                band.label
            ));
            result.classify("gestational_gain", band.clone());
            result.interpretation = Some(band);
        }

        if let Some(age) = positive(input.age_years) {
            let bmr = mifflin_st_jeor(Sex::Female, pre_weight, height, age);
            if bmr > 0.0 {
                let energy = pregnancy_energy(bmr, trimester);
                result.set_number("tmb_kcal", bmr.round());
                result.set_number("energy_kcal", energy.round());
                summary.push(format!(
                    "energía {:.0} kcal/día (trimestre {})",
                    energy.round(),
                    trimester.number()
                ));
            }
        }

        result.derived_text = Some(summary.join("; "));
        result
    }
}
