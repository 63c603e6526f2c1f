use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::{Sex, VitalsSnapshot};

use super::insufficient;
use crate::Calculator;
use crate::formulas::energy::mifflin_st_jeor;
use crate::formulas::populations::{lactation_addition, lactation_energy};
use crate::formulas::positive;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LactationInput {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub months_postpartum: Option<f64>,
}

/// Energy needs during exclusive breastfeeding.
pub struct Lactation;

impl Calculator for Lactation {
    type Input = LactationInput;

    fn key(&self) -> &'static str {
        "lactation"
    }

    fn name(&self) -> &'static str {
        "Lactancia"
    }

    fn log_type(&self) -> LogType {
        LogType::SpecialPopulation
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> LactationInput {
        LactationInput {
            weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
            age_years: vitals.age_years,
            months_postpartum: None,
        }
    }

    fn compute(&self, input: &LactationInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let (Some(weight), Some(height), Some(age)) = (
            positive(input.weight_kg),
            positive(input.height_cm),
            positive(input.age_years),
        ) else {
            return insufficient("peso, talla y edad");
        };

        let bmr = mifflin_st_jeor(Sex::Female, weight, height, age);
        if bmr <= 0.0 {
            return insufficient("un peso válido para la ecuación");
        }

        let mut result = CalculatorResult::default();
        result.set_number("tmb_kcal", bmr.round());

        // Postpartum age of the baby may be zero in the first weeks.
        let months = input
            .months_postpartum
            .filter(|m| m.is_finite() && *m >= 0.0);
        let Some(months) = months else {
            result.derived_text = Some(format!("TMB {:.0} kcal/día", bmr.round()));
            return result;
        };

        let energy = lactation_energy(bmr, months);
        result.set_number("lactation_addition_kcal", lactation_addition(months));
        result.set_number("energy_kcal", energy.round());
        result.derived_text = Some(format!(
            "TMB {:.0} kcal/día, total {:.0} kcal/día (+{:.0} por lactancia)",
            bmr.round(),
            energy.round(),
            lactation_addition(months)
        ));
        result
    }
}
