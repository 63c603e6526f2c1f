use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::{Sex, VitalsSnapshot};

use super::insufficient;
use crate::Calculator;
use crate::formulas::energy::{ActivityLevel, BmrFormula, StressLevel, total_energy_expenditure};
use crate::formulas::positive;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnergyInput {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<Sex>,
    pub formula: BmrFormula,
    pub activity: ActivityLevel,
    pub stress: StressLevel,
}

/// Basal and total energy requirements.
pub struct Energy;

impl Calculator for Energy {
    type Input = EnergyInput;

    fn key(&self) -> &'static str {
        "energy"
    }

    fn name(&self) -> &'static str {
        "Requerimiento energético"
    }

    fn log_type(&self) -> LogType {
        LogType::EnergyRequirements
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> EnergyInput {
        EnergyInput {
            weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
            age_years: vitals.age_years,
            sex: vitals.sex,
            formula: BmrFormula::Mifflin,
            activity: ActivityLevel::Sedentary,
            stress: StressLevel::None,
        }
    }

    fn compute(&self, input: &EnergyInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let (Some(weight), Some(height), Some(age), Some(sex)) = (
            positive(input.weight_kg),
            positive(input.height_cm),
            positive(input.age_years),
            input.sex,
        ) else {
            return insufficient("peso, talla, edad y sexo");
        };

        let bmr = input.formula.bmr(sex, weight, height, age);
        if bmr <= 0.0 {
            return insufficient("un peso válido para la ecuación seleccionada");
        }
        let total = total_energy_expenditure(bmr, input.activity, input.stress);

        let mut result = CalculatorResult::default();
        result.set_text("formula", input.formula.name());
        result.set_number("tmb_kcal", bmr.round());
        result.set_number("get_kcal", total.round());
        result.set_number("activity_factor", input.activity.factor());
        result.set_number("stress_factor", input.stress.factor());
        result.derived_text = Some(format!(
            "TMB {:.0} kcal/día, GET {:.0} kcal/día ({})",
            bmr.round(),
            total.round(),
            input.formula.name()
        ));
        result
    }
}
