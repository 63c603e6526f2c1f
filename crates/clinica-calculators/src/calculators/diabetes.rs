use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::VitalsSnapshot;

use super::insufficient;
use crate::Calculator;
use crate::classification;
use crate::formulas::glucose::{estimated_average_glucose, estimated_average_glucose_mmol};
use crate::formulas::{positive, round_to};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiabetesInput {
    /// Glycated hemoglobin, %.
    pub hba1c: Option<f64>,
}

/// HbA1c to estimated average glucose.
pub struct Diabetes;

impl Calculator for Diabetes {
    type Input = DiabetesInput;

    fn key(&self) -> &'static str {
        "diabetes"
    }

    fn name(&self) -> &'static str {
        "Glucosa promedio estimada"
    }

    fn log_type(&self) -> LogType {
        LogType::Diabetes
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> DiabetesInput {
        DiabetesInput {
            hba1c: vitals.labs.hba1c,
        }
    }

    fn compute(&self, input: &DiabetesInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let Some(hba1c) = positive(input.hba1c) else {
            return insufficient("HbA1c");
        };

        let eag = round_to(estimated_average_glucose(hba1c), 1);
        let band = classification::ESTIMATED_AVERAGE_GLUCOSE.classify(eag);

        let mut result = CalculatorResult::default();
        result.set_number("eag_mg_dl", eag);
        result.set_number(
            "eag_mmol_l",
            round_to(estimated_average_glucose_mmol(hba1c), 1),
        );
        result.derived_text = Some(format!(
            "HbA1c {hba1c}% ≈ {eag:.1} mg/dL ({})",
            band.label
        ));
        result.classify("eag_mg_dl", band.clone());
        result.interpretation = Some(band);
        result
    }
}
