use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::VitalsSnapshot;

use crate::Calculator;
use crate::classification;
use crate::formulas::anthropometry::{bmi, weight_change_percent};
use crate::formulas::screening::{MustRisk, acute_disease_score, bmi_score, weight_loss_score};
use crate::formulas::{positive, round_to};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MustInput {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    /// Weight at the start of the declared period.
    pub previous_weight_kg: Option<f64>,
    /// Length of the period the loss is assessed over (usually 3-6 months).
    pub period_months: Option<f64>,
    #[serde(default)]
    pub acutely_ill: bool,
}

/// Malnutrition Universal Screening Tool.
pub struct Must;

impl Calculator for Must {
    type Input = MustInput;

    fn key(&self) -> &'static str {
        "must"
    }

    fn name(&self) -> &'static str {
        "Tamizaje nutricional MUST"
    }

    fn log_type(&self) -> LogType {
        LogType::NutritionalScreening
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> MustInput {
        MustInput {
            weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
            previous_weight_kg: None,
            period_months: Some(6.0),
            acutely_ill: false,
        }
    }

    fn compute(&self, input: &MustInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let weight = positive(input.weight_kg);
        let mut result = CalculatorResult::default();

        let bmi_component = match (weight, positive(input.height_cm)) {
            (Some(weight), Some(height)) => {
                let value = round_to(bmi(weight, height), 1);
                let score = bmi_score(value);
                result.set_number("bmi", value);
                result.set_number("bmi_score", f64::from(score));
                Some(score)
            }
            _ => None,
        };

        let loss_score = match (weight, positive(input.previous_weight_kg)) {
            (Some(current), Some(previous)) => {
                let change = round_to(weight_change_percent(current, previous), 1);
                result.set_number("weight_change_percent", change);
                result.set_text("weight_change_display", format!("{change:+.1}%"));
                weight_loss_score(change)
            }
            _ => {
                result.set_text("weight_change_display", "sin datos");
                0
            }
        };
        result.set_number("weight_loss_score", f64::from(loss_score));
        result.set_opt_number("period_months", positive(input.period_months));

        let acute_score = acute_disease_score(input.acutely_ill);
        result.set_number("acute_disease_score", f64::from(acute_score));

        let Some(bmi_component) = bmi_component else {
            result.derived_text =
                Some("Datos insuficientes: se requiere peso y talla para el puntaje total".into());
            return result;
        };

        let total = bmi_component + loss_score + acute_score;
        let risk = MustRisk::from_total(total);
        let band = classification::MUST_RISK.classify(f64::from(total));

        result.set_number("total", f64::from(total));
        result.set_text("action", risk.action());
        result.derived_text = Some(format!("Puntaje {total} ({}): {}", band.label, risk.action()));
        result.classify("total", band.clone());
        result.interpretation = Some(band);
        result
    }
}
