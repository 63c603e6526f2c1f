use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::VitalsSnapshot;

use super::insufficient;
use crate::Calculator;
use crate::formulas::infusion::{InfusionField, derive_plan};
use crate::formulas::{positive, round_to};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InfusionInput {
    pub volume_ml: Option<f64>,
    pub rate_ml_h: Option<f64>,
    pub duration_h: Option<f64>,
    pub last_edited: InfusionField,
    /// Energy density of the formula, kcal/ml.
    pub kcal_per_ml: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl InfusionInput {
    pub fn set_rate(&mut self, rate_ml_h: f64) {
        self.rate_ml_h = Some(rate_ml_h);
        self.last_edited = InfusionField::Rate;
    }

    pub fn set_duration(&mut self, duration_h: f64) {
        self.duration_h = Some(duration_h);
        self.last_edited = InfusionField::Duration;
    }
}

/// Enteral/parenteral infusion planning.
pub struct NutritionSupport;

impl Calculator for NutritionSupport {
    type Input = InfusionInput;

    fn key(&self) -> &'static str {
        "nutrition_support"
    }

    fn name(&self) -> &'static str {
        "Soporte nutricional"
    }

    fn log_type(&self) -> LogType {
        LogType::NutritionalSupport
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> InfusionInput {
        InfusionInput {
            volume_ml: None,
            rate_ml_h: None,
            duration_h: Some(24.0),
            last_edited: InfusionField::Duration,
            kcal_per_ml: None,
            weight_kg: vitals.weight_kg,
        }
    }

    fn compute(&self, input: &InfusionInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let Some(volume) = positive(input.volume_ml) else {
            return insufficient("volumen");
        };
        let Some(plan) = derive_plan(
            volume,
            positive(input.rate_ml_h),
            positive(input.duration_h),
            input.last_edited,
        ) else {
            return insufficient("velocidad o duración de la infusión");
        };

        let mut result = CalculatorResult::default();
        result.set_number("volume_ml", plan.volume_ml);
        result.set_number("rate_ml_h", round_to(plan.rate_ml_h, 1));
        result.set_number("duration_h", round_to(plan.duration_h, 1));
        let mut summary = format!(
            "{:.0} ml a {:.1} ml/h durante {:.1} h",
            plan.volume_ml, plan.rate_ml_h, plan.duration_h
        );

        if let Some(density) = positive(input.kcal_per_ml) {
            let kcal = plan.volume_ml * density;
            result.set_number("total_kcal", kcal.round());
            summary.push_str(&format!(", {:.0} kcal", kcal.round()));
            if let Some(weight) = positive(input.weight_kg) {
                result.set_number("kcal_per_kg", round_to(kcal / weight, 1));
                summary.push_str(&format!(" ({:.1} kcal/kg)", kcal / weight));
            }
        }

        result.derived_text = Some(summary);
        result
    }
}
