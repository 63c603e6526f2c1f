//! Registry of every calculator, for callers that pick one by key at runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use ts_rs::TS;

use clinica_core::models::calculation::{CalculationPayload, LogType};
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::VitalsSnapshot;

use crate::Calculator;
use crate::calculators::anthropometry::Anthropometry;
use crate::calculators::diabetes::Diabetes;
use crate::calculators::energy::Energy;
use crate::calculators::geriatric::Geriatric;
use crate::calculators::lactation::Lactation;
use crate::calculators::nutrition_support::NutritionSupport;
use crate::calculators::pediatrics::Pediatrics;
use crate::calculators::pregnancy::Pregnancy;
use crate::calculators::renal::Renal;
use crate::calculators::screening::Must;
use crate::error::CalculatorError;
use crate::log::CommitRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    Energy,
    Anthropometry,
    Renal,
    Diabetes,
    Must,
    Pediatrics,
    Pregnancy,
    Lactation,
    Geriatric,
    NutritionSupport,
}

/// Listing entry for a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorInfo {
    pub key: String,
    pub name: String,
    pub log_type: LogType,
}

/// One evaluated calculation: the effective inputs and what they produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub calculator_key: String,
    pub log_type: LogType,
    pub inputs: Value,
    pub result: CalculatorResult,
    pub description: String,
}

impl Evaluation {
    pub fn into_commit_request(self) -> CommitRequest {
        CommitRequest {
            calculator_key: self.calculator_key,
            log_type: self.log_type,
            description: self.description,
            payload: CalculationPayload {
                inputs: self.inputs,
                result: self.result,
            },
        }
    }
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 10] = [
        CalculatorKind::Energy,
        CalculatorKind::Anthropometry,
        CalculatorKind::Renal,
        CalculatorKind::Diabetes,
        CalculatorKind::Must,
        CalculatorKind::Pediatrics,
        CalculatorKind::Pregnancy,
        CalculatorKind::Lactation,
        CalculatorKind::Geriatric,
        CalculatorKind::NutritionSupport,
    ];

    /// Look up a calculator by key.
    pub fn from_key(key: &str) -> Result<Self, CalculatorError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| CalculatorError::UnknownCalculator(key.to_string()))
    }

    pub fn key(&self) -> &'static str {
        match self {
            CalculatorKind::Energy => Energy.key(),
            CalculatorKind::Anthropometry => Anthropometry.key(),
            CalculatorKind::Renal => Renal.key(),
            CalculatorKind::Diabetes => Diabetes.key(),
            CalculatorKind::Must => Must.key(),
            CalculatorKind::Pediatrics => Pediatrics::default().key(),
            CalculatorKind::Pregnancy => Pregnancy.key(),
            CalculatorKind::Lactation => Lactation.key(),
            CalculatorKind::Geriatric => Geriatric.key(),
            CalculatorKind::NutritionSupport => NutritionSupport.key(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CalculatorKind::Energy => Energy.name(),
            CalculatorKind::Anthropometry => Anthropometry.name(),
            CalculatorKind::Renal => Renal.name(),
            CalculatorKind::Diabetes => Diabetes.name(),
            CalculatorKind::Must => Must.name(),
            CalculatorKind::Pediatrics => Pediatrics::default().name(),
            CalculatorKind::Pregnancy => Pregnancy.name(),
            CalculatorKind::Lactation => Lactation.name(),
            CalculatorKind::Geriatric => Geriatric.name(),
            CalculatorKind::NutritionSupport => NutritionSupport.name(),
        }
    }

    pub fn log_type(&self) -> LogType {
        match self {
            CalculatorKind::Energy => Energy.log_type(),
            CalculatorKind::Anthropometry => Anthropometry.log_type(),
            CalculatorKind::Renal => Renal.log_type(),
            CalculatorKind::Diabetes => Diabetes.log_type(),
            CalculatorKind::Must => Must.log_type(),
            CalculatorKind::Pediatrics => Pediatrics::default().log_type(),
            CalculatorKind::Pregnancy => Pregnancy.log_type(),
            CalculatorKind::Lactation => Lactation.log_type(),
            CalculatorKind::Geriatric => Geriatric.log_type(),
            CalculatorKind::NutritionSupport => NutritionSupport.log_type(),
        }
    }

    pub fn info(&self) -> CalculatorInfo {
        CalculatorInfo {
            key: self.key().to_string(),
            name: self.name().to_string(),
            log_type: self.log_type(),
        }
    }

    /// Seeded default input for `vitals`, as JSON.
    pub fn defaults(&self, vitals: &VitalsSnapshot) -> Result<Value, CalculatorError> {
        match self {
            CalculatorKind::Energy => seeded(&Energy, vitals),
            CalculatorKind::Anthropometry => seeded(&Anthropometry, vitals),
            CalculatorKind::Renal => seeded(&Renal, vitals),
            CalculatorKind::Diabetes => seeded(&Diabetes, vitals),
            CalculatorKind::Must => seeded(&Must, vitals),
            CalculatorKind::Pediatrics => seeded(&Pediatrics::default(), vitals),
            CalculatorKind::Pregnancy => seeded(&Pregnancy, vitals),
            CalculatorKind::Lactation => seeded(&Lactation, vitals),
            CalculatorKind::Geriatric => seeded(&Geriatric, vitals),
            CalculatorKind::NutritionSupport => seeded(&NutritionSupport, vitals),
        }
    }

    /// Evaluate against `vitals`. Fields present in `overrides` replace the
    /// seeded defaults; absent fields keep them.
    pub fn evaluate(
        &self,
        vitals: &VitalsSnapshot,
        overrides: Option<&Value>,
    ) -> Result<Evaluation, CalculatorError> {
        match self {
            CalculatorKind::Energy => evaluate_with(&Energy, vitals, overrides),
            CalculatorKind::Anthropometry => evaluate_with(&Anthropometry, vitals, overrides),
            CalculatorKind::Renal => evaluate_with(&Renal, vitals, overrides),
            CalculatorKind::Diabetes => evaluate_with(&Diabetes, vitals, overrides),
            CalculatorKind::Must => evaluate_with(&Must, vitals, overrides),
            CalculatorKind::Pediatrics => {
                evaluate_with(&Pediatrics::default(), vitals, overrides)
            }
            CalculatorKind::Pregnancy => evaluate_with(&Pregnancy, vitals, overrides),
            CalculatorKind::Lactation => evaluate_with(&Lactation, vitals, overrides),
            CalculatorKind::Geriatric => evaluate_with(&Geriatric, vitals, overrides),
            CalculatorKind::NutritionSupport => {
                evaluate_with(&NutritionSupport, vitals, overrides)
            }
        }
    }
}

/// Every registered calculator.
pub fn all_calculators() -> Vec<CalculatorInfo> {
    CalculatorKind::ALL.iter().map(CalculatorKind::info).collect()
}

fn seeded<C: Calculator>(calculator: &C, vitals: &VitalsSnapshot) -> Result<Value, CalculatorError> {
    Ok(serde_json::to_value(calculator.seed(vitals))?)
}

fn evaluate_with<C: Calculator>(
    calculator: &C,
    vitals: &VitalsSnapshot,
    overrides: Option<&Value>,
) -> Result<Evaluation, CalculatorError> {
    let input: C::Input = match overrides {
        None | Some(Value::Null) => calculator.seed(vitals),
        Some(Value::Object(fields)) => {
            let mut merged = serde_json::to_value(calculator.seed(vitals))?;
            if let Value::Object(base) = &mut merged {
                for (name, value) in fields {
                    base.insert(name.clone(), value.clone());
                }
            }
            serde_json::from_value(merged).map_err(|e| CalculatorError::InvalidInput {
                calculator_key: calculator.key().to_string(),
                message: e.to_string(),
            })?
        }
        Some(_) => {
            return Err(CalculatorError::InvalidInput {
                calculator_key: calculator.key().to_string(),
                message: "input must be a JSON object".to_string(),
            });
        }
    };

    debug!(calculator = calculator.key(), "evaluating");
    let result = calculator.compute(&input, vitals);
    Ok(Evaluation {
        calculator_key: calculator.key().to_string(),
        log_type: calculator.log_type(),
        inputs: serde_json::to_value(&input)?,
        description: calculator.describe(&result),
        result,
    })
}
