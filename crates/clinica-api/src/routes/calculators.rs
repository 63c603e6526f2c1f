use axum::Json;
use axum::extract::Path;
use serde::Deserialize;
use serde_json::Value;

use clinica_calculators::{CalculatorInfo, CalculatorKind, Evaluation, all_calculators};
use clinica_core::models::vitals::VitalsSnapshot;

use crate::error::ApiError;

/// Body for evaluating or saving a calculation.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub vitals: VitalsSnapshot,
    /// Fields to override on the seeded input.
    #[serde(default)]
    pub input: Option<Value>,
}

pub async fn list_calculators() -> Json<Vec<CalculatorInfo>> {
    Json(all_calculators())
}

pub async fn get_calculator(Path(key): Path<String>) -> Result<Json<CalculatorInfo>, ApiError> {
    let kind = CalculatorKind::from_key(&key)?;
    Ok(Json(kind.info()))
}

pub async fn calculator_defaults(
    Path(key): Path<String>,
    Json(vitals): Json<VitalsSnapshot>,
) -> Result<Json<Value>, ApiError> {
    let kind = CalculatorKind::from_key(&key)?;
    Ok(Json(kind.defaults(&vitals)?))
}

pub async fn evaluate_calculator(
    Path(key): Path<String>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<Evaluation>, ApiError> {
    let kind = CalculatorKind::from_key(&key)?;
    let evaluation = kind.evaluate(&request.vitals, request.input.as_ref())?;
    Ok(Json(evaluation))
}
