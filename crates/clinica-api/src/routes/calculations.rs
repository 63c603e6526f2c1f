use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use clinica_audit::AuditEvent;
use clinica_calculators::CalculatorKind;
use clinica_calculators::log::CalculationLog;
use clinica_core::models::calculation::{LogType, SavedCalculationRecord};
use clinica_storage::CalculationStore;

use super::calculators::EvaluateRequest;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub log_type: Option<String>,
}

/// Evaluate a calculator for a person and save the result to their log.
pub async fn save_calculation<S: CalculationStore>(
    State(state): State<AppState<S>>,
    Path((person_id, key)): Path<(Uuid, String)>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<SavedCalculationRecord>, ApiError> {
    let kind = CalculatorKind::from_key(&key)?;
    let evaluation = kind.evaluate(&request.vitals, request.input.as_ref())?;
    let record = state
        .store
        .for_person(person_id)
        .commit(evaluation.into_commit_request())
        .await?;
    Ok(Json(record))
}

pub async fn list_calculations<S: CalculationStore>(
    State(state): State<AppState<S>>,
    Path(person_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<SavedCalculationRecord>>, ApiError> {
    let log_type = query
        .log_type
        .as_deref()
        .map(str::parse::<LogType>)
        .transpose()?;

    let mut records = state.store.list(person_id).await?;
    if let Some(log_type) = log_type {
        records.retain(|r| r.log_type == log_type);
    }

    AuditEvent::new(
        "list_calculations",
        "calculation",
        "*",
        person_id.to_string(),
    )
    .emit();

    Ok(Json(records))
}
