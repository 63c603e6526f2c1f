use axum::Json;
use serde::Deserialize;

use clinica_calculators::vitals::snapshot_from_records;
use clinica_core::models::record::{ConsultationRecord, PersonRecord};
use clinica_core::models::vitals::VitalsSnapshot;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SnapshotRequest {
    pub person: PersonRecord,
    #[serde(default)]
    pub consultation: Option<ConsultationRecord>,
    /// Date to compute ages at when there is no consultation; defaults to today.
    #[serde(default)]
    pub reference_date: Option<jiff::civil::Date>,
}

pub async fn build_snapshot(
    Json(request): Json<SnapshotRequest>,
) -> Result<Json<VitalsSnapshot>, ApiError> {
    if let Some(consultation) = &request.consultation
        && consultation.person_id != request.person.id
    {
        return Err(ApiError::BadRequest(format!(
            "consultation {} does not belong to person {}",
            consultation.id, request.person.id
        )));
    }

    let today = request
        .reference_date
        .unwrap_or_else(|| jiff::Zoned::now().date());
    Ok(Json(snapshot_from_records(
        &request.person,
        request.consultation.as_ref(),
        today,
    )))
}
