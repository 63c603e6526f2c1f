use std::future::Future;

use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use clinica_audit::AuditEvent;
use clinica_calculators::log::{CalculationLog, CommitRequest};
use clinica_core::models::calculation::SavedCalculationRecord;

use crate::error::StorageError;

/// Where saved calculations live.
pub trait CalculationStore: Send + Sync {
    /// Persist `request` for `person_id`, stamping it with an id and the
    /// current time.
    fn save(
        &self,
        person_id: Uuid,
        request: CommitRequest,
    ) -> impl Future<Output = Result<SavedCalculationRecord, StorageError>> + Send;

    /// Every calculation saved for `person_id`, oldest first.
    fn list(
        &self,
        person_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SavedCalculationRecord>, StorageError>> + Send;

    /// A log that files commits under `person_id`.
    fn for_person(&self, person_id: Uuid) -> PersonLog<'_, Self>
    where
        Self: Sized,
    {
        PersonLog {
            store: self,
            person_id,
        }
    }
}

/// A store bound to the currently selected person.
pub struct PersonLog<'a, S> {
    store: &'a S,
    person_id: Uuid,
}

impl<S: CalculationStore> CalculationLog for PersonLog<'_, S> {
    type Receipt = SavedCalculationRecord;
    type Error = StorageError;

    async fn commit(&self, request: CommitRequest) -> Result<SavedCalculationRecord, StorageError> {
        let calculator_key = request.calculator_key.clone();
        match self.store.save(self.person_id, request).await {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(
                    person_id = %self.person_id,
                    calculator = %calculator_key,
                    error = %e,
                    "calculation commit failed"
                );
                Err(e)
            }
        }
    }
}

/// Stamp a commit with a fresh id and timestamp.
pub fn new_record(person_id: Uuid, request: CommitRequest) -> SavedCalculationRecord {
    SavedCalculationRecord {
        id: Uuid::new_v4(),
        calculator_key: request.calculator_key,
        log_type: request.log_type,
        description: request.description,
        inputs: request.payload.inputs,
        result: request.payload.result,
        person_id,
        timestamp: jiff::Timestamp::now(),
    }
}

pub(crate) fn audit_saved(record: &SavedCalculationRecord) {
    AuditEvent::new(
        "save_calculation",
        "calculation",
        record.id.to_string(),
        record.person_id.to_string(),
    )
    .with_details(json!({
        "calculator_key": record.calculator_key,
        "log_type": record.log_type,
    }))
    .emit();
}

pub(crate) fn sort_oldest_first(records: &mut [SavedCalculationRecord]) {
    records.sort_by_key(|r| (r.timestamp, r.id));
}
