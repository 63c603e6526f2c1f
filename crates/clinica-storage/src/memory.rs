use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use clinica_calculators::log::CommitRequest;
use clinica_core::models::calculation::SavedCalculationRecord;

use crate::error::StorageError;
use crate::store::{CalculationStore, audit_saved, new_record, sort_oldest_first};

/// Process-local store for tests and local runs.
#[derive(Default)]
pub struct MemoryCalculationStore {
    records: RwLock<Vec<SavedCalculationRecord>>,
    unavailable: AtomicBool,
}

impl MemoryCalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail, to exercise error paths.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("memory store offline".to_string()));
        }
        Ok(())
    }
}

impl CalculationStore for MemoryCalculationStore {
    async fn save(
        &self,
        person_id: Uuid,
        request: CommitRequest,
    ) -> Result<SavedCalculationRecord, StorageError> {
        self.check_available()?;
        let record = new_record(person_id, request);
        self.records.write().await.push(record.clone());

        info!(id = %record.id, calculator = %record.calculator_key, "calculation saved");
        audit_saved(&record);
        Ok(record)
    }

    async fn list(&self, person_id: Uuid) -> Result<Vec<SavedCalculationRecord>, StorageError> {
        self.check_available()?;
        let mut records: Vec<_> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.person_id == person_id)
            .cloned()
            .collect();
        sort_oldest_first(&mut records);
        Ok(records)
    }
}
