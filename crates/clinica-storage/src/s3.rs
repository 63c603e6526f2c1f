use aws_sdk_s3::Client;
use tracing::{debug, info};
use uuid::Uuid;

use clinica_calculators::log::CommitRequest;
use clinica_core::models::calculation::SavedCalculationRecord;
use clinica_core::s3_keys;

use crate::error::StorageError;
use crate::json;
use crate::objects;
use crate::store::{CalculationStore, audit_saved, new_record, sort_oldest_first};

/// Saved calculations as one JSON object per record under
/// `calculations/{person_id}/`.
#[derive(Clone)]
pub struct S3CalculationStore {
    client: Client,
    bucket: String,
}

impl S3CalculationStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl CalculationStore for S3CalculationStore {
    async fn save(
        &self,
        person_id: Uuid,
        request: CommitRequest,
    ) -> Result<SavedCalculationRecord, StorageError> {
        let record = new_record(person_id, request);
        let key = s3_keys::calculation(person_id, record.id);
        json::save_json(&self.client, &self.bucket, &key, &record).await?;

        info!(key = %key, calculator = %record.calculator_key, "calculation saved");
        audit_saved(&record);
        Ok(record)
    }

    async fn list(&self, person_id: Uuid) -> Result<Vec<SavedCalculationRecord>, StorageError> {
        let prefix = s3_keys::person_calculations_prefix(person_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;
        debug!(prefix = %prefix, count = keys.len(), "listing calculations");

        let mut records = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| k.ends_with(".json")) {
            records.push(json::load_json(&self.client, &self.bucket, key).await?);
        }
        sort_oldest_first(&mut records);
        Ok(records)
    }
}
