//! Log emission contract.
//!
//! The engine never writes storage. A finished calculation is packaged as a
//! [`CommitRequest`] and handed to whatever [`CalculationLog`] the caller
//! provides; the log associates it with a person, a timestamp and a row.

use std::future::Future;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::{CalculationPayload, LogType};

/// An immutable snapshot of one calculation, ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommitRequest {
    pub calculator_key: String,
    pub log_type: LogType,
    /// One-line human-readable summary.
    pub description: String,
    pub payload: CalculationPayload,
}

/// The persistence collaborator's side of the commit boundary.
pub trait CalculationLog: Send + Sync {
    /// What the log hands back for a stored calculation, e.g. the saved row.
    type Receipt: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist `request`. Failures are reported, never swallowed.
    fn commit(
        &self,
        request: CommitRequest,
    ) -> impl Future<Output = Result<Self::Receipt, Self::Error>> + Send;
}
