//! clinica-calculators
//!
//! Clinical calculation and scoring engine. Pure computation: no I/O, no
//! storage. Turns a patient's vitals and labs into standardized clinical
//! scores and hands finished calculations to an external log.

pub mod calculators;
pub mod classification;
pub mod error;
pub mod formulas;
pub mod log;
pub mod orchestrator;
pub mod registry;
pub mod vitals;

use serde::Serialize;
use serde::de::DeserializeOwned;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::VitalsSnapshot;

pub use orchestrator::Orchestrator;
pub use registry::{CalculatorInfo, CalculatorKind, Evaluation, all_calculators};

/// Trait implemented by each clinical calculator.
pub trait Calculator: Send + Sync {
    /// Editable input state, seeded from the vitals snapshot.
    type Input: Clone + Serialize + DeserializeOwned + Send + Sync;

    /// Unique identifier (e.g., "energy", "must").
    fn key(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// The clinical log saved calculations are filed under.
    fn log_type(&self) -> LogType;

    /// Default input for a freshly selected patient.
    fn seed(&self, vitals: &VitalsSnapshot) -> Self::Input;

    /// Compute the full result. Never fails: outputs whose inputs are
    /// missing are left out of the result.
    fn compute(&self, input: &Self::Input, vitals: &VitalsSnapshot) -> CalculatorResult;

    /// One-line summary of a result, used as the log description.
    fn describe(&self, result: &CalculatorResult) -> String {
        match &result.derived_text {
            Some(text) => format!("{}: {text}", self.name()),
            None => format!("{}: datos insuficientes", self.name()),
        }
    }
}
