use std::future::Future;

use tracing::{debug, info};

use clinica_core::models::calculation::CalculationPayload;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::VitalsSnapshot;

use crate::Calculator;
use crate::error::CalculatorError;
use crate::log::{CalculationLog, CommitRequest};

/// Owns one calculator's input state for the currently selected patient.
///
/// The input is seeded from the vitals snapshot and re-seeded whenever the
/// snapshot is replaced. Results are never cached: every call to
/// [`Orchestrator::result`] recomputes from the current input.
pub struct Orchestrator<C: Calculator> {
    calculator: C,
    vitals: VitalsSnapshot,
    input: C::Input,
}

impl<C: Calculator> Orchestrator<C> {
    pub fn new(calculator: C, vitals: VitalsSnapshot) -> Self {
        let input = calculator.seed(&vitals);
        Self {
            calculator,
            vitals,
            input,
        }
    }

    /// Replace the snapshot after a selection change and reset the input to
    /// freshly seeded defaults.
    pub fn reinitialize(&mut self, vitals: VitalsSnapshot) {
        debug!(calculator = self.calculator.key(), "reinitializing input");
        self.input = self.calculator.seed(&vitals);
        self.vitals = vitals;
    }

    pub fn vitals(&self) -> &VitalsSnapshot {
        &self.vitals
    }

    pub fn input(&self) -> &C::Input {
        &self.input
    }

    /// Apply a field edit to the input.
    pub fn update(&mut self, edit: impl FnOnce(&mut C::Input)) {
        edit(&mut self.input);
    }

    pub fn result(&self) -> CalculatorResult {
        self.calculator.compute(&self.input, &self.vitals)
    }

    /// Package the current inputs and result for the log.
    pub fn commit_request(&self) -> Result<CommitRequest, CalculatorError> {
        let result = self.result();
        Ok(CommitRequest {
            calculator_key: self.calculator.key().to_string(),
            log_type: self.calculator.log_type(),
            description: self.calculator.describe(&result),
            payload: CalculationPayload {
                inputs: serde_json::to_value(&self.input)?,
                result,
            },
        })
    }

    /// Hand the current calculation to `log`.
    ///
    /// The snapshot is taken before this returns, so the orchestrator is free
    /// to be edited and recomputed while the commit is in flight.
    pub fn commit<'a, L: CalculationLog>(
        &self,
        log: &'a L,
    ) -> Result<
        impl Future<Output = Result<L::Receipt, L::Error>> + Send + use<'a, C, L>,
        CalculatorError,
    > {
        let request = self.commit_request()?;
        info!(
            calculator = %request.calculator_key,
            log_type = %request.log_type,
            "committing calculation"
        );
        Ok(log.commit(request))
    }
}
