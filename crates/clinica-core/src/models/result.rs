use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical severity attached to a classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    Caution,
    Risk,
    Severe,
}

/// A named interpretation band for a numeric result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationBand {
    pub label: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

/// The structured output of one calculator.
///
/// A key that is missing from `values` means the output could not be
/// computed from the available inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorResult {
    pub values: BTreeMap<String, ResultValue>,
    /// Band of the panel's headline output.
    pub interpretation: Option<ClassificationBand>,
    /// Band of every classified sub-result, keyed like `values`.
    #[serde(default)]
    pub classifications: BTreeMap<String, ClassificationBand>,
    pub derived_text: Option<String>,
}

impl CalculatorResult {
    /// A result carrying only an explanatory message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            derived_text: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn set_number(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), ResultValue::Number(value));
    }

    /// Set `key` only when `value` is present.
    pub fn set_opt_number(&mut self, key: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.set_number(key, value);
        }
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), ResultValue::Text(value.into()));
    }

    pub fn classify(&mut self, key: &str, band: ClassificationBand) {
        self.classifications.insert(key.to_string(), band);
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(ResultValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ResultValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn band(&self, key: &str) -> Option<&ClassificationBand> {
        self.classifications.get(key)
    }

    /// True when no output at all could be computed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
