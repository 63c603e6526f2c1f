use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::result::CalculatorResult;
use crate::error::CoreError;

/// The clinical log a saved calculation is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LogType {
    EnergyRequirements,
    Anthropometry,
    RenalFunction,
    Diabetes,
    NutritionalScreening,
    PediatricGrowth,
    SpecialPopulation,
    NutritionalSupport,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::EnergyRequirements => "energy_requirements",
            LogType::Anthropometry => "anthropometry",
            LogType::RenalFunction => "renal_function",
            LogType::Diabetes => "diabetes",
            LogType::NutritionalScreening => "nutritional_screening",
            LogType::PediatricGrowth => "pediatric_growth",
            LogType::SpecialPopulation => "special_population",
            LogType::NutritionalSupport => "nutritional_support",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| CoreError::InvalidLogType(s.to_string()))
    }
}

/// What a calculator hands to the log: the inputs it used and what it
/// produced from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationPayload {
    pub inputs: serde_json::Value,
    pub result: CalculatorResult,
}

/// A calculation as persisted by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedCalculationRecord {
    pub id: Uuid,
    pub calculator_key: String,
    pub log_type: LogType,
    pub description: String,
    pub inputs: serde_json::Value,
    pub result: CalculatorResult,
    pub person_id: Uuid,
    pub timestamp: jiff::Timestamp,
}
