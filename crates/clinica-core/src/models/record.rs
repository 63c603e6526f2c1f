//! Person and consultation records as supplied by the records collaborator.
//!
//! These shapes are read-only to the engine. Numeric columns arrive as
//! numbers, numeric strings, or nulls depending on which screen wrote them,
//! so every measurement is parsed leniently into `Option<f64>`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabResult {
    pub date: Option<jiff::civil::Date>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub hba1c: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub triglycerides_mg_dl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub cholesterol_mg_dl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub glucose_mg_dl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub hdl_mg_dl: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub creatinine_mg_dl: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: Uuid,
    pub gender: Option<String>,
    pub birth_date: Option<jiff::civil::Date>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub height_cm: Option<f64>,
    /// Blood pressure as typed by staff, e.g. `"120/80"`.
    pub ta: Option<String>,
    #[serde(default)]
    pub lab_results: Vec<LabResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationRecord {
    pub id: Uuid,
    pub person_id: Uuid,
    pub date: jiff::civil::Date,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub height_cm: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub waist_cm: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub hip_cm: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub calf_cm: Option<f64>,
    pub ta: Option<String>,
    #[serde(default)]
    pub lab_results: Vec<LabResult>,
}

mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn option_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Raw>::deserialize(d)? {
            Some(Raw::Number(n)) => Some(n),
            // Decimal commas are common in manually typed values
            Some(Raw::Text(s)) => s.trim().replace(',', ".").parse().ok(),
            None => None,
        })
    }
}
