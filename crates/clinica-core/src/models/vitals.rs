use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Biological sex as used by sex-specific formula coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

/// Most recent laboratory values, all in conventional units (mg/dL, %).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabPanel {
    pub triglycerides: Option<f64>,
    pub hdl: Option<f64>,
    pub glucose: Option<f64>,
    pub hba1c: Option<f64>,
    pub creatinine: Option<f64>,
    pub cholesterol: Option<f64>,
}

/// Canonical numeric inputs for every calculator.
///
/// Built once per patient/consultation selection and replaced wholesale when
/// the selection changes. A missing measurement is `None`, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsSnapshot {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<Sex>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub calf_cm: Option<f64>,
    pub blood_pressure: Option<BloodPressure>,
    #[serde(default)]
    pub labs: LabPanel,
    pub birth_date: Option<jiff::civil::Date>,
    pub measured_on: Option<jiff::civil::Date>,
}
