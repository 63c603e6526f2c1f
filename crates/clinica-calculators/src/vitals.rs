//! Vitals snapshot adapter.
//!
//! Maps person and consultation records into the canonical
//! [`VitalsSnapshot`]. Pure mapping: consultation values win over person
//! values, the most recent lab result wins, and anything blank, zero,
//! negative or unparseable becomes `None`.

use jiff::Unit;

use clinica_core::models::record::{ConsultationRecord, LabResult, PersonRecord};
use clinica_core::models::vitals::{BloodPressure, LabPanel, Sex, VitalsSnapshot};

use crate::formulas::positive;

/// Build the snapshot for `person`, optionally at a given consultation.
///
/// `today` is used as the measurement date when there is no consultation.
pub fn snapshot_from_records(
    person: &PersonRecord,
    consultation: Option<&ConsultationRecord>,
    today: jiff::civil::Date,
) -> VitalsSnapshot {
    let measured_on = consultation.map(|c| c.date).unwrap_or(today);

    let latest_labs = consultation
        .and_then(|c| latest_lab(&c.lab_results))
        .or_else(|| latest_lab(&person.lab_results));

    let ta = consultation
        .and_then(|c| c.ta.as_deref())
        .and_then(parse_blood_pressure)
        .or_else(|| person.ta.as_deref().and_then(parse_blood_pressure));

    VitalsSnapshot {
        weight_kg: positive(consultation.and_then(|c| c.weight_kg))
            .or(positive(person.weight_kg)),
        height_cm: positive(consultation.and_then(|c| c.height_cm))
            .or(positive(person.height_cm)),
        age_years: person
            .birth_date
            .and_then(|birth| age_in_years(birth, measured_on)),
        sex: person.gender.as_deref().and_then(parse_sex),
        waist_cm: positive(consultation.and_then(|c| c.waist_cm)),
        hip_cm: positive(consultation.and_then(|c| c.hip_cm)),
        calf_cm: positive(consultation.and_then(|c| c.calf_cm)),
        blood_pressure: ta,
        labs: latest_labs.map(lab_panel).unwrap_or_default(),
        birth_date: person.birth_date,
        measured_on: Some(measured_on),
    }
}

/// Parse a free-text gender column.
pub fn parse_sex(gender: &str) -> Option<Sex> {
    match gender.trim().to_lowercase().as_str() {
        "male" | "m" | "masculino" | "hombre" | "h" => Some(Sex::Male),
        "female" | "f" | "femenino" | "mujer" => Some(Sex::Female),
        _ => None,
    }
}

/// Parse a blood pressure string such as `"120/80"` or `" 130 / 85 "`.
pub fn parse_blood_pressure(ta: &str) -> Option<BloodPressure> {
    let (systolic, diastolic) = ta.split_once('/')?;
    let systolic = positive(systolic.trim().parse().ok())?;
    let diastolic = positive(diastolic.trim().parse().ok())?;
    Some(BloodPressure {
        systolic,
        diastolic,
    })
}

/// Completed years between `birth` and `on`. `None` for a zero or negative
/// age, matching the calculators' positive-only guards.
pub fn age_in_years(birth: jiff::civil::Date, on: jiff::civil::Date) -> Option<f64> {
    let years = birth.until((Unit::Year, on)).ok()?.get_years();
    (years > 0).then_some(f64::from(years))
}

/// Most recent lab result by date; undated results rank by list position.
fn latest_lab(results: &[LabResult]) -> Option<&LabResult> {
    results
        .iter()
        .enumerate()
        .max_by_key(|(index, result)| (result.date, *index))
        .map(|(_, result)| result)
}

fn lab_panel(result: &LabResult) -> LabPanel {
    LabPanel {
        triglycerides: positive(result.triglycerides_mg_dl),
        hdl: positive(result.hdl_mg_dl),
        glucose: positive(result.glucose_mg_dl),
        hba1c: positive(result.hba1c),
        creatinine: positive(result.creatinine_mg_dl),
        cholesterol: positive(result.cholesterol_mg_dl),
    }
}
