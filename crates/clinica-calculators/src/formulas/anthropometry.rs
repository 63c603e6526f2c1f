//! Body-composition indices, weight-change severity and ATP III criteria.

use clinica_core::models::result::{ClassificationBand, Severity};
use clinica_core::models::vitals::Sex;

use crate::classification::{self, BandTable};

const HEALTHY_BMI_MIN: f64 = 18.5;
const HEALTHY_BMI_MAX: f64 = 24.9;

pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let meters = height_cm / 100.0;
    weight_kg / (meters * meters)
}

/// Weight range (kg) that keeps BMI within 18.5–24.9.
pub fn healthy_weight_range(height_cm: f64) -> (f64, f64) {
    let meters = height_cm / 100.0;
    let squared = meters * meters;
    (HEALTHY_BMI_MIN * squared, HEALTHY_BMI_MAX * squared)
}

pub fn waist_hip_ratio(waist_cm: f64, hip_cm: f64) -> f64 {
    waist_cm / hip_cm
}

pub fn waist_hip_table(sex: Sex) -> &'static BandTable {
    match sex {
        Sex::Male => &classification::WAIST_HIP_MALE,
        Sex::Female => &classification::WAIST_HIP_FEMALE,
    }
}

pub fn waist_height_ratio(waist_cm: f64, height_cm: f64) -> f64 {
    waist_cm / height_cm
}

/// Signed percentage change from `previous_kg` to `current_kg`.
/// Negative values are losses.
pub fn weight_change_percent(current_kg: f64, previous_kg: f64) -> f64 {
    (current_kg - previous_kg) / previous_kg * 100.0
}

/// Loss (%) above which an involuntary loss over `elapsed_months` is severe.
///
/// Periods beyond six months use the six-month threshold.
pub fn severe_loss_threshold(elapsed_months: f64) -> f64 {
    match elapsed_months {
        m if m <= 0.25 => 2.0,
        m if m <= 1.0 => 5.0,
        m if m <= 3.0 => 7.5,
        _ => 10.0,
    }
}

/// Classify an involuntary weight change. Gains are never scored as loss.
pub fn weight_change_band(change_percent: f64, elapsed_months: f64) -> ClassificationBand {
    let (label, severity) = if change_percent > 0.0 {
        ("Ganancia de peso", Severity::Normal)
    } else if change_percent == 0.0 {
        ("Peso estable", Severity::Normal)
    } else if -change_percent > severe_loss_threshold(elapsed_months) {
        ("Pérdida de peso severa", Severity::Severe)
    } else {
        ("Pérdida de peso no significativa", Severity::Caution)
    };

    ClassificationBand {
        label: label.to_string(),
        severity,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetabolicCriterion {
    Waist,
    BloodPressure,
    Triglycerides,
    Hdl,
    Glucose,
}

impl MetabolicCriterion {
    pub fn key(&self) -> &'static str {
        match self {
            MetabolicCriterion::Waist => "waist",
            MetabolicCriterion::BloodPressure => "blood_pressure",
            MetabolicCriterion::Triglycerides => "triglycerides",
            MetabolicCriterion::Hdl => "hdl",
            MetabolicCriterion::Glucose => "glucose",
        }
    }
}

/// Measurements and treatment flags for the ATP III criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetabolicMeasurements {
    pub sex: Option<Sex>,
    pub waist_cm: Option<f64>,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub triglycerides: Option<f64>,
    pub hdl: Option<f64>,
    pub glucose: Option<f64>,
    pub on_blood_pressure_medication: bool,
    pub on_triglyceride_medication: bool,
    pub on_hdl_medication: bool,
    pub on_glucose_medication: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionOutcome {
    pub criterion: MetabolicCriterion,
    pub met: bool,
    /// False when neither a measurement nor a treatment flag was available.
    pub evaluated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetabolicSyndrome {
    pub outcomes: Vec<CriterionOutcome>,
}

impl MetabolicSyndrome {
    pub fn met_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.met).count()
    }

    pub fn evaluated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.evaluated).count()
    }

    pub fn is_positive(&self) -> bool {
        self.met_count() >= 3
    }
}

/// ATP III metabolic syndrome. A treatment flag meets its criterion
/// regardless of the measured value.
pub fn metabolic_syndrome(m: &MetabolicMeasurements) -> MetabolicSyndrome {
    let waist = match (m.sex, m.waist_cm) {
        (Some(Sex::Male), Some(w)) => Some(w > 102.0),
        (Some(Sex::Female), Some(w)) => Some(w > 88.0),
        _ => None,
    };
    let pressure = match (m.systolic, m.diastolic) {
        (None, None) => None,
        (s, d) => Some(s.is_some_and(|s| s >= 130.0) || d.is_some_and(|d| d >= 85.0)),
    };
    let triglycerides = m.triglycerides.map(|tg| tg >= 150.0);
    let hdl = match (m.sex, m.hdl) {
        (Some(Sex::Male), Some(h)) => Some(h < 40.0),
        (Some(Sex::Female), Some(h)) => Some(h < 50.0),
        _ => None,
    };
    let glucose = m.glucose.map(|g| g >= 100.0);

    let outcome = |criterion, measured: Option<bool>, medicated: bool| CriterionOutcome {
        criterion,
        met: medicated || measured.unwrap_or(false),
        evaluated: medicated || measured.is_some(),
    };

    MetabolicSyndrome {
        outcomes: vec![
            outcome(MetabolicCriterion::Waist, waist, false),
            outcome(
                MetabolicCriterion::BloodPressure,
                pressure,
                m.on_blood_pressure_medication,
            ),
            outcome(
                MetabolicCriterion::Triglycerides,
                triglycerides,
                m.on_triglyceride_medication,
            ),
            outcome(MetabolicCriterion::Hdl, hdl, m.on_hdl_medication),
            outcome(MetabolicCriterion::Glucose, glucose, m.on_glucose_medication),
        ],
    }
}
