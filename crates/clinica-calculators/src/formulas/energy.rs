//! Basal metabolic rate equations and energy expenditure factors.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::vitals::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmrFormula {
    Mifflin,
    Harris,
    Oms,
}

impl BmrFormula {
    pub fn name(&self) -> &'static str {
        match self {
            BmrFormula::Mifflin => "Mifflin-St Jeor",
            BmrFormula::Harris => "Harris-Benedict",
            BmrFormula::Oms => "OMS",
        }
    }

    /// BMR in kcal/day.
    pub fn bmr(&self, sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
        match self {
            BmrFormula::Mifflin => mifflin_st_jeor(sex, weight_kg, height_cm, age_years),
            BmrFormula::Harris => harris_benedict(sex, weight_kg, height_cm, age_years),
            BmrFormula::Oms => who_schofield(sex, weight_kg, age_years),
        }
    }
}

pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn harris_benedict(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    match sex {
        Sex::Male => 66.473 + 13.7516 * weight_kg + 5.0033 * height_cm - 6.755 * age_years,
        Sex::Female => 655.0955 + 9.5634 * weight_kg + 1.8496 * height_cm - 4.6756 * age_years,
    }
}

/// FAO/WHO/UNU (1985) weight-only equations, banded by age.
pub fn who_schofield(sex: Sex, weight_kg: f64, age_years: f64) -> f64 {
    let (slope, intercept) = match sex {
        Sex::Male => match age_years {
            a if a < 3.0 => (60.9, -54.0),
            a if a < 10.0 => (22.7, 495.0),
            a if a < 18.0 => (17.5, 651.0),
            a if a < 30.0 => (15.3, 679.0),
            a if a <= 60.0 => (11.6, 879.0),
            _ => (13.5, 487.0),
        },
        Sex::Female => match age_years {
            a if a < 3.0 => (61.0, -51.0),
            a if a < 10.0 => (22.5, 499.0),
            a if a < 18.0 => (12.2, 746.0),
            a if a < 30.0 => (14.7, 496.0),
            a if a <= 60.0 => (8.7, 829.0),
            _ => (10.5, 596.0),
        },
    };
    slope * weight_kg + intercept
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
    VeryIntense,
}

impl ActivityLevel {
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
            ActivityLevel::VeryIntense => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StressLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

impl StressLevel {
    pub fn factor(&self) -> f64 {
        match self {
            StressLevel::None => 1.0,
            StressLevel::Mild => 1.2,
            StressLevel::Moderate => 1.4,
            StressLevel::Severe => 1.6,
        }
    }
}

/// GET = BMR × activity × stress.
pub fn total_energy_expenditure(bmr: f64, activity: ActivityLevel, stress: StressLevel) -> f64 {
    bmr * activity.factor() * stress.factor()
}
