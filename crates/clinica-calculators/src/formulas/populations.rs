//! Pregnancy (IOM 2009), lactation and older-adult targets.

/// Weight gain expected by the end of the first trimester, in kg.
pub const FIRST_TRIMESTER_GAIN_KG: f64 = 1.5;

const LAST_FIRST_TRIMESTER_WEEK: f64 = 13.0;
const LAST_SECOND_TRIMESTER_WEEK: f64 = 27.0;

/// Non-pregnant energy baseline multiplier for pregnancy and lactation.
pub const BASELINE_ACTIVITY_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IomCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl IomCategory {
    pub fn from_bmi(pregestational_bmi: f64) -> Self {
        match pregestational_bmi {
            b if b < 18.5 => IomCategory::Underweight,
            b if b < 25.0 => IomCategory::Normal,
            b if b < 30.0 => IomCategory::Overweight,
            _ => IomCategory::Obese,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IomCategory::Underweight => "Bajo peso",
            IomCategory::Normal => "Peso normal",
            IomCategory::Overweight => "Sobrepeso",
            IomCategory::Obese => "Obesidad",
        }
    }

    /// Recommended total gain over the pregnancy, `(min, max)` kg.
    pub fn total_gain_range(&self) -> (f64, f64) {
        match self {
            IomCategory::Underweight => (12.5, 18.0),
            IomCategory::Normal => (11.5, 16.0),
            IomCategory::Overweight => (7.0, 11.5),
            IomCategory::Obese => (5.0, 9.0),
        }
    }

    /// Mean weekly gain in the second and third trimesters, kg/week.
    pub fn weekly_rate(&self) -> f64 {
        match self {
            IomCategory::Underweight => 0.51,
            IomCategory::Normal => 0.42,
            IomCategory::Overweight => 0.28,
            IomCategory::Obese => 0.22,
        }
    }
}

/// Cumulative gain expected at `week`, flat through the first trimester.
pub fn expected_gain(week: f64, weekly_rate: f64) -> f64 {
    if week <= LAST_FIRST_TRIMESTER_WEEK {
        FIRST_TRIMESTER_GAIN_KG
    } else {
        FIRST_TRIMESTER_GAIN_KG + (week - LAST_FIRST_TRIMESTER_WEEK) * weekly_rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn from_week(week: f64) -> Self {
        if week <= LAST_FIRST_TRIMESTER_WEEK {
            Trimester::First
        } else if week <= LAST_SECOND_TRIMESTER_WEEK {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    /// Additional kcal/day over the non-pregnant requirement.
    pub fn energy_addition(&self) -> f64 {
        match self {
            Trimester::First => 0.0,
            Trimester::Second => 340.0,
            Trimester::Third => 452.0,
        }
    }
}

pub fn pregnancy_energy(bmr: f64, trimester: Trimester) -> f64 {
    bmr * BASELINE_ACTIVITY_FACTOR + trimester.energy_addition()
}

/// Additional kcal/day for exclusive breastfeeding.
pub fn lactation_addition(months_postpartum: f64) -> f64 {
    if months_postpartum <= 6.0 { 500.0 } else { 400.0 }
}

pub fn lactation_energy(bmr: f64, months_postpartum: f64) -> f64 {
    bmr * BASELINE_ACTIVITY_FACTOR + lactation_addition(months_postpartum)
}

/// Protein target for older adults, `(min, max)` g/kg/day.
pub const GERIATRIC_PROTEIN_G_PER_KG: (f64, f64) = (1.0, 1.2);
