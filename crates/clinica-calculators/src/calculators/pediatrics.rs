use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::{Sex, VitalsSnapshot};

use super::insufficient;
use crate::Calculator;
use crate::classification::{self, BandTable};
use crate::formulas::anthropometry::bmi;
use crate::formulas::growth::{GrowthIndicator, GrowthReference, age_in_months};
use crate::formulas::growth_reference::who_2006;
use crate::formulas::{positive, round_to};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PediatricsInput {
    pub sex: Option<Sex>,
    pub birth_date: Option<jiff::civil::Date>,
    pub measured_on: Option<jiff::civil::Date>,
    pub weight_kg: Option<f64>,
    /// Length (under 2 years) or standing height, cm.
    pub height_cm: Option<f64>,
}

/// Growth percentiles against an LMS reference.
pub struct Pediatrics {
    reference: Cow<'static, GrowthReference>,
}

impl Default for Pediatrics {
    fn default() -> Self {
        Self {
            reference: Cow::Borrowed(who_2006()),
        }
    }
}

impl Pediatrics {
    /// Use a reference loaded at runtime instead of the bundled one.
    pub fn with_reference(reference: GrowthReference) -> Self {
        Self {
            reference: Cow::Owned(reference),
        }
    }
}

/// Headline indicators, most informative first.
const HEADLINE_ORDER: [GrowthIndicator; 4] = [
    GrowthIndicator::WeightForHeight,
    GrowthIndicator::BmiForAge,
    GrowthIndicator::WeightForAge,
    GrowthIndicator::HeightForAge,
];

fn band_table(indicator: GrowthIndicator) -> &'static BandTable {
    match indicator {
        GrowthIndicator::HeightForAge => &classification::GROWTH_HEIGHT_PERCENTILE,
        GrowthIndicator::WeightForAge
        | GrowthIndicator::WeightForHeight
        | GrowthIndicator::BmiForAge => &classification::GROWTH_WEIGHT_PERCENTILE,
    }
}

fn short_name(indicator: GrowthIndicator) -> &'static str {
    match indicator {
        GrowthIndicator::WeightForAge => "P/E",
        GrowthIndicator::HeightForAge => "T/E",
        GrowthIndicator::WeightForHeight => "P/T",
        GrowthIndicator::BmiForAge => "IMC/E",
    }
}

impl Calculator for Pediatrics {
    type Input = PediatricsInput;

    fn key(&self) -> &'static str {
        "pediatrics"
    }

    fn name(&self) -> &'static str {
        "Crecimiento pediátrico"
    }

    fn log_type(&self) -> LogType {
        LogType::PediatricGrowth
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> PediatricsInput {
        PediatricsInput {
            sex: vitals.sex,
            birth_date: vitals.birth_date,
            measured_on: vitals.measured_on,
            weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
        }
    }

    fn compute(&self, input: &PediatricsInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let (Some(sex), Some(birth), Some(measured_on)) =
            (input.sex, input.birth_date, input.measured_on)
        else {
            return insufficient("sexo, fecha de nacimiento y fecha de medición");
        };
        let Some(months) = age_in_months(birth, measured_on) else {
            return CalculatorResult::unavailable(
                "La fecha de nacimiento es posterior a la fecha de medición",
            );
        };

        let weight = positive(input.weight_kg);
        let height = positive(input.height_cm);
        let age = f64::from(months);

        let mut result = CalculatorResult::default();
        result.set_number("age_months", age);
        result.set_text("reference", self.reference.name.clone());

        for indicator in GrowthIndicator::ALL {
            let point = match indicator {
                GrowthIndicator::WeightForAge => weight.map(|w| (age, w)),
                GrowthIndicator::HeightForAge => height.map(|h| (age, h)),
                GrowthIndicator::WeightForHeight => weight.zip(height).map(|(w, h)| (h, w)),
                GrowthIndicator::BmiForAge => weight.zip(height).map(|(w, h)| (age, bmi(w, h))),
            };
            let Some((x, measurement)) = point else {
                continue;
            };
            let Some(percentile) = self.reference.percentile(indicator, sex, x, measurement)
            else {
                continue;
            };

            let percentile = round_to(percentile, 1);
            let key = format!("{}_percentile", indicator.key());
            result.set_number(&key, percentile);
            result.classify(&key, band_table(indicator).classify(percentile));
        }

        let mut summary = Vec::new();
        for indicator in HEADLINE_ORDER {
            let key = format!("{}_percentile", indicator.key());
            let (Some(p), Some(band)) = (result.number(&key), result.band(&key).cloned()) else {
                continue;
            };
            summary.push(format!("{} P{p:.1} ({})", short_name(indicator), band.label));
            if result.interpretation.is_none() {
                result.interpretation = Some(band);
            }
        }

        result.derived_text = Some(if summary.is_empty() {
            format!("{months} meses: fuera de la cobertura de la referencia")
        } else {
            format!("{months} meses; {}", summary.join(", "))
        });
        result
    }
}
