//! Pediatric growth percentiles from LMS reference curves.

use jiff::Unit;
use serde::{Deserialize, Serialize};

use clinica_core::models::vitals::Sex;

/// One row of an LMS table: the curve parameters at abscissa `x`
/// (age in months, or length/height in cm for weight-for-height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsPoint {
    pub x: f64,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// Male and female curves for one indicator, each sorted by `x`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SexCurves {
    pub male: Vec<LmsPoint>,
    pub female: Vec<LmsPoint>,
}

impl SexCurves {
    pub fn for_sex(&self, sex: Sex) -> &[LmsPoint] {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthIndicator {
    WeightForAge,
    HeightForAge,
    WeightForHeight,
    BmiForAge,
}

impl GrowthIndicator {
    pub const ALL: [GrowthIndicator; 4] = [
        GrowthIndicator::WeightForAge,
        GrowthIndicator::HeightForAge,
        GrowthIndicator::WeightForHeight,
        GrowthIndicator::BmiForAge,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GrowthIndicator::WeightForAge => "weight_for_age",
            GrowthIndicator::HeightForAge => "height_for_age",
            GrowthIndicator::WeightForHeight => "weight_for_height",
            GrowthIndicator::BmiForAge => "bmi_for_age",
        }
    }
}

/// A complete growth reference: one set of curves per indicator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthReference {
    pub name: String,
    pub weight_for_age: SexCurves,
    pub height_for_age: SexCurves,
    pub weight_for_height: SexCurves,
    pub bmi_for_age: SexCurves,
}

impl GrowthReference {
    /// Load a reference exported as JSON (same shape as this struct).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn curves(&self, indicator: GrowthIndicator) -> &SexCurves {
        match indicator {
            GrowthIndicator::WeightForAge => &self.weight_for_age,
            GrowthIndicator::HeightForAge => &self.height_for_age,
            GrowthIndicator::WeightForHeight => &self.weight_for_height,
            GrowthIndicator::BmiForAge => &self.bmi_for_age,
        }
    }

    /// Percentile of `measurement` at abscissa `x`, or `None` when `x` is
    /// outside the table's coverage.
    pub fn percentile(
        &self,
        indicator: GrowthIndicator,
        sex: Sex,
        x: f64,
        measurement: f64,
    ) -> Option<f64> {
        let lms = interpolate(self.curves(indicator).for_sex(sex), x)?;
        Some(percentile_from_z(z_score(measurement, &lms)))
    }
}

/// Linear interpolation of L, M and S between the two rows around `x`.
pub fn interpolate(points: &[LmsPoint], x: f64) -> Option<LmsPoint> {
    let first = points.first()?;
    let last = points.last()?;
    if x < first.x || x > last.x {
        return None;
    }

    let upper = points.iter().position(|p| p.x >= x)?;
    if upper == 0 || points[upper].x == x {
        return Some(points[upper]);
    }

    let (a, b) = (points[upper - 1], points[upper]);
    let t = (x - a.x) / (b.x - a.x);
    let lerp = |from: f64, to: f64| from + (to - from) * t;

    Some(LmsPoint {
        x,
        l: lerp(a.l, b.l),
        m: lerp(a.m, b.m),
        s: lerp(a.s, b.s),
    })
}

/// Box-Cox z-score of `measurement` against `lms`.
pub fn z_score(measurement: f64, lms: &LmsPoint) -> f64 {
    if lms.l.abs() < 1e-9 {
        (measurement / lms.m).ln() / lms.s
    } else {
        ((measurement / lms.m).powf(lms.l) - 1.0) / (lms.l * lms.s)
    }
}

pub fn percentile_from_z(z: f64) -> f64 {
    normal_cdf(z) * 100.0
}

/// Standard normal CDF (Abramowitz & Stegun 26.2.17).
pub fn normal_cdf(z: f64) -> f64 {
    if z > 8.0 {
        return 1.0;
    }
    if z < -8.0 {
        return 0.0;
    }

    let t = 1.0 / (1.0 + 0.2316419 * z.abs());
    let d = 0.3989423 * (-z * z / 2.0).exp();
    let upper_tail =
        d * t * (0.3193815 + t * (-0.3565638 + t * (1.781478 + t * (-1.821256 + t * 1.330274))));

    if z > 0.0 { 1.0 - upper_tail } else { upper_tail }
}

/// Completed months between `birth` and `measured_on`, or `None` when the
/// birth date falls after the measurement. A birth on the 31st completes a
/// month on the last day of a shorter month.
pub fn age_in_months(birth: jiff::civil::Date, measured_on: jiff::civil::Date) -> Option<u32> {
    if birth > measured_on {
        return None;
    }
    let span = birth.until((Unit::Month, measured_on)).ok()?;
    u32::try_from(span.get_months()).ok()
}
