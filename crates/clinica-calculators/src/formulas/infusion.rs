//! Infusion planning: volume, rate and duration derived from one another.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which of rate and duration the user typed last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InfusionField {
    Rate,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfusionPlan {
    pub volume_ml: f64,
    pub rate_ml_h: f64,
    pub duration_h: f64,
}

/// Derive the field that was not edited last from the one that was.
///
/// The edited field is taken as authoritative and the other is always
/// recomputed from it, so the two never feed back into each other.
pub fn derive_plan(
    volume_ml: f64,
    rate_ml_h: Option<f64>,
    duration_h: Option<f64>,
    last_edited: InfusionField,
) -> Option<InfusionPlan> {
    let (rate_ml_h, duration_h) = match last_edited {
        InfusionField::Rate => {
            let rate = rate_ml_h?;
            (rate, volume_ml / rate)
        }
        InfusionField::Duration => {
            let duration = duration_h?;
            (volume_ml / duration, duration)
        }
    };

    Some(InfusionPlan {
        volume_ml,
        rate_ml_h,
        duration_h,
    })
}
