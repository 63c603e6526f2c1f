use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::calculation::LogType;
use clinica_core::models::result::CalculatorResult;
use clinica_core::models::vitals::{Sex, VitalsSnapshot};

use crate::Calculator;
use crate::classification;
use crate::formulas::renal::{CkdStage, ProteinStage, ckd_epi_2021};
use crate::formulas::{positive, round_to};

/// How the protein stage is chosen.
///
/// `AutoFollowing` tracks the stage derived from the current eGFR. Once the
/// user picks a stage it is `Pinned` and eGFR recomputes no longer move it,
/// until the user explicitly returns to following.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "mode", content = "stage", rename_all = "snake_case")]
#[ts(export)]
pub enum StageSelection {
    #[default]
    AutoFollowing,
    Pinned(ProteinStage),
}

impl StageSelection {
    pub fn effective(&self, egfr: Option<f64>) -> Option<ProteinStage> {
        match self {
            StageSelection::AutoFollowing => {
                egfr.map(|e| ProteinStage::for_ckd(CkdStage::from_egfr(e)))
            }
            StageSelection::Pinned(stage) => Some(*stage),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenalInput {
    pub creatinine_mg_dl: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<Sex>,
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub stage: StageSelection,
}

impl RenalInput {
    /// User picked a stage (e.g. hemodialysis).
    pub fn pin_stage(&mut self, stage: ProteinStage) {
        self.stage = StageSelection::Pinned(stage);
    }

    /// User asked to go back to the eGFR-derived stage.
    pub fn follow_egfr(&mut self) {
        self.stage = StageSelection::AutoFollowing;
    }
}

/// CKD-EPI 2021 eGFR with KDIGO staging and protein targets.
pub struct Renal;

impl Calculator for Renal {
    type Input = RenalInput;

    fn key(&self) -> &'static str {
        "renal"
    }

    fn name(&self) -> &'static str {
        "Función renal"
    }

    fn log_type(&self) -> LogType {
        LogType::RenalFunction
    }

    fn seed(&self, vitals: &VitalsSnapshot) -> RenalInput {
        RenalInput {
            creatinine_mg_dl: vitals.labs.creatinine,
            age_years: vitals.age_years,
            sex: vitals.sex,
            weight_kg: vitals.weight_kg,
            stage: StageSelection::AutoFollowing,
        }
    }

    fn compute(&self, input: &RenalInput, _vitals: &VitalsSnapshot) -> CalculatorResult {
        let mut result = CalculatorResult::default();
        let mut summary = Vec::new();

        let egfr = match (
            positive(input.creatinine_mg_dl),
            positive(input.age_years),
            input.sex,
        ) {
            (Some(creatinine), Some(age), Some(sex)) => {
                Some(ckd_epi_2021(creatinine, age, sex).round())
            }
            _ => None,
        };

        // Staged on the reported whole-number eGFR.
        if let Some(egfr) = egfr {
            let band = classification::EGFR.classify(egfr);
            result.set_number("egfr", egfr);
            result.set_text("ckd_stage", CkdStage::from_egfr(egfr).code());
            summary.push(format!("TFGe {egfr:.0} ml/min/1.73m² ({})", band.label));
            result.classify("egfr", band.clone());
            result.interpretation = Some(band);
        }

        let mode = match input.stage {
            StageSelection::AutoFollowing => "auto",
            StageSelection::Pinned(_) => "pinned",
        };
        result.set_text("stage_mode", mode);

        if let Some(stage) = input.stage.effective(egfr) {
            let (min, max) = stage.protein_g_per_kg();
            result.set_text("protein_stage", stage.label());
            result.set_number("protein_min_g_kg", min);
            result.set_number("protein_max_g_kg", max);
            match positive(input.weight_kg) {
                Some(weight) => {
                    result.set_number("protein_min_g_day", round_to(min * weight, 1));
                    result.set_number("protein_max_g_day", round_to(max * weight, 1));
                    summary.push(format!(
                        "proteína {:.0}-{:.0} g/día ({})",
                        min * weight,
                        max * weight,
                        stage.label()
                    ));
                }
                None => summary.push(format!("proteína {min}-{max} g/kg/día ({})", stage.label())),
            }
        }

        if !summary.is_empty() {
            result.derived_text = Some(summary.join("; "));
        }
        result
    }
}
