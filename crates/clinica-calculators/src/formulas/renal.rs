//! CKD-EPI 2021 eGFR, KDIGO GFR staging and protein targets.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clinica_core::models::vitals::Sex;

/// Race-free CKD-EPI 2021 eGFR in ml/min/1.73m².
pub fn ckd_epi_2021(creatinine_mg_dl: f64, age_years: f64, sex: Sex) -> f64 {
    let (kappa, alpha, sex_factor) = match sex {
        Sex::Female => (0.7, -0.241, 1.012),
        Sex::Male => (0.9, -0.302, 1.0),
    };
    let scr_over_kappa = creatinine_mg_dl / kappa;

    142.0
        * scr_over_kappa.min(1.0).powf(alpha)
        * scr_over_kappa.max(1.0).powf(-1.200)
        * 0.9938_f64.powf(age_years)
        * sex_factor
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CkdStage {
    G1,
    G2,
    G3a,
    G3b,
    G4,
    G5,
}

impl CkdStage {
    pub fn from_egfr(egfr: f64) -> Self {
        match egfr {
            e if e >= 90.0 => CkdStage::G1,
            e if e >= 60.0 => CkdStage::G2,
            e if e >= 45.0 => CkdStage::G3a,
            e if e >= 30.0 => CkdStage::G3b,
            e if e >= 15.0 => CkdStage::G4,
            _ => CkdStage::G5,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CkdStage::G1 => "G1",
            CkdStage::G2 => "G2",
            CkdStage::G3a => "G3a",
            CkdStage::G3b => "G3b",
            CkdStage::G4 => "G4",
            CkdStage::G5 => "G5",
        }
    }
}

/// Stage used to pick a protein prescription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProteinStage {
    /// G1 through G3b, not on dialysis.
    Ckd1To3,
    /// G4 and G5, not on dialysis.
    Ckd4To5,
    Hemodialysis,
    PeritonealDialysis,
}

impl ProteinStage {
    pub fn for_ckd(stage: CkdStage) -> Self {
        match stage {
            CkdStage::G1 | CkdStage::G2 | CkdStage::G3a | CkdStage::G3b => ProteinStage::Ckd1To3,
            CkdStage::G4 | CkdStage::G5 => ProteinStage::Ckd4To5,
        }
    }

    /// Protein target in g/kg/day, `(min, max)`.
    pub fn protein_g_per_kg(&self) -> (f64, f64) {
        match self {
            ProteinStage::Ckd1To3 => (0.8, 1.0),
            ProteinStage::Ckd4To5 => (0.6, 0.8),
            ProteinStage::Hemodialysis => (1.0, 1.2),
            ProteinStage::PeritonealDialysis => (1.0, 1.3),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProteinStage::Ckd1To3 => "ERC G1-G3 sin diálisis",
            ProteinStage::Ckd4To5 => "ERC G4-G5 sin diálisis",
            ProteinStage::Hemodialysis => "Hemodiálisis",
            ProteinStage::PeritonealDialysis => "Diálisis peritoneal",
        }
    }
}
