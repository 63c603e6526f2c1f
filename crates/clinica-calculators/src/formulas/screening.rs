//! Malnutrition Universal Screening Tool (MUST) scoring.

pub fn bmi_score(bmi: f64) -> u8 {
    if bmi < 18.5 {
        2
    } else if bmi < 20.0 {
        1
    } else {
        0
    }
}

/// Score an unplanned weight change (%). Only losses score.
pub fn weight_loss_score(change_percent: f64) -> u8 {
    let loss = -change_percent;
    if loss > 10.0 {
        2
    } else if loss >= 5.0 {
        1
    } else {
        0
    }
}

pub fn acute_disease_score(acutely_ill: bool) -> u8 {
    if acutely_ill { 2 } else { 0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MustRisk {
    Low,
    Medium,
    High,
}

impl MustRisk {
    pub fn from_total(total: u8) -> Self {
        match total {
            0 => MustRisk::Low,
            1 => MustRisk::Medium,
            _ => MustRisk::High,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            MustRisk::Low => "Cuidados de rutina: repetir el tamizaje periódicamente",
            MustRisk::Medium => {
                "Observar: repetir el tamizaje y registrar la ingesta durante 3 días"
            }
            MustRisk::High => "Tratar: referir a nutrición e iniciar plan de soporte nutricional",
        }
    }
}
