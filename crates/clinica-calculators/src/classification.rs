//! Ordered threshold tables mapping a numeric result to a named band.
//!
//! A table is scanned from its lowest band upward and the first band whose
//! upper limit admits the value wins. Values above every limit fall into the
//! table's open-ended top band, so every table is exhaustive.

use clinica_core::models::result::{ClassificationBand, Severity};

/// Upper limit of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    /// Admits values strictly below the limit.
    Below(f64),
    /// Admits values up to and including the limit.
    AtMost(f64),
}

impl Limit {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Limit::Below(limit) => value < limit,
            Limit::AtMost(limit) => value <= limit,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Limit::Below(limit) | Limit::AtMost(limit) => limit,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub limit: Limit,
    pub label: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    pub id: &'static str,
    /// Bounded bands in ascending order of limit.
    pub bands: &'static [Band],
    pub top_label: &'static str,
    pub top_severity: Severity,
}

impl BandTable {
    pub fn classify(&self, value: f64) -> ClassificationBand {
        let (label, severity) = self
            .bands
            .iter()
            .find(|band| band.limit.admits(value))
            .map(|band| (band.label, band.severity))
            .unwrap_or((self.top_label, self.top_severity));

        ClassificationBand {
            label: label.to_string(),
            severity,
        }
    }

    /// Whether limits are strictly ascending, i.e. no band can shadow another.
    pub fn is_ordered(&self) -> bool {
        self.bands
            .windows(2)
            .all(|pair| pair[0].limit.value() < pair[1].limit.value())
    }
}

const fn below(limit: f64, label: &'static str, severity: Severity) -> Band {
    Band {
        limit: Limit::Below(limit),
        label,
        severity,
    }
}

const fn at_most(limit: f64, label: &'static str, severity: Severity) -> Band {
    Band {
        limit: Limit::AtMost(limit),
        label,
        severity,
    }
}

pub const BMI: BandTable = BandTable {
    id: "bmi",
    bands: &[
        below(18.5, "Bajo peso", Severity::Caution),
        below(25.0, "Peso normal", Severity::Normal),
        below(30.0, "Sobrepeso", Severity::Caution),
        below(35.0, "Obesidad grado I", Severity::Risk),
        below(40.0, "Obesidad grado II", Severity::Severe),
    ],
    top_label: "Obesidad grado III",
    top_severity: Severity::Severe,
};

pub const WAIST_HIP_MALE: BandTable = BandTable {
    id: "waist_hip_male",
    bands: &[below(0.90, "Riesgo bajo", Severity::Normal)],
    top_label: "Riesgo cardiometabólico alto",
    top_severity: Severity::Risk,
};

pub const WAIST_HIP_FEMALE: BandTable = BandTable {
    id: "waist_hip_female",
    bands: &[below(0.85, "Riesgo bajo", Severity::Normal)],
    top_label: "Riesgo cardiometabólico alto",
    top_severity: Severity::Risk,
};

pub const WAIST_HEIGHT: BandTable = BandTable {
    id: "waist_height",
    bands: &[below(0.5, "Riesgo bajo", Severity::Normal)],
    top_label: "Riesgo elevado",
    top_severity: Severity::Risk,
};

pub const EGFR: BandTable = BandTable {
    id: "egfr",
    bands: &[
        below(15.0, "G5 Falla renal", Severity::Severe),
        below(30.0, "G4 Disminución severa", Severity::Severe),
        below(45.0, "G3b Disminución moderada a severa", Severity::Risk),
        below(60.0, "G3a Disminución leve a moderada", Severity::Risk),
        below(90.0, "G2 Disminución leve", Severity::Caution),
    ],
    top_label: "G1 Normal o alta",
    top_severity: Severity::Normal,
};

pub const ESTIMATED_AVERAGE_GLUCOSE: BandTable = BandTable {
    id: "estimated_average_glucose",
    bands: &[
        below(70.0, "Posible hipoglucemia", Severity::Risk),
        below(154.0, "Buen control", Severity::Normal),
        below(183.0, "Control regular", Severity::Caution),
    ],
    top_label: "Control deficiente",
    top_severity: Severity::Risk,
};

pub const MUST_RISK: BandTable = BandTable {
    id: "must_risk",
    bands: &[
        below(1.0, "Bajo Riesgo", Severity::Normal),
        below(2.0, "Riesgo Medio", Severity::Caution),
    ],
    top_label: "Alto Riesgo",
    top_severity: Severity::Severe,
};

/// Actual over expected gestational weight gain.
pub const GESTATIONAL_GAIN: BandTable = BandTable {
    id: "gestational_gain",
    bands: &[
        below(0.85, "Ganancia Insuficiente", Severity::Caution),
        at_most(1.15, "Ganancia Adecuada", Severity::Normal),
    ],
    top_label: "Ganancia Excesiva",
    top_severity: Severity::Risk,
};

/// Weight-for-age, weight-for-height and BMI-for-age percentiles.
pub const GROWTH_WEIGHT_PERCENTILE: BandTable = BandTable {
    id: "growth_weight_percentile",
    bands: &[
        below(3.0, "Muy bajo (<P3)", Severity::Severe),
        below(5.0, "Bajo (<P5)", Severity::Risk),
        below(85.0, "Normal", Severity::Normal),
        below(95.0, "Riesgo de sobrepeso", Severity::Caution),
    ],
    top_label: "Sobrepeso/Obesidad",
    top_severity: Severity::Risk,
};

pub const GROWTH_HEIGHT_PERCENTILE: BandTable = BandTable {
    id: "growth_height_percentile",
    bands: &[
        below(3.0, "Talla muy baja (<P3)", Severity::Severe),
        below(5.0, "Talla baja (<P5)", Severity::Risk),
    ],
    top_label: "Talla adecuada",
    top_severity: Severity::Normal,
};

pub const CALF_CIRCUMFERENCE: BandTable = BandTable {
    id: "calf_circumference",
    bands: &[below(31.0, "Riesgo de sarcopenia", Severity::Risk)],
    top_label: "Sin riesgo de sarcopenia",
    top_severity: Severity::Normal,
};

const ALL_TABLES: &[BandTable] = &[
    BMI,
    WAIST_HIP_MALE,
    WAIST_HIP_FEMALE,
    WAIST_HEIGHT,
    EGFR,
    ESTIMATED_AVERAGE_GLUCOSE,
    MUST_RISK,
    GESTATIONAL_GAIN,
    GROWTH_WEIGHT_PERCENTILE,
    GROWTH_HEIGHT_PERCENTILE,
    CALF_CIRCUMFERENCE,
];

/// Every table, for consistency checks.
pub fn all_tables() -> &'static [BandTable] {
    ALL_TABLES
}
