//! ADAG HbA1c to estimated average glucose conversion.

/// eAG in mg/dL.
pub fn estimated_average_glucose(hba1c_percent: f64) -> f64 {
    28.7 * hba1c_percent - 46.7
}

/// eAG in mmol/L.
pub fn estimated_average_glucose_mmol(hba1c_percent: f64) -> f64 {
    1.59 * hba1c_percent - 2.59
}
