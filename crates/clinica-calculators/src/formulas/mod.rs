//! Formula library: one pure function per published clinical formula.
//!
//! Functions here take already-validated numbers. Guarding against missing
//! or out-of-domain inputs is the calculators' job, via [`positive`].

pub mod anthropometry;
pub mod energy;
pub mod glucose;
pub mod growth;
pub mod growth_reference;
pub mod infusion;
pub mod populations;
pub mod renal;
pub mod screening;

/// Keep a measurement only when it is finite and strictly positive.
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
