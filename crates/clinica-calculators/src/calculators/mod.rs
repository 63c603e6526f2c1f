pub mod anthropometry;
pub mod diabetes;
pub mod energy;
pub mod geriatric;
pub mod lactation;
pub mod nutrition_support;
pub mod pediatrics;
pub mod pregnancy;
pub mod renal;
pub mod screening;

use clinica_core::models::result::CalculatorResult;

fn insufficient(required: &str) -> CalculatorResult {
    CalculatorResult::unavailable(format!("Datos insuficientes: se requiere {required}"))
}
