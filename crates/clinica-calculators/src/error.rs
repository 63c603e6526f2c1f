use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("invalid input for calculator '{calculator_key}': {message}")]
    InvalidInput {
        calculator_key: String,
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
