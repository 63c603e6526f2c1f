use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown log type: {0}")]
    InvalidLogType(String),
}
