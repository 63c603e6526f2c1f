use std::env;

const DEFAULT_BUCKET: &str = "clinica";
const DEFAULT_REGION: &str = "us-east-1";

/// Runtime configuration read from the Lambda environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bucket: String,
    pub region: String,
}

impl ApiConfig {
    /// `CLINICA_BUCKET` and `AWS_REGION`, with defaults for local runs.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            bucket: non_empty("CLINICA_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        }
    }
}
