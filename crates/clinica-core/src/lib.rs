//! clinica-core
//!
//! Pure domain types and S3 key conventions. No AWS SDK dependency.
//! This is the shared vocabulary between the calculation engine and the
//! collaborators that feed it records and persist its results.

pub mod error;
pub mod models;
pub mod s3_keys;
