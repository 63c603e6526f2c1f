//! clinica-storage
//!
//! Persistence for saved calculations. S3 JSON objects in production, an
//! in-memory store for tests and local runs. Both implement
//! [`CalculationStore`], and a store scoped to one person implements the
//! engine's `CalculationLog`.

pub mod client;
pub mod error;
pub mod json;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use memory::MemoryCalculationStore;
pub use s3::S3CalculationStore;
pub use store::{CalculationStore, PersonLog};
