//! S3 key/path conventions.
//!
//! Pure string functions. These define the canonical layout of saved
//! calculation records in the Clinica bucket.

use uuid::Uuid;

pub const CALCULATIONS_PREFIX: &str = "calculations/";

pub fn person_calculations_prefix(person_id: Uuid) -> String {
    format!("calculations/{person_id}/")
}

pub fn calculation(person_id: Uuid, id: Uuid) -> String {
    format!("calculations/{person_id}/{id}.json")
}
