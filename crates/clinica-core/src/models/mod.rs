pub mod calculation;
pub mod record;
pub mod result;
pub mod vitals;
