pub mod calculations;
pub mod calculators;
pub mod health;
pub mod vitals;
