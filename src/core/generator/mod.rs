//! Synthetic data generation

pub mod synthetic;

pub use synthetic::{SyntheticGenerator, BIRTHDATE_FORMAT};
