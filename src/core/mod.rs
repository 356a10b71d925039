//! Core pipeline stages for Veil.
//!
//! # Modules
//!
//! - [`generator`] - Synthetic identity records built with the `fake` crate
//! - [`validation`] - Structural checks and utility metrics on anonymized data
//!
//! Anonymization itself lives in [`crate::anonymization`].
//!
//! # Pipeline
//!
//! The stages are independent and only share CSV files:
//!
//! 1. **Generate**: write synthetic records to `2_data/synthetic_data.csv`
//! 2. **Anonymize**: hash, mask and generalize into `2_data/anonymized_data_gdpr.csv`
//! 3. **Validate**: check every transform was applied and write `3_results/validation_report.txt`
//!
//! # Example
//!
//! ```rust
//! use veil::config::GeneratorConfig;
//! use veil::core::generator::SyntheticGenerator;
//! use veil::core::validation::validate_dataset;
//!
//! let config = GeneratorConfig { num_records: 5, seed: Some(1), ..Default::default() };
//! let raw = SyntheticGenerator::new(&config).generate();
//!
//! // Raw records fail every anonymization check
//! let report = validate_dataset(&raw, "in-memory");
//! assert!(!report.is_success());
//! assert_eq!(report.utility.record_count, 5);
//! ```

pub mod generator;
pub mod validation;
