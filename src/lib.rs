// Veil - Synthetic PII Generation, GDPR Anonymization and Validation
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - Synthetic PII Generation, GDPR Anonymization and Validation
//!
//! Veil generates synthetic identity records, anonymizes them with a fixed
//! set of field transforms, and validates that every transform was applied.
//!
//! ## Overview
//!
//! Three independent stages share data only through CSV files:
//! - **Generating** fake records (name, email, phone, address, birthdate)
//! - **Anonymizing** them: the name is hashed, email and phone are masked,
//!   address and birthdate are generalized
//! - **Validating** the anonymized table and reporting data utility metrics
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Generator and validator stages
//! - [`anonymization`] - Field transforms, anonymization engine and audit log
//! - [`adapters`] - CSV dataset I/O
//! - [`domain`] - Records, datasets and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use veil::adapters::csv_io::{read_dataset, write_dataset};
//! use veil::anonymization::{AnonymizationConfig, AnonymizationEngine};
//! use veil::core::validation::validate_dataset;
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = read_dataset("2_data/synthetic_data.csv")?;
//!
//!     let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//!     let (anonymized, summary) = engine.anonymize_dataset(dataset)?;
//!     write_dataset("2_data/anonymized_data_gdpr.csv", &anonymized)?;
//!
//!     let report = validate_dataset(&anonymized, "2_data/anonymized_data_gdpr.csv");
//!     print!("{}", report.format_text());
//!     println!("{} fallbacks", summary.total_fallbacks());
//!     Ok(())
//! }
//! ```
//!
//! ## Field Transforms
//!
//! ```rust
//! use veil::anonymization::anonymizer::{
//!     generalize_address, generalize_birthdate, mask_email, mask_phone,
//! };
//!
//! assert_eq!(mask_email("john@example.com").as_deref(), Some("jo****@example.com"));
//! assert_eq!(mask_phone("555-123-4567"), "555-***-****");
//! assert_eq!(generalize_address("123 Main St\nSpringfield, IL 62701"), "Springfield");
//! assert_eq!(generalize_birthdate("1980-05-12"), "1980");
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`] with [`domain::VeilError`];
//! command handlers use `anyhow` and map errors to process exit codes.

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
