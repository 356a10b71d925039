//! Anonymization module for Veil
//!
//! This module rewrites the five columns of a personal-record dataset to
//! approximate GDPR compliance.
//!
//! # Architecture
//!
//! - **Anonymizer**: the fixed field transforms (hash, mask, generalize)
//! - **Engine**: applies the transforms record by record, absorbing failures
//! - **Audit**: structured audit log with hashed original values
//! - **Report**: per-run summary with fallback counts and samples
//!
//! # Usage
//!
//! ```no_run
//! use veil::adapters::csv_io::read_dataset;
//! use veil::anonymization::{AnonymizationEngine, AnonymizationConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let dataset = read_dataset("2_data/synthetic_data.csv")?;
//! let (anonymized, summary) = engine.anonymize_dataset(dataset)?;
//! # Ok(())
//! # }
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;
pub mod engine;
pub mod models;
pub mod report;

pub use config::AnonymizationConfig;
pub use engine::AnonymizationEngine;
pub use models::AnonymizedRecord;
pub use report::AnonymizationSummary;
