//! Configuration management for Veil.
//!
//! Veil uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `VEIL_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use veil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("veil.toml")?;
//! println!("Records to generate: {}", config.generator.num_records);
//! println!("Report path: {}", config.validator.report_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [generator]
//! num_records = 100
//! seed = 42
//!
//! [anonymizer]
//! input_path = "2_data/synthetic_data.csv"
//! output_path = "2_data/anonymized_data_gdpr.csv"
//!
//! [anonymizer.audit]
//! log_path = "${VEIL_AUDIT_DIR}/anonymization_audit.log"
//!
//! [validator]
//! report_path = "3_results/validation_report.txt"
//!
//! [logging]
//! local_path = "5_logs"
//! ```
//!
//! The configuration sections are:
//!
//! - [`ApplicationConfig`] - log level
//! - [`GeneratorConfig`] - synthetic data generation
//! - [`AnonymizationConfig`](crate::anonymization::AnonymizationConfig) - anonymizer files, dry-run, audit
//! - [`ValidatorConfig`] - validator input and report paths
//! - [`LoggingConfig`] - log files

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, GeneratorConfig, LoggingConfig, ValidatorConfig, VeilConfig};
