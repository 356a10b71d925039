//! Configuration schema types
//!
//! Every section has defaults matching the conventional directory layout
//! (`2_data/`, `3_results/`, `5_logs/`), so an empty file is a valid config.

use crate::anonymization::AnonymizationConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Veil configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VeilConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Synthetic data generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Anonymizer settings
    #[serde(default)]
    pub anonymizer: AnonymizationConfig,

    /// Validator settings
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VeilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.generator.validate()?;
        self.anonymizer.validate().map_err(|e| format!("{e:#}"))?;
        self.validator.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Synthetic data generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of records to generate
    #[serde(default = "default_num_records")]
    pub num_records: usize,

    /// RNG seed for reproducible output (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Youngest generated age in years
    #[serde(default = "default_min_age")]
    pub min_age: u32,

    /// Oldest generated age in years
    #[serde(default = "default_max_age")]
    pub max_age: u32,

    /// CSV file receiving the generated records
    #[serde(default = "default_generator_output_path")]
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_records: default_num_records(),
            seed: None,
            min_age: default_min_age(),
            max_age: default_max_age(),
            output_path: default_generator_output_path(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.num_records == 0 {
            return Err("generator.num_records must be greater than 0".to_string());
        }
        if self.min_age >= self.max_age {
            return Err(format!(
                "generator.min_age ({}) must be less than generator.max_age ({})",
                self.min_age, self.max_age
            ));
        }
        if self.max_age > 150 {
            return Err(format!(
                "generator.max_age must be at most 150, got {}",
                self.max_age
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err("generator.output_path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Anonymized CSV file to validate
    #[serde(default = "default_validator_input_path")]
    pub input_path: PathBuf,

    /// Text report destination
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            input_path: default_validator_input_path(),
            report_path: default_report_path(),
        }
    }
}

impl ValidatorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.input_path.as_os_str().is_empty() {
            return Err("validator.input_path cannot be empty".to_string());
        }
        if self.report_path.as_os_str().is_empty() {
            return Err("validator.report_path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Directory holding the per-stage log files
    #[serde(default = "default_local_path")]
    pub local_path: PathBuf,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: default_true(),
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.as_os_str().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_num_records() -> usize {
    100
}

fn default_min_age() -> u32 {
    18
}

fn default_max_age() -> u32 {
    90
}

fn default_generator_output_path() -> PathBuf {
    PathBuf::from("2_data/synthetic_data.csv")
}

fn default_validator_input_path() -> PathBuf {
    PathBuf::from("2_data/anonymized_data_gdpr.csv")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("3_results/validation_report.txt")
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> PathBuf {
    PathBuf::from("5_logs")
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
