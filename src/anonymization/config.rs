//! Anonymization configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Anonymizer stage configuration
///
/// The transform set itself is fixed; only file locations, dry-run and audit
/// behaviour are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// CSV file with the synthetic records to anonymize
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// CSV file receiving the anonymized records
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Dry-run mode (anonymize in memory and report, but don't write output)
    #[serde(default)]
    pub dry_run: bool,

    /// Maximum number of before/after samples kept in the summary
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("2_data/synthetic_data.csv")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("2_data/anonymized_data_gdpr.csv")
}

fn default_sample_size() -> usize {
    5
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            dry_run: false,
            sample_size: default_sample_size(),
            audit: AuditConfig::default(),
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            anyhow::bail!("anonymizer.input_path cannot be empty");
        }
        if self.output_path.as_os_str().is_empty() {
            anyhow::bail!("anonymizer.output_path cannot be empty");
        }
        if self.input_path == self.output_path {
            anyhow::bail!(
                "anonymizer.output_path must differ from input_path: {}",
                self.input_path.display()
            );
        }

        self.audit.validate().context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_ANONYMIZER_INPUT_PATH") {
            self.input_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VEIL_ANONYMIZER_OUTPUT_PATH") {
            self.output_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VEIL_ANONYMIZER_DRY_RUN") {
            self.dry_run = val
                .parse()
                .context("Invalid VEIL_ANONYMIZER_DRY_RUN value")?;
        }

        if let Ok(val) = std::env::var("VEIL_ANONYMIZER_SAMPLE_SIZE") {
            self.sample_size = val
                .parse()
                .context("Invalid VEIL_ANONYMIZER_SAMPLE_SIZE value")?;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("5_logs/anonymization_audit.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if self.log_path.as_os_str().is_empty() {
                anyhow::bail!("anonymizer.audit.log_path cannot be empty when audit is enabled");
            }
            if self.log_path.is_dir() {
                anyhow::bail!(
                    "anonymizer.audit.log_path points to a directory: {}",
                    self.log_path.display()
                );
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_ANONYMIZER_AUDIT_ENABLED") {
            self.enabled = val
                .parse()
                .context("Invalid VEIL_ANONYMIZER_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("VEIL_ANONYMIZER_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VEIL_ANONYMIZER_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid VEIL_ANONYMIZER_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}
