//! Validate command implementation
//!
//! This module implements the `validate` command, which checks an anonymized
//! CSV file and writes the validation report.
//!
//! The report goes to stdout as well as to the report file, so operator
//! messages from this command are written to stderr.

use crate::config::{ValidatorConfig, VeilConfig};
use crate::core::validation::validate_file;
use crate::{log_error_with_context, log_stage_complete, log_stage_start};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Anonymized CSV path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Text report path
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Print the report as JSON and write a .json copy next to the text report
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Apply CLI overrides to the validator configuration
    pub fn resolve(&self, config: &VeilConfig) -> ValidatorConfig {
        let mut validator = config.validator.clone();

        if let Some(input) = &self.input {
            validator.input_path = input.clone();
        }
        if let Some(report) = &self.report {
            validator.report_path = report.clone();
        }

        validator
    }

    /// Execute the validate command
    ///
    /// Returns `1` when the report was produced but at least one check failed.
    pub fn execute(&self, config: &VeilConfig) -> anyhow::Result<i32> {
        let validator_config = self.resolve(config);

        if let Err(e) = validator_config.validate() {
            tracing::error!(error = %e, "Validator configuration invalid");
            eprintln!("❌ Invalid validator configuration: {e}");
            return Ok(2);
        }

        let input = &validator_config.input_path;
        let report_path = &validator_config.report_path;

        log_stage_start!("validate", input.display());
        let start = Instant::now();

        eprintln!("🔍 Validating anonymized data: {}", input.display());

        let report = match validate_file(input) {
            Ok(report) => report,
            Err(e) => {
                log_error_with_context!(e, "Failed to load anonymized dataset");
                eprintln!("❌ Failed to load anonymized data: {e}");
                return Ok(e.exit_code());
            }
        };

        if let Err(e) = report.write_to_file(report_path) {
            log_error_with_context!(e, "Failed to write validation report");
            eprintln!("❌ Failed to write validation report: {e}");
            return Ok(e.exit_code());
        }

        if self.json {
            let json_path = report_path.with_extension("json");
            if let Err(e) = report.write_json_to_file(&json_path) {
                log_error_with_context!(e, "Failed to write JSON validation report");
                eprintln!("❌ Failed to write JSON validation report: {e}");
                return Ok(e.exit_code());
            }
            println!("{}", report.format_json()?);
        } else {
            print!("{}", report.format_text());
        }

        log_stage_complete!("validate", report.utility.record_count, start.elapsed());
        eprintln!();
        eprintln!("📄 Report written to {}", report_path.display());

        if report.is_success() {
            eprintln!("✅ All anonymization checks passed");
            Ok(0)
        } else {
            tracing::warn!(
                failed = report.failed_checks().count(),
                "Anonymization checks failed"
            );
            eprintln!("⚠️  Anonymization checks failed:");
            eprint!("{}", report.format_failures());
            Ok(1)
        }
    }
}
