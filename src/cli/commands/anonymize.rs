//! Anonymize command implementation
//!
//! This module implements the `anonymize` command, which reads a CSV file of
//! identity records, applies the field transforms and writes the result.

use crate::adapters::csv_io::{read_dataset, write_dataset};
use crate::anonymization::{AnonymizationConfig, AnonymizationEngine};
use crate::config::VeilConfig;
use crate::{log_error_with_context, log_stage_complete, log_stage_start};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input CSV path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Anonymize in memory and print a summary without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnonymizeArgs {
    /// Apply CLI overrides to the anonymizer configuration
    pub fn resolve(&self, config: &VeilConfig) -> AnonymizationConfig {
        let mut anonymizer = config.anonymizer.clone();

        if let Some(input) = &self.input {
            anonymizer.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            anonymizer.output_path = output.clone();
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            anonymizer.dry_run = true;
        }

        anonymizer
    }

    /// Execute the anonymize command
    pub fn execute(&self, config: &VeilConfig) -> anyhow::Result<i32> {
        let anonymizer_config = self.resolve(config);

        if let Err(e) = anonymizer_config.validate() {
            tracing::error!(error = %e, "Anonymizer configuration invalid");
            eprintln!("❌ Invalid anonymizer configuration: {e:#}");
            return Ok(2);
        }

        let input = anonymizer_config.input_path.clone();
        let output = anonymizer_config.output_path.clone();
        let dry_run = anonymizer_config.dry_run;

        log_stage_start!("anonymize", input.display());
        let start = Instant::now();

        if dry_run {
            eprintln!("🔍 DRY RUN MODE - No anonymized data will be written");
            eprintln!();
        }

        let dataset = match read_dataset(&input) {
            Ok(dataset) => dataset,
            Err(e) => {
                log_error_with_context!(e, "Failed to load input dataset");
                eprintln!("❌ Failed to load input data: {e}");
                return Ok(e.exit_code());
            }
        };

        eprintln!("🔒 Anonymizing {} records from {}", dataset.len(), input.display());

        let engine = AnonymizationEngine::new(anonymizer_config)
            .context("Failed to initialize anonymization engine")?;
        let (anonymized, summary) = engine.anonymize_dataset(dataset)?;

        if !dry_run {
            if let Err(e) = write_dataset(&output, &anonymized) {
                log_error_with_context!(e, "Failed to write anonymized data");
                eprintln!("❌ Failed to write anonymized data: {e}");
                return Ok(e.exit_code());
            }
        }

        if self.json {
            println!("{}", summary.format_json()?);
        } else {
            print!("{}", summary.format_console(dry_run));
        }

        log_stage_complete!("anonymize", anonymized.len(), start.elapsed());

        if dry_run {
            eprintln!("✅ Dry run completed, {} left untouched", output.display());
        } else {
            eprintln!("✅ Anonymized data written to {}", output.display());
        }

        Ok(0)
    }
}
