//! Generate command implementation
//!
//! This module implements the `generate` command, which writes a CSV file of
//! synthetic identity records.

use crate::adapters::csv_io::write_dataset;
use crate::config::{GeneratorConfig, VeilConfig};
use crate::core::generator::SyntheticGenerator;
use crate::{log_error_with_context, log_stage_complete, log_stage_start};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of records to generate
    #[arg(short = 'n', long)]
    pub records: Option<usize>,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Apply CLI overrides to the generator configuration
    pub fn resolve(&self, config: &VeilConfig) -> GeneratorConfig {
        let mut generator = config.generator.clone();

        if let Some(records) = self.records {
            tracing::info!(records, "Overriding record count from CLI");
            generator.num_records = records;
        }
        if let Some(seed) = self.seed {
            generator.seed = Some(seed);
        }
        if let Some(output) = &self.output {
            generator.output_path = output.clone();
        }

        generator
    }

    /// Execute the generate command
    pub fn execute(&self, config: &VeilConfig) -> anyhow::Result<i32> {
        let generator_config = self.resolve(config);

        if let Err(e) = generator_config.validate() {
            tracing::error!(error = %e, "Generator configuration invalid");
            eprintln!("❌ Invalid generator configuration: {e}");
            return Ok(2);
        }

        let output = &generator_config.output_path;
        log_stage_start!("generate", output.display());

        println!(
            "🧪 Generating {} synthetic records",
            generator_config.num_records
        );

        let start = Instant::now();
        let dataset = SyntheticGenerator::new(&generator_config).generate();

        if let Err(e) = write_dataset(output, &dataset) {
            log_error_with_context!(e, "Failed to write synthetic data");
            eprintln!("❌ Failed to write synthetic data: {e}");
            return Ok(e.exit_code());
        }

        log_stage_complete!("generate", dataset.len(), start.elapsed());
        println!("✅ Synthetic data written to {}", output.display());

        Ok(0)
    }
}
