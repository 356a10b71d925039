//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Veil configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::config_template()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Generate data: veil generate");
                println!("  3. Anonymize it: veil anonymize");
                println!("  4. Validate the result: veil validate");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration with every option at its default
    pub fn config_template() -> &'static str {
        r#"# Veil Configuration File
# Synthetic PII generation, GDPR anonymization and validation
#
# Every value below is the built-in default. Any key can be overridden with
# an environment variable named VEIL_<SECTION>_<KEY>, for example
# VEIL_GENERATOR_NUM_RECORDS=500. Values may reference the environment with
# ${VAR} placeholders.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Generator
# ============================================================================
[generator]
# Number of synthetic records to produce
num_records = 100

# RNG seed for reproducible output (random when unset)
# seed = 42

# Age range of generated people, in years
min_age = 18
max_age = 90

output_path = "2_data/synthetic_data.csv"

# ============================================================================
# Anonymizer
# ============================================================================
[anonymizer]
input_path = "2_data/synthetic_data.csv"
output_path = "2_data/anonymized_data_gdpr.csv"

# Anonymize in memory and print a summary without writing output
dry_run = false

# Number of before/after samples shown in dry-run mode
sample_size = 5

[anonymizer.audit]
# One entry per record: row, fallbacks and hashes of the original values
enabled = true
log_path = "5_logs/anonymization_audit.log"

# JSON lines (true) or plain text (false)
json_format = true

# ============================================================================
# Validator
# ============================================================================
[validator]
input_path = "2_data/anonymized_data_gdpr.csv"
report_path = "3_results/validation_report.txt"

# ============================================================================
# Logging
# ============================================================================
[logging]
# One JSON log file per stage under local_path
local_enabled = true
local_path = "5_logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
    }
}
