//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Veil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Veil - synthetic PII generation, GDPR anonymization and validation
#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(version, about, long_about = None)]
#[command(author = "Veil Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to veil.toml when present)
    #[arg(short, long, env = "VEIL_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VEIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a CSV file of synthetic identity records
    Generate(commands::generate::GenerateArgs),

    /// Anonymize a CSV file of identity records
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Validate an anonymized CSV file and write a report
    Validate(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Name of the log file the command writes to, if any
    pub fn log_file_name(&self) -> Option<&'static str> {
        match self {
            Self::Generate(_) => Some("generate_synthetic_data.log"),
            Self::Anonymize(_) => Some("anonymize_data_gdpr.log"),
            Self::Validate(_) => Some("validate_anonymization.log"),
            Self::Init(_) => None,
        }
    }
}
