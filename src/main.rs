// Veil - Synthetic PII Generation, GDPR Anonymization and Validation
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use veil::cli::{Cli, Commands};
use veil::config::{load_config_or_default, LoggingConfig};
use veil::log_error_with_context;
use veil::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // init writes the configuration file, so it must not require one
    if let Commands::Init(args) = &cli.command {
        let _guard = match init_logging(
            cli.log_level.as_deref().unwrap_or("info"),
            &console_only(),
            "veil.log",
        ) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                process::exit(5);
            }
        };
        process::exit(finish(args.execute()));
    }

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration");
            eprintln!("   Error: {e}");
            process::exit(e.exit_code());
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let log_file = cli.command.log_file_name().unwrap_or("veil.log");

    let guard = match init_logging(log_level, &config.logging, log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Veil - Synthetic PII Generation, GDPR Anonymization and Validation"
    );

    let result = match &cli.command {
        Commands::Generate(args) => args.execute(&config),
        Commands::Anonymize(args) => args.execute(&config),
        Commands::Validate(args) => args.execute(&config),
        Commands::Init(args) => args.execute(),
    };
    let exit_code = finish(result);

    // process::exit skips destructors, flush the file log first
    drop(guard);
    process::exit(exit_code);
}

fn finish(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(format!("{e:#}"), "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    }
}

fn console_only() -> LoggingConfig {
    LoggingConfig {
        local_enabled: false,
        ..LoggingConfig::default()
    }
}
