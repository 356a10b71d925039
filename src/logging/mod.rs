//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console logs on stderr
//! - JSON-formatted local file logs with rotation, one file per stage
//! - Configurable log levels, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use veil::logging::init_logging;
//! use veil::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config, "veil.log").expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a pipeline stage
///
/// # Example
///
/// ```no_run
/// use veil::log_stage_start;
///
/// log_stage_start!("anonymize", "2_data/synthetic_data.csv");
/// ```
#[macro_export]
macro_rules! log_stage_start {
    ($stage:expr, $path:expr) => {
        tracing::info!(stage = $stage, path = %$path, "Starting stage");
    };
}

/// Log the completion of a pipeline stage
///
/// # Example
///
/// ```no_run
/// use veil::log_stage_complete;
/// use std::time::Duration;
///
/// log_stage_complete!("generate", 100, Duration::from_millis(25));
/// ```
#[macro_export]
macro_rules! log_stage_complete {
    ($stage:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            stage = $stage,
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Stage completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use veil::log_error_with_context;
/// use veil::domain::VeilError;
///
/// let error = VeilError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log a per-record transform that fell back to a null or sentinel value
///
/// # Example
///
/// ```no_run
/// use veil::log_transform_fallback;
/// use veil::domain::Field;
///
/// log_transform_fallback!(4, Field::Email, "no '@' in email address");
/// ```
#[macro_export]
macro_rules! log_transform_fallback {
    ($row:expr, $field:expr, $reason:expr) => {
        tracing::error!(
            row = $row,
            field = %$field,
            reason = $reason,
            "Transform failed, using fallback value"
        );
    };
}
