//! Domain error types
//!
//! This module defines the error hierarchy for Veil. Per-record transform
//! failures never surface here; they are absorbed by the anonymization engine
//! as null or sentinel values. Everything in this module is file-level or
//! configuration-level and aborts the current stage.

use thiserror::Error;

/// Main Veil error type
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors (missing input, bad path, permission denied)
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV parsing or writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Input table lacks one of the required columns
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl VeilError {
    /// Exit code reported to the operator for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            _ => 5,
        }
    }
}

impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

impl From<csv::Error> for VeilError {
    fn from(err: csv::Error) -> Self {
        VeilError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
