//! Validation report structures
//!
//! This module defines the report produced by the validator and its text and
//! JSON renderings.

use super::checks::CheckResult;
use super::utility::UtilityMetrics;
use crate::domain::{Result, VeilError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validation report for one anonymized dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// When the validation was performed
    pub validated_at: DateTime<Utc>,

    /// File (or other source) that was validated
    pub source: String,

    /// Anonymization check results in report order
    pub checks: Vec<CheckResult>,

    /// Data utility metrics
    pub utility: UtilityMetrics,

    /// Duration of validation in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Create a new validation report
    pub fn new(source: impl Into<String>, checks: Vec<CheckResult>, utility: UtilityMetrics) -> Self {
        Self {
            validated_at: Utc::now(),
            source: source.into(),
            checks,
            utility,
            duration_ms: 0,
        }
    }

    /// Set the duration of validation
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// Check if all anonymization checks passed
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Checks that did not pass
    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Format the plain-text report written to disk and stdout
    pub fn format_text(&self) -> String {
        let mut text = String::from("Anonymization Validation Results:\n");
        for result in &self.checks {
            text.push_str(&format!("{}: {}\n", result.check.label(), result.status()));
        }

        text.push_str("\nData Utility Results:\n");
        for (label, value) in self.utility.entries() {
            text.push_str(&format!("{label}: {value}\n"));
        }

        text
    }

    /// Format a short operator summary of failing checks
    pub fn format_failures(&self) -> String {
        let mut summary = String::new();
        for (i, result) in self.failed_checks().enumerate() {
            summary.push_str(&format!(
                "  {}. {}: {} record(s) failed",
                i + 1,
                result.check.label(),
                result.failed_records
            ));
            if let Some(row) = result.first_failure {
                // data rows start on line 2 of the CSV
                summary.push_str(&format!(", first at CSV line {}", row + 2));
            }
            summary.push('\n');
        }
        summary
    }

    /// Format the report as JSON
    pub fn format_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the text report to a file, creating parent directories
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        write_creating_parent(path, &self.format_text())
    }

    /// Write the JSON report to a file, creating parent directories
    pub fn write_json_to_file(&self, path: &Path) -> Result<()> {
        write_creating_parent(path, &self.format_json()?)
    }
}

fn write_creating_parent(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            VeilError::Io(format!(
                "Failed to create report directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    std::fs::write(path, contents)
        .map_err(|e| VeilError::Io(format!("Failed to write report {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::checks::Check;

    fn passing() -> Vec<CheckResult> {
        Check::ALL
            .iter()
            .map(|check| CheckResult {
                check: *check,
                passed: true,
                failed_records: 0,
                first_failure: None,
            })
            .collect()
    }

    fn metrics() -> UtilityMetrics {
        UtilityMetrics {
            record_count: 100,
            unique_names: 100,
            unique_emails: 98,
        }
    }

    #[test]
    fn test_format_text_exact() {
        let report = ValidationReport::new("anonymized.csv", passing(), metrics());
        let expected = "Anonymization Validation Results:\n\
                        Name_Anonymized: Passed\n\
                        Email_Masked: Passed\n\
                        Phone_Masked: Passed\n\
                        Address_Generalized: Passed\n\
                        Birthdate_Generalized: Passed\n\
                        \n\
                        Data Utility Results:\n\
                        Record_Count: 100\n\
                        Unique_Names: 100\n\
                        Unique_Emails: 98\n";
        assert_eq!(report.format_text(), expected);
        assert!(report.is_success());
    }

    #[test]
    fn test_failed_check_reported() {
        let mut checks = passing();
        checks[2] = CheckResult {
            check: Check::PhoneMasked,
            passed: false,
            failed_records: 3,
            first_failure: Some(4),
        };
        let report = ValidationReport::new("anonymized.csv", checks, metrics());

        assert!(!report.is_success());
        assert!(report.format_text().contains("Phone_Masked: Failed\n"));
        assert_eq!(
            report.format_failures(),
            "  1. Phone_Masked: 3 record(s) failed, first at CSV line 6\n"
        );
    }

    #[test]
    fn test_write_to_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("3_results").join("validation_report.txt");
        let report = ValidationReport::new("anonymized.csv", passing(), metrics());

        report.write_to_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report.format_text());
    }

    #[test]
    fn test_json_round_trips_through_serde() {
        let report = ValidationReport::new("anonymized.csv", passing(), metrics());
        let json = report.format_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["utility"]["unique_emails"], 98);
        assert_eq!(value["checks"][0]["check"], "NameAnonymized");
    }
}
