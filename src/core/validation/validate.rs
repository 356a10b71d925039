//! Validation entry points

use super::checks::check_anonymization;
use super::report::ValidationReport;
use super::utility::UtilityMetrics;
use crate::adapters::csv_io::read_dataset;
use crate::domain::{Dataset, Result};
use std::path::Path;
use std::time::Instant;

/// Validate an in-memory anonymized dataset
pub fn validate_dataset(dataset: &Dataset, source: &str) -> ValidationReport {
    let start = Instant::now();

    let checks = check_anonymization(dataset);
    let utility = UtilityMetrics::compute(dataset);

    let mut report = ValidationReport::new(source, checks, utility);
    report.set_duration(start.elapsed().as_millis() as u64);

    for result in &report.checks {
        tracing::info!(
            check = result.check.label(),
            status = result.status(),
            failed_records = result.failed_records,
            "Anonymization check"
        );
    }
    tracing::info!(
        record_count = utility.record_count,
        unique_names = utility.unique_names,
        unique_emails = utility.unique_emails,
        "Data utility metrics"
    );

    report
}

/// Load an anonymized CSV file and validate it
///
/// # Errors
///
/// Returns an error only for file-level problems; failing checks are
/// reported in the returned [`ValidationReport`].
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let dataset = read_dataset(path)?;
    Ok(validate_dataset(&dataset, &path.display().to_string()))
}
