//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`] that applies the five
//! field transforms to every record of a dataset and records the outcome in
//! the audit log.
//!
//! # Examples
//!
//! ```no_run
//! use veil::anonymization::{AnonymizationEngine, AnonymizationConfig};
//! use veil::domain::{Dataset, Record};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//!
//! let dataset: Dataset = vec![Record::new(
//!     "John Doe",
//!     "john@example.com",
//!     "555-123-4567",
//!     "123 Main St\nSpringfield, IL 62701",
//!     "1980-05-12",
//! )]
//! .into_iter()
//! .collect();
//!
//! let (anonymized, summary) = engine.anonymize_dataset(dataset)?;
//! println!("Anonymized {} records", summary.total_records);
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    anonymizer::{
        extract_city, generalize_birthdate, hash_value, mask_email, mask_phone, ADDRESS_FALLBACK,
    },
    audit::AuditLogger,
    config::AnonymizationConfig,
    models::AnonymizedRecord,
    report::AnonymizationSummary,
};
use crate::domain::{Dataset, Field, Record};
use crate::log_transform_fallback;
use anyhow::{Context, Result};
use std::time::Instant;

/// Main anonymization engine
///
/// Transforms are applied in schema order: Name is hashed, Email and Phone
/// are masked, Address and Birthdate are generalized. A transform that
/// cannot handle its input yields a null or sentinel value for that field
/// and the record is still emitted.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    audit_logger: Option<AuditLogger>,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails or the audit log
    /// cannot be opened.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid anonymization configuration")?;

        let audit_logger = if config.audit.enabled && !config.dry_run {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            audit_logger,
        })
    }

    /// Anonymize a single record
    pub fn anonymize_record(&self, row_index: usize, record: &Record) -> AnonymizedRecord {
        let mut fallbacks = Vec::new();

        let name = hash_value(&record.name);

        let email = match record.email.as_deref() {
            Some(email) => {
                let masked = mask_email(email);
                if masked.is_none() {
                    log_transform_fallback!(row_index, Field::Email, "no '@' in email address");
                    fallbacks.push(Field::Email);
                }
                masked
            }
            None => {
                log_transform_fallback!(row_index, Field::Email, "email is null");
                fallbacks.push(Field::Email);
                None
            }
        };

        let phone = mask_phone(&record.phone);

        let address = match extract_city(&record.address) {
            Some(city) => city.to_string(),
            None => {
                log_transform_fallback!(row_index, Field::Address, "no city token in address");
                fallbacks.push(Field::Address);
                ADDRESS_FALLBACK.to_string()
            }
        };

        let birthdate = generalize_birthdate(&record.birthdate);

        AnonymizedRecord::new(
            row_index,
            Record {
                name,
                email,
                phone,
                address,
                birthdate,
            },
            fallbacks,
        )
    }

    /// Anonymize every record of a dataset
    ///
    /// Record order is preserved. Only audit log failures abort the batch.
    pub fn anonymize_dataset(&self, dataset: Dataset) -> Result<(Dataset, AnonymizationSummary)> {
        let start = Instant::now();
        let mut summary = AnonymizationSummary::new(self.config.sample_size);
        let mut output = Dataset::new(Vec::with_capacity(dataset.len()));

        for (row_index, record) in dataset.iter().enumerate() {
            let anonymized = self.anonymize_record(row_index, record);

            if let Some(ref logger) = self.audit_logger {
                logger
                    .log_record(record, &anonymized)
                    .with_context(|| format!("Failed to audit record {row_index}"))?;
            }

            summary.add_record(record, &anonymized);
            output.push(anonymized.record);
        }

        if let Some(ref logger) = self.audit_logger {
            logger.flush()?;
        }

        for field in Field::ALL {
            let count = summary.fallbacks_for(field);
            if count > 0 {
                summary.add_warning(format!(
                    "{count} record(s) fell back to a null or sentinel {field} value"
                ));
            }
        }

        summary.processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            records = summary.total_records,
            fallbacks = summary.total_fallbacks(),
            duration_ms = summary.processing_time_ms,
            "Dataset anonymized"
        );

        Ok((output, summary))
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
