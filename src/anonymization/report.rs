//! Anonymization run summary
//!
//! Collects per-field fallback counts, a handful of before/after samples and
//! timing for one anonymizer run. Printed after every run and used as the
//! only output in dry-run mode.

use crate::anonymization::models::AnonymizedRecord;
use crate::domain::{Field, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Longest prefix of an original value shown in samples
const SAMPLE_PREVIEW_CHARS: usize = 6;

/// Summary of one anonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationSummary {
    /// Total records anonymized
    pub total_records: usize,

    /// Total field values rewritten (five per record)
    pub fields_transformed: usize,

    /// Records where every transform produced a regular value
    pub clean_records: usize,

    /// Fallbacks (null or sentinel values) by field
    pub fallbacks_by_field: HashMap<Field, usize>,

    /// Sample anonymizations (before/after examples)
    pub samples: Vec<AnonymizationSample>,

    /// Warnings raised during the run
    pub warnings: Vec<String>,

    /// Total processing time (ms)
    pub processing_time_ms: u64,

    #[serde(skip)]
    sample_limit: usize,
}

/// Sample anonymization showing before/after
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationSample {
    pub row_index: usize,
    pub field: Field,
    /// Original value (truncated for privacy)
    pub original: String,
    pub anonymized: String,
}

impl AnonymizationSummary {
    /// Create an empty summary keeping at most `sample_limit` records' samples
    pub fn new(sample_limit: usize) -> Self {
        Self {
            total_records: 0,
            fields_transformed: 0,
            clean_records: 0,
            fallbacks_by_field: HashMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            processing_time_ms: 0,
            sample_limit,
        }
    }

    /// Add the outcome of one record
    pub fn add_record(&mut self, original: &Record, anonymized: &AnonymizedRecord) {
        self.total_records += 1;
        self.fields_transformed += Field::ALL.len();

        if anonymized.is_clean() {
            self.clean_records += 1;
        }
        for field in &anonymized.fallbacks {
            *self.fallbacks_by_field.entry(*field).or_insert(0) += 1;
        }

        if anonymized.row_index < self.sample_limit {
            for field in Field::ALL {
                self.samples.push(AnonymizationSample {
                    row_index: anonymized.row_index,
                    field,
                    original: preview(original.value(field)),
                    anonymized: anonymized
                        .record
                        .value(field)
                        .unwrap_or("<null>")
                        .to_string(),
                });
            }
        }
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Total number of fallbacks across all fields
    pub fn total_fallbacks(&self) -> usize {
        self.fallbacks_by_field.values().sum()
    }

    /// Fallback count for one field
    pub fn fallbacks_for(&self, field: Field) -> usize {
        self.fallbacks_by_field.get(&field).copied().unwrap_or(0)
    }

    /// Format summary for console output
    pub fn format_console(&self, dry_run: bool) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        if dry_run {
            output.push_str("               ANONYMIZATION DRY-RUN SUMMARY                   \n");
        } else {
            output.push_str("                  ANONYMIZATION SUMMARY                        \n");
        }
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Records Anonymized:      {}\n",
            self.total_records
        ));
        output.push_str(&format!(
            "  Fields Transformed:      {}\n",
            self.fields_transformed
        ));
        output.push_str(&format!(
            "  Records Without Fallback: {}\n",
            self.clean_records
        ));
        output.push_str(&format!(
            "  Processing Time:         {} ms\n",
            self.processing_time_ms
        ));
        output.push('\n');

        if self.total_fallbacks() > 0 {
            output.push_str("🔍 FALLBACKS BY FIELD\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for field in Field::ALL {
                let count = self.fallbacks_for(field);
                if count > 0 {
                    output.push_str(&format!("  {:30} {:>5}\n", field.header(), count));
                }
            }
            output.push('\n');
        }

        if dry_run && !self.samples.is_empty() {
            output.push_str("📝 SAMPLE ANONYMIZATIONS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            let mut current_row = None;
            for sample in &self.samples {
                if current_row != Some(sample.row_index) {
                    output.push_str(&format!("\n  Row #{}\n", sample.row_index + 1));
                    current_row = Some(sample.row_index);
                }
                output.push_str(&format!(
                    "    {:10} \"{}\" -> \"{}\"\n",
                    sample.field.header(),
                    sample.original,
                    sample.anonymized
                ));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {}\n", warning));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format summary as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for AnonymizationSummary {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Truncate an original value so samples never show it in full
fn preview(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "<null>".to_string();
    };
    let first_line = value.lines().next().unwrap_or_default();
    let shown: String = first_line.chars().take(SAMPLE_PREVIEW_CHARS).collect();
    if shown.chars().count() < value.chars().count() {
        format!("{shown}...")
    } else {
        shown
    }
}
