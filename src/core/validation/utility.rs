//! Data utility metrics
//!
//! Coarse signal that the anonymized table is still usable for analysis:
//! it kept its rows and its identifying columns still distinguish records.

use crate::domain::{Dataset, Field};
use serde::{Deserialize, Serialize};

/// Cardinality statistics of an anonymized dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityMetrics {
    pub record_count: usize,
    /// Distinct non-null names (hashes)
    pub unique_names: usize,
    /// Distinct non-null masked emails
    pub unique_emails: usize,
}

impl UtilityMetrics {
    /// Compute metrics for a dataset
    pub fn compute(dataset: &Dataset) -> Self {
        Self {
            record_count: dataset.len(),
            unique_names: dataset.distinct_count(Field::Name),
            unique_emails: dataset.distinct_count(Field::Email),
        }
    }

    /// Metrics as `(label, value)` pairs in report order
    pub fn entries(&self) -> [(&'static str, usize); 3] {
        [
            ("Record_Count", self.record_count),
            ("Unique_Names", self.unique_names),
            ("Unique_Emails", self.unique_emails),
        ]
    }
}
