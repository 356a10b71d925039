//! Anonymized record data model

use crate::domain::{Field, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of anonymizing a single record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizedRecord {
    /// Zero-based position of the record in its dataset
    pub row_index: usize,
    /// Transformed record
    pub record: Record,
    /// Fields whose transform fell back to a null or sentinel value
    pub fallbacks: Vec<Field>,
    /// Timestamp of anonymization
    pub timestamp: DateTime<Utc>,
}

impl AnonymizedRecord {
    /// Create a new anonymized record
    pub fn new(row_index: usize, record: Record, fallbacks: Vec<Field>) -> Self {
        Self {
            row_index,
            record,
            fallbacks,
            timestamp: Utc::now(),
        }
    }

    /// Check if every transform produced a regular value
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty()
    }

    /// Check if a specific field fell back
    pub fn fell_back(&self, field: Field) -> bool {
        self.fallbacks.contains(&field)
    }
}
