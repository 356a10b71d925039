//! Anonymization data models

pub mod anonymized_record;

pub use anonymized_record::AnonymizedRecord;
