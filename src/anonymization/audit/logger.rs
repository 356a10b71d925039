//! Audit logger for anonymization operations

use crate::anonymization::anonymizer::hash_value;
use crate::anonymization::models::AnonymizedRecord;
use crate::domain::Record;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    row_index: usize,
    fallbacks: Vec<String>,
    /// SHA-256 of the original email (never log plaintext PII)
    email_hash: Option<String>,
    /// SHA-256 of the original phone number
    phone_hash: String,
}

/// Audit logger for anonymization operations
///
/// Appends one entry per anonymized record. Original values only ever
/// appear as SHA-256 hashes.
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    writer: Mutex<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create audit log directory: {}", parent.display())
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open audit log: {}", log_path.display()))?;

        Ok(Self {
            log_path,
            json_format,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Path of the audit log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Log an anonymized record alongside the original it came from
    pub fn log_record(&self, original: &Record, anonymized: &AnonymizedRecord) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: anonymized.timestamp.to_rfc3339(),
            row_index: anonymized.row_index,
            fallbacks: anonymized
                .fallbacks
                .iter()
                .map(|f| f.header().to_string())
                .collect(),
            email_hash: original.email.as_deref().map(hash_value),
            phone_hash: hash_value(&original.phone),
        };

        self.write_entry(&entry)
    }

    /// Flush buffered entries to disk
    pub fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("Audit log writer lock poisoned"))?;
        writer.flush().context("Failed to flush audit log")
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("Audit log writer lock poisoned"))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(writer, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let fallbacks = if entry.fallbacks.is_empty() {
                "none".to_string()
            } else {
                entry.fallbacks.join(",")
            };
            writeln!(
                writer,
                "[{}] Row: {} | Fallbacks: {} | Email hash: {} | Phone hash: {}",
                entry.timestamp,
                entry.row_index,
                fallbacks,
                entry.email_hash.as_deref().unwrap_or("none"),
                entry.phone_hash
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

impl Drop for AuditLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;
    use tempfile::tempdir;

    fn original() -> Record {
        Record::new(
            "John Doe",
            "john@example.com",
            "555-123-4567",
            "123 Main St\nSpringfield, IL 62701",
            "1980-05-12",
        )
    }

    fn anonymized() -> AnonymizedRecord {
        let record = Record::new(
            hash_value("John Doe"),
            "jo****@example.com",
            "555-***-****",
            "Springfield",
            "1980",
        );
        AnonymizedRecord::new(0, record, vec![])
    }

    #[test]
    fn test_audit_logger_creates_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("audit.log");

        let logger = AuditLogger::new(log_path.clone(), true).unwrap();
        assert_eq!(logger.path(), log_path.as_path());
        assert!(log_path.exists());
    }

    #[test]
    fn test_log_record_json_has_no_plaintext_pii() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        logger.log_record(&original(), &anonymized()).unwrap();
        logger.flush().unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(entry["row_index"], 0);
        assert_eq!(entry["email_hash"], hash_value("john@example.com"));
        assert!(!content.contains("john@example.com"));
        assert!(!content.contains("555-123-4567"));
    }

    #[test]
    fn test_log_record_plain_text_lists_fallbacks() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false).unwrap();

        let mut record = anonymized();
        record.fallbacks = vec![Field::Email, Field::Address];
        logger.log_record(&original(), &record).unwrap();
        drop(logger);

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Row: 0"));
        assert!(content.contains("Fallbacks: Email,Address"));
        assert!(content.contains(&format!("Email hash: {}", hash_value("john@example.com"))));
        assert!(content.contains(&format!("Phone hash: {}", hash_value("555-123-4567"))));
        assert!(!content.contains("john@example.com"));
        assert!(!content.contains("555-123-4567"));
    }

    #[test]
    fn test_log_record_plain_text_null_email() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false).unwrap();

        let mut source = original();
        source.email = None;
        logger.log_record(&source, &anonymized()).unwrap();
        drop(logger);

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Email hash: none | Phone hash: "));
    }
}
