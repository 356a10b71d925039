//! Audit logging module
//!
//! Provides structured audit logging for anonymization operations.

pub mod logger;

pub use logger::AuditLogger;
