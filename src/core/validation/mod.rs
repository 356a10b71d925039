//! Anonymization validation
//!
//! Checks that every transform was applied to every record and reports
//! basic cardinality statistics of the result.

pub mod checks;
pub mod report;
pub mod utility;
pub mod validate;

pub use checks::{check_anonymization, Check, CheckResult};
pub use report::ValidationReport;
pub use utility::UtilityMetrics;
pub use validate::{validate_dataset, validate_file};
