//! Domain models and types for Veil.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Record`], [`Dataset`], [`Field`]) for the fixed personal-record schema
//! - **Error types** ([`VeilError`])
//! - **Result type alias** ([`Result`])
//!
//! ```rust
//! use veil::domain::{Dataset, Field, Record};
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
//! assert_eq!(dataset.distinct_count(Field::Email), 1);
//! ```

pub mod errors;
pub mod record;
pub mod result;

pub use errors::VeilError;
pub use record::{Dataset, Field, Record};
pub use result::Result;
