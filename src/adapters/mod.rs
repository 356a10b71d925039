//! External system integrations for Veil.
//!
//! - [`csv_io`] - CSV files holding personal-record datasets
//!
//! The anonymization and validation code only sees [`Dataset`](crate::domain::Dataset)
//! values; everything about file formats and paths stays in this layer.

pub mod csv_io;
