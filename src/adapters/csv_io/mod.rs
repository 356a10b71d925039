//! CSV dataset adapter
//!
//! Datasets are stored as CSV with a header row naming the five columns
//! `Name, Email, Phone, Address, Birthdate`. Column order on input does not
//! matter and extra columns are ignored. Multi-line addresses are quoted.

pub mod reader;
pub mod writer;

pub use reader::{read_dataset, read_dataset_from};
pub use writer::{write_dataset, write_dataset_to};
