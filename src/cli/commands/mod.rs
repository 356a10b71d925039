//! CLI command implementations
//!
//! Each command applies its flags on top of the loaded configuration and
//! returns the process exit code.

pub mod anonymize;
pub mod generate;
pub mod init;
pub mod validate;
