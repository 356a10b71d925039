//! One-way hashing transform

use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest rendered as hex
pub const HASH_HEX_LEN: usize = 64;

/// Hash a value with SHA-256, returning the lowercase hex digest
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
