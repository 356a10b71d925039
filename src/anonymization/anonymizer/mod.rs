//! Field transforms
//!
//! The five fixed, field-specific transforms applied by the anonymization
//! engine. Each one is a pure function of a single value. Transforms that can
//! fail on malformed input return a null (`None`) or a sentinel rather than
//! an error, so a bad row never aborts a batch.

pub mod generalization;
pub mod hashing;
pub mod masking;

pub use generalization::{
    extract_city, generalize_address, generalize_birthdate, ADDRESS_FALLBACK,
};
pub use hashing::{hash_value, HASH_HEX_LEN};
pub use masking::{mask_email, mask_phone, EMAIL_MASK, PHONE_MASK};

/// Take the first `n` characters of `value` (not bytes)
pub(crate) fn leading_chars(value: &str, n: usize) -> &str {
    match value.char_indices().nth(n) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
