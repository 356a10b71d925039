//! Masking transforms for email addresses and phone numbers

use super::leading_chars;

/// Replaces everything after the first two characters of an email local part
pub const EMAIL_MASK: &str = "****";

/// Replaces everything after the first three characters of a phone number
pub const PHONE_MASK: &str = "-***-****";

/// Mask the local part of an email address
///
/// Keeps the first two characters of the local part, appends [`EMAIL_MASK`]
/// and leaves the domain untouched. Splits on the first `@`, so any further
/// `@` characters stay in the domain. Returns `None` when there is no `@`.
///
/// ```
/// use veil::anonymization::anonymizer::mask_email;
///
/// assert_eq!(mask_email("john@example.com").as_deref(), Some("jo****@example.com"));
/// assert_eq!(mask_email("not-an-email"), None);
/// ```
pub fn mask_email(email: &str) -> Option<String> {
    let (local, domain) = email.split_once('@')?;
    Some(format!("{}{}@{}", leading_chars(local, 2), EMAIL_MASK, domain))
}

/// Mask a phone number, keeping the first three characters
pub fn mask_phone(phone: &str) -> String {
    format!("{}{}", leading_chars(phone, 3), PHONE_MASK)
}
