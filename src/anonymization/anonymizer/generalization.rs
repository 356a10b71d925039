//! Generalization transforms for addresses and birthdates

use super::leading_chars;

/// Returned when no city can be extracted from an address
pub const ADDRESS_FALLBACK: &str = "Unknown";

/// Extract the city token of an address
///
/// The city is the text before the first comma on the last line, trimmed.
/// Returns `None` when that token is blank.
pub fn extract_city(address: &str) -> Option<&str> {
    let last_line = address.split('\n').next_back().unwrap_or_default();
    let city = last_line.split(',').next().unwrap_or_default().trim();
    (!city.is_empty()).then_some(city)
}

/// Reduce an address to its city
///
/// `"123 Main St\nSpringfield, IL 62701"` becomes `"Springfield"`. Returns
/// [`ADDRESS_FALLBACK`] when [`extract_city`] finds no city.
pub fn generalize_address(address: &str) -> String {
    extract_city(address).unwrap_or(ADDRESS_FALLBACK).to_string()
}

/// Reduce a birthdate to its first four characters (the year)
pub fn generalize_birthdate(birthdate: &str) -> String {
    leading_chars(birthdate, 4).to_string()
}
