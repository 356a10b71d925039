//! Personal record and dataset types
//!
//! A [`Record`] is one row of the fixed five-column schema shared by the
//! generator, anonymizer and validator. A [`Dataset`] is an ordered sequence
//! of records.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The five columns of the personal-record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    Birthdate,
}

impl Field {
    /// All fields in schema order, which is also the anonymization order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::Birthdate,
    ];

    /// CSV header for this field
    pub fn header(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::Birthdate => "Birthdate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A single personal record
///
/// `email` is optional because masking an address without an `@` yields a
/// null, which is written to CSV as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Email")]
    pub email: Option<String>,

    #[serde(rename = "Phone")]
    pub phone: String,

    /// Multi-line postal address
    #[serde(rename = "Address")]
    pub address: String,

    /// Date string, `YYYY-MM-DD` when generated, `YYYY` once generalized
    #[serde(rename = "Birthdate")]
    pub birthdate: String,
}

impl Record {
    /// Create a record with a present email
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        birthdate: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: Some(email.into()),
            phone: phone.into(),
            address: address.into(),
            birthdate: birthdate.into(),
        }
    }

    /// Value of a field, `None` when null or empty
    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => self.name.as_str(),
            Field::Email => self.email.as_deref()?,
            Field::Phone => self.phone.as_str(),
            Field::Address => self.address.as_str(),
            Field::Birthdate => self.birthdate.as_str(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Ordered sequence of records sharing the personal-record schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from records
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of distinct non-null values in a column
    pub fn distinct_count(&self, field: Field) -> usize {
        self.records
            .iter()
            .filter_map(|r| r.value(field))
            .collect::<HashSet<_>>()
            .len()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Dataset {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            "John Doe",
            "john@example.com",
            "555-123-4567",
            "123 Main St\nSpringfield, IL 62701",
            "1980-05-12",
        )
    }

    #[test]
    fn test_field_headers_in_schema_order() {
        let headers: Vec<_> = Field::ALL.iter().map(|f| f.header()).collect();
        assert_eq!(headers, ["Name", "Email", "Phone", "Address", "Birthdate"]);
    }

    #[test]
    fn test_value_treats_null_and_empty_as_missing() {
        let mut record = sample();
        assert_eq!(record.value(Field::Email), Some("john@example.com"));

        record.email = None;
        assert_eq!(record.value(Field::Email), None);

        record.name = String::new();
        assert_eq!(record.value(Field::Name), None);
    }

    #[test]
    fn test_distinct_count_ignores_nulls() {
        let mut a = sample();
        let b = sample();
        let mut c = sample();
        c.email = Some("jane@example.com".to_string());
        a.email = None;

        let dataset: Dataset = vec![a, b, c].into_iter().collect();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.distinct_count(Field::Email), 2);
        assert_eq!(dataset.distinct_count(Field::Name), 1);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.distinct_count(Field::Name), 0);
    }
}
