//! Structural checks on anonymized columns
//!
//! Each check is a predicate on a single field value that must hold for
//! every record. A null value is checked as the empty string.

use crate::anonymization::anonymizer::{EMAIL_MASK, HASH_HEX_LEN};
use crate::domain::{Dataset, Field};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generalized addresses must be shorter than this many characters
pub const ADDRESS_MAX_CHARS: usize = 30;

/// Marker a masked phone number must contain
pub const PHONE_MASK_MARKER: &str = "***";

/// Length of a generalized birthdate (a year)
pub const BIRTHDATE_CHARS: usize = 4;

/// The five anonymization checks, one per field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Check {
    NameAnonymized,
    EmailMasked,
    PhoneMasked,
    AddressGeneralized,
    BirthdateGeneralized,
}

impl Check {
    /// All checks in report order
    pub const ALL: [Check; 5] = [
        Check::NameAnonymized,
        Check::EmailMasked,
        Check::PhoneMasked,
        Check::AddressGeneralized,
        Check::BirthdateGeneralized,
    ];

    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::NameAnonymized => "Name_Anonymized",
            Self::EmailMasked => "Email_Masked",
            Self::PhoneMasked => "Phone_Masked",
            Self::AddressGeneralized => "Address_Generalized",
            Self::BirthdateGeneralized => "Birthdate_Generalized",
        }
    }

    /// Field the check inspects
    pub fn field(&self) -> Field {
        match self {
            Self::NameAnonymized => Field::Name,
            Self::EmailMasked => Field::Email,
            Self::PhoneMasked => Field::Phone,
            Self::AddressGeneralized => Field::Address,
            Self::BirthdateGeneralized => Field::Birthdate,
        }
    }

    /// Whether a single value satisfies the check
    pub fn holds_for(&self, value: &str) -> bool {
        match self {
            Self::NameAnonymized => value.chars().count() == HASH_HEX_LEN,
            Self::EmailMasked => value.contains(EMAIL_MASK),
            Self::PhoneMasked => value.contains(PHONE_MASK_MARKER),
            Self::AddressGeneralized => value.chars().count() < ADDRESS_MAX_CHARS,
            Self::BirthdateGeneralized => value.chars().count() == BIRTHDATE_CHARS,
        }
    }

    /// Run the check over every record of a dataset
    pub fn run(&self, dataset: &Dataset) -> CheckResult {
        let field = self.field();
        let failing_rows: Vec<usize> = dataset
            .iter()
            .enumerate()
            .filter(|(_, record)| !self.holds_for(record.value(field).unwrap_or_default()))
            .map(|(index, _)| index)
            .collect();

        CheckResult {
            check: *self,
            passed: failing_rows.is_empty(),
            failed_records: failing_rows.len(),
            first_failure: failing_rows.first().copied(),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one check over a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: Check,
    /// True when every record satisfies the predicate
    pub passed: bool,
    /// Number of records violating the predicate
    pub failed_records: usize,
    /// Zero-based index of the first violating record
    pub first_failure: Option<usize>,
}

impl CheckResult {
    /// `Passed` or `Failed`
    pub fn status(&self) -> &'static str {
        if self.passed {
            "Passed"
        } else {
            "Failed"
        }
    }
}

/// Run all five checks over a dataset
pub fn check_anonymization(dataset: &Dataset) -> Vec<CheckResult> {
    Check::ALL.iter().map(|check| check.run(dataset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use test_case::test_case;

    fn anonymized() -> Record {
        Record::new(
            "a".repeat(64),
            "jo****@example.com",
            "555-***-****",
            "Springfield",
            "1980",
        )
    }

    #[test_case(Check::NameAnonymized, "a".repeat(64).as_str(), true ; "name digest length")]
    #[test_case(Check::NameAnonymized, "John Doe", false ; "plain name")]
    #[test_case(Check::EmailMasked, "jo****@example.com", true ; "masked email")]
    #[test_case(Check::EmailMasked, "", false ; "null email")]
    #[test_case(Check::PhoneMasked, "555-***-****", true ; "masked phone")]
    #[test_case(Check::PhoneMasked, "555-123-4567", false ; "plain phone")]
    #[test_case(Check::AddressGeneralized, "Springfield", true ; "city")]
    #[test_case(Check::AddressGeneralized, "123 Main Street, Springfield IL", false ; "full address")]
    #[test_case(Check::BirthdateGeneralized, "1980", true ; "year")]
    #[test_case(Check::BirthdateGeneralized, "1980-05-12", false ; "full date")]
    fn test_holds_for(check: Check, value: &str, expected: bool) {
        assert_eq!(check.holds_for(value), expected);
    }

    #[test]
    fn test_all_checks_pass_on_anonymized_data() {
        let dataset = Dataset::new(vec![anonymized(), anonymized()]);
        let results = check_anonymization(&dataset);

        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.passed));
        assert!(results.iter().all(|r| r.status() == "Passed"));
    }

    #[test]
    fn test_single_bad_record_fails_check() {
        let mut bad = anonymized();
        bad.email = None;
        let dataset = Dataset::new(vec![anonymized(), bad, anonymized()]);

        let result = Check::EmailMasked.run(&dataset);
        assert!(!result.passed);
        assert_eq!(result.status(), "Failed");
        assert_eq!(result.failed_records, 1);
        assert_eq!(result.first_failure, Some(1));

        assert!(Check::NameAnonymized.run(&dataset).passed);
    }

    #[test]
    fn test_empty_dataset_passes_vacuously() {
        let results = check_anonymization(&Dataset::default());
        assert!(results.iter().all(|r| r.passed && r.failed_records == 0));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Check::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Name_Anonymized",
                "Email_Masked",
                "Phone_Masked",
                "Address_Generalized",
                "Birthdate_Generalized"
            ]
        );
    }
}
