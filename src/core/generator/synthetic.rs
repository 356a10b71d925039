//! Fake identity record generation

use crate::config::GeneratorConfig;
use crate::domain::{Dataset, Record};
use chrono::{Duration, Months, NaiveDate, Utc};
use fake::faker::address::en::{
    BuildingNumber, CityPrefix, CitySuffix, StateAbbr, StreetName, ZipCode,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Date format of generated birthdates
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Produces synthetic PII records
pub struct SyntheticGenerator {
    num_records: usize,
    min_age: u32,
    max_age: u32,
    reference_date: NaiveDate,
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Create a generator from configuration
    ///
    /// Seeded when `config.seed` is set, otherwise seeded from entropy.
    pub fn new(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            num_records: config.num_records,
            min_age: config.min_age,
            max_age: config.max_age,
            reference_date: Utc::now().date_naive(),
            rng,
        }
    }

    /// Compute ages relative to a fixed date instead of today
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Number of records [`generate`](Self::generate) produces
    pub fn num_records(&self) -> usize {
        self.num_records
    }

    /// Generate the configured number of records
    pub fn generate(&mut self) -> Dataset {
        (0..self.num_records).map(|_| self.next_record()).collect()
    }

    /// Generate a single record
    pub fn next_record(&mut self) -> Record {
        let name: String = Name().fake_with_rng(&mut self.rng);
        let email: String = SafeEmail().fake_with_rng(&mut self.rng);
        let phone: String = PhoneNumber().fake_with_rng(&mut self.rng);
        let address = self.next_address();
        let birthdate = self.next_birthdate().format(BIRTHDATE_FORMAT).to_string();

        Record::new(name, email, phone, address, birthdate)
    }

    fn next_address(&mut self) -> String {
        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let city = self.next_city();
        let state: String = StateAbbr().fake_with_rng(&mut self.rng);
        let zip: String = ZipCode().fake_with_rng(&mut self.rng);

        format!("{building} {street}\n{city}, {state} {zip}")
    }

    /// City in one of the short en_US shapes, e.g. `"Lake Alexandrine"` or
    /// `"Runolfsdottirchester"`
    ///
    /// `CityName` may embed a full person name and overflow the generalized
    /// address bound, so the city is assembled from its parts.
    fn next_city(&mut self) -> String {
        let prefix: &str = CityPrefix().fake_with_rng(&mut self.rng);
        let suffix: &str = CitySuffix().fake_with_rng(&mut self.rng);
        let first: &str = FirstName().fake_with_rng(&mut self.rng);
        let last: &str = LastName().fake_with_rng(&mut self.rng);

        match self.rng.gen_range(0..4) {
            0 => format!("{prefix} {first}{suffix}"),
            1 => format!("{prefix} {first}"),
            2 => format!("{first}{suffix}"),
            _ => format!("{last}{suffix}"),
        }
    }

    /// Uniform date such that the person is between `min_age` and `max_age`
    fn next_birthdate(&mut self) -> NaiveDate {
        let latest = years_before(self.reference_date, self.min_age);
        let earliest = years_before(self.reference_date, self.max_age);

        let span = (latest - earliest).num_days().max(0);
        earliest + Duration::days(self.rng.gen_range(0..=span))
    }
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}
