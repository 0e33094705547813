//! Conversion of validated credentials into the canonical stored form.

use chrono::NaiveDate;
use std::fmt;

use crate::credentials::Credentials;
use crate::error::{PhonebookError, Result};
use crate::model::{DATE_FORMAT, NewRecord, RecordPatch};
use crate::schema::Field;

/// Digit prepended to the ten-digit phone remainder.
pub const PHONE_PREFIX: &str = "8";

/// Non-fatal problem found while normalizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeWarning {
    /// No birth date was supplied.
    DateMissing,
    /// The birth date is not a real calendar date.
    DateInvalid(String),
}

impl fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeWarning::DateMissing => {
                write!(f, "Date is not specified. Record was added without it.")
            }
            NormalizeWarning::DateInvalid(raw) => {
                write!(f, "Date '{}' is incorrect. Record was added without it.", raw)
            }
        }
    }
}

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub record: NewRecord,
    pub warnings: Vec<NormalizeWarning>,
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Prefixes a ten-digit phone remainder with the leading marker.
pub fn canonical_phone(digits: &str) -> String {
    format!("{}{}", PHONE_PREFIX, digits)
}

/// Parses a `DD.MM.YYYY` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn required(creds: &Credentials, field: Field) -> Result<&str> {
    creds.get(field).ok_or(PhonebookError::MissingField(field))
}

fn birth_date(creds: &Credentials) -> (Option<NaiveDate>, Option<NormalizeWarning>) {
    match creds.get(Field::BirthDate) {
        None => (None, Some(NormalizeWarning::DateMissing)),
        Some(raw) => match parse_date(raw) {
            Some(date) => (Some(date), None),
            None => (None, Some(NormalizeWarning::DateInvalid(raw.to_string()))),
        },
    }
}

/// Converts a raw credential set into a new record.
///
/// Name, surname and phone must be present. A missing or unparseable birth
/// date never fails the conversion; the record is produced without it and a
/// warning is returned alongside.
pub fn normalize(creds: &Credentials) -> Result<Normalized> {
    let name = capitalize(required(creds, Field::Name)?);
    let surname = capitalize(required(creds, Field::Surname)?);
    let phone = canonical_phone(required(creds, Field::Phone)?);

    let (birth_date, warning) = birth_date(creds);
    let warnings: Vec<NormalizeWarning> = warning.into_iter().collect();
    for w in &warnings {
        log::info!("Normalizing {} {}: {}", name, surname, w);
    }

    Ok(Normalized {
        record: NewRecord {
            name,
            surname,
            phone,
            office_phone: creds.get(Field::OfficePhone).map(canonical_phone),
            landline_phone: creds.get(Field::LandlinePhone).map(str::to_string),
            birth_date,
        },
        warnings,
    })
}

/// Converts a partial credential set into a patch.
///
/// Only present fields end up in the patch. An unparseable birth date is
/// left out of the patch and reported as a warning.
pub fn normalize_patch(creds: &Credentials) -> (RecordPatch, Vec<NormalizeWarning>) {
    let mut warnings = Vec::new();

    let birth_date = match creds.get(Field::BirthDate) {
        Some(raw) => {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                log::info!("Dropping invalid birth date '{}' from update", raw);
                warnings.push(NormalizeWarning::DateInvalid(raw.to_string()));
            }
            parsed
        }
        None => None,
    };

    let patch = RecordPatch {
        name: creds.get(Field::Name).map(capitalize),
        surname: creds.get(Field::Surname).map(capitalize),
        phone: creds.get(Field::Phone).map(canonical_phone),
        office_phone: creds.get(Field::OfficePhone).map(canonical_phone),
        landline_phone: creds.get(Field::LandlinePhone).map(str::to_string),
        birth_date,
    };

    (patch, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{PatternGroup, extract};

    fn full_creds() -> Credentials {
        let mut creds = Credentials::from_pairs([
            (Field::Name, "anna"),
            (Field::Surname, "LEE"),
            (Field::BirthDate, "15.03.1990"),
            (Field::Phone, "9991234567"),
            (Field::LandlinePhone, "3451234567"),
        ]);
        creds.set(Field::OfficePhone, None);
        creds
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("anna"), "Anna");
        assert_eq!(capitalize("LEE"), "Lee");
        assert_eq!(capitalize("anna MARIA"), "Anna maria");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_is_idempotent() {
        for name in ["anna", "ANNA", "jean luc", "o_neil", "ab"] {
            let once = capitalize(name);
            assert_eq!(capitalize(&once), once);
        }
    }

    #[test]
    fn test_phone_roundtrip_through_validator() {
        for digits in ["9991234567", "0000000000", "1234567890"] {
            let canonical = canonical_phone(digits);
            assert_eq!(canonical.len(), 11);
            assert_eq!(
                extract(&canonical, PatternGroup::Phone).as_deref(),
                Some(digits)
            );
        }
    }

    #[test]
    fn test_normalize_full() {
        let creds = full_creds();
        let normalized = normalize(&creds).unwrap();

        assert_eq!(normalized.record.name, "Anna");
        assert_eq!(normalized.record.surname, "Lee");
        assert_eq!(normalized.record.phone, "89991234567");
        assert_eq!(normalized.record.office_phone, None);
        assert_eq!(normalized.record.landline_phone.as_deref(), Some("3451234567"));
        assert_eq!(
            normalized.record.birth_date,
            NaiveDate::from_ymd_opt(1990, 3, 15)
        );
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_normalize_does_not_touch_input() {
        let creds = full_creds();
        let before = creds.clone();
        let _ = normalize(&creds).unwrap();
        assert_eq!(creds, before);
    }

    #[test]
    fn test_calendar_invalid_date_falls_back() {
        let mut creds = full_creds();
        creds.set(Field::BirthDate, Some("31.02.2021".to_string()));

        let normalized = normalize(&creds).unwrap();
        assert_eq!(normalized.record.birth_date, None);
        assert_eq!(
            normalized.warnings,
            vec![NormalizeWarning::DateInvalid("31.02.2021".to_string())]
        );
    }

    #[test]
    fn test_missing_date_warns() {
        let mut creds = full_creds();
        creds.set(Field::BirthDate, None);

        let normalized = normalize(&creds).unwrap();
        assert_eq!(normalized.record.birth_date, None);
        assert_eq!(normalized.warnings, vec![NormalizeWarning::DateMissing]);
    }

    #[test]
    fn test_valid_range_dates_never_fail() {
        for day in 1..=31 {
            for month in 1..=12 {
                let mut creds = full_creds();
                creds.set(Field::BirthDate, Some(format!("{:02}.{:02}.2021", day, month)));
                let normalized = normalize(&creds).unwrap();
                match normalized.record.birth_date {
                    Some(date) => {
                        assert_eq!(date.format(DATE_FORMAT).to_string(), format!("{:02}.{:02}.2021", day, month));
                    }
                    None => assert_eq!(normalized.warnings.len(), 1),
                }
            }
        }
    }

    #[test]
    fn test_missing_required_field() {
        let creds = Credentials::from_pairs([(Field::Name, "anna"), (Field::Phone, "9991234567")]);
        assert!(matches!(
            normalize(&creds),
            Err(PhonebookError::MissingField(Field::Surname))
        ));
    }

    #[test]
    fn test_office_phone_prefixed() {
        let mut creds = full_creds();
        creds.set(Field::OfficePhone, Some("4951234567".to_string()));
        let normalized = normalize(&creds).unwrap();
        assert_eq!(normalized.record.office_phone.as_deref(), Some("84951234567"));
    }

    #[test]
    fn test_normalize_patch() {
        let creds = Credentials::from_pairs([
            (Field::Surname, "kim"),
            (Field::BirthDate, "30.02.2000"),
            (Field::OfficePhone, "4951234567"),
        ]);
        let (patch, warnings) = normalize_patch(&creds);

        assert_eq!(patch.name, None);
        assert_eq!(patch.surname.as_deref(), Some("Kim"));
        assert_eq!(patch.office_phone.as_deref(), Some("84951234567"));
        assert_eq!(patch.birth_date, None);
        assert_eq!(warnings.len(), 1);
    }
}
