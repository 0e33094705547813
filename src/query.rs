//! Filtering and derived read operations over stored records.
//!
//! Everything here works on records already loaded from storage, in storage
//! order. Operations that need "today" take it as a parameter.

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::credentials::Credentials;
use crate::model::Record;
use crate::normalizer::{canonical_phone, capitalize};
use crate::schema::Field;

/// Days ahead (inclusive) that count as an upcoming birthday.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Equality constraints on record fields, in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    values: BTreeMap<Field, String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint. The value must already be canonical.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Builds criteria from raw collected credentials.
    ///
    /// Absent values impose no constraint. Names are capitalized and phones
    /// prefixed so they compare against stored values; birth dates stay in
    /// `DD.MM.YYYY`.
    pub fn from_credentials(creds: &Credentials) -> Self {
        let values = creds
            .present()
            .map(|(field, raw)| {
                let value = match field {
                    Field::Name | Field::Surname => capitalize(raw),
                    Field::Phone | Field::OfficePhone => canonical_phone(raw),
                    Field::BirthDate | Field::LandlinePhone => raw.to_string(),
                };
                (field, value)
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every constraint equals the record's field exactly.
    pub fn matches(&self, record: &Record) -> bool {
        self.values
            .iter()
            .all(|(field, value)| record.field_value(*field).as_deref() == Some(value.as_str()))
    }
}

/// Outcome of a lookup meant to select a single record.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    None,
    One(&'a Record),
    /// Every matching record, for the caller to disambiguate.
    Many(Vec<&'a Record>),
}

/// Records matching all criteria. Empty criteria match everything.
pub fn filter<'a>(records: &'a [Record], criteria: &Criteria) -> Vec<&'a Record> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Like [`filter`], but classifies the result for single-target operations.
pub fn select_one<'a>(records: &'a [Record], criteria: &Criteria) -> Selection<'a> {
    let mut matches = filter(records, criteria);
    match matches.len() {
        0 => Selection::None,
        1 => Selection::One(matches.remove(0)),
        _ => Selection::Many(matches),
    }
}

/// Criteria for a name and surname as typed. Both are capitalized.
pub fn names_criteria(name: &str, surname: &str) -> Criteria {
    Criteria::new()
        .with(Field::Name, capitalize(name))
        .with(Field::Surname, capitalize(surname))
}

/// First record, in storage order, with the given name and surname.
///
/// Names are not unique; when several records share them the earliest one
/// wins. Only for reads: anything that changes a record goes through
/// [`select_one`] so the caller sees every match.
pub fn find_by_names<'a>(records: &'a [Record], name: &str, surname: &str) -> Option<&'a Record> {
    let criteria = names_criteria(name, surname);
    records.iter().find(|r| criteria.matches(r))
}

/// Records whose birthday falls on `day`.`month` in any year.
pub fn birthday_matches(records: &[Record], day: u32, month: u32) -> Vec<&Record> {
    records
        .iter()
        .filter(|r| {
            r.birth_date
                .is_some_and(|d| d.day() == day && d.month() == month)
        })
        .collect()
}

/// The birthday moved into `year`. Feb 29 becomes Feb 28 in common years.
fn birthday_in_year(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), birth.day() - 1))
}

/// Days from `today` until the next occurrence of the birthday.
///
/// The birthday is first moved into the current year; when it already
/// passed, next year's occurrence is used.
pub fn days_until_birthday(birth: NaiveDate, today: NaiveDate) -> Option<i64> {
    let this_year = birthday_in_year(birth, today.year())?;
    let diff = (this_year - today).num_days();
    if diff >= 0 {
        return Some(diff);
    }
    let next_year = birthday_in_year(birth, today.year() + 1)?;
    Some((next_year - today).num_days())
}

/// Records with a birthday within the next [`UPCOMING_WINDOW_DAYS`] days.
pub fn upcoming_birthdays(records: &[Record], today: NaiveDate) -> Vec<&Record> {
    records
        .iter()
        .filter(|r| {
            r.birth_date
                .and_then(|d| days_until_birthday(d, today))
                .is_some_and(|diff| (0..=UPCOMING_WINDOW_DAYS).contains(&diff))
        })
        .collect()
}

/// Age in whole years on `today`.
///
/// A birth date in the future yields the distance in whole years.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let (earlier, later) = if birth <= today {
        (birth, today)
    } else {
        (today, birth)
    };
    let mut years = later.year() - earlier.year();
    if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// How ages are compared against the requested number of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeComparison {
    Above,
    Below,
    Equals,
}

impl AgeComparison {
    pub const NAMES: [&'static str; 3] = ["above", "below", "equals"];

    pub fn holds(&self, age: u32, years: u32) -> bool {
        match self {
            AgeComparison::Above => age > years,
            AgeComparison::Below => age < years,
            AgeComparison::Equals => age == years,
        }
    }
}

impl FromStr for AgeComparison {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "above" => Ok(AgeComparison::Above),
            "below" => Ok(AgeComparison::Below),
            "equals" => Ok(AgeComparison::Equals),
            other => Err(format!("unknown comparison '{}'", other)),
        }
    }
}

impl fmt::Display for AgeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgeComparison::Above => "above",
            AgeComparison::Below => "below",
            AgeComparison::Equals => "equals",
        };
        f.write_str(name)
    }
}

/// Records whose age satisfies `comparison` against `years`. Records
/// without a birth date are left out.
pub fn compare_ages(
    records: &[Record],
    comparison: AgeComparison,
    years: u32,
    today: NaiveDate,
) -> Vec<&Record> {
    records
        .iter()
        .filter(|r| {
            r.birth_date
                .is_some_and(|d| comparison.holds(age_on(d, today), years))
        })
        .collect()
}

/// Field records can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Surname,
    BirthDate,
}

impl SortKey {
    pub const NAMES: [&'static str; 3] = ["name", "surname", "birth_date"];

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Surname => a.surname.cmp(&b.surname),
            SortKey::BirthDate => a.birth_date.cmp(&b.birth_date),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "surname" => Ok(SortKey::Surname),
            "birth_date" => Ok(SortKey::BirthDate),
            other => Err(format!("cannot sort by '{}'", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Name => "name",
            SortKey::Surname => "surname",
            SortKey::BirthDate => "birth_date",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub const NAMES: [&'static str; 2] = ["ascending", "descending"];
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Sorts records by `key`. Ties keep storage order.
pub fn sort_records(records: &[Record], key: SortKey, order: SortOrder) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Descending => sorted.sort_by(|a, b| key.compare(b, a)),
    }
    sorted
}
