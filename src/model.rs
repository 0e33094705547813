//! Contact records as stored.

use chrono::NaiveDate;

use crate::schema::Field;

/// Display and criteria format for birth dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub office_phone: Option<String>,
    pub landline_phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// A contact in canonical form that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub office_phone: Option<String>,
    pub landline_phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl NewRecord {
    pub fn with_id(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            surname: self.surname,
            phone: self.phone,
            office_phone: self.office_phone,
            landline_phone: self.landline_phone,
            birth_date: self.birth_date,
        }
    }
}

/// Canonical values to overwrite on an existing record. `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub office_phone: Option<String>,
    pub landline_phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        *self == RecordPatch::default()
    }
}

impl Record {
    /// Applies every value set in `patch`.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(surname) = &patch.surname {
            self.surname = surname.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(office_phone) = &patch.office_phone {
            self.office_phone = Some(office_phone.clone());
        }
        if let Some(landline_phone) = &patch.landline_phone {
            self.landline_phone = Some(landline_phone.clone());
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = Some(birth_date);
        }
    }

    /// Returns the field rendered the way criteria values are written.
    pub fn field_value(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => Some(self.name.clone()),
            Field::Surname => Some(self.surname.clone()),
            Field::Phone => Some(self.phone.clone()),
            Field::OfficePhone => self.office_phone.clone(),
            Field::LandlinePhone => self.landline_phone.clone(),
            Field::BirthDate => self.birth_date.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
