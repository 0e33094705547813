//! Credential schema: the fields of a contact record, the prompt shown for
//! each and the pattern group that validates it.

use std::fmt;
use std::str::FromStr;

use crate::validator::PatternGroup;

/// Identifier of a record field. Ordering follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Surname,
    BirthDate,
    Phone,
    OfficePhone,
    LandlinePhone,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Surname,
        Field::BirthDate,
        Field::Phone,
        Field::OfficePhone,
        Field::LandlinePhone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::BirthDate => "birth_date",
            Field::Phone => "phone",
            Field::OfficePhone => "office_phone",
            Field::LandlinePhone => "landline_phone",
        }
    }

    /// The descriptor for this field.
    pub fn descriptor(&self) -> &'static FieldDescriptor {
        // FIELDS is laid out in the same order as the enum.
        &FIELDS[*self as usize]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// Immutable description of one field.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    /// Label shown when prompting for the field.
    pub label: &'static str,
    pub group: PatternGroup,
}

/// Every field of a record, in declaration order.
pub static FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor {
        field: Field::Name,
        label: "NAME",
        group: PatternGroup::Name,
    },
    FieldDescriptor {
        field: Field::Surname,
        label: "SURNAME",
        group: PatternGroup::Name,
    },
    FieldDescriptor {
        field: Field::BirthDate,
        label: "DATE",
        group: PatternGroup::Date,
    },
    FieldDescriptor {
        field: Field::Phone,
        label: "PERSONAL PHONE NUMBER",
        group: PatternGroup::Phone,
    },
    FieldDescriptor {
        field: Field::OfficePhone,
        label: "OFFICE PHONE NUMBER",
        group: PatternGroup::Phone,
    },
    FieldDescriptor {
        field: Field::LandlinePhone,
        label: "LANDLINE PHONE NUMBER",
        group: PatternGroup::LandlinePhone,
    },
];

/// Returns all descriptors in declaration order.
pub fn all_fields() -> Vec<&'static FieldDescriptor> {
    FIELDS.iter().collect()
}

/// Selects descriptors by field name.
///
/// The result follows declaration order regardless of the order of `names`;
/// unknown names are ignored.
pub fn select_fields<S: AsRef<str>>(names: &[S]) -> Vec<&'static FieldDescriptor> {
    FIELDS
        .iter()
        .filter(|d| names.iter().any(|n| n.as_ref() == d.field.as_str()))
        .collect()
}

/// Typed counterpart of [`select_fields`].
pub fn descriptors_for(fields: &[Field]) -> Vec<&'static FieldDescriptor> {
    FIELDS.iter().filter(|d| fields.contains(&d.field)).collect()
}
