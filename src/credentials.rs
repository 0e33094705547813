use std::collections::BTreeMap;

use crate::schema::Field;

/// Raw credential set collected from the user.
///
/// Maps a field to its validated value, or to `None` when the field was
/// requested but left out. Fields never requested are not present at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    data: BTreeMap<Field, Option<String>>,
}

impl Credentials {
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Builds a set where every given pair is present.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (Field, S)>) -> Self {
        Self {
            data: pairs
                .into_iter()
                .map(|(field, value)| (field, Some(value.into())))
                .collect(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.data.insert(field, value);
    }

    /// Returns the value of `field` if it is present and non-empty.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.data
            .get(&field)
            .and_then(|v| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// True when the field was recorded, even as an absence.
    pub fn contains(&self, field: Field) -> bool {
        self.data.contains_key(&field)
    }

    /// Iterates over fields that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (Field, &str)> {
        self.data
            .iter()
            .filter_map(|(field, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((*field, v)),
                _ => None,
            })
    }

    /// Drops every field whose value is absent or empty.
    pub fn without_absent(mut self) -> Self {
        self.data
            .retain(|_, value| value.as_deref().is_some_and(|v| !v.is_empty()));
        self
    }

    /// Overlays the values of `other` onto this set.
    pub fn merge(&mut self, other: Credentials) {
        self.data.extend(other.data);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_ignores_absent_and_empty() {
        let mut creds = Credentials::new();
        creds.set(Field::Name, Some("anna".to_string()));
        creds.set(Field::Phone, None);
        creds.set(Field::Surname, Some(String::new()));

        assert_eq!(creds.get(Field::Name), Some("anna"));
        assert_eq!(creds.get(Field::Phone), None);
        assert_eq!(creds.get(Field::Surname), None);
        assert!(creds.contains(Field::Phone));
        assert!(!creds.contains(Field::BirthDate));
    }

    #[test]
    fn test_without_absent() {
        let mut creds = Credentials::new();
        creds.set(Field::Name, Some("anna".to_string()));
        creds.set(Field::Phone, None);

        let stripped = creds.without_absent();
        assert_eq!(stripped.len(), 1);
        assert!(!stripped.contains(Field::Phone));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut creds = Credentials::from_pairs([(Field::Name, "anna"), (Field::Surname, "lee")]);
        creds.merge(Credentials::from_pairs([(Field::Surname, "kim")]));

        assert_eq!(creds.get(Field::Name), Some("anna"));
        assert_eq!(creds.get(Field::Surname), Some("kim"));
    }

    #[test]
    fn test_present_in_declaration_order() {
        let creds = Credentials::from_pairs([(Field::Phone, "9991234567"), (Field::Name, "anna")]);
        let fields: Vec<Field> = creds.present().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone]);
    }
}
