//! Free-text classification of credential input.
//!
//! A single alternation recognizes the four input shapes. Each shape is a
//! named capture group and callers only ever read the group that belongs to
//! the field being validated, so a string shaped like a name is never
//! accepted for a date field even though the pattern itself matched.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CREDENTIAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        ^(?:
            (?P<name>[a-z][\w\ ]+)
          | (?P<date>(?:0[1-9]|[12][0-9]|3[01])\.(?:0[1-9]|1[012])\.(?:19|20)[0-9]{2})
          | (?:\+7|8)(?P<phone>[0-9]{10})
          | (?P<landline_phone>[348][0-9]{9})
        )$",
    )
    .expect("credential pattern is valid")
});

/// Pattern group applied to a credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternGroup {
    Name,
    Date,
    Phone,
    LandlinePhone,
}

impl PatternGroup {
    /// Name of the capture group in the shared pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternGroup::Name => "name",
            PatternGroup::Date => "date",
            PatternGroup::Phone => "phone",
            PatternGroup::LandlinePhone => "landline_phone",
        }
    }
}

impl fmt::Display for PatternGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matches `input` against the shared pattern and returns the value captured
/// by `group`, if any.
///
/// A match that landed in a different group is a non-match for this caller.
/// For phones only the ten-digit remainder after the country prefix is
/// returned.
pub fn extract(input: &str, group: PatternGroup) -> Option<String> {
    let caps = CREDENTIAL_PATTERN.captures(input)?;
    caps.name(group.as_str())
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Returns the group the input was classified as, if it matched at all.
pub fn classify(input: &str) -> Option<PatternGroup> {
    let caps = CREDENTIAL_PATTERN.captures(input)?;
    [
        PatternGroup::Name,
        PatternGroup::Date,
        PatternGroup::Phone,
        PatternGroup::LandlinePhone,
    ]
    .into_iter()
    .find(|group| caps.name(group.as_str()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_group() {
        assert_eq!(extract("anna", PatternGroup::Name), Some("anna".to_string()));
        assert_eq!(
            extract("Anna Maria", PatternGroup::Name),
            Some("Anna Maria".to_string())
        );
        assert!(extract("a", PatternGroup::Name).is_none());
        assert!(extract("1anna", PatternGroup::Name).is_none());
        assert!(extract("", PatternGroup::Name).is_none());
    }

    #[test]
    fn test_date_group() {
        assert_eq!(
            extract("15.03.1990", PatternGroup::Date),
            Some("15.03.1990".to_string())
        );
        assert!(extract("32.01.1990", PatternGroup::Date).is_none());
        assert!(extract("15.13.1990", PatternGroup::Date).is_none());
        assert!(extract("15.03.1899", PatternGroup::Date).is_none());
        assert!(extract("15.03.2100", PatternGroup::Date).is_none());
        assert!(extract("1.3.1990", PatternGroup::Date).is_none());
    }

    #[test]
    fn test_phone_group_strips_prefix() {
        assert_eq!(
            extract("+79991234567", PatternGroup::Phone),
            Some("9991234567".to_string())
        );
        assert_eq!(
            extract("89991234567", PatternGroup::Phone),
            Some("9991234567".to_string())
        );
        assert!(extract("9991234567", PatternGroup::Phone).is_none());
        assert!(extract("+7999123456", PatternGroup::Phone).is_none());
        assert!(extract("+799912345678", PatternGroup::Phone).is_none());
    }

    #[test]
    fn test_landline_group() {
        assert_eq!(
            extract("3451234567", PatternGroup::LandlinePhone),
            Some("3451234567".to_string())
        );
        assert_eq!(
            extract("8123456789", PatternGroup::LandlinePhone),
            Some("8123456789".to_string())
        );
        assert!(extract("5123456789", PatternGroup::LandlinePhone).is_none());
    }

    #[test]
    fn test_other_group_is_not_a_match() {
        // Matches the pattern as a name, but a date field never sees it.
        assert_eq!(classify("anna"), Some(PatternGroup::Name));
        assert!(extract("anna", PatternGroup::Date).is_none());

        assert_eq!(classify("89991234567"), Some(PatternGroup::Phone));
        assert!(extract("89991234567", PatternGroup::LandlinePhone).is_none());

        assert_eq!(classify("15.03.1990"), Some(PatternGroup::Date));
        assert!(extract("15.03.1990", PatternGroup::Name).is_none());
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(classify("!!!"), None);
        assert_eq!(classify(""), None);
    }
}
