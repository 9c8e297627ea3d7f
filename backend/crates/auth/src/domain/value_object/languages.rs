//! Languages Value Object
//!
//! Free-form language list as entered at registration ("spanish, french").
//! Stored lower-cased; speaker matching is a substring test on this string.

use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Display)]
#[serde(transparent)]
pub struct Languages(String);

impl Languages {
    /// Normalize user input: trimmed and lower-cased
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    /// Restore from database
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring match used by the speaker lookups
    pub fn contains(&self, needle: &Languages) -> bool {
        !needle.is_empty() && self.0.contains(needle.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_input() {
        assert_eq!(Languages::new(" Spanish, French ").as_str(), "spanish, french");
    }

    #[test]
    fn test_contains_is_substring_match() {
        let native = Languages::new("spanish, portuguese");
        assert!(native.contains(&Languages::new("Spanish")));
        assert!(native.contains(&Languages::new("port")));
        assert!(!native.contains(&Languages::new("french")));
    }

    #[test]
    fn test_empty_needle_matches_nothing() {
        let native = Languages::new("spanish");
        assert!(!native.contains(&Languages::default()));
    }
}
