//! User Name Value Object
//!
//! The login handle. Uniqueness is exact (case-sensitive) on the normalized
//! form.
//!
//! ## Invariants
//! - NFKC-normalized, surrounding whitespace trimmed
//! - 1 to 30 characters
//! - no whitespace or control characters inside

use derive_more::Display;
use serde::Serialize;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username is required")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username cannot contain whitespace or control characters")]
    InvalidCharacter,
}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Normalize and validate user input
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if trimmed
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Restore from database (already validated on insert)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_name() {
        let name = UserName::new("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_trims_and_normalizes() {
        let name = UserName::new("  ａｌｉｃｅ ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_ne!(UserName::new("Alice").unwrap(), UserName::new("alice").unwrap());
    }

    #[test]
    fn test_empty_user_name() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_too_long_user_name() {
        let result = UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1));
        assert!(matches!(result, Err(UserNameError::TooLong { .. })));
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_inner_whitespace_rejected() {
        assert_eq!(
            UserName::new("alice smith"),
            Err(UserNameError::InvalidCharacter)
        );
        assert_eq!(
            UserName::new("alice\u{0000}"),
            Err(UserNameError::InvalidCharacter)
        );
    }
}
