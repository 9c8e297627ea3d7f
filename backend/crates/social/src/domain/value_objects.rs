//! Domain Value Objects
//!
//! Immutable value types for the social domain.

use auth::models::Languages;
use thiserror::Error;

/// Maximum post length in characters
pub const POST_CONTENT_MAX_LENGTH: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostContentError {
    #[error("Post content is required")]
    Empty,

    #[error("Post content must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Trimmed, non-empty post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PostContentError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(PostContentError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > POST_CONTENT_MAX_LENGTH {
            return Err(PostContentError::TooLong {
                max: POST_CONTENT_MAX_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Whose posts a feed shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    /// Followed members and the caller
    WithOwn,
    /// Followed members only
    FollowingsOnly,
    /// The caller only
    OwnOnly,
}

/// Substring predicate on one of the language columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageFilter {
    /// `native_languages` contains the value
    NativeContains(Languages),
    /// `learning_languages` contains the value
    LearningContains(Languages),
}

impl LanguageFilter {
    /// Column the predicate applies to
    pub fn column(&self) -> &'static str {
        match self {
            LanguageFilter::NativeContains(_) => "native_languages",
            LanguageFilter::LearningContains(_) => "learning_languages",
        }
    }

    /// Value searched for
    pub fn needle(&self) -> &Languages {
        match self {
            LanguageFilter::NativeContains(value) | LanguageFilter::LearningContains(value) => {
                value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_content_trimmed() {
        let content = PostContent::new("  hola mundo \n").unwrap();
        assert_eq!(content.as_str(), "hola mundo");
    }

    #[test]
    fn test_post_content_bounds() {
        assert_eq!(PostContent::new("   "), Err(PostContentError::Empty));
        assert!(PostContent::new("a".repeat(POST_CONTENT_MAX_LENGTH)).is_ok());
        assert!(matches!(
            PostContent::new("a".repeat(POST_CONTENT_MAX_LENGTH + 1)),
            Err(PostContentError::TooLong { .. })
        ));
    }

    #[test]
    fn test_language_filter_columns() {
        let native = LanguageFilter::NativeContains(Languages::new("spanish"));
        assert_eq!(native.column(), "native_languages");
        assert_eq!(native.needle().as_str(), "spanish");

        let learning = LanguageFilter::LearningContains(Languages::new("english"));
        assert_eq!(learning.column(), "learning_languages");
    }
}
