//! Social Error Types
//!
//! Social-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use auth::error::INTERNAL_ERROR_MESSAGE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Social-specific result type alias
pub type SocialResult<T> = Result<T, SocialError>;

#[derive(Debug, Error)]
pub enum SocialError {
    /// Follow target is the caller
    #[error("You cannot follow yourself")]
    CannotFollowSelf,

    /// Follow target does not exist
    #[error("User not found")]
    MemberNotFound,

    #[error("Post not found")]
    PostNotFound,

    /// Path id is not a UUID
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Input validation error
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SocialError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SocialError::CannotFollowSelf
            | SocialError::InvalidId(_)
            | SocialError::Validation(_) => StatusCode::BAD_REQUEST,
            SocialError::MemberNotFound | SocialError::PostNotFound => StatusCode::NOT_FOUND,
            SocialError::Database(_) | SocialError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SocialError::CannotFollowSelf
            | SocialError::InvalidId(_)
            | SocialError::Validation(_) => ErrorKind::BadRequest,
            SocialError::MemberNotFound | SocialError::PostNotFound => ErrorKind::NotFound,
            SocialError::Database(_) | SocialError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Server errors get a fixed message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            SocialError::Database(_) | SocialError::Internal(_) => {
                AppError::new(self.kind(), INTERNAL_ERROR_MESSAGE)
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            SocialError::Database(e) => {
                tracing::error!(error = %e, "Social database error");
            }
            SocialError::Internal(msg) => {
                tracing::error!(message = %msg, "Social internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Social error");
            }
        }
    }
}

impl IntoResponse for SocialError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Identity resolution runs inside the auth gate
impl From<SocialError> for AuthError {
    fn from(err: SocialError) -> Self {
        match err {
            SocialError::Database(e) => AuthError::Database(e),
            other => AuthError::Internal(other.to_string()),
        }
    }
}
