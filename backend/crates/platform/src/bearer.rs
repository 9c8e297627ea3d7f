//! Bearer token extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};

/// Reason a bearer token could not be read from the headers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,
    #[error("Malformed Authorization header")]
    Malformed,
}

/// Extract the bearer token from the `Authorization` header.
///
/// The scheme is matched case-insensitively. Surrounding whitespace is
/// trimmed; an empty token is malformed.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(BearerError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
