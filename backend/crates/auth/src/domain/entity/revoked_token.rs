//! Revoked Token Entity
//!
//! Blacklist entry. Only the digest of the token is kept.

use chrono::{DateTime, Utc};

use crate::domain::value_object::access_token::token_digest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokedToken {
    pub token_digest: String,
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Revoke a raw token now
    pub fn from_token(token: &str) -> Self {
        Self {
            token_digest: token_digest(token),
            revoked_at: Utc::now(),
        }
    }
}
