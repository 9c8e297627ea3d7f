//! Logout Use Case
//!
//! Revokes an access token by adding it to the blacklist.

use std::sync::Arc;

use crate::domain::entity::revoked_token::RevokedToken;
use crate::domain::repository::BlacklistRepository;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase<B>
where
    B: BlacklistRepository,
{
    blacklist: Arc<B>,
}

impl<B> LogoutUseCase<B>
where
    B: BlacklistRepository,
{
    pub fn new(blacklist: Arc<B>) -> Self {
        Self { blacklist }
    }

    /// Revoke `token`. Idempotent; the token is not required to be valid.
    pub async fn execute(&self, token: &str) -> AuthResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::Validation("Token is required".to_string()));
        }

        let revoked = RevokedToken::from_token(token);
        self.blacklist.revoke_token(&revoked).await?;

        tracing::info!("Token revoked");
        Ok(())
    }
}
