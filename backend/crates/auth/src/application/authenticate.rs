//! Authenticate Use Case
//!
//! The check sequence behind the Auth Gate:
//! token present -> not blacklisted -> signature valid -> identity resolved.
//!
//! The caller only ever sees "rejected"; [`GateRejection`] exists for logs.

use std::sync::Arc;

use thiserror::Error;

use crate::application::config::AuthConfig;
use crate::domain::repository::{BlacklistRepository, IdentityResolver};
use crate::domain::value_object::{
    UserId,
    access_token::{AccessToken, TokenError, token_digest},
};
use crate::error::AuthError;

/// Why a request was turned away
#[derive(Debug, Error)]
pub enum GateRejection {
    #[error("no bearer token")]
    MissingToken,

    #[error("token is revoked")]
    Revoked,

    #[error("token rejected: {0}")]
    InvalidToken(#[from] TokenError),

    #[error("no identity for user {0}")]
    UnknownIdentity(UserId),

    #[error("store failure: {0}")]
    Store(AuthError),
}

impl GateRejection {
    /// Store failures are errors, everything else is routine
    pub fn log(&self) {
        match self {
            GateRejection::Store(e) => {
                tracing::error!(error = %e, "Auth gate store failure");
            }
            other => {
                tracing::debug!(reason = %other, "Auth gate rejected request");
            }
        }
    }
}

/// Outcome of a successful check
#[derive(Debug, Clone)]
pub struct Authenticated<T> {
    pub user_id: UserId,
    pub identity: T,
}

/// Authenticate use case
pub struct AuthenticateUseCase<B, I>
where
    B: BlacklistRepository,
    I: IdentityResolver,
{
    blacklist: Arc<B>,
    resolver: Arc<I>,
    config: Arc<AuthConfig>,
}

impl<B, I> AuthenticateUseCase<B, I>
where
    B: BlacklistRepository,
    I: IdentityResolver,
{
    pub fn new(blacklist: Arc<B>, resolver: Arc<I>, config: Arc<AuthConfig>) -> Self {
        Self {
            blacklist,
            resolver,
            config,
        }
    }

    pub async fn execute(
        &self,
        token: Option<&str>,
    ) -> Result<Authenticated<I::Identity>, GateRejection> {
        let token = token.ok_or(GateRejection::MissingToken)?;

        let revoked = self
            .blacklist
            .is_token_revoked(&token_digest(token))
            .await
            .map_err(GateRejection::Store)?;
        if revoked {
            return Err(GateRejection::Revoked);
        }

        let claims = AccessToken::verify(token, &self.config.token_secret)?;
        let user_id = claims.user_id();

        let identity = self
            .resolver
            .resolve_identity(&user_id)
            .await
            .map_err(GateRejection::Store)?
            .ok_or(GateRejection::UnknownIdentity(user_id))?;

        Ok(Authenticated { user_id, identity })
    }
}
