//! Auth Middleware
//!
//! The Auth Gate. Guards every protected route: reads the bearer token,
//! runs [`AuthenticateUseCase`] and either attaches the caller to the
//! request or answers 403 `Permission denied!`.
//!
//! Downstream handlers read two extensions:
//! - [`CurrentUser`], the verified user id
//! - the resolver's `Identity` type (e.g. a profile with its social graph)

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{Authenticated, AuthenticateUseCase};
use crate::domain::repository::{BlacklistRepository, IdentityResolver};
use crate::domain::value_object::UserId;
use crate::error::AuthError;

/// Verified caller id, stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

/// Middleware state
pub struct AuthGate<B, I> {
    blacklist: Arc<B>,
    resolver: Arc<I>,
    config: Arc<AuthConfig>,
}

// Manual impl: only the Arcs are cloned
impl<B, I> Clone for AuthGate<B, I> {
    fn clone(&self) -> Self {
        Self {
            blacklist: self.blacklist.clone(),
            resolver: self.resolver.clone(),
            config: self.config.clone(),
        }
    }
}

impl<B, I> AuthGate<B, I>
where
    B: BlacklistRepository + Send + Sync + 'static,
    I: IdentityResolver + Send + Sync + 'static,
{
    pub fn new(blacklist: Arc<B>, resolver: Arc<I>, config: Arc<AuthConfig>) -> Self {
        Self {
            blacklist,
            resolver,
            config,
        }
    }

    pub fn config(&self) -> &Arc<AuthConfig> {
        &self.config
    }
}

/// Middleware that requires a valid, unrevoked access token
pub async fn require_auth<B, I>(
    State(gate): State<AuthGate<B, I>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    B: BlacklistRepository + Send + Sync + 'static,
    I: IdentityResolver + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers()).ok().map(str::to_owned);

    let use_case = AuthenticateUseCase::new(
        gate.blacklist.clone(),
        gate.resolver.clone(),
        gate.config.clone(),
    );

    match use_case.execute(token.as_deref()).await {
        Ok(Authenticated { user_id, identity }) => {
            req.extensions_mut().insert(CurrentUser(user_id));
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Err(rejection) => {
            rejection.log();
            Err(AuthError::PermissionDenied)
        }
    }
}
