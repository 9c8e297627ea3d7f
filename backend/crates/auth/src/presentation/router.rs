//! Auth Router

use axum::{Router, middleware, routing::post};
use std::sync::Arc;

use crate::domain::repository::{
    BlacklistRepository, CredentialRepository, IdentityResolver, UserRepository,
};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGate, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router<I>(repo: PgAuthRepository, gate: AuthGate<PgAuthRepository, I>) -> Router
where
    I: IdentityResolver + Send + Sync + 'static,
{
    auth_router_generic(repo, gate)
}

/// Create a generic Auth router for any repository implementation
///
/// `/register` and `/login` are public; `/logout` sits behind `gate`.
pub fn auth_router_generic<R, B, I>(repo: R, gate: AuthGate<B, I>) -> Router
where
    R: UserRepository + CredentialRepository + BlacklistRepository + Clone + Send + Sync + 'static,
    B: BlacklistRepository + Send + Sync + 'static,
    I: IdentityResolver + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: gate.config().clone(),
    };

    let protected = Router::new()
        .route("/logout", post(handlers::logout::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<B, I>));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
