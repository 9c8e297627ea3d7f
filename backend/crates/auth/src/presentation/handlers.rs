//! HTTP Handlers

use axum::extract::State;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{BlacklistRepository, CredentialRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, LogoutRequest, MessageResponse, RegisterRequest, UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialRepository + BlacklistRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + CredentialRepository + BlacklistRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: req.user_name,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
        native_languages: req.native_languages,
        learning_languages: req.learning_languages,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(UserResponse::from(&user)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + CredentialRepository + BlacklistRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            user_name: req.user_name,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        access_token: output.access_token,
    }))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout (behind the auth gate)
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(req): Json<LogoutRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + CredentialRepository + BlacklistRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.repo.clone());
    use_case.execute(&req.token).await?;

    tracing::info!(user_id = %user_id, "User logged out");

    Ok(Json(MessageResponse::new("Successfully logged out")))
}
