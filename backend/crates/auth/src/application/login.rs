//! Login Use Case
//!
//! Verifies a user name / password pair and issues an access token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{
    access_token::AccessToken, user_name::UserName, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub access_token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository + CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Every failure is `InvalidCredentials`, whatever the cause.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_user_by_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credential = self
            .repo
            .find_credential(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal(format!("Credential missing for {}", user.user_id)))?;

        if !credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = AccessToken::issue(user.user_id).sign(&self.config.token_secret);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { access_token })
    }
}
