//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{
    credential::Credential,
    user::{NewProfile, User},
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    languages::Languages,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Maximum length for first/last name (in characters)
pub const PERSON_NAME_MAX_LENGTH: usize = 100;

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub native_languages: String,
    pub learning_languages: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        let profile = NewProfile {
            first_name: person_name("First name", &input.first_name)?,
            last_name: person_name("Last name", &input.last_name)?,
            native_languages: Languages::new(&input.native_languages),
            learning_languages: Languages::new(&input.learning_languages),
        };

        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.user_name_exists(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(user_name, profile);
        let credential = Credential::new(user.user_id, password_hash);

        // The unique constraint still decides concurrent registrations
        self.user_repo.create_account(&user, &credential).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(user)
    }
}

fn person_name(field: &str, raw: &str) -> AuthResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuthError::Validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > PERSON_NAME_MAX_LENGTH {
        return Err(AuthError::Validation(format!(
            "{field} must be at most {PERSON_NAME_MAX_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
