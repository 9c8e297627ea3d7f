//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{credential::Credential, revoked_token::RevokedToken, user::User};
use crate::domain::value_object::{UserId, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user together with its credential.
    ///
    /// A duplicate user name surfaces as `AuthError::UserNameTaken`.
    async fn create_account(&self, user: &User, credential: &Credential) -> AuthResult<()>;

    /// Find user by user name (exact match)
    async fn find_user_by_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn user_name_exists(&self, user_name: &UserName) -> AuthResult<bool>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find credential by user ID
    async fn find_credential(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;
}

/// Token blacklist trait. Append-only.
#[trait_variant::make(BlacklistRepository: Send)]
pub trait LocalBlacklistRepository {
    /// Record a revoked token. Revoking twice is not an error.
    async fn revoke_token(&self, revoked: &RevokedToken) -> AuthResult<()>;

    /// Check whether a token digest has been revoked
    async fn is_token_revoked(&self, token_digest: &str) -> AuthResult<bool>;
}

/// Resolves a verified user id into the identity attached to requests.
///
/// The identity type is chosen by the implementor so that callers can
/// preload whatever context they need (e.g. the social graph).
#[trait_variant::make(IdentityResolver: Send)]
pub trait LocalIdentityResolver {
    type Identity: Clone + Send + Sync + 'static;

    async fn resolve_identity(&self, user_id: &UserId) -> AuthResult<Option<Self::Identity>>;
}
