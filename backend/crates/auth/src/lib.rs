//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, Auth Gate middleware
//!
//! ## Features
//! - Registration with user name, password and language profile
//! - Login issuing HMAC-signed bearer access tokens
//! - Logout by blacklisting the token
//! - Auth Gate middleware for every other route
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application pepper
//! - Tokens never expire; revocation is the only invalidation
//! - Every gate rejection looks the same to the caller (403)
//!
//! The identity attached by the gate is produced by an [`IdentityResolver`]
//! supplied by the embedding application, so other crates can preload the
//! context they need.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::{BlacklistRepository, IdentityResolver};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGate, CurrentUser, require_auth};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::{
        credential::Credential,
        revoked_token::RevokedToken,
        user::{NewProfile, User},
    };
    pub use crate::domain::value_object::{
        UserId, access_token::AccessToken, languages::Languages, user_name::UserName,
    };
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
