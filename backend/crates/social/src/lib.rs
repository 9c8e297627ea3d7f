//! Social Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Follow edges, posts, feed scopes, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Request Model
//! - Every route sits behind the auth gate from the `auth` crate
//! - The gate resolves the caller into a [`SocialIdentity`] (profile,
//!   followings, followers, posts) through [`MemberIdentityResolver`]
//! - Feeds are computed from that preloaded graph in one query
//!
//! [`SocialIdentity`]: domain::entities::SocialIdentity

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::MemberIdentityResolver;
pub use error::{SocialError, SocialResult};
pub use infra::postgres::PgSocialRepository;
pub use presentation::router::{SocialAuthGate, social_router, social_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
