//! Identity resolution for the auth gate
//!
//! Plugs the member repository into `auth::IdentityResolver` so that every
//! authenticated request carries a [`SocialIdentity`].

use std::sync::Arc;

use auth::{AuthResult, IdentityResolver};
use kernel::id::UserId;

use crate::domain::entities::SocialIdentity;
use crate::domain::repository::MemberRepository;

pub struct MemberIdentityResolver<R> {
    repo: Arc<R>,
}

impl<R> MemberIdentityResolver<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> IdentityResolver for MemberIdentityResolver<R>
where
    R: MemberRepository + Send + Sync + 'static,
{
    type Identity = SocialIdentity;

    async fn resolve_identity(&self, user_id: &UserId) -> AuthResult<Option<SocialIdentity>> {
        Ok(self.repo.load_identity(user_id).await?)
    }
}
