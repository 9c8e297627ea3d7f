//! View Member Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::SocialIdentity;
use crate::domain::repository::MemberRepository;
use crate::error::{SocialError, SocialResult};

pub struct ViewMemberUseCase<R>
where
    R: MemberRepository,
{
    repo: Arc<R>,
}

impl<R> ViewMemberUseCase<R>
where
    R: MemberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Any failure, including an unknown or malformed id, is a server error
    pub async fn execute(&self, raw_id: &str) -> SocialResult<SocialIdentity> {
        let user_id: UserId = raw_id
            .parse()
            .map_err(|_| SocialError::Internal(format!("Malformed member id: {raw_id}")))?;

        self.repo
            .load_identity(&user_id)
            .await?
            .ok_or_else(|| SocialError::Internal(format!("No member with id {user_id}")))
    }
}
