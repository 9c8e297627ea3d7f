//! Follow / Unfollow Use Cases

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::{FollowEdge, MemberSummary, SocialIdentity};
use crate::domain::repository::{FollowRepository, MemberRepository};
use crate::error::{SocialError, SocialResult};

/// Follow use case
pub struct FollowUseCase<R>
where
    R: FollowRepository + MemberRepository,
{
    repo: Arc<R>,
}

impl<R> FollowUseCase<R>
where
    R: FollowRepository + MemberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Following someone twice is a no-op that returns the existing edge
    pub async fn execute(&self, caller: &SocialIdentity, target: UserId) -> SocialResult<FollowEdge> {
        let me = caller.user_id();
        if target == me {
            return Err(SocialError::CannotFollowSelf);
        }

        if !self.repo.member_exists(&target).await? {
            return Err(SocialError::MemberNotFound);
        }

        let edge = self.repo.insert_follow(&FollowEdge::new(me, target)).await?;

        tracing::info!(follower_id = %me, followed_id = %target, "Followed member");
        Ok(edge)
    }
}

/// Unfollow use case
pub struct UnfollowUseCase<R>
where
    R: FollowRepository,
{
    repo: Arc<R>,
}

impl<R> UnfollowUseCase<R>
where
    R: FollowRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Succeeds whether or not an edge existed
    pub async fn execute(&self, caller: &SocialIdentity, target: UserId) -> SocialResult<()> {
        let me = caller.user_id();
        let removed = self.repo.delete_follow(&me, &target).await?;

        tracing::info!(
            follower_id = %me,
            followed_id = %target,
            removed = removed,
            "Unfollowed member"
        );
        Ok(())
    }
}

/// Who follows the caller
pub struct ListFollowersUseCase<R>
where
    R: FollowRepository,
{
    repo: Arc<R>,
}

impl<R> ListFollowersUseCase<R>
where
    R: FollowRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &SocialIdentity) -> SocialResult<Vec<MemberSummary>> {
        self.repo.list_followers(&caller.user_id()).await
    }
}
