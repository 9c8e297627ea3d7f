//! Read Feed Use Case
//!
//! The feed resolver: turns a scope plus the caller's preloaded followings
//! into one owner set and fetches their posts in a single query.

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entities::{PostView, SocialIdentity};
use crate::domain::repository::PostRepository;
use crate::domain::services::feed_owner_ids;
use crate::domain::value_objects::FeedScope;
use crate::error::{SocialError, SocialResult};

pub struct ReadFeedUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ReadFeedUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Newest first; ties broken by post id, descending
    pub async fn execute(
        &self,
        caller: &SocialIdentity,
        scope: FeedScope,
    ) -> SocialResult<Vec<PostView>> {
        let owners = feed_owner_ids(caller, scope);
        if owners.is_empty() {
            return Ok(Vec::new());
        }

        let posts = self.repo.posts_by_owners(&owners).await?;

        tracing::debug!(
            user_id = %caller.user_id(),
            scope = ?scope,
            owners = owners.len(),
            posts = posts.len(),
            "Feed resolved"
        );
        Ok(posts)
    }
}

/// Single post lookup
pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: PostId) -> SocialResult<PostView> {
        self.repo
            .find_post(&post_id)
            .await?
            .ok_or(SocialError::PostNotFound)
    }
}
