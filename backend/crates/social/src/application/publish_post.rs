//! Publish Post Use Case

use std::sync::Arc;

use crate::domain::entities::{Post, PostView, SocialIdentity};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostContent;
use crate::error::{SocialError, SocialResult};

pub struct PublishPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> PublishPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &SocialIdentity, content: &str) -> SocialResult<PostView> {
        let content = PostContent::new(content).map_err(|e| SocialError::Validation(e.to_string()))?;

        let post = Post::new(caller.user_id(), content);
        self.repo.insert_post(&post).await?;

        tracing::info!(post_id = %post.id, owner_id = %post.owner_id, "Post created");

        Ok(PostView {
            post,
            owner: caller.summary(),
        })
    }
}
