//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::models::User;
use kernel::id::{PostId, UserId};

use crate::domain::entities::{FollowEdge, MemberSummary, Post, PostView, SocialIdentity};
use crate::domain::value_objects::LanguageFilter;
use crate::error::SocialResult;

/// Follow graph repository trait
#[trait_variant::make(FollowRepository: Send)]
pub trait LocalFollowRepository {
    /// Insert an edge unless it already exists; returns the stored edge.
    ///
    /// An unknown followed id surfaces as `SocialError::MemberNotFound`.
    async fn insert_follow(&self, edge: &FollowEdge) -> SocialResult<FollowEdge>;

    /// Delete an edge; `false` if there was none
    async fn delete_follow(&self, follower_id: &UserId, followed_id: &UserId)
    -> SocialResult<bool>;

    /// Members following `user_id`
    async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<MemberSummary>>;
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn insert_post(&self, post: &Post) -> SocialResult<()>;

    async fn find_post(&self, post_id: &PostId) -> SocialResult<Option<PostView>>;

    /// Posts of any of `owner_ids`, newest first (ties broken by id, descending)
    async fn posts_by_owners(&self, owner_ids: &[UserId]) -> SocialResult<Vec<PostView>>;
}

/// Member (profile + graph) repository trait
#[trait_variant::make(MemberRepository: Send)]
pub trait LocalMemberRepository {
    async fn member_exists(&self, user_id: &UserId) -> SocialResult<bool>;

    /// Profile with followings, followers and own posts
    async fn load_identity(&self, user_id: &UserId) -> SocialResult<Option<SocialIdentity>>;

    /// Every member matching `filter`, ordered by user name
    async fn find_speakers(&self, filter: &LanguageFilter) -> SocialResult<Vec<User>>;
}
