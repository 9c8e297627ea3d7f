//! Domain Entities

use auth::models::User;
use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_objects::PostContent;

/// Directed edge: `follower_id` follows `followed_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowEdge {
    pub follower_id: UserId,
    pub followed_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn new(follower_id: UserId, followed_id: UserId) -> Self {
        Self {
            follower_id,
            followed_id,
            created_at: Utc::now(),
        }
    }
}

/// A post as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub owner_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(owner_id: UserId, content: PostContent) -> Self {
        Self {
            id: PostId::new(),
            owner_id,
            content: content.into_inner(),
            created_at: Utc::now(),
        }
    }
}

/// Minimal public view of a member (id and display name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for MemberSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// A post joined with its owner's summary, as returned by feeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub post: Post,
    pub owner: MemberSummary,
}

/// A user with the immediate neighbourhood the gate preloads:
/// who they follow, who follows them, and what they posted.
#[derive(Debug, Clone)]
pub struct SocialIdentity {
    pub user: User,
    pub followings: Vec<MemberSummary>,
    pub followers: Vec<MemberSummary>,
    /// Newest first
    pub posts: Vec<Post>,
}

impl SocialIdentity {
    pub fn user_id(&self) -> UserId {
        self.user.user_id
    }

    pub fn summary(&self) -> MemberSummary {
        MemberSummary::from(&self.user)
    }
}
