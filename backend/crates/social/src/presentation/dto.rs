//! API DTOs (Data Transfer Objects)

use auth::models::{User, UserResponse};
use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{FollowEdge, MemberSummary, Post, PostView, SocialIdentity};

// ============================================================================
// Members
// ============================================================================

/// `{ id, firstName, lastName }`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummaryResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl From<&MemberSummary> for MemberSummaryResponse {
    fn from(member: &MemberSummary) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
        }
    }
}

/// Profile plus graph context, for `/me` and `/user/{id}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub followings: Vec<MemberSummaryResponse>,
    pub followers: Vec<MemberSummaryResponse>,
    pub posts: Vec<PostResponse>,
}

impl From<&SocialIdentity> for IdentityResponse {
    fn from(identity: &SocialIdentity) -> Self {
        Self {
            user: UserResponse::from(&identity.user),
            followings: identity.followings.iter().map(Into::into).collect(),
            followers: identity.followers.iter().map(Into::into).collect(),
            posts: identity.posts.iter().map(PostResponse::from_post).collect(),
        }
    }
}

/// Speaker lookups return bare profiles
pub fn user_responses(users: &[User]) -> Vec<UserResponse> {
    users.iter().map(UserResponse::from).collect()
}

// ============================================================================
// Follow
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub follower_id: UserId,
    pub followed_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<&FollowEdge> for FollowResponse {
    fn from(edge: &FollowEdge) -> Self {
        Self {
            follower_id: edge.follower_id,
            followed_id: edge.followed_id,
            created_at: edge.created_at,
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: String,
}

/// A post; `owner` is present on feed entries and omitted inside a profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub content: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<MemberSummaryResponse>,
}

impl PostResponse {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            content: post.content.clone(),
            owner_id: post.owner_id,
            created_at: post.created_at,
            owner: None,
        }
    }
}

impl From<&PostView> for PostResponse {
    fn from(view: &PostView) -> Self {
        Self {
            owner: Some(MemberSummaryResponse::from(&view.owner)),
            ..Self::from_post(&view.post)
        }
    }
}
