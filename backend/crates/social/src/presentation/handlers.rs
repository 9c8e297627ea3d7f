//! HTTP Handlers

use auth::models::{MessageResponse, UserResponse};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use kernel::id::{PostId, UserId};
use std::sync::Arc;

use crate::application::{
    FindSpeakersUseCase, FollowUseCase, GetPostUseCase, ListFollowersUseCase, PublishPostUseCase,
    ReadFeedUseCase, UnfollowUseCase, ViewMemberUseCase,
};
use crate::domain::entities::SocialIdentity;
use crate::domain::repository::{FollowRepository, MemberRepository, PostRepository};
use crate::domain::value_objects::FeedScope;
use crate::error::{SocialError, SocialResult};
use crate::presentation::dto::{
    CreatePostRequest, FollowResponse, IdentityResponse, MemberSummaryResponse, PostResponse,
    user_responses,
};

/// Shared state for social handlers
#[derive(Clone)]
pub struct SocialAppState<R>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_id<T>(raw: &str) -> SocialResult<kernel::id::Id<T>> {
    raw.parse()
        .map_err(|_| SocialError::InvalidId(raw.to_string()))
}

// ============================================================================
// Members
// ============================================================================

/// GET /me
pub async fn me(Extension(identity): Extension<SocialIdentity>) -> Json<IdentityResponse> {
    Json(IdentityResponse::from(&identity))
}

/// GET /user/{id}
pub async fn view_member<R>(
    State(state): State<SocialAppState<R>>,
    Path(id): Path<String>,
) -> SocialResult<Json<IdentityResponse>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let identity = ViewMemberUseCase::new(state.repo.clone()).execute(&id).await?;
    Ok(Json(IdentityResponse::from(&identity)))
}

/// GET /followers
pub async fn followers<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
) -> SocialResult<Json<Vec<MemberSummaryResponse>>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let members = ListFollowersUseCase::new(state.repo.clone())
        .execute(&identity)
        .await?;
    Ok(Json(members.iter().map(Into::into).collect()))
}

/// GET /nativeSpeakers
pub async fn native_speakers<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
) -> SocialResult<Json<Vec<UserResponse>>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let users = FindSpeakersUseCase::new(state.repo.clone())
        .native_speakers(&identity)
        .await?;
    Ok(Json(user_responses(&users)))
}

/// GET /learningSpeakers
pub async fn learning_speakers<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
) -> SocialResult<Json<Vec<UserResponse>>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let users = FindSpeakersUseCase::new(state.repo.clone())
        .learning_speakers(&identity)
        .await?;
    Ok(Json(user_responses(&users)))
}

// ============================================================================
// Follow
// ============================================================================

/// POST /follow/{id}
pub async fn follow<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
    Path(id): Path<String>,
) -> SocialResult<Json<FollowResponse>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let target: UserId = parse_id(&id)?;
    let edge = FollowUseCase::new(state.repo.clone())
        .execute(&identity, target)
        .await?;
    Ok(Json(FollowResponse::from(&edge)))
}

/// POST /unfollow/{id}
pub async fn unfollow<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
    Path(id): Path<String>,
) -> SocialResult<Json<MessageResponse>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let target: UserId = parse_id(&id)?;
    UnfollowUseCase::new(state.repo.clone())
        .execute(&identity, target)
        .await?;
    Ok(Json(MessageResponse::new("unfollowed")))
}

// ============================================================================
// Posts
// ============================================================================

/// POST /posts
pub async fn create_post<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
    Json(req): Json<CreatePostRequest>,
) -> SocialResult<Json<PostResponse>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let view = PublishPostUseCase::new(state.repo.clone())
        .execute(&identity, &req.content)
        .await?;
    Ok(Json(PostResponse::from(&view)))
}

async fn feed_for<R>(
    state: SocialAppState<R>,
    identity: SocialIdentity,
    scope: FeedScope,
) -> SocialResult<Json<Vec<PostResponse>>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let posts = ReadFeedUseCase::new(state.repo.clone())
        .execute(&identity, scope)
        .await?;
    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// GET /posts/feed
pub async fn feed<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
) -> SocialResult<Json<Vec<PostResponse>>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    feed_for(state, identity, FeedScope::WithOwn).await
}

/// GET /posts/followings
pub async fn followings_feed<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
) -> SocialResult<Json<Vec<PostResponse>>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    feed_for(state, identity, FeedScope::FollowingsOnly).await
}

/// GET /posts/mine
pub async fn my_posts<R>(
    State(state): State<SocialAppState<R>>,
    Extension(identity): Extension<SocialIdentity>,
) -> SocialResult<Json<Vec<PostResponse>>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    feed_for(state, identity, FeedScope::OwnOnly).await
}

/// GET /posts/{id}
pub async fn get_post<R>(
    State(state): State<SocialAppState<R>>,
    Path(id): Path<String>,
) -> SocialResult<Json<PostResponse>>
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
{
    let post_id: PostId = parse_id(&id)?;
    let view = GetPostUseCase::new(state.repo.clone()).execute(post_id).await?;
    Ok(Json(PostResponse::from(&view)))
}
