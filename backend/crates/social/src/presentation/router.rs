//! Social Router

use auth::{AuthGate, BlacklistRepository, IdentityResolver, PgAuthRepository, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::MemberIdentityResolver;
use crate::domain::entities::SocialIdentity;
use crate::domain::repository::{FollowRepository, MemberRepository, PostRepository};
use crate::infra::postgres::PgSocialRepository;
use crate::presentation::handlers::{self, SocialAppState};

/// Gate type used in production
pub type SocialAuthGate = AuthGate<PgAuthRepository, MemberIdentityResolver<PgSocialRepository>>;

/// Create the Social router with PostgreSQL repository
pub fn social_router(repo: PgSocialRepository, gate: SocialAuthGate) -> Router {
    social_router_generic(repo, gate)
}

/// Create a generic Social router for any repository implementation
///
/// Every route sits behind `gate`, whose resolver must attach a
/// [`SocialIdentity`].
pub fn social_router_generic<R, B, I>(repo: R, gate: AuthGate<B, I>) -> Router
where
    R: FollowRepository + PostRepository + MemberRepository + Clone + Send + Sync + 'static,
    B: BlacklistRepository + Send + Sync + 'static,
    I: IdentityResolver<Identity = SocialIdentity> + Send + Sync + 'static,
{
    let state = SocialAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/me", get(handlers::me))
        .route("/user/{id}", get(handlers::view_member::<R>))
        .route("/followers", get(handlers::followers::<R>))
        .route("/nativeSpeakers", get(handlers::native_speakers::<R>))
        .route("/learningSpeakers", get(handlers::learning_speakers::<R>))
        .route("/follow/{id}", post(handlers::follow::<R>))
        .route("/unfollow/{id}", post(handlers::unfollow::<R>))
        .route("/posts", post(handlers::create_post::<R>))
        .route("/posts/feed", get(handlers::feed::<R>))
        .route("/posts/followings", get(handlers::followings_feed::<R>))
        .route("/posts/mine", get(handlers::my_posts::<R>))
        .route("/posts/{id}", get(handlers::get_post::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<B, I>))
        .with_state(state)
}
