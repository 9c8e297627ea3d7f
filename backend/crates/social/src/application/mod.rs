//! Application Layer
//!
//! Use cases for the social graph and posts.

pub mod find_speakers;
pub mod follow;
pub mod publish_post;
pub mod read_feed;
pub mod resolve_identity;
pub mod view_member;

// Re-exports
pub use find_speakers::FindSpeakersUseCase;
pub use follow::{FollowUseCase, ListFollowersUseCase, UnfollowUseCase};
pub use publish_post::PublishPostUseCase;
pub use read_feed::{GetPostUseCase, ReadFeedUseCase};
pub use resolve_identity::MemberIdentityResolver;
pub use view_member::ViewMemberUseCase;
