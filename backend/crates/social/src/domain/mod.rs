//! Domain Layer - Social graph and posts
//!
//! This layer contains:
//! - Domain entities (FollowEdge, Post, SocialIdentity)
//! - Domain value objects (PostContent, FeedScope, LanguageFilter)
//! - Domain services (feed owner set, speaker filters)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
