//! Value Object Module

pub mod access_token;
pub mod languages;
pub mod user_name;
pub mod user_password;

pub use kernel::id::UserId;
