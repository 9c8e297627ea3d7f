pub mod credential;
pub mod revoked_token;
pub mod user;
