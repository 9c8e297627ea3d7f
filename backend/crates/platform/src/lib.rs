//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC-SHA256, base64url)
//! - Password hashing (Argon2id)
//! - Bearer token extraction from HTTP headers

pub mod bearer;
pub mod crypto;
pub mod password;
