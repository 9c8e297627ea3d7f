//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every other crate agrees on:
//! - Unified error type (`AppError`) and its HTTP classification (`ErrorKind`)
//! - Typed UUID identifiers for users and posts
//!
//! Anything that only one bounded context cares about belongs in that crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
