//! User Entity
//!
//! Public profile of a registered identity. The password hash lives in
//! [`Credential`](super::credential::Credential).

use chrono::{DateTime, Utc};

use crate::domain::value_object::{UserId, languages::Languages, user_name::UserName};

/// Profile fields captured at registration
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub first_name: String,
    pub last_name: String,
    pub native_languages: Languages,
    pub learning_languages: Languages,
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login handle (unique)
    pub user_name: UserName,
    pub first_name: String,
    pub last_name: String,
    /// Lower-cased, free-form
    pub native_languages: Languages,
    /// Lower-cased, free-form
    pub learning_languages: Languages,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(user_name: UserName, profile: NewProfile) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            first_name: profile.first_name,
            last_name: profile.last_name,
            native_languages: profile.native_languages,
            learning_languages: profile.learning_languages,
            created_at: now,
            updated_at: now,
        }
    }
}
