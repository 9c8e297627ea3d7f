//! Find Speakers Use Case
//!
//! Matches members by language: native speakers of what the caller is
//! learning, and learners of what the caller speaks natively.

use std::sync::Arc;

use auth::models::User;

use crate::domain::entities::SocialIdentity;
use crate::domain::repository::MemberRepository;
use crate::domain::services::{learning_speakers_filter, native_speakers_filter};
use crate::domain::value_objects::LanguageFilter;
use crate::error::SocialResult;

pub struct FindSpeakersUseCase<R>
where
    R: MemberRepository,
{
    repo: Arc<R>,
}

impl<R> FindSpeakersUseCase<R>
where
    R: MemberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn native_speakers(&self, caller: &SocialIdentity) -> SocialResult<Vec<User>> {
        self.run(caller, native_speakers_filter(caller)).await
    }

    pub async fn learning_speakers(&self, caller: &SocialIdentity) -> SocialResult<Vec<User>> {
        self.run(caller, learning_speakers_filter(caller)).await
    }

    async fn run(
        &self,
        caller: &SocialIdentity,
        filter: Option<LanguageFilter>,
    ) -> SocialResult<Vec<User>> {
        match filter {
            Some(filter) => {
                let users = self.repo.find_speakers(&filter).await?;
                tracing::debug!(
                    user_id = %caller.user_id(),
                    column = filter.column(),
                    matches = users.len(),
                    "Speakers resolved"
                );
                Ok(users)
            }
            None => Ok(Vec::new()),
        }
    }
}
