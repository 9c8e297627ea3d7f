//! Domain Services
//!
//! Pure logic over an already-resolved identity.

use auth::models::Languages;
use kernel::id::UserId;

use crate::domain::entities::SocialIdentity;
use crate::domain::value_objects::{FeedScope, LanguageFilter};

/// Owners whose posts make up a feed for `identity`
pub fn feed_owner_ids(identity: &SocialIdentity, scope: FeedScope) -> Vec<UserId> {
    let me = identity.user_id();
    let followed = identity
        .followings
        .iter()
        .map(|m| m.id)
        .filter(|id| *id != me);

    match scope {
        FeedScope::WithOwn => std::iter::once(me).chain(followed).collect(),
        FeedScope::FollowingsOnly => followed.collect(),
        FeedScope::OwnOnly => vec![me],
    }
}

/// Members whose native languages contain what the caller is learning.
///
/// `None` when the caller has no learning languages; an empty needle would
/// match everybody.
pub fn native_speakers_filter(identity: &SocialIdentity) -> Option<LanguageFilter> {
    non_empty(&identity.user.learning_languages).map(LanguageFilter::NativeContains)
}

/// Members learning what the caller speaks natively
pub fn learning_speakers_filter(identity: &SocialIdentity) -> Option<LanguageFilter> {
    non_empty(&identity.user.native_languages).map(LanguageFilter::LearningContains)
}

fn non_empty(languages: &Languages) -> Option<Languages> {
    (!languages.is_empty()).then(|| languages.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MemberSummary;
    use auth::models::{NewProfile, User, UserName};

    fn identity(native: &str, learning: &str, followings: Vec<UserId>) -> SocialIdentity {
        let user = User::new(
            UserName::new("alice").unwrap(),
            NewProfile {
                first_name: "Alice".to_string(),
                last_name: "Liddell".to_string(),
                native_languages: Languages::new(native),
                learning_languages: Languages::new(learning),
            },
        );
        SocialIdentity {
            user,
            followings: followings
                .into_iter()
                .map(|id| MemberSummary {
                    id,
                    first_name: "F".to_string(),
                    last_name: "L".to_string(),
                })
                .collect(),
            followers: Vec::new(),
            posts: Vec::new(),
        }
    }

    #[test]
    fn test_feed_owner_ids_scopes() {
        let (b, c) = (UserId::new(), UserId::new());
        let me = identity("english", "spanish", vec![b, c]);

        assert_eq!(
            feed_owner_ids(&me, FeedScope::WithOwn),
            vec![me.user_id(), b, c]
        );
        assert_eq!(feed_owner_ids(&me, FeedScope::FollowingsOnly), vec![b, c]);
        assert_eq!(feed_owner_ids(&me, FeedScope::OwnOnly), vec![me.user_id()]);
    }

    #[test]
    fn test_feed_owner_ids_without_followings() {
        let me = identity("english", "spanish", Vec::new());
        assert!(feed_owner_ids(&me, FeedScope::FollowingsOnly).is_empty());
        assert_eq!(feed_owner_ids(&me, FeedScope::WithOwn), vec![me.user_id()]);
    }

    #[test]
    fn test_speaker_filters() {
        let me = identity("english", "spanish", Vec::new());
        assert_eq!(
            native_speakers_filter(&me),
            Some(LanguageFilter::NativeContains(Languages::new("spanish")))
        );
        assert_eq!(
            learning_speakers_filter(&me),
            Some(LanguageFilter::LearningContains(Languages::new("english")))
        );
    }

    #[test]
    fn test_empty_languages_yield_no_filter() {
        let me = identity("", "", Vec::new());
        assert_eq!(native_speakers_filter(&me), None);
        assert_eq!(learning_speakers_filter(&me), None);
    }
}
