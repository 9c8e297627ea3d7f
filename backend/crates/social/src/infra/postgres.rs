//! PostgreSQL Repository Implementations

use auth::infra::postgres::{USER_COLUMNS, UserRow};
use auth::models::User;
use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{FollowEdge, MemberSummary, Post, PostView, SocialIdentity};
use crate::domain::repository::{FollowRepository, MemberRepository, PostRepository};
use crate::domain::value_objects::LanguageFilter;
use crate::error::{SocialError, SocialResult};

/// PostgreSQL-backed social repository
#[derive(Clone)]
pub struct PgSocialRepository {
    pool: PgPool,
}

impl PgSocialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn followings_of(&self, user_id: &UserId) -> SocialResult<Vec<MemberSummary>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT u.user_id, u.first_name, u.last_name
            FROM follows f
            JOIN users u ON u.user_id = f.followed_id
            WHERE f.follower_id = $1
            ORDER BY f.created_at, u.user_id
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MemberRow::into_summary).collect())
    }

    async fn posts_of(&self, user_id: &UserId) -> SocialResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, owner_id, content, created_at
            FROM posts
            WHERE owner_id = $1
            ORDER BY created_at DESC, post_id DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }
}

// ============================================================================
// Follow Repository Implementation
// ============================================================================

impl FollowRepository for PgSocialRepository {
    async fn insert_follow(&self, edge: &FollowEdge) -> SocialResult<FollowEdge> {
        // The no-op update makes RETURNING yield the stored row on conflict,
        // including one committed by a concurrent request.
        let row = sqlx::query_as::<_, FollowRow>(
            r#"
            INSERT INTO follows (follower_id, followed_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (follower_id, followed_id)
                DO UPDATE SET follower_id = EXCLUDED.follower_id
            RETURNING follower_id, followed_id, created_at
            "#,
        )
        .bind(edge.follower_id.as_uuid())
        .bind(edge.followed_id.as_uuid())
        .bind(edge.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                SocialError::MemberNotFound
            }
            sqlx::Error::Database(db) if db.is_check_violation() => SocialError::CannotFollowSelf,
            _ => SocialError::Database(e),
        })?;

        Ok(row.into_edge())
    }

    async fn delete_follow(
        &self,
        follower_id: &UserId,
        followed_id: &UserId,
    ) -> SocialResult<bool> {
        let deleted = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(follower_id.as_uuid())
            .bind(followed_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<MemberSummary>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT u.user_id, u.first_name, u.last_name
            FROM follows f
            JOIN users u ON u.user_id = f.follower_id
            WHERE f.followed_id = $1
            ORDER BY f.created_at, u.user_id
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MemberRow::into_summary).collect())
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgSocialRepository {
    async fn insert_post(&self, post: &Post) -> SocialResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (post_id, owner_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.owner_id.as_uuid())
        .bind(&post.content)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_post(&self, post_id: &PostId) -> SocialResult<Option<PostView>> {
        let row = sqlx::query_as::<_, PostViewRow>(
            r#"
            SELECT p.post_id, p.owner_id, p.content, p.created_at, u.first_name, u.last_name
            FROM posts p
            JOIN users u ON u.user_id = p.owner_id
            WHERE p.post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostViewRow::into_view))
    }

    async fn posts_by_owners(&self, owner_ids: &[UserId]) -> SocialResult<Vec<PostView>> {
        let owners: Vec<Uuid> = owner_ids.iter().map(|id| id.into_uuid()).collect();

        let rows = sqlx::query_as::<_, PostViewRow>(
            r#"
            SELECT p.post_id, p.owner_id, p.content, p.created_at, u.first_name, u.last_name
            FROM posts p
            JOIN users u ON u.user_id = p.owner_id
            WHERE p.owner_id = ANY($1)
            ORDER BY p.created_at DESC, p.post_id DESC
            "#,
        )
        .bind(owners)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostViewRow::into_view).collect())
    }
}

// ============================================================================
// Member Repository Implementation
// ============================================================================

impl MemberRepository for PgSocialRepository {
    async fn member_exists(&self, user_id: &UserId) -> SocialResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn load_identity(&self, user_id: &UserId) -> SocialResult<Option<SocialIdentity>> {
        let Some(row) = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let followings = self.followings_of(user_id).await?;
        let followers = self.list_followers(user_id).await?;
        let posts = self.posts_of(user_id).await?;

        Ok(Some(SocialIdentity {
            user: row.into_user(),
            followings,
            followers,
            posts,
        }))
    }

    async fn find_speakers(&self, filter: &LanguageFilter) -> SocialResult<Vec<User>> {
        // Column name comes from a closed enum; the value is bound
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE strpos({}, $1) > 0 \
             ORDER BY user_name",
            filter.column()
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(filter.needle().as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct FollowRow {
    follower_id: Uuid,
    followed_id: Uuid,
    created_at: DateTime<Utc>,
}

impl FollowRow {
    fn into_edge(self) -> FollowEdge {
        FollowEdge {
            follower_id: UserId::from_uuid(self.follower_id),
            followed_id: UserId::from_uuid(self.followed_id),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    user_id: Uuid,
    first_name: String,
    last_name: String,
}

impl MemberRow {
    fn into_summary(self) -> MemberSummary {
        MemberSummary {
            id: UserId::from_uuid(self.user_id),
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    owner_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_uuid(self.post_id),
            owner_id: UserId::from_uuid(self.owner_id),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostViewRow {
    post_id: Uuid,
    owner_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    first_name: String,
    last_name: String,
}

impl PostViewRow {
    fn into_view(self) -> PostView {
        let owner_id = UserId::from_uuid(self.owner_id);
        PostView {
            post: Post {
                id: PostId::from_uuid(self.post_id),
                owner_id,
                content: self.content,
                created_at: self.created_at,
            },
            owner: MemberSummary {
                id: owner_id,
                first_name: self.first_name,
                last_name: self.last_name,
            },
        }
    }
}
