//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, revoked_token::RevokedToken, user::User};
use crate::domain::repository::{BlacklistRepository, CredentialRepository, UserRepository};
use crate::domain::value_object::{
    UserId, languages::Languages, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Column list matching [`UserRow`]
pub const USER_COLUMNS: &str = "user_id, user_name, first_name, last_name, \
     native_languages, learning_languages, created_at, updated_at";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create_account(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                first_name,
                last_name,
                native_languages,
                learning_languages,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.native_languages.as_str())
        .bind(user.learning_languages.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_user_name)?;

        sqlx::query(
            r#"
            INSERT INTO auth_credentials (
                user_id,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(credential.user_id.as_uuid())
        .bind(credential.password_hash.as_phc_string())
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_user_by_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_name = $1"
        ))
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn user_name_exists(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1)")
                .bind(user_name.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAuthRepository {
    async fn find_credential(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                user_id,
                password_hash,
                created_at,
                updated_at
            FROM auth_credentials
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialRow::into_credential).transpose()
    }
}

// ============================================================================
// Blacklist Repository Implementation
// ============================================================================

impl BlacklistRepository for PgAuthRepository {
    async fn revoke_token(&self, revoked: &RevokedToken) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token_digest, revoked_at)
            VALUES ($1, $2)
            ON CONFLICT (token_digest) DO NOTHING
            "#,
        )
        .bind(&revoked.token_digest)
        .bind(revoked.revoked_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn is_token_revoked(&self, token_digest: &str) -> AuthResult<bool> {
        let revoked: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token_digest = $1)",
        )
        .bind(token_digest)
        .fetch_one(&self.pool)
        .await?;

        Ok(revoked)
    }
}

// ============================================================================
// Row Types
// ============================================================================

fn map_unique_user_name(err: sqlx::Error) -> AuthError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::UserNameTaken,
        _ => AuthError::Database(err),
    }
}

/// `users` row, shared with crates that read profiles
#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    pub user_id: Uuid,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub native_languages: String,
    pub learning_languages: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    pub fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            user_name: UserName::from_db(self.user_name),
            first_name: self.first_name,
            last_name: self.last_name,
            native_languages: Languages::from_db(self.native_languages),
            learning_languages: Languages::from_db(self.learning_languages),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    user_id: Uuid,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<Credential> {
        Ok(Credential {
            user_id: UserId::from_uuid(self.user_id),
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
