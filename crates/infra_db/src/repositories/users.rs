//! Users repository implementation
//!
//! User rows are keyed by the identity provider's subject string; the
//! service never invents user identifiers. Rows are created on first
//! sign-in and refreshed on profile sync, never hard-deleted.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for user profile data
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a user by identity id
    pub async fn get_by_id(&self, user_id: &str) -> Result<UserRow, DatabaseError> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, email, full_name, role, is_active, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("User", user_id))?;

        Ok(user)
    }

    /// Lists all users, newest first
    pub async fn list_all(&self) -> Result<Vec<UserRow>, DatabaseError> {
        let users = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, email, full_name, role, is_active, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Creates the user row on first sign-in, or refreshes the profile
    /// fields on subsequent syncs. Role and active flag are preserved on
    /// conflict; only the admin panel changes those.
    pub async fn upsert_profile(&self, profile: NewUser) -> Result<UserRow, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_id, email, full_name, role, is_active, created_at)
            VALUES ($1, $2, $3, 'student', TRUE, $4)
            ON CONFLICT (user_id)
            DO UPDATE SET email = EXCLUDED.email, full_name = EXCLUDED.full_name
            RETURNING user_id, email, full_name, role, is_active, created_at
            "#,
        )
        .bind(&profile.user_id)
        .bind(&profile.email)
        .bind(&profile.full_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

/// Database row for a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for creating or syncing a user profile
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
}
