//! Notifications repository implementation
//!
//! Append-only activity feed. Rows are written as side effects of claim
//! resolution and chat messages; failures on this path are logged by the
//! caller, never surfaced.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for the notification feed
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Creates a new NotificationRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends an activity line to a user's feed
    pub async fn append(
        &self,
        recipient_id: &str,
        activity: &str,
    ) -> Result<NotificationRow, DatabaseError> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            INSERT INTO notifications (notification_id, recipient_id, activity, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING notification_id, recipient_id, activity, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(recipient_id)
        .bind(activity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists a user's notifications, newest first
    pub async fn list_for(&self, recipient_id: &str) -> Result<Vec<NotificationRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT notification_id, recipient_id, activity, created_at
            FROM notifications
            WHERE recipient_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Database row for a notification
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NotificationRow {
    pub notification_id: Uuid,
    pub recipient_id: String,
    pub activity: String,
    pub created_at: DateTime<Utc>,
}
