//! Chat repository implementation
//!
//! Append-only per-item conversations. Messages are ordered only by
//! their own creation timestamps.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for item chat threads
#[derive(Debug, Clone)]
pub struct ChatRepository {
    pool: PgPool,
}

impl ChatRepository {
    /// Creates a new ChatRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends a message to an item's conversation
    pub async fn append(
        &self,
        item_id: Uuid,
        sender_id: &str,
        body: &str,
    ) -> Result<ChatMessageRow, DatabaseError> {
        let row = sqlx::query_as::<_, ChatMessageRow>(
            r#"
            INSERT INTO chat_messages (message_id, item_id, sender_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING message_id, item_id, sender_id, body, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(item_id)
        .bind(sender_id)
        .bind(body)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists an item's conversation oldest first, joined with sender
    /// display names
    pub async fn list_for_item(&self, item_id: Uuid) -> Result<Vec<ChatMessageDetailRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ChatMessageDetailRow>(
            r#"
            SELECT m.message_id, m.item_id, m.sender_id, m.body, m.created_at,
                   u.full_name AS sender_name
            FROM chat_messages m
            JOIN users u ON u.user_id = m.sender_id
            WHERE m.item_id = $1
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Database row for a chat message
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChatMessageRow {
    pub message_id: Uuid,
    pub item_id: Uuid,
    pub sender_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Chat message joined with the sender's display name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChatMessageDetailRow {
    pub message_id: Uuid,
    pub item_id: Uuid,
    pub sender_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub sender_name: String,
}
