//! Item chat DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use infra_db::repositories::chat::ChatMessageDetailRow;

#[derive(Debug, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "body must be 1-2000 characters"))]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub id: Uuid,
    pub item_id: Uuid,
    pub sender_id: String,
    pub sender_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChatMessageDetailRow> for ChatMessageResponse {
    fn from(row: ChatMessageDetailRow) -> Self {
        Self {
            id: row.message_id,
            item_id: row.item_id,
            sender_id: row.sender_id,
            sender_name: row.sender_name,
            body: row.body,
            created_at: row.created_at,
        }
    }
}
