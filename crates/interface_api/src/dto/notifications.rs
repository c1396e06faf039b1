//! Notification feed DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use infra_db::repositories::notifications::NotificationRow;

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub activity: String,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationRow> for NotificationResponse {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: row.notification_id,
            activity: row.activity,
            created_at: row.created_at,
        }
    }
}
