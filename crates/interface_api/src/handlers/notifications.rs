//! Notification feed handler

use axum::{extract::State, Extension, Json};

use crate::auth::AuthContext;
use crate::dto::notifications::NotificationResponse;
use crate::{error::ApiError, AppState};

/// Lists the caller's notifications, newest first
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<Vec<NotificationResponse>>, ApiError> {
    let rows = state.notifications.list_for(ctx.user_id.as_str()).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
