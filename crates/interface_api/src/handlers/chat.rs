//! Item chat handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthContext;
use crate::dto::chat::*;
use crate::{error::ApiError, AppState};

/// Lists an item's conversation oldest first
pub async fn list_messages(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessageResponse>>, ApiError> {
    // 404 for unknown items rather than an empty thread
    state.items.get_by_id(item_id).await?;

    let messages = state.chat.list_for_item(item_id).await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Posts a message to an item's conversation
///
/// The item's reporter gets a feed notification unless they are the
/// sender; a failure there is logged and never blocks the message.
pub async fn post_message(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessageResponse>), ApiError> {
    request.validate()?;

    let item = state.items.get_by_id(item_id).await?;
    let sender_name = ctx
        .name
        .clone()
        .unwrap_or_else(|| ctx.user_id.to_string());

    let message = state
        .chat
        .append(item_id, ctx.user_id.as_str(), &request.body)
        .await?;

    if item.reporter_id != ctx.user_id.as_str() {
        let activity = format!(
            "New message from {} in chat for \"{}\"",
            sender_name, item.name
        );
        if let Err(e) = state.notifications.append(&item.reporter_id, &activity).await {
            warn!(item_id = %item_id, error = %e, "chat notification failed");
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(ChatMessageResponse {
            id: message.message_id,
            item_id: message.item_id,
            sender_id: message.sender_id,
            sender_name,
            body: message.body,
            created_at: message.created_at,
        }),
    ))
}
