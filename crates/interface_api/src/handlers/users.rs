//! User handlers

use axum::{extract::State, Extension, Json};
use validator::Validate;

use infra_db::repositories::users::NewUser;

use crate::auth::AuthContext;
use crate::dto::users::*;
use crate::{error::ApiError, AppState};

/// Lists all registered users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    ctx.require_admin()?;

    let users = state.users.list_all().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Creates or refreshes the caller's profile from the identity provider
pub async fn sync_profile(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Json(request): Json<SyncProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    request.validate()?;

    let user = state
        .users
        .upsert_profile(NewUser {
            user_id: ctx.user_id.to_string(),
            email: request.email,
            full_name: request.full_name,
        })
        .await?;

    Ok(Json(user.into()))
}
