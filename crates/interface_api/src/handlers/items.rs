//! Item catalog handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use infra_db::repositories::items::NewItem;
use infra_db::ItemStatus;

use crate::auth::AuthContext;
use crate::dto::items::*;
use crate::{error::ApiError, AppState};

fn parse_status_filter(raw: Option<&str>) -> Result<Option<ItemStatus>, ApiError> {
    match raw {
        None | Some("all") => Ok(None),
        Some("lost") => Ok(Some(ItemStatus::Lost)),
        Some("found") => Ok(Some(ItemStatus::Found)),
        Some("claimed") => Ok(Some(ItemStatus::Claimed)),
        Some(other) => Err(ApiError::Validation(format!(
            "status must be lost, found, claimed, or all, got '{other}'"
        ))),
    }
}

/// Lists items newest first with catalog-wide status counts
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<ItemsListResponse>, ApiError> {
    let filter = parse_status_filter(query.status.as_deref())?;

    let items = state.items.list(filter).await?;
    let counts = state.items.status_counts().await?;

    Ok(Json(ItemsListResponse {
        items: items.into_iter().map(Into::into).collect(),
        counts: counts.into(),
    }))
}

/// Retrieves a single item
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.items.get_by_id(id).await?;
    Ok(Json(item.into()))
}

/// Reports a lost or found item
pub async fn report_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Json(request): Json<ReportItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    request.validate()?;

    let status = match request.status.as_str() {
        "lost" => ItemStatus::Lost,
        "found" => ItemStatus::Found,
        other => {
            return Err(ApiError::Validation(format!(
                "status must be lost or found, got '{other}'"
            )))
        }
    };

    // Found reports feed the match candidate pool, which needs a picture.
    if status == ItemStatus::Found
        && request.image_url.as_deref().map_or(true, |u| u.trim().is_empty())
    {
        return Err(ApiError::Validation(
            "found reports must include an image_url".to_string(),
        ));
    }

    let item = state
        .items
        .create(NewItem {
            reporter_id: ctx.user_id.to_string(),
            name: request.name,
            category: request.category,
            description: request.description,
            date_lost: request.date_lost,
            location: request.location,
            image_url: request.image_url,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}
