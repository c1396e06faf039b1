//! Claims handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::ClaimId;
use domain_claims::ResolutionAction;
use infra_db::repositories::claims::NewClaim;

use crate::auth::AuthContext;
use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Submits a new ownership claim against an item
pub async fn create_claim(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    request.validate()?;

    // The item lookup doubles as the 404 check and supplies the founder.
    let item = state.items.get_by_id(request.item_id).await?;

    let claim = state
        .claims
        .create(NewClaim {
            item_id: item.item_id,
            founder_id: item.reporter_id,
            claimer_id: ctx.user_id.to_string(),
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists all claims with item and user detail (admin only)
pub async fn list_claims(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<Vec<ClaimDetailResponse>>, ApiError> {
    ctx.require_admin()?;

    let rows = state.claims.list_detailed().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Resolves a pending claim with an approve or reject action (admin only)
pub async fn process_claim(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProcessClaimRequest>,
) -> Result<Json<ProcessClaimResponse>, ApiError> {
    ctx.require_admin()?;

    let action: ResolutionAction = request.action.parse().map_err(ApiError::from)?;
    let outcome = state
        .resolution
        .process(ClaimId::from_uuid(id), action)
        .await?;

    Ok(Json(ProcessClaimResponse {
        message: outcome.message,
    }))
}
