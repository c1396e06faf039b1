//! Match advisory handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::matching::*;
use crate::{error::ApiError, AppState};

/// Asks the advisor for the best found-item match for a lost description
///
/// Read-only; a reply that cannot be interpreted comes back as
/// `matched: false` rather than an error.
pub async fn find_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    request.validate()?;

    let result = state.selector.find_best_match(&request.description).await?;

    Ok(Json(MatchResponse {
        matched: result.is_some(),
        result: result.map(Into::into),
    }))
}
