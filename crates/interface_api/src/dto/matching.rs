//! Match advisory DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_matching::MatchResult;

#[derive(Debug, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1, max = 2000, message = "description must be 1-2000 characters"))]
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidateResponse {
    pub url: String,
    pub description: String,
    pub match_reason: String,
    pub confidence: String,
}

impl From<MatchResult> for MatchCandidateResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            url: result.url,
            description: result.description,
            match_reason: result.match_reason,
            confidence: result.confidence.to_string(),
        }
    }
}

/// `matched: false` means the advisor replied but no match could be
/// determined; it is not an error.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchCandidateResponse>,
}
