//! Best-match selector

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::candidate::{FoundItem, FoundItemSource};
use crate::error::MatchError;
use crate::prompt::build_match_prompt;
use crate::resolve::{descriptions_contain, public_image_url, resolve_candidate};
use crate::verdict::{Confidence, MatchResult, MatchVerdict};

/// Port to the external text-generation service
///
/// Implementations are expected to invoke the model with a
/// low-temperature configuration; the reply is free text that should
/// parse as a `MatchVerdict`.
#[async_trait]
pub trait MatchAdvisor: Send + Sync {
    async fn best_match_reply(&self, prompt: &str) -> Result<String, MatchError>;
}

/// Advisory selector of the most plausible found-item counterpart for a
/// lost-item description. Read-only: never mutates any entity.
pub struct MatchSelector {
    source: Arc<dyn FoundItemSource>,
    advisor: Arc<dyn MatchAdvisor>,
    storage_public_base: String,
}

impl MatchSelector {
    pub fn new(
        source: Arc<dyn FoundItemSource>,
        advisor: Arc<dyn MatchAdvisor>,
        storage_public_base: impl Into<String>,
    ) -> Self {
        Self {
            source,
            advisor,
            storage_public_base: storage_public_base.into(),
        }
    }

    /// Finds the best found-item match for a lost-item description.
    ///
    /// Returns `Ok(None)` when the advisor replied but no match could be
    /// determined from its output; callers must treat that distinctly
    /// from a low-confidence result.
    ///
    /// # Errors
    ///
    /// * `EmptyDescription` for a blank query
    /// * `Source` / `Advisor` when the candidate read or the generation
    ///   call fails outright
    pub async fn find_best_match(
        &self,
        lost_description: &str,
    ) -> Result<Option<MatchResult>, MatchError> {
        if lost_description.trim().is_empty() {
            return Err(MatchError::EmptyDescription);
        }

        let candidates = self.source.found_items().await?;
        if candidates.is_empty() {
            info!("no found items available to match against");
            return Ok(Some(MatchResult::no_candidates()));
        }

        debug!(candidates = candidates.len(), "requesting match verdict");
        let prompt = build_match_prompt(lost_description, &candidates);
        let reply = self.advisor.best_match_reply(&prompt).await?;

        let verdict = match MatchVerdict::parse(&reply) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "advisor reply did not parse, no match determined");
                return Ok(None);
            }
        };

        Ok(Some(self.ground_verdict(verdict, lost_description, &candidates)))
    }

    /// Re-grounds the verdict against the concrete candidates: recovers
    /// the image reference and applies the medium -> high upgrade when
    /// the matched description textually contains the query (or vice
    /// versa). Low-confidence verdicts pass through untouched.
    fn ground_verdict(
        &self,
        verdict: MatchVerdict,
        lost_description: &str,
        candidates: &[FoundItem],
    ) -> MatchResult {
        let mut result = MatchResult::from(verdict);
        if result.confidence == Confidence::Low {
            return result;
        }

        if let Some(matched) = resolve_candidate(candidates, &result.description) {
            result.url = public_image_url(&matched.image_url, &self.storage_public_base);
            if result.confidence == Confidence::Medium
                && descriptions_contain(&matched.description, lost_description)
            {
                result.confidence = Confidence::High;
            }
        }
        result
    }
}
