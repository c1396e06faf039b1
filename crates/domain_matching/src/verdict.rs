//! Advisor verdict parsing and the advisory match result

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;

/// Three-level advisory confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            other => Err(MatchError::Parse(format!("unknown confidence '{other}'"))),
        }
    }
}

/// The fixed-shape reply the advisor is instructed to produce
///
/// The service has no stable candidate identifier to return, so the
/// verdict carries the matched item's description and the selector
/// re-resolves the concrete record locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchVerdict {
    pub url: String,
    pub description: String,
    pub match_reason: String,
    pub confidence: Confidence,
}

impl MatchVerdict {
    /// Parses the raw advisor reply into a verdict
    ///
    /// Models routinely wrap JSON in a fenced code block; the fence is
    /// tolerated. Anything that does not deserialize to the fixed shape
    /// is a `Parse` error, which the selector degrades to "no match
    /// determined" rather than failing the caller.
    pub fn parse(reply: &str) -> Result<Self, MatchError> {
        let body = strip_code_fence(reply.trim());
        serde_json::from_str(body).map_err(|e| MatchError::Parse(e.to_string()))
    }
}

/// The selector's advisory output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub url: String,
    pub description: String,
    pub match_reason: String,
    pub confidence: Confidence,
}

impl MatchResult {
    /// Result returned when there are no found items to match against
    pub fn no_candidates() -> Self {
        Self {
            url: String::new(),
            description: "No items found".to_string(),
            match_reason: "There are currently no found items in the system to match against."
                .to_string(),
            confidence: Confidence::Low,
        }
    }
}

impl From<MatchVerdict> for MatchResult {
    fn from(v: MatchVerdict) -> Self {
        Self {
            url: v.url,
            description: v.description,
            match_reason: v.match_reason,
            confidence: v.confidence,
        }
    }
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop the optional language tag on the fence line
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let verdict = MatchVerdict::parse(
            r#"{"url":"/img/1.jpg","description":"a silver laptop","matchReason":"category and color match","confidence":"medium"}"#,
        )
        .unwrap();
        assert_eq!(verdict.confidence, Confidence::Medium);
        assert_eq!(verdict.match_reason, "category and color match");
    }

    #[test]
    fn parses_fenced_json() {
        let reply = "```json\n{\"url\":\"\",\"description\":\"d\",\"matchReason\":\"r\",\"confidence\":\"high\"}\n```";
        let verdict = MatchVerdict::parse(reply).unwrap();
        assert_eq!(verdict.confidence, Confidence::High);
    }

    #[test]
    fn prose_reply_is_a_parse_error() {
        let err = MatchVerdict::parse("I think item 2 is the best match.").unwrap_err();
        assert!(matches!(err, MatchError::Parse(_)));
    }

    #[test]
    fn unknown_confidence_is_a_parse_error() {
        let err = MatchVerdict::parse(
            r#"{"url":"","description":"d","matchReason":"r","confidence":"certain"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::Parse(_)));
    }

    #[test]
    fn no_candidates_result_shape() {
        let result = MatchResult::no_candidates();
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.description, "No items found");
        assert!(result.url.is_empty());
    }
}
