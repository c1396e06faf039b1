//! Behavioral tests for the match selector
//!
//! The selector runs against a stub candidate source and a scripted
//! advisor so every branch of the grounding logic is reachable without
//! the external generation service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use domain_matching::{
    Confidence, FoundItem, FoundItemSource, MatchAdvisor, MatchError, MatchSelector,
};
use test_utils::TestFoundItemBuilder;

const STORAGE_BASE: &str = "https://cdn.campus.edu/lost-found";

struct StubSource {
    items: Vec<FoundItem>,
}

#[async_trait]
impl FoundItemSource for StubSource {
    async fn found_items(&self) -> Result<Vec<FoundItem>, MatchError> {
        Ok(self.items.clone())
    }
}

struct ScriptedAdvisor {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl ScriptedAdvisor {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MatchAdvisor for ScriptedAdvisor {
    async fn best_match_reply(&self, _prompt: &str) -> Result<String, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(MatchError::Advisor)
    }
}

fn selector_with(items: Vec<FoundItem>, advisor: Arc<ScriptedAdvisor>) -> MatchSelector {
    MatchSelector::new(
        Arc::new(StubSource { items }),
        advisor as Arc<dyn MatchAdvisor>,
        STORAGE_BASE,
    )
}

fn verdict_json(description: &str, confidence: &str) -> String {
    format!(
        r#"{{"url":"model-made-this-up","description":"{description}","matchReason":"features line up","confidence":"{confidence}"}}"#
    )
}

#[tokio::test]
async fn empty_candidate_set_answers_low_without_calling_the_advisor() {
    let advisor = ScriptedAdvisor::replying("irrelevant");
    let selector = selector_with(vec![], advisor.clone());

    let result = selector
        .find_best_match("silver laptop with a dent on the lid")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.description, "No items found");
    assert_eq!(result.url, "");
    assert_eq!(advisor.call_count(), 0);
}

#[tokio::test]
async fn grounding_recovers_the_candidate_image_url() {
    let items = vec![
        TestFoundItemBuilder::new()
            .with_description("black umbrella with wooden handle")
            .with_image_url("/found/umbrella.jpg")
            .build(),
        TestFoundItemBuilder::new()
            .with_description("silver laptop with a dent on the lid")
            .with_image_url("/found/laptop.jpg")
            .build(),
    ];
    let advisor =
        ScriptedAdvisor::replying(&verdict_json("silver laptop with a dent on the lid", "high"));
    let selector = selector_with(items, advisor);

    let result = selector
        .find_best_match("a dented silver laptop")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(
        result.url,
        format!("{STORAGE_BASE}/found/laptop.jpg")
    );
}

#[tokio::test]
async fn medium_upgrades_to_high_when_candidate_description_contains_the_query() {
    let items = vec![TestFoundItemBuilder::new()
        .with_description("silver laptop with a dent on the lid")
        .with_image_url("/found/laptop.jpg")
        .build()];
    let advisor =
        ScriptedAdvisor::replying(&verdict_json("silver laptop with a dent on the lid", "medium"));
    let selector = selector_with(items, advisor);

    let result = selector
        .find_best_match("silver laptop")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.confidence, Confidence::High);
}

#[tokio::test]
async fn medium_stays_medium_without_textual_containment() {
    let items = vec![TestFoundItemBuilder::new()
        .with_description("scratched laptop found near the gym")
        .with_image_url("/found/laptop.jpg")
        .build()];
    // Word overlap re-resolves the candidate, but neither description
    // contains the other, so no upgrade.
    let advisor = ScriptedAdvisor::replying(&verdict_json(
        "a laptop with visible scratches",
        "medium",
    ));
    let selector = selector_with(items, advisor);

    let result = selector
        .find_best_match("silver computer lost on campus")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(result.url, format!("{STORAGE_BASE}/found/laptop.jpg"));
}

#[tokio::test]
async fn low_confidence_verdict_is_not_re_resolved() {
    let items = vec![TestFoundItemBuilder::new()
        .with_description("silver laptop")
        .with_image_url("/found/laptop.jpg")
        .build()];
    let advisor = ScriptedAdvisor::replying(&verdict_json("nothing comparable", "low"));
    let selector = selector_with(items, advisor);

    let result = selector.find_best_match("red bicycle").await.unwrap().unwrap();

    assert_eq!(result.confidence, Confidence::Low);
    // Model-supplied url passes through untouched for low verdicts
    assert_eq!(result.url, "model-made-this-up");
}

#[tokio::test]
async fn unparseable_reply_means_no_match_determined() {
    let items = vec![TestFoundItemBuilder::new().build()];
    let advisor = ScriptedAdvisor::replying("The second item looks closest to me.");
    let selector = selector_with(items, advisor);

    let result = selector.find_best_match("silver laptop").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn blank_description_is_rejected_before_any_lookup() {
    let advisor = ScriptedAdvisor::replying("irrelevant");
    let selector = selector_with(vec![TestFoundItemBuilder::new().build()], advisor.clone());

    let err = selector.find_best_match("   ").await.unwrap_err();
    assert!(matches!(err, MatchError::EmptyDescription));
    assert_eq!(advisor.call_count(), 0);
}

#[tokio::test]
async fn advisor_failure_surfaces_to_the_caller() {
    let items = vec![TestFoundItemBuilder::new().build()];
    let advisor = ScriptedAdvisor::failing("upstream timed out");
    let selector = selector_with(items, advisor);

    let err = selector.find_best_match("silver laptop").await.unwrap_err();
    assert!(matches!(err, MatchError::Advisor(_)));
}
