//! Local re-resolution of the advisor's verdict
//!
//! The generation service has no stable candidate identifier to return,
//! so its verdict is matched back to a concrete candidate by textual
//! overlap. Flagged as advisory-only fragility; the authoritative data
//! is never derived from it.

use crate::candidate::FoundItem;

/// Minimum word length considered significant for overlap matching
const SIGNIFICANT_WORD_LEN: usize = 4;

/// Function words long enough to pass the length filter but useless as
/// match evidence ("with" would otherwise link almost any two
/// descriptions).
const STOPWORDS: &[&str] = &[
    "with", "this", "that", "from", "near", "have", "been", "there", "some", "what",
];

fn is_significant(word: &str) -> bool {
    word.len() >= SIGNIFICANT_WORD_LEN && !STOPWORDS.contains(&word)
}

/// Finds the candidate the verdict description most plausibly refers to.
///
/// A candidate matches when either description contains the other, or
/// when any significant word of the candidate's description appears in
/// the verdict's. The first matching candidate wins.
pub fn resolve_candidate<'a>(
    candidates: &'a [FoundItem],
    verdict_description: &str,
) -> Option<&'a FoundItem> {
    let verdict = verdict_description.to_lowercase();
    candidates.iter().find(|item| {
        let candidate = item.description.to_lowercase();
        candidate.contains(&verdict)
            || verdict.contains(&candidate)
            || candidate
                .split_whitespace()
                .filter(|w| is_significant(w))
                .any(|w| verdict.contains(w))
    })
}

/// True when one description is a textual superset of the other,
/// case-insensitively. Used to upgrade a medium verdict to high once a
/// concrete candidate has been recovered.
pub fn descriptions_contain(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Normalizes a stored image reference to a publicly resolvable URL.
///
/// Stored references are bucket-relative paths; absolute URLs pass
/// through untouched.
pub fn public_image_url(image_url: &str, storage_public_base: &str) -> String {
    if image_url.starts_with("http") {
        image_url.to_string()
    } else {
        format!("{storage_public_base}{image_url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, url: &str) -> FoundItem {
        FoundItem {
            image_url: url.to_string(),
            description: description.to_string(),
            category: "Electronics".to_string(),
            location: "Library".to_string(),
        }
    }

    #[test]
    fn resolves_by_containment() {
        let candidates = vec![
            item("black umbrella with wooden handle", "/a.jpg"),
            item("silver laptop with a dent on the lid", "/b.jpg"),
        ];
        let matched = resolve_candidate(&candidates, "silver laptop with a dent on the lid");
        assert_eq!(matched.unwrap().image_url, "/b.jpg");
    }

    #[test]
    fn resolves_by_significant_word_overlap() {
        let candidates = vec![item("scratched silver laptop", "/b.jpg")];
        // No containment either way, but "laptop" and "silver" overlap
        let matched = resolve_candidate(&candidates, "a laptop in silver color");
        assert!(matched.is_some());
    }

    #[test]
    fn short_words_are_not_significant() {
        let candidates = vec![item("red hat", "/c.jpg")];
        assert!(resolve_candidate(&candidates, "a blue scarf").is_none());
    }

    #[test]
    fn stopwords_do_not_link_descriptions() {
        let candidates = vec![item("umbrella with wooden handle", "/a.jpg")];
        assert!(resolve_candidate(&candidates, "a phone with a cracked screen").is_none());
    }

    #[test]
    fn containment_is_case_insensitive() {
        assert!(descriptions_contain(
            "Silver MacBook with stickers",
            "silver macbook"
        ));
        assert!(!descriptions_contain("green bottle", "red jacket"));
    }

    #[test]
    fn relative_urls_get_the_storage_base() {
        assert_eq!(
            public_image_url("/found/42.jpg", "https://cdn.campus.edu/lost-found"),
            "https://cdn.campus.edu/lost-found/found/42.jpg"
        );
        assert_eq!(
            public_image_url("https://elsewhere.example/x.png", "https://cdn.campus.edu"),
            "https://elsewhere.example/x.png"
        );
    }
}
