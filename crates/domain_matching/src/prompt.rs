//! Ranking prompt construction

use std::fmt::Write;

use crate::candidate::FoundItem;

/// Builds the ranking prompt sent to the text-generation service.
///
/// The prompt enumerates every candidate's category, location, and
/// description and instructs the model to answer with a single JSON
/// object in the `MatchVerdict` shape.
pub fn build_match_prompt(lost_description: &str, candidates: &[FoundItem]) -> String {
    let mut listing = String::new();
    for (i, item) in candidates.iter().enumerate() {
        let _ = write!(
            listing,
            "\nItem {}:\nCategory: {}\nLocation: {}\nDescription: {}\n",
            i + 1,
            item.category,
            item.location,
            item.description
        );
    }

    format!(
        r#"You are an AI assistant helping to match a lost item with found items in a lost and found system.

Lost Item Description: "{lost_description}"

Found Items:
{listing}
Your task is to find the best matching item from the list of found items that matches the lost item description.

Consider these factors in order of importance:
1. Key features and characteristics matching between descriptions
2. Category relevance
3. Location proximity
4. Overall similarity in description

For confidence levels:
- "high" = Strong match in multiple key features and category
- "medium" = Good match in some features or category
- "low" = Few or no matching characteristics

First, analyze the lost item description to identify key features.
Then, compare these features with each found item.
Finally, provide your best match with detailed reasoning.

Respond ONLY with a JSON object like this:
{{
  "url": "imageUrl_of_best_match",
  "description": "full_description_of_matched_item",
  "matchReason": "detailed_explanation_of_matching_features_and_why_this_is_the_best_match",
  "confidence": "high" | "medium" | "low"
}}

Be generous with confidence levels if there are good matches. Only use "low" if there are truly no good matches."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_every_candidate() {
        let candidates = vec![
            FoundItem {
                image_url: "/a.jpg".to_string(),
                description: "black umbrella".to_string(),
                category: "Accessories".to_string(),
                location: "Library".to_string(),
            },
            FoundItem {
                image_url: "/b.jpg".to_string(),
                description: "silver laptop".to_string(),
                category: "Electronics".to_string(),
                location: "Cafeteria".to_string(),
            },
        ];

        let prompt = build_match_prompt("lost my laptop", &candidates);

        assert!(prompt.contains("Lost Item Description: \"lost my laptop\""));
        assert!(prompt.contains("Item 1:"));
        assert!(prompt.contains("Item 2:"));
        assert!(prompt.contains("silver laptop"));
        assert!(prompt.contains("Respond ONLY with a JSON object"));
    }
}
