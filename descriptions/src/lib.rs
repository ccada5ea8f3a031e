//! # descriptions
//!
//! Pure label-to-sentence lookup for classifier output. `describe` turns a
//! class label and a confidence score into a human-readable sentence;
//! `category` buckets a label into one of ten coarse categories. Both are
//! driven by the static rule tables in [`rules`], evaluated in listed order.

use std::collections::HashSet;

mod rules;

use rules::{CategoryRule, DescriptionRule, CATEGORY_RULES, DESCRIPTION_RULES, GENERIC_BLURB, GENERIC_CATEGORY};

/// Builds a descriptive sentence for a label and confidence score.
///
/// Pure: identical inputs always yield identical output.
pub fn describe(label: &str, confidence: f32) -> String {
    format!(
        "{} {}.",
        confidence_qualifier(confidence),
        base_description(label)
    )
}

/// Maps a confidence score in [0, 1] to a qualifier phrase.
pub fn confidence_qualifier(confidence: f32) -> &'static str {
    if confidence > 0.9 {
        "I'm very confident this is"
    } else if confidence > 0.7 {
        "I'm quite confident this is"
    } else if confidence > 0.5 {
        "This appears to be"
    } else if confidence > 0.3 {
        "This might be"
    } else {
        "This could possibly be"
    }
}

/// Buckets a label into a coarse category sentence. First matching rule wins;
/// membership is a substring test against the normalized label.
pub fn category(label: &str) -> &'static str {
    let normalized = normalize(label);
    CATEGORY_RULES
        .iter()
        .find(|rule| rule_contains(rule, &normalized))
        .map(|rule| rule.sentence)
        .unwrap_or(GENERIC_CATEGORY)
}

fn rule_contains(rule: &CategoryRule, normalized: &str) -> bool {
    rule.keywords.iter().any(|kw| normalized.contains(kw))
}

/// "a {Title Label}, {family blurb}" or the generic blurb when no family fits.
fn base_description(label: &str) -> String {
    let normalized = normalize(label);
    let tokens: HashSet<&str> = normalized.split_whitespace().collect();
    let blurb = best_rule(&normalized, &tokens)
        .map(|rule| rule.blurb)
        .unwrap_or(GENERIC_BLURB);
    format!("a {}, {}", title_case(&normalized), blurb)
}

/// Selects the description family for a label.
///
/// Lookup tiers: an exact keyword hit wins outright; then rules are scored
/// by token-set overlap with the label (a rule whose keyword tokens cover
/// every label token is preferred, else most overlapping tokens, earliest
/// rule on ties); with no token overlap at all, the first rule with a
/// keyword contained in the label wins (so compound words like "goldfish"
/// still land in the fish family). No match yields None.
fn best_rule(normalized: &str, tokens: &HashSet<&str>) -> Option<&'static DescriptionRule> {
    if let Some(rule) = DESCRIPTION_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| *kw == normalized))
    {
        return Some(rule);
    }

    let mut best: Option<(&DescriptionRule, usize)> = None;
    for rule in DESCRIPTION_RULES {
        let rule_tokens: HashSet<&str> = rule
            .keywords
            .iter()
            .flat_map(|kw| kw.split_whitespace())
            .collect();
        let overlap = tokens.iter().filter(|t| rule_tokens.contains(**t)).count();
        if overlap == 0 {
            continue;
        }
        if tokens.iter().all(|t| rule_tokens.contains(*t)) {
            return Some(rule);
        }
        if best.map_or(true, |(_, score)| overlap > score) {
            best = Some((rule, overlap));
        }
    }
    if best.is_none() {
        return DESCRIPTION_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)));
    }
    best.map(|(rule, _)| rule)
}

/// Display form of a raw label: underscores to spaces, each word capitalized
/// (`great_white_shark` becomes `Great White Shark`).
pub fn title_label(label: &str) -> String {
    title_case(&normalize(label))
}

/// Lower-cases and replaces underscores with spaces (labels arrive as
/// `great_white_shark`).
fn normalize(label: &str) -> String {
    label.to_lowercase().replace('_', " ")
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_thresholds() {
        assert_eq!(confidence_qualifier(0.95), "I'm very confident this is");
        assert_eq!(confidence_qualifier(0.8), "I'm quite confident this is");
        assert_eq!(confidence_qualifier(0.6), "This appears to be");
        assert_eq!(confidence_qualifier(0.4), "This might be");
        assert_eq!(confidence_qualifier(0.1), "This could possibly be");
        // boundaries are strict
        assert_eq!(confidence_qualifier(0.9), "I'm quite confident this is");
        assert_eq!(confidence_qualifier(0.3), "This could possibly be");
    }

    #[test]
    fn exact_keyword_match_picks_its_family() {
        let sentence = describe("hammer", 0.95);
        assert!(sentence.starts_with("I'm very confident this is a Hammer,"));
        assert!(sentence.contains("practical tool"));
    }

    #[test]
    fn compound_word_matches_by_contained_keyword() {
        // "goldfish" is not a keyword and shares no whole token with any
        // rule, but contains "fish".
        let sentence = describe("goldfish", 0.95);
        assert!(sentence.contains("a Goldfish,"));
        assert!(sentence.contains("aquatic or reptilian"));
    }

    #[test]
    fn underscored_label_is_normalized_and_title_cased() {
        let sentence = describe("great_white_shark", 0.8);
        assert!(sentence.contains("a Great White Shark,"));
        assert!(sentence.contains("aquatic or reptilian"));
    }

    #[test]
    fn overlap_match_finds_family_for_compound_label() {
        // "tabby cat" is not a keyword anywhere, but "cat" is a mammal keyword.
        let sentence = describe("tabby cat", 0.6);
        assert!(sentence.contains("mammalian creature"));
    }

    #[test]
    fn superset_rule_preferred_over_partial_overlap() {
        // "guinea pig": the mammal rule covers both tokens ("guinea pig" is a
        // keyword), so it must win even though "pig" alone also overlaps.
        let sentence = describe("guinea pig", 0.6);
        assert!(sentence.contains("mammalian creature"));
    }

    #[test]
    fn unknown_label_gets_generic_blurb() {
        let sentence = describe("qwertyzug", 0.2);
        assert_eq!(
            sentence,
            format!(
                "This could possibly be a Qwertyzug, {}.",
                "a distinctive and recognizable object with unique identifying features, \
                 characteristic properties, and notable attributes"
            )
        );
    }

    #[test]
    fn describe_is_idempotent() {
        let first = describe("golden retriever", 0.87);
        let second = describe("golden retriever", 0.87);
        assert_eq!(first, second);
    }

    #[test]
    fn category_first_match_wins_in_listed_order() {
        // "cat" appears in the animal list before anything else could claim it.
        assert_eq!(category("tabby_cat"), "This is an animal");
        assert_eq!(category("sports car"), "This is a vehicle");
        assert_eq!(category("apple pie"), "This is food");
        assert_eq!(category("church"), "This is a building");
    }

    #[test]
    fn category_falls_back_to_generic_object() {
        assert_eq!(category("qwertyzug"), "This appears to be an object");
    }
}
