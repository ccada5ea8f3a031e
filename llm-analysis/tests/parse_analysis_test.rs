//! Unit tests for [`llm_analysis::parse_analysis`] and fence extraction.
//!
//! Covers: ```json fences, bare fences, raw JSON, garbage input, missing
//! keys, and sentiment normalization. No network involved.

use llm_analysis::{extract_fenced, parse_analysis, ParsedAnalysis, Sentiment, TextAnalysis};

/// **Test: a ```json fenced object parses; sentiment is lower-cased.**
#[test]
fn test_parse_json_fenced_block() {
    let content = "Here is the analysis:\n```json\n{\"summary\":\"S\",\"tasks\":[\"T1\"],\"sentiment\":\"Positive\"}\n```\nHope that helps!";
    let result = parse_analysis(content);
    assert_eq!(
        result,
        ParsedAnalysis::Ok(TextAnalysis {
            summary: "S".to_string(),
            tasks: vec!["T1".to_string()],
            sentiment: Sentiment::Positive,
        })
    );
}

/// **Test: a bare ``` fence (no language tag) is stripped the same way.**
#[test]
fn test_parse_bare_fenced_block() {
    let content = "```\n{\"summary\":\"S\",\"tasks\":[],\"sentiment\":\"negative\"}\n```";
    match parse_analysis(content) {
        ParsedAnalysis::Ok(analysis) => {
            assert_eq!(analysis.summary, "S");
            assert_eq!(analysis.sentiment, Sentiment::Negative);
        }
        other => panic!("expected Ok, got {:?}", other),
    }
}

/// **Test: raw JSON with no fence parses directly.**
#[test]
fn test_parse_raw_json() {
    let content = "{\"summary\":\"plain\",\"tasks\":[\"a\",\"b\"],\"sentiment\":\"neutral\"}";
    match parse_analysis(content) {
        ParsedAnalysis::Ok(analysis) => {
            assert_eq!(analysis.summary, "plain");
            assert_eq!(analysis.tasks, vec!["a".to_string(), "b".to_string()]);
            assert_eq!(analysis.sentiment, Sentiment::Neutral);
        }
        other => panic!("expected Ok, got {:?}", other),
    }
}

/// **Test: garbage input yields Fallback with a reason, never a panic or error.**
#[test]
fn test_parse_garbage_yields_fallback() {
    match parse_analysis("The text seems positive overall, nice weather!") {
        ParsedAnalysis::Fallback(reason) => assert!(!reason.is_empty()),
        other => panic!("expected Fallback, got {:?}", other),
    }
}

/// **Test: missing keys are defaulted: summary placeholder, empty tasks, neutral.**
#[test]
fn test_parse_missing_keys_defaulted() {
    match parse_analysis("{}") {
        ParsedAnalysis::Ok(analysis) => {
            assert_eq!(analysis.summary, "No summary available");
            assert!(analysis.tasks.is_empty());
            assert_eq!(analysis.sentiment, Sentiment::Neutral);
        }
        other => panic!("expected Ok, got {:?}", other),
    }
}

/// **Test: unknown sentiment values collapse to neutral.**
#[test]
fn test_parse_unknown_sentiment_is_neutral() {
    let content = "{\"summary\":\"S\",\"tasks\":[],\"sentiment\":\"ecstatic\"}";
    match parse_analysis(content) {
        ParsedAnalysis::Ok(analysis) => assert_eq!(analysis.sentiment, Sentiment::Neutral),
        other => panic!("expected Ok, got {:?}", other),
    }
}

/// **Test: sentiment matching is case-insensitive.**
#[test]
fn test_sentiment_from_label_case_insensitive() {
    assert_eq!(Sentiment::from_label("POSITIVE"), Sentiment::Positive);
    assert_eq!(Sentiment::from_label(" Negative "), Sentiment::Negative);
    assert_eq!(Sentiment::from_label("Neutral"), Sentiment::Neutral);
    assert_eq!(Sentiment::from_label(""), Sentiment::Neutral);
}

/// **Test: extract_fenced returns input unchanged when no fence is present.**
#[test]
fn test_extract_fenced_without_fence() {
    assert_eq!(extract_fenced("  {\"a\": 1}  "), "{\"a\": 1}");
}

/// **Test: extract_fenced prefers the ```json fence over a bare one.**
#[test]
fn test_extract_fenced_prefers_json_tag() {
    let content = "```json\n{\"tagged\": true}\n```";
    assert_eq!(extract_fenced(content), "{\"tagged\": true}");
}

/// **Test: TextAnalysis serializes sentiment lowercase (event payload shape).**
#[test]
fn test_analysis_serializes_lowercase_sentiment() {
    let analysis = TextAnalysis {
        summary: "S".to_string(),
        tasks: vec![],
        sentiment: Sentiment::Positive,
    };
    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["sentiment"], "positive");
}
