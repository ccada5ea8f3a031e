//! Parsing model output into [`TextAnalysis`], with explicit fallback.
//!
//! Models asked for JSON still wrap it in markdown fences, prepend prose, or
//! return garbage. `parse_analysis` never fails: it returns either the parsed
//! analysis or a tagged fallback reason the caller turns into a degraded one.

use serde::Deserialize;

use crate::{Sentiment, TextAnalysis};

/// Summary substituted when the model's JSON had no `summary` key.
pub(crate) const NO_SUMMARY: &str = "No summary available";

/// Outcome of parsing model output.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAnalysis {
    /// Valid JSON with the expected shape (missing keys defaulted).
    Ok(TextAnalysis),
    /// Not parseable as JSON; carries the parser's reason.
    Fallback(String),
}

/// Shape the model is asked to produce. Every key is optional so a partial
/// object still parses; defaults are applied afterwards.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    summary: Option<String>,
    tasks: Option<Vec<String>>,
    sentiment: Option<String>,
}

/// Extracts the content of a markdown code fence, if the text contains one.
///
/// Handles both ```json-tagged and bare ``` fences; without a fence the input
/// is returned unchanged.
pub fn extract_fenced(content: &str) -> &str {
    if let Some(start) = content.find("```json") {
        let rest = &content[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
    }
    if let Some(start) = content.find("```") {
        let rest = &content[start + "```".len()..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
    }
    content.trim()
}

/// Parses model output into an analysis, stripping any markdown fence first.
/// Missing keys default to "No summary available" / empty tasks / neutral;
/// the sentiment value is matched case-insensitively.
pub fn parse_analysis(content: &str) -> ParsedAnalysis {
    let body = extract_fenced(content);
    match serde_json::from_str::<RawAnalysis>(body) {
        Ok(raw) => ParsedAnalysis::Ok(TextAnalysis {
            summary: raw.summary.unwrap_or_else(|| NO_SUMMARY.to_string()),
            tasks: raw.tasks.unwrap_or_default(),
            sentiment: raw
                .sentiment
                .map(|s| Sentiment::from_label(&s))
                .unwrap_or(Sentiment::Neutral),
        }),
        Err(e) => ParsedAnalysis::Fallback(e.to_string()),
    }
}
