//! # llm-analysis
//!
//! Text analysis through an OpenAI-compatible chat-completion API. The
//! [`AnalysisClient`] trait always returns a fully populated [`TextAnalysis`]:
//! transport failures, bad status codes, and unparseable model output all
//! degrade to a default analysis whose summary explains what happened. No
//! failure mode reaches the caller as an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod client;
mod parse;

pub use client::OpenAiAnalysisClient;
pub use parse::{extract_fenced, parse_analysis, ParsedAnalysis};

/// Overall sentiment of the analyzed text. Serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Case-insensitive parse; anything unrecognized is Neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// Structured result of analyzing a text message. Always complete: defaults
/// are substituted for anything the model failed to provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub summary: String,
    pub tasks: Vec<String>,
    pub sentiment: Sentiment,
}

impl TextAnalysis {
    /// Degraded analysis whose summary explains why no real analysis ran.
    pub fn degraded(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            tasks: Vec::new(),
            sentiment: Sentiment::Neutral,
        }
    }

    /// Placeholder analysis used when no API credential is configured.
    pub fn not_configured() -> Self {
        Self::degraded("LLM API key not configured")
    }
}

/// Analyzes a text message. Infallible by contract: implementations degrade
/// internally instead of returning errors.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, text: &str) -> TextAnalysis;
}
