//! OpenAI-compatible analysis client: fixed JSON-demanding prompt, low
//! temperature, bounded timeout, and degrade-on-everything error handling.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::parse::{parse_analysis, ParsedAnalysis};
use crate::{AnalysisClient, TextAnalysis};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// Low temperature biases the model toward deterministic structured output.
const TEMPERATURE: f32 = 0.3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that analyzes text messages. Always respond with valid JSON only.";

/// Builds the user prompt: summary, tasks, sentiment, JSON shape pinned.
fn build_prompt(text: &str) -> String {
    format!(
        "Analyze the following text message and provide:\n\
         1. A concise summary (2-3 sentences)\n\
         2. A list of tasks/to-dos mentioned (if any)\n\
         3. The sentiment (positive, neutral, or negative)\n\
         \n\
         Text: {}\n\
         \n\
         Respond in JSON format:\n\
         {{\n\
             \"summary\": \"concise summary here\",\n\
             \"tasks\": [\"task1\", \"task2\"],\n\
             \"sentiment\": \"positive|neutral|negative\"\n\
         }}",
        text
    )
}

/// Analysis client for any OpenAI-compatible chat-completion endpoint.
#[derive(Clone)]
pub struct OpenAiAnalysisClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiAnalysisClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Requests a completion and returns the assistant message text.
    /// Status and transport failures are turned into degraded analyses by
    /// the caller; this only distinguishes them.
    async fn request_completion(&self, text: &str) -> Result<String, TextAnalysis> {
        let prompt = build_prompt(text);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatRequestMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "LLM request failed");
                TextAnalysis::degraded(format!("Error analyzing text: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "LLM API returned error status");
            return Err(TextAnalysis::degraded(format!(
                "LLM API error: {}",
                status.as_u16()
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "LLM response body was not valid JSON");
            TextAnalysis::degraded(format!("Error analyzing text: {}", e))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl AnalysisClient for OpenAiAnalysisClient {
    async fn analyze(&self, text: &str) -> TextAnalysis {
        let content = match self.request_completion(text).await {
            Ok(content) => content,
            Err(degraded) => return degraded,
        };

        match parse_analysis(&content) {
            ParsedAnalysis::Ok(analysis) => {
                info!(
                    tasks = analysis.tasks.len(),
                    sentiment = analysis.sentiment.as_str(),
                    "Text analysis completed"
                );
                analysis
            }
            ParsedAnalysis::Fallback(reason) => {
                warn!(reason = %reason, "LLM output was not parseable as analysis JSON");
                TextAnalysis::degraded(format!(
                    "Analysis completed but parsing failed: {}",
                    reason
                ))
            }
        }
    }
}
