//! Long-text handler: messages past the threshold get an LLM analysis reply
//! (summary, tasks, sentiment). Without a configured credential the user gets
//! an explanation instead; the analysis adapter itself never fails.

use std::sync::Arc;

use async_trait::async_trait;
use event_log::{spawn_log, EventRecord, EventSink, EventType};
use llm_analysis::{AnalysisClient, Sentiment, TextAnalysis};
use serde_json::json;
use smartbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use crate::LONG_TEXT_THRESHOLD;

const MSG_ANALYZING: &str = "🤖 Analyzing your message with AI...";

/// Handles texts longer than the threshold.
///
/// **External interactions:** Bot trait (send/edit), AnalysisClient (LLM),
/// EventSink (detached logging).
pub struct LongTextHandler {
    bot: Arc<dyn CoreBot>,
    analysis: Option<Arc<dyn AnalysisClient>>,
    events: Arc<dyn EventSink>,
}

impl LongTextHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        analysis: Option<Arc<dyn AnalysisClient>>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            bot,
            analysis,
            events,
        }
    }
}

#[async_trait]
impl Handler for LongTextHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = match message.text() {
            Some(t) => t,
            None => return Ok(HandlerResponse::Continue),
        };
        // Commands are dispatched by their own handlers, not as message text.
        if text.starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }
        let char_count = text.chars().count();
        if char_count <= LONG_TEXT_THRESHOLD {
            return Ok(HandlerResponse::Continue);
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_length = char_count,
            "Processing long text message"
        );

        spawn_log(
            self.events.clone(),
            EventRecord::new(
                EventType::TextMessage,
                message.user.id,
                message.chat.id,
                json!({"message_text": text, "message_length": char_count}),
            ),
        );

        let placeholder_id = match self
            .bot
            .send_message_and_return_id(&message.chat, MSG_ANALYZING)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "Failed to send analysis placeholder message");
                return Ok(HandlerResponse::Stop);
            }
        };

        run_analysis(
            &self.bot,
            self.analysis.as_ref(),
            &self.events,
            message,
            text,
            &placeholder_id,
        )
        .await
    }
}

/// Shared analysis flow for the long-text path and the explicit command:
/// analyze (or substitute the not-configured placeholder), edit the reply in,
/// and log an llm_analysis event with the original text and the result.
pub(crate) async fn run_analysis(
    bot: &Arc<dyn CoreBot>,
    client: Option<&Arc<dyn AnalysisClient>>,
    events: &Arc<dyn EventSink>,
    message: &Message,
    text: &str,
    placeholder_id: &str,
) -> Result<HandlerResponse> {
    let (analysis, reply) = match client {
        Some(client) => {
            let analysis = client.analyze(text).await;
            let reply = build_analysis_reply(&analysis);
            (analysis, reply)
        }
        None => (
            TextAnalysis::not_configured(),
            build_not_configured_reply(text.chars().count()),
        ),
    };

    if let Err(e) = bot.edit_message(&message.chat, placeholder_id, &reply).await {
        error!(error = %e, "Failed to edit in analysis result");
    }

    spawn_log(
        events.clone(),
        EventRecord::new(
            EventType::LlmAnalysis,
            message.user.id,
            message.chat.id,
            json!({"original_text": text, "analysis": analysis}),
        ),
    );

    Ok(HandlerResponse::Reply(reply))
}

/// Builds the HTML analysis reply: summary, tasks when present, sentiment
/// line with its emoji.
pub fn build_analysis_reply(analysis: &TextAnalysis) -> String {
    let mut parts = vec![
        "📊 <b>AI Analysis</b>".to_string(),
        String::new(),
        format!("📝 <b>Summary:</b>\n{}", analysis.summary),
        String::new(),
    ];

    if !analysis.tasks.is_empty() {
        let tasks_text = analysis
            .tasks
            .iter()
            .map(|task| format!("• {}", task))
            .collect::<Vec<_>>()
            .join("\n");
        parts.push(format!("✅ <b>Tasks/To-dos:</b>\n{}\n", tasks_text));
    }

    parts.push(format!(
        "{} <b>Sentiment:</b> {}",
        sentiment_emoji(analysis.sentiment),
        sentiment_title(analysis.sentiment)
    ));

    parts.join("\n")
}

/// Explains how to enable analysis when no credential is configured.
pub fn build_not_configured_reply(message_length: usize) -> String {
    format!(
        "📊 <b>AI Analysis</b>\n\n\
         ⚠️ <b>LLM API key not configured</b>\n\n\
         To enable AI analysis, add your LLM_API_KEY to the .env file.\n\
         You can get a free API key from https://openrouter.ai\n\n\
         📝 <b>Message length:</b> {} characters\n\
         💡 <b>Tip:</b> Messages longer than {} characters will be analyzed when LLM_API_KEY is configured.",
        message_length, LONG_TEXT_THRESHOLD
    )
}

fn sentiment_emoji(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Negative => "😟",
        Sentiment::Neutral => "😐",
    }
}

fn sentiment_title(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Positive",
        Sentiment::Negative => "Negative",
        Sentiment::Neutral => "Neutral",
    }
}
