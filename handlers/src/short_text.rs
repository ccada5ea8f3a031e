//! Short-text handler: questions get a tip, greetings get a feature tour,
//! everything else gets message stats. No AI calls on this path.

use std::sync::Arc;

use async_trait::async_trait;
use event_log::{spawn_log, EventRecord, EventSink, EventType};
use serde_json::json;
use smartbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use crate::LONG_TEXT_THRESHOLD;

/// Greeting prefixes, matched case-insensitively at the start of the text.
const GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Handles texts at or below the long-text threshold.
///
/// **External interactions:** Bot trait (send), EventSink (detached logging).
pub struct ShortTextHandler {
    bot: Arc<dyn CoreBot>,
    events: Arc<dyn EventSink>,
}

impl ShortTextHandler {
    pub fn new(bot: Arc<dyn CoreBot>, events: Arc<dyn EventSink>) -> Self {
        Self { bot, events }
    }
}

#[async_trait]
impl Handler for ShortTextHandler {
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
        if char_count > LONG_TEXT_THRESHOLD {
            return Ok(HandlerResponse::Continue);
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_length = char_count,
            "Processing short text message"
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

        let reply = build_short_text_reply(text);
        if let Err(e) = self.bot.send_message(&message.chat, &reply).await {
            error!(error = %e, "Failed to send short-text reply");
            return Ok(HandlerResponse::Stop);
        }
        Ok(HandlerResponse::Reply(reply))
    }
}

/// Builds the short-text reply. Branch priority: question mark first, then
/// greeting prefix, then stats — so "Hello there?" counts as a question.
pub fn build_short_text_reply(text: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    if text.trim().ends_with('?') {
        parts.push("❓ I see you asked a question!".to_string());
        parts.push("💡 Try asking me in a longer message for a detailed AI analysis.".to_string());
    } else if is_greeting(text) {
        parts.push("👋 Hello! Nice to meet you!".to_string());
        parts.push("📸 Send me a photo to identify what's in it!".to_string());
        parts.push(format!(
            "📝 Or send a longer message (>{} chars) for AI analysis!",
            LONG_TEXT_THRESHOLD
        ));
    } else {
        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();
        parts.push("📊 <b>Message Stats:</b>".to_string());
        parts.push(format!("• Words: {}", word_count));
        parts.push(format!("• Characters: {}", char_count));
        parts.push(String::new());
        parts.push(format!(
            "💡 <b>Tip:</b> Send a message longer than {} characters for AI-powered analysis:",
            LONG_TEXT_THRESHOLD
        ));
        parts.push("   • Summary generation".to_string());
        parts.push("   • Task extraction".to_string());
        parts.push("   • Sentiment analysis".to_string());
    }

    parts.join("\n")
}

fn is_greeting(text: &str) -> bool {
    let lowered = text.to_lowercase();
    GREETINGS.iter().any(|g| lowered.starts_with(g))
}
