//! Explicit `/analyze` command: runs the analysis flow on the command
//! argument regardless of length. A bare `/analyze` gets a usage prompt and
//! nothing is analyzed or logged.

use std::sync::Arc;

use async_trait::async_trait;
use event_log::EventSink;
use llm_analysis::AnalysisClient;
use smartbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use crate::long_text::run_analysis;

const COMMAND: &str = "/analyze";
const MSG_USAGE: &str = "Please provide text to analyze. Usage: /analyze <your text>";
const MSG_ANALYZING: &str = "🤖 Analyzing with AI...";

/// Handles `/analyze <text>`.
///
/// **External interactions:** Bot trait (send/edit), AnalysisClient (LLM),
/// EventSink (detached logging via the shared analysis flow).
pub struct AnalyzeCommandHandler {
    bot: Arc<dyn CoreBot>,
    analysis: Option<Arc<dyn AnalysisClient>>,
    events: Arc<dyn EventSink>,
}

impl AnalyzeCommandHandler {
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
impl Handler for AnalyzeCommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = match message.text() {
            Some(t) => t,
            None => return Ok(HandlerResponse::Continue),
        };
        let argument = match parse_command(text) {
            Some(arg) => arg,
            None => return Ok(HandlerResponse::Continue),
        };

        if argument.is_empty() {
            info!(user_id = message.user.id, "Analyze command without argument");
            let _ = self.bot.send_message(&message.chat, MSG_USAGE).await;
            return Ok(HandlerResponse::Stop);
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            argument_length = argument.chars().count(),
            "Processing analyze command"
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
            argument,
            &placeholder_id,
        )
        .await
    }
}

/// Returns the command argument when the text is the `/analyze` command
/// (with or without a `@botname` suffix), or None for anything else. The
/// argument may be empty.
pub fn parse_command(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command = parts.next()?;
    let base = command.split('@').next().unwrap_or(command);
    if base != COMMAND {
        return None;
    }
    Some(parts.next().unwrap_or("").trim())
}
