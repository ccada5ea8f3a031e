//! `/start` and `/help`: static feature-tour replies, no events.

use std::sync::Arc;

use async_trait::async_trait;
use smartbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

const START_TEXT: &str = "👋 <b>Welcome! I'm your Smart AI Assistant Bot!</b>\n\n\
🤖 <b>What I can do:</b>\n\n\
📸 <b>Image Recognition:</b>\n\
   Send me any photo and I'll identify what's in it!\n\
   I'll show you the top 3 most likely objects.\n\n\
📝 <b>Text Analysis:</b>\n\
   • Short messages: Get word/character count\n\
   • Long messages (>200 chars): AI-powered analysis\n\
     - Generate summaries\n\
     - Extract tasks/to-dos\n\
     - Analyze sentiment\n\n\
🚀 <b>Try it now:</b>\n\
   • Send me a photo 📷\n\
   • Send a short message 💬\n\
   • Send a long message for AI analysis 🤖\n\n\
Type /help for more info!";

const HELP_TEXT: &str = "📖 <b>Bot Commands:</b>\n\n\
/start - Welcome message and overview\n\
/help - Show this help message\n\
/analyze &lt;text&gt; - Run AI analysis on the given text\n\n\
🎯 <b>How to use me:</b>\n\n\
📸 <b>Image Recognition:</b>\n\
   Just send me any photo! I'll identify what's in it\n\
   and show you the top 3 most likely objects with confidence scores.\n\n\
💬 <b>Short Messages:</b>\n\
   I'll show you message statistics (word count, character count)\n\
   and helpful tips.\n\n\
📝 <b>Long Messages (>200 characters):</b>\n\
   I'll automatically analyze your text and provide:\n\
   • 📊 Concise summary\n\
   • ✅ Extracted tasks/to-dos\n\
   • 😊 Sentiment analysis (positive/neutral/negative)\n\n\
💡 <b>Pro Tip:</b> The longer and more detailed your message,\n\
the better the AI analysis will be!";

/// Replies to `/start` and `/help`.
pub struct StartHelpHandler {
    bot: Arc<dyn CoreBot>,
}

impl StartHelpHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHelpHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = match message.text() {
            Some(t) => t.trim(),
            None => return Ok(HandlerResponse::Continue),
        };
        let command = text
            .split_whitespace()
            .next()
            .map(|c| c.split('@').next().unwrap_or(c));

        let reply = match command {
            Some("/start") => START_TEXT,
            Some("/help") => HELP_TEXT,
            _ => return Ok(HandlerResponse::Continue),
        };

        info!(user_id = message.user.id, command = %text, "Serving command reply");
        if let Err(e) = self.bot.send_message(&message.chat, reply).await {
            error!(error = %e, "Failed to send command reply");
            return Ok(HandlerResponse::Stop);
        }
        Ok(HandlerResponse::Reply(reply.to_string()))
    }
}
