//! Wraps teloxide::Bot and implements [`smartbot_core::Bot`]. Production code
//! talks to Telegram through this; tests substitute another Bot impl.

use async_trait::async_trait;
use futures::StreamExt;
use smartbot_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ParseMode};

/// Thin wrapper around teloxide::Bot implementing the core Bot trait.
/// All outbound messages are sent with HTML parse mode.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;
        Ok(sent.id.0.to_string())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id: i32 = message_id.parse().map_err(|_| {
            BotError::Telegram(format!("Invalid message_id for edit: {}", message_id))
        })?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text)
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;
        Ok(())
    }

    async fn download_photo(&self, file_id: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(file_id.to_string())
            .await
            .map_err(|e| BotError::Telegram(e.to_string()))?;

        let mut stream = self.bot.download_file_stream(&file.path);
        let mut bytes = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| BotError::Telegram(e.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}
