//! Core types: user, chat, message, handler response, and the Handler/Bot traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What an inbound message carries. Routing dispatches on this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text.
    Text(String),
    /// A photo attachment; `file_id` identifies the largest size variant.
    Photo { file_id: String },
    /// Anything else (stickers, voice, ...). Ignored by all handlers.
    Unsupported,
}

/// A single inbound message. Immutable once constructed; one per update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: MessageContent,
    pub received_at: DateTime<Utc>,
}

impl Message {
    /// Returns the text payload, if this is a text message.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the photo file id, if this is a photo message.
    pub fn photo_file_id(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Photo { file_id } => Some(file_id),
            _ => None,
        }
    }
}

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not this handler's message; pass to the next one.
    Continue,
    /// Handled; stop the chain with no response body.
    Stop,
    /// Handled; stop the chain and attach the reply text that was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// A message handler. The chain calls `handle` in registration order until
/// one returns Stop or Reply.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}

/// Outbound transport seam. Production code wraps Telegram; tests substitute
/// a mock.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message to the chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> crate::error::Result<()>;

    /// Sends a message and returns its id, so it can be edited later
    /// (placeholder → result pattern).
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str)
        -> crate::error::Result<String>;

    /// Edits a previously sent message in place.
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str)
        -> crate::error::Result<()>;

    /// Downloads the raw bytes of a photo by file id.
    async fn download_photo(&self, file_id: &str) -> crate::error::Result<Vec<u8>>;
}
