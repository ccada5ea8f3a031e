//! # smartbot-core
//!
//! Core types shared by every other crate: user/chat/message, the [`Handler`]
//! trait, the [`Bot`] transport trait, errors, and tracing setup. No Telegram,
//! HTTP, or AI logic lives here.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Bot, Chat, Handler, HandlerResponse, Message, MessageContent, ToCoreMessage, ToCoreUser, User,
};
