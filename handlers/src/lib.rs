//! # handlers
//!
//! The bot's response builders, each a [`smartbot_core::Handler`] in the
//! chain: explicit `/analyze` command, image recognition, long-text LLM
//! analysis, and short-text stats. Chain order decides routing; each handler
//! returns Continue for messages that are not its shape.

pub mod analyze_command;
pub mod commands;
pub mod image;
pub mod long_text;
pub mod short_text;

pub use analyze_command::AnalyzeCommandHandler;
pub use commands::StartHelpHandler;
pub use image::ImageHandler;
pub use long_text::LongTextHandler;
pub use short_text::ShortTextHandler;

/// Texts longer than this many characters take the LLM analysis path.
pub const LONG_TEXT_THRESHOLD: usize = 200;
