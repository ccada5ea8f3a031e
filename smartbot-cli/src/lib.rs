//! # smartbot-cli
//!
//! Binary entry point: argument parsing, config loading, runner dispatch.

pub mod cli;

pub use cli::{load_config, Cli, Commands};
pub use smartbot_telegram::BotConfig;
