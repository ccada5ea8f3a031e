//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use smartbot_telegram::BotConfig;

#[derive(Parser)]
#[command(name = "smartbot")]
#[command(about = "Smart assistant Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot with long polling (config from env; token overrides BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run the bot behind a Telegram webhook (TELEGRAM_WEBHOOK_URL, HOST, PORT).
    Webhook {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
