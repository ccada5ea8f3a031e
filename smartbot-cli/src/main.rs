//! smartbot CLI: run the bot with long polling or behind a webhook.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use smartbot_cli::{load_config, Cli, Commands};
use smartbot_core::{init_tracing, Bot as CoreBot};
use smartbot_telegram::{
    build_handler_chain, build_teloxide_bot, run_polling, run_webhook, BotConfig,
    TelegramBotAdapter,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config, Mode::Polling).await
        }
        Commands::Webhook { token } => {
            let config = load_config(token)?;
            run_bot(config, Mode::Webhook).await
        }
    }
}

enum Mode {
    Polling,
    Webhook,
}

async fn run_bot(config: BotConfig, mode: Mode) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;
    info!(log_file = %config.log_file, "Configuration loaded");

    let bot = build_teloxide_bot(&config);
    let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = build_handler_chain(&config, adapter);

    match mode {
        Mode::Polling => run_polling(bot, chain).await,
        Mode::Webhook => run_webhook(bot, chain, &config.webhook).await,
    }
}
