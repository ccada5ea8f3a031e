//! Runners: long polling and webhook. Each teloxide update is converted to a
//! core Message and handed to the HandlerChain on its own task, so updates
//! are processed independently and concurrently.

use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use handler_chain::HandlerChain;
use smartbot_core::{MessageContent, ToCoreMessage};
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::config::WebhookConfig;

/// Converts and hands off one update; handling never blocks the listener.
fn dispatch(chain: HandlerChain, msg: teloxide::types::Message) {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    match &core_msg.content {
        MessageContent::Text(text) => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_length = text.chars().count(),
            "Received text message"
        ),
        MessageContent::Photo { file_id } => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            file_id = %file_id,
            "Received photo message"
        ),
        MessageContent::Unsupported => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received unsupported message type"
        ),
    }

    tokio::spawn(async move {
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
        }
    });
}

/// Logs the bot identity once at startup (best effort).
async fn log_bot_identity(bot: &teloxide::Bot) {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity confirmed");
        }
    }
}

/// Runs the bot with long polling.
#[instrument(skip(bot, handler_chain))]
pub async fn run_polling(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    log_bot_identity(&bot).await;
    info!("Starting bot (long polling)");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        async move {
            dispatch(chain, msg);
            Ok(())
        }
    })
    .await;

    Ok(())
}

/// Runs the bot behind a Telegram webhook served on HOST:PORT. The webhook
/// is registered at `{TELEGRAM_WEBHOOK_URL}/webhook`; when a secret token is
/// configured Telegram echoes it back and mismatching requests are rejected.
#[instrument(skip(bot, handler_chain, config))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    config: &WebhookConfig,
) -> Result<()> {
    let base_url = config
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("TELEGRAM_WEBHOOK_URL not set, cannot run in webhook mode"))?;
    let url: url::Url = format!("{}/webhook", base_url.trim_end_matches('/')).parse()?;
    let address: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let mut options = webhooks::Options::new(address, url.clone());
    if let Some(token) = &config.secret_token {
        options = options.secret_token(token.clone());
    }

    log_bot_identity(&bot).await;
    let listener = webhooks::axum(bot.clone(), options).await?;
    info!(webhook_url = %url, address = %address, "Starting bot (webhook)");

    let chain = handler_chain;
    teloxide::repl_with_listener(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();
            async move {
                dispatch(chain, msg);
                Ok(())
            }
        },
        listener,
    )
    .await;

    Ok(())
}
