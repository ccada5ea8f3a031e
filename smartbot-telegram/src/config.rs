//! Env config: Telegram connection, LLM credentials, classifier endpoints,
//! event sink, webhook server, and logging. Call validate() after load()
//! to fail fast on malformed URLs.

use anyhow::Result;
use std::env;

const DEFAULT_LLM_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_LLM_MODEL: &str = "openai/gpt-3.5-turbo";
const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:8500/inference";
const DEFAULT_LOG_FILE: &str = "logs/smartbot.log";
const DEFAULT_TOP_K: usize = 3;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// LLM credentials and endpoint; present only when LLM_API_KEY is set.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Image classification endpoints and ranking depth.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// INFERENCE_URL
    pub inference_url: String,
    /// IMAGENET_LABELS_URL; the classifier's built-in default applies when unset.
    pub labels_url: Option<String>,
    /// CLASSIFY_TOP_K
    pub top_k: usize,
}

/// Webhook-mode server settings.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// TELEGRAM_WEBHOOK_URL (public base URL Telegram calls back on)
    pub url: Option<String>,
    /// TELEGRAM_SECRET_TOKEN
    pub secret_token: Option<String>,
    /// HOST
    pub host: String,
    /// PORT
    pub port: u16,
}

/// Full bot config, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    pub llm: Option<LlmConfig>,
    pub classifier: ClassifierConfig,
    /// EVENT_WEBHOOK_URL; event logging is disabled when unset.
    pub event_webhook_url: Option<String>,
    pub webhook: WebhookConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env_opt("TELEGRAM_API_URL").or_else(|| env_opt("TELOXIDE_API_URL"));
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        let llm = env_opt("LLM_API_KEY").map(|api_key| LlmConfig {
            api_key,
            base_url: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
        });

        let classifier = ClassifierConfig {
            inference_url: env::var("INFERENCE_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
            labels_url: env_opt("IMAGENET_LABELS_URL"),
            top_k: env::var("CLASSIFY_TOP_K")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOP_K),
        };

        let webhook = WebhookConfig {
            url: env_opt("TELEGRAM_WEBHOOK_URL"),
            secret_token: env_opt("TELEGRAM_SECRET_TOKEN"),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            llm,
            classifier,
            event_webhook_url: env_opt("EVENT_WEBHOOK_URL"),
            webhook,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        check_url("TELEGRAM_API_URL", self.telegram_api_url.as_deref())?;
        check_url("TELEGRAM_WEBHOOK_URL", self.webhook.url.as_deref())?;
        check_url("EVENT_WEBHOOK_URL", self.event_webhook_url.as_deref())?;
        check_url("INFERENCE_URL", Some(&self.classifier.inference_url))?;
        check_url("IMAGENET_LABELS_URL", self.classifier.labels_url.as_deref())?;
        if let Some(ref llm) = self.llm {
            check_url("LLM_API_BASE", Some(&llm.base_url))?;
        }
        Ok(())
    }
}

/// Reads an env var, treating empty/blank values as unset.
fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn check_url(name: &str, value: Option<&str>) -> Result<()> {
    if let Some(url_str) = value {
        if reqwest::Url::parse(url_str).is_err() {
            anyhow::bail!("{} is set but not a valid URL: {}", name, url_str);
        }
    }
    Ok(())
}
