//! Assembly: builds the teloxide Bot and the handler chain from config.

use std::sync::Arc;

use classifier::{HttpInferenceClassifier, ImageClassifier};
use event_log::{EventSink, WebhookEventSink};
use handler_chain::HandlerChain;
use handlers::{
    AnalyzeCommandHandler, ImageHandler, LongTextHandler, ShortTextHandler, StartHelpHandler,
};
use llm_analysis::{AnalysisClient, OpenAiAnalysisClient};
use smartbot_core::Bot as CoreBot;
use tracing::{error, info, warn};

use crate::config::BotConfig;

/// Creates the teloxide Bot, honoring a custom API URL when configured.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Wires the full handler chain. Order is routing: commands first, then
/// photos, then long text, then everything textual that remains.
pub fn build_handler_chain(config: &BotConfig, bot: Arc<dyn CoreBot>) -> HandlerChain {
    let events: Arc<dyn EventSink> =
        Arc::new(WebhookEventSink::new(config.event_webhook_url.clone()));
    if config.event_webhook_url.is_none() {
        info!("EVENT_WEBHOOK_URL not set; event logging disabled");
    }

    let mut http_classifier = HttpInferenceClassifier::new(config.classifier.inference_url.clone());
    if let Some(ref labels_url) = config.classifier.labels_url {
        http_classifier = http_classifier.with_labels_url(labels_url.clone());
    }
    let image_classifier: Arc<dyn ImageClassifier> = Arc::new(http_classifier);

    let analysis: Option<Arc<dyn AnalysisClient>> = match &config.llm {
        Some(llm) => {
            info!(model = %llm.model, base_url = %llm.base_url, "LLM analysis enabled");
            Some(Arc::new(
                OpenAiAnalysisClient::new(llm.api_key.clone())
                    .with_base_url(llm.base_url.clone())
                    .with_model(llm.model.clone()),
            ) as Arc<dyn AnalysisClient>)
        }
        None => {
            warn!("LLM_API_KEY not set; long texts will get the how-to-enable explanation");
            None
        }
    };

    HandlerChain::new()
        .add_handler(Arc::new(StartHelpHandler::new(bot.clone())))
        .add_handler(Arc::new(AnalyzeCommandHandler::new(
            bot.clone(),
            analysis.clone(),
            events.clone(),
        )))
        .add_handler(Arc::new(
            ImageHandler::new(bot.clone(), image_classifier, events.clone())
                .with_top_k(config.classifier.top_k),
        ))
        .add_handler(Arc::new(LongTextHandler::new(
            bot.clone(),
            analysis,
            events.clone(),
        )))
        .add_handler(Arc::new(ShortTextHandler::new(bot, events)))
}
