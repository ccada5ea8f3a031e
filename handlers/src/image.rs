//! Image handler: downloads the photo, classifies it, and replies with a
//! ranked recognition report. Classification failures become a user-visible
//! error message and are still logged as an event.

use std::sync::Arc;

use async_trait::async_trait;
use classifier::{ImageClassifier, Prediction};
use descriptions::{category, describe, title_label};
use event_log::{spawn_log, EventRecord, EventSink, EventType};
use serde_json::json;
use smartbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

const MSG_ANALYZING: &str = "🔍 Analyzing image...";
const DEFAULT_TOP_K: usize = 3;

/// Handles photo messages: placeholder → classify → edit in the report.
///
/// **External interactions:** Bot trait (send/edit/download), ImageClassifier
/// (inference), EventSink (detached logging).
pub struct ImageHandler {
    bot: Arc<dyn CoreBot>,
    classifier: Arc<dyn ImageClassifier>,
    events: Arc<dyn EventSink>,
    top_k: usize,
}

impl ImageHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        classifier: Arc<dyn ImageClassifier>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            bot,
            classifier,
            events,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Overrides how many ranked predictions the reply shows (ignored if 0).
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        if top_k > 0 {
            self.top_k = top_k;
        }
        self
    }

    /// Download + classify. Any failure collapses into a display string for
    /// the error reply and the event record.
    async fn fetch_predictions(
        &self,
        file_id: &str,
    ) -> std::result::Result<Vec<Prediction>, String> {
        let image = self
            .bot
            .download_photo(file_id)
            .await
            .map_err(|e| e.to_string())?;
        let predictions = self
            .classifier
            .classify(&image, self.top_k)
            .await
            .map_err(|e| e.to_string())?;
        if predictions.is_empty() {
            return Err("classifier returned no predictions".to_string());
        }
        Ok(predictions)
    }
}

#[async_trait]
impl Handler for ImageHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let file_id = match message.photo_file_id() {
            Some(id) => id.to_string(),
            None => return Ok(HandlerResponse::Continue),
        };
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            file_id = %file_id,
            "Processing image message"
        );

        let placeholder_id = match self
            .bot
            .send_message_and_return_id(&message.chat, MSG_ANALYZING)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "Failed to send image placeholder message");
                return Ok(HandlerResponse::Stop);
            }
        };

        match self.fetch_predictions(&file_id).await {
            Ok(predictions) => {
                let reply = build_image_reply(&predictions);
                if let Err(e) = self
                    .bot
                    .edit_message(&message.chat, &placeholder_id, &reply)
                    .await
                {
                    error!(error = %e, "Failed to edit in recognition result");
                }
                let prediction_payload: Vec<_> = predictions
                    .iter()
                    .map(|p| json!({"label": p.label, "confidence": p.confidence * 100.0}))
                    .collect();
                spawn_log(
                    self.events.clone(),
                    EventRecord::new(
                        EventType::ImageMessage,
                        message.user.id,
                        message.chat.id,
                        json!({"file_id": file_id, "predictions": prediction_payload}),
                    ),
                );
                Ok(HandlerResponse::Reply(reply))
            }
            Err(err) => {
                error!(error = %err, user_id = message.user.id, "Image classification failed");
                let error_text = format!("❌ Error processing image: {}", err);
                let _ = self
                    .bot
                    .edit_message(&message.chat, &placeholder_id, &error_text)
                    .await;
                spawn_log(
                    self.events.clone(),
                    EventRecord::new(
                        EventType::ImageMessage,
                        message.user.id,
                        message.chat.id,
                        json!({"file_id": file_id, "error": err}),
                    ),
                );
                Ok(HandlerResponse::Stop)
            }
        }
    }
}

/// Builds the HTML recognition report: header, category line, primary
/// identification, then one ranked block per prediction.
pub fn build_image_reply(predictions: &[Prediction]) -> String {
    let top = &predictions[0];
    let mut parts = vec![
        "🖼️ <b>Image Recognition Analysis</b>\n".to_string(),
        format!("📸 {}.\n", category(&top.label).to_lowercase()),
        format!(
            "🎯 <b>Primary Identification:</b>\n{}\n",
            describe(&top.label, top.confidence)
        ),
        "\n📊 <b>Detailed Predictions:</b>\n".to_string(),
    ];

    for (i, prediction) in predictions.iter().enumerate() {
        let rank = i + 1;
        let marker = match rank {
            1 => "🥇",
            2 => "🥈",
            _ => "🥉",
        };
        let percent = prediction.confidence * 100.0;
        parts.push(format!(
            "{} <b>{}.</b> {}\n   {}\n   Confidence: {:.1}% ({})\n",
            marker,
            rank,
            escape_html(&title_label(&prediction.label)),
            describe(&prediction.label, prediction.confidence),
            percent,
            confidence_tier(percent),
        ));
    }

    parts.join("\n")
}

/// Coarse tier for a confidence percentage.
pub fn confidence_tier(percent: f32) -> &'static str {
    if percent > 80.0 {
        "Very High"
    } else if percent > 50.0 {
        "High"
    } else if percent > 30.0 {
        "Medium"
    } else {
        "Low"
    }
}

/// Minimal HTML escaping for label text inside <b> tags.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
