//! # event-log
//!
//! Best-effort event records for an external workflow webhook. Sends are
//! fire-and-forget: [`spawn_log`] detaches them, failures are swallowed, and
//! nothing here can delay or fail a user-visible reply.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// What happened. Serialized snake_case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    TextMessage,
    ImageMessage,
    LlmAnalysis,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventType::TextMessage => "text_message",
            EventType::ImageMessage => "image_message",
            EventType::LlmAnalysis => "llm_analysis",
        };
        f.write_str(s)
    }
}

/// One write-once event record. Sent to the sink, never persisted locally.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub chat_id: i64,
    pub data: serde_json::Value,
}

impl EventRecord {
    /// Creates a record stamped with the current time.
    pub fn new(event_type: EventType, user_id: i64, chat_id: i64, data: serde_json::Value) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            user_id,
            chat_id,
            data,
        }
    }
}

/// Event destination. Returns whether the record was accepted; never errors.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn log_event(&self, record: &EventRecord) -> bool;
}

/// Sink that POSTs records to a configured webhook URL.
///
/// With no URL configured every call returns false without touching the
/// network. Failures are logged at warn level and otherwise swallowed.
pub struct WebhookEventSink {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookEventSink {
    pub fn new(url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self { client, url }
    }

    /// True when a webhook URL is configured.
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }
}

#[async_trait]
impl EventSink for WebhookEventSink {
    async fn log_event(&self, record: &EventRecord) -> bool {
        let url = match &self.url {
            Some(url) => url,
            None => {
                debug!(event_type = %record.event_type, "Event sink not configured, dropping event");
                return false;
            }
        };

        match self.client.post(url).json(record).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(event_type = %record.event_type, "Event logged");
                true
            }
            Ok(response) => {
                warn!(
                    event_type = %record.event_type,
                    status = response.status().as_u16(),
                    "Event sink rejected event"
                );
                false
            }
            Err(e) => {
                warn!(event_type = %record.event_type, error = %e, "Event sink unreachable");
                false
            }
        }
    }
}

/// Detaches an event send so the caller's reply latency is unaffected.
/// The result is intentionally discarded; `log_event` already swallows
/// failures.
pub fn spawn_log(sink: Arc<dyn EventSink>, record: EventRecord) {
    tokio::spawn(async move {
        sink.log_event(&record).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// With no URL configured log_event returns false and makes no request.
    #[tokio::test]
    async fn test_disabled_sink_returns_false() {
        let sink = WebhookEventSink::new(None);
        let record = EventRecord::new(EventType::TextMessage, 1, 2, json!({"message_length": 5}));
        assert!(!sink.is_enabled());
        assert!(!sink.log_event(&record).await);
    }

    #[test]
    fn test_record_serializes_wire_shape() {
        let record = EventRecord::new(
            EventType::LlmAnalysis,
            123,
            456,
            json!({"original_text": "hello"}),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["event_type"], "llm_analysis");
        assert_eq!(value["user_id"], 123);
        assert_eq!(value["chat_id"], 456);
        assert_eq!(value["data"]["original_text"], "hello");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_event_type_display_matches_wire_names() {
        assert_eq!(EventType::TextMessage.to_string(), "text_message");
        assert_eq!(EventType::ImageMessage.to_string(), "image_message");
        assert_eq!(EventType::LlmAnalysis.to_string(), "llm_analysis");
    }
}
