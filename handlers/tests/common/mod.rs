//! Shared mocks for handler tests: no Telegram, no network, no LLM.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use classifier::{ClassifyError, ImageClassifier, Prediction};
use event_log::{EventRecord, EventSink};
use llm_analysis::{AnalysisClient, TextAnalysis};
use smartbot_core::{Bot as CoreBot, BotError, Chat, Message, MessageContent, Result, User};

/// Mock Bot: records every sent/edited text, serves canned photo bytes.
pub struct MockBot {
    pub sent: Mutex<Vec<String>>,
    pub edited: Mutex<Vec<String>>,
    /// None makes `download_photo` fail.
    pub photo: Option<Vec<u8>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            edited: Mutex::new(Vec::new()),
            photo: Some(vec![0u8; 16]),
        }
    }

    pub fn without_photo() -> Self {
        Self {
            photo: None,
            ..Self::new()
        }
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn edited_texts(&self) -> Vec<String> {
        self.edited.lock().unwrap().clone()
    }
}

#[async_trait]
impl CoreBot for MockBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_message_and_return_id(&self, _chat: &Chat, text: &str) -> Result<String> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok("1".to_string())
    }

    async fn edit_message(&self, _chat: &Chat, _message_id: &str, text: &str) -> Result<()> {
        self.edited.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn download_photo(&self, _file_id: &str) -> Result<Vec<u8>> {
        self.photo
            .clone()
            .ok_or_else(|| BotError::Telegram("photo download failed".to_string()))
    }
}

/// Event sink that captures records instead of POSTing them.
pub struct CaptureSink {
    pub records: Mutex<Vec<EventRecord>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn captured(&self) -> Vec<EventRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSink for CaptureSink {
    async fn log_event(&self, record: &EventRecord) -> bool {
        self.records.lock().unwrap().push(record.clone());
        true
    }
}

/// Classifier serving canned predictions; None makes classify fail.
pub struct MockClassifier {
    pub predictions: Option<Vec<Prediction>>,
}

#[async_trait]
impl ImageClassifier for MockClassifier {
    async fn classify(
        &self,
        _image: &[u8],
        top_k: usize,
    ) -> std::result::Result<Vec<Prediction>, ClassifyError> {
        match &self.predictions {
            Some(predictions) => {
                let mut out = predictions.clone();
                out.truncate(top_k);
                Ok(out)
            }
            None => Err(ClassifyError::Malformed(
                "inference backend offline".to_string(),
            )),
        }
    }
}

/// Analysis client returning a canned result.
pub struct MockAnalysisClient {
    pub analysis: TextAnalysis,
}

#[async_trait]
impl AnalysisClient for MockAnalysisClient {
    async fn analyze(&self, _text: &str) -> TextAnalysis {
        self.analysis.clone()
    }
}

pub fn text_message(content: &str) -> Message {
    make_message(MessageContent::Text(content.to_string()))
}

pub fn photo_message(file_id: &str) -> Message {
    make_message(MessageContent::Photo {
        file_id: file_id.to_string(),
    })
}

pub fn make_message(content: MessageContent) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content,
        received_at: Utc::now(),
    }
}

/// Lets detached event-log tasks run before asserting on captured records.
pub async fn drain_spawned_tasks() {
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
}
