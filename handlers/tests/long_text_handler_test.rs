//! Unit tests for LongTextHandler and AnalyzeCommandHandler.
//!
//! Covers: the 200-character boundary, the analysis reply layout, the
//! not-configured path, event emission, and the /analyze usage prompt.

mod common;

use std::sync::Arc;

use common::{drain_spawned_tasks, text_message, CaptureSink, MockAnalysisClient, MockBot};
use event_log::EventType;
use handlers::analyze_command::parse_command;
use handlers::long_text::{build_analysis_reply, build_not_configured_reply};
use handlers::{AnalyzeCommandHandler, LongTextHandler, LONG_TEXT_THRESHOLD};
use llm_analysis::{AnalysisClient, Sentiment, TextAnalysis};
use smartbot_core::{Handler, HandlerResponse};

fn sample_analysis() -> TextAnalysis {
    TextAnalysis {
        summary: "Planning a busy week.".to_string(),
        tasks: vec!["Buy groceries".to_string(), "Call the bank".to_string()],
        sentiment: Sentiment::Positive,
    }
}

fn analysis_client() -> Arc<dyn AnalysisClient> {
    Arc::new(MockAnalysisClient {
        analysis: sample_analysis(),
    })
}

fn long_text() -> String {
    "a".repeat(LONG_TEXT_THRESHOLD + 1)
}

// --- reply builders ---

/// **Test: analysis reply shows summary, bulleted tasks, and the sentiment emoji.**
#[test]
fn test_analysis_reply_layout() {
    let reply = build_analysis_reply(&sample_analysis());
    assert!(reply.contains("📊 <b>AI Analysis</b>"));
    assert!(reply.contains("📝 <b>Summary:</b>\nPlanning a busy week."));
    assert!(reply.contains("✅ <b>Tasks/To-dos:</b>\n• Buy groceries\n• Call the bank"));
    assert!(reply.contains("😊 <b>Sentiment:</b> Positive"));
}

/// **Test: empty task list omits the tasks block entirely.**
#[test]
fn test_analysis_reply_without_tasks() {
    let analysis = TextAnalysis {
        summary: "Nothing to do.".to_string(),
        tasks: vec![],
        sentiment: Sentiment::Negative,
    };
    let reply = build_analysis_reply(&analysis);
    assert!(!reply.contains("Tasks/To-dos"));
    assert!(reply.contains("😟 <b>Sentiment:</b> Negative"));
}

/// **Test: neutral sentiment maps to the neutral emoji.**
#[test]
fn test_analysis_reply_neutral_emoji() {
    let reply = build_analysis_reply(&TextAnalysis::degraded("whatever"));
    assert!(reply.contains("😐 <b>Sentiment:</b> Neutral"));
}

/// **Test: not-configured reply names the env var and the message length.**
#[test]
fn test_not_configured_reply_mentions_key_and_length() {
    let reply = build_not_configured_reply(250);
    assert!(reply.contains("LLM API key not configured"));
    assert!(reply.contains("LLM_API_KEY"));
    assert!(reply.contains("250 characters"));
}

// --- LongTextHandler routing ---

/// **Test: 201 characters takes the analysis path and logs both events.**
#[tokio::test]
async fn test_long_text_is_analyzed_and_logged() {
    let bot = Arc::new(MockBot::new());
    let sink = Arc::new(CaptureSink::new());
    let handler = LongTextHandler::new(bot.clone(), Some(analysis_client()), sink.clone());

    let result = handler.handle(&text_message(&long_text())).await.unwrap();
    drain_spawned_tasks().await;

    assert!(matches!(result, HandlerResponse::Reply(_)));
    assert_eq!(
        bot.sent_texts(),
        vec!["🤖 Analyzing your message with AI...".to_string()]
    );
    assert!(bot.edited_texts()[0].contains("Planning a busy week."));

    let mut event_types: Vec<EventType> =
        sink.captured().iter().map(|r| r.event_type).collect();
    event_types.sort_by_key(|t| format!("{}", t));
    assert_eq!(
        event_types,
        vec![EventType::LlmAnalysis, EventType::TextMessage]
    );
    let records = sink.captured();
    let analysis_record = records
        .iter()
        .find(|r| r.event_type == EventType::LlmAnalysis)
        .unwrap();
    assert_eq!(analysis_record.data["analysis"]["sentiment"], "positive");
    assert_eq!(analysis_record.data["original_text"], long_text());
}

/// **Test: exactly 200 characters is not this handler's message (boundary).**
#[tokio::test]
async fn test_exactly_threshold_chars_continues() {
    let bot = Arc::new(MockBot::new());
    let sink = Arc::new(CaptureSink::new());
    let handler = LongTextHandler::new(bot.clone(), Some(analysis_client()), sink.clone());

    let result = handler
        .handle(&text_message(&"a".repeat(LONG_TEXT_THRESHOLD)))
        .await
        .unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert!(bot.sent_texts().is_empty());
}

/// **Test: without a credential the user gets the explanation and the event
/// carries the placeholder analysis.**
#[tokio::test]
async fn test_unconfigured_client_explains_instead_of_analyzing() {
    let bot = Arc::new(MockBot::new());
    let sink = Arc::new(CaptureSink::new());
    let handler = LongTextHandler::new(bot.clone(), None, sink.clone());

    let result = handler.handle(&text_message(&long_text())).await.unwrap();
    drain_spawned_tasks().await;

    assert!(matches!(result, HandlerResponse::Reply(_)));
    assert!(bot.edited_texts()[0].contains("LLM API key not configured"));

    let records = sink.captured();
    let analysis_record = records
        .iter()
        .find(|r| r.event_type == EventType::LlmAnalysis)
        .unwrap();
    assert_eq!(
        analysis_record.data["analysis"]["summary"],
        "LLM API key not configured"
    );
}

// --- AnalyzeCommandHandler ---

/// **Test: bare /analyze gets the usage prompt; nothing analyzed or logged.**
#[tokio::test]
async fn test_analyze_without_argument_prompts_usage() {
    let bot = Arc::new(MockBot::new());
    let sink = Arc::new(CaptureSink::new());
    let handler = AnalyzeCommandHandler::new(bot.clone(), Some(analysis_client()), sink.clone());

    let result = handler.handle(&text_message("/analyze")).await.unwrap();
    drain_spawned_tasks().await;

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(
        bot.sent_texts(),
        vec!["Please provide text to analyze. Usage: /analyze <your text>".to_string()]
    );
    assert!(bot.edited_texts().is_empty());
    assert!(sink.captured().is_empty());
}

/// **Test: /analyze with an argument runs the analysis flow regardless of length.**
#[tokio::test]
async fn test_analyze_with_argument_runs_analysis() {
    let bot = Arc::new(MockBot::new());
    let sink = Arc::new(CaptureSink::new());
    let handler = AnalyzeCommandHandler::new(bot.clone(), Some(analysis_client()), sink.clone());

    let result = handler
        .handle(&text_message("/analyze short note"))
        .await
        .unwrap();
    drain_spawned_tasks().await;

    assert!(matches!(result, HandlerResponse::Reply(_)));
    assert!(bot.edited_texts()[0].contains("Planning a busy week."));

    let records = sink.captured();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event_type, EventType::LlmAnalysis);
    assert_eq!(records[0].data["original_text"], "short note");
}

/// **Test: other texts and commands pass through.**
#[tokio::test]
async fn test_other_text_continues() {
    let bot = Arc::new(MockBot::new());
    let sink = Arc::new(CaptureSink::new());
    let handler = AnalyzeCommandHandler::new(bot.clone(), Some(analysis_client()), sink.clone());

    for text in ["hello", "/start", "/analyzefoo bar"] {
        let result = handler.handle(&text_message(text)).await.unwrap();
        assert_eq!(result, HandlerResponse::Continue, "claimed {:?}", text);
    }
}

/// **Test: parse_command handles @botname suffixes and missing arguments.**
#[test]
fn test_parse_command_variants() {
    assert_eq!(parse_command("/analyze do the thing"), Some("do the thing"));
    assert_eq!(parse_command("/analyze@my_bot do it"), Some("do it"));
    assert_eq!(parse_command("/analyze"), Some(""));
    assert_eq!(parse_command("/analyze   "), Some(""));
    assert_eq!(parse_command("/start now"), None);
    assert_eq!(parse_command("plain text"), None);
}
