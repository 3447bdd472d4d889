//! Integration tests for the console logger
//!
//! These tests verify:
//! - Level filtering with every comparison operator
//! - Per-instance enable/disable
//! - Deferred messages
//! - Error and fatal signals
//! - Formatting of delimiters, categories, alignment and context
//!
//! Every test injects its own `LogPolicy`, so none of them touch the
//! process-wide policy.

use console_logger::appenders::{MemoryAppender, OutputStream};
use console_logger::prelude::*;
use console_logger::core::text::strip_ansi;
use serde_json::json;
use std::sync::Arc;

mod support {
    use super::*;

    pub fn policy() -> Arc<LogPolicy> {
        Arc::new(LogPolicy::with_gate(Arc::new(|| true)))
    }

    pub fn logger_with(
        category: &str,
        options: LoggerOptions,
        policy: &Arc<LogPolicy>,
    ) -> (Logger, MemoryAppender) {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .category(category)
            .options(options)
            .policy(Arc::clone(policy))
            .appender(memory.clone())
            .build()
            .expect("valid options");
        (logger, memory)
    }

    pub fn logger(policy: &Arc<LogPolicy>) -> (Logger, MemoryAppender) {
        logger_with("Test", LoggerOptions::new(), policy)
    }
}

use support::{logger, logger_with, policy};

#[test]
fn test_each_level_is_logged() {
    let policy = policy();
    let (logger, memory) = logger(&policy);
    let message = "Hello, world!";

    let debug = logger.debug(message).expect("debug logged");
    let info = logger.info(message).expect("info logged");
    let warn = logger.warn(message).expect("warn logged");
    let error = logger.error(message).expect("no signal").expect("error logged");

    assert_eq!(debug.level, LogLevel::Debug);
    assert_eq!(info.level, LogLevel::Info);
    assert_eq!(warn.level, LogLevel::Warn);
    assert_eq!(error.level, LogLevel::Error);
    for logged in [&debug, &info, &warn, &error] {
        assert_eq!(logged.message, message);
    }

    assert_eq!(memory.lines_for(OutputStream::Debug), vec![debug.formatted]);
    assert_eq!(memory.lines_for(OutputStream::Info), vec![info.formatted]);
    assert_eq!(memory.lines_for(OutputStream::Warn), vec![warn.formatted]);
    assert_eq!(memory.lines_for(OutputStream::Error), vec![error.formatted]);
}

#[test]
fn test_error_throwing_writes_then_signals() {
    let policy = policy();
    let (logger, memory) = logger(&policy);

    let err = logger.error_throwing("Hello, world!").unwrap_err();

    assert!(matches!(err, LoggerError::Error { .. }));
    assert_eq!(err.to_string(), "Hello, world!");
    let logged = err.logged().expect("record attached");
    assert_eq!(memory.lines_for(OutputStream::Error), vec![logged.formatted.clone()]);
}

#[test]
fn test_fatal_is_always_signalled() {
    let policy = policy();
    let (logger, memory) = logger(&policy);

    let err = logger.fatal("Hello, fatal!").unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.message(), Some("Hello, fatal!"));

    let deferred = logger.message("again", LogLevel::Fatal);
    let err = logger.log_message(&deferred, Some(false)).unwrap_err();
    assert!(err.is_fatal());

    assert_eq!(memory.lines_for(OutputStream::Error).len(), 2);
}

#[test]
fn test_deferred_message() {
    let policy = policy();
    let (logger, memory) = logger(&policy);

    let deferred = logger.message("Hello, world!", LogLevel::Info);
    assert_eq!(deferred.message, "Hello, world!");
    assert_eq!(deferred.level, LogLevel::Info);
    assert!(memory.is_empty(), "building a message must not write it");

    let first = logger.log_message(&deferred, None).expect("no signal").expect("logged");
    let second = logger.log_message(&deferred, None).expect("no signal").expect("logged");

    assert_eq!(first.formatted, deferred.formatted);
    assert_eq!(second.formatted, deferred.formatted);
    assert_eq!(memory.lines_for(OutputStream::Info), vec![deferred.formatted.clone(); 2]);
}

#[test]
fn test_deferred_matches_immediate_output() {
    let policy = policy();
    let options = LoggerOptions::new().without_timestamp().with_colors(false);
    let (logger, memory) = logger_with("Test", options, &policy);

    let deferred = logger.message("same", LogLevel::Warn);
    let immediate = logger.warn("same").expect("logged");
    logger.log_message(&deferred, None).expect("no signal");

    let lines = memory.lines_for(OutputStream::Warn);
    assert_eq!(lines[0], immediate.formatted);
    assert_eq!(lines[1], deferred.formatted);
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn test_disabled_logger_is_silent() {
    let policy = policy();
    let (logger, memory) = logger(&policy);
    let (other, other_memory) = logger_with("Other", LoggerOptions::new(), &policy);

    logger.set_enabled(false);
    let output = logger.info("Hello, world!");
    let other_output = other.info("Hello, world!");
    logger.set_enabled(true);

    assert!(output.is_none());
    assert!(memory.is_empty());
    assert!(other_output.is_some());
    assert_eq!(other_memory.len(), 1);
}

#[test]
fn test_greater_or_equal_threshold() {
    let policy = policy();
    let (logger, _) = logger(&policy);
    let _guard = policy.scoped(LogLevel::Warn, LogLevelOperator::GreaterOrEqual);

    assert!(logger.info("Hello, info!").is_none());
    assert!(logger.warn("Hello, warn!").is_some());
    assert!(logger.error("Hello, error!").expect("no signal").is_some());
}

#[test]
fn test_equal_threshold() {
    let policy = policy();
    let (logger, _) = logger(&policy);
    let _guard = policy.scoped(LogLevel::Error, LogLevelOperator::Equal);

    assert!(logger.info("Hello, info!").is_none());
    assert!(logger.warn("Hello, warn!").is_none());
    assert!(logger.error("Hello, error!").expect("no signal").is_some());
}

#[test]
fn test_less_or_equal_threshold() {
    let policy = policy();
    let (logger, _) = logger(&policy);
    let _guard = policy.scoped(LogLevel::Info, LogLevelOperator::LessOrEqual);

    assert!(logger.debug("Hello, debug!").is_some());
    assert!(logger.info("Hello, info!").is_some());
    assert!(logger.warn("Hello, warn!").is_none());
}

#[test]
fn test_threshold_is_shared_between_loggers() {
    let policy = policy();
    let (first, _) = logger_with("First", LoggerOptions::new(), &policy);
    let (second, _) = logger_with("Second", LoggerOptions::new(), &policy);

    policy.set_level(LogLevel::Error);
    assert!(first.warn("hidden").is_none());
    assert!(second.warn("hidden").is_none());

    policy.set_level(LogLevel::Debug);
    assert!(first.warn("shown").is_some());
    assert!(second.warn("shown").is_some());
}

#[test]
fn test_closed_gate_blocks_every_logger() {
    let policy = Arc::new(LogPolicy::with_gate(Arc::new(|| false)));
    let (logger, memory) = logger(&policy);

    assert!(logger.info("nope").is_none());
    assert!(logger.fatal("nope").is_ok());
    assert!(memory.is_empty());
}

#[test]
fn test_suppressed_errors_only_signal_when_configured() {
    let policy = policy();
    policy.set_level(LogLevel::Fatal);
    policy.set_operator(LogLevelOperator::Equal);

    let (quiet, _) = logger(&policy);
    assert!(quiet.error_throwing("dropped").expect("no signal").is_none());

    let (strict, memory) = logger_with(
        "Strict",
        LoggerOptions::new().with_throw_suppressed_errors(true),
        &policy,
    );
    let err = strict.error_throwing("dropped").unwrap_err();
    assert!(matches!(err, LoggerError::Suppressed { level: LogLevel::Error, .. }));
    assert_eq!(err.to_string(), "dropped");
    assert!(strict.error("dropped").expect("call did not request a signal").is_none());
    assert!(strict.warn("dropped").is_none());
    assert!(memory.is_empty());
}

#[test]
fn test_custom_delimiter() {
    let policy = policy();
    let options = LoggerOptions::new().with_message_delimiter("⭐️");
    let (logger, _) = logger_with("", options, &policy);

    let output = logger.info("Hello, world!").expect("logged");
    assert!(output.formatted.contains("⭐️"));
    assert!(!output.formatted.contains("::"));
}

#[test]
fn test_without_delimiter() {
    let policy = policy();
    let (logger, _) = logger_with("", LoggerOptions::new().without_message_delimiter(), &policy);

    let output = logger.info("Hello, world!").expect("logged");
    assert!(!output.formatted.contains("::"));
}

#[test]
fn test_no_category_layout() {
    let policy = policy();
    let options = LoggerOptions::new().without_timestamp().with_colors(false);
    let (logger, _) = logger_with("", options, &policy);

    let output = logger.info("Hi").expect("logged");
    assert_eq!(output.formatted, "[INFO]  :: Hi");
    assert_eq!(output.category, None);
}

#[test]
fn test_context_data() {
    let policy = policy();
    let (logger, _) = logger(&policy);
    let id = uuid::Uuid::new_v4().to_string();

    let output = logger
        .info_with_context("Hello, world", json!({ "id": id }))
        .expect("logged");

    let ctx = output.context.expect("context kept");
    assert_eq!(ctx.get("id").and_then(ContextValue::as_str), Some(id.as_str()));
    assert!(strip_ansi(&output.formatted).contains(&format!("id: {}", id)));
}

#[test]
fn test_compact_context_is_single_line() {
    let policy = policy();
    let options = LoggerOptions::new()
        .without_timestamp()
        .with_colors(false)
        .with_compact_context(true);
    let (logger, _) = logger_with("Test", options, &policy);

    let output = logger
        .info_with_context("Hi", json!({ "id": "abc", "n": 1, "tags": ["a", "b"] }))
        .expect("logged");

    assert_eq!(
        output.formatted,
        "[INFO]  [Test] :: Hi :: { id: abc, n: 1, tags: [a, b] }"
    );
}

#[test]
fn test_indented_context_starts_on_next_line() {
    let policy = policy();
    let options = LoggerOptions::new().without_timestamp().with_colors(false);
    let (logger, _) = logger_with("Test", options, &policy);

    let output = logger
        .warn_with_context("Hi", json!({ "user": { "name": "ann" } }))
        .expect("logged");

    let (header, block) = output.formatted.split_once('\n').expect("context on its own lines");
    assert_eq!(header, "[WARN]  [Test] :: Hi");
    assert_eq!(block, "{\n  user: {\n    name: ann\n  }\n}");
}

#[test]
fn test_alignment_categories() {
    let policy = policy();
    policy.set_alignment_categories(["Api", "Database"]);
    let options = LoggerOptions::new().without_timestamp().with_colors(false);

    let (api, _) = logger_with("Api", options.clone(), &policy);
    let (db, _) = logger_with("Database", options.clone(), &policy);
    let (plain, _) = logger_with("", options, &policy);

    let api_line = api.info("x").expect("logged").formatted;
    let db_line = db.info("x").expect("logged").formatted;
    let plain_line = plain.info("x").expect("logged").formatted;

    assert_eq!(api_line, "[INFO]  [Api]      :: x");
    assert_eq!(db_line, "[INFO]  [Database] :: x");
    assert_eq!(plain_line, "[INFO]             :: x");
}

#[test]
fn test_newline_is_plain_and_unfiltered() {
    let policy = policy();
    let (logger, memory) = logger(&policy);
    logger.set_enabled(false);

    logger.newline();

    assert_eq!(memory.lines_for(OutputStream::Plain), vec![String::new()]);
}

#[test]
fn test_message_serializes_to_json() {
    let policy = policy();
    let (logger, _) = logger(&policy);
    let message = logger.message_with_context("json", LogLevel::Debug, json!({ "k": [1, 2] }));

    let value: serde_json::Value =
        serde_json::from_str(&message.to_json().expect("serialize")).expect("valid json");
    assert_eq!(value["message"], "json");
    assert_eq!(value["level"], "Debug");
    assert_eq!(value["category"], "Test");
    assert_eq!(value["context"], json!({ "k": [1, 2] }));
}
