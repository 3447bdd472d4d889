//! Main logger implementation
//!
//! Every call goes through two explicit stages:
//!
//! 1. **build**: [`Logger::message`] captures the current time and renders
//!    the final line into an immutable [`LogMessage`]. Nothing is written.
//! 2. **dispatch**: [`Logger::log_message`] runs the filter and, when it
//!    passes, writes the pre-rendered line to the appenders. Error and fatal
//!    messages may then return a signal ([`LoggerError`]) to the caller.
//!
//! The convenience methods (`debug`, `info`, ...) simply chain both stages.

use super::{
    appender::{Appender, OutputStream},
    context_value::ContextValue,
    error::{LoggerError, Result},
    formatter::MessageFormatter,
    log_level::LogLevel,
    log_message::LogMessage,
    metrics::LoggerMetrics,
    options::LoggerOptions,
    policy::LogPolicy,
};
use crate::appenders::ConsoleAppender;
use chrono::Local;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct Logger {
    category: Option<String>,
    options: LoggerOptions,
    policy: Arc<LogPolicy>,
    enabled: AtomicBool,
    appenders: Arc<RwLock<Vec<Box<dyn Appender>>>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger without a category, default options, the global policy and a
    /// console appender.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().assemble()
    }

    /// Logger with a fixed category label and default options.
    #[must_use]
    pub fn with_category(category: impl Into<String>) -> Self {
        LoggerBuilder::new().category(category).assemble()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .category("Api")
    ///     .options(LoggerOptions::new().with_compact_context(true))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(logger.category(), Some("Api"));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    pub fn policy(&self) -> &Arc<LogPolicy> {
        &self.policy
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Enable or disable this logger only; other loggers are unaffected.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        let mut appenders = self.appenders.write();
        appenders.push(appender);
    }

    /// Whether a message at `level` would currently be written.
    pub fn can_log(&self, level: LogLevel) -> bool {
        self.policy.allows(level, self.is_enabled())
    }

    // Build stage

    /// Create an unlogged (deferred) message.
    pub fn message(&self, message: impl Into<String>, level: LogLevel) -> LogMessage {
        self.build_message(message.into(), level, None)
    }

    /// Create an unlogged (deferred) message carrying context data.
    pub fn message_with_context(
        &self,
        message: impl Into<String>,
        level: LogLevel,
        context: impl Into<ContextValue>,
    ) -> LogMessage {
        self.build_message(message.into(), level, Some(context.into()))
    }

    fn build_message(
        &self,
        message: String,
        level: LogLevel,
        context: Option<ContextValue>,
    ) -> LogMessage {
        let date = Local::now();
        let alignment_categories = self.policy.alignment_categories();
        let formatted = MessageFormatter::new(&self.options, &alignment_categories).format(
            level,
            &message,
            &date,
            self.category(),
            context.as_ref(),
        );

        LogMessage {
            message,
            formatted,
            level,
            date,
            category: self.category.clone(),
            context,
        }
    }

    // Dispatch stage

    /// Write a previously built message.
    ///
    /// `throws` overrides the logger's `throw_errors` default for this call.
    /// Returns `Ok(None)` when the filter drops the message.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::Error`] after writing an error message when throwing
    ///   was requested.
    /// - [`LoggerError::Fatal`] after writing any fatal message.
    /// - [`LoggerError::Suppressed`] when an error or fatal message is dropped
    ///   by the filter, throwing was requested and `throw_suppressed_errors`
    ///   is set.
    pub fn log_message(
        &self,
        message: &LogMessage,
        throws: Option<bool>,
    ) -> Result<Option<LogMessage>> {
        self.dispatch(message, throws.unwrap_or(self.options.throw_errors))
    }

    /// Build and write a message in one step.
    pub fn log(
        &self,
        message: impl Into<String>,
        level: LogLevel,
        throws: Option<bool>,
        context: Option<ContextValue>,
    ) -> Result<Option<LogMessage>> {
        let message = self.build_message(message.into(), level, context);
        self.log_message(&message, throws)
    }

    fn dispatch(&self, message: &LogMessage, throws: bool) -> Result<Option<LogMessage>> {
        if !self.can_log(message.level) {
            self.metrics.record_suppressed();

            if message.level.is_error_or_worse() && throws && self.options.throw_suppressed_errors {
                self.metrics.record_signal();
                return Err(LoggerError::suppressed(message));
            }

            return Ok(None);
        }

        let Some(stream) = message.level.stream() else {
            return Ok(None);
        };

        self.write_line(stream, &message.formatted);
        self.metrics.record_logged();

        match message.level {
            LogLevel::Error if throws => {
                self.metrics.record_signal();
                Err(LoggerError::error(message.clone()))
            }
            LogLevel::Fatal => {
                self.metrics.record_signal();
                Err(LoggerError::fatal(message.clone()))
            }
            _ => Ok(Some(message.clone())),
        }
    }

    /// Dispatch a call that can never produce a signal.
    fn log_quiet(
        &self,
        message: String,
        level: LogLevel,
        context: Option<ContextValue>,
    ) -> Option<LogMessage> {
        let message = self.build_message(message, level, context);
        self.dispatch(&message, false).unwrap_or_default()
    }

    /// Write to every appender with per-appender panic isolation
    ///
    /// One failing appender does not prevent the others from receiving the line.
    fn write_line(&self, stream: OutputStream, line: &str) {
        let mut appenders = self.appenders.write();

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(stream, line)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.name(),
                        e
                    );
                    self.metrics.record_failed_write();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                    self.metrics.record_failed_write();
                }
            }
        }
    }

    // Severity entry points

    pub fn debug(&self, message: impl Into<String>) -> Option<LogMessage> {
        self.log_quiet(message.into(), LogLevel::Debug, None)
    }

    pub fn debug_with_context(
        &self,
        message: impl Into<String>,
        context: impl Into<ContextValue>,
    ) -> Option<LogMessage> {
        self.log_quiet(message.into(), LogLevel::Debug, Some(context.into()))
    }

    pub fn info(&self, message: impl Into<String>) -> Option<LogMessage> {
        self.log_quiet(message.into(), LogLevel::Info, None)
    }

    pub fn info_with_context(
        &self,
        message: impl Into<String>,
        context: impl Into<ContextValue>,
    ) -> Option<LogMessage> {
        self.log_quiet(message.into(), LogLevel::Info, Some(context.into()))
    }

    pub fn warn(&self, message: impl Into<String>) -> Option<LogMessage> {
        self.log_quiet(message.into(), LogLevel::Warn, None)
    }

    pub fn warn_with_context(
        &self,
        message: impl Into<String>,
        context: impl Into<ContextValue>,
    ) -> Option<LogMessage> {
        self.log_quiet(message.into(), LogLevel::Warn, Some(context.into()))
    }

    /// Log an error; signals only if the logger's `throw_errors` option is set.
    pub fn error(&self, message: impl Into<String>) -> Result<Option<LogMessage>> {
        self.log(message, LogLevel::Error, None, None)
    }

    pub fn error_with_context(
        &self,
        message: impl Into<String>,
        context: impl Into<ContextValue>,
    ) -> Result<Option<LogMessage>> {
        self.log(message, LogLevel::Error, None, Some(context.into()))
    }

    /// Log an error and always request a signal.
    pub fn error_throwing(&self, message: impl Into<String>) -> Result<Option<LogMessage>> {
        self.log(message, LogLevel::Error, Some(true), None)
    }

    pub fn error_throwing_with_context(
        &self,
        message: impl Into<String>,
        context: impl Into<ContextValue>,
    ) -> Result<Option<LogMessage>> {
        self.log(message, LogLevel::Error, Some(true), Some(context.into()))
    }

    /// Log a fatal message.
    ///
    /// A written fatal message always comes back as [`LoggerError::Fatal`];
    /// `Ok(())` only means the filter dropped it.
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, LogLevel::Fatal, Some(true), None).map(|_| ())
    }

    pub fn fatal_with_context(
        &self,
        message: impl Into<String>,
        context: impl Into<ContextValue>,
    ) -> Result<()> {
        self.log(message, LogLevel::Fatal, Some(true), Some(context.into()))
            .map(|_| ())
    }

    /// Write a blank line, regardless of level filtering.
    pub fn newline(&self) {
        self.write_line(OutputStream::Plain, "");
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("options", &self.options)
            .field("enabled", &self.is_enabled())
            .field("appenders", &self.appenders.read().len())
            .finish_non_exhaustive()
    }
}

/// Builder for creating a Logger with custom configuration
pub struct LoggerBuilder {
    category: Option<String>,
    options: LoggerOptions,
    policy: Option<Arc<LogPolicy>>,
    appenders: Vec<Box<dyn Appender>>,
    enabled: bool,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            category: None,
            options: LoggerOptions::default(),
            policy: None,
            appenders: Vec::new(),
            enabled: true,
        }
    }

    /// Fixed category label; an empty string means no category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    #[must_use]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Share a policy other than [`LogPolicy::global`]
    #[must_use]
    pub fn policy(mut self, policy: Arc<LogPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Add an appender. Without any, a [`ConsoleAppender`] is used.
    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Validate the options and build the logger.
    pub fn build(self) -> Result<Logger> {
        self.options.validate()?;
        Ok(self.assemble())
    }

    fn assemble(self) -> Logger {
        let mut appenders = self.appenders;
        if appenders.is_empty() {
            appenders.push(Box::new(ConsoleAppender::new()));
        }

        Logger {
            category: self.category,
            options: self.options,
            policy: self.policy.unwrap_or_else(LogPolicy::global),
            enabled: AtomicBool::new(self.enabled),
            appenders: Arc::new(RwLock::new(appenders)),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
