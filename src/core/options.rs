//! Per-logger formatting and signalling options

use super::error::{LoggerError, Result};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Delimiter placed between the header and the message body by default.
pub const DEFAULT_MESSAGE_DELIMITER: &str = "::";

/// Configuration snapshot taken when a logger is built
///
/// Options can be assembled with the builder-style setters or loaded from
/// JSON; missing fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use console_logger::{LoggerOptions, TimestampFormat};
///
/// let options = LoggerOptions::new()
///     .with_timestamp_format(TimestampFormat::Time24)
///     .with_compact_context(true);
///
/// let loaded = LoggerOptions::from_json_str(
///     r#"{ "timestamp_format": "time_24", "compact_context": true }"#,
/// ).unwrap();
///
/// assert_eq!(options, loaded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Timestamp layout; `TimestampFormat::None` omits the timestamp
    pub timestamp_format: TimestampFormat,
    /// Delimiter between header and message, and between message and inline context
    pub message_delimiter: Option<String>,
    /// Render context data on a single line
    pub compact_context: bool,
    /// Whether `error` calls signal the caller after writing
    pub throw_errors: bool,
    /// Whether error-level messages dropped by the filter still signal the caller
    ///
    /// Only takes effect when the call itself requested a signal.
    pub throw_suppressed_errors: bool,
    /// Whether styling escape sequences are emitted at all
    pub use_colors: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            message_delimiter: Some(DEFAULT_MESSAGE_DELIMITER.to_string()),
            compact_context: false,
            throw_errors: false,
            throw_suppressed_errors: false,
            use_colors: true,
        }
    }
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a strftime-compatible pattern for timestamps
    #[must_use]
    pub fn with_custom_timestamp(mut self, pattern: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(pattern.to_string());
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = TimestampFormat::None;
        self
    }

    #[must_use]
    pub fn with_message_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.message_delimiter = Some(delimiter.into());
        self
    }

    #[must_use]
    pub fn without_message_delimiter(mut self) -> Self {
        self.message_delimiter = None;
        self
    }

    #[must_use]
    pub fn with_compact_context(mut self, compact: bool) -> Self {
        self.compact_context = compact;
        self
    }

    #[must_use]
    pub fn with_throw_errors(mut self, throw: bool) -> Self {
        self.throw_errors = throw;
        self
    }

    #[must_use]
    pub fn with_throw_suppressed_errors(mut self, throw: bool) -> Self {
        self.throw_suppressed_errors = throw;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// The delimiter to render, treating an empty string as absent.
    pub fn delimiter(&self) -> Option<&str> {
        self.message_delimiter.as_deref().filter(|d| !d.is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        self.timestamp_format
            .validate()
            .map_err(|message| LoggerError::config("timestamp_format", message))
    }
}
