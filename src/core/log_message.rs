//! Log message record

use super::context_value::ContextValue;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A formatted message, created once and never changed afterwards.
///
/// Building a message does not write it: a record can be kept and handed to
/// [`Logger::log_message`](crate::Logger::log_message) later, any number of
/// times, and always renders to the same `formatted` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Raw message text as passed by the caller
    pub message: String,
    /// Fully rendered line, styling included
    pub formatted: String,
    pub level: LogLevel,
    /// Moment the message was built
    pub date: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextValue>,
}

impl LogMessage {
    /// The formatted line with styling escape sequences removed.
    pub fn plain(&self) -> String {
        super::text::strip_ansi(&self.formatted).into_owned()
    }

    pub fn to_json(&self) -> super::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
