//! Error types for the logger system
//!
//! Besides configuration and I/O failures, three variants are *signals*:
//! they are returned on purpose so that the calling application decides how
//! to react to serious log events. Their `Display` is the raw message text.

use super::log_level::LogLevel;
use super::log_message::LogMessage;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// An error-level message was dropped by the filter, and both the call
    /// and the logger asked for a signal anyway
    #[error("{message}")]
    Suppressed { message: String, level: LogLevel },

    /// An error message was written and the call asked for a signal
    #[error("{message}")]
    Error {
        message: String,
        logged: Box<LogMessage>,
    },

    /// A fatal message was written; always signalled
    #[error("{message}")]
    Fatal {
        message: String,
        logged: Box<LogMessage>,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    pub(crate) fn suppressed(message: &LogMessage) -> Self {
        LoggerError::Suppressed {
            message: message.message.clone(),
            level: message.level,
        }
    }

    pub(crate) fn error(logged: LogMessage) -> Self {
        LoggerError::Error {
            message: logged.message.clone(),
            logged: Box::new(logged),
        }
    }

    pub(crate) fn fatal(logged: LogMessage) -> Self {
        LoggerError::Fatal {
            message: logged.message.clone(),
            logged: Box::new(logged),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Raw message text carried by a signal.
    pub fn message(&self) -> Option<&str> {
        match self {
            LoggerError::Suppressed { message, .. }
            | LoggerError::Error { message, .. }
            | LoggerError::Fatal { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The record that was written before the signal was raised.
    pub fn logged(&self) -> Option<&LogMessage> {
        match self {
            LoggerError::Error { logged, .. } | LoggerError::Fatal { logged, .. } => Some(logged),
            _ => None,
        }
    }

    /// Severity of the message behind a signal.
    pub fn level(&self) -> Option<LogLevel> {
        match self {
            LoggerError::Suppressed { level, .. } => Some(*level),
            LoggerError::Error { logged, .. } | LoggerError::Fatal { logged, .. } => {
                Some(logged.level)
            }
            _ => None,
        }
    }

    pub fn is_signal(&self) -> bool {
        matches!(
            self,
            LoggerError::Suppressed { .. } | LoggerError::Error { .. } | LoggerError::Fatal { .. }
        )
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, LoggerError::Fatal { .. })
    }
}
