//! Log level definitions

use super::appender::OutputStream;
use super::style::Style;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered message severity.
///
/// `None` is a sentinel: as a threshold it disables all output, and a
/// message carrying it is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i8)]
pub enum LogLevel {
    None = -1,
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// Every level that can be attached to a real message, lowest first.
    pub const EMITTABLE: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Bracketed label shown at the start of a formatted line.
    ///
    /// `None` has no label.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            LogLevel::None => None,
            LogLevel::Debug => Some("[DEBUG]"),
            LogLevel::Info => Some("[INFO]"),
            LogLevel::Warn => Some("[WARN]"),
            LogLevel::Error => Some("[ERROR]"),
            LogLevel::Fatal => Some("[FATAL]"),
        }
    }

    /// Style used for both the symbol and the message body.
    pub fn style(&self) -> Style {
        match self {
            LogLevel::None => Style::Plain,
            LogLevel::Debug => Style::Cyan,
            LogLevel::Info => Style::Blue,
            LogLevel::Warn => Style::Yellow,
            LogLevel::Error | LogLevel::Fatal => Style::Red,
        }
    }

    /// Output stream a message of this level is written to.
    pub fn stream(&self) -> Option<OutputStream> {
        match self {
            LogLevel::None => None,
            LogLevel::Debug => Some(OutputStream::Debug),
            LogLevel::Info => Some(OutputStream::Info),
            LogLevel::Warn => Some(OutputStream::Warn),
            LogLevel::Error | LogLevel::Fatal => Some(OutputStream::Error),
        }
    }

    /// Whether a message at this level can carry a signal back to the caller.
    #[inline]
    pub fn is_error_or_worse(&self) -> bool {
        *self >= LogLevel::Error
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
