//! # Console Logger
//!
//! Colorized, human-readable console logging with level filtering.
//!
//! ## Features
//!
//! - **Readable lines**: fixed-width level symbols, timestamps, category
//!   labels aligned across loggers, and pretty-printed context data
//! - **Shared verbosity policy**: one threshold and comparison operator for
//!   every logger referencing the same [`LogPolicy`]
//! - **Deferred messages**: format now, write later (or never)
//! - **Signals**: error and fatal messages can hand a [`LoggerError`] back
//!   to the caller after being written
//!
//! ```
//! use console_logger::prelude::*;
//!
//! let logger = Logger::with_category("Demo");
//! logger.info("Hello, info!");
//! logger.info_with_context("Request served", ContextValue::object().with_field("status", 200));
//!
//! let deferred = logger.message("Hello, later!", LogLevel::Debug);
//! let _ = logger.log_message(&deferred, None);
//!
//! if let Err(signal) = logger.fatal("Hello, fatal!") {
//!     assert_eq!(signal.to_string(), "Hello, fatal!");
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, ContextValue, LogLevel, LogLevelOperator, LogMessage, LogPolicy, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, LoggerOptions, OutputStream, Result,
        TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, MemoryAppender};
pub use crate::core::{
    Appender, ContextValue, LogLevel, LogLevelOperator, LogMessage, LogPolicy, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, LoggerOptions, MessageFormatter, OutputStream,
    PolicyGuard, PolicySnapshot, Result, Style, TimestampFormat,
};
