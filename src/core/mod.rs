//! Core logger types and traits

pub mod appender;
pub mod context_value;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod level_operator;
pub mod log_level;
pub mod log_message;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod policy;
pub mod style;
pub mod text;
pub mod timestamp;
pub mod value_renderer;

pub use appender::{Appender, OutputStream};
pub use context_value::ContextValue;
pub use error::{LoggerError, Result};
pub use filter::should_emit;
pub use formatter::MessageFormatter;
pub use level_operator::LogLevelOperator;
pub use log_level::LogLevel;
pub use log_message::LogMessage;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use options::{LoggerOptions, DEFAULT_MESSAGE_DELIMITER};
pub use policy::{
    env_logging_enabled, LogPolicy, LoggingGate, PolicyGuard, PolicySnapshot, NO_LOG_ENV,
};
pub use style::{Style, Stylist};
pub use timestamp::TimestampFormat;
