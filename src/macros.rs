//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They return the
//! same values as the corresponding [`Logger`](crate::Logger) methods.
//!
//! # Examples
//!
//! ```
//! use console_logger::prelude::*;
//! use console_logger::{info, warn};
//!
//! let logger = Logger::with_category("Server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "{} connections pending", 3);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// Uses the logger's default throw behavior and no context.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::log;
/// let _ = log!(logger, LogLevel::Info, "Simple message");
/// let _ = log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(format!($($arg)+), $level, None, None)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::error;
/// if let Err(signal) = error!(logger, "Failed to connect to {}", "db") {
///     eprintln!("caller decides: {}", signal);
/// }
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

/// Log a fatal message. Returns the fatal signal when the line was written.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::fatal;
/// let result = fatal!(logger, "Unrecoverable state: {}", 42);
/// assert!(result.is_err() || !logger.can_log(LogLevel::Fatal));
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}
