//! Appender trait for log output destinations

use super::error::Result;

/// Conventional console streams a line can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStream {
    Debug,
    Info,
    Warn,
    Error,
    /// Unfiltered output such as blank separator lines
    Plain,
}

pub trait Appender: Send + Sync {
    fn append(&mut self, stream: OutputStream, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
