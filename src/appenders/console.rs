//! Console appender implementation

use crate::core::{Appender, OutputStream, Result};
use std::io::Write;

/// Writes lines to the process's standard streams
///
/// Debug, info and plain lines go to stdout; warnings and errors go to stderr.
pub struct ConsoleAppender {
    stderr_for_warnings: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stderr_for_warnings: true,
        }
    }

    /// Route warnings to stdout instead of stderr
    ///
    /// # Example
    ///
    /// ```
    /// use console_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new().with_warnings_on_stdout();
    /// ```
    #[must_use]
    pub fn with_warnings_on_stdout(mut self) -> Self {
        self.stderr_for_warnings = false;
        self
    }

    fn uses_stderr(&self, stream: OutputStream) -> bool {
        match stream {
            OutputStream::Error => true,
            OutputStream::Warn => self.stderr_for_warnings,
            OutputStream::Debug | OutputStream::Info | OutputStream::Plain => false,
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, stream: OutputStream, line: &str) -> Result<()> {
        if self.uses_stderr(stream) {
            let mut err = std::io::stderr().lock();
            writeln!(err, "{}", line)?;
        } else {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_routing() {
        let appender = ConsoleAppender::new();
        assert!(appender.uses_stderr(OutputStream::Error));
        assert!(appender.uses_stderr(OutputStream::Warn));
        assert!(!appender.uses_stderr(OutputStream::Info));
        assert!(!appender.uses_stderr(OutputStream::Plain));

        let appender = ConsoleAppender::new().with_warnings_on_stdout();
        assert!(!appender.uses_stderr(OutputStream::Warn));
        assert!(appender.uses_stderr(OutputStream::Error));
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::default();
        assert!(appender.append(OutputStream::Debug, "console appender test line").is_ok());
        assert!(appender.flush().is_ok());
        assert_eq!(appender.name(), "console");
    }
}
