//! In-memory appender
//!
//! Keeps every written line so it can be inspected later. The appender
//! itself moves into the logger; clones share the same buffer, so keep one
//! clone around to read from.

use crate::core::{Appender, OutputStream, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub stream: OutputStream,
    pub line: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Text of every line written to `stream`, oldest first.
    pub fn lines_for(&self, stream: OutputStream) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|captured| captured.stream == stream)
            .map(|captured| captured.line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, stream: OutputStream, line: &str) -> Result<()> {
        self.lines.lock().push(CapturedLine {
            stream,
            line: line.to_string(),
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
