//! Logger metrics
//!
//! Counters describing what a logger did with the messages it was given:
//! written, suppressed by the filter, signalled back to the caller, or lost
//! because an appender failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-logger counters
///
/// # Example
///
/// ```
/// use console_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_suppressed();
/// metrics.record_logged();
///
/// assert_eq!(metrics.suppressed_count(), 1);
/// assert_eq!(metrics.total_logged(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages written to the appenders
    total_logged: AtomicU64,

    /// Messages rejected by the filter
    suppressed_count: AtomicU64,

    /// Error, fatal and suppressed-error signals returned to callers
    signals_raised: AtomicU64,

    /// Appender writes that returned an error or panicked
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            suppressed_count: AtomicU64::new(0),
            signals_raised: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn signals_raised(&self) -> u64 {
        self.signals_raised.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Record a written message; returns the previous count
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_signal(&self) -> u64 {
        self.signals_raised.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Suppressed messages as a percentage (0.0 - 100.0) of all dispatched ones
    ///
    /// Returns 0.0 if nothing has been dispatched.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count() as f64;
        let total = self.total_logged() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.suppressed_count.store(0, Ordering::Relaxed);
        self.signals_raised.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            suppressed_count: AtomicU64::new(self.suppressed_count()),
            signals_raised: AtomicU64::new(self.signals_raised()),
            failed_writes: AtomicU64::new(self.failed_writes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.signals_raised(), 0);
        assert_eq!(metrics.failed_writes(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_signal(), 0);
        assert_eq!(metrics.record_signal(), 1);
        assert_eq!(metrics.signals_raised(), 2);
    }

    #[test]
    fn test_suppression_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.suppression_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_logged();
        }
        for _ in 0..10 {
            metrics.record_suppressed();
        }

        let rate = metrics.suppression_rate();
        assert!((9.9..=10.1).contains(&rate), "Suppression rate was {}", rate);
    }

    #[test]
    fn test_reset_and_clone() {
        let metrics = LoggerMetrics::new();
        metrics.record_logged();
        metrics.record_failed_write();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(snapshot.total_logged(), 1);
        assert_eq!(snapshot.failed_writes(), 1);
    }
}
