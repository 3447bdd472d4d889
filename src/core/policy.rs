//! Process-wide logging policy
//!
//! The verbosity threshold, its comparison operator and the alignment
//! categories are shared by every logger that references the same
//! [`LogPolicy`]. Loggers use [`LogPolicy::global`] unless another policy is
//! injected through [`LoggerBuilder::policy`](crate::LoggerBuilder::policy),
//! which keeps tests independent of each other.

use super::filter::should_emit;
use super::level_operator::LogLevelOperator;
use super::log_level::LogLevel;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Environment variable that disables all output when set to a non-empty value.
pub const NO_LOG_ENV: &str = "NO_LOG";

/// External check consulted on every filter evaluation.
pub type LoggingGate = Arc<dyn Fn() -> bool + Send + Sync>;

/// Default gate: logging is on unless `NO_LOG` is set to a non-empty value.
pub fn env_logging_enabled() -> bool {
    std::env::var_os(NO_LOG_ENV).map_or(true, |value| value.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PolicyState {
    level: LogLevel,
    operator: LogLevelOperator,
    alignment_categories: Vec<String>,
}

impl Default for PolicyState {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            operator: LogLevelOperator::GreaterOrEqual,
            alignment_categories: Vec::new(),
        }
    }
}

/// Saved policy values, see [`LogPolicy::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySnapshot(PolicyState);

impl PolicySnapshot {
    pub fn level(&self) -> LogLevel {
        self.0.level
    }

    pub fn operator(&self) -> LogLevelOperator {
        self.0.operator
    }

    pub fn alignment_categories(&self) -> &[String] {
        &self.0.alignment_categories
    }
}

/// Shared verbosity policy
///
/// # Example
///
/// ```
/// use console_logger::{LogLevel, LogLevelOperator, LogPolicy};
///
/// let policy = LogPolicy::new();
/// policy.set_level(LogLevel::Warn);
///
/// assert!(policy.allows(LogLevel::Error, true));
/// assert!(!policy.allows(LogLevel::Info, true));
///
/// {
///     let _guard = policy.scoped(LogLevel::Info, LogLevelOperator::Equal);
///     assert!(policy.allows(LogLevel::Info, true));
/// }
/// assert_eq!(policy.level(), LogLevel::Warn);
/// ```
pub struct LogPolicy {
    state: RwLock<PolicyState>,
    gate: LoggingGate,
}

impl LogPolicy {
    /// Fresh policy: threshold DEBUG, operator `>=`, no alignment categories,
    /// gated by the `NO_LOG` environment variable.
    pub fn new() -> Self {
        Self::with_gate(Arc::new(env_logging_enabled))
    }

    /// Fresh policy with a custom external gate.
    pub fn with_gate(gate: LoggingGate) -> Self {
        Self {
            state: RwLock::new(PolicyState::default()),
            gate,
        }
    }

    /// The policy shared by every logger built without an explicit one.
    pub fn global() -> Arc<LogPolicy> {
        static GLOBAL: OnceLock<Arc<LogPolicy>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(LogPolicy::new())))
    }

    pub fn level(&self) -> LogLevel {
        self.state.read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.write().level = level;
    }

    pub fn operator(&self) -> LogLevelOperator {
        self.state.read().operator
    }

    pub fn set_operator(&self, operator: LogLevelOperator) {
        self.state.write().operator = operator;
    }

    pub fn alignment_categories(&self) -> Vec<String> {
        self.state.read().alignment_categories.clone()
    }

    /// Categories used only to pad category labels to a common width.
    pub fn set_alignment_categories<I, S>(&self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.write().alignment_categories = categories.into_iter().map(Into::into).collect();
    }

    pub fn clear_alignment_categories(&self) {
        self.state.write().alignment_categories.clear();
    }

    /// Whether the external gate currently allows output.
    pub fn gate_open(&self) -> bool {
        (self.gate)()
    }

    /// Filter decision for a message at `level` from a logger whose enabled
    /// flag is `instance_enabled`.
    pub fn allows(&self, level: LogLevel, instance_enabled: bool) -> bool {
        let (threshold, operator) = {
            let state = self.state.read();
            (state.level, state.operator)
        };
        should_emit(level, threshold, operator, instance_enabled, self.gate_open())
    }

    pub fn snapshot(&self) -> PolicySnapshot {
        PolicySnapshot(self.state.read().clone())
    }

    pub fn restore(&self, snapshot: PolicySnapshot) {
        *self.state.write() = snapshot.0;
    }

    /// Override threshold and operator until the returned guard is dropped.
    #[must_use = "the previous policy is restored when the guard is dropped"]
    pub fn scoped(&self, level: LogLevel, operator: LogLevelOperator) -> PolicyGuard<'_> {
        let saved = self.snapshot();
        {
            let mut state = self.state.write();
            state.level = level;
            state.operator = operator;
        }
        PolicyGuard {
            policy: self,
            saved: Some(saved),
        }
    }
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("LogPolicy")
            .field("level", &state.level)
            .field("operator", &state.operator)
            .field("alignment_categories", &state.alignment_categories)
            .finish_non_exhaustive()
    }
}

/// RAII guard returned by [`LogPolicy::scoped`]
///
/// Restores the full policy state (including alignment categories) on drop.
pub struct PolicyGuard<'a> {
    policy: &'a LogPolicy,
    saved: Option<PolicySnapshot>,
}

impl Drop for PolicyGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.policy.restore(saved);
        }
    }
}
