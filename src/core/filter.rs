//! Emission predicate

use super::level_operator::LogLevelOperator;
use super::log_level::LogLevel;

/// Decide whether a message at `level` is written.
///
/// All of the following must hold: the external gate is open, the threshold
/// is not `None`, the logger instance is enabled, the message level is not
/// `None`, and `operator` accepts `level` against `threshold`.
#[inline]
pub fn should_emit(
    level: LogLevel,
    threshold: LogLevel,
    operator: LogLevelOperator,
    instance_enabled: bool,
    external_enabled: bool,
) -> bool {
    if !external_enabled
        || threshold == LogLevel::None
        || !instance_enabled
        || level == LogLevel::None
    {
        return false;
    }

    operator.matches(level, threshold)
}
