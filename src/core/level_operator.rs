//! Comparison modes between a message level and the active threshold

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevelOperator {
    /// `level == threshold`
    Equal,
    /// `level >= threshold`
    #[default]
    GreaterOrEqual,
    /// `level <= threshold`
    LessOrEqual,
}

impl LogLevelOperator {
    /// Compare a message level against a threshold with this operator.
    #[inline]
    pub fn matches(&self, level: LogLevel, threshold: LogLevel) -> bool {
        match self {
            LogLevelOperator::Equal => level == threshold,
            LogLevelOperator::GreaterOrEqual => level >= threshold,
            LogLevelOperator::LessOrEqual => level <= threshold,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LogLevelOperator::Equal => "==",
            LogLevelOperator::GreaterOrEqual => ">=",
            LogLevelOperator::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for LogLevelOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LogLevelOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "==" | "eq" | "equal" => Ok(LogLevelOperator::Equal),
            ">=" | "ge" | "greater_or_equal" => Ok(LogLevelOperator::GreaterOrEqual),
            "<=" | "le" | "less_or_equal" => Ok(LogLevelOperator::LessOrEqual),
            _ => Err(format!("Invalid log level operator: '{}'", s)),
        }
    }
}
