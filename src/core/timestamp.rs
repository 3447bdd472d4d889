//! Timestamp formatting
//!
//! Preset formats mirror the common console layouts (full, condensed,
//! minimal and time-only, each in 12h and 24h flavours). Custom formats
//! accept any strftime-compatible pattern understood by `chrono`.
//!
//! Formats ending in a timezone name render the offset as `GMT±HH:MM`; the
//! first literal `GMT` of every rendered timestamp is then rewritten to `UTC`.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Timestamp layout used by a logger
///
/// # Examples
///
/// ```
/// use console_logger::TimestampFormat;
/// use chrono::{FixedOffset, TimeZone};
///
/// let date = FixedOffset::east_opt(0)
///     .unwrap()
///     .with_ymd_and_hms(2025, 1, 8, 22, 30, 45)
///     .unwrap();
///
/// let rendered = TimestampFormat::Condensed12.format(&date);
/// assert_eq!(rendered.as_deref(), Some("01/08/2025 @ 10:30:45 PM UTC+00:00"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// No timestamp is rendered
    None,

    /// `Wed, Jan 08 2025 @ 22:30:45 UTC+00:00`
    #[serde(rename = "full_24")]
    Full24,

    /// `Wed, Jan 08 2025 @ 10:30:45 PM UTC+00:00`
    #[serde(rename = "full_12")]
    Full12,

    /// `01/08/2025 @ 22:30:45 UTC+00:00`
    #[serde(rename = "condensed_24")]
    Condensed24,

    /// `01/08/2025 @ 10:30:45 PM UTC+00:00`
    ///
    /// This is the default format.
    #[default]
    #[serde(rename = "condensed_12")]
    Condensed12,

    /// `01/08/2025 @ 22:30:45`
    #[serde(rename = "minimal_24")]
    Minimal24,

    /// `01/08/2025 @ 10:30:45 PM`
    #[serde(rename = "minimal_12")]
    Minimal12,

    /// `22:30:45`
    #[serde(rename = "time_24")]
    Time24,

    /// `10:30:45 PM`
    #[serde(rename = "time_12")]
    Time12,

    /// Custom strftime format
    ///
    /// ```
    /// use console_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%Y-%m-%d %H:%M".to_string());
    /// assert!(format.validate().is_ok());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Every preset, in declaration order.
    pub const PRESETS: [TimestampFormat; 8] = [
        TimestampFormat::Full24,
        TimestampFormat::Full12,
        TimestampFormat::Condensed24,
        TimestampFormat::Condensed12,
        TimestampFormat::Minimal24,
        TimestampFormat::Minimal12,
        TimestampFormat::Time24,
        TimestampFormat::Time12,
    ];

    /// strftime pattern for this format, `None` when timestamps are disabled.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TimestampFormat::None => None,
            TimestampFormat::Full24 => Some("%a, %b %d %Y @ %H:%M:%S GMT%:z"),
            TimestampFormat::Full12 => Some("%a, %b %d %Y @ %I:%M:%S %p GMT%:z"),
            TimestampFormat::Condensed24 => Some("%m/%d/%Y @ %H:%M:%S GMT%:z"),
            TimestampFormat::Condensed12 => Some("%m/%d/%Y @ %I:%M:%S %p GMT%:z"),
            TimestampFormat::Minimal24 => Some("%m/%d/%Y @ %H:%M:%S"),
            TimestampFormat::Minimal12 => Some("%m/%d/%Y @ %I:%M:%S %p"),
            TimestampFormat::Time24 => Some("%H:%M:%S"),
            TimestampFormat::Time12 => Some("%I:%M:%S %p"),
            TimestampFormat::Custom(pattern) if pattern.is_empty() => None,
            TimestampFormat::Custom(pattern) => Some(pattern),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.pattern().is_none()
    }

    /// Render `datetime`, or `None` when timestamps are disabled.
    ///
    /// A custom pattern chrono cannot render is emitted verbatim instead of
    /// panicking; [`TimestampFormat::validate`] catches this up front.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let pattern = self.pattern()?;

        let mut rendered = String::new();
        if write!(rendered, "{}", datetime.format(pattern)).is_err() {
            rendered = pattern.to_string();
        }

        Some(rendered.replacen("GMT", "UTC", 1))
    }

    /// Reject custom patterns containing specifiers chrono does not know.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let Some(pattern) = self.pattern() else {
            return Ok(());
        };

        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(format!("invalid timestamp pattern '{}'", pattern));
        }

        Ok(())
    }
}
