//! Message formatting
//!
//! A formatted line is assembled in this order:
//!
//! 1. level symbol, padded to the width of the widest symbol
//! 2. timestamp, unless disabled
//! 3. `[category]`, when the logger has one
//! 4. alignment padding, when alignment categories are configured
//! 5. delimiter and message body
//! 6. context data, inline or on the following lines
//!
//! ```text
//! [INFO]  01/08/2025 @ 10:30:45 PM UTC+00:00 [Api] :: Request served :: { status: 200 }
//! ```

use super::context_value::ContextValue;
use super::log_level::LogLevel;
use super::options::LoggerOptions;
use super::style::{Style, Stylist};
use super::text::{max_visible_length, pad_trailing, visible_length};
use super::value_renderer;
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Width added when no category is shown, standing in for the `[]` brackets
/// around the alignment categories.
const BRACKETS_WIDTH: usize = 3;

/// Renders messages for one logger configuration
pub struct MessageFormatter<'a> {
    options: &'a LoggerOptions,
    alignment_categories: &'a [String],
    stylist: Stylist,
}

impl<'a> MessageFormatter<'a> {
    pub fn new(options: &'a LoggerOptions, alignment_categories: &'a [String]) -> Self {
        Self {
            options,
            alignment_categories,
            stylist: Stylist::new(options.use_colors),
        }
    }

    /// Fixed-width, styled level symbol.
    pub fn symbol(&self, level: LogLevel) -> String {
        let width = max_visible_length(LogLevel::EMITTABLE.iter().filter_map(LogLevel::label));
        let label = pad_trailing(level.label().unwrap_or_default(), width);
        self.stylist.paint(&label, level.style())
    }

    /// Render a complete line.
    pub fn format<Tz>(
        &self,
        level: LogLevel,
        message: &str,
        date: &DateTime<Tz>,
        category: Option<&str>,
        context: Option<&ContextValue>,
    ) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let category = category.filter(|c| !c.is_empty());
        let level_style = level.style();

        let mut result = self.symbol(level);

        if let Some(timestamp) = self.options.timestamp_format.format(date) {
            result.push(' ');
            result.push_str(&self.stylist.paint(&timestamp, Style::White));
        }

        if let Some(category) = category {
            result.push(' ');
            result.push_str(&self.stylist.paint(&format!("[{}]", category), Style::Yellow));
        }

        result.push_str(&" ".repeat(self.alignment_padding(category)));

        self.push_delimited(&mut result, &self.stylist.paint(message, level_style));

        if let Some(context) = context.filter(|c| !c.is_null()) {
            let compact = self.options.compact_context;
            let rendered = self
                .stylist
                .paint(&value_renderer::render(context, compact), Style::Gray);

            if compact || context.is_string() {
                self.push_delimited(&mut result, &rendered);
            } else {
                result.push('\n');
                result.push_str(&rendered);
            }
        }

        result
    }

    /// Spaces needed after the category so every logger's message column lines up.
    pub fn alignment_padding(&self, category: Option<&str>) -> usize {
        if self.alignment_categories.is_empty() {
            return 0;
        }

        let widest = max_visible_length(self.alignment_categories);
        match category.filter(|c| !c.is_empty()) {
            Some(category) => widest.saturating_sub(visible_length(category)),
            None => widest + BRACKETS_WIDTH,
        }
    }

    fn push_delimited(&self, result: &mut String, text: &str) {
        if let Some(delimiter) = self.options.delimiter() {
            result.push(' ');
            result.push_str(delimiter);
        }
        result.push(' ');
        result.push_str(text);
    }
}
