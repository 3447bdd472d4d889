//! ANSI-aware string measurement and padding

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Matches CSI-style control sequences: ESC or 0x9B, optional parameter
/// bytes, then a final byte.
const ANSI_PATTERN: &str =
    r"[\x1b\x{9b}][\[()#;?]*(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-ORZcf-nqry=><]";

fn ansi_regex() -> &'static Regex {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    ANSI.get_or_init(|| Regex::new(ANSI_PATTERN).expect("ANSI pattern is a valid regex"))
}

/// Remove terminal control sequences from `s`.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    ansi_regex().replace_all(s, "")
}

/// Number of characters in `s` once control sequences are removed.
pub fn visible_length(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Largest visible length among `strings`, or zero when empty.
pub fn max_visible_length<I, S>(strings: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .map(|s| visible_length(s.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Append spaces until `s` is at least `length` visible characters wide.
pub fn pad_trailing(s: &str, length: usize) -> String {
    let visible = visible_length(s);
    if visible >= length {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + (length - visible));
    result.push_str(s);
    result.extend(std::iter::repeat(' ').take(length - visible));
    result
}
