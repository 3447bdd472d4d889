//! Pretty-printer for context data
//!
//! Two layouts are supported:
//! - compact: `{ id: abc, tags: [a, b] }` on a single line
//! - indented: one `key: value` per line, two spaces per nesting level
//!
//! Strings are printed without quotes. Object keys keep their insertion order.

use super::context_value::ContextValue;

const INDENT: usize = 2;

/// Render `value` starting at the outermost nesting level.
pub fn render(value: &ContextValue, compact: bool) -> String {
    render_at(value, compact, 1)
}

/// Render `value` as if it were nested `depth` levels deep.
///
/// `depth` only affects indented output: members are indented by
/// `2 * depth` spaces and the closing bracket by one level less.
pub fn render_at(value: &ContextValue, compact: bool, depth: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, compact, depth.max(1));
    out
}

fn write_value(out: &mut String, value: &ContextValue, compact: bool, depth: usize) {
    match value {
        ContextValue::Object(pairs) => write_object(out, pairs, compact, depth),
        ContextValue::Array(items) => write_array(out, items, compact, depth),
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_object(out: &mut String, pairs: &[(String, ContextValue)], compact: bool, depth: usize) {
    let last = pairs.len().saturating_sub(1);

    if compact {
        out.push('{');
        for (i, (key, value)) in pairs.iter().enumerate() {
            out.push(' ');
            out.push_str(key);
            out.push_str(": ");
            write_value(out, value, compact, depth + 1);
            if i != last {
                out.push(',');
            }
        }
        out.push_str(" }");
        return;
    }

    let (member_indent, bracket_indent) = indents(depth);
    out.push_str("{\n");
    for (i, (key, value)) in pairs.iter().enumerate() {
        out.push_str(&member_indent);
        out.push_str(key);
        out.push_str(": ");
        write_value(out, value, compact, depth + 1);
        if i != last {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&bracket_indent);
    out.push('}');
}

fn write_array(out: &mut String, items: &[ContextValue], compact: bool, depth: usize) {
    let last = items.len().saturating_sub(1);

    if compact {
        out.push('[');
        for (i, value) in items.iter().enumerate() {
            write_value(out, value, compact, depth + 1);
            if i != last {
                out.push_str(", ");
            }
        }
        out.push(']');
        return;
    }

    let (member_indent, bracket_indent) = indents(depth);
    out.push_str("[\n");
    for (i, value) in items.iter().enumerate() {
        out.push_str(&member_indent);
        write_value(out, value, compact, depth + 1);
        if i != last {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&bracket_indent);
    out.push(']');
}

fn indents(depth: usize) -> (String, String) {
    let member = " ".repeat(INDENT * depth);
    let bracket = " ".repeat(INDENT * (depth - 1));
    (member, bracket)
}
