// src/extract.rs
//
// The one resilient core algorithm every page parser reuses: labels and
// values render as adjacent text nodes in these firmware UIs, with no
// stable markup in between. So: flatten to the normalized line stream,
// find the label line, take the next line as the value. Field-specific
// typing happens afterwards as an explicit coercion pass.

use crate::core::text::text_lines;
use crate::record::{ModuleRecord, Value};

/// Resolve a label to the line immediately following its first occurrence.
/// A line matches when it equals the label or starts with it,
/// case-insensitively. No match, or a match on the final line → `None`.
pub fn lookup<'a>(lines: &'a [String], label: &str) -> Option<&'a str> {
    let needle = label.trim().to_lowercase();
    for (idx, line) in lines.iter().enumerate() {
        let l = line.trim().to_lowercase();
        if l == needle || l.starts_with(&needle) {
            return lines.get(idx + 1).map(String::as_str);
        }
    }
    None
}

/// Run the label scan for every `(key, label)` binding. Labels that never
/// match produce the `n/a` sentinel; this function cannot fail.
pub fn kv_table(html: &str, mapping: &[(&'static str, &str)]) -> ModuleRecord {
    let lines = text_lines(html);
    let mut out = ModuleRecord::new();
    for (key, label) in mapping {
        match lookup(&lines, label) {
            Some(v) => out.set(key, Value::text(v)),
            None => out.set(key, Value::Na),
        }
    }
    out
}

/// Coercion hook for numeric fields: the first run of digits, as an
/// integer. No digits, an empty string, or a literal `N/A` yield nothing
/// rather than zero.
pub fn to_int(value: &str) -> Option<i64> {
    let s = value.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") {
        return None;
    }
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: String = s[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Apply `to_int` to a field in place. Fields that were never found stay
/// `n/a`; fields with no usable digits become `n/a`.
pub fn coerce_int(rec: &mut ModuleRecord, key: &'static str) {
    let coerced = match rec.get(key) {
        Some(Value::Text(s)) => to_int(s).map(Value::Int).unwrap_or(Value::Na),
        Some(Value::Int(n)) => Value::Int(*n),
        _ => Value::Na,
    };
    rec.set(key, coerced);
}
