// src/core/text.rs

use std::collections::HashSet;

use super::html::strip_tags_sep;

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Flatten a document into its ordered text-line stream: tags become line
/// breaks, each line is whitespace-collapsed, empties are dropped, and
/// duplicate lines keep only their first occurrence across the whole
/// document. Admin pages routinely render the same widget twice (hidden
/// mobile/desktop copies); deduplication keeps the first meaningful
/// occurrence of every label.
pub fn text_lines(html: &str) -> Vec<String> {
    if html.is_empty() {
        return Vec::new();
    }
    let text = strip_tags_sep(&normalize_entities(html), '\n');

    let mut seen: HashSet<String> = HashSet::new();
    let mut lines = Vec::new();
    for raw in text.lines() {
        let line = normalize_ws(raw);
        if line.is_empty() {
            continue;
        }
        if seen.insert(line.clone()) {
            lines.push(line);
        }
    }
    lines
}
