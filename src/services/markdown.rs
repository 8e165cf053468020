// src/services/markdown.rs
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

// Applied in order; each pass sees the previous pass's output.
static PASSES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?s)```.*?```", ""),
        (r"`([^`]+)`", "${1}"),
        (r"\*\*([^*]+)\*\*", "${1}"),
        (r"\*([^*]+)\*", "${1}"),
        (r"(?mR)^>\s?", ""),
        (r"(?mR)^#{1,6}\s+", ""),
        (r"\[(.*?)\]\((.*?)\)", "${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("markdown pattern is valid"), replacement)
    })
    .collect()
});

/// Reduce Markdown to plain text for displays that don't render it.
pub fn strip_markdown(input: &str) -> String {
    let stripped = PASSES
        .iter()
        .fold(input.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        });
    stripped.trim().to_string()
}

/// Non-string values strip to an empty string.
pub fn strip_markdown_value(value: &Value) -> String {
    value.as_str().map(strip_markdown).unwrap_or_default()
}
