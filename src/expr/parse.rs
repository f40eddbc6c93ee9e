use super::LiquidExpression;
use regex::Regex;
use std::sync::LazyLock;

// Matchers are process-wide constants. The `regex` crate keeps no mutable
// state across calls, so sharing them is safe on every keystroke.
static LIQUID_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{([^{}]*)\}\}$").expect("liquid token pattern is valid"));

static LIQUID_SCAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[^{}]*\}\}").expect("liquid scan pattern is valid"));

/// Parses a single liquid token into a [`LiquidExpression`].
///
/// The input may or may not already be wrapped in `{{ }}`; exactly one brace
/// pair is stripped and re-added during normalization. Returns `None` only
/// when the normalized token does not match `{{...}}` at all (for example,
/// unbalanced braces).
///
/// Pure function; safe to call on every keystroke.
pub fn parse_liquid_expression(raw: &str) -> Option<LiquidExpression> {
    let trimmed = raw.trim();
    let wrapped = if trimmed.starts_with("{{") && trimmed.ends_with("}}") && trimmed.len() >= 4 {
        trimmed.to_string()
    } else {
        format!("{{{{{trimmed}}}}}")
    };

    let captures = LIQUID_TOKEN.captures(&wrapped)?;
    let inner = captures.get(1).map(|m| m.as_str()).unwrap_or("");

    let mut segments = split_unescaped_pipe(inner);
    let path = segments.next().unwrap_or("").trim().to_string();
    let filters: Vec<String> = segments
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    let root_namespace = path.split('.').next().unwrap_or("").to_string();

    let full_expression = if filters.is_empty() {
        format!("{{{{{path}}}}}")
    } else {
        format!("{{{{{path} | {}}}}}", filters.join(" | "))
    };

    Some(LiquidExpression {
        full_expression,
        root_namespace,
        path,
        filters,
    })
}

/// Scans arbitrary text for `{{...}}` tokens and parses each one.
///
/// Malformed tokens are skipped rather than aborting the scan, so a single
/// broken expression never hides the rest of a step's variables.
pub fn extract_liquid_expressions(text: &str) -> Vec<LiquidExpression> {
    LIQUID_SCAN
        .find_iter(text)
        .filter_map(|m| parse_liquid_expression(m.as_str()))
        .collect()
}

/// Splits on `|` characters that are not preceded by a backslash escape.
fn split_unescaped_pipe(input: &str) -> impl Iterator<Item = &str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (idx, ch) in input.char_indices() {
        match ch {
            '\\' => escaped = !escaped,
            '|' if !escaped => {
                pieces.push(&input[start..idx]);
                start = idx + 1;
            }
            _ => escaped = false,
        }
    }
    pieces.push(&input[start..]);
    pieces.into_iter()
}
