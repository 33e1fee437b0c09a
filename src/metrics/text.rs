//! Readme text helpers shared by the scorers.

use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid regex"));
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#+[ \t]*").expect("invalid regex"));
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!?\[([^\]]*)\]\([^)]*\)").expect("invalid regex"));
static EMPHASIS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*|__|[*_`~]").expect("invalid regex"));

/// Strip markdown and HTML markup, keeping the readable text
#[must_use]
pub fn plain_text(text: &str) -> String {
    let text = HTML_TAG_REGEX.replace_all(text, " ");
    let text = LINK_REGEX.replace_all(&text, "$1");
    let text = HEADING_REGEX.replace_all(&text, "");
    EMPHASIS_REGEX.replace_all(&text, "").into_owned()
}

/// Number of whitespace-separated words once markup is stripped
#[must_use]
pub fn word_count(text: &str) -> usize {
    plain_text(text).split_whitespace().count()
}

/// Build a pattern matching any of `words` as a whole word
pub fn keyword_pattern(words: &[&str]) -> Regex {
    let alternatives: Vec<_> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))).expect("invalid regex")
}

#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp to `[0, 1]` and round to two decimals
#[must_use]
pub fn normalize(value: f64) -> f64 {
    round2(value.clamp(0.0, 1.0))
}
