use super::text::keyword_pattern;
use regex::Regex;
use std::sync::LazyLock;

static CLAIMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(&[
        "accuracy",
        "benchmark",
        "perplexity",
        "performance",
        "state-of-the-art",
        "sota",
        "f1",
        "bleu",
        "rouge",
    ])
});

/// 1.0 when the code readme reports any evaluation result, 0.0 otherwise
#[must_use]
pub fn score(readme: &str) -> f64 {
    if CLAIMS_REGEX.is_match(&readme.to_lowercase()) { 1.0 } else { 0.0 }
}
