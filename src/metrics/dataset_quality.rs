use super::text::{keyword_pattern, normalize, word_count};
use regex::Regex;
use std::sync::LazyLock;

const DOCUMENTED_WORDS: usize = 820;
const POPULAR_DOWNLOADS: u64 = 100_000;
const USED_DOWNLOADS: u64 = 50_000;

static DATASET_TERMS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern(&["license", "download", "split", "train", "test", "validation"]));

/// Score the primary dataset from its readme and download count
#[must_use]
pub fn score(readme: &str, downloads: u64) -> f64 {
    let mut total = 0.0;

    if word_count(readme) >= DOCUMENTED_WORDS {
        total += 0.3;
    }

    if downloads >= POPULAR_DOWNLOADS {
        total += 0.2;
    } else if downloads >= USED_DOWNLOADS {
        total += 0.15;
    }

    if DATASET_TERMS_REGEX.is_match(&readme.to_lowercase()) {
        total += 0.5;
    }

    normalize(total)
}
