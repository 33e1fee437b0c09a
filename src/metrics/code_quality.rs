use super::text::{normalize, word_count};
use chrono::{DateTime, TimeDelta, Utc};

const POPULAR_STARS: u64 = 10_000;
const POPULAR_FORKS: u64 = 5_000;
const THOROUGH_README_WORDS: usize = 1700;
const ADEQUATE_README_WORDS: usize = 1000;
const RECENT_DAYS: i64 = 180;
const HEALTHY_CONTRIBUTORS: u64 = 10;

/// Signals the code quality score is computed from
#[derive(Debug, Clone, Copy)]
pub struct CodeQualityInputs<'a> {
    pub stars: u64,
    pub forks: u64,
    pub readme: &'a str,
    pub last_modified: Option<DateTime<Utc>>,
    pub contributors: u64,
}

/// Score the code repository's popularity, documentation, activity and contributor base.
///
/// Stars, forks, readme depth and recency reach 0.7 together; the remaining 0.3 comes from
/// having at least ten contributors, so that component scores on its own as well.
#[must_use]
pub fn score(inputs: &CodeQualityInputs<'_>, now: DateTime<Utc>) -> f64 {
    let mut total = 0.0;

    if inputs.stars >= POPULAR_STARS {
        total += 0.1;
    }

    if inputs.forks >= POPULAR_FORKS {
        total += 0.1;
    }

    let words = word_count(inputs.readme);
    if words >= THOROUGH_README_WORDS {
        total += 0.3;
    } else if words >= ADEQUATE_README_WORDS {
        total += 0.2;
    }

    if inputs.last_modified.is_some_and(|at| now - at <= TimeDelta::days(RECENT_DAYS)) {
        total += 0.2;
    }

    if inputs.contributors >= HEALTHY_CONTRIBUTORS {
        total += 0.3;
    }

    normalize(total)
}
