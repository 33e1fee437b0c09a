use super::text::round2;

/// Headings that introduce onboarding material in a readme
const MARKERS: &[&str] = &["install", "installation", "usage", "example", "quickstart", "quick start", "download", "how to use"];

/// Filler words that do not count towards a section's substance
const STOP_WORDS: &[&str] = &["more", "information", "see", "docs"];

/// Number of meaningful tokens at which a section counts as complete
const FULL_SECTION_TOKENS: f64 = 50.0;

/// Score how much onboarding material the code readme carries.
///
/// Each marker contributes the fraction of a full section found between its first
/// occurrence and the next occurrence of any other marker. The result is the mean over
/// all markers, so a readme covering only some of them scores proportionally lower.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "token and marker counts are tiny")]
pub fn score(readme: &str) -> f64 {
    let text = readme.to_lowercase();
    if text.trim().is_empty() {
        return 0.0;
    }

    let total: f64 = MARKERS.iter().map(|marker| section_score(&text, marker)).sum();
    round2(total / MARKERS.len() as f64)
}

#[expect(clippy::cast_precision_loss, reason = "token counts are tiny")]
fn section_score(text: &str, marker: &str) -> f64 {
    let Some(pos) = text.find(marker) else {
        return 0.0;
    };

    let start = pos + marker.len();
    let rest = text.get(start..).unwrap_or_default();
    let end = MARKERS
        .iter()
        .filter(|other| **other != marker)
        .filter_map(|other| rest.find(other))
        .min()
        .unwrap_or(rest.len());

    let tokens = rest
        .get(..end)
        .unwrap_or_default()
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token))
        .count();

    (tokens as f64 / FULL_SECTION_TOKENS).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_empty_readme() {
        assert!(score("").abs() < f64::EPSILON);
        assert!(score("  \n ").abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_markers() {
        assert!(score(&words(500)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_full_section() {
        let readme = format!("## Usage\n{}", words(60));
        assert!((score(&readme) - 0.13).abs() < f64::EPSILON);
    }

    #[test]
    fn test_section_stops_at_next_marker() {
        let text = format!("usage {} example {}", words(25), words(50));
        assert!((section_score(&text, "usage") - 0.5).abs() < f64::EPSILON);
        assert!((section_score(&text, "example") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stop_words_ignored() {
        let text = "usage see docs for more information";
        assert!((section_score(text, "usage") - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_case_insensitive() {
        let readme = format!("QUICKSTART {}", words(50));
        assert!(score(&readme) > 0.0);
    }

    #[test]
    fn test_all_sections_full() {
        let readme: String = MARKERS.iter().map(|m| format!("{m} {} ", words(50))).collect();
        assert!((score(&readme) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounded() {
        let readme = format!("install usage example download {}", words(10_000));
        let s = score(&readme);
        assert!((0.0..=1.0).contains(&s));
    }
}
