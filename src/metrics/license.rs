/// License families compatible with permissive reuse, matched anywhere in the declared license
const PERMISSIVE_TOKENS: &[&str] = &["mit", "apache", "lgpl-2.1", "bsd-3-clause", "bsd-2-clause", "mpl"];

/// 1.0 when the declared license belongs to a permissive family, 0.0 otherwise
#[must_use]
pub fn score(license: &str) -> f64 {
    let license = license.to_lowercase();
    if PERMISSIVE_TOKENS.iter().any(|token| license.contains(token)) {
        1.0
    } else {
        0.0
    }
}
