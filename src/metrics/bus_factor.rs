/// Score how resilient the project is to losing contributors
#[must_use]
pub const fn score(contributors: u64) -> f64 {
    match contributors {
        10.. => 1.0,
        7..=9 => 0.5,
        5..=6 => 0.3,
        _ => 0.0,
    }
}
