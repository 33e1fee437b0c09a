/// Share of the supporting artifacts (code and dataset) that are linked
#[must_use]
pub fn score(has_code: bool, has_dataset: bool) -> f64 {
    (f64::from(u8::from(has_code)) + f64::from(u8::from(has_dataset))) / 2.0
}
