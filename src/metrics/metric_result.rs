use serde::Serialize;

/// A computed score together with how long computing it took
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricResult<S = f64> {
    pub score: S,
    pub latency_ms: u64,
}

impl<S> MetricResult<S> {
    #[must_use]
    pub const fn new(score: S, latency_ms: u64) -> Self {
        Self { score, latency_ms }
    }
}

/// Reduction of a score to the single value the net score weighs
pub trait Score {
    fn value(&self) -> f64;
}

impl Score for f64 {
    fn value(&self) -> f64 {
        *self
    }
}
