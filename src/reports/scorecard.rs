use crate::metrics::{Evaluation, SizeScore};
use serde::Serialize;

/// Category reported for every scorecard
pub const MODEL_CATEGORY: &str = "MODEL";

/// Output record for one artifact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub name: String,
    pub category: &'static str,
    pub net_score: f64,
    pub net_score_latency: u64,
    pub ramp_up_time: f64,
    pub ramp_up_time_latency: u64,
    pub bus_factor: f64,
    pub bus_factor_latency: u64,
    pub performance_claims: f64,
    pub performance_claims_latency: u64,
    pub license: f64,
    pub license_latency: u64,
    pub size_score: SizeScore,
    pub size_score_latency: u64,
    pub dataset_and_code_score: f64,
    pub dataset_and_code_score_latency: u64,
    pub dataset_quality: f64,
    pub dataset_quality_latency: u64,
    pub code_quality: f64,
    pub code_quality_latency: u64,
}

impl Scorecard {
    #[must_use]
    pub fn new(name: impl Into<String>, evaluation: &Evaluation) -> Self {
        let r = &evaluation.results;
        Self {
            name: name.into(),
            category: MODEL_CATEGORY,
            net_score: evaluation.net_score.score,
            net_score_latency: evaluation.net_score.latency_ms,
            ramp_up_time: r.ramp_up.score,
            ramp_up_time_latency: r.ramp_up.latency_ms,
            bus_factor: r.bus_factor.score,
            bus_factor_latency: r.bus_factor.latency_ms,
            performance_claims: r.performance_claims.score,
            performance_claims_latency: r.performance_claims.latency_ms,
            license: r.license.score,
            license_latency: r.license.latency_ms,
            size_score: r.size.score,
            size_score_latency: r.size.latency_ms,
            dataset_and_code_score: r.dataset_and_code.score,
            dataset_and_code_score_latency: r.dataset_and_code.latency_ms,
            dataset_quality: r.dataset_quality.score,
            dataset_quality_latency: r.dataset_quality.latency_ms,
            code_quality: r.code_quality.score,
            code_quality_latency: r.code_quality.latency_ms,
        }
    }
}
