use super::code_quality::CodeQualityInputs;
use super::{MetricKind, MetricResult, Score, SizeScore, net_score};
use crate::facts::{DataProvider, Signals};
use chrono::{DateTime, Utc};
use std::time::Instant;

/// The eight timed sub-metric results of one artifact
#[derive(Debug, Clone, PartialEq)]
pub struct MetricResults {
    pub license: MetricResult,
    pub size: MetricResult<SizeScore>,
    pub ramp_up: MetricResult,
    pub bus_factor: MetricResult,
    pub performance_claims: MetricResult,
    pub dataset_and_code: MetricResult,
    pub dataset_quality: MetricResult,
    pub code_quality: MetricResult,
}

impl MetricResults {
    /// Each metric with the scalar value the net score weighs and its latency
    #[must_use]
    pub fn entries(&self) -> [(MetricKind, f64, u64); 8] {
        [
            (MetricKind::License, self.license.score, self.license.latency_ms),
            (MetricKind::Size, self.size.score.value(), self.size.latency_ms),
            (MetricKind::RampUp, self.ramp_up.score, self.ramp_up.latency_ms),
            (MetricKind::BusFactor, self.bus_factor.score, self.bus_factor.latency_ms),
            (MetricKind::PerformanceClaims, self.performance_claims.score, self.performance_claims.latency_ms),
            (MetricKind::DatasetAndCode, self.dataset_and_code.score, self.dataset_and_code.latency_ms),
            (MetricKind::DatasetQuality, self.dataset_quality.score, self.dataset_quality.latency_ms),
            (MetricKind::CodeQuality, self.code_quality.score, self.code_quality.latency_ms),
        ]
    }
}

/// Complete result of scoring one artifact
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub results: MetricResults,
    pub net_score: MetricResult,
}

pub(super) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Run `work` and measure how long it took, including any time spent waiting on signals
async fn timed<S>(work: impl Future<Output = S>) -> MetricResult<S> {
    let start = Instant::now();
    let score = work.await;
    MetricResult::new(score, elapsed_ms(start))
}

/// Score an artifact.
///
/// All scorers run concurrently and share the signals facade, so each signal is fetched
/// once even when several scorers need it. `now` anchors the recency check.
pub async fn evaluate<P: DataProvider>(signals: &Signals<'_, P>, now: DateTime<Utc>) -> Evaluation {
    let artifact = signals.artifact();

    let (license, size, ramp_up, bus_factor, performance_claims, dataset_and_code, dataset_quality, code_quality) = tokio::join!(
        timed(async { super::license(&signals.model().await.license) }),
        timed(async { super::size(&signals.model().await.files) }),
        timed(async { super::ramp_up(signals.code_readme().await) }),
        timed(async { super::bus_factor(signals.contributors().await) }),
        timed(async { super::performance_claims(signals.code_readme().await) }),
        timed(async { super::dataset_and_code(artifact.has_code(), artifact.has_dataset()) }),
        timed(async { super::dataset_quality(signals.dataset_readme().await, signals.dataset().await.downloads) }),
        timed(async {
            let (repo, readme, last_modified, contributors) = tokio::join!(
                signals.repo(),
                signals.code_readme(),
                signals.last_modified(),
                signals.contributors()
            );
            let inputs = CodeQualityInputs {
                stars: repo.stars,
                forks: repo.forks,
                readme,
                last_modified,
                contributors,
            };
            super::code_quality(&inputs, now)
        }),
    );

    let results = MetricResults {
        license,
        size,
        ramp_up,
        bus_factor,
        performance_claims,
        dataset_and_code,
        dataset_quality,
        code_quality,
    };

    let net_score = net_score(&results);
    Evaluation { results, net_score }
}
