use super::MetricResult;
use super::evaluation::{MetricResults, elapsed_ms};
use super::text::normalize;
use std::time::Instant;

/// Fold the eight sub-metric results into the weighted net score.
///
/// The latency reported is the sum of the sub-metric latencies plus the time spent here.
#[must_use]
pub fn net_score(results: &MetricResults) -> MetricResult {
    let start = Instant::now();
    let entries = results.entries();

    let weighted: f64 = entries.iter().map(|(kind, score, _)| kind.weight() * score).sum();
    let score = normalize(weighted);

    let metric_latency = entries.iter().map(|(_, _, latency)| *latency).fold(0, u64::saturating_add);
    MetricResult::new(score, metric_latency.saturating_add(elapsed_ms(start)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SizeScore;

    fn results(score: f64, latency_ms: u64) -> MetricResults {
        let r = MetricResult::new(score, latency_ms);
        MetricResults {
            license: r,
            size: MetricResult::new(
                SizeScore {
                    raspberry_pi: score,
                    jetson_nano: score,
                    desktop_pc: score,
                    aws_server: score,
                },
                latency_ms,
            ),
            ramp_up: r,
            bus_factor: r,
            performance_claims: r,
            dataset_and_code: r,
            dataset_quality: r,
            code_quality: r,
        }
    }

    #[test]
    fn test_all_ones() {
        let net = net_score(&results(1.0, 0));
        assert!((net.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_zeros() {
        let net = net_score(&results(0.0, 0));
        assert!(net.score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_sum() {
        let mut r = results(0.0, 0);
        r.license.score = 1.0;
        r.code_quality.score = 1.0;
        let net = net_score(&r);
        assert!((net.score - 0.33).abs() < 1e-9);
    }

    #[test]
    fn test_size_uses_weakest_device() {
        let mut r = results(0.0, 0);
        r.size.score = SizeScore {
            raspberry_pi: 0.0,
            jetson_nano: 0.5,
            desktop_pc: 1.0,
            aws_server: 1.0,
        };
        assert!(net_score(&r).score.abs() < f64::EPSILON);

        r.size.score.raspberry_pi = 0.5;
        assert!((net_score(&r).score - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_latency_sums_metrics() {
        let net = net_score(&results(0.5, 7));
        assert!(net.latency_ms >= 56);
    }

    #[test]
    fn test_deterministic() {
        let r = results(0.37, 3);
        assert!((net_score(&r).score - net_score(&r).score).abs() < f64::EPSILON);
    }
}
