use strum::{Display, EnumIter};

/// The eight sub-metrics of a scorecard, named by their output keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MetricKind {
    License,
    #[strum(serialize = "size_score")]
    Size,
    #[strum(serialize = "ramp_up_time")]
    RampUp,
    BusFactor,
    PerformanceClaims,
    #[strum(serialize = "dataset_and_code_score")]
    DatasetAndCode,
    DatasetQuality,
    CodeQuality,
}

impl MetricKind {
    /// Contribution of this metric to the net score
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::License => 0.20,
            Self::Size | Self::PerformanceClaims | Self::DatasetAndCode => 0.10,
            Self::RampUp | Self::BusFactor => 0.12,
            Self::DatasetQuality | Self::CodeQuality => 0.13,
        }
    }
}
