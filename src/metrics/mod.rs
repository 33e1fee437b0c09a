//! Scoring of artifacts from their collected signals
//!
//! Eight independent scorers each turn a few raw signals into a score in `[0, 1]`:
//!
//! | Metric | Inputs |
//! | --- | --- |
//! | `license` | declared model license |
//! | `size_score` | total weight-file size, scored per device class |
//! | `ramp_up_time` | onboarding sections of the code readme |
//! | `bus_factor` | contributor count |
//! | `performance_claims` | benchmark vocabulary in the code readme |
//! | `dataset_and_code_score` | presence of code and dataset links |
//! | `dataset_quality` | dataset readme length, downloads and vocabulary |
//! | `code_quality` | stars, forks, readme length, recency and contributors |
//!
//! # Implementation Model
//!
//! The scorers themselves are plain functions over already-fetched values, which keeps
//! them trivially testable. [`evaluate`] reads the inputs through a [`Signals`](crate::facts::Signals)
//! facade, runs all scorers concurrently and wraps each in wall-clock timing to produce a
//! [`MetricResult`]. The [`net_score`] aggregator then folds the eight results into a
//! weighted net score using the fixed weights carried by [`MetricKind`].

mod bus_factor;
mod code_quality;
mod dataset_and_code;
mod dataset_quality;
mod evaluation;
mod license;
mod metric_kind;
mod metric_result;
mod net_score;
mod performance_claims;
mod ramp_up;
mod size;
mod text;

pub use evaluation::{Evaluation, MetricResults, evaluate};
pub use metric_kind::MetricKind;
pub use metric_result::{MetricResult, Score};
pub use net_score::net_score;
pub use size::{DeviceClass, SizeScore};

pub use bus_factor::score as bus_factor;
pub use code_quality::{CodeQualityInputs, score as code_quality};
pub use dataset_and_code::score as dataset_and_code;
pub use dataset_quality::score as dataset_quality;
pub use license::score as license;
pub use performance_claims::score as performance_claims;
pub use ramp_up::score as ramp_up;
pub use size::score as size;
pub use text::{plain_text, word_count};
