//! Score the trustworthiness of machine-learning models, together with their code and datasets.
//!
//! # Overview
//!
//! `trustcard` reads a file listing one artifact per line, each as three comma-separated URLs:
//!
//! ```text
//! https://github.com/google-research/bert, https://huggingface.co/datasets/bookcorpus/bookcorpus, https://huggingface.co/google-bert/bert-base-uncased
//! ,,https://huggingface.co/openai/whisper-tiny
//! ```
//!
//! The code and dataset URLs may be left empty; the model URL is required. For every line it
//! gathers metadata and readme text from the Hugging Face Hub and GitHub, computes eight
//! sub-metrics in `[0, 1]` (license, size, ramp-up, bus factor, performance claims,
//! dataset-and-code availability, dataset quality, code quality) and a weighted net score,
//! and writes one JSON scorecard per line to stdout, in input order.
//!
//! # Usage
//!
//! ```bash
//! trustcard urls.txt
//! trustcard --config trustcard.toml --log-level debug urls.txt
//! ```
//!
//! Diagnostics go to stderr so stdout stays pure NDJSON. The exit code is 0 on success, 1 when
//! the URL file or configuration cannot be processed, and 2 on command-line usage errors.
//!
//! # Configuration
//!
//! Settings are read from the file passed with `--config`, else from `trustcard.toml` in the
//! working directory, else built-in defaults are used:
//!
//! ```toml
//! request_timeout_secs = 10
//! max_concurrent_artifacts = 4
//! huggingface_url = "https://huggingface.co"
//! github_api_url = "https://api.github.com"
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Write;
use std::io::{stderr, stdout};
use trustcard::{Host, run};

/// Default host that talks to the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
