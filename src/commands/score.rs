use super::common::{LogLevel, init_logging};
use super::config::Config;
use super::input::parse_artifacts;
use crate::facts::{ArtifactRef, DataProvider, Signals, hub};
use crate::metrics::evaluate;
use crate::reports::{Scorecard, write_ndjson};
use crate::{Host, Result};
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use clap::Args;
use core::time::Duration;
use futures::StreamExt;
use futures::stream;
use ohno::{EnrichableExt, IntoAppError};
use std::fs;

const LOG_TARGET: &str = "     score";

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File listing one artifact per line as `code_url, dataset_url, model_url`
    #[arg(value_name = "URL_FILE")]
    pub url_file: Utf8PathBuf,

    /// Path to configuration file (default is `trustcard.toml` in the working directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Score every artifact listed in the URL file and write one scorecard line per artifact
pub async fn score_url_file<H: Host>(host: &mut H, args: &ScoreArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(args.config.as_deref())?;

    let text = fs::read_to_string(&args.url_file).into_app_err_with(|| format!("reading URL file '{}'", args.url_file))?;
    let artifacts = parse_artifacts(&text).map_err(|e| e.enrich_with(|| format!("parsing URL file '{}'", args.url_file)))?;
    log::info!(target: LOG_TARGET, "Scoring {} artifact(s) from '{}'", artifacts.len(), args.url_file);

    let provider = hub::Provider::new(&config.huggingface_url, &config.github_api_url, config.request_timeout())?;

    score_artifacts(
        &mut host.output(),
        &provider,
        &artifacts,
        config.request_timeout(),
        config.max_concurrent_artifacts,
    )
    .await
}

/// Evaluate `artifacts` against `provider`, up to `concurrency` at a time, emitting scorecards in input order
pub async fn score_artifacts<P: DataProvider>(
    output: &mut impl std::io::Write,
    provider: &P,
    artifacts: &[ArtifactRef],
    timeout: Duration,
    concurrency: usize,
) -> Result<()> {
    let now = Utc::now();

    let mut cards = stream::iter(artifacts)
        .map(|artifact| score_artifact(provider, artifact, timeout, now))
        .buffered(concurrency.max(1));

    while let Some(card) = cards.next().await {
        write_ndjson(output, &card)?;
    }

    Ok(())
}

async fn score_artifact<P: DataProvider>(provider: &P, artifact: &ArtifactRef, timeout: Duration, now: DateTime<Utc>) -> Scorecard {
    let signals = Signals::new(provider, artifact, timeout);
    let evaluation = evaluate(&signals, now).await;
    let card = Scorecard::new(artifact.name(), &evaluation);

    log::debug!(target: LOG_TARGET, "Scorecard for '{artifact}': {card:?}");

    if log::log_enabled!(target: LOG_TARGET, log::Level::Trace) {
        let snapshot = signals.snapshot().await;
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::trace!(target: LOG_TARGET, "Signals for '{artifact}': {json}"),
            Err(e) => log::trace!(target: LOG_TARGET, "Could not serialize signals for '{artifact}': {e}"),
        }
    }

    card
}
