//! Data collection for model/code/dataset artifacts
//!
//! This module is responsible for gathering the raw signals the scorers work from.
//! It resolves input URLs into artifact identifiers and fetches metadata and readme
//! text for the model, its code repository and its datasets.
//!
//! # Implementation Model
//!
//! The seam is the [`DataProvider`] trait. Each call answers with a [`ProviderResult`]
//! which can be `Found`, `Unavailable`, or `Error`, allowing the system to gracefully
//! handle partial data availability. The shipped implementation is [`hub::Provider`],
//! which talks to the Hugging Face Hub and the GitHub REST API. A [`RawSignals`]
//! snapshot can also stand in as a provider to replay previously collected data.
//!
//! Scorers never call a provider directly. They read through [`Signals`], a per-artifact
//! facade that fetches each signal at most once, bounds every fetch with a timeout, and
//! degrades any failure to the signal's typed default.

mod artifact_ref;
pub mod hub;
mod provider;
mod provider_result;
mod raw_signals;
mod repo_spec;
mod signals;

pub use artifact_ref::ArtifactRef;
pub use provider::{DataProvider, DatasetInfo, FileEntry, ModelInfo, ReadmeSource, RepoInfo};
pub use provider_result::ProviderResult;
pub use raw_signals::RawSignals;
pub use repo_spec::RepoSpec;
pub use signals::Signals;
