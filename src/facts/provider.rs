use super::{ProviderResult, RepoSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// License reported when a model declares none
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// One file in a model repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

impl FileEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// Hub metadata for a model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub license: String,
    pub files: Vec<FileEntry>,
    pub downloads: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            license: UNKNOWN_LICENSE.to_string(),
            files: Vec::new(),
            downloads: 0,
            last_modified: None,
        }
    }
}

/// Hub metadata for a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetInfo {
    pub downloads: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Hosting metadata for a code repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoInfo {
    pub stars: u64,
    pub forks: u64,
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Which readme to fetch
#[derive(Debug, Clone, Copy)]
pub enum ReadmeSource<'a> {
    Model(&'a str),
    Dataset(&'a str),
    Code(&'a RepoSpec),
}

/// Source of the raw signals an artifact is scored from.
///
/// Implementations never fail hard: anything that cannot be obtained is reported as
/// [`ProviderResult::Unavailable`] or [`ProviderResult::Error`], and callers fall back
/// to typed defaults. Implementations must tolerate concurrent calls through `&self`.
pub trait DataProvider: Send + Sync {
    fn model_info(&self, model_id: &str) -> impl Future<Output = ProviderResult<ModelInfo>> + Send;

    fn dataset_info(&self, dataset_id: &str) -> impl Future<Output = ProviderResult<DatasetInfo>> + Send;

    fn repo_info(&self, repo: &RepoSpec) -> impl Future<Output = ProviderResult<RepoInfo>> + Send;

    fn contributor_count(&self, repo: &RepoSpec) -> impl Future<Output = ProviderResult<u64>> + Send;

    fn readme(&self, source: ReadmeSource<'_>) -> impl Future<Output = ProviderResult<String>> + Send;
}
