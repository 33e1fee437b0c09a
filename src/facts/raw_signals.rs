use super::provider::UNKNOWN_LICENSE;
use super::{DataProvider, DatasetInfo, FileEntry, ModelInfo, ProviderResult, ReadmeSource, RepoInfo, RepoSpec};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the scorers consume for one artifact, with absent data already replaced by defaults.
///
/// A snapshot also implements [`DataProvider`], answering every request from its own
/// fields regardless of the identifiers asked for. That lets a collected snapshot be
/// replayed through the regular scoring path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawSignals {
    pub license: String,
    pub files: Vec<FileEntry>,
    pub code_readme: String,
    pub dataset_readme: String,
    pub model_readme: String,
    pub contributors: u64,
    pub stars: u64,
    pub forks: u64,
    pub last_modified: Option<DateTime<Utc>>,
    pub downloads: u64,
}

impl Default for RawSignals {
    fn default() -> Self {
        Self {
            license: UNKNOWN_LICENSE.to_string(),
            files: Vec::new(),
            code_readme: String::new(),
            dataset_readme: String::new(),
            model_readme: String::new(),
            contributors: 0,
            stars: 0,
            forks: 0,
            last_modified: None,
            downloads: 0,
        }
    }
}

impl DataProvider for RawSignals {
    async fn model_info(&self, _model_id: &str) -> ProviderResult<ModelInfo> {
        ProviderResult::Found(ModelInfo {
            license: self.license.clone(),
            files: self.files.clone(),
            downloads: 0,
            last_modified: self.last_modified,
        })
    }

    async fn dataset_info(&self, _dataset_id: &str) -> ProviderResult<DatasetInfo> {
        ProviderResult::Found(DatasetInfo {
            downloads: self.downloads,
            last_modified: None,
        })
    }

    async fn repo_info(&self, _repo: &RepoSpec) -> ProviderResult<RepoInfo> {
        ProviderResult::Found(RepoInfo {
            stars: self.stars,
            forks: self.forks,
            pushed_at: self.last_modified,
        })
    }

    async fn contributor_count(&self, _repo: &RepoSpec) -> ProviderResult<u64> {
        ProviderResult::Found(self.contributors)
    }

    async fn readme(&self, source: ReadmeSource<'_>) -> ProviderResult<String> {
        ProviderResult::Found(match source {
            ReadmeSource::Model(_) => self.model_readme.clone(),
            ReadmeSource::Dataset(_) => self.dataset_readme.clone(),
            ReadmeSource::Code(_) => self.code_readme.clone(),
        })
    }
}
