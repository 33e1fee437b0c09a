use super::{ArtifactRef, DataProvider, DatasetInfo, ModelInfo, ProviderResult, RawSignals, ReadmeSource, RepoInfo};
use chrono::{DateTime, Utc};
use core::time::Duration;
use tokio::sync::OnceCell;

const LOG_TARGET: &str = "   signals";

/// Per-artifact, fetch-once view of a [`DataProvider`].
///
/// Each signal is requested from the provider at most once no matter how many scorers
/// read it; concurrent readers wait on the same in-flight request. Every request is
/// bounded by `timeout`, and anything other than a found value turns into the signal's
/// typed default.
#[derive(Debug)]
pub struct Signals<'a, P> {
    provider: &'a P,
    artifact: &'a ArtifactRef,
    timeout: Duration,
    model: OnceCell<ModelInfo>,
    dataset: OnceCell<DatasetInfo>,
    repo: OnceCell<RepoInfo>,
    contributors: OnceCell<u64>,
    code_readme: OnceCell<String>,
    dataset_readme: OnceCell<String>,
    model_readme: OnceCell<String>,
}

impl<'a, P: DataProvider> Signals<'a, P> {
    #[must_use]
    pub fn new(provider: &'a P, artifact: &'a ArtifactRef, timeout: Duration) -> Self {
        Self {
            provider,
            artifact,
            timeout,
            model: OnceCell::new(),
            dataset: OnceCell::new(),
            repo: OnceCell::new(),
            contributors: OnceCell::new(),
            code_readme: OnceCell::new(),
            dataset_readme: OnceCell::new(),
            model_readme: OnceCell::new(),
        }
    }

    #[must_use]
    pub const fn artifact(&self) -> &'a ArtifactRef {
        self.artifact
    }

    pub async fn model(&self) -> &ModelInfo {
        self.model
            .get_or_init(|| self.fetch("model metadata", self.provider.model_info(self.artifact.model_id())))
            .await
    }

    /// Metadata of the primary dataset, or defaults when the artifact has none
    pub async fn dataset(&self) -> &DatasetInfo {
        self.dataset
            .get_or_init(|| async {
                let ignored = self.artifact.dataset_ids().get(1..).unwrap_or_default();
                if !ignored.is_empty() {
                    log::debug!(target: LOG_TARGET, "Scoring only the primary dataset of '{}', ignoring {ignored:?}", self.artifact);
                }

                match self.artifact.primary_dataset() {
                    Some(id) => self.fetch("dataset metadata", self.provider.dataset_info(id)).await,
                    None => DatasetInfo::default(),
                }
            })
            .await
    }

    /// Hosting metadata of the code repository, or defaults when the artifact has none
    pub async fn repo(&self) -> &RepoInfo {
        self.repo
            .get_or_init(|| async {
                match self.artifact.code() {
                    Some(repo) => self.fetch("repository metadata", self.provider.repo_info(repo)).await,
                    None => RepoInfo::default(),
                }
            })
            .await
    }

    pub async fn contributors(&self) -> u64 {
        *self
            .contributors
            .get_or_init(|| async {
                match self.artifact.code() {
                    Some(repo) => self.fetch("contributor count", self.provider.contributor_count(repo)).await,
                    None => 0,
                }
            })
            .await
    }

    pub async fn code_readme(&self) -> &str {
        self.code_readme
            .get_or_init(|| async {
                match self.artifact.code() {
                    Some(repo) => self.fetch("code readme", self.provider.readme(ReadmeSource::Code(repo))).await,
                    None => String::new(),
                }
            })
            .await
    }

    pub async fn dataset_readme(&self) -> &str {
        self.dataset_readme
            .get_or_init(|| async {
                match self.artifact.primary_dataset() {
                    Some(id) => self.fetch("dataset readme", self.provider.readme(ReadmeSource::Dataset(id))).await,
                    None => String::new(),
                }
            })
            .await
    }

    pub async fn model_readme(&self) -> &str {
        self.model_readme
            .get_or_init(|| self.fetch("model readme", self.provider.readme(ReadmeSource::Model(self.artifact.model_id()))))
            .await
    }

    /// Most recent change to the artifact: the last push to its code repository when known,
    /// otherwise the model's last modification on the hub.
    pub async fn last_modified(&self) -> Option<DateTime<Utc>> {
        if self.artifact.has_code()
            && let Some(pushed_at) = self.repo().await.pushed_at
        {
            return Some(pushed_at);
        }

        self.model().await.last_modified
    }

    /// Resolve every signal and copy them into a standalone snapshot
    pub async fn snapshot(&self) -> RawSignals {
        let (model, dataset, repo, contributors, code_readme, dataset_readme, model_readme, last_modified) = tokio::join!(
            self.model(),
            self.dataset(),
            self.repo(),
            self.contributors(),
            self.code_readme(),
            self.dataset_readme(),
            self.model_readme(),
            self.last_modified(),
        );

        RawSignals {
            license: model.license.clone(),
            files: model.files.clone(),
            code_readme: code_readme.to_string(),
            dataset_readme: dataset_readme.to_string(),
            model_readme: model_readme.to_string(),
            contributors,
            stars: repo.stars,
            forks: repo.forks,
            last_modified,
            downloads: dataset.downloads,
        }
    }

    async fn fetch<T: Default>(&self, what: &str, request: impl Future<Output = ProviderResult<T>>) -> T {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(ProviderResult::Found(value)) => value,
            Ok(ProviderResult::Unavailable(reason)) => {
                log::debug!(target: LOG_TARGET, "No {what} for '{}': {reason}", self.artifact);
                T::default()
            }
            Ok(ProviderResult::Error(e)) => {
                log::warn!(target: LOG_TARGET, "Could not fetch {what} for '{}': {e:#}", self.artifact);
                T::default()
            }
            Err(_) => {
                log::warn!(
                    target: LOG_TARGET,
                    "Timed out after {}s fetching {what} for '{}'",
                    self.timeout.as_secs(),
                    self.artifact
                );
                T::default()
            }
        }
    }
}
