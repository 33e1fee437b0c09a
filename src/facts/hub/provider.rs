use super::api::{Contributors, GithubRepo, HubDataset, HubModel};
use super::client::Client;
use crate::Result;
use crate::facts::{DataProvider, DatasetInfo, ModelInfo, ProviderResult, ReadmeSource, RepoInfo, RepoSpec};
use core::time::Duration;

const GITHUB_HOST: &str = "github.com";
const GITHUB_RAW_ACCEPT: &str = "application/vnd.github.raw+json";

/// Data provider talking to the Hugging Face Hub for models and datasets, and to GitHub for code
#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
    huggingface_url: String,
    github_api_url: String,
}

impl Provider {
    pub fn new(huggingface_url: &str, github_api_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::new(timeout)?,
            huggingface_url: huggingface_url.trim_end_matches('/').to_string(),
            github_api_url: github_api_url.trim_end_matches('/').to_string(),
        })
    }

    fn github_repo_url(&self, repo: &RepoSpec, suffix: &str) -> Option<String> {
        repo.host()
            .eq_ignore_ascii_case(GITHUB_HOST)
            .then(|| format!("{}/repos/{}{suffix}", self.github_api_url, repo.slug()))
    }
}

fn unsupported_host<T>(repo: &RepoSpec) -> ProviderResult<T> {
    ProviderResult::unavailable(format!("unsupported hosting provider: {}", repo.host()))
}

impl DataProvider for Provider {
    async fn model_info(&self, model_id: &str) -> ProviderResult<ModelInfo> {
        let url = format!("{}/api/models/{model_id}?blobs=true", self.huggingface_url);
        self.client
            .get_json::<HubModel>(&url)
            .await
            .into_provider_result(&format!("model '{model_id}'"))
            .map(ModelInfo::from)
    }

    async fn dataset_info(&self, dataset_id: &str) -> ProviderResult<DatasetInfo> {
        let url = format!("{}/api/datasets/{dataset_id}", self.huggingface_url);
        self.client
            .get_json::<HubDataset>(&url)
            .await
            .into_provider_result(&format!("dataset '{dataset_id}'"))
            .map(DatasetInfo::from)
    }

    async fn repo_info(&self, repo: &RepoSpec) -> ProviderResult<RepoInfo> {
        let Some(url) = self.github_repo_url(repo, "") else {
            return unsupported_host(repo);
        };

        self.client
            .get_json::<GithubRepo>(&url)
            .await
            .into_provider_result(&format!("repository '{repo}'"))
            .map(RepoInfo::from)
    }

    async fn contributor_count(&self, repo: &RepoSpec) -> ProviderResult<u64> {
        let Some(url) = self.github_repo_url(repo, "/contributors?per_page=100&anon=1") else {
            return unsupported_host(repo);
        };

        self.client
            .get_json::<Contributors>(&url)
            .await
            .into_provider_result(&format!("contributors of '{repo}'"))
            .map(|list| list.len() as u64)
    }

    async fn readme(&self, source: ReadmeSource<'_>) -> ProviderResult<String> {
        match source {
            ReadmeSource::Model(id) => {
                let url = format!("{}/{id}/raw/main/README.md", self.huggingface_url);
                self.client.get_text(&url, None).await.into_provider_result(&format!("readme of model '{id}'"))
            }
            ReadmeSource::Dataset(id) => {
                let url = format!("{}/datasets/{id}/raw/main/README.md", self.huggingface_url);
                self.client.get_text(&url, None).await.into_provider_result(&format!("readme of dataset '{id}'"))
            }
            ReadmeSource::Code(repo) => {
                let Some(url) = self.github_repo_url(repo, "/readme") else {
                    return unsupported_host(repo);
                };
                self.client
                    .get_text(&url, Some(GITHUB_RAW_ACCEPT))
                    .await
                    .into_provider_result(&format!("readme of '{repo}'"))
            }
        }
    }
}
