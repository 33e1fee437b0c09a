//! Wire shapes of the hub and hosting API responses, reduced to the fields we read.

use crate::facts::provider::UNKNOWN_LICENSE;
use crate::facts::{DatasetInfo, FileEntry, ModelInfo, RepoInfo};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /api/models/{id}?blobs=true`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubModel {
    pub card_data: Option<CardData>,
    pub siblings: Vec<Sibling>,
    pub tags: Vec<String>,
    pub downloads: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CardData {
    pub license: Option<LicenseField>,
    pub license_name: Option<String>,
}

/// Model cards declare either one license or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LicenseField {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
pub struct Sibling {
    pub rfilename: String,
    #[serde(default)]
    pub size: Option<u64>,
}

impl HubModel {
    fn license(&self) -> String {
        let card = self.card_data.as_ref();

        if let Some(name) = card.and_then(|c| c.license_name.as_deref())
            && !name.trim().is_empty()
        {
            return name.trim().to_string();
        }

        let declared = match card.and_then(|c| c.license.as_ref()) {
            Some(LicenseField::One(s)) => s.trim().to_string(),
            Some(LicenseField::Many(list)) => list.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(", "),
            None => String::new(),
        };

        if !declared.is_empty() {
            return declared;
        }

        self.tags
            .iter()
            .find_map(|tag| tag.strip_prefix("license:"))
            .filter(|id| !id.is_empty())
            .map_or_else(|| UNKNOWN_LICENSE.to_string(), ToString::to_string)
    }
}

impl From<HubModel> for ModelInfo {
    fn from(model: HubModel) -> Self {
        let license = model.license();
        Self {
            license,
            files: model
                .siblings
                .into_iter()
                .map(|s| FileEntry::new(s.rfilename, s.size.unwrap_or_default()))
                .collect(),
            downloads: model.downloads,
            last_modified: model.last_modified,
        }
    }
}

/// `GET /api/datasets/{id}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubDataset {
    pub downloads: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

impl From<HubDataset> for DatasetInfo {
    fn from(dataset: HubDataset) -> Self {
        Self {
            downloads: dataset.downloads,
            last_modified: dataset.last_modified,
        }
    }
}

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GithubRepo {
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl From<GithubRepo> for RepoInfo {
    fn from(repo: GithubRepo) -> Self {
        Self {
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            pushed_at: repo.pushed_at,
        }
    }
}

/// `GET /repos/{owner}/{repo}/contributors`; only the number of entries matters
pub type Contributors = Vec<serde::de::IgnoredAny>;
