use super::RepoSpec;
use crate::Result;
use core::fmt::{Display, Formatter, Result as FmtResult};
use ohno::{EnrichableExt, IntoAppError, bail};
use std::sync::Arc;
use url::Url;

/// Path segments that mark the end of a hub repository id (`tree/main`, `blob/main/...`, etc.)
const HUB_REVISION_SEGMENTS: &[&str] = &["tree", "blob", "resolve", "raw"];

/// The resolved identity of one evaluated artifact: a model plus its optional code repository and datasets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactRef {
    model_id: Arc<str>,
    code: Option<RepoSpec>,
    dataset_ids: Vec<Arc<str>>,
}

impl ArtifactRef {
    /// Create an artifact reference from already-resolved identifiers.
    ///
    /// Dataset identifiers keep their order; a repeated identifier is rejected.
    pub fn new(model_id: impl AsRef<str>, code: Option<RepoSpec>, dataset_ids: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Self> {
        let model_id = model_id.as_ref().trim_matches('/');
        if model_id.is_empty() {
            bail!("model identifier must not be empty");
        }

        let mut ids: Vec<Arc<str>> = Vec::new();
        for id in dataset_ids {
            let id = id.as_ref();
            if ids.iter().any(|existing| existing.as_ref() == id) {
                bail!("dataset '{id}' is listed more than once for model '{model_id}'");
            }
            ids.push(Arc::from(id));
        }

        Ok(Self {
            model_id: Arc::from(model_id),
            code,
            dataset_ids: ids,
        })
    }

    /// Resolve the three URLs of an input line into an artifact reference.
    ///
    /// Empty code or dataset URLs mean the artifact has no associated code or dataset.
    pub fn from_urls(code_url: &str, dataset_url: &str, model_url: &str) -> Result<Self> {
        let model_id = hub_id(model_url, None).map_err(|e| e.enrich_with(|| format!("resolving model URL '{model_url}'")))?;

        let code = if code_url.is_empty() {
            None
        } else {
            let url = Url::parse(code_url).into_app_err_with(|| format!("invalid code URL '{code_url}'"))?;
            Some(RepoSpec::parse(&url)?)
        };

        let dataset_ids = if dataset_url.is_empty() {
            Vec::new()
        } else {
            vec![hub_id(dataset_url, Some("datasets")).map_err(|e| e.enrich_with(|| format!("resolving dataset URL '{dataset_url}'")))?]
        };

        Self::new(model_id, code, dataset_ids)
    }

    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Display name of the model: the last segment of its id
    #[must_use]
    pub fn name(&self) -> &str {
        self.model_id.rsplit('/').next().unwrap_or(&self.model_id)
    }

    #[must_use]
    pub const fn code(&self) -> Option<&RepoSpec> {
        self.code.as_ref()
    }

    #[must_use]
    pub fn dataset_ids(&self) -> &[Arc<str>] {
        &self.dataset_ids
    }

    /// The dataset whose readme and statistics feed dataset scoring
    #[must_use]
    pub fn primary_dataset(&self) -> Option<&str> {
        self.dataset_ids.first().map(AsRef::as_ref)
    }

    #[must_use]
    pub const fn has_code(&self) -> bool {
        self.code.is_some()
    }

    #[must_use]
    pub fn has_dataset(&self) -> bool {
        !self.dataset_ids.is_empty()
    }
}

impl Display for ArtifactRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.model_id)
    }
}

/// Extract a hub repository id (`owner/name` or `name`) from a hub URL.
///
/// `kind_prefix` is the leading path segment that hub URLs carry for non-model
/// repositories, such as `datasets`.
fn hub_id(url: &str, kind_prefix: Option<&str>) -> Result<String> {
    let parsed = Url::parse(url).into_app_err("invalid URL")?;
    let mut segments = parsed.path_segments().into_iter().flatten().filter(|s| !s.is_empty()).peekable();

    if let Some(prefix) = kind_prefix
        && segments.peek() == Some(&prefix)
    {
        let _ = segments.next();
    }

    let id: Vec<_> = segments.take_while(|s| !HUB_REVISION_SEGMENTS.contains(s)).take(2).collect();
    if id.is_empty() {
        bail!("no repository id in '{url}'");
    }

    Ok(id.join("/"))
}
