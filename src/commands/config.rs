use crate::Result;
use camino::Utf8Path;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "trustcard.toml";

const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seconds to wait for a single provider request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Number of artifacts evaluated concurrently
    #[serde(default = "default_max_concurrent_artifacts")]
    pub max_concurrent_artifacts: usize,

    /// Base URL of the Hugging Face Hub
    #[serde(default = "default_huggingface_url")]
    pub huggingface_url: String,

    /// Base URL of the GitHub REST API
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,
}

const fn default_request_timeout_secs() -> u64 {
    10
}

const fn default_max_concurrent_artifacts() -> usize {
    4
}

fn default_huggingface_url() -> String {
    "https://huggingface.co".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Config {
    /// Load configuration from `config_path`, else from `trustcard.toml` in the working directory, else use defaults
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path, text)
        } else {
            let path = Utf8Path::new(CONFIG_FILE_NAME);
            match fs::read_to_string(path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("No '{CONFIG_FILE_NAME}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::info!("Using configuration from '{final_path}'");
        Ok(config)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(app_err!(
                "request_timeout_secs must be between 1 and {MAX_REQUEST_TIMEOUT_SECS}, got {}",
                self.request_timeout_secs
            ));
        }

        if self.max_concurrent_artifacts == 0 {
            return Err(app_err!("max_concurrent_artifacts must be at least 1"));
        }

        let _ = Url::parse(&self.huggingface_url).into_app_err_with(|| format!("invalid huggingface_url '{}'", self.huggingface_url))?;
        let _ = Url::parse(&self.github_api_url).into_app_err_with(|| format!("invalid github_api_url '{}'", self.github_api_url))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
