//! Application settings, read from a RON file and overridden from the environment.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_engine::{CacheSettings, FetchSettings, DEFAULT_BASE_URL};
use catalog_logging::catalog_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.ron";

const ENV_API_KEY: &str = "TMDB_API_KEY";
const ENV_BASE_URL: &str = "TMDB_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub language: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub cache_max_age_secs: u64,
    pub cache_capacity: usize,
    pub log: LogDestination,
    /// Where the last visited route is remembered between runs.
    pub state_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            language: "en-US".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            cache_max_age_secs: 300,
            cache_capacity: 256,
            log: LogDestination::File,
            state_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Loads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                catalog_info!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Applies `TMDB_API_KEY` and `TMDB_BASE_URL` as looked up by `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(ENV_API_KEY).filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    pub fn with_env(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone(),
            language: self.language.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            max_age: Duration::from_secs(self.cache_max_age_secs),
            capacity: self.cache_capacity,
        }
    }
}
