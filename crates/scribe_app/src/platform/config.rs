//! Runtime configuration: `scribe.ron` (or `$SCRIBE_CONFIG`) plus environment overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use scribe_engine::{ApiError, ClientSettings};
use serde::Deserialize;
use thiserror::Error;

const CONFIG_PATH_VAR: &str = "SCRIBE_CONFIG";
const BASE_URL_VAR: &str = "SCRIBE_API_BASE_URL";
const LOG_LEVEL_VAR: &str = "SCRIBE_LOG_LEVEL";
const DEFAULT_CONFIG_FILE: &str = "scribe.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api_base_url: String,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: ClientSettings::DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            log_file: PathBuf::from("scribe.log"),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid api_base_url {url:?}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: ApiError,
    },
    #[error("invalid log_level {0:?}")]
    LogLevel(String),
}

impl AppConfig {
    /// Loads from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads using `env` to look up variables. A missing config file yields defaults.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = env(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = Self::from_file(&path)?;

        if let Some(url) = env(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.api_base_url = url;
        }
        if let Some(level) = env(LOG_LEVEL_VAR).filter(|level| !level.trim().is_empty()) {
            config.log_level = level;
        }

        config.client_settings()?;
        config.log_level()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn client_settings(&self) -> Result<ClientSettings, ConfigError> {
        let mut settings =
            ClientSettings::new(&self.api_base_url).map_err(|source| ConfigError::BaseUrl {
                url: self.api_base_url.clone(),
                source,
            })?;
        settings.connect_timeout = self.connect_timeout_secs.map(Duration::from_secs);
        settings.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        Ok(settings)
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .trim()
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
