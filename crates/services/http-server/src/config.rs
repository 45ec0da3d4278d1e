//! Configuration for the EV metadata server
//!
//! Configuration can be loaded from a TOML file and/or environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use evmeta_core::source::{default_search_paths, PARQUET_PATH_ENV};
use evmeta_core::DatasetLocator;

/// Main configuration for the EV metadata server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset location
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP API port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Explicit Parquet path; skips the search when set
    #[serde(default)]
    pub parquet_path: Option<PathBuf>,

    /// Locations checked in order when no explicit path is set
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            parquet_path: None,
            search_paths: default_search_paths(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration from file if it exists, otherwise from environment.
    ///
    /// Environment variables override values read from the file.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with overrides looked up through `var`
    pub fn load_with<P, F>(path: Option<P>, var: F) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(p) if p.as_ref().exists() => Self::from_file(p)?,
            Some(p) => {
                tracing::warn!(
                    path = %p.as_ref().display(),
                    "Config file not found, using environment"
                );
                Config::default()
            }
            None => Config::default(),
        };
        config.apply_overrides(var);
        Ok(config)
    }

    /// Apply `EV_*` overrides using `var` to look variables up
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server
        if let Some(host) = var("EV_HTTP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("EV_HTTP_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid EV_HTTP_PORT"),
            }
        }

        // Dataset
        if let Some(path) = var(PARQUET_PATH_ENV).filter(|p| !p.is_empty()) {
            self.dataset.parquet_path = Some(PathBuf::from(path));
        }
        if let Some(paths) = var("EV_SEARCH_PATHS") {
            self.dataset.search_paths = paths
                .split(':')
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect();
        }
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Dataset locator for the configured paths
    pub fn locator(&self) -> DatasetLocator {
        DatasetLocator::new(self.dataset.search_paths.clone())
            .with_override(self.dataset.parquet_path.clone())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
