use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::api::DEFAULT_BASE_URL;
use crate::core::history::STORAGE_FILE;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub data: DataConfig,
}

/// Upstream API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the upstream REST API.
    pub base_url: String,
    /// Language tag for localized display names.
    pub language: String,
    /// How many entries the fixed catalog spans.
    pub catalog_limit: u32,
}

/// Data directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            data: DataConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "ja".to_string(),
            catalog_limit: 151,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/kantodex/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("kantodex"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Location of the persisted comparison-history blob.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join(STORAGE_FILE)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("kantodex").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
