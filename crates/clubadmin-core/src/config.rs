//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! the backend base URL, request timeout, where the credential lives, and
//! the last identifier used to sign in.
//!
//! Configuration is stored at `~/.config/clubadmin/config.json`.
//! `CLUBADMIN_BASE_URL` and `CLUBADMIN_STORAGE` override the file.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::{FileTokenStore, KeyringTokenStore, TokenStore};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "clubadmin";

/// Config file name
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_WATCH_INTERVAL_SECS: u64 = 5;

pub const ENV_BASE_URL: &str = "CLUBADMIN_BASE_URL";
pub const ENV_STORAGE: &str = "CLUBADMIN_STORAGE";

/// Where the credential is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Keyring,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "keyring" | "keychain" => Ok(StorageBackend::Keyring),
            other => Err(anyhow::anyhow!("Unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub storage: StorageBackend,
    pub session_dir: Option<PathBuf>,
    pub watch_interval_secs: u64,
    pub last_identifier: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            storage: StorageBackend::File,
            session_dir: None,
            watch_interval_secs: DEFAULT_WATCH_INTERVAL_SECS,
            last_identifier: None,
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_STORAGE).ok(),
        );
    }

    fn apply_overrides(&mut self, base_url: Option<String>, storage: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = storage {
            match raw.parse() {
                Ok(backend) => self.storage = backend,
                Err(e) => warn!(error = %e, "Ignoring {}", ENV_STORAGE),
            }
        }
    }

    /// Directory holding the token file
    pub fn session_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.session_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Build the credential store this configuration selects
    pub fn token_store(&self) -> Result<Arc<dyn TokenStore>> {
        Ok(match self.storage {
            StorageBackend::File => Arc::new(FileTokenStore::new(self.session_dir()?)),
            StorageBackend::Keyring => Arc::new(KeyringTokenStore::new()?),
        })
    }
}
