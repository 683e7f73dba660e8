use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::NuvioError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub player: PlayerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub log_filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Speed used when the boost gesture has never been configured.
    pub default_boosted_speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File name of the key-value settings store inside the data dir.
    pub settings_file: String,
}

impl AppConfig {
    /// Load config: user file if it exists, otherwise built-in defaults.
    pub fn load() -> Result<Self, NuvioError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, NuvioError> {
        if !path.exists() {
            return Self::from_toml(DEFAULT_CONFIG);
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| NuvioError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(s: &str) -> Result<Self, NuvioError> {
        toml::from_str(s).map_err(|e| NuvioError::Config(e.to_string()))
    }

    /// Write this config to `path`, refusing to clobber an existing file
    /// unless `overwrite` is set.
    pub fn write_to(&self, path: &Path, overwrite: bool) -> Result<(), NuvioError> {
        if path.exists() && !overwrite {
            return Err(NuvioError::Config(format!(
                "{} already exists",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| NuvioError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "wrote config");
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Path to the settings store file.
    pub fn settings_path(&self) -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join(&self.storage.settings_file))
            .unwrap_or_else(|| PathBuf::from(&self.storage.settings_file))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "nuvio")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
