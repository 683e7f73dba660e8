//! Key-value persistence for player preferences.
//!
//! The player keeps its speed-boost preference as one JSON value under a
//! fixed namespaced key. Stores are deliberately dumb string maps so the
//! same settings code runs against a file on desktop or an in-memory map
//! in tests.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::NuvioError;

/// Key the player settings are stored under.
pub const PLAYER_SETTINGS_KEY: &str = "nuvio.player.speed_boost";

/// Speeds the boost gesture may be set to.
pub const BOOSTED_SPEED_RANGE: RangeInclusive<f32> = 0.25..=4.0;

const DEFAULT_BOOSTED_SPEED: f32 = 2.0;

/// A flat string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, NuvioError>;
    fn set(&self, key: &str, value: &str) -> Result<(), NuvioError>;
}

/// Process-local store, used by tests and when no data dir is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, NuvioError> {
        let values = self
            .values
            .lock()
            .map_err(|e| NuvioError::Settings(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), NuvioError> {
        self.values
            .lock()
            .map_err(|e| NuvioError::Settings(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All keys kept in one pretty-printed JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, NuvioError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, NuvioError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), NuvioError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        tracing::debug!(key, path = %self.path.display(), "saved setting");
        Ok(())
    }
}

/// Hold-to-speed-up preferences of the video player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSettings {
    pub speed_boost_enabled: bool,
    pub boosted_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self::with_default_speed(DEFAULT_BOOSTED_SPEED)
    }
}

impl PlayerSettings {
    /// Defaults with a configured boost speed (falls back if out of range).
    pub fn with_default_speed(speed: f32) -> Self {
        let boosted_speed = if BOOSTED_SPEED_RANGE.contains(&speed) {
            speed
        } else {
            DEFAULT_BOOSTED_SPEED
        };
        Self {
            speed_boost_enabled: false,
            boosted_speed,
        }
    }

    /// Read settings, degrading to `defaults` on missing or bad data.
    pub fn load(store: &dyn KeyValueStore, defaults: PlayerSettings) -> Self {
        let raw = match store.get(PLAYER_SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return defaults,
            Err(e) => {
                tracing::warn!("Failed to read player settings: {e}");
                return defaults;
            }
        };
        match serde_json::from_str::<PlayerSettings>(&raw) {
            Ok(mut settings) => {
                if !BOOSTED_SPEED_RANGE.contains(&settings.boosted_speed) {
                    tracing::warn!(
                        speed = settings.boosted_speed,
                        "stored boost speed out of range, using default"
                    );
                    settings.boosted_speed = defaults.boosted_speed;
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse player settings: {e}");
                defaults
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), NuvioError> {
        store.set(PLAYER_SETTINGS_KEY, &serde_json::to_string(self)?)
    }

    pub fn set_boosted_speed(&mut self, speed: f32) -> Result<(), NuvioError> {
        if !BOOSTED_SPEED_RANGE.contains(&speed) {
            return Err(NuvioError::Settings(format!(
                "boost speed {speed} outside {}..={}",
                BOOSTED_SPEED_RANGE.start(),
                BOOSTED_SPEED_RANGE.end()
            )));
        }
        self.boosted_speed = speed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(
            PlayerSettings::load(&store, PlayerSettings::default()),
            PlayerSettings::default()
        );
    }

    #[test]
    fn test_roundtrip_memory() {
        let store = MemoryStore::new();
        let mut settings = PlayerSettings::default();
        settings.speed_boost_enabled = true;
        settings.set_boosted_speed(3.0).unwrap();
        settings.save(&store).unwrap();

        let loaded = PlayerSettings::load(&store, PlayerSettings::default());
        assert_eq!(loaded, settings);
        let raw = store.get(PLAYER_SETTINGS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"speedBoostEnabled\":true"));
    }

    #[test]
    fn test_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("settings.json"));
        store.set("other.key", "kept").unwrap();

        let settings = PlayerSettings {
            speed_boost_enabled: true,
            boosted_speed: 1.5,
        };
        settings.save(&store).unwrap();

        let reopened = JsonFileStore::new(store.path());
        assert_eq!(
            PlayerSettings::load(&reopened, PlayerSettings::default()),
            settings
        );
        assert_eq!(reopened.get("other.key").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_corrupt_value_uses_defaults() {
        let store = MemoryStore::new();
        store.set(PLAYER_SETTINGS_KEY, "{not json").unwrap();
        let defaults = PlayerSettings::with_default_speed(1.75);
        assert_eq!(PlayerSettings::load(&store, defaults), defaults);
    }

    #[test]
    fn test_out_of_range_stored_speed_is_replaced() {
        let store = MemoryStore::new();
        store
            .set(
                PLAYER_SETTINGS_KEY,
                r#"{"speedBoostEnabled":true,"boostedSpeed":16.0}"#,
            )
            .unwrap();
        let loaded = PlayerSettings::load(&store, PlayerSettings::default());
        assert!(loaded.speed_boost_enabled);
        assert_eq!(loaded.boosted_speed, 2.0);
    }

    #[test]
    fn test_set_boosted_speed_rejects_out_of_range() {
        let mut settings = PlayerSettings::default();
        assert!(settings.set_boosted_speed(0.1).is_err());
        assert!(settings.set_boosted_speed(4.5).is_err());
        assert_eq!(settings.boosted_speed, 2.0);
        settings.set_boosted_speed(4.0).unwrap();
        assert_eq!(settings.boosted_speed, 4.0);
    }

    #[test]
    fn test_with_default_speed_clamps_config() {
        assert_eq!(PlayerSettings::with_default_speed(9.0).boosted_speed, 2.0);
        assert_eq!(PlayerSettings::with_default_speed(1.25).boosted_speed, 1.25);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("x"), Err(NuvioError::Json(_))));
        // Loading still degrades to defaults.
        assert_eq!(
            PlayerSettings::load(&store, PlayerSettings::default()),
            PlayerSettings::default()
        );
    }
}
