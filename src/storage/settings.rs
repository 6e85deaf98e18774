//! Settings storage
//!
//! Manages persistence of user preferences.

use crate::storage::{get_data_dir, StorageError};
use crate::store::SortOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI language: "en" or "fr"
    #[serde(default = "default_language")]
    pub language: String,
    /// Sort order selected when the app starts
    #[serde(default)]
    pub default_sort: SortOrder,
    /// Write the list even when it was cleared to empty.
    /// When false a cleared list comes back after a restart.
    #[serde(default = "default_persist_cleared_list")]
    pub persist_cleared_list: bool,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_persist_cleared_list() -> bool {
    true
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            default_sort: SortOrder::Insertion,
            persist_cleared_list: default_persist_cleared_list(),
            theme: default_theme(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    pub fn validate(&mut self) {
        if self.language != "en" && self.language != "fr" {
            self.language = default_language();
        }

        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }
    }

    pub fn is_en(&self) -> bool {
        self.language == "en"
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            tracing::warn!("Failed to locate settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load settings from a specific file, falling back to defaults
pub fn load_settings_from(path: &Path) -> AppSettings {
    match load_settings_internal(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
fn load_settings_internal(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

/// Save settings to a specific file
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, "en");
        assert_eq!(settings.default_sort, SortOrder::Insertion);
        assert!(settings.persist_cleared_list);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.language = "de".to_string();
        settings.validate();
        assert_eq!(settings.language, "en");

        settings.theme = "invalid".to_string();
        settings.validate();
        assert_eq!(settings.theme, "dark");

        settings.language = "fr".to_string();
        settings.theme = "light".to_string();
        settings.validate();
        assert_eq!(settings.language, "fr");
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"language": "fr"}"#).unwrap();
        assert_eq!(settings.language, "fr");
        assert!(settings.persist_cleared_list);
        assert_eq!(settings.default_sort, SortOrder::Insertion);
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.default_sort = SortOrder::Packed;
        settings.persist_cleared_list = false;
        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_corrupted_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings_from(&path), AppSettings::default());
        assert_eq!(
            load_settings_from(&dir.path().join("missing.json")),
            AppSettings::default()
        );
    }
}
