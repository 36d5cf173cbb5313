//! QueueClip - User settings module
//!
//! Manages application user configuration, persisted as JSON

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::queue::Delimiter;

/// Global settings instance
static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::default()));

/// Path of the settings file, set by `init_settings`
static SETTINGS_PATH: Lazy<RwLock<Option<PathBuf>>> = Lazy::new(|| RwLock::new(None));

/// Settings error type
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings not initialized")]
    NotInitialized,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a queue item reaches the focused application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteMode {
    /// Write the item to the clipboard and synthesize a paste chord
    Clipboard,
    /// Type the item out as synthetic keystrokes, clipboard untouched
    Type,
}

impl Default for PasteMode {
    fn default() -> Self {
        PasteMode::Clipboard
    }
}

/// Screen corner the floating indicator is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorPosition {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Default for IndicatorPosition {
    fn default() -> Self {
        IndicatorPosition::TopRight
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Active delimiter for splitting captured clipboard text
    pub delimiter: Delimiter,
    /// Wrap to the front instead of exhausting
    pub loop_enabled: bool,
    /// Global paste hotkey ("Win" is accepted as an alias for super)
    pub hotkey: String,
    /// Delivery strategy
    pub paste_mode: PasteMode,
    /// Delay before the original clipboard is restored (milliseconds)
    pub paste_delay_ms: u64,
    /// Minimum fragment count before a copy is captured into the queue
    pub min_items: usize,
    /// Whether the floating indicator is shown
    pub show_indicator: bool,
    /// Indicator screen corner
    pub indicator_position: IndicatorPosition,
    /// Launch on login
    pub auto_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Newline,
            loop_enabled: false,
            hotkey: "F9".to_string(),
            paste_mode: PasteMode::Clipboard,
            paste_delay_ms: 350,
            min_items: 2,
            show_indicator: true,
            indicator_position: IndicatorPosition::TopRight,
            auto_start: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or unreadable file yields the
    /// defaults; unknown fields are ignored and missing fields filled in,
    /// so older settings files keep loading.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Settings file is invalid, using defaults: {}", e);
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

/// Initialize settings from `<data_dir>/settings.json`.
pub fn init_settings(data_dir: &Path) {
    let path = data_dir.join("settings.json");
    let settings = Settings::load(&path);
    *SETTINGS_PATH.write() = Some(path);
    *SETTINGS.write() = settings;
    log::info!("Settings initialized");
}

/// Get current settings
pub fn get_settings() -> Settings {
    SETTINGS.read().clone()
}

/// Replace and persist the global settings.
pub fn update_settings(settings: Settings) -> Result<(), SettingsError> {
    {
        let path_guard = SETTINGS_PATH.read();
        let path = path_guard.as_ref().ok_or(SettingsError::NotInitialized)?;
        settings.save(path)?;
    }
    *SETTINGS.write() = settings;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.delimiter, Delimiter::Newline);
        assert!(!settings.loop_enabled);
        assert_eq!(settings.hotkey, "F9");
        assert_eq!(settings.paste_mode, PasteMode::Clipboard);
        assert_eq!(settings.paste_delay_ms, 350);
        assert_eq!(settings.min_items, 2);
        assert!(settings.show_indicator);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings.hotkey, "F9");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.loop_enabled = true;
        settings.delimiter = Delimiter::Custom("::".to_string());
        settings.hotkey = "Ctrl+Shift+Q".to_string();
        settings.paste_mode = PasteMode::Type;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert!(loaded.loop_enabled);
        assert_eq!(loaded.delimiter, Delimiter::Custom("::".to_string()));
        assert_eq!(loaded.hotkey, "Ctrl+Shift+Q");
        assert_eq!(loaded.paste_mode, PasteMode::Type);
    }

    #[test]
    fn invalid_json_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.hotkey, "F9");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"loop_enabled": true}"#).unwrap();
        let settings = Settings::load(&path);
        assert!(settings.loop_enabled);
        assert_eq!(settings.paste_delay_ms, 350);
        assert_eq!(settings.delimiter, Delimiter::Newline);
    }
}
