use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded from `config.toml`. Every section falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub picker: PickerSettings,
    #[serde(default)]
    pub drop_zone: DropZoneSettings,
}

/// Native window options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Options for the native file dialog behind the Browse button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSettings {
    #[serde(default = "default_dialog_title")]
    pub dialog_title: String,
    /// Folder the dialog opens in; the OS decides when unset.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            dialog_title: default_dialog_title(),
            start_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropZoneSettings {
    #[serde(default = "default_drop_hint")]
    pub hint: String,
    #[serde(default = "default_drop_zone_height")]
    pub height: f32,
}

impl Default for DropZoneSettings {
    fn default() -> Self {
        Self {
            hint: default_drop_hint(),
            height: default_drop_zone_height(),
        }
    }
}

fn default_window_title() -> String {
    "Docpick".into()
}

fn default_window_width() -> f32 {
    560.0
}

fn default_window_height() -> f32 {
    380.0
}

fn default_dialog_title() -> String {
    "Choose a file".into()
}

fn default_drop_hint() -> String {
    "Drag a file here or click to browse".into()
}

fn default_drop_zone_height() -> f32 {
    180.0
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, returning defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load configuration from a specific file, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let cfg = load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.window.title, "Docpick");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[drop_zone]\nhint = \"Drop a .docx here\"\n\n[picker]\nstart_dir = \"/tmp/docs\"\n",
        )
        .unwrap();

        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.drop_zone.hint, "Drop a .docx here");
        assert_eq!(cfg.drop_zone.height, 180.0);
        assert_eq!(cfg.picker.start_dir, Some(PathBuf::from("/tmp/docs")));
        assert_eq!(cfg.picker.dialog_title, "Choose a file");
        assert_eq!(cfg.window, WindowSettings::default());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[window\ntitle = ").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let mut cfg = AppConfig::default();
        cfg.window.title = "Upload".into();
        cfg.window.width = 800.0;

        save_to_path(&cfg, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), cfg);
    }
}
