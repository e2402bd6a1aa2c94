//! Shared application settings (collection path, pipeline configuration).
//!
//! The settings file is `~/.config/meeple-shelf/settings.toml`:
//!
//! ```toml
//! [library]
//! collection = "/home/me/bgg/collection.csv"
//!
//! [pipeline]
//! ratings = true
//! tag_source = "rating"
//! ```
//!
//! Every key is optional. A missing file means defaults throughout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::SettingsError;

/// Collection file used when neither the command line nor the settings name one.
pub const DEFAULT_COLLECTION: &str = "collection.csv";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    pub collection: Option<PathBuf>,
}

/// Canonical path to the settings file: `~/.config/meeple-shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("meeple-shelf").join("settings.toml")
}

/// Load settings from the canonical location.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Resolve the collection path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `library.collection` in the settings
/// 3. `collection.csv` in the current directory
pub fn resolve_collection_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override
        .or_else(|| settings.library.collection.clone())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COLLECTION))
}

/// The settings file pretty-printed, for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
