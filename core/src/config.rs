//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for viewer settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Viewer configuration.
///
/// Every field has a default, so a partial or empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Column widths and row height
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Colors for flagged rows
    #[serde(default)]
    pub highlight: HighlightConfig,
    /// Search box settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Column layout for both lists, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Bundle list: name column (default: 280)
    #[serde(default = "default_name_width")]
    pub bundle_name_width: f32,
    /// Bundle list: ref count column (default: 100)
    #[serde(default = "default_ref_count_width")]
    pub bundle_ref_count_width: f32,
    /// Bundle list: status column (default: 120)
    #[serde(default = "default_status_width")]
    pub bundle_status_width: f32,
    /// Usage list: asset path column (default: 280)
    #[serde(default = "default_name_width")]
    pub asset_path_width: f32,
    /// Usage list: spawn scene column (default: 150)
    #[serde(default = "default_spawn_width")]
    pub spawn_scene_width: f32,
    /// Usage list: spawn time column (default: 150)
    #[serde(default = "default_spawn_width")]
    pub spawn_time_width: f32,
    /// Usage list: ref count column (default: 100)
    #[serde(default = "default_ref_count_width")]
    pub provider_ref_count_width: f32,
    /// Usage list: status column (default: 120)
    #[serde(default = "default_status_width")]
    pub provider_status_width: f32,
    /// Height of one list row (default: 18)
    #[serde(default = "default_row_height")]
    pub row_height: f32,
}

/// Highlight colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Status text color for failed bundles, RGB (default: yellow)
    #[serde(default = "default_fail_color")]
    pub fail_color: [u8; 3],
}

/// Search box settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Keyword applied when a report is first shown (default: empty)
    #[serde(default)]
    pub initial_keyword: String,
}

fn default_name_width() -> f32 {
    280.0
}
fn default_ref_count_width() -> f32 {
    100.0
}
fn default_status_width() -> f32 {
    120.0
}
fn default_spawn_width() -> f32 {
    150.0
}
fn default_row_height() -> f32 {
    18.0
}
fn default_fail_color() -> [u8; 3] {
    [255, 235, 4]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bundle_name_width: default_name_width(),
            bundle_ref_count_width: default_ref_count_width(),
            bundle_status_width: default_status_width(),
            asset_path_width: default_name_width(),
            spawn_scene_width: default_spawn_width(),
            spawn_time_width: default_spawn_width(),
            provider_ref_count_width: default_ref_count_width(),
            provider_status_width: default_status_width(),
            row_height: default_row_height(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            fail_color: default_fail_color(),
        }
    }
}

/// Error type for reading and writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Bundlescope\config`
/// On macOS: `~/Library/Application Support/io.bundlescope.Bundlescope`
/// On Linux: `~/.config/Bundlescope`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.bundlescope", "", "Bundlescope")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Full path of `config.toml`, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// See [`load_or_init`]. Returns defaults when no config directory exists.
pub fn load() -> Config {
    config_path()
        .map(|path| load_or_init(&path))
        .unwrap_or_default()
}

/// Loads the configuration at `path`, writing the defaults there on first
/// launch so the file can be edited.
///
/// A file that exists but cannot be read or parsed is reported once as a
/// warning and defaults are used. Failing to write the defaults is also only
/// a warning.
pub fn load_or_init(path: &Path) -> Config {
    if !path.exists() {
        let config = Config::default();
        match save_to(&config, path) {
            Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
            Err(e) => tracing::warn!("Could not write default config: {}", e),
        }
        return config;
    }

    match load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to an explicit path.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_list_columns() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.bundle_name_width, 280.0);
        assert_eq!(layout.bundle_ref_count_width, 100.0);
        assert_eq!(layout.bundle_status_width, 120.0);
        assert_eq!(layout.asset_path_width, 280.0);
        assert_eq!(layout.spawn_scene_width, 150.0);
        assert_eq!(layout.spawn_time_width, 150.0);
        assert_eq!(layout.provider_ref_count_width, 100.0);
        assert_eq!(layout.provider_status_width, 120.0);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [layout]
            bundle_name_width = 400.0

            [search]
            initial_keyword = "ui_"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.bundle_name_width, 400.0);
        assert_eq!(config.layout.bundle_status_width, 120.0);
        assert_eq!(config.highlight.fail_color, [255, 235, 4]);
        assert_eq!(config.search.initial_keyword, "ui_");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.highlight.fail_color = [255, 0, 0];
        config.layout.row_height = 22.0;

        save_to(&config, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_first_launch_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bundlescope").join("config.toml");

        assert_eq!(load_or_init(&path), Config::default());
        assert!(path.exists());
        assert_eq!(load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_or_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let content = "[search]\ninitial_keyword = \"fx_\"\n";
        std::fs::write(&path, content).unwrap();

        let config = load_or_init(&path);

        assert_eq!(config.search.initial_keyword, "fx_");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("[layout]"));
    }

    #[test]
    fn test_load_or_init_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout\n").unwrap();

        assert_eq!(load_or_init(&path), Config::default());
        // The broken file is left for the user to fix
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[layout\n");
    }

    #[test]
    fn test_load_from_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let content = "[layout]\nrow_height = \"tall\"\n";
        std::fs::write(&path, content).unwrap();

        assert!(matches!(load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        match load_from(&path) {
            Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
