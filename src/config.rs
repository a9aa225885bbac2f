//! Configuration file handling for ascii-cam.
//!
//! Loads configuration from the platform config dir
//! (e.g. `~/.config/ascii-cam/config.toml`) or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file structure. Every field is optional; CLI flags win.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CameraConfig {
    pub device: Option<u32>,
    pub mirror: Option<bool>,
    /// Requested capture resolution as `[width, height]`
    pub resolution: Option<[u32; 2]>,
    pub fps: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Start with color enabled
    pub color: Option<bool>,
    /// Glyphs ordered darkest to brightest
    pub ramp: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SnapshotConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl Config {
    /// Load from the default path, falling back to defaults if it is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load from a path the user named explicitly; the file must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::load_from(path)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "ascii-cam", "ascii-cam")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-cam/config.toml")
        })
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-cam configuration

[camera]
# Camera device index (see `ascii-cam list-cameras`)
device = 0
# Mirror horizontally (selfie mode)
mirror = false
# Requested capture resolution; frames are resized to the terminal anyway
resolution = [640, 480]
fps = 30

[display]
# Start with per-glyph color
color = false
# Glyphs from darkest to brightest. Leading spaces are what '+' removes.
ramp = "    .,:;+*?%S#@"

[snapshot]
# Directory for screenshot-<id>.txt files
dir = "."

[log]
file = "ascii-cam.log"
# off, error, warn, info, debug, trace
level = "info"
"#;
