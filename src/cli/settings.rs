//! Effective settings: CLI args > config file > built-in defaults.

use simplelog::LevelFilter;
use std::path::PathBuf;
use thiserror::Error;

use super::args::Args;
use crate::ascii::{GlyphRamp, RampError};
use crate::camera::{CameraSettings, Resolution};
use crate::config::Config;
use crate::event_loop::DisplayState;
use crate::logging::{parse_level, DEFAULT_LOG_FILE};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid glyph ramp: {0}")]
    Ramp(#[from] RampError),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Everything the viewer needs to start.
#[derive(Debug, Clone)]
pub struct Settings {
    pub camera: CameraSettings,
    pub display: DisplayState,
    pub snapshot_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn resolve(args: &Args, cfg: &Config) -> Result<Self, SettingsError> {
        let defaults = CameraSettings::default();
        let camera = CameraSettings {
            device_index: args.camera.or(cfg.camera.device).unwrap_or(defaults.device_index),
            resolution: cfg
                .camera
                .resolution
                .map(|[width, height]| Resolution { width, height })
                .unwrap_or(defaults.resolution),
            fps: cfg.camera.fps.unwrap_or(defaults.fps),
            mirror: args.mirror || cfg.camera.mirror.unwrap_or(defaults.mirror),
        };

        let ramp = match args.ramp.as_deref().or(cfg.display.ramp.as_deref()) {
            Some(glyphs) => GlyphRamp::parse(glyphs)?,
            None => GlyphRamp::default(),
        };
        let display = DisplayState {
            color_enabled: args.color || cfg.display.color.unwrap_or(false),
            ramp,
        };

        let level_name = args
            .log_level
            .as_deref()
            .or(cfg.log.level.as_deref())
            .unwrap_or("info");
        let log_level =
            parse_level(level_name).ok_or_else(|| SettingsError::LogLevel(level_name.to_string()))?;

        Ok(Self {
            camera,
            display,
            snapshot_dir: args
                .snapshot_dir
                .clone()
                .or_else(|| cfg.snapshot.dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            log_file: args
                .log_file
                .clone()
                .or_else(|| cfg.log.file.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_level,
        })
    }
}
