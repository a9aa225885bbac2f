//! Subcommand handlers for list-cameras and config actions.

use std::path::Path;

use super::args::ConfigAction;
use super::settings::Settings;
use crate::camera::{self, CameraError};
use crate::config::{default_path, DEFAULT_CONFIG};

/// Print available cameras to stdout.
pub fn list_cameras() -> Result<(), CameraError> {
    let devices = camera::list_devices()?;
    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Use --camera <index> to select a camera.");
    }
    Ok(())
}

/// Handle a config subcommand.
pub fn handle_config_action(
    action: ConfigAction,
    settings: &Settings,
    config_path: Option<&Path>,
) -> Result<(), String> {
    let config_path = config_path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Camera: {}", settings.camera.device_index);
            println!(
                "  Resolution: {}x{} @ {} fps",
                settings.camera.resolution.width,
                settings.camera.resolution.height,
                settings.camera.fps
            );
            println!("  Mirror: {}", yes_no(settings.camera.mirror));
            println!("  Color: {}", yes_no(settings.display.color_enabled));
            println!("  Ramp: {:?}", settings.display.ramp.to_string());
            println!("  Snapshot dir: {}", settings.snapshot_dir.display());
            println!(
                "  Log: {} ({})",
                settings.log_file.display(),
                settings.log_level
            );
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'ascii-cam config show' to view current settings.",
                    config_path.display()
                ));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
