//! Command-line interface definitions and helpers.
//!
//! Argument parsing, settings resolution, and subcommand handlers.

mod args;
mod commands;
mod settings;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, list_cameras};
pub use settings::{Settings, SettingsError};
