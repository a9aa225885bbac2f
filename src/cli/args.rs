//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Live camera feed rendered as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-cam")]
#[command(
    version,
    about = "Live camera feed rendered as ASCII art",
    long_about = "Live camera feed rendered as ASCII art.\n\n\
        Keys: q/Esc/Ctrl+C quit, c toggle color, s screenshot, +/- adjust brightness"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Mirror camera horizontally
    #[arg(long)]
    pub mirror: bool,

    /// Start with per-glyph color enabled
    #[arg(long)]
    pub color: bool,

    /// Glyph ramp, darkest to brightest (e.g. "  .:-=+*#%@")
    #[arg(long)]
    pub ramp: Option<String>,

    /// Directory for screenshot files
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<String>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Create default config file
    Init,
}
