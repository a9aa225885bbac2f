//! File logging.
//!
//! The terminal belongs to the TUI, so log records go to a file instead of
//! stderr.

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "ascii-cam.log";

/// Parse a level name (`off`, `error`, ..., `trace`), case-insensitive.
pub fn parse_level(s: &str) -> Option<LevelFilter> {
    s.parse().ok()
}

/// Start logging to `path`. Failures are reported and otherwise ignored.
pub fn init(path: &Path, level: LevelFilter) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(level, log_config, log_file);
        }
        Err(e) => {
            eprintln!("Warning: cannot open log file '{}': {}", path.display(), e);
        }
    }
}
