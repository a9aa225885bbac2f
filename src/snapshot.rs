//! Plain-text snapshots of the last frame.
//!
//! One line per frame row, one glyph per column, no header. Files are named
//! `screenshot-<uuid>.txt`.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ascii::GlyphRamp;
use crate::camera::Frame;

/// Errors that can occur while writing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No frame has been received yet
    #[error("empty input: no frame captured yet")]
    EmptyInput,
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render a frame as text with the given ramp.
pub fn render_text(frame: &Frame, ramp: &GlyphRamp) -> String {
    let mut out = String::with_capacity((frame.width as usize + 1) * frame.height as usize);
    for row in frame.rows() {
        for px in row.chunks_exact(frame.bytes_per_pixel()) {
            out.push(ramp.glyph_for_rgb8([px[0], px[1], px[2]]));
        }
        out.push('\n');
    }
    out
}

/// A fresh, collision-resistant snapshot file name.
pub fn snapshot_file_name() -> String {
    format!("screenshot-{}.txt", uuid::Uuid::new_v4())
}

/// Write `frame` as text into `dir` and return the file path.
///
/// Fails with [`SnapshotError::EmptyInput`] before touching the filesystem
/// when there is no frame.
pub fn write_snapshot(
    frame: Option<&Frame>,
    ramp: &GlyphRamp,
    dir: &Path,
) -> Result<PathBuf, SnapshotError> {
    let frame = frame.ok_or(SnapshotError::EmptyInput)?;
    let path = dir.join(snapshot_file_name());
    let text = render_text(frame, ramp);

    let io_err = |source: io::Error| SnapshotError::Io {
        path: path.clone(),
        source,
    };

    let mut file = File::create(&path).map_err(io_err)?;
    file.write_all(text.as_bytes()).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;

    log::info!(
        "Wrote {}x{} snapshot to {}",
        frame.width,
        frame.height,
        path.display()
    );
    Ok(path)
}
