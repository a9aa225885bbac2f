//! Frame producer thread: capture, fit to the terminal grid, publish.

use crossbeam_channel::Sender;
use std::io;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::frame_utils::resize_linear;
use super::source::{CameraSource, FrameSource};
use super::types::{CameraError, CameraSettings, Frame};
use crate::terminal::STATUS_ROWS;

/// Pause after a failed read so a wedged device doesn't spin a core.
const READ_RETRY_DELAY: Duration = Duration::from_millis(5);

/// Frame dimensions for a terminal of `cols` x `rows` cells.
///
/// One pixel per cell, with the status rows left free. `None` if nothing
/// would be visible.
pub fn target_dimensions(cols: u16, rows: u16) -> Option<(u32, u32)> {
    let height = rows.saturating_sub(STATUS_ROWS);
    if cols == 0 || height == 0 {
        return None;
    }
    Some((cols as u32, height as u32))
}

/// Run the producer loop until the receiving side goes away.
///
/// Each iteration reads one frame, queries the grid size, resizes, and
/// sends. Any per-frame failure drops that frame and moves on to the next
/// capture. The send blocks until the render loop takes the frame.
pub fn run_frame_producer<S, G>(mut source: S, mut grid_size: G, tx: Sender<Frame>)
where
    S: FrameSource,
    G: FnMut() -> io::Result<(u16, u16)>,
{
    loop {
        let raw = match source.read_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::debug!("Dropping frame: {}", e);
                thread::sleep(READ_RETRY_DELAY);
                continue;
            }
        };

        let (cols, rows) = match grid_size() {
            Ok(size) => size,
            Err(e) => {
                log::debug!("Dropping frame, terminal size unavailable: {}", e);
                continue;
            }
        };

        let Some((width, height)) = target_dimensions(cols, rows) else {
            continue;
        };

        let Some(frame) = resize_linear(&raw, width, height) else {
            log::debug!("Dropping frame, resize to {}x{} failed", width, height);
            continue;
        };

        if tx.send(frame).is_err() {
            log::debug!("Frame channel closed, producer exiting");
            break;
        }
    }
}

/// Open the camera on a dedicated thread and start producing frames.
///
/// Blocks until the camera has opened (or failed to), so an unavailable
/// device surfaces here rather than inside the loop.
pub fn spawn_frame_producer(
    settings: CameraSettings,
    tx: Sender<Frame>,
) -> Result<JoinHandle<()>, CameraError> {
    let (info_tx, info_rx) = mpsc::channel::<Result<(), CameraError>>();

    let handle = thread::Builder::new()
        .name("frame-producer".to_string())
        .spawn(move || {
            let source = match CameraSource::open(&settings) {
                Ok(source) => {
                    let _ = info_tx.send(Ok(()));
                    source
                }
                Err(e) => {
                    let _ = info_tx.send(Err(e));
                    return;
                }
            };
            run_frame_producer(source, crossterm::terminal::size, tx);
        })
        .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

    match info_rx.recv() {
        Ok(Ok(())) => Ok(handle),
        Ok(Err(e)) => {
            let _ = handle.join();
            Err(e)
        }
        Err(_) => {
            let _ = handle.join();
            Err(CameraError::StreamFailed(
                "Capture thread terminated unexpectedly".to_string(),
            ))
        }
    }
}
