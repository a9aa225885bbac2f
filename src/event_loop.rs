//! Render loop: the single coordinator between capture, input, and screen.
//!
//! Frames arrive from the producer thread and commands from the input
//! thread, each over its own rendezvous channel. The loop selects over both
//! with no priority, so interleaving between the two streams is arbitrary
//! while each stream is handled in order, exactly once.
//!
//! The loop is the only owner of [`DisplayState`] and the last frame.

use crossbeam_channel::{select, Receiver};
use ratatui::backend::Backend;
use ratatui::style::{Color, Style};
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::ascii::GlyphRamp;
use crate::camera::Frame;
use crate::input::Command;
use crate::snapshot::write_snapshot;
use crate::terminal::StatusLine;

/// Mutable display settings, changed only by commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Paint each glyph with its pixel's color
    pub color_enabled: bool,
    /// Luma to glyph mapping
    pub ramp: GlyphRamp,
}

/// What the loop should do after handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Errors that end the render loop.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("frame producer stopped")]
    FramesClosed,
    #[error("input listener stopped")]
    CommandsClosed,
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub struct RenderLoop<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    state: DisplayState,
    status: StatusLine,
    last_frame: Option<Frame>,
    snapshot_dir: PathBuf,
}

impl<'a, B: Backend> RenderLoop<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, state: DisplayState, snapshot_dir: PathBuf) -> Self {
        Self {
            terminal,
            state,
            status: StatusLine::new(),
            last_frame: None,
            snapshot_dir,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.message()
    }

    /// Process frames and commands until `Quit` or a channel closes.
    pub fn run(
        &mut self,
        frames: &Receiver<Frame>,
        commands: &Receiver<Command>,
    ) -> Result<(), RenderError> {
        log::info!("Render loop started");
        loop {
            let flow = select! {
                recv(commands) -> msg => {
                    let command = msg.map_err(|_| RenderError::CommandsClosed)?;
                    self.handle_command(command)?
                }
                recv(frames) -> msg => {
                    let frame = msg.map_err(|_| RenderError::FramesClosed)?;
                    self.handle_frame(frame)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                log::info!("Render loop stopping");
                return Ok(());
            }
        }
    }

    /// Apply one command.
    pub fn handle_command(&mut self, command: Command) -> Result<Flow, RenderError> {
        log::debug!("Command: {:?}", command);
        match command {
            Command::Resize => {
                // Drop the previous buffer so the next draw repaints every cell
                self.terminal.clear()?;
                self.show_status("Resize Requested")?;
            }
            Command::ColorToggle => {
                self.show_status("Color Toggle")?;
                self.state.color_enabled = !self.state.color_enabled;
                log::info!(
                    "Color {}",
                    if self.state.color_enabled { "enabled" } else { "disabled" }
                );
            }
            Command::IncreaseBrightness => {
                self.show_status("Increase Brightness")?;
                let changed = self.state.ramp.increase_brightness();
                log::info!(
                    "Increase brightness (ramp {}, {} glyphs)",
                    if changed { "shrunk" } else { "unchanged" },
                    self.state.ramp.len()
                );
            }
            Command::DecreaseBrightness => {
                self.show_status("Decrease Brightness")?;
                self.state.ramp.decrease_brightness();
                log::info!("Decrease brightness ({} glyphs)", self.state.ramp.len());
            }
            Command::Screenshot => {
                let message = match write_snapshot(
                    self.last_frame.as_ref(),
                    &self.state.ramp,
                    &self.snapshot_dir,
                ) {
                    Ok(path) => format!("Screenshot saved to file: {}", path.display()),
                    Err(e) => {
                        log::warn!("Screenshot failed: {}", e);
                        format!("Error dumping image to file: {}", e)
                    }
                };
                self.show_status(message)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Paint a frame, one glyph per cell, and keep it as the last frame.
    ///
    /// Cells outside the current screen are skipped. The status row keeps
    /// the current message.
    pub fn handle_frame(&mut self, frame: Frame) -> Result<(), RenderError> {
        let state = &self.state;
        let status = &self.status;

        self.terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();

            for (y, row) in frame.rows().enumerate() {
                let Ok(y) = u16::try_from(y) else { break };
                if y >= area.height {
                    break;
                }
                for (x, px) in row.chunks_exact(frame.bytes_per_pixel()).enumerate() {
                    let Ok(x) = u16::try_from(x) else { break };
                    if x >= area.width {
                        break;
                    }
                    let rgb = [px[0], px[1], px[2]];
                    let style = if state.color_enabled {
                        Style::default().fg(Color::Rgb(rgb[0], rgb[1], rgb[2]))
                    } else {
                        Style::default()
                    };
                    if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                        cell.set_char(state.ramp.glyph_for_rgb8(rgb)).set_style(style);
                    }
                }
            }

            status.render(area, buf);
        })?;

        self.last_frame = Some(frame);
        Ok(())
    }

    /// Clear the screen and show `message` on the status row.
    fn show_status(&mut self, message: impl Into<String>) -> io::Result<()> {
        self.status.set(message);
        let status = &self.status;
        self.terminal.draw(|f| {
            let area = f.area();
            status.render(area, f.buffer_mut());
        })?;
        Ok(())
    }
}
