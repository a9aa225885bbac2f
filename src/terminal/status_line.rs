//! Status line layout on the reserved bottom row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Rows reserved at the bottom of the screen for status messages.
pub const STATUS_ROWS: u16 = 1;

/// Foreground used for status text.
pub const STATUS_COLOR: Color = Color::Red;

/// A transient message shown on the status row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Write the message into `buf`, starting at the status row of `area`.
    ///
    /// Text longer than the width wraps onto following rows and is clipped
    /// at the bottom edge.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.message.as_deref() else {
            return;
        };
        let style = Style::default().fg(STATUS_COLOR);
        for (x, y, ch) in status_cells(message, area.width, area.height) {
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}

/// Cell positions for a status message on a `width` x `height` screen.
///
/// Positions that would fall below the screen are skipped.
pub fn status_cells(message: &str, width: u16, height: u16) -> Vec<(u16, u16, char)> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let base_y = height.saturating_sub(STATUS_ROWS) as usize;
    let width = width as usize;

    message
        .chars()
        .enumerate()
        .map(|(i, ch)| (i % width, base_y + i / width, ch))
        .take_while(|&(_, y, _)| y < height as usize)
        .map(|(x, y, ch)| (x as u16, y as u16, ch))
        .collect()
}
