//! Terminal management - lifecycle wrapper and status line layout.

mod status_line;
mod tui;

pub use status_line::{status_cells, StatusLine, STATUS_COLOR, STATUS_ROWS};
pub use tui::Tui;
