//! Terminal lifecycle: raw mode, alternate screen, and panic-safe restore.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether raw mode is active (read by the panic hook).
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Owns the ratatui terminal with a crossterm backend.
///
/// - Enters raw mode and the alternate screen on creation
/// - Restores terminal state on drop (or explicit restore)
/// - Restores the terminal before a panic message is printed
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Whether this TUI is responsible for cleanup
    active: bool,
}

impl Tui {
    /// Enter raw mode and the alternate screen, hide the cursor.
    ///
    /// # Errors
    /// Returns an error if enabling raw mode, entering the alternate screen,
    /// or creating the terminal fails.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Mutable access to the underlying ratatui terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Leave the alternate screen, disable raw mode, show the cursor.
    ///
    /// After calling this, drop is a no-op. Calling it twice is fine.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            crossterm::execute!(
                self.terminal.backend_mut(),
                crossterm::terminal::LeaveAlternateScreen,
            )?;
            disable_raw_mode()?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }

    /// Check if the TUI is still active (not yet restored).
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            // Best-effort cleanup - ignore errors during drop
            let _ = crossterm::execute!(
                self.terminal.backend_mut(),
                crossterm::terminal::LeaveAlternateScreen,
            );
            let _ = disable_raw_mode();
            let _ = self.terminal.show_cursor();
        }
    }
}

/// Install a panic hook that restores the terminal before panicking.
fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = crossterm::execute!(
                io::stdout(),
                crossterm::terminal::LeaveAlternateScreen,
                crossterm::cursor::Show,
            );
            let _ = disable_raw_mode();
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
        }

        log::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
