//! Terminal input listener.
//!
//! Blocks on terminal events on its own thread and forwards the ones that
//! mean something to the render loop as [`Command`]s.

use crossbeam_channel::Sender;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::thread::{self, JoinHandle};

/// A request from the user (or the terminal) for the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The terminal changed size
    Resize,
    /// Flip per-glyph color on or off
    ColorToggle,
    /// Drop a leading blank from the ramp
    IncreaseBrightness,
    /// Prepend a blank to the ramp
    DecreaseBrightness,
    /// Write the last frame to a text file
    Screenshot,
    /// Restore the terminal and exit
    Quit,
}

/// Map a terminal event to a command.
///
/// Bindings:
/// - Esc, Ctrl+C, q: quit
/// - c: toggle color
/// - s: screenshot
/// - +/-: brighter/darker ramp
///
/// Everything else, including key releases, maps to `None`.
pub fn map_event(event: &Event) -> Option<Command> {
    match event {
        Event::Resize(_, _) => Some(Command::Resize),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('c') => Some(Command::ColorToggle),
        KeyCode::Char('s') => Some(Command::Screenshot),
        KeyCode::Char('+') => Some(Command::IncreaseBrightness),
        KeyCode::Char('-') => Some(Command::DecreaseBrightness),
        _ => None,
    }
}

/// Read events until the source fails or the render loop goes away.
///
/// The send blocks until the render loop receives the command.
pub fn run_input_listener<R>(mut read_event: R, tx: Sender<Command>)
where
    R: FnMut() -> io::Result<Event>,
{
    loop {
        let event = match read_event() {
            Ok(event) => event,
            Err(e) => {
                log::error!("Terminal event read failed: {}", e);
                break;
            }
        };

        let Some(command) = map_event(&event) else {
            continue;
        };

        if tx.send(command).is_err() {
            log::debug!("Command channel closed, input listener exiting");
            break;
        }
    }
}

/// Spawn the listener on its own thread, reading from the real terminal.
pub fn spawn_input_listener(tx: Sender<Command>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input-listener".to_string())
        .spawn(move || run_input_listener(crossterm::event::read, tx))
}
