//! End-to-end tests for the render loop against ratatui's test backend.
//!
//! These drive the loop both directly (handle_frame / handle_command) and
//! through `run` with real rendezvous channels fed from other threads.

use ascii_cam::ascii::GlyphRamp;
use ascii_cam::camera::Frame;
use ascii_cam::event_loop::{DisplayState, Flow, RenderError, RenderLoop};
use ascii_cam::input::Command;
use ascii_cam::terminal::STATUS_COLOR;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::Terminal;
use std::path::{Path, PathBuf};
use std::thread;

fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> Frame {
    let data = rgb
        .iter()
        .copied()
        .cycle()
        .take((width * height * 3) as usize)
        .collect();
    Frame::from_rgb(data, width, height).unwrap()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

fn files_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

// ==================== Frame Rendering Tests ====================

#[test]
fn test_frame_painted_one_glyph_per_cell() {
    let mut term = terminal(6, 4);
    {
        let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
        render.handle_frame(solid_frame(6, 3, [255, 255, 255])).unwrap();
    }
    let buf = term.backend().buffer();
    for y in 0..3 {
        assert_eq!(row_text(buf, y), "@@@@@@");
    }
    assert_eq!(row_text(buf, 3), "      ");
}

#[test]
fn test_color_disabled_uses_default_style() {
    let mut term = terminal(3, 2);
    {
        let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
        render.handle_frame(solid_frame(3, 1, [255, 0, 0])).unwrap();
    }
    let cell = &term.backend().buffer()[(0, 0)];
    assert_eq!(cell.symbol(), ".");
    assert_eq!(cell.fg, Color::Reset);
}

#[test]
fn test_color_enabled_uses_pixel_color() {
    let mut term = terminal(3, 2);
    {
        let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
        render.handle_command(Command::ColorToggle).unwrap();
        render.handle_frame(solid_frame(3, 1, [255, 0, 0])).unwrap();
    }
    let cell = &term.backend().buffer()[(1, 0)];
    assert_eq!(cell.symbol(), ".");
    assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
}

#[test]
fn test_oversized_frame_is_clipped() {
    let mut term = terminal(3, 2);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    render.handle_frame(solid_frame(10, 10, [0, 0, 0])).unwrap();
    assert_eq!(render.last_frame().map(|f| (f.width, f.height)), Some((10, 10)));
}

#[test]
fn test_new_frame_replaces_last_frame() {
    let mut term = terminal(4, 3);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    render.handle_frame(solid_frame(4, 2, [0, 0, 0])).unwrap();
    render.handle_frame(solid_frame(2, 1, [9, 9, 9])).unwrap();
    let last = render.last_frame().unwrap();
    assert_eq!((last.width, last.height), (2, 1));
    assert_eq!(last.pixel(0, 0), Some([9, 9, 9]));
}

// ==================== Status Line Tests ====================

#[test]
fn test_status_message_survives_next_frame() {
    let mut term = terminal(20, 3);
    {
        let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
        render.handle_command(Command::IncreaseBrightness).unwrap();
        render.handle_frame(solid_frame(20, 2, [255, 255, 255])).unwrap();
    }
    let buf = term.backend().buffer();
    assert_eq!(row_text(buf, 0), "@".repeat(20));
    assert_eq!(row_text(buf, 2), "Increase Brightness ");
    assert_eq!(buf[(0, 2)].fg, STATUS_COLOR);
}

#[test]
fn test_status_message_clears_screen() {
    let mut term = terminal(20, 3);
    {
        let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
        render.handle_frame(solid_frame(20, 2, [255, 255, 255])).unwrap();
        render.handle_command(Command::DecreaseBrightness).unwrap();
    }
    let buf = term.backend().buffer();
    assert_eq!(row_text(buf, 0), " ".repeat(20));
    assert!(row_text(buf, 2).starts_with("Decrease Brightness"));
}

#[test]
fn test_two_resizes_update_status_each_time() {
    let mut term = terminal(24, 4);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    for _ in 0..2 {
        assert_eq!(render.handle_command(Command::Resize).unwrap(), Flow::Continue);
        assert_eq!(render.status(), Some("Resize Requested"));
    }
    drop(render);
    assert!(row_text(term.backend().buffer(), 3).starts_with("Resize Requested"));
}

#[test]
fn test_resize_after_backend_shrinks() {
    let mut term = terminal(24, 6);
    term.backend_mut().resize(10, 3);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    render.handle_command(Command::Resize).unwrap();
    render.handle_frame(solid_frame(24, 5, [255, 255, 255])).unwrap();
    drop(render);
    let buf = term.backend().buffer();
    assert_eq!(buf.area.width, 10);
    assert_eq!(row_text(buf, 0), "@".repeat(10));
    assert_eq!(row_text(buf, 2), "Resize Req");
}

// ==================== Screenshot Tests ====================

#[test]
fn test_screenshot_without_frame_reports_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut term = terminal(80, 3);
    let mut render =
        RenderLoop::new(&mut term, DisplayState::default(), dir.path().to_path_buf());
    assert_eq!(render.handle_command(Command::Screenshot).unwrap(), Flow::Continue);
    let status = render.status().unwrap();
    assert!(status.starts_with("Error dumping image to file"));
    assert!(status.contains("empty input"));
    assert_eq!(files_in(dir.path()), 0);
}

#[test]
fn test_screenshot_writes_last_frame_with_current_ramp() {
    let dir = tempfile::tempdir().unwrap();
    let mut term = terminal(80, 3);
    let state = DisplayState {
        color_enabled: false,
        ramp: GlyphRamp::parse(" #").unwrap(),
    };
    let mut render = RenderLoop::new(&mut term, state, dir.path().to_path_buf());
    render.handle_frame(solid_frame(3, 2, [255, 255, 255])).unwrap();
    render.handle_command(Command::Screenshot).unwrap();

    assert!(render
        .status()
        .unwrap()
        .starts_with("Screenshot saved to file: "));
    let entry = std::fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
    let content = std::fs::read_to_string(entry.path()).unwrap();
    assert_eq!(content, "###\n###\n");
}

#[test]
fn test_screenshot_io_failure_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone");
    let mut term = terminal(80, 3);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), missing);
    render.handle_frame(solid_frame(2, 1, [0, 0, 0])).unwrap();
    assert_eq!(render.handle_command(Command::Screenshot).unwrap(), Flow::Continue);
    assert!(render.status().unwrap().starts_with("Error dumping image to file"));
}

// ==================== Channel Tests ====================

#[test]
fn test_run_processes_frame_then_quits() {
    let (frame_tx, frame_rx) = crossbeam_channel::bounded(0);
    let (command_tx, command_rx) = crossbeam_channel::bounded(0);

    let feeder = thread::spawn(move || {
        frame_tx.send(solid_frame(4, 2, [255, 255, 255])).unwrap();
        command_tx.send(Command::ColorToggle).unwrap();
        command_tx.send(Command::Quit).unwrap();
        // Keep senders alive until the loop has seen Quit
        (frame_tx, command_tx)
    });

    let mut term = terminal(4, 3);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    render.run(&frame_rx, &command_rx).unwrap();

    assert!(render.last_frame().is_some());
    assert!(render.state().color_enabled);
    drop(feeder.join().unwrap());
}

#[test]
fn test_run_preserves_per_channel_order() {
    let (frame_tx, frame_rx) = crossbeam_channel::bounded(0);
    let (command_tx, command_rx) = crossbeam_channel::bounded(0);

    let driver = thread::spawn(move || {
        let frames = thread::spawn(move || {
            for w in 1..=5 {
                frame_tx.send(solid_frame(w, 1, [0, 0, 0])).unwrap();
            }
            frame_tx
        });
        let commands = thread::spawn(move || {
            for _ in 0..3 {
                command_tx.send(Command::DecreaseBrightness).unwrap();
            }
            command_tx
        });
        // Rendezvous sends: once both threads finish, every message was taken
        let frame_tx = frames.join().unwrap();
        let command_tx = commands.join().unwrap();
        command_tx.send(Command::Quit).unwrap();
        (frame_tx, command_tx)
    });

    let mut term = terminal(8, 3);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    render.run(&frame_rx, &command_rx).unwrap();

    assert_eq!(render.last_frame().map(|f| f.width), Some(5));
    assert_eq!(render.state().ramp.len(), 18);
    drop(driver.join().unwrap());
}

#[test]
fn test_run_errors_when_input_listener_gone() {
    let (_frame_tx, frame_rx) = crossbeam_channel::bounded::<Frame>(0);
    let (command_tx, command_rx) = crossbeam_channel::bounded::<Command>(0);
    drop(command_tx);

    let mut term = terminal(4, 3);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    let err = render.run(&frame_rx, &command_rx).unwrap_err();
    assert!(matches!(err, RenderError::CommandsClosed));
}

#[test]
fn test_run_errors_when_producer_gone() {
    let (frame_tx, frame_rx) = crossbeam_channel::bounded::<Frame>(0);
    let (_command_tx, command_rx) = crossbeam_channel::bounded::<Command>(0);
    drop(frame_tx);

    let mut term = terminal(4, 3);
    let mut render = RenderLoop::new(&mut term, DisplayState::default(), PathBuf::from("."));
    let err = render.run(&frame_rx, &command_rx).unwrap_err();
    assert!(matches!(err, RenderError::FramesClosed));
}
