use clap::Parser;
use std::error::Error;

use ascii_cam::camera::spawn_frame_producer;
use ascii_cam::cli::{handle_config_action, list_cameras, Args, Command, Settings};
use ascii_cam::config::Config;
use ascii_cam::event_loop::RenderLoop;
use ascii_cam::input::spawn_input_listener;
use ascii_cam::logging;
use ascii_cam::terminal::Tui;

/// Start capture and input threads, then run the render loop on this one.
///
/// Returns after `Quit`; the producer and listener threads are left blocked
/// and end with the process.
fn run_viewer(settings: Settings) -> Result<(), Box<dyn Error>> {
    let (frame_tx, frame_rx) = crossbeam_channel::bounded(0);
    let (command_tx, command_rx) = crossbeam_channel::bounded(0);

    // Camera before screen, so a missing device fails on a normal terminal
    let _producer = spawn_frame_producer(settings.camera.clone(), frame_tx)?;
    log::info!("Camera {} opened", settings.camera.device_index);

    let mut tui = Tui::new()?;
    let _listener = spawn_input_listener(command_tx)?;

    let result = RenderLoop::new(tui.terminal(), settings.display, settings.snapshot_dir)
        .run(&frame_rx, &command_rx);

    tui.restore()?;
    result?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    // --config must exist; the default path may be missing
    let cfg = if let Some(ref path) = args.config {
        match Config::load_from_explicit(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    };

    let settings = match Settings::resolve(&args, &cfg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Some(Command::ListCameras) => {
            if let Err(e) = list_cameras() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Config { action }) => {
            if let Err(e) = handle_config_action(action, &settings, args.config.as_deref()) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        None => {
            logging::init(&settings.log_file, settings.log_level);
            log::info!("ascii-cam {} starting", env!("CARGO_PKG_VERSION"));

            if let Err(e) = run_viewer(settings) {
                log::error!("Fatal: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            log::info!("Exiting");
        }
    }
}
