//! ascii-cam library crate.
//!
//! Live camera frames are resized to the terminal grid on a producer
//! thread, keys are read on a listener thread, and a single render loop
//! merges both streams and paints glyphs.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod event_loop;
pub mod input;
pub mod logging;
pub mod snapshot;
pub mod terminal;
