//! Camera capture: device enumeration, frame sources, and the producer thread.
//!
//! - Device enumeration via [`list_devices`]
//! - Live capture via [`CameraSource`], behind the [`FrameSource`] trait
//! - The producer loop via [`spawn_frame_producer`] / [`run_frame_producer`]

mod device;
mod frame_utils;
mod producer;
mod source;
mod types;

pub use device::list_devices;
pub use frame_utils::{mirror_horizontal, resize_linear};
pub use producer::{run_frame_producer, spawn_frame_producer, target_dimensions};
pub use source::{CameraSource, FrameSource};
pub use types::{CameraError, CameraInfo, CameraSettings, Frame, FrameFormat, Resolution};
