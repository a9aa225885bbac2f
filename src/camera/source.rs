//! Frame sources: the live camera and the seam the producer reads through.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;

use super::frame_utils::{convert_to_rgb, mirror_horizontal};
use super::types::{CameraError, CameraSettings, Frame};

/// Something that yields RGB frames, blocking until one is available.
pub trait FrameSource {
    /// Read the next frame.
    ///
    /// Errors are per-frame; callers may retry.
    fn read_frame(&mut self) -> Result<Frame, CameraError>;
}

/// A nokhwa camera with an open stream.
pub struct CameraSource {
    camera: Camera,
    mirror: bool,
}

impl CameraSource {
    /// Open the camera and start its stream.
    ///
    /// Must be called on the thread that will read from it; camera handles
    /// are not `Send` on every platform.
    pub fn open(settings: &CameraSettings) -> Result<Self, CameraError> {
        let index = CameraIndex::Index(settings.device_index);
        let mut camera = open_camera_with_fallback(&index, settings)?;

        camera
            .open_stream()
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

        let res = camera.resolution();
        log::info!(
            "Camera {} streaming at {}x{} @ {} fps",
            settings.device_index,
            res.width(),
            res.height(),
            camera.frame_rate()
        );

        Ok(Self {
            camera,
            mirror: settings.mirror,
        })
    }
}

impl FrameSource for CameraSource {
    fn read_frame(&mut self) -> Result<Frame, CameraError> {
        let raw = self
            .camera
            .frame()
            .map_err(|e| CameraError::ReadFailed(e.to_string()))?;
        let mut frame = convert_to_rgb(&raw).ok_or(CameraError::DecodeFailed)?;
        if self.mirror {
            mirror_horizontal(&mut frame);
        }
        Ok(frame)
    }
}

impl Drop for CameraSource {
    fn drop(&mut self) {
        let _ = self.camera.stop_stream();
    }
}

/// Try to open a camera with multiple format fallback strategies.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    // 1. Closest match with NV12 (native on macOS)
    // 2. Closest match with MJPEG (widely supported)
    // 3. Highest resolution available, any format
    let resolution =
        nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);
    let format_attempts = [
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            resolution,
            NokhwaFrameFormat::NV12,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            resolution,
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = None;
    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("Camera format attempt failed: {}", e);
                last_error = Some(e);
            }
        }
    }

    let Some(e) = last_error else {
        return Err(CameraError::DeviceNotFound(settings.device_index));
    };
    let msg = e.to_string().to_lowercase();
    if msg.contains("permission")
        || msg.contains("denied")
        || msg.contains("authorization")
        || msg.contains("access")
    {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(e.to_string()))
    }
}
