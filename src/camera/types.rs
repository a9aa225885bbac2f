//! Camera types and data structures.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Low resolution (320x240) - plenty for a terminal grid
    pub const LOW: Resolution = Resolution {
        width: 320,
        height: 240,
    };

    /// Medium resolution (640x480) - balanced, recommended
    pub const MEDIUM: Resolution = Resolution {
        width: 640,
        height: 480,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// Pixel format of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// RGB format (3 bytes per pixel)
    Rgb,
}

/// A captured camera frame.
///
/// Raw frames come straight from the camera; the producer publishes frames
/// resized to the terminal cell grid, one pixel per cell.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGB format, row-major
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel format
    pub format: FrameFormat,
    /// Timestamp when frame was captured
    pub timestamp: Instant,
}

impl Frame {
    /// Build an RGB frame from raw bytes.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` pixels.
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() != width as usize * height as usize * 3 {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        })
    }

    /// Get the number of bytes per pixel (3 for RGB).
    pub fn bytes_per_pixel(&self) -> usize {
        match self.format {
            FrameFormat::Rgb => 3,
        }
    }

    /// RGB sample at (x, y), or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.bytes_per_pixel();
        let idx = (y as usize * self.width as usize + x as usize) * bpp;
        let px = self.data.get(idx..idx + 3)?;
        Some([px[0], px[1], px[2]])
    }

    /// Iterate over rows of RGB samples, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = (self.width as usize * self.bytes_per_pixel()).max(1);
        self.data.chunks_exact(stride).take(self.height as usize)
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Capture resolution
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
    /// Mirror horizontally (selfie mode)
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
            mirror: false,
        }
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("Failed to query cameras: {0}")]
    QueryFailed(String),
    #[error("Failed to open camera: {0}")]
    OpenFailed(String),
    #[error(
        "Camera permission denied. On macOS, grant access in System Settings > Privacy & Security > Camera"
    )]
    PermissionDenied,
    #[error("Camera device {0} not found. Run 'list-cameras' to see available devices")]
    DeviceNotFound(u32),
    #[error("Failed to start camera stream: {0}")]
    StreamFailed(String),
    #[error("Failed to read frame: {0}")]
    ReadFailed(String),
    #[error("Failed to decode frame")]
    DecodeFailed,
}
