//! Frame conversion and transformation utilities.

use image::imageops::{self, FilterType};
use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;

use super::types::Frame;

/// Convert a nokhwa buffer to our RGB Frame format.
///
/// Handles the camera's native format (MJPEG, YUYV, NV12, ...) through
/// nokhwa's `decode_image`.
///
/// Returns `None` if the conversion fails (unsupported format or corrupt data).
pub fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let (width, height) = (decoded.width(), decoded.height());
    Frame::from_rgb(decoded.into_raw(), width, height)
}

/// Mirror a frame horizontally (flip left-right) for selfie mode.
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let height = frame.height as usize;
    let bpp = frame.bytes_per_pixel();

    for y in 0..height {
        let row_start = y * width * bpp;
        let row = &mut frame.data[row_start..row_start + width * bpp];

        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}

/// Resize a frame to exactly `width` x `height` with linear interpolation.
///
/// Returns `None` for zero target dimensions or a malformed source frame.
pub fn resize_linear(frame: &Frame, width: u32, height: u32) -> Option<Frame> {
    if width == 0 || height == 0 {
        return None;
    }
    if frame.width == width && frame.height == height {
        return Some(frame.clone());
    }

    let source = RgbImage::from_raw(frame.width, frame.height, frame.data.clone())?;
    let resized = imageops::resize(&source, width, height, FilterType::Triangle);

    let mut out = Frame::from_rgb(resized.into_raw(), width, height)?;
    out.timestamp = frame.timestamp;
    Some(out)
}
