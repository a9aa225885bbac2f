//! RGB to luma conversion using ITU-R BT.601 weights.

/// Coefficients scaled by 1000: 299 + 587 + 114 = 1000.
const WEIGHT_R: u64 = 299;
const WEIGHT_G: u64 = 587;
const WEIGHT_B: u64 = 114;
const WEIGHT_SUM: u64 = WEIGHT_R + WEIGHT_G + WEIGHT_B;

/// Full-scale luma numerator: a white pixel at 16-bit depth.
const FULL_SCALE: u64 = WEIGHT_SUM * u16::MAX as u64;

/// An RGB sample with 16-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb16 {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Widen an 8-bit sample so 0xff maps to 0xffff.
    pub const fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as u16 * 257,
            g: rgb[1] as u16 * 257,
            b: rgb[2] as u16 * 257,
        }
    }

    /// Weighted sum in units of `1 / FULL_SCALE`.
    fn weighted(self) -> u64 {
        WEIGHT_R * self.r as u64 + WEIGHT_G * self.g as u64 + WEIGHT_B * self.b as u64
    }
}

/// Linear luma in [0, 1]: 0.299*R + 0.587*G + 0.114*B over normalized channels.
///
/// No gamma correction is applied.
pub fn luma(rgb: Rgb16) -> f64 {
    rgb.weighted() as f64 / FULL_SCALE as f64
}

/// Ramp index for a sample: `floor((len - 1) * luma)`.
///
/// Uses integer math so white lands exactly on the last glyph. Always
/// returns a value in `[0, len - 1]`; `len` of zero yields 0.
pub fn glyph_index(len: usize, rgb: Rgb16) -> usize {
    let steps = len.saturating_sub(1) as u64;
    (steps * rgb.weighted() / FULL_SCALE) as usize
}
