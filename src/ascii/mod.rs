//! Brightness mapping from camera pixels to ASCII glyphs.
//!
//! 1. **Luma** - RGB to linear luma using BT.601 weights
//! 2. **Ramp** - luma to a glyph from an ordered, adjustable ramp

mod luma;
mod ramp;

pub use luma::{glyph_index, luma, Rgb16};
pub use ramp::{GlyphRamp, RampError, BLANK, DEFAULT_RAMP};
