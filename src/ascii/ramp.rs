//! Glyph ramp definitions and brightness adjustment.

use thiserror::Error;

use super::luma::{glyph_index, Rgb16};

/// Default density ramp (15 levels).
/// Characters ordered from darkest (space) to brightest (@). The leading
/// blanks give "increase brightness" something to drop.
pub const DEFAULT_RAMP: &[char] = &[
    ' ', ' ', ' ', ' ', '.', ',', ':', ';', '+', '*', '?', '%', 'S', '#', '@',
];

/// Glyph prepended and dropped when adjusting brightness.
pub const BLANK: char = ' ';

/// Errors building a ramp from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RampError {
    #[error("glyph ramp must contain at least one character")]
    Empty,
}

/// Ordered glyph sequence used to map luma to characters.
///
/// Never empty: constructors reject empty input and [`increase_brightness`]
/// refuses to drop the last glyph.
///
/// [`increase_brightness`]: GlyphRamp::increase_brightness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.to_vec(),
        }
    }
}

impl GlyphRamp {
    /// Build a ramp from glyphs ordered darkest to brightest.
    pub fn new(glyphs: Vec<char>) -> Result<Self, RampError> {
        if glyphs.is_empty() {
            return Err(RampError::Empty);
        }
        Ok(Self { glyphs })
    }

    /// Build a ramp from a string, one glyph per `char`.
    pub fn parse(s: &str) -> Result<Self, RampError> {
        Self::new(s.chars().collect())
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Shift the mapping brighter by dropping one leading blank.
    ///
    /// Returns true if the ramp changed. No-op once the first glyph is not
    /// blank, or when only one glyph is left.
    pub fn increase_brightness(&mut self) -> bool {
        if self.glyphs.len() > 1 && self.glyphs[0] == BLANK {
            self.glyphs.remove(0);
            true
        } else {
            false
        }
    }

    /// Shift the mapping darker by prepending a blank.
    pub fn decrease_brightness(&mut self) {
        self.glyphs.insert(0, BLANK);
    }

    /// Glyph for a 16-bit RGB sample.
    pub fn glyph_for(&self, rgb: Rgb16) -> char {
        self.glyphs[glyph_index(self.glyphs.len(), rgb)]
    }

    /// Glyph for an 8-bit RGB sample, as stored in camera frames.
    pub fn glyph_for_rgb8(&self, rgb: [u8; 3]) -> char {
        self.glyph_for(Rgb16::from_rgb8(rgb))
    }
}

impl std::fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.glyphs {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
