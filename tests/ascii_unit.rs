//! Unit tests for brightness mapping.
//!
//! Covers luma weights, ramp indexing bounds, and the brightness
//! adjustment rules of the glyph ramp.

use ascii_cam::ascii::*;

// ==================== Glyph Index Tests ====================

#[test]
fn test_index_always_within_ramp() {
    let samples = [0u16, 1, 257, 0x7fff, 0x8000, 0xfffe, 0xffff];
    for len in 1..=40 {
        for &r in &samples {
            for &g in &samples {
                for &b in &samples {
                    let idx = glyph_index(len, Rgb16::new(r, g, b));
                    assert!(idx < len, "len={} rgb=({},{},{}) idx={}", len, r, g, b, idx);
                }
            }
        }
    }
}

#[test]
fn test_index_matches_floor_of_luma() {
    // Gray levels avoid float ties on the weight boundaries
    for len in [2usize, 5, 8, 15] {
        for v in (0..=255u8).step_by(17) {
            let rgb = Rgb16::from_rgb8([v, v, v]);
            let expected = ((len - 1) as f64 * luma(rgb)).floor() as usize;
            assert_eq!(glyph_index(len, rgb), expected, "len={} v={}", len, v);
        }
    }
}

#[test]
fn test_index_monotonic_in_brightness() {
    let mut prev = 0;
    for v in 0..=255u8 {
        let idx = glyph_index(15, Rgb16::from_rgb8([v, v, v]));
        assert!(idx >= prev);
        prev = idx;
    }
    assert_eq!(prev, 14);
}

// ==================== Scenario Tests ====================

#[test]
fn test_white_pixel_maps_to_brightest_glyph() {
    let ramp = GlyphRamp::default();
    assert_eq!(ramp.len(), 15);
    assert_eq!(luma(Rgb16::from_rgb8([255, 255, 255])), 1.0);
    assert_eq!(ramp.glyph_for_rgb8([255, 255, 255]), '@');
}

#[test]
fn test_black_pixel_maps_to_blank() {
    let ramp = GlyphRamp::default();
    assert_eq!(luma(Rgb16::from_rgb8([0, 0, 0])), 0.0);
    assert_eq!(ramp.glyph_for_rgb8([0, 0, 0]), ' ');
}

#[test]
fn test_pure_red_uses_red_weight() {
    // floor(14 * 0.299) = 4 -> '.'
    assert_eq!(GlyphRamp::default().glyph_for_rgb8([255, 0, 0]), '.');
}

#[test]
fn test_glyph_for_16_bit_input() {
    let ramp = GlyphRamp::parse(" #").unwrap();
    assert_eq!(ramp.glyph_for(Rgb16::new(0xffff, 0xffff, 0xffff)), '#');
    assert_eq!(ramp.glyph_for(Rgb16::new(0xffff, 0, 0)), ' ');
}

// ==================== Ramp Adjustment Tests ====================

#[test]
fn test_increase_brightness_idempotent_once_leading_glyph_visible() {
    let mut ramp = GlyphRamp::default();
    for _ in 0..4 {
        assert!(ramp.increase_brightness());
    }
    assert_eq!(ramp.glyphs()[0], '.');
    let settled = ramp.clone();
    for _ in 0..5 {
        assert!(!ramp.increase_brightness());
        assert_eq!(ramp, settled);
    }
}

#[test]
fn test_decrease_then_increase_round_trips() {
    let original = GlyphRamp::parse(".:-=+*#%@").unwrap();
    let mut ramp = original.clone();
    ramp.decrease_brightness();
    assert_eq!(ramp.len(), original.len() + 1);
    ramp.increase_brightness();
    assert_eq!(ramp, original);
}

#[test]
fn test_decrease_brightness_is_unbounded() {
    let mut ramp = GlyphRamp::default();
    for _ in 0..1000 {
        ramp.decrease_brightness();
    }
    assert_eq!(ramp.len(), 1015);
    // Mid-gray now lands on a blank
    assert_eq!(ramp.glyph_for_rgb8([128, 128, 128]), BLANK);
    assert_eq!(ramp.glyph_for_rgb8([255, 255, 255]), '@');
}

#[test]
fn test_increase_brightness_shifts_mapping_up() {
    let mut ramp = GlyphRamp::default();
    let before = ramp.glyph_for_rgb8([128, 128, 128]);
    for _ in 0..4 {
        ramp.increase_brightness();
    }
    let after = ramp.glyph_for_rgb8([128, 128, 128]);
    let pos = |c| DEFAULT_RAMP.iter().position(|&g| g == c).unwrap();
    assert!(pos(after) > pos(before));
}
