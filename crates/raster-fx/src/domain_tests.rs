//! Domain-critical regression tests for raster-fx.
//!
//! These tests pin down the behavioral contracts that are easy to break
//! with a well-intentioned "fix". Each test documents the regression it
//! guards against.

use crate::channel::{self, Channel};
use crate::color::{Cmyk, Hsv, Rgb};
use crate::convert::{self, ChromaOverflow};
use crate::effects;
use crate::PixelBuffer;

fn solid(width: usize, height: usize, rgba: [u8; 4]) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        pixels.extend_from_slice(&rgba);
    }
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

// ============================================================================
// HSV round trip
// ============================================================================

/// If this breaks, it means: the HSV converter pair lost information --
/// most likely a wrong sector in the hue switch or a scale mismatch between
/// the [0, 255] storage convention and the [0, 1] math.
#[test]
fn test_hsv_round_trip_within_one_lsb() {
    for r in (0..=255u16).step_by(15) {
        for g in (0..=255u16).step_by(15) {
            for b in (0..=255u16).step_by(15) {
                let original = Rgb::new(r as u8, g as u8, b as u8);
                let back = Hsv::from_rgb(original).to_rgb();
                for (expected, got) in original.to_bytes().iter().zip(back.to_bytes()) {
                    assert!(
                        (*expected as i32 - got as i32).abs() <= 1,
                        "REGRESSION: HSV round trip of {original:?} produced {back:?}"
                    );
                }
            }
        }
    }
}

// ============================================================================
// CMYK black guard
// ============================================================================

/// If this breaks, it means: the k == 1 special case in the CMYK converter
/// was removed, and pure black divides by zero again -- NaN propagates into
/// buffers as garbage bytes.
#[test]
fn test_cmyk_pure_black_has_no_division_artifact() {
    let black = Cmyk::from_rgb(Rgb::new(0, 0, 0));
    assert_eq!(black.c, 0.0);
    assert_eq!(black.m, 0.0);
    assert_eq!(black.y, 0.0);
    assert_eq!(black.k, 255.0);

    // And through the buffer transform: a black image must convert to
    // finite bytes, full key in the alpha slot.
    let out = convert::to_cmyk(&solid(3, 3, [0, 0, 0, 255]));
    assert_eq!(out.rgba(1, 1), [0, 0, 0, 255]);
}

// ============================================================================
// Channel threshold isolation
// ============================================================================

/// If this breaks, it means: channel thresholding stopped zeroing the
/// unselected channels, or the binarization cutoff moved -- either way the
/// single-channel segmentation views change everywhere.
#[test]
fn test_channel_threshold_isolates_and_binarizes() {
    let src = solid(4, 4, [200, 123, 45, 255]);
    let out = channel::apply_threshold(&src, 128.0, Channel::Red);

    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(
                out.rgba(x, y),
                [255, 0, 0, 255],
                "REGRESSION: R=200 against threshold 128 must give [255, 0, 0]"
            );
        }
    }
}

// ============================================================================
// Grayscale identity
// ============================================================================

/// If this breaks, it means: the luminance weights no longer sum to 1, so
/// grayscale conversion shifts already-gray pixels even at boost 1.0.
#[test]
fn test_grayscale_is_identity_on_gray_at_unit_boost() {
    let src = solid(2, 2, [100, 100, 100, 255]);
    let out = channel::to_grayscale(&src, 1.0);
    assert_eq!(out.rgba(0, 0), [100, 100, 100, 255]);
    assert_eq!(out.rgba(1, 1), [100, 100, 100, 255]);
}

// ============================================================================
// Pixelation idempotence
// ============================================================================

/// If this breaks, it means: block averaging is no longer a fixed point on
/// block-uniform input -- typically a rounding change or a block iteration
/// that drifts off the partition grid.
#[test]
fn test_color_pixelation_is_idempotent() {
    // Non-uniform input whose dimensions are not a multiple of the block
    // size, so clipped edge blocks are exercised too.
    let mut pixels = Vec::new();
    for i in 0..(5 * 5) {
        let v = (i * 11 % 256) as u8;
        pixels.extend_from_slice(&[v, v.wrapping_add(40), v.wrapping_add(90), 255]);
    }
    let src = PixelBuffer::from_pixels(5, 5, pixels).unwrap();

    let once = effects::pixelate_color(&src, 2).unwrap();
    let twice = effects::pixelate_color(&once, 2).unwrap();
    assert_eq!(
        once, twice,
        "REGRESSION: pixelating an already block-uniform image must be a no-op"
    );

    let once = effects::pixelate_gray(&src, 2).unwrap();
    let twice = effects::pixelate_gray(&once, 2).unwrap();
    assert_eq!(once, twice);
}

// ============================================================================
// Blur identity at level 0
// ============================================================================

/// If this breaks, it means: the 1x1 kernel is no longer exactly weight 1,
/// or the convolution started sampling outside the center at level 0.
#[test]
fn test_blur_level_zero_is_numerically_identity() {
    let mut pixels = Vec::new();
    for i in 0..(4 * 3) {
        let v = (i * 19 % 256) as u8;
        pixels.extend_from_slice(&[v, v.wrapping_mul(3), v.wrapping_add(7), 255]);
    }
    let src = PixelBuffer::from_pixels(4, 3, pixels).unwrap();

    let out = effects::blur(&src, 0);
    assert_eq!(out, src);
}

// ============================================================================
// 1x1 pixelation with oversized block
// ============================================================================

/// If this breaks, it means: block clipping fails on degenerate images and
/// a block larger than the image either crashes or averages phantom pixels.
#[test]
fn test_single_pixel_survives_oversized_block() {
    let src = solid(1, 1, [30, 60, 90, 255]);
    let out = effects::pixelate_gray(&src, 5).unwrap();

    // (30 + 60 + 90) / 3 = 60, written to all three channels
    assert_eq!(out.rgba(0, 0), [60, 60, 60, 255]);
}

// ============================================================================
// YCbCr threshold branch never taken
// ============================================================================

/// If this breaks, it means: the luma comparison changed (e.g. to >=, or
/// against a clamped threshold), so an impossible cutoff no longer leaves
/// chroma untouched.
#[test]
fn test_ycbcr_threshold_above_any_luma_changes_nothing() {
    let mut pixels = Vec::new();
    for v in [0u8, 50, 128, 200, 255, 33] {
        pixels.extend_from_slice(&[v, v.wrapping_add(80), v.wrapping_add(160), 255]);
    }
    let src = PixelBuffer::from_pixels(3, 2, pixels).unwrap();

    // Luma cannot exceed 255, so threshold 300 must be a plain conversion.
    let thresholded = convert::to_ycbcr_threshold(&src, 300.0, ChromaOverflow::Clamp);
    let plain = convert::to_ycbcr(&src);
    assert_eq!(
        thresholded, plain,
        "REGRESSION: threshold above the luma range must never amplify chroma"
    );
}

// ============================================================================
// Transforms never mutate their input
// ============================================================================

/// If this breaks, it means: a transform started writing through its input
/// reference, violating the one-buffer-in, fresh-buffer-out contract every
/// caller relies on for reuse.
#[test]
fn test_inputs_are_never_mutated() {
    let src = solid(3, 3, [120, 90, 60, 180]);
    let reference = src.clone();

    let _ = convert::to_hsv(&src);
    let _ = convert::to_lab_threshold(&src, 100.0);
    let _ = convert::to_cmyk(&src);
    let _ = convert::to_ycbcr_threshold(&src, 10.0, ChromaOverflow::Wrap);
    let _ = channel::to_grayscale(&src, 1.2);
    let _ = channel::adjust_brightness(&src, -30.0);
    let _ = channel::extract_channel(&src, Channel::Green);
    let _ = effects::blur(&src, 2);
    let _ = effects::pixelate_color(&src, 2).unwrap();

    assert_eq!(src, reference);
}
