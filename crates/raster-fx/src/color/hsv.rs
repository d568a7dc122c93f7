//! HSV conversion on the display scale.
//!
//! HSV separates color (hue) from intensity (value), which makes it the
//! preferred space for brightness thresholding: binarizing V segments
//! shadows from highlights without being confused by hue.

use super::rgb::Rgb;

/// A color in HSV, with all three components scaled to `[0, 255]`.
///
/// Hue is stored as `fraction_of_circle * 255` rather than degrees, so the
/// value drops straight into a byte slot for visualization.
///
/// # Example
///
/// ```
/// use raster_fx::{Hsv, Rgb};
///
/// let green = Hsv::from_rgb(Rgb::new(0, 255, 0));
/// assert!((green.h - 85.0).abs() < 0.5); // 120deg of 360 -> 1/3 of 255
/// assert_eq!(green.s, 255.0);
/// assert_eq!(green.v, 255.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue, scaled to [0, 255] (full circle = 255).
    pub h: f32,
    /// Saturation, scaled to [0, 255].
    pub s: f32,
    /// Value (brightness), scaled to [0, 255].
    pub v: f32,
}

impl Hsv {
    /// Convert an RGB pixel to HSV.
    ///
    /// Inputs are normalized to `[0, 1]`; hue comes from the standard
    /// six-sector switch on whichever channel is the maximum, saturation is
    /// `delta / max` (zero for black, which is achromatic), and value is the
    /// maximum. Achromatic input (`max == min`) forces hue to 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };

        let h = if delta == 0.0 {
            // achromatic
            0.0
        } else {
            let sector = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            sector / 6.0
        };

        Self {
            h: h * 255.0,
            s: s * 255.0,
            v: max * 255.0,
        }
    }

    /// Convert back to RGB.
    ///
    /// Components are normalized to `[0, 1]`, run through the classic
    /// sector decomposition (`i = floor(h * 6) mod 6`), and the resulting
    /// channels are scaled to `[0, 255]` and rounded.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 255.0;
        let s = self.s / 255.0;
        let v = self.v / 255.0;

        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (i as i32).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        let red = Hsv::from_rgb(Rgb::new(255, 0, 0));
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 255.0);
        assert_eq!(red.v, 255.0);

        // Green sits a third of the way around the circle
        let green = Hsv::from_rgb(Rgb::new(0, 255, 0));
        assert!((green.h - 255.0 / 3.0).abs() < 1e-4);

        // Blue two thirds
        let blue = Hsv::from_rgb(Rgb::new(0, 0, 255));
        assert!((blue.h - 2.0 * 255.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_achromatic_forces_zero_hue() {
        for v in [0u8, 1, 127, 254, 255] {
            let gray = Hsv::from_rgb(Rgb::new(v, v, v));
            assert_eq!(gray.h, 0.0, "gray {v} should have hue 0");
            assert_eq!(gray.s, 0.0, "gray {v} should have saturation 0");
            assert!((gray.v - v as f32).abs() < 1e-3);
        }
    }

    #[test]
    fn test_black_is_achromatic_not_nan() {
        // max == 0 must not divide: saturation is defined as 0 for black
        let black = Hsv::from_rgb(Rgb::new(0, 0, 0));
        assert_eq!(black.s, 0.0);
        assert!(!black.h.is_nan());
    }

    #[test]
    fn test_round_trip_tolerance() {
        // Sampled lattice of the RGB cube: conversion there and back must
        // land within 1 per channel.
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let original = Rgb::new(r as u8, g as u8, b as u8);
                    let back = Hsv::from_rgb(original).to_rgb();
                    for (orig, got) in original.to_bytes().iter().zip(back.to_bytes()) {
                        assert!(
                            (*orig as i32 - got as i32).abs() <= 1,
                            "round trip of {original:?} produced {back:?}"
                        );
                    }
                }
            }
        }
    }

    /// Cross-check hue/saturation/value against the `palette` crate's
    /// independent implementation (degrees rescaled to our [0, 255] hue).
    #[test]
    fn test_matches_palette_crate() {
        use palette::{FromColor, Hsv as PaletteHsv, Srgb};

        let samples = [
            (200u8, 30u8, 90u8),
            (13, 200, 255),
            (90, 90, 10),
            (255, 128, 0),
        ];
        for (r, g, b) in samples {
            let ours = Hsv::from_rgb(Rgb::new(r, g, b));
            let reference = PaletteHsv::from_color(Srgb::new(
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
            ));

            let ref_h = reference.hue.into_positive_degrees() / 360.0 * 255.0;
            let ref_s = reference.saturation * 255.0;
            let ref_v = reference.value * 255.0;

            assert!((ours.h - ref_h).abs() < 0.5, "hue mismatch for ({r},{g},{b})");
            assert!((ours.s - ref_s).abs() < 0.5, "saturation mismatch for ({r},{g},{b})");
            assert!((ours.v - ref_v).abs() < 0.5, "value mismatch for ({r},{g},{b})");
        }
    }
}
