//! YCbCr conversion (BT.601 full range).

use super::rgb::Rgb;

/// A color in YCbCr, components on the display scale but **not clamped**.
///
/// Luma uses the BT.601 weights; the chroma channels are centered on 128.
/// Values are intentionally left unclamped here -- clamping (or wrapping)
/// is the buffer write-back's decision, because one transform deliberately
/// pushes chroma past 255.
///
/// # Example
///
/// ```
/// use raster_fx::{Rgb, YCbCr};
///
/// let gray = YCbCr::from_rgb(Rgb::new(128, 128, 128));
/// assert!((gray.y - 128.0).abs() < 0.01);
/// assert!((gray.cb - 128.0).abs() < 0.01); // neutral chroma
/// assert!((gray.cr - 128.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCr {
    /// Luma (0..=255 for in-gamut input).
    pub y: f32,
    /// Blue-difference chroma, centered on 128.
    pub cb: f32,
    /// Red-difference chroma, centered on 128.
    pub cr: f32,
}

impl YCbCr {
    /// Convert an RGB pixel to YCbCr.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f32;
        let g = rgb.g as f32;
        let b = rgb.b as f32;

        Self {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            cb: -0.168736 * r - 0.331264 * g + 0.5 * b + 128.0,
            cr: 0.5 * r - 0.418688 * g - 0.081312 * b + 128.0,
        }
    }
}
