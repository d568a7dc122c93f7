//! CIE XYZ and L\*a\*b\* conversion with a display-oriented remap.
//!
//! RGB goes through XYZ (sRGB gamma decode + the standard D65 matrix) and
//! then to L\*a\*b\*. The final remap -- L rescaled from [0, 100] to
//! [0, 255], a/b shifted by +128, everything clamped -- is NOT canonical
//! Lab. It exists so the components can be written into byte channels for
//! visualization, and it is a compatibility contract: do not "correct" it.

use super::rgb::Rgb;

/// Reference white point (D65), the denominators for Lab normalization.
const REF_WHITE: (f32, f32, f32) = (95.047, 100.0, 108.883);

/// A color in CIE XYZ, scaled by 100 (so Y of reference white is 100.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus value.
    pub x: f32,
    /// Y tristimulus value (luminance).
    pub y: f32,
    /// Z tristimulus value.
    pub z: f32,
}

impl Xyz {
    /// Convert an RGB pixel to XYZ.
    ///
    /// Channels are normalized to `[0, 1]`, gamma-decoded per sRGB
    /// (IEC 61966-2-1), scaled by 100, and run through the standard
    /// sRGB-to-XYZ matrix.
    pub fn from_rgb(rgb: Rgb) -> Self {
        fn decode(channel: f32) -> f32 {
            if channel > 0.04045 {
                ((channel + 0.055) / 1.055).powf(2.4)
            } else {
                channel / 12.92
            }
        }

        let r = decode(rgb.r as f32 / 255.0) * 100.0;
        let g = decode(rgb.g as f32 / 255.0) * 100.0;
        let b = decode(rgb.b as f32 / 255.0) * 100.0;

        Self {
            x: r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
            y: r * 0.2126729 + g * 0.7151522 + b * 0.072175,
            z: r * 0.0193339 + g * 0.119192 + b * 0.9503041,
        }
    }
}

/// A color in L\*a\*b\*, remapped onto the display scale `[0, 255]`.
///
/// # Example
///
/// ```
/// use raster_fx::{Lab, Rgb};
///
/// let white = Lab::from_rgb(Rgb::new(255, 255, 255));
/// assert!((white.l - 255.0).abs() < 0.5); // L* 100 remaps to 255
/// assert!((white.a - 128.0).abs() < 0.5); // neutral a*/b* land on 128
/// assert!((white.b - 128.0).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, remapped from [0, 100] to [0, 255] and clamped.
    pub l: f32,
    /// Green-red axis, shifted by +128 and clamped to [0, 255].
    pub a: f32,
    /// Blue-yellow axis, shifted by +128 and clamped to [0, 255].
    pub b: f32,
}

impl Lab {
    /// Convert an XYZ color to remapped L\*a\*b\*.
    ///
    /// Applies the CIE cube-root/linear piecewise function after
    /// normalizing against the D65 reference white, then the display remap
    /// described at module level.
    pub fn from_xyz(xyz: Xyz) -> Self {
        fn f(t: f32) -> f32 {
            if t > 0.008856 {
                t.powf(1.0 / 3.0)
            } else {
                7.787 * t + 16.0 / 116.0
            }
        }

        let x = f(xyz.x / REF_WHITE.0);
        let y = f(xyz.y / REF_WHITE.1);
        let z = f(xyz.z / REF_WHITE.2);

        let l = 116.0 * y - 16.0;
        let a = 500.0 * (x - y);
        let b = 200.0 * (y - z);

        Self {
            l: (l * 255.0 / 100.0).clamp(0.0, 255.0),
            a: (a + 128.0).clamp(0.0, 255.0),
            b: (b + 128.0).clamp(0.0, 255.0),
        }
    }

    /// Convert an RGB pixel to remapped L\*a\*b\* via XYZ.
    #[inline]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_xyz(Xyz::from_rgb(rgb))
    }
}
