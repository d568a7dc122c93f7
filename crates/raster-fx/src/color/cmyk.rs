//! CMYK conversion scaled to the display range.

use super::rgb::Rgb;

/// A color in CMYK, with each ink fraction scaled to `[0, 255]`.
///
/// # Example
///
/// ```
/// use raster_fx::{Cmyk, Rgb};
///
/// let cyan = Cmyk::from_rgb(Rgb::new(0, 255, 255));
/// assert_eq!(cyan.c, 255.0);
/// assert_eq!(cyan.m, 0.0);
/// assert_eq!(cyan.y, 0.0);
/// assert_eq!(cyan.k, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    /// Cyan, scaled to [0, 255].
    pub c: f32,
    /// Magenta, scaled to [0, 255].
    pub m: f32,
    /// Yellow, scaled to [0, 255].
    pub y: f32,
    /// Black (key), scaled to [0, 255].
    pub k: f32,
}

impl Cmyk {
    /// Convert an RGB pixel to CMYK.
    ///
    /// `c`, `m`, `y` start as `1 - channel/255`; the key is their minimum,
    /// and the inks are rescaled by `(ink - k) / (1 - k)` so the black plate
    /// carries the shared component.
    ///
    /// Pure black (`k == 1`) would divide by zero; it is special-cased to
    /// zero ink and full key instead of letting NaN through.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let c = 1.0 - rgb.r as f32 / 255.0;
        let m = 1.0 - rgb.g as f32 / 255.0;
        let y = 1.0 - rgb.b as f32 / 255.0;
        let k = c.min(m).min(y);

        if k >= 1.0 {
            // pure black: the rescale denominator vanishes
            return Self {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 255.0,
            };
        }

        Self {
            c: (c - k) / (1.0 - k) * 255.0,
            m: (m - k) / (1.0 - k) * 255.0,
            y: (y - k) / (1.0 - k) * 255.0,
            k: k * 255.0,
        }
    }
}
