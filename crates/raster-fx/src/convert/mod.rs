//! Whole-buffer color space transforms.
//!
//! These functions map a converter from [`crate::color`] over every pixel of
//! a [`PixelBuffer`], producing a new buffer with the converted components
//! written into the RGBA byte slots. This is a visualization trick, not a
//! storage format: the output buffer still claims to be RGBA, and is not
//! re-composited back to RGB.
//!
//! # Channel Placement
//!
//! | Transform | R | G | B | A |
//! |-----------|---|---|---|---|
//! | HSV | h | s | v | source alpha |
//! | L\*a\*b\* | l | a | b | source alpha |
//! | CMYK | c | m | y | k |
//! | YCbCr | y | cb | cr | 255 |
//!
//! # Threshold Polarity
//!
//! The threshold variants binarize exactly one channel each, and their
//! comparison directions are intentionally inconsistent with one another:
//! HSV maps `v > t` to 255, while Lab and CMYK map `l < t` (resp. `c < t`)
//! to 0. The asymmetry is a compatibility contract carried over from the
//! behavior these transforms visualize; unifying the polarity would change
//! every rendered image.

use std::str::FromStr;

use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::color::{Cmyk, Hsv, Lab, Rgb, YCbCr};

/// Default threshold for the HSV value channel.
pub const DEFAULT_HSV_THRESHOLD: f32 = 125.0;

/// Default threshold for the Lab, CMYK, and YCbCr variants.
pub const DEFAULT_THRESHOLD: f32 = 128.0;

/// Error type for color space selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The color space name did not match any supported space.
    #[error("unknown color space {0:?} (expected hsv, lab, cmyk, or ycbcr)")]
    UnknownSpace(String),
}

/// The color spaces a buffer can be visualized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Hue / saturation / value.
    Hsv,
    /// CIE L\*a\*b\* (display-remapped).
    Lab,
    /// Cyan / magenta / yellow / key.
    Cmyk,
    /// BT.601 luma + chroma.
    Ycbcr,
}

impl ColorSpace {
    /// All supported spaces, in display order.
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Hsv,
        ColorSpace::Lab,
        ColorSpace::Cmyk,
        ColorSpace::Ycbcr,
    ];

    /// Lowercase name used on the command line and in preset files.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Hsv => "hsv",
            ColorSpace::Lab => "lab",
            ColorSpace::Cmyk => "cmyk",
            ColorSpace::Ycbcr => "ycbcr",
        }
    }
}

impl FromStr for ColorSpace {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsv" => Ok(ColorSpace::Hsv),
            "lab" => Ok(ColorSpace::Lab),
            "cmyk" => Ok(ColorSpace::Cmyk),
            "ycbcr" => Ok(ColorSpace::Ycbcr),
            other => Err(ConvertError::UnknownSpace(other.to_string())),
        }
    }
}

/// How to write back chroma values the YCbCr threshold pushed past 255.
///
/// The amplification quirk in [`to_ycbcr_threshold`] produces values up to
/// 510, which an 8-bit channel cannot hold. Callers choose the resolution
/// instead of the engine guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromaOverflow {
    /// Saturate at 255 -- what a clamped display surface shows.
    #[default]
    Clamp,
    /// Truncate modulo 256 -- raw byte wraparound.
    Wrap,
}

impl ChromaOverflow {
    /// Write an (possibly out-of-range) chroma value into a byte.
    #[inline]
    fn write(self, value: f32) -> u8 {
        match self {
            ChromaOverflow::Clamp => quantize(value),
            ChromaOverflow::Wrap => (value.round() as i64).rem_euclid(256) as u8,
        }
    }
}

/// Round and clamp a display-scale component into a byte.
#[inline]
pub(crate) fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Map a per-pixel function over a buffer, producing a new buffer.
fn map_rgba(src: &PixelBuffer, f: impl Fn([u8; 4]) -> [u8; 4]) -> PixelBuffer {
    let mut out = Vec::with_capacity(src.pixels().len());
    for px in src.pixels().chunks_exact(4) {
        let [r, g, b, a] = [px[0], px[1], px[2], px[3]];
        out.extend_from_slice(&f([r, g, b, a]));
    }
    PixelBuffer::from_raw_parts(src.width(), src.height(), out)
}

/// Visualize a buffer in HSV: h, s, v land in R, G, B; alpha is untouched.
pub fn to_hsv(src: &PixelBuffer) -> PixelBuffer {
    map_rgba(src, |[r, g, b, a]| {
        let hsv = Hsv::from_rgb(Rgb::new(r, g, b));
        [quantize(hsv.h), quantize(hsv.s), quantize(hsv.v), a]
    })
}

/// HSV visualization with the value channel binarized: `v > threshold`
/// becomes 255, everything else 0.
pub fn to_hsv_threshold(src: &PixelBuffer, threshold: f32) -> PixelBuffer {
    map_rgba(src, |[r, g, b, a]| {
        let hsv = Hsv::from_rgb(Rgb::new(r, g, b));
        let v = if hsv.v > threshold { 255.0 } else { 0.0 };
        [quantize(hsv.h), quantize(hsv.s), quantize(v), a]
    })
}

/// Visualize a buffer in remapped L\*a\*b\*: l, a, b land in R, G, B.
pub fn to_lab(src: &PixelBuffer) -> PixelBuffer {
    map_rgba(src, |[r, g, b, a]| {
        let lab = Lab::from_rgb(Rgb::new(r, g, b));
        [quantize(lab.l), quantize(lab.a), quantize(lab.b), a]
    })
}

/// Lab visualization with lightness binarized: `l < threshold` becomes 0,
/// everything else 255. Note the polarity is inverted relative to HSV.
pub fn to_lab_threshold(src: &PixelBuffer, threshold: f32) -> PixelBuffer {
    map_rgba(src, |[r, g, b, a]| {
        let lab = Lab::from_rgb(Rgb::new(r, g, b));
        let l = if lab.l < threshold { 0.0 } else { 255.0 };
        [quantize(l), quantize(lab.a), quantize(lab.b), a]
    })
}

/// Visualize a buffer in CMYK: c, m, y, k land in R, G, B, A.
///
/// The key plate overwrites alpha, so the output is generally not viewable
/// as straight RGBA -- that is the point of the visualization.
pub fn to_cmyk(src: &PixelBuffer) -> PixelBuffer {
    map_rgba(src, |[r, g, b, _a]| {
        let cmyk = Cmyk::from_rgb(Rgb::new(r, g, b));
        [
            quantize(cmyk.c),
            quantize(cmyk.m),
            quantize(cmyk.y),
            quantize(cmyk.k),
        ]
    })
}

/// CMYK visualization with only the cyan plate binarized: `c < threshold`
/// becomes 0, everything else 255. Magenta, yellow, and key pass through.
pub fn to_cmyk_threshold(src: &PixelBuffer, threshold: f32) -> PixelBuffer {
    map_rgba(src, |[r, g, b, _a]| {
        let cmyk = Cmyk::from_rgb(Rgb::new(r, g, b));
        let c = if cmyk.c < threshold { 0.0 } else { 255.0 };
        [
            quantize(c),
            quantize(cmyk.m),
            quantize(cmyk.y),
            quantize(cmyk.k),
        ]
    })
}

/// Visualize a buffer in YCbCr: y, cb, cr land in R, G, B; alpha is forced
/// to 255.
pub fn to_ycbcr(src: &PixelBuffer) -> PixelBuffer {
    map_rgba(src, |[r, g, b, _a]| {
        let ycbcr = YCbCr::from_rgb(Rgb::new(r, g, b));
        [
            quantize(ycbcr.y),
            quantize(ycbcr.cb),
            quantize(ycbcr.cr),
            255,
        ]
    })
}

/// YCbCr visualization with chroma amplification above a luma threshold.
///
/// Luma itself is never binarized. Where `y > threshold`, the chroma slots
/// are rewritten as `min(source_byte * 1.1, 255) * 2`, reading the source
/// bytes the chroma channels are about to overwrite (green for Cb, blue for
/// Cr). The result ranges up to 510; `overflow` decides how it lands in the
/// byte.
pub fn to_ycbcr_threshold(
    src: &PixelBuffer,
    threshold: f32,
    overflow: ChromaOverflow,
) -> PixelBuffer {
    map_rgba(src, |[r, g, b, _a]| {
        let ycbcr = YCbCr::from_rgb(Rgb::new(r, g, b));
        let (cb, cr) = if ycbcr.y > threshold {
            (
                (g as f32 * 1.1).min(255.0) * 2.0,
                (b as f32 * 1.1).min(255.0) * 2.0,
            )
        } else {
            (ycbcr.cb, ycbcr.cr)
        };
        [quantize(ycbcr.y), overflow.write(cb), overflow.write(cr), 255]
    })
}

/// Dispatch a plain conversion by [`ColorSpace`].
pub fn convert(src: &PixelBuffer, space: ColorSpace) -> PixelBuffer {
    match space {
        ColorSpace::Hsv => to_hsv(src),
        ColorSpace::Lab => to_lab(src),
        ColorSpace::Cmyk => to_cmyk(src),
        ColorSpace::Ycbcr => to_ycbcr(src),
    }
}

/// Dispatch a threshold conversion by [`ColorSpace`].
///
/// `overflow` only affects [`ColorSpace::Ycbcr`]; the other spaces never
/// produce out-of-range values at write-back.
pub fn convert_threshold(
    src: &PixelBuffer,
    space: ColorSpace,
    threshold: f32,
    overflow: ChromaOverflow,
) -> PixelBuffer {
    match space {
        ColorSpace::Hsv => to_hsv_threshold(src, threshold),
        ColorSpace::Lab => to_lab_threshold(src, threshold),
        ColorSpace::Cmyk => to_cmyk_threshold(src, threshold),
        ColorSpace::Ycbcr => to_ycbcr_threshold(src, threshold, overflow),
    }
}
