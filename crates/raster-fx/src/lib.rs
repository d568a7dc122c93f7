//! raster-fx: color space conversion and pixel effects for RGBA rasters
//!
//! This library turns a still RGBA pixel buffer into visualizations of the
//! same scene in other color spaces, per-channel projections, and spatial
//! effects. Every operation is a pure function from one [`PixelBuffer`] to
//! a freshly allocated one; nothing here knows about capture devices,
//! displays, or files.
//!
//! # Quick Start
//!
//! The [`FilterPipeline`] builder is the primary entry point:
//!
//! ```
//! use raster_fx::{FilterPipeline, PixelBuffer};
//!
//! let src = PixelBuffer::from_pixels(2, 2, vec![
//!     200, 30, 30, 255,   30, 200, 30, 255,
//!     30, 30, 200, 255,   200, 200, 200, 255,
//! ]).unwrap();
//!
//! let out = FilterPipeline::new()
//!     .grayscale(1.2)
//!     .pixelate_gray(2)
//!     .run(&src)
//!     .unwrap();
//!
//! assert_eq!(out.width(), 2);
//! assert_eq!(out.height(), 2);
//! ```
//!
//! Individual transforms are also exposed as free functions in
//! [`convert`], [`channel`], and [`effects`] for callers that do not need
//! a chain.
//!
//! # Color Space Visualizations
//!
//! The conversions in [`convert`] do not produce storable images in the
//! target space; they write the converted components straight into the RGBA
//! byte slots so the structure of each space can be *seen*:
//!
//! | Space | What lands in R, G, B (and A) |
//! |-------|-------------------------------|
//! | HSV | hue, saturation, value |
//! | L\*a\*b\* | remapped L\*, a\* + 128, b\* + 128 |
//! | CMYK | cyan, magenta, yellow -- key overwrites alpha |
//! | YCbCr | luma, Cb, Cr -- alpha forced opaque |
//!
//! All components are rescaled onto `[0, 255]` for this purpose; see
//! [`color`] for the exact scaling of each space.
//!
//! # Contractual Quirks
//!
//! Several behaviors are deliberate compatibility contracts, documented at
//! their definition sites and guarded by regression tests:
//!
//! - Threshold polarity differs between spaces (HSV binarizes `v > t` to
//!   255; Lab and CMYK send `< t` to 0), and CMYK thresholds only the cyan
//!   plate.
//! - The YCbCr threshold amplifies chroma past 255 instead of binarizing
//!   luma; callers pick [`ChromaOverflow::Clamp`] or
//!   [`ChromaOverflow::Wrap`] for the write-back.
//! - Box blur skips out-of-bounds samples without renormalizing, slightly
//!   darkening edges.

pub mod api;
pub mod buffer;
pub mod channel;
pub mod color;
pub mod convert;
pub mod effects;

#[cfg(test)]
mod domain_tests;

pub use api::{Filter, FilterPipeline, FxError};
pub use buffer::{BufferError, PixelBuffer};
pub use channel::{Channel, ChannelError};
pub use color::{Cmyk, Hsv, Lab, Rgb, Xyz, YCbCr};
pub use convert::{ChromaOverflow, ColorSpace, ConvertError};
pub use effects::{BoxKernel, EffectsError};
