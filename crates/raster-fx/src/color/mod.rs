//! Per-pixel color converters.
//!
//! Each submodule defines a value type for one target color space with a
//! `from_rgb` constructor. The converters are pure functions of a single
//! pixel: no buffer awareness, no shared state.
//!
//! # Scaling Convention
//!
//! Unlike canonical definitions of these spaces, every component here lives
//! on (or near) the display scale `[0, 255]`, because the converted values
//! are written straight back into RGBA byte slots for visualization:
//!
//! | Space | Components | Range notes |
//! |-------|------------|-------------|
//! | HSV | h, s, v | all scaled to [0, 255] |
//! | L\*a\*b\* | l, a, b | L rescaled from [0, 100], a/b shifted by +128; all clamped |
//! | CMYK | c, m, y, k | ink fractions scaled to [0, 255] |
//! | YCbCr | y, cb, cr | BT.601 full-range; **not clamped** |
//!
//! The L\*a\*b\* remap is a display-oriented compatibility contract, not the
//! canonical Lab range. YCbCr components are deliberately left unclamped;
//! clamping happens at buffer write-back.

mod cmyk;
mod hsv;
mod lab;
mod rgb;
mod ycbcr;

pub use cmyk::Cmyk;
pub use hsv::Hsv;
pub use lab::{Lab, Xyz};
pub use rgb::Rgb;
pub use ycbcr::YCbCr;
