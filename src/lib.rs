//! Pixelscope - color space explorer for still images
//!
//! Thin front end around the raster-fx engine: PNG in, filter chain, PNG out.
//! This library exposes modules for integration testing.

pub mod error;
pub mod io;
pub mod presets;

pub use error::ScopeError;
