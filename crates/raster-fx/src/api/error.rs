//! Unified error type for the raster-fx public API.
//!
//! [`FxError`] wraps the module-level error types into a single enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::channel::ChannelError;
use crate::convert::ConvertError;
use crate::effects::EffectsError;

/// Unified error type for the raster-fx public API.
///
/// # Example
///
/// ```
/// use raster_fx::{Channel, FxError};
///
/// fn pick_channel(index: usize) -> Result<Channel, FxError> {
///     Ok(Channel::try_from(index)?)
/// }
///
/// assert!(pick_channel(1).is_ok());
/// assert!(pick_channel(7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    /// Pixel buffer construction failure (zero dimension, length mismatch).
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Channel selection failure (bad index or name).
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Color space selection failure (unknown name).
    #[error("color space error: {0}")]
    Convert(#[from] ConvertError),

    /// Spatial filter parameter failure (zero block size).
    #[error("effects error: {0}")]
    Effects(#[from] EffectsError),
}
