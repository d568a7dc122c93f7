//! FilterPipeline -- the ergonomic entry point for chaining transforms.
//!
//! [`Filter`] names every operation the engine offers, with its parameters;
//! [`FilterPipeline`] runs an ordered chain of them over a buffer. The
//! pipeline is a plain value the caller constructs and passes around --
//! there is no ambient converter or effect instance to configure first.

use crate::buffer::PixelBuffer;
use crate::channel::{self, Channel};
use crate::convert::{self, ChromaOverflow, ColorSpace};
use crate::effects;

use super::error::FxError;

/// A single buffer transform with its parameters.
///
/// Every variant maps one input buffer to one freshly allocated output
/// buffer of the same dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Grayscale with a brightness boost
    /// (see [`channel::DEFAULT_GRAYSCALE_BOOST`]).
    Grayscale {
        /// Multiplier applied to the luminance before clamping.
        boost: f32,
    },
    /// Per-channel brightness offset.
    Brightness {
        /// Amount added to each of R, G, B (may be negative).
        amount: f32,
    },
    /// Keep one channel, zero the other two.
    Extract {
        /// The channel to keep.
        channel: Channel,
    },
    /// Binarize one channel, zero the other two.
    ChannelThreshold {
        /// The channel to binarize.
        channel: Channel,
        /// Cutoff: values strictly above become 255.
        threshold: f32,
    },
    /// Visualize in a color space.
    Convert {
        /// Target space.
        space: ColorSpace,
    },
    /// Visualize in a color space with the space's threshold rule applied.
    ConvertThreshold {
        /// Target space.
        space: ColorSpace,
        /// Cutoff for the space's thresholded channel.
        threshold: f32,
        /// Out-of-range write-back policy (YCbCr only).
        overflow: ChromaOverflow,
    },
    /// Box blur.
    Blur {
        /// Blur level; kernel size is `2 * level + 1`.
        level: usize,
    },
    /// Grayscale pixelation.
    PixelateGray {
        /// Block side length in pixels.
        block_size: usize,
    },
    /// Color pixelation.
    PixelateColor {
        /// Block side length in pixels.
        block_size: usize,
    },
}

impl Filter {
    /// Apply this filter to a buffer, producing a new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Effects`] for a zero pixelation block size; every
    /// other filter is infallible once constructed.
    pub fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer, FxError> {
        let out = match *self {
            Filter::Grayscale { boost } => channel::to_grayscale(src, boost),
            Filter::Brightness { amount } => channel::adjust_brightness(src, amount),
            Filter::Extract { channel } => channel::extract_channel(src, channel),
            Filter::ChannelThreshold { channel, threshold } => {
                channel::apply_threshold(src, threshold, channel)
            }
            Filter::Convert { space } => convert::convert(src, space),
            Filter::ConvertThreshold {
                space,
                threshold,
                overflow,
            } => convert::convert_threshold(src, space, threshold, overflow),
            Filter::Blur { level } => effects::blur(src, level),
            Filter::PixelateGray { block_size } => effects::pixelate_gray(src, block_size)?,
            Filter::PixelateColor { block_size } => effects::pixelate_color(src, block_size)?,
        };
        Ok(out)
    }
}

/// An ordered chain of [`Filter`]s.
///
/// Built with consuming builder methods and executed with
/// [`run()`](Self::run), which takes `&self` so the pipeline is reusable
/// across buffers. The empty pipeline is the identity (modulo one buffer
/// copy).
///
/// # Example
///
/// ```
/// use raster_fx::{FilterPipeline, PixelBuffer};
///
/// let pipeline = FilterPipeline::new()
///     .grayscale(1.2)
///     .blur(1);
///
/// let src = PixelBuffer::from_pixels(1, 1, vec![10, 200, 30, 255]).unwrap();
/// let out = pipeline.run(&src).unwrap();
///
/// assert_eq!(out.width(), src.width());
/// assert_eq!(out.height(), src.height());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    filters: Vec<Filter>,
}

impl FilterPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary filter.
    pub fn push(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append a grayscale conversion.
    pub fn grayscale(self, boost: f32) -> Self {
        self.push(Filter::Grayscale { boost })
    }

    /// Append a brightness adjustment.
    pub fn brightness(self, amount: f32) -> Self {
        self.push(Filter::Brightness { amount })
    }

    /// Append a channel extraction.
    pub fn extract(self, channel: Channel) -> Self {
        self.push(Filter::Extract { channel })
    }

    /// Append a channel threshold.
    pub fn channel_threshold(self, channel: Channel, threshold: f32) -> Self {
        self.push(Filter::ChannelThreshold { channel, threshold })
    }

    /// Append a color space conversion.
    pub fn convert(self, space: ColorSpace) -> Self {
        self.push(Filter::Convert { space })
    }

    /// Append a thresholded color space conversion.
    pub fn convert_threshold(
        self,
        space: ColorSpace,
        threshold: f32,
        overflow: ChromaOverflow,
    ) -> Self {
        self.push(Filter::ConvertThreshold {
            space,
            threshold,
            overflow,
        })
    }

    /// Append a box blur.
    pub fn blur(self, level: usize) -> Self {
        self.push(Filter::Blur { level })
    }

    /// Append a grayscale pixelation.
    pub fn pixelate_gray(self, block_size: usize) -> Self {
        self.push(Filter::PixelateGray { block_size })
    }

    /// Append a color pixelation.
    pub fn pixelate_color(self, block_size: usize) -> Self {
        self.push(Filter::PixelateColor { block_size })
    }

    /// The filters in execution order.
    #[inline]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Number of filters in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run the chain over a buffer, producing a new buffer.
    ///
    /// Filters execute in insertion order; each consumes the previous
    /// output. The input buffer is never mutated.
    ///
    /// # Errors
    ///
    /// Propagates the first filter failure (see [`Filter::apply`]).
    pub fn run(&self, src: &PixelBuffer) -> Result<PixelBuffer, FxError> {
        let mut current = src.clone();
        for filter in &self.filters {
            current = filter.apply(&current)?;
        }
        Ok(current)
    }
}

impl FromIterator<Filter> for FilterPipeline {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}
