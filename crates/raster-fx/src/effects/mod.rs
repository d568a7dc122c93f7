//! Spatial filters: box blur and pixelation.
//!
//! Unlike the per-pixel transforms, these read a neighborhood around each
//! output pixel. Neither wraps nor clamps coordinates at the image edge:
//!
//! - **Blur** skips out-of-bounds samples without renormalizing the kernel,
//!   so boundary pixels receive a slightly darker, softer average. That
//!   artifact is part of the contract -- do not "fix" it by renormalizing.
//! - **Pixelation** clips edge blocks at the image bounds and averages only
//!   the pixels that exist.

mod kernel;

pub use kernel::BoxKernel;

use thiserror::Error;

use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::convert::quantize;

/// Error type for the spatial filters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectsError {
    /// Pixelation block size was zero; a zero block would never advance.
    #[error("block size must be at least 1")]
    ZeroBlockSize,
}

/// Box blur by convolution with a uniform [`BoxKernel`].
///
/// For every pixel the kernel's weighted sum of the neighboring R, G, B
/// values is computed from the *source* buffer; samples falling outside the
/// image are excluded from the sum (not wrapped, not clamped to the edge),
/// which darkens boundary pixels slightly. Output alpha is forced to 255.
///
/// Level 0 uses the 1x1 identity kernel, reproducing the input values
/// (with opaque alpha).
pub fn blur(src: &PixelBuffer, level: usize) -> PixelBuffer {
    let kernel = BoxKernel::new(level);
    let radius = kernel.radius() as isize;
    let width = src.width() as isize;
    let height = src.height() as isize;
    let pixels = src.pixels();

    let mut out = vec![0u8; pixels.len()];
    for y in 0..height {
        for x in 0..width {
            let mut red = 0.0f32;
            let mut green = 0.0f32;
            let mut blue = 0.0f32;

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let sx = x + dx;
                    let sy = y + dy;
                    if sx < 0 || sx >= width || sy < 0 || sy >= height {
                        continue;
                    }
                    let i = (sy * width + sx) as usize * BYTES_PER_PIXEL;
                    red += pixels[i] as f32 * kernel.weight();
                    green += pixels[i + 1] as f32 * kernel.weight();
                    blue += pixels[i + 2] as f32 * kernel.weight();
                }
            }

            let i = (y * width + x) as usize * BYTES_PER_PIXEL;
            out[i] = quantize(red);
            out[i + 1] = quantize(green);
            out[i + 2] = quantize(blue);
            out[i + 3] = 255;
        }
    }

    PixelBuffer::from_raw_parts(src.width(), src.height(), out)
}

/// Grayscale pixelation: block-average intensity.
///
/// Partitions the image into `block_size x block_size` blocks (edge blocks
/// are clipped at the image bounds), averages `(r + g + b) / 3` over each
/// block's valid pixels, and writes that single value into R, G, and B of
/// every pixel in the block. Alpha is forced to 255.
///
/// # Errors
///
/// Returns [`EffectsError::ZeroBlockSize`] if `block_size` is zero.
pub fn pixelate_gray(src: &PixelBuffer, block_size: usize) -> Result<PixelBuffer, EffectsError> {
    if block_size == 0 {
        return Err(EffectsError::ZeroBlockSize);
    }

    let width = src.width();
    let height = src.height();
    let pixels = src.pixels();
    let mut out = pixels.to_vec();

    for block_y in (0..height).step_by(block_size) {
        for block_x in (0..width).step_by(block_size) {
            let y_end = (block_y + block_size).min(height);
            let x_end = (block_x + block_size).min(width);

            let mut total = 0.0f32;
            let mut count = 0u32;
            for y in block_y..y_end {
                for x in block_x..x_end {
                    let i = (y * width + x) * BYTES_PER_PIXEL;
                    total +=
                        (pixels[i] as f32 + pixels[i + 1] as f32 + pixels[i + 2] as f32) / 3.0;
                    count += 1;
                }
            }
            let average = quantize(total / count as f32);

            for y in block_y..y_end {
                for x in block_x..x_end {
                    let i = (y * width + x) * BYTES_PER_PIXEL;
                    out[i] = average;
                    out[i + 1] = average;
                    out[i + 2] = average;
                    out[i + 3] = 255;
                }
            }
        }
    }

    Ok(PixelBuffer::from_raw_parts(width, height, out))
}

/// Color pixelation: independent per-channel block averages.
///
/// Same partitioning as [`pixelate_gray`], but R, G, and B are averaged
/// separately and the block is painted with the resulting uniform color.
/// Alpha is left untouched.
///
/// # Errors
///
/// Returns [`EffectsError::ZeroBlockSize`] if `block_size` is zero.
pub fn pixelate_color(src: &PixelBuffer, block_size: usize) -> Result<PixelBuffer, EffectsError> {
    if block_size == 0 {
        return Err(EffectsError::ZeroBlockSize);
    }

    let width = src.width();
    let height = src.height();
    let pixels = src.pixels();
    let mut out = pixels.to_vec();

    for block_y in (0..height).step_by(block_size) {
        for block_x in (0..width).step_by(block_size) {
            let y_end = (block_y + block_size).min(height);
            let x_end = (block_x + block_size).min(width);

            let mut total = [0.0f32; 3];
            let mut count = 0u32;
            for y in block_y..y_end {
                for x in block_x..x_end {
                    let i = (y * width + x) * BYTES_PER_PIXEL;
                    total[0] += pixels[i] as f32;
                    total[1] += pixels[i + 1] as f32;
                    total[2] += pixels[i + 2] as f32;
                    count += 1;
                }
            }
            let average = total.map(|sum| quantize(sum / count as f32));

            for y in block_y..y_end {
                for x in block_x..x_end {
                    let i = (y * width + x) * BYTES_PER_PIXEL;
                    out[i] = average[0];
                    out[i + 1] = average[1];
                    out[i + 2] = average[2];
                }
            }
        }
    }

    Ok(PixelBuffer::from_raw_parts(width, height, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 buffer, opaque, every pixel's channels set by a closure.
    fn build_4x4(f: impl Fn(usize, usize) -> [u8; 3]) -> PixelBuffer {
        let mut pixels = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                let [r, g, b] = f(x, y);
                pixels.extend_from_slice(&[r, g, b, 255]);
            }
        }
        PixelBuffer::from_pixels(4, 4, pixels).unwrap()
    }

    #[test]
    fn test_blur_uniform_image_is_unchanged_interior_and_edge() {
        // A constant image is a fixed point of box blur only away from the
        // edges: skipped out-of-bounds samples shrink the boundary sums.
        let src = build_4x4(|_, _| [90, 90, 90]);
        let out = blur(&src, 1);

        // Interior pixel: full 3x3 neighborhood -> exact average
        assert_eq!(out.rgba(1, 1), [90, 90, 90, 255]);
        assert_eq!(out.rgba(2, 2), [90, 90, 90, 255]);

        // Corner pixel: only 4 of 9 samples exist -> 90 * 4/9 = 40
        assert_eq!(out.rgba(0, 0), [40, 40, 40, 255]);

        // Edge (non-corner) pixel: 6 of 9 samples -> 90 * 6/9 = 60
        assert_eq!(out.rgba(1, 0), [60, 60, 60, 255]);
    }

    #[test]
    fn test_blur_level_zero_is_identity() {
        let src = build_4x4(|x, y| [(x * 40) as u8, (y * 40) as u8, 123]);
        let out = blur(&src, 0);
        assert_eq!(out, src);
    }

    #[test]
    fn test_blur_averages_neighborhood() {
        // Single white pixel on black: the 3x3 blur spreads 255/9 = 28.33 -> 28
        let src = build_4x4(|x, y| if (x, y) == (1, 1) { [255, 255, 255] } else { [0, 0, 0] });
        let out = blur(&src, 1);

        assert_eq!(out.rgba(1, 1)[0], 28);
        assert_eq!(out.rgba(2, 2)[0], 28); // diagonal neighbor sees it too
        assert_eq!(out.rgba(3, 3)[0], 0); // out of kernel reach
    }

    #[test]
    fn test_pixelate_gray_blocks() {
        // Left 2x4 half dark, right half bright; block size 2 aligns with the
        // halves, so each block averages to its own intensity.
        let src = build_4x4(|x, _| if x < 2 { [30, 30, 30] } else { [210, 210, 210] });
        let out = pixelate_gray(&src, 2).unwrap();

        assert_eq!(out.rgba(0, 0), [30, 30, 30, 255]);
        assert_eq!(out.rgba(1, 1), [30, 30, 30, 255]);
        assert_eq!(out.rgba(2, 0), [210, 210, 210, 255]);
        assert_eq!(out.rgba(3, 3), [210, 210, 210, 255]);
    }

    #[test]
    fn test_pixelate_gray_averages_intensity() {
        // One block: half black, half white -> (0 + 255) / 2 = 127.5 -> 128
        let src = build_4x4(|x, _| if x % 2 == 0 { [0, 0, 0] } else { [255, 255, 255] });
        let out = pixelate_gray(&src, 4).unwrap();
        assert_eq!(out.rgba(0, 0)[0], 128);
        assert_eq!(out.rgba(3, 3)[0], 128);
    }

    #[test]
    fn test_pixelate_color_keeps_channels_independent() {
        // Alternating red and blue columns -> block average is half red, half blue
        let src = build_4x4(|x, _| if x % 2 == 0 { [200, 0, 0] } else { [0, 0, 100] });
        let out = pixelate_color(&src, 4).unwrap();

        assert_eq!(out.rgba(0, 0), [100, 0, 50, 255]);
        assert_eq!(out.rgba(2, 3), [100, 0, 50, 255]);
    }

    #[test]
    fn test_pixelate_color_preserves_alpha() {
        let mut pixels = Vec::new();
        for i in 0..4 {
            pixels.extend_from_slice(&[10, 20, 30, 50 + i as u8]);
        }
        let src = PixelBuffer::from_pixels(2, 2, pixels).unwrap();
        let out = pixelate_color(&src, 2).unwrap();

        // Color flattened, per-pixel alpha intact
        assert_eq!(out.rgba(0, 0)[3], 50);
        assert_eq!(out.rgba(1, 1)[3], 53);
    }

    #[test]
    fn test_pixelate_clips_edge_blocks() {
        // 4x4 image, block size 3: edge blocks are 3x1, 1x3, and 1x1. The
        // lone corner block must average exactly its single pixel.
        let src = build_4x4(|x, y| if (x, y) == (3, 3) { [77, 77, 77] } else { [0, 0, 0] });
        let out = pixelate_gray(&src, 3).unwrap();
        assert_eq!(out.rgba(3, 3)[0], 77);
    }

    #[test]
    fn test_zero_block_size_is_an_error() {
        let src = build_4x4(|_, _| [1, 2, 3]);
        assert_eq!(pixelate_gray(&src, 0), Err(EffectsError::ZeroBlockSize));
        assert_eq!(pixelate_color(&src, 0), Err(EffectsError::ZeroBlockSize));
    }
}
