//! PNG to PixelBuffer bridge.
//!
//! The engine only speaks RGBA8, so decoding normalizes every PNG color
//! type (palette, grayscale, with or without alpha, 16-bit) down to RGBA8.
//! Encoding always writes 8-bit RGBA.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use raster_fx::PixelBuffer;

use crate::error::ScopeError;

/// Load a PNG file into an RGBA8 [`PixelBuffer`].
///
/// Palette and grayscale images are expanded, 16-bit channels are stripped
/// to 8 bits, and a missing alpha channel is filled with 255.
pub fn load_png(path: &Path) -> Result<PixelBuffer, ScopeError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    // Expand palette/low-bit-depth images and strip 16-bit channels so the
    // frame below is always 8-bit Grayscale/GrayscaleAlpha/Rgb/Rgba.
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder.read_info()?;
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data)?;
    data.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ScopeError::UnsupportedBitDepth(info.bit_depth));
    }

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data,
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        other => return Err(ScopeError::UnsupportedColorType(other)),
    };

    let buffer = PixelBuffer::from_pixels(info.width as usize, info.height as usize, rgba)
        .map_err(raster_fx::FxError::from)?;

    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        path = %path.display(),
        "Loaded PNG"
    );
    Ok(buffer)
}

/// Write a [`PixelBuffer`] to an RGBA8 PNG file.
pub fn save_png(path: &Path, buffer: &PixelBuffer) -> Result<(), ScopeError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        buffer.width() as u32,
        buffer.height() as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(buffer.pixels())?;
    writer.finish()?;

    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        path = %path.display(),
        "Wrote PNG"
    );
    Ok(())
}
