use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::RenderError;

/// Encodes an RGB pixel buffer as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();

    PngEncoder::new(&mut bytes).write_image(
        buffer.buffer(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgb8,
    )?;

    Ok(bytes)
}

/// A `size x size` PNG of a single colour.
pub fn solid_tile_png(size: u32, colour: Colour) -> Result<Vec<u8>, RenderError> {
    encode_png(&PixelBuffer::filled(size, size, colour))
}
