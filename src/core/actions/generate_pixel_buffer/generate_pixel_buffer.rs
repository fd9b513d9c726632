use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData};
use crate::core::errors::RenderError;

/// Generates a pixel buffer by mapping input values to colours, one after
/// the other.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, RenderError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for value in input {
        let Colour { r, g, b } = mapper.map(value)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(width, height, buffer)?)
}

/// Parallel form of [`generate_pixel_buffer`]. Each value is mapped on its
/// own; rayon's indexed collect keeps the input order, so the bytes are
/// identical to the serial result.
pub fn generate_pixel_buffer_parallel<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, RenderError>
where
    T: Send,
    CMap: ColourMap<T>,
{
    let colours: Vec<Colour> = input
        .into_par_iter()
        .map(|value| mapper.map(value))
        .collect::<Result<_, _>>()?;

    let buffer: PixelBufferData = colours
        .into_iter()
        .flat_map(Colour::to_array)
        .collect();

    Ok(PixelBuffer::from_data(width, height, buffer)?)
}
