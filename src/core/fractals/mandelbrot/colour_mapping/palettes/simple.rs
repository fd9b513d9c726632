use crate::core::actions::generate_pixel_buffer::ports::palette_function::PaletteFunction;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;

/// Grayscale: `clamp(I, 0, 1) * 255`, rounded, on all three channels.
#[derive(Debug, Default)]
pub struct SimplePalette;

impl PaletteFunction for SimplePalette {
    fn colour(&self, index: f64) -> Colour {
        Colour::from_unit_rgb(index, index, index)
    }

    fn display_name(&self) -> &str {
        PaletteKind::Simple.display_name()
    }
}
