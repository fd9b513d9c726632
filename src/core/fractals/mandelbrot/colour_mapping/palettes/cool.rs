use crate::core::actions::generate_pixel_buffer::ports::palette_function::PaletteFunction;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::colour_mapping::palettes::bands::{Band, band};

pub const DEFAULT_COOL_GAIN: f64 = 2.5;
pub const DEFAULT_COOL_OFFSET: f64 = 0.0;

/// Blue, cyan, green, yellow-green. Red only enters in the last band.
#[derive(Debug)]
pub struct CoolPalette {
    gain: f64,
    offset: f64,
}

impl CoolPalette {
    #[must_use]
    pub fn new(gain: f64, offset: f64) -> Self {
        Self { gain, offset }
    }
}

impl Default for CoolPalette {
    fn default() -> Self {
        Self::new(DEFAULT_COOL_GAIN, DEFAULT_COOL_OFFSET)
    }
}

impl PaletteFunction for CoolPalette {
    fn colour(&self, index: f64) -> Colour {
        match band(index, self.gain, self.offset) {
            Band::First(ramp) => Colour::from_unit_rgb(0.0, ramp, 1.0),
            Band::Second(ramp) => Colour::from_unit_rgb(0.0, 1.0, 1.0 - ramp),
            Band::Third(ramp) => Colour::from_unit_rgb(ramp, 1.0, 0.0),
        }
    }

    fn display_name(&self) -> &str {
        PaletteKind::Cool.display_name()
    }
}
