use crate::core::actions::generate_pixel_buffer::ports::palette_function::PaletteFunction;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::colour_mapping::palettes::bands::{Band, band};

pub const DEFAULT_HOT_GAIN: f64 = 2.5;
pub const DEFAULT_HOT_OFFSET: f64 = 0.0;

/// Black, red, yellow, white. Band 1 ramps red, band 2 ramps green over full
/// red, band 3 ramps blue over full red and green.
#[derive(Debug)]
pub struct HotPalette {
    gain: f64,
    offset: f64,
}

impl HotPalette {
    #[must_use]
    pub fn new(gain: f64, offset: f64) -> Self {
        Self { gain, offset }
    }
}

impl Default for HotPalette {
    fn default() -> Self {
        Self::new(DEFAULT_HOT_GAIN, DEFAULT_HOT_OFFSET)
    }
}

impl PaletteFunction for HotPalette {
    fn colour(&self, index: f64) -> Colour {
        match band(index, self.gain, self.offset) {
            Band::First(ramp) => Colour::from_unit_rgb(ramp, 0.0, 0.0),
            Band::Second(ramp) => Colour::from_unit_rgb(1.0, ramp, 0.0),
            Band::Third(ramp) => Colour::from_unit_rgb(1.0, 1.0, ramp),
        }
    }

    fn display_name(&self) -> &str {
        PaletteKind::Hot.display_name()
    }
}
