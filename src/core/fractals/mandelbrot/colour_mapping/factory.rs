use crate::core::actions::generate_pixel_buffer::ports::colour_index_function::ColourIndexFunction;
use crate::core::actions::generate_pixel_buffer::ports::colouring_function::ColouringFunction;
use crate::core::actions::generate_pixel_buffer::ports::palette_function::PaletteFunction;
use crate::core::fractals::mandelbrot::colour_mapping::colouring::{
    continuous_iteration_count::ContinuousIterationCount, iteration_count::IterationCount,
    smooth_iteration_count::SmoothIterationCount,
};
use crate::core::fractals::mandelbrot::colour_mapping::index::simple_index::SimpleIndex;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    ColourIndexKind, ColouringKind, PaletteKind,
};
use crate::core::fractals::mandelbrot::colour_mapping::palettes::{
    cool::CoolPalette, hot::HotPalette, simple::SimplePalette,
};

#[must_use]
pub fn colouring_factory(kind: ColouringKind) -> Box<dyn ColouringFunction> {
    match kind {
        ColouringKind::IterationCount => Box::new(IterationCount),
        ColouringKind::ContinuousIterationCount => Box::new(ContinuousIterationCount),
        ColouringKind::SmoothIterationCount => Box::new(SmoothIterationCount),
    }
}

#[must_use]
pub fn colour_index_factory(kind: ColourIndexKind) -> Box<dyn ColourIndexFunction> {
    match kind {
        ColourIndexKind::SimpleIndex => Box::new(SimpleIndex),
    }
}

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> Box<dyn PaletteFunction> {
    match kind {
        PaletteKind::Simple => Box::new(SimplePalette),
        PaletteKind::Hot => Box::new(HotPalette::default()),
        PaletteKind::Cool => Box::new(CoolPalette::default()),
    }
}
