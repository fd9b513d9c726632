use crate::core::actions::generate_pixel_buffer::ports::colour_index_function::ColourIndexFunction;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourIndexKind;

/// `I = u / max_iter`, unclamped.
#[derive(Debug, Default)]
pub struct SimpleIndex;

impl ColourIndexFunction for SimpleIndex {
    fn index(&self, value: f64, max_iter: u32) -> f64 {
        value / f64::from(max_iter)
    }

    fn display_name(&self) -> &str {
        ColourIndexKind::SimpleIndex.display_name()
    }
}
