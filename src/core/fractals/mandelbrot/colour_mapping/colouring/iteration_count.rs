use crate::core::actions::generate_pixel_buffer::ports::colouring_function::ColouringFunction;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColouringKind;

/// `u = N`, the raw escape time.
#[derive(Debug, Default)]
pub struct IterationCount;

impl ColouringFunction for IterationCount {
    fn value(&self, result: &EscapeResult, _bailout: f64, _power: u32) -> f64 {
        f64::from(result.escape_time)
    }

    fn display_name(&self) -> &str {
        ColouringKind::IterationCount.display_name()
    }
}
