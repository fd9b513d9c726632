use crate::core::actions::generate_pixel_buffer::ports::colouring_function::ColouringFunction;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColouringKind;

/// Normalised iteration count, `u = N + 1 - ln(ln r / ln b) / ln p`.
///
/// Needs `r > b > 1` and `p > 1`; outside that domain, or when the result is
/// not finite, `u = N`.
#[derive(Debug, Default)]
pub struct SmoothIterationCount;

impl ColouringFunction for SmoothIterationCount {
    fn value(&self, result: &EscapeResult, bailout: f64, power: u32) -> f64 {
        let n = f64::from(result.escape_time);
        let r = result.last_modulus;

        if !result.escaped || !(r > bailout) || bailout <= 1.0 || power <= 1 {
            return n;
        }

        let u = n + 1.0 - (r.ln() / bailout.ln()).ln() / f64::from(power).ln();

        if u.is_finite() { u } else { n }
    }

    fn display_name(&self) -> &str {
        ColouringKind::SmoothIterationCount.display_name()
    }
}
