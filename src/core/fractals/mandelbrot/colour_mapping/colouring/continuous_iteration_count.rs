use crate::core::actions::generate_pixel_buffer::ports::colouring_function::ColouringFunction;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColouringKind;

/// `u = N + 1 - (r^p - b^p) / (r^p - b)` for escaped orbits, where `r` is the
/// modulus of the first iterate past the bailout `b`.
///
/// Anything that is not a clean escape (still bounded, `r <= b`, or a
/// non-finite result) falls back to `u = N`.
#[derive(Debug, Default)]
pub struct ContinuousIterationCount;

impl ColouringFunction for ContinuousIterationCount {
    fn value(&self, result: &EscapeResult, bailout: f64, power: u32) -> f64 {
        let n = f64::from(result.escape_time);
        let r = result.last_modulus;

        if !result.escaped || !(r > bailout) {
            return n;
        }

        let p = f64::from(power);
        let r_p = r.powf(p);
        let u = n + 1.0 - (r_p - bailout.powf(p)) / (r_p - bailout);

        if u.is_finite() { u } else { n }
    }

    fn display_name(&self) -> &str {
        ColouringKind::ContinuousIterationCount.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_escaped_value() {
        // r = 3, b = 2, p = 2: 5 + 1 - (9 - 4) / (9 - 2) = 6 - 5/7
        let result = EscapeResult::escaped_at(5, Complex::new(3.0, 0.0), Complex::new(1.5, 0.0));
        let u = ContinuousIterationCount.value(&result, 2.0, 2);

        assert!((u - (6.0 - 5.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_orbit_returns_escape_time() {
        let result = EscapeResult::bounded(40, Complex::new(0.2, 0.1), Complex::ZERO);

        assert_eq!(ContinuousIterationCount.value(&result, 2.0, 2), 40.0);
    }

    #[test]
    fn test_modulus_at_or_below_bailout_returns_escape_time() {
        let mut result = EscapeResult::escaped_at(9, Complex::new(2.0, 0.0), Complex::ZERO);
        assert_eq!(ContinuousIterationCount.value(&result, 2.0, 2), 9.0);

        result.last_modulus = 1.0;
        assert_eq!(ContinuousIterationCount.value(&result, 2.0, 2), 9.0);
    }

    #[test]
    fn test_degenerate_denominator_returns_escape_time() {
        // b = 0.25, r = 0.5, p = 2: r^p - b == 0
        let result = EscapeResult::escaped_at(3, Complex::new(0.5, 0.0), Complex::ZERO);

        assert_eq!(ContinuousIterationCount.value(&result, 0.25, 2), 3.0);
    }

    #[test]
    fn test_nan_modulus_returns_escape_time() {
        let mut result = EscapeResult::escaped_at(4, Complex::new(3.0, 0.0), Complex::ZERO);
        result.last_modulus = f64::NAN;

        assert_eq!(ContinuousIterationCount.value(&result, 2.0, 2), 4.0);
    }
}
