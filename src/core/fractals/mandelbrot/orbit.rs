//! Escape-time iteration of `z -> z^power + c` from `z0 = 0`.
//!
//! Step `n` computes `z_{n+1}` and tests `|z_{n+1}|² > bailout²`; the first
//! `n` that passes is the escape time. Orbits that stay bounded for
//! `max_iter` steps report `escape_time == max_iter` and `escaped == false`.
//! Only the last two iterates are kept.

use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_params::IterationParams;

/// Generic kernel for any integer power.
#[must_use]
pub fn escape(c: Complex, params: &IterationParams) -> EscapeResult {
    let bailout_squared = params.bailout_squared();
    let mut previous = Complex::ZERO;
    let mut z = Complex::ZERO;

    for n in 0..params.max_iter {
        previous = z;
        z = z.powi(params.power) + c;

        if z.magnitude_squared() > bailout_squared {
            return EscapeResult::escaped_at(n, z, previous);
        }
    }

    EscapeResult::bounded(params.max_iter, z, previous)
}

/// Scalar kernel specialised for `power == 2`; other powers fall through to
/// [`escape`].
///
/// The arithmetic matches `z * z + c` operation for operation, so both
/// kernels agree bit for bit.
#[must_use]
pub fn escape_fast(c: Complex, params: &IterationParams) -> EscapeResult {
    if params.power != 2 {
        return escape(c, params);
    }

    let bailout_squared = params.bailout_squared();
    let (cx, cy) = (c.real, c.imag);
    let (mut x, mut y) = (0.0f64, 0.0f64);
    let (mut px, mut py) = (0.0f64, 0.0f64);
    let (mut x2, mut y2) = (0.0f64, 0.0f64);

    for n in 0..params.max_iter {
        (px, py) = (x, y);
        y = 2.0 * x * y + cy;
        x = x2 - y2 + cx;
        x2 = x * x;
        y2 = y * y;

        if x2 + y2 > bailout_squared {
            return EscapeResult::escaped_at(n, Complex::new(x, y), Complex::new(px, py));
        }
    }

    EscapeResult::bounded(params.max_iter, Complex::new(x, y), Complex::new(px, py))
}
