/// Position within the three equal bands of `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) enum Band {
    First(f64),
    Second(f64),
    Third(f64),
}

/// Scales and clamps `index` to `t = clamp(k * (index - u0), 0, 1)`, then
/// splits `t` into thirds; the payload ramps `0..1` across its band.
/// NaN lands at the start of the first band.
pub(super) fn band(index: f64, k: f64, u0: f64) -> Band {
    let scaled = k * (index - u0);
    let t = if scaled.is_nan() { 0.0 } else { scaled.clamp(0.0, 1.0) };

    if t < 1.0 / 3.0 {
        Band::First(3.0 * t)
    } else if t < 2.0 / 3.0 {
        Band::Second(3.0 * (t - 1.0 / 3.0))
    } else {
        Band::Third((3.0 * (t - 2.0 / 3.0)).min(1.0))
    }
}
