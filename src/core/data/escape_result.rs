use crate::core::data::complex::Complex;

/// Outcome of iterating one point.
///
/// `terminal` is the last computed iterate and `previous` the one before it;
/// for an escaped orbit `terminal` is the first iterate outside the bailout
/// radius and `last_modulus == terminal.modulus()`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub escape_time: u32,
    pub last_modulus: f64,
    pub escaped: bool,
    pub terminal: Complex,
    pub previous: Complex,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped_at(escape_time: u32, terminal: Complex, previous: Complex) -> Self {
        Self {
            escape_time,
            last_modulus: terminal.modulus(),
            escaped: true,
            terminal,
            previous,
        }
    }

    #[must_use]
    pub fn bounded(max_iter: u32, terminal: Complex, previous: Complex) -> Self {
        Self {
            escape_time: max_iter,
            last_modulus: terminal.modulus(),
            escaped: false,
            terminal,
            previous,
        }
    }
}
