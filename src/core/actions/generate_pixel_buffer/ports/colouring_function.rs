use crate::core::data::escape_result::EscapeResult;

/// First pipeline stage: turns an escape result into a real-valued
/// brightness `u`.
pub trait ColouringFunction: Send + Sync + std::fmt::Debug {
    fn value(&self, result: &EscapeResult, bailout: f64, power: u32) -> f64;

    fn display_name(&self) -> &str;
}
