use crate::core::data::colour::Colour;

/// Last pipeline stage: maps any real index, including NaN and values far
/// outside `[0, 1]`, to a colour.
pub trait PaletteFunction: Send + Sync + std::fmt::Debug {
    fn colour(&self, index: f64) -> Colour;

    fn display_name(&self) -> &str;
}
