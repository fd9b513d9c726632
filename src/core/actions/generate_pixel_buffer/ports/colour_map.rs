use crate::core::data::colour::Colour;
use crate::core::errors::RenderError;

pub trait ColourMap<T>: Sync {
    fn map(&self, value: T) -> Result<Colour, RenderError>;

    fn display_name(&self) -> &str;
}
