use crate::core::actions::generate_pixel_buffer::ports::colour_index_function::ColourIndexFunction;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::colouring_function::ColouringFunction;
use crate::core::actions::generate_pixel_buffer::ports::palette_function::PaletteFunction;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_params::IterationParams;
use crate::core::errors::RenderError;
use crate::core::fractals::mandelbrot::colour_mapping::factory::{
    colour_index_factory, colouring_factory, palette_factory,
};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PipelineSelection;

/// Colouring, colour index and palette composed into a single escape-result
/// to colour map.
///
/// Any stage can be swapped for another implementation of its port without
/// touching the renderer.
#[derive(Debug)]
pub struct ColourPipeline {
    colouring: Box<dyn ColouringFunction>,
    colour_index: Box<dyn ColourIndexFunction>,
    palette: Box<dyn PaletteFunction>,
    params: IterationParams,
    display_name: String,
}

impl ColourPipeline {
    #[must_use]
    pub fn new(
        colouring: Box<dyn ColouringFunction>,
        colour_index: Box<dyn ColourIndexFunction>,
        palette: Box<dyn PaletteFunction>,
        params: IterationParams,
    ) -> Self {
        let display_name = format!(
            "{} / {} / {}",
            colouring.display_name(),
            colour_index.display_name(),
            palette.display_name()
        );

        Self {
            colouring,
            colour_index,
            palette,
            params,
            display_name,
        }
    }

    #[must_use]
    pub fn from_selection(selection: PipelineSelection, params: IterationParams) -> Self {
        Self::new(
            colouring_factory(selection.colouring),
            colour_index_factory(selection.colour_index),
            palette_factory(selection.palette),
            params,
        )
    }

    #[must_use]
    pub fn colour(&self, result: &EscapeResult) -> Colour {
        let value = self
            .colouring
            .value(result, self.params.bailout, self.params.power);
        let index = self.colour_index.index(value, self.params.max_iter);

        self.palette.colour(index)
    }
}

impl ColourMap<EscapeResult> for ColourPipeline {
    fn map(&self, value: EscapeResult) -> Result<Colour, RenderError> {
        Ok(self.colour(&value))
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}
