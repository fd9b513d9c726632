use crate::core::data::iteration_params::IterationParams;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PipelineSelection;
use crate::core::fractals::mandelbrot::implementation::Implementation;

/// Everything needed to turn a region of the plane into pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub region: Region,
    pub params: IterationParams,
    pub pipeline: PipelineSelection,
    pub implementation: Implementation,
}
