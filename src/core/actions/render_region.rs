use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_parallel;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_params::IterationParams;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::region::Region;
use crate::core::data::render_request::RenderRequest;
use crate::core::errors::RenderError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    ColourIndexKind, ColouringKind, PaletteKind, PipelineSelection,
};
use crate::core::fractals::mandelbrot::colour_mapping::pipeline::ColourPipeline;
use crate::core::fractals::mandelbrot::implementation::Implementation;

/// Renders `region` through the selected colour pipeline with the reference
/// kernel.
///
/// Pixel `(x, y)` of the result is row `y`, column `x`, with row 0 on
/// `ymin`. Fails before any work is done if the region or parameters are
/// malformed.
pub fn render(
    region: Region,
    params: IterationParams,
    colouring: ColouringKind,
    colour_index: ColourIndexKind,
    palette: PaletteKind,
) -> Result<PixelBuffer, RenderError> {
    render_request(&RenderRequest {
        region,
        params,
        pipeline: PipelineSelection::new(colouring, colour_index, palette),
        implementation: Implementation::default(),
    })
}

pub fn render_request(request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
    let pipeline = ColourPipeline::from_selection(request.pipeline, request.params);

    render_with_pipeline(
        request.region,
        request.params,
        request.implementation,
        &pipeline,
    )
}

/// Same as [`render_request`] but with a caller-assembled pipeline, for
/// stages outside the built-in set.
pub fn render_with_pipeline(
    region: Region,
    params: IterationParams,
    implementation: Implementation,
    pipeline: &ColourPipeline,
) -> Result<PixelBuffer, RenderError> {
    let results = escape_results(region, params, implementation)?;

    generate_pixel_buffer_parallel(results, pipeline, region.width, region.height)
}

/// Row-major escape results for every pixel of `region`, before colouring.
pub fn escape_results(
    region: Region,
    params: IterationParams,
    implementation: Implementation,
) -> Result<Vec<EscapeResult>, RenderError> {
    let algorithm = MandelbrotAlgorithm::new(region, params, implementation)?;

    Ok(generate_fractal_parallel_rayon(
        region.width,
        region.height,
        &algorithm,
    )?)
}
