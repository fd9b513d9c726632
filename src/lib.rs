mod config;
mod controllers;
mod core;
mod presenters;

pub use config::{ConfigError, ExplorerConfig, RenderConfig};

pub use controllers::cli::explore::{CliError, explore};
pub use controllers::cli::render_controller::RenderController;
pub use controllers::ports::file_presenter::{FilePresenterError, FilePresenterPort};
pub use controllers::tiles::cache::{TileBytes, TileCache};
pub use controllers::tiles::coordinator::{TileCoordinator, TileCoordinatorOptions};
pub use controllers::tiles::data::tile_cache_key::TileCacheKey;
pub use controllers::tiles::data::tile_params::TileParams;
pub use controllers::tiles::data::tile_server_status::TileServerStatus;
pub use controllers::tiles::iteration_policy::IterationPolicy;
pub use controllers::tiles::png_tile_renderer::PngTileRenderer;
pub use controllers::tiles::ports::tile_renderer::TileRenderer;

pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_parallel,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_index_function::ColourIndexFunction;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_pixel_buffer::ports::colouring_function::ColouringFunction;
pub use crate::core::actions::generate_pixel_buffer::ports::palette_function::PaletteFunction;
pub use crate::core::actions::render_region::{
    escape_results, render, render_request, render_with_pipeline,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::iteration_params::IterationParams;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::tile_address::{TileAddress, TileGeometry};
pub use crate::core::errors::{PipelineStage, RenderError};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_mapping::colouring::{
    continuous_iteration_count::ContinuousIterationCount, iteration_count::IterationCount,
    smooth_iteration_count::SmoothIterationCount,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::{
    colour_index_factory, colouring_factory, palette_factory,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::index::simple_index::SimpleIndex;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    ColourIndexKind, ColouringKind, PaletteKind, PipelineSelection,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::palettes::{
    cool::CoolPalette, hot::HotPalette, simple::SimplePalette,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::pipeline::ColourPipeline;
pub use crate::core::fractals::mandelbrot::implementation::Implementation;
pub use crate::core::fractals::mandelbrot::orbit::{escape, escape_fast};
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
pub use crate::core::util::tile_to_bounds::tile_to_bounds;
pub use presenters::file::png::PngFilePresenter;
pub use presenters::png::{encode_png, solid_tile_png};
