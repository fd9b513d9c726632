use std::sync::Arc;

use rayon::ThreadPool;

use crate::controllers::tiles::ports::tile_renderer::TileRenderer;
use crate::core::actions::render_region::render_request;
use crate::core::data::render_request::RenderRequest;
use crate::core::errors::RenderError;
use crate::presenters::png::encode_png;

/// Renders on rayon and encodes the result as PNG.
///
/// Without a dedicated pool the work runs on rayon's global pool.
#[derive(Default, Clone)]
pub struct PngTileRenderer {
    pool: Option<Arc<ThreadPool>>,
}

impl PngTileRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threads(threads: usize) -> Result<Self, RenderError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("tile-render-{index}"))
            .build()?;

        Ok(Self {
            pool: Some(Arc::new(pool)),
        })
    }
}

impl TileRenderer for PngTileRenderer {
    fn render_tile(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
        let buffer = match &self.pool {
            Some(pool) => pool.install(|| render_request(request))?,
            None => render_request(request)?,
        };

        encode_png(&buffer)
    }
}
