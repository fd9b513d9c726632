use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::{FilePresenterError, FilePresenterPort};
use crate::core::actions::render_region::render_request;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::errors::RenderError;

/// Renders one image and hands it to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, request: &RenderRequest) -> Result<(), RenderError> {
        info!(
            "rendering {}x{} image, max_iter {}, {} / {} / {}, {} kernel",
            request.region.width,
            request.region.height,
            request.params.max_iter,
            request.pipeline.colouring,
            request.pipeline.colour_index,
            request.pipeline.palette,
            request.implementation
        );

        let start = Instant::now();
        self.buffer = Some(render_request(request)?);

        info!("rendered in {:?}", start.elapsed());

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated image; does nothing if none was generated.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), FilePresenterError> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
