use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::png::encode_png;

pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), FilePresenterError> {
        let bytes = encode_png(buffer)?;
        std::fs::write(filepath, bytes)?;

        Ok(())
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
