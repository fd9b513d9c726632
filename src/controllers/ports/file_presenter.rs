use std::path::Path;

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::RenderError;

#[derive(Debug, Error)]
pub enum FilePresenterError {
    #[error("could not encode image: {0}")]
    Encode(#[from] RenderError),

    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
}

pub trait FilePresenterPort {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
    ) -> Result<(), FilePresenterError>;
}
