use std::fmt;

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::region::RegionError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// Which selectable stage an identifier was meant for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PipelineStage {
    Colouring,
    ColourIndex,
    Palette,
    Implementation,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Colouring => "coloring",
            Self::ColourIndex => "color-index",
            Self::Palette => "palette",
            Self::Implementation => "implementation",
        })
    }
}

// Clone so that every waiter on a shared in-flight tile can receive the
// leader's failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid region: {0}")]
    InvalidRegion(#[from] RegionError),

    #[error("invalid iteration parameters: {0}")]
    InvalidParams(String),

    #[error("unknown {stage} identifier '{identifier}'")]
    UnknownPipelineStage {
        stage: PipelineStage,
        identifier: String,
    },

    #[error("pixel mapping error: {0}")]
    Pixel(#[from] PixelToComplexCoordsError),

    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),

    #[error("png encoding failed: {0}")]
    Encode(String),

    #[error("could not build render thread pool: {0}")]
    ThreadPool(String),

    #[error("in-flight render was abandoned")]
    Abandoned,
}

impl RenderError {
    pub(crate) fn unknown(stage: PipelineStage, identifier: &str) -> Self {
        Self::UnknownPipelineStage {
            stage,
            identifier: identifier.to_string(),
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for RenderError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}
