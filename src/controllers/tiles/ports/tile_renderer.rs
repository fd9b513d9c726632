use crate::core::data::render_request::RenderRequest;
use crate::core::errors::RenderError;

/// Turns a fully resolved tile request into encoded image bytes.
pub trait TileRenderer: Send + Sync {
    fn render_tile(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError>;
}
