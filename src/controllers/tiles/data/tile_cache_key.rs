use std::fmt;

use crate::controllers::tiles::data::tile_params::TileParams;
use crate::core::data::tile_address::TileAddress;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PipelineSelection;
use crate::core::fractals::mandelbrot::implementation::Implementation;

/// Everything that decides a tile's bytes. Bailout is stored as raw bits so
/// the key can be hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCacheKey {
    pub address: TileAddress,
    pub max_iter: u32,
    pub pipeline: PipelineSelection,
    pub implementation: Implementation,
    bailout_bits: u64,
    pub power: u32,
}

impl TileCacheKey {
    #[must_use]
    pub fn new(address: TileAddress, max_iter: u32, params: &TileParams) -> Self {
        Self {
            address,
            max_iter,
            pipeline: params.pipeline,
            implementation: params.implementation,
            bailout_bits: params.bailout.to_bits(),
            power: params.power,
        }
    }

    #[must_use]
    pub fn bailout(&self) -> f64 {
        f64::from_bits(self.bailout_bits)
    }
}

impl fmt::Display for TileCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}:{}:{}",
            self.address.zoom,
            self.address.x,
            self.address.y,
            self.max_iter,
            self.pipeline.palette,
            self.pipeline.colouring,
            self.pipeline.colour_index,
            self.implementation
        )
    }
}
