use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controllers::tiles::cache::DEFAULT_CACHE_CAPACITY;
use crate::controllers::tiles::coordinator::{TileCoordinator, TileCoordinatorOptions};
use crate::controllers::tiles::data::tile_params::TileParams;
use crate::controllers::tiles::iteration_policy::IterationPolicy;
use crate::controllers::tiles::png_tile_renderer::PngTileRenderer;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_params::{DEFAULT_BAILOUT, DEFAULT_POWER};
use crate::core::data::tile_address::{TileAddress, TileGeometry};
use crate::core::errors::RenderError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    ColourIndexKind, ColouringKind, PaletteKind, PipelineSelection,
};
use crate::core::fractals::mandelbrot::implementation::Implementation;
use crate::core::util::tile_to_bounds::tile_to_bounds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<RenderError> for ConfigError {
    fn from(err: RenderError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Iteration and colouring choices. Stage fields use their wire
/// identifiers, e.g. `"palette": "cool-palette"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub bailout: f64,
    pub power: u32,
    pub coloring: ColouringKind,
    pub color_index: ColourIndexKind,
    pub palette: PaletteKind,
    pub implementation: Implementation,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bailout: DEFAULT_BAILOUT,
            power: DEFAULT_POWER,
            coloring: ColouringKind::SmoothIterationCount,
            color_index: ColourIndexKind::SimpleIndex,
            palette: PaletteKind::Hot,
            implementation: Implementation::Reference,
        }
    }
}

/// Explorer settings, read from JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub tile: TileGeometry,
    pub iterations: IterationPolicy,
    pub render: RenderConfig,
    pub cache_capacity: usize,
    pub render_threads: Option<usize>,
    pub fallback_colour: [u8; 3],
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            tile: TileGeometry::default(),
            iterations: IterationPolicy::default(),
            render: RenderConfig::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            render_threads: None,
            fallback_colour: [128, 128, 128],
        }
    }
}

impl ExplorerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;

        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        tile_to_bounds(TileAddress::new(0, 0, 0), &self.tile).map_err(RenderError::from)?;
        self.tile_params().validate()?;

        if self.cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "cache_capacity must be at least 1".to_string(),
            ));
        }

        if self.render_threads == Some(0) {
            return Err(ConfigError::Invalid(
                "render_threads must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn tile_params(&self) -> TileParams {
        TileParams {
            pipeline: PipelineSelection::new(
                self.render.coloring,
                self.render.color_index,
                self.render.palette,
            ),
            implementation: self.render.implementation,
            iteration_policy: self.iterations,
            bailout: self.render.bailout,
            power: self.render.power,
        }
    }

    pub fn coordinator_options(&self) -> Result<TileCoordinatorOptions, ConfigError> {
        let cache_capacity = NonZeroUsize::new(self.cache_capacity).ok_or_else(|| {
            ConfigError::Invalid("cache_capacity must be at least 1".to_string())
        })?;

        Ok(TileCoordinatorOptions {
            geometry: self.tile,
            params: self.tile_params(),
            cache_capacity,
            fallback_colour: Colour::from(self.fallback_colour),
        })
    }

    /// Builds the tile coordinator this config describes, with its own
    /// render pool when `render_threads` is set.
    pub fn build_coordinator(&self) -> Result<TileCoordinator, ConfigError> {
        self.validate()?;

        let renderer = match self.render_threads {
            Some(threads) => PngTileRenderer::with_threads(threads)?,
            None => PngTileRenderer::new(),
        };

        Ok(TileCoordinator::with_renderer(
            renderer,
            self.coordinator_options()?,
        )?)
    }
}
