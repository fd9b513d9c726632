use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::cli::render_controller::RenderController;
use crate::controllers::ports::file_presenter::{FilePresenterError, FilePresenterPort};
use crate::core::data::iteration_params::IterationParams;
use crate::core::data::region::Region;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::tile_address::TileAddress;
use crate::core::errors::RenderError;

pub const OVERVIEW_WIDTH: u32 = 800;
pub const OVERVIEW_HEIGHT: u32 = 600;
pub const OVERVIEW_FILE: &str = "mandelbrot.png";
pub const TILE_FILE: &str = "tile_0_0_0.png";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Present(#[from] FilePresenterError),

    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Renders the classic full view and the zoom-0 tile into `output_dir`,
/// returning the paths written.
pub fn explore<P: FilePresenterPort>(
    config: &ExplorerConfig,
    presenter: P,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, CliError> {
    config.validate()?;
    std::fs::create_dir_all(output_dir).map_err(|source| CliError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let params = config.tile_params();
    let request = RenderRequest {
        region: Region::full_view(OVERVIEW_WIDTH, OVERVIEW_HEIGHT).map_err(RenderError::from)?,
        params: IterationParams::new(
            params.iteration_policy.max_iter_for(0),
            params.bailout,
            params.power,
        )?,
        pipeline: params.pipeline,
        implementation: params.implementation,
    };

    let overview_path = output_dir.join(OVERVIEW_FILE);
    let mut controller = RenderController::new(presenter);
    controller.generate(&request)?;
    controller.write(&overview_path)?;
    info!("saved {}", overview_path.display());

    let coordinator = config.build_coordinator()?;
    let tile_path = output_dir.join(TILE_FILE);
    let tile = coordinator.try_fetch_tile(TileAddress::new(0, 0, 0))?;
    std::fs::write(&tile_path, &tile[..]).map_err(|source| CliError::Io {
        path: tile_path.clone(),
        source,
    })?;
    info!("saved {}", tile_path.display());

    Ok(vec![overview_path, tile_path])
}
