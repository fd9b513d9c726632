use crate::controllers::tiles::iteration_policy::IterationPolicy;
use crate::core::data::iteration_params::{DEFAULT_BAILOUT, DEFAULT_POWER, IterationParams};
use crate::core::errors::RenderError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PipelineSelection;
use crate::core::fractals::mandelbrot::implementation::Implementation;

/// Global rendering parameters shared by every tile request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    pub pipeline: PipelineSelection,
    pub implementation: Implementation,
    pub iteration_policy: IterationPolicy,
    pub bailout: f64,
    pub power: u32,
}

impl Default for TileParams {
    fn default() -> Self {
        Self {
            pipeline: PipelineSelection::default(),
            implementation: Implementation::default(),
            iteration_policy: IterationPolicy::default(),
            bailout: DEFAULT_BAILOUT,
            power: DEFAULT_POWER,
        }
    }
}

impl TileParams {
    pub fn iteration_params_for(&self, zoom: u32) -> Result<IterationParams, RenderError> {
        IterationParams::new(
            self.iteration_policy.max_iter_for(zoom),
            self.bailout,
            self.power,
        )
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        self.iteration_policy.validate()?;
        IterationParams::new(self.iteration_policy.min_iter.max(1), self.bailout, self.power)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_params_follow_policy() {
        let params = TileParams::default();

        assert_eq!(params.iteration_params_for(0).unwrap().max_iter, 100);
        assert_eq!(params.iteration_params_for(1).unwrap().max_iter, 130);
        assert_eq!(params.iteration_params_for(3).unwrap().bailout, 2.0);
    }

    #[test]
    fn test_validate_rejects_bad_bailout() {
        let params = TileParams {
            bailout: -1.0,
            ..TileParams::default()
        };

        assert!(matches!(params.validate(), Err(RenderError::InvalidParams(_))));
        assert!(params.iteration_params_for(0).is_err());
    }
}
