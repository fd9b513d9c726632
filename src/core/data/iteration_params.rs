use crate::core::errors::RenderError;

pub const DEFAULT_BAILOUT: f64 = 2.0;
pub const DEFAULT_POWER: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationParams {
    pub max_iter: u32,
    pub bailout: f64,
    pub power: u32,
}

impl IterationParams {
    pub fn new(max_iter: u32, bailout: f64, power: u32) -> Result<Self, RenderError> {
        let params = Self {
            max_iter,
            bailout,
            power,
        };
        params.validate()?;

        Ok(params)
    }

    /// Classic quadratic Mandelbrot with a bailout radius of 2.
    pub fn quadratic(max_iter: u32) -> Result<Self, RenderError> {
        Self::new(max_iter, DEFAULT_BAILOUT, DEFAULT_POWER)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.max_iter == 0 {
            return Err(RenderError::InvalidParams(
                "maximum iterations must be greater than zero".to_string(),
            ));
        }

        if !self.bailout.is_finite() || self.bailout <= 0.0 {
            return Err(RenderError::InvalidParams(format!(
                "bailout must be a positive finite number, got {}",
                self.bailout
            )));
        }

        if self.power == 0 {
            return Err(RenderError::InvalidParams(
                "power must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn bailout_squared(&self) -> f64 {
        self.bailout * self.bailout
    }
}
