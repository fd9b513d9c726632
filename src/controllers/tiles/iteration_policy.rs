use serde::{Deserialize, Serialize};

use crate::core::errors::RenderError;

/// Picks the iteration budget for a tile.
///
/// In auto mode the budget grows geometrically with zoom,
/// `clamp(round(base_iter * growth_rate^zoom), min_iter, max_iter_cap)`;
/// otherwise `manual_max_iter` is used at every zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IterationPolicy {
    pub auto: bool,
    pub manual_max_iter: u32,
    pub base_iter: u32,
    pub growth_rate: f64,
    pub min_iter: u32,
    pub max_iter_cap: u32,
}

impl Default for IterationPolicy {
    fn default() -> Self {
        Self {
            auto: true,
            manual_max_iter: 256,
            base_iter: 100,
            growth_rate: 1.3,
            min_iter: 50,
            max_iter_cap: 5000,
        }
    }
}

impl IterationPolicy {
    #[must_use]
    pub fn max_iter_for(&self, zoom: u32) -> u32 {
        if !self.auto {
            return self.manual_max_iter;
        }

        let exponent = zoom.min(i32::MAX as u32) as i32;
        let raw = (f64::from(self.base_iter) * self.growth_rate.powi(exponent)).round();
        let clamped = if raw.is_nan() {
            f64::from(self.min_iter)
        } else {
            raw.clamp(f64::from(self.min_iter), f64::from(self.max_iter_cap))
        };

        clamped as u32
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.manual_max_iter == 0 {
            return Err(RenderError::InvalidParams(
                "manual max_iter must be greater than zero".to_string(),
            ));
        }

        if self.min_iter == 0 || self.min_iter > self.max_iter_cap {
            return Err(RenderError::InvalidParams(format!(
                "iteration bounds must satisfy 0 < min_iter <= max_iter_cap, got {}..{}",
                self.min_iter, self.max_iter_cap
            )));
        }

        if !self.growth_rate.is_finite() || self.growth_rate <= 0.0 {
            return Err(RenderError::InvalidParams(format!(
                "growth rate must be a positive finite number, got {}",
                self.growth_rate
            )));
        }

        Ok(())
    }
}
