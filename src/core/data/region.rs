use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum RegionError {
    #[error("pixel grid must be at least 1x1: {width}x{height}")]
    EmptyPixelGrid { width: u32, height: u32 },

    #[error("{axis} bounds must satisfy min < max: min {min}, max {max}")]
    InvertedBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("region bounds must be finite")]
    NonFinite,
}

/// A rectangular window of the complex plane mapped onto a pixel grid.
///
/// Row 0 of the grid sits on `ymin`, so an image with the imaginary axis
/// pointing up has to flip rows before display.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, RegionError> {
        let region = Self {
            xmin,
            xmax,
            ymin,
            ymax,
            width,
            height,
        };
        region.validate()?;

        Ok(region)
    }

    /// The classic full view of the Mandelbrot set.
    pub fn full_view(width: u32, height: u32) -> Result<Self, RegionError> {
        Self::new(-2.0, 1.0, -1.5, 1.5, width, height)
    }

    pub fn validate(&self) -> Result<(), RegionError> {
        if self.width < 1 || self.height < 1 {
            return Err(RegionError::EmptyPixelGrid {
                width: self.width,
                height: self.height,
            });
        }

        let bounds = [self.xmin, self.xmax, self.ymin, self.ymax];
        if bounds.iter().any(|value| !value.is_finite()) {
            return Err(RegionError::NonFinite);
        }

        if self.xmin >= self.xmax {
            return Err(RegionError::InvertedBounds {
                axis: "real",
                min: self.xmin,
                max: self.xmax,
            });
        }

        if self.ymin >= self.ymax {
            return Err(RegionError::InvertedBounds {
                axis: "imaginary",
                min: self.ymin,
                max: self.ymax,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn imag_span(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
