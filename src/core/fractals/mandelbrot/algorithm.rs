use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_params::IterationParams;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::errors::RenderError;
use crate::core::fractals::mandelbrot::implementation::Implementation;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    region: Region,
    params: IterationParams,
    implementation: Implementation,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.region)?;

        Ok(self.implementation.escape(c, &self.params))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        region: Region,
        params: IterationParams,
        implementation: Implementation,
    ) -> Result<Self, RenderError> {
        region.validate()?;
        params.validate()?;

        Ok(Self {
            region,
            params,
            implementation,
        })
    }

    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub fn params(&self) -> &IterationParams {
        &self.params
    }
}
