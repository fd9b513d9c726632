use std::error::Error;

use crate::core::data::point::Point;

/// Per-pixel computation over a pixel grid. Implementations must be pure:
/// the same pixel always yields the same result, whichever thread asks.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    /// Row `y` of a grid `width` pixels wide, left to right. Stops at the
    /// first failing pixel.
    fn compute_row(&self, y: u32, width: u32) -> Result<Vec<Self::Success>, Self::Failure> {
        (0..width).map(|x| self.compute(Point { x, y })).collect()
    }
}
