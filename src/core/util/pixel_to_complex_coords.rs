use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error("point {point:?} is outside the {width}x{height} pixel grid")]
    PointOutsideRegion {
        point: Point,
        width: u32,
        height: u32,
    },
}

/// Maps pixel `(x, y)` to `xmin + x*(xmax-xmin)/(width-1)`,
/// `ymin + y*(ymax-ymin)/(height-1)`.
///
/// A grid one pixel wide (or tall) has no span to divide; its only column
/// (or row) sits on `xmin` (or `ymin`).
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    region: &Region,
) -> Result<Complex, PixelToComplexCoordsError> {
    if pixel_position.x >= region.width || pixel_position.y >= region.height {
        return Err(PixelToComplexCoordsError::PointOutsideRegion {
            point: pixel_position,
            width: region.width,
            height: region.height,
        });
    }

    Ok(Complex {
        real: axis_coord(pixel_position.x, region.width, region.xmin, region.xmax),
        imag: axis_coord(pixel_position.y, region.height, region.ymin, region.ymax),
    })
}

#[inline]
fn axis_coord(index: u32, pixels: u32, min: f64, max: f64) -> f64 {
    if pixels <= 1 {
        return min;
    }
    min + index as f64 * (max - min) / (pixels - 1) as f64
}
