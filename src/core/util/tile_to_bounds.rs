use crate::core::data::region::{Region, RegionError};
use crate::core::data::tile_address::{TileAddress, TileGeometry};

/// Projects a map tile onto its window of the complex plane.
///
/// With `n = 2^zoom` tiles per axis, tile `x` covers
/// `[center - range/2 + x*range/n, that + range/n]` on the real axis and
/// likewise for `y` on the imaginary axis. The result is a square
/// `size x size` pixel region.
pub fn tile_to_bounds(address: TileAddress, geometry: &TileGeometry) -> Result<Region, RegionError> {
    let n = 2f64.powi(address.zoom.min(i32::MAX as u32) as i32);
    let tile_span = geometry.total_range / n;
    let half_range = geometry.total_range / 2.0;

    let xmin = geometry.center_real - half_range + (address.x as f64 / n) * geometry.total_range;
    let ymin = geometry.center_imag - half_range + (address.y as f64 / n) * geometry.total_range;

    Region::new(
        xmin,
        xmin + tile_span,
        ymin,
        ymin + tile_span,
        geometry.size,
        geometry.size,
    )
}
