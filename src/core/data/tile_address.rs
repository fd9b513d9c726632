use std::fmt;

use serde::{Deserialize, Serialize};

/// Map-tile coordinate: `zoom` level and the `x`/`y` tile index within it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileAddress {
    pub zoom: u32,
    pub x: u32,
    pub y: u32,
}

impl TileAddress {
    #[must_use]
    pub const fn new(zoom: u32, x: u32, y: u32) -> Self {
        Self { zoom, x, y }
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Fixed projection from tile space onto the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileGeometry {
    pub size: u32,
    pub center_real: f64,
    pub center_imag: f64,
    pub total_range: f64,
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self {
            size: 256,
            center_real: -0.5,
            center_imag: 0.0,
            total_range: 4.0,
        }
    }
}
