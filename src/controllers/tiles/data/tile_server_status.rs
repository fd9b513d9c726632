use serde::Serialize;

/// Point-in-time counters for the tile coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileServerStatus {
    pub cached_tiles: usize,
    pub cache_capacity: usize,
    /// Zoom of the most recent request, if any.
    pub last_zoom: Option<u32>,
    /// Budget a tile at `last_zoom` (or zoom 0) would get right now.
    pub effective_max_iter: u32,
    pub hits: u64,
    pub misses: u64,
    pub renders: u64,
    pub fallbacks_served: u64,
}
