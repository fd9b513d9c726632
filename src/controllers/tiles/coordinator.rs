use std::num::NonZeroUsize;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use log::{debug, error, info};
use parking_lot::RwLock;

use crate::controllers::tiles::cache::{DEFAULT_CACHE_CAPACITY, TileBytes, TileCache};
use crate::controllers::tiles::data::tile_cache_key::TileCacheKey;
use crate::controllers::tiles::data::tile_params::TileParams;
use crate::controllers::tiles::data::tile_server_status::TileServerStatus;
use crate::controllers::tiles::png_tile_renderer::PngTileRenderer;
use crate::controllers::tiles::ports::tile_renderer::TileRenderer;
use crate::controllers::tiles::single_flight::SingleFlight;
use crate::core::data::colour::Colour;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::tile_address::{TileAddress, TileGeometry};
use crate::core::errors::RenderError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    ColourIndexKind, ColouringKind, PaletteKind,
};
use crate::core::fractals::mandelbrot::implementation::Implementation;
use crate::core::util::tile_to_bounds::tile_to_bounds;
use crate::presenters::png::solid_tile_png;

pub const DEFAULT_FALLBACK_COLOUR: Colour = Colour::grey(128);

const NO_ZOOM: u64 = u64::MAX;

/// Construction-time settings for a [`TileCoordinator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCoordinatorOptions {
    pub geometry: TileGeometry,
    pub params: TileParams,
    pub cache_capacity: NonZeroUsize,
    pub fallback_colour: Colour,
}

impl Default for TileCoordinatorOptions {
    fn default() -> Self {
        Self {
            geometry: TileGeometry::default(),
            params: TileParams::default(),
            cache_capacity: NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            fallback_colour: DEFAULT_FALLBACK_COLOUR,
        }
    }
}

#[derive(Default)]
struct TileStats {
    hits: AtomicU64,
    misses: AtomicU64,
    renders: AtomicU64,
    fallbacks_served: AtomicU64,
}

/// Serves map tiles of the Mandelbrot set.
///
/// Each request resolves its address to a region of the plane, picks an
/// iteration budget for its zoom, and answers from the cache or renders.
/// Concurrent requests for the same tile share one render.
///
/// Requests hold a shared lock on the parameters from key lookup to cache
/// insert; updates take it exclusively and clear the cache, so a tile
/// rendered under old parameters can never land in the cleared cache.
pub struct TileCoordinator<R: TileRenderer = PngTileRenderer> {
    geometry: TileGeometry,
    params: RwLock<TileParams>,
    cache: TileCache,
    in_flight: SingleFlight<TileCacheKey, Result<TileBytes, RenderError>>,
    renderer: R,
    fallback: TileBytes,
    stats: TileStats,
    last_zoom: AtomicU64,
}

impl TileCoordinator<PngTileRenderer> {
    pub fn new(options: TileCoordinatorOptions) -> Result<Self, RenderError> {
        Self::with_renderer(PngTileRenderer::new(), options)
    }
}

impl<R: TileRenderer> TileCoordinator<R> {
    pub fn with_renderer(renderer: R, options: TileCoordinatorOptions) -> Result<Self, RenderError> {
        tile_to_bounds(TileAddress::new(0, 0, 0), &options.geometry)?;
        options.params.validate()?;

        let fallback = solid_tile_png(options.geometry.size, options.fallback_colour)?;

        Ok(Self {
            geometry: options.geometry,
            params: RwLock::new(options.params),
            cache: TileCache::new(options.cache_capacity),
            in_flight: SingleFlight::new(),
            renderer,
            fallback: Arc::from(fallback),
            stats: TileStats::default(),
            last_zoom: AtomicU64::new(NO_ZOOM),
        })
    }

    /// PNG bytes for `address`. Never fails: any render error or panic is
    /// logged, counted, and answered with the fallback tile.
    pub fn fetch_tile(&self, address: TileAddress) -> TileBytes {
        match catch_unwind(AssertUnwindSafe(|| self.try_fetch_tile(address))) {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(err)) => {
                error!("tile {address} failed, serving fallback: {err}");
                self.serve_fallback()
            }
            Err(_) => {
                error!("tile {address} render panicked, serving fallback");
                self.serve_fallback()
            }
        }
    }

    /// Like [`fetch_tile`](Self::fetch_tile) but hands render failures back
    /// to the caller. Panics in the renderer are not caught.
    pub fn try_fetch_tile(&self, address: TileAddress) -> Result<TileBytes, RenderError> {
        let params = self.params.read();
        self.last_zoom.store(u64::from(address.zoom), Ordering::Relaxed);

        let max_iter = params.iteration_policy.max_iter_for(address.zoom);
        let key = TileCacheKey::new(address, max_iter, &params);

        if let Some(bytes) = self.cache.get(&key) {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            debug!("tile cache hit {key}");
            return Ok(bytes);
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        debug!("tile cache miss {key}");

        self.in_flight
            .run(&key, || self.render_and_cache(address, key, &params))?
    }

    fn render_and_cache(
        &self,
        address: TileAddress,
        key: TileCacheKey,
        params: &TileParams,
    ) -> Result<TileBytes, RenderError> {
        // a leader for the same key may have finished since our lookup
        if let Some(bytes) = self.cache.get(&key) {
            return Ok(bytes);
        }

        let request = RenderRequest {
            region: tile_to_bounds(address, &self.geometry)?,
            params: params.iteration_params_for(address.zoom)?,
            pipeline: params.pipeline,
            implementation: params.implementation,
        };

        let start = Instant::now();
        self.stats.renders.fetch_add(1, Ordering::Relaxed);
        let bytes: TileBytes = Arc::from(self.renderer.render_tile(&request)?);

        self.cache.insert(key, Arc::clone(&bytes));
        info!(
            "rendered tile {address} (max_iter {}) in {:?}",
            key.max_iter,
            start.elapsed()
        );

        Ok(bytes)
    }

    fn serve_fallback(&self) -> TileBytes {
        self.stats.fallbacks_served.fetch_add(1, Ordering::Relaxed);
        Arc::clone(&self.fallback)
    }

    /// Applies `update` to a copy of the parameters. If the result is valid
    /// and differs from the current parameters it replaces them and the
    /// whole cache is cleared. Returns whether anything changed.
    pub fn update_params<F>(&self, update: F) -> Result<bool, RenderError>
    where
        F: FnOnce(&mut TileParams),
    {
        let mut params = self.params.write();
        let mut next = *params;
        update(&mut next);
        next.validate()?;

        if next == *params {
            return Ok(false);
        }

        *params = next;
        self.cache.clear();
        info!(
            "tile parameters changed (palette {}, coloring {}, index {}, implementation {}, auto {}), cache cleared",
            next.pipeline.palette,
            next.pipeline.colouring,
            next.pipeline.colour_index,
            next.implementation,
            next.iteration_policy.auto
        );

        Ok(true)
    }

    pub fn set_palette(&self, palette: PaletteKind) -> Result<bool, RenderError> {
        self.update_params(|params| params.pipeline.palette = palette)
    }

    pub fn set_colouring(&self, colouring: ColouringKind) -> Result<bool, RenderError> {
        self.update_params(|params| params.pipeline.colouring = colouring)
    }

    pub fn set_colour_index(&self, colour_index: ColourIndexKind) -> Result<bool, RenderError> {
        self.update_params(|params| params.pipeline.colour_index = colour_index)
    }

    pub fn set_implementation(&self, implementation: Implementation) -> Result<bool, RenderError> {
        self.update_params(|params| params.implementation = implementation)
    }

    /// Sets the budget used when auto iterations are off.
    pub fn set_manual_max_iter(&self, max_iter: u32) -> Result<bool, RenderError> {
        self.update_params(|params| params.iteration_policy.manual_max_iter = max_iter)
    }

    pub fn set_auto_iterations(&self, auto: bool) -> Result<bool, RenderError> {
        self.update_params(|params| params.iteration_policy.auto = auto)
    }

    pub fn clear_cache(&self) {
        let _params = self.params.write();
        self.cache.clear();
        info!("tile cache cleared");
    }

    #[must_use]
    pub fn params(&self) -> TileParams {
        *self.params.read()
    }

    #[must_use]
    pub fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn fallback_tile(&self) -> TileBytes {
        Arc::clone(&self.fallback)
    }

    #[must_use]
    pub fn status(&self) -> TileServerStatus {
        let params = self.params.read();
        let last_zoom = match self.last_zoom.load(Ordering::Relaxed) {
            NO_ZOOM => None,
            zoom => u32::try_from(zoom).ok(),
        };

        TileServerStatus {
            cached_tiles: self.cache.len(),
            cache_capacity: self.cache.capacity(),
            last_zoom,
            effective_max_iter: params
                .iteration_policy
                .max_iter_for(last_zoom.unwrap_or(0)),
            hits: self.stats.hits.load(Ordering::Relaxed),
            misses: self.stats.misses.load(Ordering::Relaxed),
            renders: self.stats.renders.load(Ordering::Relaxed),
            fallbacks_served: self.stats.fallbacks_served.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingRenderer {
        calls: AtomicUsize,
        inner: PngTileRenderer,
    }

    impl TileRenderer for CountingRenderer {
        fn render_tile(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.render_tile(request)
        }
    }

    struct FailingRenderer;

    impl TileRenderer for FailingRenderer {
        fn render_tile(&self, _: &RenderRequest) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Encode("disk on fire".to_string()))
        }
    }

    struct PanickingRenderer;

    impl TileRenderer for PanickingRenderer {
        fn render_tile(&self, _: &RenderRequest) -> Result<Vec<u8>, RenderError> {
            panic!("renderer bug");
        }
    }

    fn small_options() -> TileCoordinatorOptions {
        TileCoordinatorOptions {
            geometry: TileGeometry {
                size: 16,
                ..TileGeometry::default()
            },
            ..TileCoordinatorOptions::default()
        }
    }

    fn counting() -> TileCoordinator<CountingRenderer> {
        TileCoordinator::with_renderer(CountingRenderer::default(), small_options()).unwrap()
    }

    fn calls(coordinator: &TileCoordinator<CountingRenderer>) -> usize {
        coordinator.renderer().calls.load(Ordering::SeqCst)
    }

    #[test]
    fn test_second_fetch_is_served_from_cache() {
        let coordinator = counting();
        let address = TileAddress::new(2, 1, 3);

        let first = coordinator.fetch_tile(address);
        let second = coordinator.fetch_tile(address);

        assert_eq!(first, second);
        assert_eq!(calls(&coordinator), 1);

        let status = coordinator.status();
        assert_eq!(status.hits, 1);
        assert_eq!(status.misses, 1);
        assert_eq!(status.renders, 1);
        assert_eq!(status.cached_tiles, 1);
    }

    #[test]
    fn test_tile_is_png_of_tile_size() {
        let coordinator = counting();
        let bytes = coordinator.fetch_tile(TileAddress::new(0, 0, 0));
        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgb8();

        assert_eq!(decoded.dimensions(), (16, 16));
    }

    #[test]
    fn test_parameter_change_clears_cache_and_rerenders() {
        let coordinator = counting();
        let address = TileAddress::new(1, 0, 0);

        coordinator.fetch_tile(address);
        assert_eq!(coordinator.set_palette(PaletteKind::Hot), Ok(true));
        assert_eq!(coordinator.status().cached_tiles, 0);

        coordinator.fetch_tile(address);
        assert_eq!(calls(&coordinator), 2);
    }

    #[test]
    fn test_unchanged_parameter_keeps_cache() {
        let coordinator = counting();
        coordinator.fetch_tile(TileAddress::new(0, 0, 0));

        assert_eq!(coordinator.set_palette(PaletteKind::Simple), Ok(false));
        assert_eq!(coordinator.set_auto_iterations(true), Ok(false));
        assert_eq!(coordinator.status().cached_tiles, 1);
    }

    #[test]
    fn test_every_setter_invalidates() {
        let coordinator = counting();
        let address = TileAddress::new(0, 0, 0);
        let setters: [fn(&TileCoordinator<CountingRenderer>) -> Result<bool, RenderError>; 5] = [
            |c| c.set_colouring(ColouringKind::SmoothIterationCount),
            |c| c.set_colour_index(ColourIndexKind::SimpleIndex),
            |c| c.set_implementation(Implementation::Fast),
            |c| c.set_manual_max_iter(300),
            |c| c.set_auto_iterations(false),
        ];

        for (i, setter) in setters.iter().enumerate() {
            coordinator.fetch_tile(address);
            let changed = setter(&coordinator).unwrap();

            // simple-index is already selected
            if i == 1 {
                assert!(!changed);
                assert_eq!(coordinator.status().cached_tiles, 1);
            } else {
                assert!(changed);
                assert_eq!(coordinator.status().cached_tiles, 0);
            }
        }
    }

    #[test]
    fn test_invalid_update_is_rejected_and_keeps_state() {
        let coordinator = counting();
        coordinator.fetch_tile(TileAddress::new(0, 0, 0));

        assert!(coordinator.set_manual_max_iter(0).is_err());
        assert_eq!(coordinator.params().iteration_policy.manual_max_iter, 256);
        assert_eq!(coordinator.status().cached_tiles, 1);
    }

    #[test]
    fn test_manual_mode_budget_is_part_of_key() {
        let coordinator = counting();
        coordinator.set_auto_iterations(false).unwrap();
        coordinator.set_manual_max_iter(64).unwrap();

        coordinator.fetch_tile(TileAddress::new(5, 0, 0));
        let status = coordinator.status();

        assert_eq!(status.last_zoom, Some(5));
        assert_eq!(status.effective_max_iter, 64);
    }

    #[test]
    fn test_status_before_any_request() {
        let status = counting().status();

        assert_eq!(status.last_zoom, None);
        assert_eq!(status.effective_max_iter, 100);
        assert_eq!(status.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_render_failure_serves_fallback() {
        let coordinator = TileCoordinator::with_renderer(FailingRenderer, small_options()).unwrap();

        let bytes = coordinator.fetch_tile(TileAddress::new(0, 0, 0));

        assert_eq!(bytes, coordinator.fallback_tile());
        assert_eq!(coordinator.status().fallbacks_served, 1);
        assert_eq!(coordinator.status().cached_tiles, 0);
        assert!(matches!(
            coordinator.try_fetch_tile(TileAddress::new(0, 0, 0)),
            Err(RenderError::Encode(_))
        ));
    }

    #[test]
    fn test_render_panic_serves_fallback() {
        let coordinator = TileCoordinator::with_renderer(PanickingRenderer, small_options()).unwrap();

        let bytes = coordinator.fetch_tile(TileAddress::new(3, 2, 1));

        assert_eq!(bytes, coordinator.fallback_tile());
        assert_eq!(coordinator.status().fallbacks_served, 1);
        // the lock is still usable after the unwind
        assert_eq!(coordinator.set_palette(PaletteKind::Cool), Ok(true));
    }

    #[test]
    fn test_unrepresentable_zoom_serves_fallback() {
        let coordinator = counting();

        let bytes = coordinator.fetch_tile(TileAddress::new(2000, 0, 0));

        assert_eq!(bytes, coordinator.fallback_tile());
        assert_eq!(calls(&coordinator), 0);
    }

    #[test]
    fn test_fallback_is_grey_tile() {
        let coordinator = counting();
        let decoded =
            image::load_from_memory_with_format(&coordinator.fallback_tile(), image::ImageFormat::Png)
                .unwrap()
                .to_rgb8();

        assert_eq!(decoded.dimensions(), (16, 16));
        assert!(decoded.pixels().all(|p| p.0 == [128, 128, 128]));
    }

    #[test]
    fn test_rejects_invalid_geometry() {
        let options = TileCoordinatorOptions {
            geometry: TileGeometry {
                size: 0,
                ..TileGeometry::default()
            },
            ..TileCoordinatorOptions::default()
        };

        assert!(matches!(
            TileCoordinator::new(options),
            Err(RenderError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_clear_cache() {
        let coordinator = counting();
        coordinator.fetch_tile(TileAddress::new(0, 0, 0));
        coordinator.clear_cache();

        assert_eq!(coordinator.status().cached_tiles, 0);
        coordinator.fetch_tile(TileAddress::new(0, 0, 0));
        assert_eq!(calls(&coordinator), 2);
    }
}
