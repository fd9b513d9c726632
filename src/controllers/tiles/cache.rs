use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::controllers::tiles::data::tile_cache_key::TileCacheKey;

/// Encoded PNG bytes, shared between the cache and every caller.
pub type TileBytes = Arc<[u8]>;

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Bounded least-recently-used store of encoded tiles.
pub struct TileCache {
    entries: Mutex<LruCache<TileCacheKey, TileBytes>>,
}

impl TileCache {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &TileCacheKey) -> Option<TileBytes> {
        self.entries.lock().get(key).cloned()
    }

    pub fn insert(&self, key: TileCacheKey, bytes: TileBytes) {
        self.entries.lock().put(key, bytes);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }
}

impl Default for TileCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}
