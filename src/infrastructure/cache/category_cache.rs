//! # Category Cache
//!
//! Process-wide cache of the category id → name map.
//!
//! The map is loaded on first use and shared by all later requests. Without a
//! TTL it lives for the whole process; with one it is reloaded on the first
//! access after expiry. A failed load is never stored, so the next request
//! tries again.
//!
//! The upstream call runs without holding the lock. Concurrent misses may
//! each fetch; the last successful result is stored. A load that started
//! before [`CategoryCache::invalidate`] is returned to its caller but not
//! stored.
//!
//! # Examples
//!
//! ```ignore
//! use article_ek_proxy::infrastructure::cache::CategoryCache;
//!
//! let cache = CategoryCache::new(None);
//! let categories = cache.get_or_load(gateway.as_ref()).await?;
//! ```

use crate::domain::entities::CategoryMap;
use crate::infrastructure::upstream::{ErpGateway, UpstreamResult};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug)]
struct CachedMap {
    map: Arc<CategoryMap>,
    loaded_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    entry: Option<CachedMap>,
    generation: u64,
}

/// Lazily loaded, shareable category map.
#[derive(Debug, Clone)]
pub struct CategoryCache {
    state: Arc<RwLock<CacheState>>,
    ttl: Option<Duration>,
}

impl CategoryCache {
    /// Creates an empty cache; `None` keeps the map for the process lifetime.
    #[must_use]
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState::default())),
            ttl,
        }
    }

    /// Returns the configured TTL.
    #[inline]
    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Returns the cached map, loading it through `gateway` if absent or
    /// expired.
    ///
    /// # Errors
    ///
    /// Returns the gateway error if the load fails. Nothing is cached then.
    pub async fn get_or_load(&self, gateway: &dyn ErpGateway) -> UpstreamResult<Arc<CategoryMap>> {
        let generation = {
            let state = self.state.read().await;
            if let Some(map) = self.fresh(&state.entry) {
                return Ok(map);
            }
            state.generation
        };

        let categories = gateway.list_categories().await?;
        let map = Arc::new(CategoryMap::from_categories(categories));

        let mut state = self.state.write().await;
        if state.generation == generation {
            state.entry = Some(CachedMap {
                map: Arc::clone(&map),
                loaded_at: Instant::now(),
            });
            info!(
                provider = gateway.provider(),
                categories = map.len(),
                "Loaded category map"
            );
        } else {
            debug!("Category map loaded across an invalidation, not stored");
        }
        Ok(map)
    }

    /// Drops the cached map; the next access reloads it.
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.generation = state.generation.wrapping_add(1);
        if state.entry.take().is_some() {
            debug!("Category cache invalidated");
        }
    }

    /// Returns true if a non-expired map is cached.
    pub async fn is_cached(&self) -> bool {
        self.fresh(&self.state.read().await.entry).is_some()
    }

    fn fresh(&self, entry: &Option<CachedMap>) -> Option<Arc<CategoryMap>> {
        let cached = entry.as_ref()?;
        match self.ttl {
            Some(ttl) if cached.loaded_at.elapsed() >= ttl => None,
            _ => Some(Arc::clone(&cached.map)),
        }
    }
}

impl Default for CategoryCache {
    fn default() -> Self {
        Self::new(None)
    }
}
