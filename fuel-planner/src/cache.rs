//! Caching layer for routing responses.
//!
//! Identical start/end pairs are common (the same lanes get planned over
//! and over) and route geometry changes rarely, so routes are cached for a
//! while to spare the provider's rate limit.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::geo::Coordinate;
use crate::planner::{Route, RouteProvider};
use crate::routing::{OrsClient, RouteError};

/// Cache key: bit patterns of (start, end).
type RouteKey = ((u64, u64), (u64, u64));

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Route provider with caching.
///
/// Wraps another provider (the OpenRouteService client by default) and
/// caches successful routes. Failures are never cached.
pub struct CachedRouteClient<P = OrsClient> {
    client: P,
    routes: MokaCache<RouteKey, Arc<Route>>,
}

impl<P: RouteProvider> CachedRouteClient<P> {
    /// Create a new cached client.
    pub fn new(client: P, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, routes }
    }

    /// Get a route, using the cache if available.
    pub async fn route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RouteError> {
        let key = (start.to_bits(), end.to_bits());

        if let Some(cached) = self.routes.get(&key).await {
            debug!(%start, %end, "route cache hit");
            return Ok(Route::clone(&cached));
        }

        let route = self.client.get_route(start, end).await?;
        self.routes.insert(key, Arc::new(route.clone())).await;

        Ok(route)
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl<P: RouteProvider + Sync> RouteProvider for CachedRouteClient<P> {
    async fn get_route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RouteError> {
        self.route(start, end).await
    }
}
