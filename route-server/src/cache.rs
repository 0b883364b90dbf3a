//! Caching layer for directions lookups.
//!
//! Directions calls hit a shared, rate-limited backend. Repeated searches for
//! the same pair within a short window reuse the previous answer. Only
//! successful lookups are cached; failures are always retried.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::directions::{DirectionsError, DirectionsGateway, LegSummary};
use crate::domain::TravelMode;

/// Cache key: (normalised origin, normalised destination, mode).
type LegKey = (String, String, TravelMode);

fn leg_key(origin: &str, destination: &str, mode: TravelMode) -> LegKey {
    (
        origin.trim().to_lowercase(),
        destination.trim().to_lowercase(),
        mode,
    )
}

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
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Directions gateway with caching.
///
/// Wraps any [`DirectionsGateway`] and caches successful leg summaries.
pub struct CachedDirections<G> {
    inner: G,
    legs: MokaCache<LegKey, LegSummary>,
}

impl<G: DirectionsGateway> CachedDirections<G> {
    /// Create a new cached gateway.
    pub fn new(inner: G, config: &CacheConfig) -> Self {
        let legs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, legs }
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.legs.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.legs.invalidate_all();
    }
}

impl<G: DirectionsGateway> DirectionsGateway for CachedDirections<G> {
    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<LegSummary, DirectionsError> {
        let key = leg_key(origin, destination, mode);

        if let Some(cached) = self.legs.get(&key).await {
            trace!(%mode, "directions cache hit");
            return Ok(cached);
        }

        let leg = self.inner.get_directions(origin, destination, mode).await?;
        self.legs.insert(key, leg).await;

        Ok(leg)
    }
}
