use std::time::Duration;

use moka::sync::Cache;

use crate::schema::MovieResponse;
use crate::DiscoverRequest;

#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    /// Entries older than this are treated as missing.
    pub max_age: Duration,
    /// Upper bound on cached pages.
    pub capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(5 * 60),
            capacity: 256,
        }
    }
}

/// Discover pages keyed by request, expiring `max_age` after insertion.
pub type PageCache = Cache<DiscoverRequest, MovieResponse>;

pub(crate) fn page_cache(settings: CacheSettings) -> PageCache {
    Cache::builder()
        .max_capacity(settings.capacity as u64)
        .time_to_live(settings.max_age)
        .build()
}
