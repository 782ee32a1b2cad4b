//! # Memory Cache Provider
//!
//! An in-memory artifact cache backed by Moka.

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::cache::provider::ArtifactCache;
use crate::cache::types::CacheConfig;

/// Memory cache provider implementation using Moka
#[derive(Clone)]
pub struct MemoryCache<A>
where
    A: Clone + Send + Sync + 'static,
{
    cache: MokaCache<String, A>,
}

impl<A> MemoryCache<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Create a cache with no capacity limit and no expiry
    pub fn unbounded() -> Self {
        Self::new(&CacheConfig::unbounded())
    }

    /// Create a cache with the eviction policy described by `config`
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = MokaCache::<String, A>::builder();

        if let Some(max_capacity) = config.max_capacity {
            builder = builder.max_capacity(max_capacity);
        }
        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }
        if let Some(tti) = config.time_to_idle {
            builder = builder.time_to_idle(tti);
        }

        debug!(
            max_capacity = ?config.max_capacity,
            time_to_live = ?config.time_to_live,
            time_to_idle = ?config.time_to_idle,
            "Memory cache created"
        );

        Self {
            cache: builder.build(),
        }
    }

    /// Eagerly run pending evictions and expirations.
    pub async fn sweep(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl<A> Default for MemoryCache<A>
where
    A: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::unbounded()
    }
}

#[async_trait::async_trait]
impl<A> ArtifactCache<A> for MemoryCache<A>
where
    A: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<A> {
        self.cache.get(key).await
    }

    async fn set(&self, key: String, value: A) {
        self.cache.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.cache.invalidate(key).await;
        debug!(key, "Removed entry from memory cache");
    }

    async fn clear(&self) {
        self.cache.invalidate_all();
        debug!("Memory cache cleared");
    }

    fn len(&self) -> u64 {
        self.cache.entry_count()
    }
}
