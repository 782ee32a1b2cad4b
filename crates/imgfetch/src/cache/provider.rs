//! # Cache Provider
//!
//! The trait every artifact cache implementation must follow.

use async_trait::async_trait;

/// Concurrent key → artifact store consulted by the fetcher.
///
/// Implementations must tolerate concurrent `get`/`set` calls from several
/// fetches; for the same key the last writer wins.
#[async_trait]
pub trait ArtifactCache<A>: Send + Sync
where
    A: Clone + Send + Sync + 'static,
{
    /// Get an entry from the cache
    async fn get(&self, key: &str) -> Option<A>;

    /// Insert an entry, replacing any previous value for `key`
    async fn set(&self, key: String, value: A);

    /// Remove an entry from the cache
    async fn remove(&self, key: &str);

    /// Clear all entries from the cache
    async fn clear(&self);

    /// Approximate number of entries
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
