use std::time::Duration;

/// Eviction settings for [`MemoryCache`](super::MemoryCache).
///
/// Everything is off by default, which gives an unbounded cache whose
/// entries live until removed or until the process ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries; `None` means unbounded
    pub max_capacity: Option<u64>,
    /// Entries expire this long after insertion
    pub time_to_live: Option<Duration>,
    /// Entries expire this long after their last access
    pub time_to_idle: Option<Duration>,
}

impl CacheConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    pub fn with_time_to_idle(mut self, tti: Duration) -> Self {
        self.time_to_idle = Some(tti);
        self
    }
}
