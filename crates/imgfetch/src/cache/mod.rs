//! # Cache System
//!
//! In-memory storage for decoded artifacts, keyed by the verbatim resource
//! key. Only successfully decoded artifacts are ever stored.

mod memory;
mod provider;
mod types;

pub use memory::MemoryCache;
pub use provider::ArtifactCache;
pub use types::CacheConfig;
