//! Byte sources: where raw artifact bytes come from.

mod http;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::TransportError;

pub use http::{HttpByteSource, create_client};

/// Resolves a resource key to raw bytes.
///
/// The fetcher may call `fetch` several times for the same key, so it must be
/// safe to retry. Cancellation is cooperative: the fetcher never interrupts
/// an in-flight call, it only inspects its cancellation token once the call
/// returns.
#[async_trait]
pub trait ByteSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, TransportError>;
}

#[async_trait]
impl<T> ByteSource for Arc<T>
where
    T: ByteSource + ?Sized,
{
    async fn fetch(&self, url: &str) -> Result<Bytes, TransportError> {
        (**self).fetch(url).await
    }
}
