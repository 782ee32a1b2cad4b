//! Fetcher: cache lookup, retrying fetch with exponential backoff, decode,
//! cache population and cooperative cancellation.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{ArtifactCache, MemoryCache};
use crate::config::{FetcherConfig, HttpSourceConfig};
use crate::decode::{Decoder, Image, ImageDecoder};
use crate::error::{ClientError, FetchError, TransportError};
use crate::key::validate_key;
use crate::source::{ByteSource, HttpByteSource};

/// Fetches, decodes and caches artifacts by resource key.
///
/// Clones share the cache, the collaborators and the cancellation scope.
/// Concurrent fetches are not coordinated: two calls for the same uncached
/// key both go to the network and the last one to finish wins the cache slot.
pub struct Fetcher<A>
where
    A: Clone + Send + Sync + 'static,
{
    source: Arc<dyn ByteSource>,
    decoder: Arc<dyn Decoder<A>>,
    cache: Arc<dyn ArtifactCache<A>>,
    config: Arc<FetcherConfig>,
    /// Instance cancellation scope; replaced only by `reset_cancellation`
    scope: Arc<Mutex<CancellationToken>>,
}

impl<A> Clone for Fetcher<A>
where
    A: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            decoder: Arc::clone(&self.decoder),
            cache: Arc::clone(&self.cache),
            config: Arc::clone(&self.config),
            scope: Arc::clone(&self.scope),
        }
    }
}

impl Fetcher<Image> {
    /// HTTP-backed image fetcher with an in-memory cache built from `config.cache`.
    pub fn images(http: &HttpSourceConfig, config: FetcherConfig) -> Result<Self, ClientError> {
        Ok(Self::new(HttpByteSource::new(http)?, ImageDecoder, config))
    }
}

impl<A> Fetcher<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Create a fetcher with a [`MemoryCache`] configured from `config.cache`.
    pub fn new<S, D>(source: S, decoder: D, config: FetcherConfig) -> Self
    where
        S: ByteSource + 'static,
        D: Decoder<A> + 'static,
    {
        let cache: Arc<dyn ArtifactCache<A>> = Arc::new(MemoryCache::<A>::new(&config.cache));
        Self::from_parts(Arc::new(source), Arc::new(decoder), cache, config)
    }

    pub fn from_parts(
        source: Arc<dyn ByteSource>,
        decoder: Arc<dyn Decoder<A>>,
        cache: Arc<dyn ArtifactCache<A>>,
        config: FetcherConfig,
    ) -> Self {
        Self {
            source,
            decoder,
            cache,
            config: Arc::new(config),
            scope: Arc::new(Mutex::new(CancellationToken::new())),
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<dyn ArtifactCache<A>> {
        &self.cache
    }

    /// Fetch `key` with the configured retry budget, under the instance
    /// cancellation scope.
    pub async fn fetch(&self, key: &str) -> Result<A, FetchError> {
        self.fetch_with_retries(key, self.config.max_retries).await
    }

    /// Fetch `key` with at most `max_retries` network attempts, under the
    /// instance cancellation scope captured when the call begins.
    pub async fn fetch_with_retries(&self, key: &str, max_retries: u32) -> Result<A, FetchError> {
        let token = self.cancellation_token();
        self.fetch_with_token(key, max_retries, &token).await
    }

    /// Fetch `key` under a caller-owned cancellation token.
    ///
    /// A cache hit returns immediately. Otherwise the token is checked after
    /// every network attempt returns and while waiting between attempts; an
    /// in-flight request is never interrupted.
    pub async fn fetch_with_token(
        &self,
        key: &str,
        max_retries: u32,
        token: &CancellationToken,
    ) -> Result<A, FetchError> {
        if let Some(artifact) = self.cache.get(key).await {
            debug!(key, "Cache hit");
            return Ok(artifact);
        }

        validate_key(key)?;
        debug!(key, max_retries, "Cache miss, fetching");

        if max_retries == 0 {
            warn!(key, "Retry budget is zero, no attempt will be made");
        }

        let mut attempts = 0;
        let mut last_error: Option<TransportError> = None;

        while attempts < max_retries {
            let result = self.source.fetch(key).await;

            if token.is_cancelled() {
                debug!(key, attempt = attempts + 1, "Fetch cancelled, discarding result");
                return Err(FetchError::Cancelled);
            }

            let error = match result {
                Ok(bytes) => {
                    let artifact = self.decoder.decode(&bytes).map_err(|e| {
                        warn!(key, len = bytes.len(), error = %e, "Fetched data could not be decoded");
                        FetchError::from(e)
                    })?;

                    self.cache.set(key.to_string(), artifact.clone()).await;
                    debug!(key, attempt = attempts + 1, len = bytes.len(), "Fetched and cached");
                    return Ok(artifact);
                }
                Err(e) => e,
            };

            attempts += 1;
            if attempts < max_retries {
                let delay = self.config.backoff_delay(attempts);
                warn!(
                    key,
                    attempt = attempts,
                    max_retries,
                    ?delay,
                    error = %error,
                    "Fetch attempt failed, retrying"
                );
                last_error = Some(error);

                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(key, "Fetch cancelled during backoff");
                        return Err(FetchError::Cancelled);
                    }
                    _ = tokio::time::sleep(delay) => {}
                }
            } else {
                warn!(key, attempt = attempts, max_retries, error = %error, "Fetch attempt failed, giving up");
                last_error = Some(error);
            }
        }

        Err(FetchError::NetworkError {
            attempts,
            source: last_error.unwrap_or(TransportError::Unknown),
        })
    }

    /// Cancel every fetch running under the instance scope.
    ///
    /// The scope stays cancelled, so fetches started afterwards are cancelled
    /// too (after their first network attempt) until [`reset_cancellation`]
    /// is called.
    ///
    /// [`reset_cancellation`]: Fetcher::reset_cancellation
    pub fn cancel(&self) {
        let scope = self.scope.lock();
        if !scope.is_cancelled() {
            info!("Cancelling in-flight fetches");
            scope.cancel();
        }
    }

    /// Install a fresh instance scope for fetches started from now on.
    /// Fetches already running keep the scope they captured.
    pub fn reset_cancellation(&self) {
        let mut scope = self.scope.lock();
        if scope.is_cancelled() {
            debug!("Cancellation scope reset");
        }
        *scope = CancellationToken::new();
    }

    pub fn is_cancelled(&self) -> bool {
        self.scope.lock().is_cancelled()
    }

    /// A child of the current instance scope: cancelled by [`Fetcher::cancel`],
    /// and cancellable on its own without touching other fetches.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.scope.lock().child_token()
    }

    /// Cache lookup without fetching
    pub async fn cached(&self, key: &str) -> Option<A> {
        self.cache.get(key).await
    }

    pub async fn evict(&self, key: &str) {
        self.cache.remove(key).await;
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }
}
