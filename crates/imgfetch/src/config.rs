use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::{CacheConfig, proxy::ProxyConfig};

const DEFAULT_USER_AGENT: &str = concat!("imgfetch/", env!("CARGO_PKG_VERSION"));

/// Retry and cache settings for a [`Fetcher`](crate::Fetcher)
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Network attempts per fetch when no explicit budget is given
    pub max_retries: u32,

    /// Base for exponential backoff; the wait after failed attempt `n` is `base * 2^n`
    pub retry_delay_base: Duration,

    /// Cache configuration for caches built from this config
    pub cache: CacheConfig,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_base: Duration::from_secs(1),
            cache: CacheConfig::default(),
        }
    }
}

impl FetcherConfig {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay_base(mut self, base: Duration) -> Self {
        self.retry_delay_base = base;
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Delay to wait after `attempts` failed attempts.
    pub fn backoff_delay(&self, attempts: u32) -> Duration {
        self.retry_delay_base
            .saturating_mul(2_u32.saturating_pow(attempts))
    }
}

/// Configurable options for the HTTP byte source
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Overall timeout for the entire HTTP request
    pub timeout: Duration,

    /// Connection timeout (time to establish initial connection)
    pub connect_timeout: Duration,

    /// Whether to follow redirects
    pub follow_redirects: bool,

    /// User agent string
    pub user_agent: String,

    /// Custom HTTP headers for requests
    pub headers: HeaderMap,

    /// Proxy configuration (optional)
    pub proxy: Option<ProxyConfig>,

    /// Whether to use system proxy settings if available
    pub use_system_proxy: bool,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            follow_redirects: true,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: HttpSourceConfig::get_default_headers(),
            proxy: None,
            use_system_proxy: true,
        }
    }
}

impl HttpSourceConfig {
    pub fn builder() -> crate::builder::HttpSourceConfigBuilder {
        crate::builder::HttpSourceConfigBuilder::new()
    }

    /// Merge custom headers over the defaults; custom values win for the same name.
    pub fn merged_headers(&self) -> HeaderMap {
        let mut headers = HttpSourceConfig::get_default_headers();
        for (name, value) in self.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut default_headers = HeaderMap::new();

        default_headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("image/avif,image/webp,image/png,image/*;q=0.8,*/*;q=0.5"),
        );

        default_headers.insert(
            reqwest::header::CONNECTION,
            HeaderValue::from_static("keep-alive"),
        );

        default_headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let config = FetcherConfig::default();
        assert_eq!(config.backoff_delay(1), Duration::from_secs(2));
        assert_eq!(config.backoff_delay(2), Duration::from_secs(4));
        assert_eq!(config.backoff_delay(3), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_scales_with_base() {
        let config = FetcherConfig::default().with_retry_delay_base(Duration::from_millis(100));
        assert_eq!(config.backoff_delay(1), Duration::from_millis(200));
        assert_eq!(config.backoff_delay(4), Duration::from_millis(1600));
    }

    #[test]
    fn test_backoff_saturates() {
        let config = FetcherConfig::default();
        assert_eq!(
            config.backoff_delay(u32::MAX),
            Duration::from_secs(u64::from(u32::MAX))
        );
    }

    #[test]
    fn test_custom_headers_override_defaults() {
        let mut config = HttpSourceConfig::default();
        config.headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("image/png"),
        );
        config
            .headers
            .insert("x-trace", HeaderValue::from_static("abc"));

        let merged = config.merged_headers();
        assert_eq!(merged.get(reqwest::header::ACCEPT).unwrap(), "image/png");
        assert_eq!(merged.get("x-trace").unwrap(), "abc");
        assert_eq!(merged.get(reqwest::header::CONNECTION).unwrap(), "keep-alive");
    }
}
