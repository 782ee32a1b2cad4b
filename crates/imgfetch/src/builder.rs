//! # Builder for HttpSourceConfig
//!
//! Fluent construction of [`HttpSourceConfig`] instances.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use imgfetch_engine::HttpSourceConfig;
//! use imgfetch_engine::proxy::{ProxyConfig, ProxyType};
//!
//! let config = HttpSourceConfig::builder()
//!     .with_timeout(Duration::from_secs(60))
//!     .with_connect_timeout(Duration::from_secs(15))
//!     .with_user_agent("MyApp/1.0")
//!     .with_header("Referer", "https://example.com/")
//!     .build();
//!
//! let proxied = HttpSourceConfig::builder()
//!     .with_proxy(ProxyConfig::new("http://proxy.example.com:8080", ProxyType::All))
//!     .build();
//! assert!(!proxied.use_system_proxy);
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

use crate::{HttpSourceConfig, proxy::ProxyConfig};

/// Builder for creating HttpSourceConfig instances with a fluent API
#[derive(Debug, Clone)]
pub struct HttpSourceConfigBuilder {
    config: HttpSourceConfig,
}

impl HttpSourceConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: HttpSourceConfig::default(),
        }
    }

    /// Set the overall timeout for the entire HTTP request; zero disables it
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout; zero disables it
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = follow;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add a custom HTTP header. Invalid names or values are logged and skipped.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let (name, value) = (name.as_ref(), value.as_ref());
        match (
            name.parse::<HeaderName>(),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.config.headers.insert(name, value);
            }
            _ => warn!(name, value, "Ignoring invalid HTTP header"),
        }
        self
    }

    /// Set all HTTP headers, replacing any existing headers
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.config.headers = headers;
        self
    }

    /// Set an explicit proxy; this disables the system proxy
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.config.proxy = Some(proxy);
        self.config.use_system_proxy = false;
        self
    }

    /// Use system proxy settings; ignored when an explicit proxy is configured
    pub fn with_system_proxy(mut self, use_system_proxy: bool) -> Self {
        if self.config.proxy.is_none() {
            self.config.use_system_proxy = use_system_proxy;
        }
        self
    }

    pub fn build(self) -> HttpSourceConfig {
        self.config
    }
}

impl Default for HttpSourceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
