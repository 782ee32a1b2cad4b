use reqwest::Proxy;

use crate::error::ClientError;

/// Proxy flavours understood by the HTTP byte source
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ProxyType {
    /// Proxy plain `http://` requests only
    #[default]
    Http,
    /// Proxy `https://` requests only
    Https,
    /// SOCKS5 proxy for every request
    Socks5,
    /// Proxy every request regardless of scheme
    All,
}

/// Basic credentials for the proxy
#[derive(Debug, Clone)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

/// Proxy configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Proxy server URL (e.g., "http://proxy.example.com:8080")
    pub url: String,
    pub proxy_type: ProxyType,
    pub auth: Option<ProxyAuth>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>, proxy_type: ProxyType) -> Self {
        Self {
            url: url.into(),
            proxy_type,
            auth: None,
        }
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(ProxyAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// URL handed to reqwest; SOCKS5 proxies get their scheme added when missing.
    fn effective_url(&self) -> String {
        match self.proxy_type {
            ProxyType::Socks5 if !self.url.starts_with("socks5") => {
                format!("socks5://{}", self.url)
            }
            _ => self.url.clone(),
        }
    }
}

/// Turn a [`ProxyConfig`] into a reqwest [`Proxy`]
pub fn build_proxy(config: &ProxyConfig) -> Result<Proxy, ClientError> {
    let url = config.effective_url();

    let proxy = match config.proxy_type {
        ProxyType::Http => Proxy::http(&url),
        ProxyType::Https => Proxy::https(&url),
        ProxyType::Socks5 | ProxyType::All => Proxy::all(&url),
    }
    .map_err(|e| ClientError::Proxy(format!("{:?} proxy '{}': {e}", config.proxy_type, url)))?;

    Ok(match &config.auth {
        Some(auth) => proxy.basic_auth(&auth.username, &auth.password),
        None => proxy,
    })
}
