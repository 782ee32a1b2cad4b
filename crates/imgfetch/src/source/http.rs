use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, info};

use super::ByteSource;
use crate::HttpSourceConfig;
use crate::error::{ClientError, TransportError};
use crate::proxy::build_proxy;

/// Create a reqwest Client with the provided configuration
pub fn create_client(config: &HttpSourceConfig) -> Result<Client, ClientError> {
    let mut client_builder = Client::builder()
        .pool_max_idle_per_host(5)
        .user_agent(&config.user_agent)
        .default_headers(config.merged_headers())
        .redirect(if config.follow_redirects {
            reqwest::redirect::Policy::limited(10)
        } else {
            reqwest::redirect::Policy::none()
        });

    if !config.timeout.is_zero() {
        client_builder = client_builder.timeout(config.timeout);
    }

    if !config.connect_timeout.is_zero() {
        client_builder = client_builder.connect_timeout(config.connect_timeout);
    }

    if let Some(proxy_config) = &config.proxy {
        client_builder = client_builder.proxy(build_proxy(proxy_config)?);
        info!(proxy_url = %proxy_config.url, "Using explicitly configured proxy");
    } else if config.use_system_proxy {
        // reqwest picks up system proxy settings unless no_proxy() is called
        debug!("Using system proxy settings");
    } else {
        client_builder = client_builder.no_proxy();
        debug!("Proxy disabled");
    }

    client_builder.build().map_err(ClientError::from)
}

/// [`ByteSource`] that performs a single HTTP GET per call.
///
/// Non-success status codes are reported as [`TransportError::Status`] so the
/// fetcher retries them like any other transport failure.
#[derive(Debug, Clone)]
pub struct HttpByteSource {
    client: Client,
}

impl HttpByteSource {
    pub fn new(config: &HttpSourceConfig) -> Result<Self, ClientError> {
        Ok(Self {
            client: create_client(config)?,
        })
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ByteSource for HttpByteSource {
    async fn fetch(&self, url: &str) -> Result<Bytes, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        debug!(url, len = bytes.len(), "Fetched resource");
        Ok(bytes)
    }
}
