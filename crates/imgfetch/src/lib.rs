//! # imgfetch
//!
//! Fetches remote images (or any other decodable artifact) by URL, keeping
//! decoded results in an in-memory cache.
//!
//! ## Features
//!
//! - Cache-first lookups keyed by the verbatim URL
//! - Retries with exponential backoff for transport failures
//! - Cooperative cancellation, per instance or per call
//! - Pluggable byte sources, decoders and caches
//!
//! ```no_run
//! use imgfetch_engine::{Fetcher, FetcherConfig, HttpSourceConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::images(&HttpSourceConfig::default(), FetcherConfig::default())?;
//! let image = fetcher.fetch("https://example.com/logo.png").await?;
//! println!("{}x{}", image.width(), image.height());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cache;
pub mod config;
pub mod decode;
pub mod error;
pub mod fetcher;
pub mod key;
pub mod proxy;
pub mod source;

pub use builder::HttpSourceConfigBuilder;
pub use cache::{ArtifactCache, CacheConfig, MemoryCache};
pub use config::{FetcherConfig, HttpSourceConfig};
pub use decode::{Decoder, Image, ImageDecoder};
pub use error::{ClientError, DecodeError, FetchError, TransportError};
pub use fetcher::Fetcher;
pub use proxy::{ProxyAuth, ProxyConfig, ProxyType};
pub use source::{ByteSource, HttpByteSource, create_client};

pub use tokio_util::sync::CancellationToken;
