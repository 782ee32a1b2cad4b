use std::sync::Arc;

use reqwest::StatusCode;

/// Failure reported by a [`ByteSource`](crate::source::ByteSource).
///
/// Every transport error is treated as transient by the fetcher and retried
/// until the retry budget is spent.
#[derive(Debug, thiserror::Error, Clone)]
pub enum TransportError {
    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: Arc<reqwest::Error>,
    },

    #[error("Server returned status code {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: Arc<std::io::Error>,
    },

    #[error("Transport error: {0}")]
    Other(String),

    /// Sentinel for a retry loop that ended without observing any error.
    #[error("Unknown transport error")]
    Unknown,
}

// Manual implementations because of the Arc wrapping.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http {
            source: Arc::new(err),
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io {
            source: Arc::new(err),
        }
    }
}

/// Failure to turn fetched bytes into an artifact.
#[derive(Debug, thiserror::Error, Clone)]
pub enum DecodeError {
    #[error("No data to decode")]
    Empty,

    #[error("Image decoding failed: {source}")]
    Image {
        #[from]
        source: Arc<image::ImageError>,
    },

    #[error("Decoding failed: {0}")]
    Other(String),
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        DecodeError::Image {
            source: Arc::new(err),
        }
    }
}

/// Outcome of a failed [`Fetcher::fetch`](crate::Fetcher::fetch) call.
#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchError {
    #[error("Invalid resource key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Fetch cancelled")]
    Cancelled,

    #[error("Invalid data: {0}")]
    InvalidData(#[from] DecodeError),

    #[error("Network error after {attempts} attempt(s): {source}")]
    NetworkError {
        attempts: u32,
        #[source]
        source: TransportError,
    },
}

impl FetchError {
    /// Whether the failure class is transient. Only network failures are,
    /// and by the time one is surfaced its retry budget is already spent.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::NetworkError { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Errors raised while building the HTTP client behind
/// [`HttpByteSource`](crate::source::HttpByteSource).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid proxy configuration: {0}")]
    Proxy(String),
}
