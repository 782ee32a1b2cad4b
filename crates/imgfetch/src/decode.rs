//! Turning fetched bytes into artifacts.

use std::sync::Arc;

use image::DynamicImage;

use crate::error::DecodeError;

/// Decoded image artifact; cloning shares the pixels.
pub type Image = Arc<DynamicImage>;

/// Pure, synchronous conversion from bytes to an artifact.
///
/// Must be deterministic: the fetcher never retries a decode failure.
pub trait Decoder<A>: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<A, DecodeError>;
}

impl<A, F> Decoder<A> for F
where
    F: Fn(&[u8]) -> Result<A, DecodeError> + Send + Sync,
{
    fn decode(&self, bytes: &[u8]) -> Result<A, DecodeError> {
        self(bytes)
    }
}

/// Decodes any format the `image` crate was built with, guessing the format
/// from the data itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl Decoder<Image> for ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Image, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(Arc::new(image::load_from_memory(bytes)?))
    }
}
