use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] imgfetch_engine::ClientError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] imgfetch_engine::FetchError),

    #[error("Failed to save image: {0}")]
    Save(#[from] image::ImageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("{failed} of {total} URL(s) failed")]
    Incomplete { failed: usize, total: usize },
}
