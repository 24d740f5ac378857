//! Error types for derma-io

use thiserror::Error;

/// Errors that can occur during image I/O
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] derma_core::Error),

    /// Image decode error
    #[error("decode error: {0}")]
    Decode(image::ImageError),

    /// Image encode error
    #[error("encode error: {0}")]
    Encode(image::ImageError),

    /// Sample buffer does not match the declared geometry
    #[error("sample buffer does not match image geometry")]
    BufferGeometry,
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
