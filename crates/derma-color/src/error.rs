//! Error types for derma-color

use thiserror::Error;

/// Errors that can occur during color transform and classification
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] derma_core::Error),

    /// Degenerate or out-of-order threshold configuration
    #[error("invalid threshold configuration: {0}")]
    InvalidThreshold(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
