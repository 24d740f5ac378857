//! Error types for derma-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] derma_core::Error),

    /// Invalid structuring element or repetition parameters
    #[error("invalid morphology parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for morphology operations
pub type MorphResult<T> = Result<T, MorphError>;
