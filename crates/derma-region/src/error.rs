//! Error types for derma-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] derma_core::Error),

    /// Morphology error from a seed refinement pre-pass
    #[error("morphology error: {0}")]
    Morph(#[from] derma_morph::MorphError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
