//! Facade error type
//!
//! Aggregates the domain crate errors so pipeline callers handle a
//! single type. No variant is retried or silently recovered; any
//! detected violation aborts the current pipeline call.

use thiserror::Error;

/// Errors surfaced by the segmentation facade
#[derive(Debug, Error)]
pub enum SegmentationError {
    /// Core container error
    #[error("core error: {0}")]
    Core(#[from] derma_core::Error),

    /// Color transform or threshold error
    #[error("color error: {0}")]
    Color(#[from] derma_color::ColorError),

    /// Prefilter error
    #[error("filter error: {0}")]
    Filter(#[from] derma_filter::FilterError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] derma_morph::MorphError),

    /// Region analysis error
    #[error("region error: {0}")]
    Region(#[from] derma_region::RegionError),

    /// Image I/O error
    #[error("I/O error: {0}")]
    Io(#[from] derma_io::IoError),

    /// Invalid pipeline configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, SegmentationError>;
