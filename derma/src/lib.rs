//! derma - Colorimetric skin-region segmentation
//!
//! Given a color image, derma produces a binary mask classifying each
//! pixel as skin or non-skin, refines it with morphological operations
//! and connected-component cleanup, and derives boundary seeds and
//! signed distance maps from the result.
//!
//! Segmentation is purely threshold- and morphology-based: a
//! [`color::SkinModel`] transforms RGB pixels into one of three color
//! spaces (HSI, HSV, YCbCr) and classifies them against hand-tuned
//! cutoffs; no learned models are involved.
//!
//! # Example
//!
//! ```
//! use derma::{Algorithm, Segmentation};
//! use derma::Image;
//!
//! let segmentation = Segmentation::new(Algorithm::ycbcr());
//!
//! let image: Image<u8> = Image::new(64, 64, 3).unwrap();
//! let mask = segmentation.compute_mask(&image).unwrap();
//! assert_eq!(mask.dimensions(), (64, 64));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use derma_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use derma_color as color;
pub use derma_filter as filter;
pub use derma_io as io;
pub use derma_morph as morph;
pub use derma_region as region;

mod algorithm;
mod error;
mod segmentation;

pub use algorithm::{Algorithm, MorphologyConfig};
pub use error::SegmentationError;
pub use segmentation::Segmentation;
