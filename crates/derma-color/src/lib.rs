//! derma-color - Color-space transforms and skin classification
//!
//! This crate contains the colorimetric half of the segmentation
//! pipeline:
//!
//! - [`colorspace`] - per-pixel and image-level RGB conversions to the
//!   HSI, HSV, and YCbCr color spaces
//! - [`threshold`] - hand-tuned threshold parameter sets and the
//!   skin/non-skin decision functions, one per color space
//! - [`SkinModel`] - the closed set of color model variants, each
//!   bundling a transform with its matching classifier
//!
//! The variant set is fixed and known at compile time, so models are
//! selected by enum tag rather than trait objects.

pub mod colorspace;
pub mod error;
pub mod model;
pub mod threshold;

pub use colorspace::{Hsi, Hsv, YCbCr};
pub use error::{ColorError, ColorResult};
pub use model::SkinModel;
pub use threshold::{HsiThresholds, HsvThresholds, YcbcrThresholds};
