//! derma-region - Connected component analysis for binary masks
//!
//! This crate covers everything the segmentation pipeline derives from
//! a finished mask's spatial structure:
//!
//! - [`label`] - forward-scan connected-component labeling with
//!   on-the-fly merging, and minor-region deletion
//! - [`seed`] - boundary seed extraction (full-mask scan or a single
//!   connected region via breadth-first traversal)
//! - [`kdtree`] - a small 2D nearest-neighbor index over pixel
//!   coordinates
//! - [`distance`] - signed distance maps against the mask boundary

pub mod distance;
pub mod error;
pub mod kdtree;
pub mod label;
pub mod seed;

pub use distance::build_distance_map;
pub use error::{RegionError, RegionResult};
pub use kdtree::KdTree;
pub use label::{Labeling, Region, clear_minor_regions, label_regions};
pub use seed::{SeedOptions, find_seeds};
