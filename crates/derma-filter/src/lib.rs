//! derma-filter - Image filtering for the segmentation pipeline
//!
//! Currently rank (order-statistic) filtering, used by the pipeline as
//! an optional median pre-filter: noise is reduced on the source image
//! before the skin/non-skin decision is made.

pub mod error;
pub mod rank;

pub use error::{FilterError, FilterResult};
pub use rank::{median_filter, rank_filter};
