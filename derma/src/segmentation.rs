//! Segmentation facade
//!
//! Orchestrates the pipeline: median prefilter, color transform,
//! per-pixel threshold classification, region clearing, grow/shrink
//! refinement, and fixed grow-shrink cycling, in that order. Seeds and
//! distance maps are exposed as post-mask operations.
//!
//! The held [`Algorithm`] can be swapped at any time; the swap affects
//! only subsequent calls. All intermediate buffers are local to one
//! call and dropped on every exit path.

use crate::algorithm::Algorithm;
use crate::error::Result;
use derma_core::{BinaryMask, BoundarySeed, DistanceMap, Image, render};
use derma_filter::median_filter;
use derma_morph::{grow, grow_shrink, shrink};
use derma_region::{SeedOptions, build_distance_map, clear_minor_regions, find_seeds};
use log::{debug, trace};
use std::path::Path;

/// Skin segmentation with an interchangeable algorithm.
#[derive(Debug, Clone)]
pub struct Segmentation {
    algorithm: Algorithm,
}

impl Segmentation {
    /// Create a segmentation around an algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// The current algorithm.
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    /// Replace the algorithm; only subsequent calls are affected.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Compute the skin mask of a 3-channel RGB image.
    ///
    /// # Errors
    ///
    /// Fails fast on non-3-channel input; propagates filter and
    /// morphology errors.
    pub fn compute_mask(&self, image: &Image<u8>) -> Result<BinaryMask> {
        let model = self.algorithm.model();
        let config = self.algorithm.morphology();

        let filtered;
        let source = match config.median {
            Some(size) => {
                filtered = median_filter(image, size)?;
                debug!("median prefilter applied, window {size}");
                &filtered
            }
            None => image,
        };

        let transformed = model.transform(source)?;
        let (w, h) = transformed.dimensions();

        let mut mask = BinaryMask::new(w, h)?;
        for y in 0..h {
            for x in 0..w {
                let skin = model.classify(
                    transformed.get_pixel_unchecked(x, y, 0),
                    transformed.get_pixel_unchecked(x, y, 1),
                    transformed.get_pixel_unchecked(x, y, 2),
                );
                if skin {
                    mask.set_pixel_unchecked(x, y, true);
                }
            }
        }
        debug!(
            "{} classifier marked {} of {} pixels",
            model.name(),
            mask.count_foreground(),
            w as usize * h as usize
        );

        if config.region_clearing {
            let cleared = clear_minor_regions(&mut mask);
            trace!("region clearing removed {cleared} pixels");
        }

        if config.grow_before_shrink {
            if let Some(step) = config.grow {
                grow(&mut mask, step.count, step.size)?;
            }
            if let Some(step) = config.shrink {
                shrink(&mut mask, step.count, step.size)?;
            }
        } else {
            if let Some(step) = config.shrink {
                shrink(&mut mask, step.count, step.size)?;
            }
            if let Some(step) = config.grow {
                grow(&mut mask, step.count, step.size)?;
            }
        }

        if let Some(step) = config.fixed_cycle {
            grow_shrink(&mut mask, step.count, step.size, config.grow_before_shrink)?;
        }

        debug!("final mask has {} foreground pixels", mask.count_foreground());
        Ok(mask)
    }

    /// Compute the skin mask and composite it into the image as an
    /// alpha channel (255 for skin, 0 otherwise).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::compute_mask`].
    pub fn compute_mask_as_alpha(&self, image: &Image<u8>) -> Result<Image<u8>> {
        let mask = self.compute_mask(image)?;
        Ok(render::fuse_alpha(image, &mask)?)
    }

    /// Find skin-side boundary seeds of a mask.
    ///
    /// # Errors
    ///
    /// Fails if the refinement step in `options` is degenerate.
    pub fn find_skin_seeds(
        &self,
        mask: &BinaryMask,
        options: &SeedOptions,
    ) -> Result<Vec<BoundarySeed>> {
        Ok(find_seeds(mask, true, options)?)
    }

    /// Find non-skin-side boundary seeds of a mask.
    ///
    /// # Errors
    ///
    /// Fails if the refinement step in `options` is degenerate.
    pub fn find_non_skin_seeds(
        &self,
        mask: &BinaryMask,
        options: &SeedOptions,
    ) -> Result<Vec<BoundarySeed>> {
        Ok(find_seeds(mask, false, options)?)
    }

    /// Compute the signed distance map of a mask.
    ///
    /// # Errors
    ///
    /// Propagates container allocation errors.
    pub fn compute_distance_map(
        &self,
        mask: &BinaryMask,
        restrict_to_largest: bool,
    ) -> Result<DistanceMap> {
        Ok(build_distance_map(mask, restrict_to_largest)?)
    }

    /// Load an image through the I/O collaborator and compute its mask.
    ///
    /// # Errors
    ///
    /// Fails on decode errors and on any [`Self::compute_mask`]
    /// failure.
    pub fn compute_mask_from_file<P: AsRef<Path>>(&self, path: P) -> Result<BinaryMask> {
        let image = derma_io::read_image(path)?;
        self.compute_mask(&image)
    }

    /// Load an image and compute its alpha-channel composite.
    ///
    /// # Errors
    ///
    /// Fails on decode errors and on any [`Self::compute_mask`]
    /// failure.
    pub fn compute_mask_as_alpha_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Image<u8>> {
        let image = derma_io::read_image(path)?;
        self.compute_mask_as_alpha(&image)
    }
}
