//! Algorithm configuration
//!
//! An [`Algorithm`] bundles a color model (transform + classifier)
//! with the morphological refinement configuration. Validation happens
//! here, at construction time, so the per-pixel loops never have to
//! check parameters.

use crate::error::{Result, SegmentationError};
use derma_color::SkinModel;
use derma_morph::MorphStep;

/// Morphological refinement configuration.
///
/// Disabled stages are `None`; a stage's count/size only exist while
/// the stage is enabled, so the pipeline cannot apply an operation
/// whose flag is off.
///
/// Stage order is fixed: the median prefilter runs on the source image
/// before classification (noise reduction before the decision), region
/// clearing and grow/shrink run on the mask after classification, and
/// the fixed grow-shrink cycle runs last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologyConfig {
    /// Median prefilter window size on the source image.
    pub median: Option<u32>,
    /// Repeated dilation of the mask.
    pub grow: Option<MorphStep>,
    /// Repeated erosion of the mask.
    pub shrink: Option<MorphStep>,
    /// Whether the grow passes run before the shrink passes, and the
    /// per-iteration order inside the fixed cycle.
    pub grow_before_shrink: bool,
    /// Interleaved grow-shrink cycling, applied last.
    pub fixed_cycle: Option<MorphStep>,
    /// Keep only the largest connected region before grow/shrink.
    pub region_clearing: bool,
}

impl Default for MorphologyConfig {
    fn default() -> Self {
        Self {
            median: None,
            grow: None,
            shrink: None,
            grow_before_shrink: true,
            fixed_cycle: None,
            region_clearing: false,
        }
    }
}

impl MorphologyConfig {
    /// Check every enabled stage for degenerate parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentationError::InvalidConfig`] for a zero median
    /// window and propagates [`MorphStep::validate`] failures.
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.median {
            if size == 0 {
                return Err(SegmentationError::InvalidConfig(
                    "median window size must be nonzero".to_string(),
                ));
            }
        }
        for step in [self.grow, self.shrink, self.fixed_cycle].into_iter().flatten() {
            step.validate()?;
        }
        Ok(())
    }
}

/// A complete, validated segmentation algorithm: color model plus
/// morphological refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct Algorithm {
    model: SkinModel,
    morphology: MorphologyConfig,
}

impl Algorithm {
    /// Create an algorithm, validating both halves.
    ///
    /// # Errors
    ///
    /// Returns a threshold or configuration error if either part is
    /// degenerate.
    pub fn new(model: SkinModel, morphology: MorphologyConfig) -> Result<Self> {
        model.validate()?;
        morphology.validate()?;
        Ok(Self { model, morphology })
    }

    /// HSI model with default thresholds and no refinement.
    pub fn hsi() -> Self {
        Self {
            model: SkinModel::hsi(),
            morphology: MorphologyConfig::default(),
        }
    }

    /// HSV model with default thresholds and no refinement.
    pub fn hsv() -> Self {
        Self {
            model: SkinModel::hsv(),
            morphology: MorphologyConfig::default(),
        }
    }

    /// YCbCr model with default thresholds and no refinement.
    pub fn ycbcr() -> Self {
        Self {
            model: SkinModel::ycbcr(),
            morphology: MorphologyConfig::default(),
        }
    }

    /// The color model.
    pub fn model(&self) -> &SkinModel {
        &self.model
    }

    /// The morphological refinement configuration.
    pub fn morphology(&self) -> &MorphologyConfig {
        &self.morphology
    }
}
