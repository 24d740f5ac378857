//! SkinModel - the closed set of color model variants
//!
//! Each variant bundles a color-space transform with its matching
//! threshold classifier. The set is fixed at compile time; callers
//! select a model by tag and may retune its thresholds between runs.

use crate::colorspace::{transform_rgb_to_hsi, transform_rgb_to_hsv, transform_rgb_to_ycbcr};
use crate::error::ColorResult;
use crate::threshold::{HsiThresholds, HsvThresholds, YcbcrThresholds};
use derma_core::{ChannelImage, Image};

/// A color model variant: transform + classifier pair.
#[derive(Debug, Clone, PartialEq)]
pub enum SkinModel {
    /// HSI transform with hue-band thresholds.
    Hsi(HsiThresholds),
    /// HSV transform with linear-inequality thresholds.
    Hsv(HsvThresholds),
    /// YCbCr transform with chroma-range thresholds.
    YCbCr(YcbcrThresholds),
}

impl SkinModel {
    /// HSI model with the default hand-tuned thresholds.
    pub fn hsi() -> Self {
        Self::Hsi(HsiThresholds::default())
    }

    /// HSV model with the default hand-tuned thresholds.
    pub fn hsv() -> Self {
        Self::Hsv(HsvThresholds::default())
    }

    /// YCbCr model with the default hand-tuned thresholds.
    pub fn ycbcr() -> Self {
        Self::YCbCr(YcbcrThresholds::default())
    }

    /// Short model name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hsi(_) => "hsi",
            Self::Hsv(_) => "hsv",
            Self::YCbCr(_) => "ycbcr",
        }
    }

    /// Validate the carried threshold set.
    pub fn validate(&self) -> ColorResult<()> {
        match self {
            Self::Hsi(t) => t.validate(),
            Self::Hsv(t) => t.validate(),
            Self::YCbCr(t) => t.validate(),
        }
    }

    /// Transform an RGB image into this model's color space.
    ///
    /// # Errors
    ///
    /// Fails if the input is not a 3-channel image.
    pub fn transform(&self, image: &Image<u8>) -> ColorResult<ChannelImage> {
        match self {
            Self::Hsi(_) => transform_rgb_to_hsi(image),
            Self::Hsv(_) => transform_rgb_to_hsv(image),
            Self::YCbCr(_) => transform_rgb_to_ycbcr(image),
        }
    }

    /// Classify one transformed pixel as skin or non-skin.
    ///
    /// The channel ordering matches the output of [`Self::transform`].
    pub fn classify(&self, c1: f64, c2: f64, c3: f64) -> bool {
        match self {
            Self::Hsi(t) => t.classify(c1, c2, c3),
            Self::Hsv(t) => t.classify(c1, c2, c3),
            Self::YCbCr(t) => t.classify(c1, c2, c3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names() {
        assert_eq!(SkinModel::hsi().name(), "hsi");
        assert_eq!(SkinModel::hsv().name(), "hsv");
        assert_eq!(SkinModel::ycbcr().name(), "ycbcr");
    }

    #[test]
    fn test_default_models_validate() {
        assert!(SkinModel::hsi().validate().is_ok());
        assert!(SkinModel::hsv().validate().is_ok());
        assert!(SkinModel::ycbcr().validate().is_ok());
    }

    #[test]
    fn test_transform_and_classify_consistency() {
        // a uniform skin-tone image classifies as skin under YCbCr
        let mut img: Image<u8> = Image::new(2, 2, 3).unwrap();
        for (c, v) in [(0u32, 220u8), (1, 160), (2, 130)] {
            for y in 0..2 {
                for x in 0..2 {
                    img.set_pixel(x, y, c, v).unwrap();
                }
            }
        }

        let model = SkinModel::ycbcr();
        let transformed = model.transform(&img).unwrap();
        let skin = model.classify(
            transformed.get_pixel_unchecked(0, 0, 0),
            transformed.get_pixel_unchecked(0, 0, 1),
            transformed.get_pixel_unchecked(0, 0, 2),
        );
        assert!(skin);
    }
}
