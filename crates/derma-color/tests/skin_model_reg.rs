//! Skin model regression tests
//!
//! End-to-end checks of the transform + classify pairs on synthetic
//! images, including the reference chroma ranges of the YCbCr variant.

use derma_color::colorspace::{rgb_to_hsi, rgb_to_hsv, rgb_to_ycbcr};
use derma_color::{SkinModel, YcbcrThresholds};
use derma_test::uniform_rgb;

/// Count the skin pixels a model finds in an image.
fn skin_count(model: &SkinModel, image: &derma_core::Image<u8>) -> usize {
    let transformed = model.transform(image).unwrap();
    let (w, h) = transformed.dimensions();
    let mut count = 0;
    for y in 0..h {
        for x in 0..w {
            if model.classify(
                transformed.get_pixel_unchecked(x, y, 0),
                transformed.get_pixel_unchecked(x, y, 1),
                transformed.get_pixel_unchecked(x, y, 2),
            ) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn ycbcr_reference_ranges() {
    let t = YcbcrThresholds::default();
    // the reference truth table: Cb=100, Cr=150 is skin
    assert!(t.classify(0.0, 100.0, 150.0));
    // Cb=200 is rejected regardless of Cr
    for cr in [100.0, 140.0, 150.0, 173.0, 200.0] {
        assert!(!t.classify(0.0, 200.0, cr));
    }
}

#[test]
fn hsv_and_ycbcr_accept_a_skin_tone() {
    let skin = uniform_rgb(224, 172, 138, 6, 6);
    for model in [SkinModel::hsv(), SkinModel::ycbcr()] {
        assert_eq!(skin_count(&model, &skin), 36, "model {}", model.name());
    }
}

#[test]
fn hsi_accepts_its_tuned_locus() {
    // the HSI hue mapping spreads the atan half-plane over the full
    // circle, so its narrow band (309, 331) corresponds to pixels with
    // a large positive green chroma term over a small red-blue term
    let image = uniform_rgb(200, 250, 180, 6, 6);
    assert_eq!(skin_count(&SkinModel::hsi(), &image), 36);
}

#[test]
fn all_models_reject_saturated_blue() {
    let blue = uniform_rgb(20, 40, 230, 6, 6);
    for model in [SkinModel::hsi(), SkinModel::hsv(), SkinModel::ycbcr()] {
        assert_eq!(skin_count(&model, &blue), 0, "model {}", model.name());
    }
}

#[test]
fn achromatic_pixels_stay_finite_everywhere() {
    for v in 0..=255u8 {
        let hsi = rgb_to_hsi(v, v, v);
        assert!(hsi.h.is_finite() && hsi.s.is_finite() && hsi.i.is_finite());

        let hsv = rgb_to_hsv(v, v, v);
        assert!(hsv.h.is_finite());
        assert_eq!(hsv.s, 0.0);

        let ycbcr = rgb_to_ycbcr(v, v, v);
        assert!(ycbcr.cb.is_finite() && ycbcr.cr.is_finite());
    }
}

#[test]
fn hsv_hue_convention_is_signed() {
    // hue stays in (-180, 180] over a sweep of saturated colors
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let hsv = rgb_to_hsv(r, g, b);
                assert!(hsv.h > -180.0 && hsv.h <= 180.0, "rgb ({r}, {g}, {b})");
            }
        }
    }
}
