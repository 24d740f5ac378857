//! Segmentation facade regression tests
//!
//! Full-pipeline checks: mask/alpha round-trip, the morphology stage
//! ordering, seed and distance-map pass-throughs, and the file-based
//! conveniences.

use derma::color::SkinModel;
use derma::morph::MorphStep;
use derma::region::SeedOptions;
use derma::{Algorithm, MorphologyConfig, Segmentation};
use derma_test::{split_rgb, uniform_rgb};

const SKIN: (u8, u8, u8) = (220, 160, 130);
const SKY: (u8, u8, u8) = (40, 90, 220);

fn ycbcr_with(config: MorphologyConfig) -> Segmentation {
    Segmentation::new(Algorithm::new(SkinModel::ycbcr(), config).unwrap())
}

#[test]
fn alpha_round_trip_reproduces_mask() {
    let seg = Segmentation::new(Algorithm::ycbcr());
    let image = split_rgb(SKIN, SKY, 12, 8);

    let mask = seg.compute_mask(&image).unwrap();
    let fused = seg.compute_mask_as_alpha(&image).unwrap();

    // thresholding the alpha channel at 128 reproduces the mask
    // exactly
    let mut rebuilt = derma::BinaryMask::new(12, 8).unwrap();
    for y in 0..8 {
        for x in 0..12 {
            if fused.get_pixel_unchecked(x, y, 3) >= 128 {
                rebuilt.set_pixel_unchecked(x, y, true);
            }
        }
    }
    assert_eq!(rebuilt, mask);
}

#[test]
fn full_refinement_pipeline() {
    // skin left half plus an isolated skin pixel in the sky half;
    // region clearing removes the stray, then a grow/shrink round
    // cleans the edge
    let mut image = split_rgb(SKIN, SKY, 14, 8);
    for (c, v) in [(0u32, SKIN.0), (1, SKIN.1), (2, SKIN.2)] {
        image.set_pixel(12, 2, c, v).unwrap();
    }

    let config = MorphologyConfig {
        median: Some(3),
        grow: Some(MorphStep::new(1, 1)),
        shrink: Some(MorphStep::new(1, 1)),
        grow_before_shrink: true,
        fixed_cycle: Some(MorphStep::new(1, 1)),
        region_clearing: true,
    };
    let seg = ycbcr_with(config);
    let mask = seg.compute_mask(&image).unwrap();

    // the stray pixel is gone and one contiguous patch remains
    assert_eq!(mask.get_pixel(12, 2), Some(false));
    let labeling = derma::region::label_regions(&mask);
    assert!(labeling.non_empty_count() <= 1);
}

#[test]
fn seeds_through_the_facade() {
    let seg = Segmentation::new(Algorithm::ycbcr());
    let image = split_rgb(SKIN, SKY, 10, 6);
    let mask = seg.compute_mask(&image).unwrap();

    let skin_seeds = seg
        .find_skin_seeds(&mask, &SeedOptions::default())
        .unwrap();
    let non_skin_seeds = seg
        .find_non_skin_seeds(&mask, &SeedOptions::default())
        .unwrap();

    assert!(!skin_seeds.is_empty());
    assert!(!non_skin_seeds.is_empty());
    assert!(skin_seeds.iter().all(|s| s.label));
    assert!(non_skin_seeds.iter().all(|s| !s.label));

    // seeds sit on their own side of the boundary
    for s in &skin_seeds {
        assert_eq!(mask.get_pixel(s.x, s.y), Some(true));
    }
    for s in &non_skin_seeds {
        assert_eq!(mask.get_pixel(s.x, s.y), Some(false));
    }
}

#[test]
fn distance_map_through_the_facade() {
    let seg = Segmentation::new(Algorithm::ycbcr());
    let image = split_rgb(SKIN, SKY, 10, 6);
    let mask = seg.compute_mask(&image).unwrap();

    let map = seg.compute_distance_map(&mask, true).unwrap();
    assert_eq!(map.dimensions(), (10, 6));

    // interior of the skin half is negative, deep sky positive
    assert!(map.get_pixel(0, 3, 0).unwrap() <= 0);
    assert!(map.get_pixel(9, 3, 0).unwrap() > 0);
}

#[test]
fn compute_mask_from_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");

    let image = uniform_rgb(SKIN.0, SKIN.1, SKIN.2, 6, 6);
    derma::io::write_image(&image, &path).unwrap();

    let seg = Segmentation::new(Algorithm::ycbcr());
    let from_file = seg.compute_mask_from_file(&path).unwrap();
    let from_memory = seg.compute_mask(&image).unwrap();
    assert_eq!(from_file, from_memory);

    let fused = seg.compute_mask_as_alpha_from_file(&path).unwrap();
    assert_eq!(fused.channels(), 4);
}
