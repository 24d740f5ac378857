//! Compositing and visualization helpers
//!
//! Small utilities that turn masks, seeds, and distance maps into
//! viewable RGB/RGBA images. These sit next to the containers because
//! every downstream crate wants them for debugging output.

use crate::error::{Error, Result};
use crate::image::{DistanceMap, Image};
use crate::mask::BinaryMask;
use crate::point::BoundarySeed;

/// Render a binary mask as a 3-channel image (foreground white,
/// background black).
pub fn mask_to_rgb(mask: &BinaryMask) -> Result<Image<u8>> {
    let (w, h) = mask.dimensions();
    let mut out: Image<u8> = Image::new(w, h, 3)?;

    for y in 0..h {
        for x in 0..w {
            if mask.get_pixel_unchecked(x, y) {
                out.set_pixel_unchecked(x, y, 0, 255);
                out.set_pixel_unchecked(x, y, 1, 255);
                out.set_pixel_unchecked(x, y, 2, 255);
            }
        }
    }

    Ok(out)
}

/// Fuse a binary mask into an RGB image as its alpha channel.
///
/// Produces a 4-channel image whose first three channels are copied from
/// `image` and whose alpha channel is 255 for mask-foreground pixels and
/// 0 otherwise.
///
/// # Errors
///
/// Returns [`Error::UnsupportedChannels`] if `image` is not 3-channel and
/// [`Error::DimensionMismatch`] if the mask dimensions differ from the
/// image dimensions.
pub fn fuse_alpha(image: &Image<u8>, mask: &BinaryMask) -> Result<Image<u8>> {
    if image.channels() != 3 {
        return Err(Error::UnsupportedChannels(image.channels()));
    }
    if !mask.sizes_equal(image) {
        return Err(Error::DimensionMismatch {
            expected: image.dimensions(),
            actual: mask.dimensions(),
        });
    }

    let (w, h) = image.dimensions();
    let mut out: Image<u8> = Image::new(w, h, 4)?;

    for y in 0..h {
        for x in 0..w {
            for c in 0..3 {
                out.set_pixel_unchecked(x, y, c, image.get_pixel_unchecked(x, y, c));
            }
            let alpha = if mask.get_pixel_unchecked(x, y) { 255 } else { 0 };
            out.set_pixel_unchecked(x, y, 3, alpha);
        }
    }

    Ok(out)
}

/// Paint boundary seeds onto an RGB image: skin seeds red, non-skin
/// seeds green.
///
/// # Errors
///
/// Returns [`Error::UnsupportedChannels`] if the image has fewer than 3
/// channels, and [`Error::OutOfBounds`] if any seed lies outside the
/// image.
pub fn overlay_seeds(image: &mut Image<u8>, seeds: &[BoundarySeed]) -> Result<()> {
    if image.channels() < 3 {
        return Err(Error::UnsupportedChannels(image.channels()));
    }

    for seed in seeds {
        let (r, g) = if seed.label { (255, 0) } else { (0, 255) };
        image.set_pixel(seed.x, seed.y, 0, r)?;
        image.set_pixel(seed.x, seed.y, 1, g)?;
        image.set_pixel(seed.x, seed.y, 2, 0)?;
    }

    Ok(())
}

/// Render a signed distance map as an 8-bit grayscale image.
///
/// Zero (boundary) maps to mid-gray 128; interior values ramp down
/// towards 0 at the deepest point, exterior values ramp up towards 255
/// at the farthest point. Degenerate maps (all-zero on one side) leave
/// that side at 128.
pub fn distance_map_to_gray(map: &DistanceMap) -> Result<Image<u8>> {
    if map.channels() != 1 {
        return Err(Error::UnsupportedChannels(map.channels()));
    }

    let (w, h) = map.dimensions();
    let mut out: Image<u8> = Image::new(w, h, 1)?;

    let maximum = map.data().iter().copied().max().unwrap_or(0);
    let minimum = map.data().iter().copied().min().unwrap_or(0);

    for y in 0..h {
        for x in 0..w {
            let val = map.get_pixel_unchecked(x, y, 0);
            let gray = if val >= 0 {
                if maximum > 0 {
                    (128 + val as i64 * 127 / maximum as i64) as u8
                } else {
                    128
                }
            } else if minimum < 0 {
                (128 - val as i64 * 128 / minimum as i64) as u8
            } else {
                128
            };
            out.set_pixel_unchecked(x, y, 0, gray);
        }
    }

    Ok(out)
}

/// Render a signed distance map as a false-color RGB image.
///
/// Boundary pixels are black; interior pixels ramp from white near the
/// boundary to green at the deepest point; exterior pixels ramp from
/// white to red. The ramp is logarithmic (base 2) so near-boundary
/// detail stays visible on large maps.
pub fn distance_map_to_rgb(map: &DistanceMap) -> Result<Image<u8>> {
    if map.channels() != 1 {
        return Err(Error::UnsupportedChannels(map.channels()));
    }

    let (w, h) = map.dimensions();
    let mut out: Image<u8> = Image::new(w, h, 3)?;

    let maximum = map.data().iter().copied().max().unwrap_or(0);
    let minimum = map.data().iter().copied().min().unwrap_or(0);
    // log2 of the extreme magnitudes; at least 1 to keep division sane
    let max_log = f64::from(maximum.max(1)).log2().max(1.0);
    let min_log = f64::from(minimum.abs().max(1)).log2().max(1.0);

    for y in 0..h {
        for x in 0..w {
            let val = map.get_pixel_unchecked(x, y, 0);

            if val == 0 {
                continue; // boundary stays black
            }

            let fall = f64::from(val.abs()).log2();
            if val < 0 {
                let ramp = (255.0 - fall * 255.0 / min_log).clamp(0.0, 255.0) as u8;
                out.set_pixel_unchecked(x, y, 0, ramp);
                out.set_pixel_unchecked(x, y, 1, 255);
                out.set_pixel_unchecked(x, y, 2, ramp);
            } else {
                let ramp = (255.0 - fall * 255.0 / max_log).clamp(0.0, 255.0) as u8;
                out.set_pixel_unchecked(x, y, 0, 255);
                out.set_pixel_unchecked(x, y, 1, ramp);
                out.set_pixel_unchecked(x, y, 2, ramp);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::BoundarySeed;

    fn cross_mask() -> BinaryMask {
        let mut mask = BinaryMask::new(5, 5).unwrap();
        for i in 0..5 {
            mask.set_pixel(i, 2, true).unwrap();
            mask.set_pixel(2, i, true).unwrap();
        }
        mask
    }

    #[test]
    fn test_mask_to_rgb() {
        let rgb = mask_to_rgb(&cross_mask()).unwrap();
        assert_eq!(rgb.channels(), 3);
        assert_eq!(rgb.get_pixel(2, 2, 0), Some(255));
        assert_eq!(rgb.get_pixel(0, 0, 0), Some(0));
    }

    #[test]
    fn test_fuse_alpha() {
        let img: Image<u8> = Image::new(5, 5, 3).unwrap();
        let fused = fuse_alpha(&img, &cross_mask()).unwrap();
        assert_eq!(fused.channels(), 4);
        assert_eq!(fused.get_pixel(2, 2, 3), Some(255));
        assert_eq!(fused.get_pixel(0, 0, 3), Some(0));
    }

    #[test]
    fn test_fuse_alpha_dimension_mismatch() {
        let img: Image<u8> = Image::new(6, 5, 3).unwrap();
        assert!(matches!(
            fuse_alpha(&img, &cross_mask()),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_fuse_alpha_bad_channels() {
        let img: Image<u8> = Image::new(5, 5, 1).unwrap();
        assert!(matches!(
            fuse_alpha(&img, &cross_mask()),
            Err(Error::UnsupportedChannels(1))
        ));
    }

    #[test]
    fn test_overlay_seeds() {
        let mut img: Image<u8> = Image::new(5, 5, 3).unwrap();
        let seeds = [BoundarySeed::new(1, 1, true), BoundarySeed::new(3, 3, false)];
        overlay_seeds(&mut img, &seeds).unwrap();
        assert_eq!(img.get_pixel(1, 1, 0), Some(255));
        assert_eq!(img.get_pixel(1, 1, 1), Some(0));
        assert_eq!(img.get_pixel(3, 3, 1), Some(255));
    }

    #[test]
    fn test_overlay_seeds_out_of_bounds() {
        let mut img: Image<u8> = Image::new(5, 5, 3).unwrap();
        let seeds = [BoundarySeed::new(9, 9, true)];
        assert!(overlay_seeds(&mut img, &seeds).is_err());
    }

    #[test]
    fn test_distance_map_to_gray() {
        let mut map: DistanceMap = Image::new(3, 1, 1).unwrap();
        map.set_pixel(0, 0, 0, -4).unwrap();
        map.set_pixel(1, 0, 0, 0).unwrap();
        map.set_pixel(2, 0, 0, 4).unwrap();

        let gray = distance_map_to_gray(&map).unwrap();
        assert_eq!(gray.get_pixel(0, 0, 0), Some(0));
        assert_eq!(gray.get_pixel(1, 0, 0), Some(128));
        assert_eq!(gray.get_pixel(2, 0, 0), Some(255));
    }

    #[test]
    fn test_distance_map_to_gray_all_zero() {
        let map: DistanceMap = Image::new(2, 2, 1).unwrap();
        let gray = distance_map_to_gray(&map).unwrap();
        assert!(gray.data().iter().all(|&v| v == 128));
    }

    #[test]
    fn test_distance_map_to_rgb_boundary_black() {
        let mut map: DistanceMap = Image::new(3, 1, 1).unwrap();
        map.set_pixel(0, 0, 0, -2).unwrap();
        map.set_pixel(2, 0, 0, 2).unwrap();

        let rgb = distance_map_to_rgb(&map).unwrap();
        // boundary pixel stays black
        assert_eq!(rgb.get_pixel(1, 0, 0), Some(0));
        assert_eq!(rgb.get_pixel(1, 0, 1), Some(0));
        // interior is green-dominant, exterior red-dominant
        assert_eq!(rgb.get_pixel(0, 0, 1), Some(255));
        assert_eq!(rgb.get_pixel(2, 0, 0), Some(255));
    }
}
