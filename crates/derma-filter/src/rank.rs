//! Rank (order-statistic) filters
//!
//! A rank filter replaces each sample with the k-th smallest sample of
//! its square window, per channel. Rank 0.0 is a minimum filter, 1.0 a
//! maximum filter, and 0.5 the median.
//!
//! Windows are clipped at the image border, so edge pixels are filtered
//! over their in-bounds neighborhood only.

use crate::error::{FilterError, FilterResult};
use derma_core::Image;

/// Apply a rank filter with a square `size` x `size` window.
///
/// # Arguments
///
/// * `image` - Input image (any supported channel count)
/// * `size` - Window edge length in pixels
/// * `rank` - Rank value in [0.0, 1.0] (0.0 = min, 0.5 = median, 1.0 = max)
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `size` is zero or
/// `rank` is outside [0, 1].
pub fn rank_filter(image: &Image<u8>, size: u32, rank: f64) -> FilterResult<Image<u8>> {
    if size == 0 {
        return Err(FilterError::InvalidParameters(
            "window size must be nonzero".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&rank) {
        return Err(FilterError::InvalidParameters(format!(
            "rank must be in [0, 1], got {rank}"
        )));
    }

    let (w, h) = image.dimensions();
    let channels = image.channels();
    let mut out = Image::new(w, h, channels)?;

    // window extents around the center; asymmetric for even sizes
    let reach_lo = (size - 1) / 2;
    let reach_hi = size / 2;

    let mut window = Vec::with_capacity((size * size) as usize);

    for y in 0..h {
        for x in 0..w {
            let x0 = x.saturating_sub(reach_lo);
            let x1 = (x + reach_hi).min(w - 1);
            let y0 = y.saturating_sub(reach_lo);
            let y1 = (y + reach_hi).min(h - 1);

            for c in 0..channels {
                window.clear();
                for wy in y0..=y1 {
                    for wx in x0..=x1 {
                        window.push(image.get_pixel_unchecked(wx, wy, c));
                    }
                }
                window.sort_unstable();
                let idx = ((window.len() - 1) as f64 * rank).round() as usize;
                out.set_pixel_unchecked(x, y, c, window[idx]);
            }
        }
    }

    Ok(out)
}

/// Apply a median filter (rank 0.5) with a square window.
pub fn median_filter(image: &Image<u8>, size: u32) -> FilterResult<Image<u8>> {
    rank_filter(image, size, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters() {
        let img: Image<u8> = Image::new(4, 4, 1).unwrap();
        assert!(rank_filter(&img, 0, 0.5).is_err());
        assert!(rank_filter(&img, 3, 1.5).is_err());
    }

    #[test]
    fn test_median_removes_salt_noise() {
        let mut img: Image<u8> = Image::new(5, 5, 1).unwrap();
        img.fill(10);
        img.set_pixel(2, 2, 0, 255).unwrap();

        let filtered = median_filter(&img, 3).unwrap();
        assert_eq!(filtered.get_pixel(2, 2, 0), Some(10));
    }

    #[test]
    fn test_uniform_image_unchanged() {
        let mut img: Image<u8> = Image::new(6, 4, 3).unwrap();
        img.fill(77);
        let filtered = median_filter(&img, 3).unwrap();
        assert_eq!(filtered, img);
    }

    #[test]
    fn test_min_max_ranks() {
        let mut img: Image<u8> = Image::new(3, 3, 1).unwrap();
        img.fill(50);
        img.set_pixel(1, 1, 0, 200).unwrap();
        img.set_pixel(0, 0, 0, 5).unwrap();

        let min = rank_filter(&img, 3, 0.0).unwrap();
        assert_eq!(min.get_pixel(1, 1, 0), Some(5));

        let max = rank_filter(&img, 3, 1.0).unwrap();
        assert_eq!(max.get_pixel(0, 0, 0), Some(200));
    }

    #[test]
    fn test_border_windows_clip() {
        // a corner pixel is filtered over its 2x2 in-bounds window
        let mut img: Image<u8> = Image::new(4, 4, 1).unwrap();
        img.fill(8);
        let filtered = median_filter(&img, 3).unwrap();
        assert_eq!(filtered.get_pixel(0, 0, 0), Some(8));
    }
}
