//! derma-test - Shared test fixtures
//!
//! Synthetic images and masks used by the per-crate test suites. All
//! constructors panic on invalid geometry; they are for tests only and
//! take the dimensions the test asked for at face value.

use derma_core::{BinaryMask, Image};

/// A uniform RGB image of one color.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn uniform_rgb(r: u8, g: u8, b: u8, width: u32, height: u32) -> Image<u8> {
    let mut img: Image<u8> = Image::new(width, height, 3).unwrap();
    for y in 0..height {
        for x in 0..width {
            img.set_pixel_unchecked(x, y, 0, r);
            img.set_pixel_unchecked(x, y, 1, g);
            img.set_pixel_unchecked(x, y, 2, b);
        }
    }
    img
}

/// Vertical split image: the left half one color, the right half
/// another.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn split_rgb(
    left: (u8, u8, u8),
    right: (u8, u8, u8),
    width: u32,
    height: u32,
) -> Image<u8> {
    let mut img: Image<u8> = Image::new(width, height, 3).unwrap();
    let mid = width / 2;
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = if x < mid { left } else { right };
            img.set_pixel_unchecked(x, y, 0, r);
            img.set_pixel_unchecked(x, y, 1, g);
            img.set_pixel_unchecked(x, y, 2, b);
        }
    }
    img
}

/// Mask with a filled rectangle of foreground.
///
/// # Panics
///
/// Panics if the rectangle does not fit inside the mask.
pub fn filled_rect_mask(
    width: u32,
    height: u32,
    x0: u32,
    y0: u32,
    rect_w: u32,
    rect_h: u32,
) -> BinaryMask {
    let mut mask = BinaryMask::new(width, height).unwrap();
    for y in y0..y0 + rect_h {
        for x in x0..x0 + rect_w {
            mask.set_pixel(x, y, true).unwrap();
        }
    }
    mask
}

/// The standard two-blob fixture: a 5x5 block and a 3x3 block
/// separated by background, in a 16x8 mask.
pub fn two_blob_mask() -> BinaryMask {
    let mut mask = BinaryMask::new(16, 8).unwrap();
    for y in 1..6 {
        for x in 1..6 {
            mask.set_pixel(x, y, true).unwrap();
        }
    }
    for y in 1..4 {
        for x in 10..13 {
            mask.set_pixel(x, y, true).unwrap();
        }
    }
    mask
}

/// Checkerboard mask: foreground where `(x + y)` is even.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn checkerboard_mask(width: u32, height: u32) -> BinaryMask {
    let mut mask = BinaryMask::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                mask.set_pixel_unchecked(x, y, true);
            }
        }
    }
    mask
}

/// Foreground square of side `n` with a one-pixel background border.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn bordered_square_mask(n: u32) -> BinaryMask {
    let mut mask = BinaryMask::new(n + 2, n + 2).unwrap();
    for y in 1..=n {
        for x in 1..=n {
            mask.set_pixel(x, y, true).unwrap();
        }
    }
    mask
}
