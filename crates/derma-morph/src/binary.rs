//! Binary morphological operations
//!
//! Implements dilation and erosion for binary masks with a square
//! structuring element, given by its radius: `size = k` means a
//! (2k+1) x (2k+1) window. All operations work in place on the mask;
//! a snapshot of the source is taken per pass so the decision for each
//! pixel only reads pre-pass state.
//!
//! Boundary condition is asymmetric: dilation reads only in-bounds
//! neighbors, while erosion treats out-of-bounds positions as
//! background, so foreground touching the image border erodes.

use crate::error::{MorphError, MorphResult};
use derma_core::BinaryMask;

/// One repeated morphology stage: `count` passes with a structuring
/// element of radius `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphStep {
    pub count: u32,
    pub size: u32,
}

impl MorphStep {
    /// Create a new step.
    pub fn new(count: u32, size: u32) -> Self {
        Self { count, size }
    }

    /// Check the step for degenerate values.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidParameters`] if the count or size
    /// is zero.
    pub fn validate(&self) -> MorphResult<()> {
        if self.count == 0 || self.size == 0 {
            return Err(MorphError::InvalidParameters(format!(
                "count and size must be nonzero, got count {} size {}",
                self.count, self.size
            )));
        }
        Ok(())
    }
}

fn check_size(size: u32) -> MorphResult<()> {
    if size == 0 {
        return Err(MorphError::InvalidParameters(
            "structuring element size must be nonzero".to_string(),
        ));
    }
    Ok(())
}

/// Dilate the mask with a square structuring element of radius `size`.
///
/// A background pixel becomes foreground if any in-bounds pixel of its
/// window is foreground. Single pass, in place.
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if `size` is zero.
pub fn dilate(mask: &mut BinaryMask, size: u32) -> MorphResult<()> {
    check_size(size)?;

    let (w, h) = mask.dimensions();
    let src = mask.clone();
    let reach = i64::from(size);

    for y in 0..h {
        for x in 0..w {
            if src.get_pixel_unchecked(x, y) {
                continue;
            }
            'window: for dy in -reach..=reach {
                for dx in -reach..=reach {
                    let nx = i64::from(x) + dx;
                    let ny = i64::from(y) + dy;
                    if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
                        continue;
                    }
                    if src.get_pixel_unchecked(nx as u32, ny as u32) {
                        mask.set_pixel_unchecked(x, y, true);
                        break 'window;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Erode the mask with a square structuring element of radius `size`.
///
/// A foreground pixel survives only if every pixel of its window is
/// foreground; out-of-bounds positions count as background. Single
/// pass, in place.
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if `size` is zero.
pub fn erode(mask: &mut BinaryMask, size: u32) -> MorphResult<()> {
    check_size(size)?;

    let (w, h) = mask.dimensions();
    let src = mask.clone();
    let reach = i64::from(size);

    for y in 0..h {
        for x in 0..w {
            if !src.get_pixel_unchecked(x, y) {
                continue;
            }
            'window: for dy in -reach..=reach {
                for dx in -reach..=reach {
                    let nx = i64::from(x) + dx;
                    let ny = i64::from(y) + dy;
                    let inside =
                        nx >= 0 && ny >= 0 && nx < i64::from(w) && ny < i64::from(h);
                    if !inside || !src.get_pixel_unchecked(nx as u32, ny as u32) {
                        mask.set_pixel_unchecked(x, y, false);
                        break 'window;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Repeat a single dilation `count` times with `size` fixed.
pub fn grow(mask: &mut BinaryMask, count: u32, size: u32) -> MorphResult<()> {
    check_size(size)?;
    for _ in 0..count {
        dilate(mask, size)?;
    }
    Ok(())
}

/// Repeat a single erosion `count` times with `size` fixed.
pub fn shrink(mask: &mut BinaryMask, count: u32, size: u32) -> MorphResult<()> {
    check_size(size)?;
    for _ in 0..count {
        erode(mask, size)?;
    }
    Ok(())
}

/// Interleave one grow pass and one shrink pass per iteration, for
/// `count` iterations, honoring the `grow_first` ordering each
/// iteration.
pub fn grow_shrink(mask: &mut BinaryMask, count: u32, size: u32, grow_first: bool) -> MorphResult<()> {
    check_size(size)?;
    for _ in 0..count {
        if grow_first {
            dilate(mask, size)?;
            erode(mask, size)?;
        } else {
            erode(mask, size)?;
            dilate(mask, size)?;
        }
    }
    Ok(())
}
