//! Boundary seed extraction
//!
//! A boundary seed is a pixel whose classification matches the
//! requested polarity (skin or non-skin) and differs from at least one
//! in-bounds 8-neighbor. Extraction runs either over the whole mask or,
//! in single-region mode, over one connected region found by
//! breadth-first traversal from the first boundary pixel in raster
//! order.

use crate::error::RegionResult;
use derma_core::{BinaryMask, BoundarySeed, Point2D};
use derma_morph::{MorphStep, grow, shrink};
use std::collections::VecDeque;

const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Options for boundary seed extraction
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Restrict extraction to the connected region of the first
    /// boundary pixel instead of scanning the whole mask.
    pub single_region: bool,
    /// Optional pre-pass on a working copy of the mask before the
    /// boundary search: skin-seed extraction shrinks the mask
    /// (tightening the boundary inward), non-skin extraction grows it
    /// (pushing outward). The caller's mask is never modified.
    pub refine: Option<MorphStep>,
}

/// Find boundary seeds of the requested polarity.
///
/// `want_skin = true` extracts skin-side boundary pixels (labeled
/// `true`), `want_skin = false` extracts non-skin-side boundary pixels
/// (labeled `false`).
///
/// # Errors
///
/// Returns an error if the refinement step carries zero count or size.
pub fn find_seeds(
    mask: &BinaryMask,
    want_skin: bool,
    options: &SeedOptions,
) -> RegionResult<Vec<BoundarySeed>> {
    let mut working;
    let mask = match options.refine {
        Some(step) => {
            step.validate()?;
            working = mask.clone();
            if want_skin {
                shrink(&mut working, step.count, step.size)?;
            } else {
                grow(&mut working, step.count, step.size)?;
            }
            &working
        }
        None => mask,
    };

    if options.single_region {
        Ok(single_region_seeds(mask, want_skin))
    } else {
        Ok(all_region_seeds(mask, want_skin))
    }
}

/// Whether (x, y) qualifies as a boundary pixel of the given polarity.
fn qualifies(mask: &BinaryMask, x: u32, y: u32, polarity: bool) -> bool {
    if mask.get_pixel_unchecked(x, y) != polarity {
        return false;
    }
    let (w, h) = mask.dimensions();
    for (dx, dy) in NEIGHBORS_8 {
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;
        if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
            continue;
        }
        if mask.get_pixel_unchecked(nx as u32, ny as u32) != polarity {
            return true;
        }
    }
    false
}

/// Scan every pixel in raster order and emit each qualifying one.
fn all_region_seeds(mask: &BinaryMask, polarity: bool) -> Vec<BoundarySeed> {
    let (w, h) = mask.dimensions();
    let mut seeds = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if qualifies(mask, x, y, polarity) {
                seeds.push(BoundarySeed::new(x, y, polarity));
            }
        }
    }

    seeds
}

/// First qualifying pixel in raster order, if any.
fn first_boundary_pixel(mask: &BinaryMask, polarity: bool) -> Option<Point2D> {
    let (w, h) = mask.dimensions();
    for y in 0..h {
        for x in 0..w {
            if qualifies(mask, x, y, polarity) {
                return Some(Point2D::new(x, y));
            }
        }
    }
    None
}

/// Breadth-first traversal of one connected region, emitting the
/// pixels that qualify as boundary pixels along the way.
///
/// Neighbors are enqueued only when in bounds, matching the requested
/// polarity, and not yet visited; the traversal terminates when the
/// queue empties and never revisits a pixel.
fn single_region_seeds(mask: &BinaryMask, polarity: bool) -> Vec<BoundarySeed> {
    let Some(start) = first_boundary_pixel(mask, polarity) else {
        return Vec::new();
    };

    let (w, h) = mask.dimensions();
    let mut visited = vec![false; w as usize * h as usize];
    let mut queue = VecDeque::new();
    let mut seeds = Vec::new();

    visited[start.y as usize * w as usize + start.x as usize] = true;
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        if qualifies(mask, p.x, p.y, polarity) {
            seeds.push(BoundarySeed::new(p.x, p.y, polarity));
        }

        for (dx, dy) in NEIGHBORS_8 {
            let nx = i64::from(p.x) + dx;
            let ny = i64::from(p.y) + dy;
            if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let idx = ny as usize * w as usize + nx as usize;
            if visited[idx] || mask.get_pixel_unchecked(nx, ny) != polarity {
                continue;
            }
            visited[idx] = true;
            queue.push_back(Point2D::new(nx, ny));
        }
    }

    seeds
}
