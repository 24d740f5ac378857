//! Signed distance maps
//!
//! Partitions a mask into boundary, interior, and exterior pixel sets,
//! then computes for every interior and exterior pixel the Euclidean
//! distance to the nearest boundary pixel via the kd-tree index. The
//! sign encodes the topological side: interior distances are negated,
//! exterior distances are positive, boundary pixels are zero.

use crate::error::RegionResult;
use crate::kdtree::KdTree;
use crate::label::clear_minor_regions;
use derma_core::{BinaryMask, DistanceMap, Point2D};

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

/// Whether a foreground pixel touches background in its in-bounds
/// 8-neighborhood.
fn is_boundary(mask: &BinaryMask, x: u32, y: u32) -> bool {
    let (w, h) = mask.dimensions();
    for (dx, dy) in NEIGHBORS_8 {
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;
        if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
            continue;
        }
        if !mask.get_pixel_unchecked(nx as u32, ny as u32) {
            return true;
        }
    }
    false
}

/// Build the signed distance map of a mask.
///
/// With `restrict_to_largest` the minor regions are first deleted from
/// a working copy, so the boundary belongs to the dominant component
/// only. A mask with no boundary pixels (entirely foreground or
/// entirely background) produces an all-zero map.
///
/// # Errors
///
/// Propagates allocation errors from the core containers.
pub fn build_distance_map(mask: &BinaryMask, restrict_to_largest: bool) -> RegionResult<DistanceMap> {
    let mut working;
    let mask = if restrict_to_largest {
        working = mask.clone();
        clear_minor_regions(&mut working);
        &working
    } else {
        mask
    };

    let (w, h) = mask.dimensions();
    let mut map = DistanceMap::new(w, h, 1)?;

    // partition into boundary / interior / exterior
    let mut boundary = Vec::new();
    let mut interior = Vec::new();
    let mut exterior = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if mask.get_pixel_unchecked(x, y) {
                if is_boundary(mask, x, y) {
                    boundary.push(Point2D::new(x, y));
                } else {
                    interior.push(Point2D::new(x, y));
                }
            } else {
                exterior.push(Point2D::new(x, y));
            }
        }
    }

    if boundary.is_empty() {
        return Ok(map);
    }

    let index = KdTree::build(boundary);

    for p in interior {
        let dist = index.nearest_distance(p.x, p.y).unwrap_or(0.0);
        map.set_pixel_unchecked(p.x, p.y, 0, -(dist as i32));
    }
    for p in exterior {
        let dist = index.nearest_distance(p.x, p.y).unwrap_or(0.0);
        map.set_pixel_unchecked(p.x, p.y, 0, dist as i32);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Foreground square of side `n` with a one-pixel background
    /// border around it.
    fn bordered_square(n: u32) -> BinaryMask {
        let mut mask = BinaryMask::new(n + 2, n + 2).unwrap();
        for y in 1..=n {
            for x in 1..=n {
                mask.set_pixel(x, y, true).unwrap();
            }
        }
        mask
    }

    #[test]
    fn test_bordered_square_signs() {
        let n = 9;
        let mask = bordered_square(n);
        let map = build_distance_map(&mask, false).unwrap();

        let half_diagonal = f64::from(n) / 2.0 * 2.0f64.sqrt();

        for y in 0..mask.height() {
            for x in 0..mask.width() {
                let val = map.get_pixel_unchecked(x, y, 0);
                if mask.get_pixel_unchecked(x, y) {
                    assert!(val <= 0, "interior pixel ({x}, {y}) must be non-positive");
                } else {
                    assert!(val >= 0, "exterior pixel ({x}, {y}) must be non-negative");
                }
                assert!(f64::from(val.abs()) <= half_diagonal);
            }
        }
    }

    #[test]
    fn test_boundary_pixels_are_zero() {
        let mask = bordered_square(5);
        let map = build_distance_map(&mask, false).unwrap();
        // the square's perimeter ring is the boundary
        for x in 1..=5 {
            assert_eq!(map.get_pixel(x, 1, 0), Some(0));
            assert_eq!(map.get_pixel(x, 5, 0), Some(0));
        }
    }

    #[test]
    fn test_center_is_deepest() {
        let mask = bordered_square(9);
        let map = build_distance_map(&mask, false).unwrap();
        let center = map.get_pixel(5, 5, 0).unwrap();
        assert_eq!(center, -4);
        // strictly deeper than a pixel next to the boundary
        assert!(center < map.get_pixel(2, 5, 0).unwrap());
    }

    #[test]
    fn test_degenerate_masks_are_all_zero() {
        let empty = BinaryMask::new(4, 4).unwrap();
        let map = build_distance_map(&empty, false).unwrap();
        assert!(map.data().iter().all(|&v| v == 0));

        let full = BinaryMask::filled(4, 4, true).unwrap();
        let map = build_distance_map(&full, false).unwrap();
        assert!(map.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_restrict_to_largest() {
        let mut mask = bordered_square(9);
        // a distant speck that would otherwise contribute boundary
        mask.set_pixel(0, 0, true).unwrap();

        let restricted = build_distance_map(&mask, true).unwrap();
        // the speck is deleted: its pixel reads as exterior
        assert!(restricted.get_pixel(0, 0, 0).unwrap() > 0);

        let unrestricted = build_distance_map(&mask, false).unwrap();
        assert_eq!(unrestricted.get_pixel(0, 0, 0), Some(0));
    }
}
