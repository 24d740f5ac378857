//! Connected component labeling
//!
//! Single-pass forward-scan labeling with on-the-fly merging. Every
//! unlabeled foreground pixel opens a new region; merges with causal
//! neighbors (the four already-visited positions of a raster scan)
//! immediately relabel every recorded member of the absorbed region,
//! so a pixel's label is the id of a live region at all times and no
//! separate union-find flattening pass is needed.
//!
//! All scratch state (label map, region list, largest tracking) is
//! constructed fresh per invocation.

use derma_core::{BinaryMask, Point2D};

/// Causal neighbors of a forward raster scan: up-left, up, up-right,
/// left. Down/right positions are unvisited and never inspected.
const CAUSAL_NEIGHBORS: [(i64, i64); 4] = [(-1, -1), (0, -1), (1, -1), (-1, 0)];

/// One connected foreground region.
///
/// A region owns its member points. Merging drains the absorbed
/// region's point list, leaving it empty (size zero) but still present
/// in the label sequence.
#[derive(Debug, Clone)]
pub struct Region {
    label: u32,
    pixels: Vec<Point2D>,
}

impl Region {
    /// The region's label (1-based; 0 is reserved for "unlabeled").
    #[inline]
    pub fn label(&self) -> u32 {
        self.label
    }

    /// Number of member pixels.
    #[inline]
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    /// Whether this region has been emptied by a merge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The member pixels.
    #[inline]
    pub fn pixels(&self) -> &[Point2D] {
        &self.pixels
    }
}

/// Result of one labeling pass.
#[derive(Debug, Clone)]
pub struct Labeling {
    regions: Vec<Region>,
    largest: Option<u32>,
}

impl Labeling {
    /// All regions in label order, including ones emptied by merges.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions that still own pixels.
    pub fn non_empty_count(&self) -> usize {
        self.regions.iter().filter(|r| !r.is_empty()).count()
    }

    /// Label of the largest region, if any foreground exists.
    pub fn largest_label(&self) -> Option<u32> {
        self.largest
    }

    /// The largest region, if any foreground exists.
    pub fn largest_region(&self) -> Option<&Region> {
        self.largest
            .map(|label| &self.regions[(label - 1) as usize])
    }
}

/// Label the connected foreground components of a mask (8-connected).
///
/// After the scan the non-empty regions partition the foreground and
/// every merge is transitively resolved: relabeling walks the absorbed
/// region's full member list, so no stale labels survive.
pub fn label_regions(mask: &BinaryMask) -> Labeling {
    let (w, h) = mask.dimensions();
    let mut label_map = vec![0u32; w as usize * h as usize];
    let mut regions: Vec<Region> = Vec::new();
    let mut largest: Option<u32> = None;
    let mut largest_size: usize = 0;

    for y in 0..h {
        for x in 0..w {
            if !mask.get_pixel_unchecked(x, y) {
                continue;
            }
            let idx = y as usize * w as usize + x as usize;

            if label_map[idx] == 0 {
                let label = regions.len() as u32 + 1;
                regions.push(Region {
                    label,
                    pixels: vec![Point2D::new(x, y)],
                });
                label_map[idx] = label;
                if 1 > largest_size {
                    largest_size = 1;
                    largest = Some(label);
                }
            }

            for (dx, dy) in CAUSAL_NEIGHBORS {
                let nx = i64::from(x) + dx;
                let ny = i64::from(y) + dy;
                if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
                    continue;
                }
                if !mask.get_pixel_unchecked(nx as u32, ny as u32) {
                    continue;
                }
                let neighbor_label = label_map[ny as usize * w as usize + nx as usize];
                // re-read: an earlier merge in this loop may have
                // relabeled the current pixel
                let current_label = label_map[idx];
                if neighbor_label != 0 && neighbor_label != current_label {
                    merge(
                        &mut regions,
                        &mut label_map,
                        w,
                        current_label,
                        neighbor_label,
                        &mut largest,
                        &mut largest_size,
                    );
                }
            }
        }
    }

    Labeling { regions, largest }
}

/// Absorb the numerically larger label's region into the smaller one.
fn merge(
    regions: &mut [Region],
    label_map: &mut [u32],
    width: u32,
    a: u32,
    b: u32,
    largest: &mut Option<u32>,
    largest_size: &mut usize,
) {
    let keep = a.min(b);
    let absorb = a.max(b);

    let moved = std::mem::take(&mut regions[(absorb - 1) as usize].pixels);
    for p in &moved {
        label_map[p.y as usize * width as usize + p.x as usize] = keep;
    }

    let keep_region = &mut regions[(keep - 1) as usize];
    keep_region.pixels.extend(moved);

    if keep_region.pixels.len() > *largest_size {
        *largest_size = keep_region.pixels.len();
        *largest = Some(keep);
    }
}

/// Delete every region except the largest from the mask.
///
/// Labels the mask, then clears the member pixels of all non-largest,
/// non-emptied regions to background. Returns the number of pixels
/// cleared. A mask without foreground is left untouched.
pub fn clear_minor_regions(mask: &mut BinaryMask) -> usize {
    let labeling = label_regions(mask);
    let Some(largest) = labeling.largest_label() else {
        return 0;
    };

    let mut cleared = 0;
    for region in labeling.regions() {
        if region.label() == largest || region.is_empty() {
            continue;
        }
        for p in region.pixels() {
            mask.set_pixel_unchecked(p.x, p.y, false);
            cleared += 1;
        }
    }
    cleared
}
