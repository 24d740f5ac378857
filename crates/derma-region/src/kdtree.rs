//! 2D nearest-neighbor index
//!
//! A small kd-tree over pixel coordinates, built once per distance-map
//! pass and queried for the Euclidean distance to the closest indexed
//! point. Median splits on alternating axes keep the tree balanced, so
//! construction is O(n log n) and queries are logarithmic on average.

use derma_core::Point2D;

#[derive(Debug)]
struct Node {
    point: Point2D,
    left: Option<usize>,
    right: Option<usize>,
}

/// Balanced kd-tree over 2D pixel coordinates.
#[derive(Debug)]
pub struct KdTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl KdTree {
    /// Build a tree from a set of points.
    pub fn build(mut points: Vec<Point2D>) -> Self {
        let mut nodes = Vec::with_capacity(points.len());
        let root = build_recursive(&mut points, 0, &mut nodes);
        Self { nodes, root }
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Euclidean distance from (x, y) to the nearest indexed point.
    ///
    /// Returns `None` for an empty tree.
    pub fn nearest_distance(&self, x: u32, y: u32) -> Option<f64> {
        let root = self.root?;
        let mut best_sq = f64::INFINITY;
        self.search(root, f64::from(x), f64::from(y), 0, &mut best_sq);
        Some(best_sq.sqrt())
    }

    fn search(&self, node: usize, qx: f64, qy: f64, depth: usize, best_sq: &mut f64) {
        let n = &self.nodes[node];
        let px = f64::from(n.point.x);
        let py = f64::from(n.point.y);

        let dx = qx - px;
        let dy = qy - py;
        let dist_sq = dx * dx + dy * dy;
        if dist_sq < *best_sq {
            *best_sq = dist_sq;
        }

        let axis_delta = if depth % 2 == 0 { dx } else { dy };
        let (near, far) = if axis_delta < 0.0 {
            (n.left, n.right)
        } else {
            (n.right, n.left)
        };

        if let Some(child) = near {
            self.search(child, qx, qy, depth + 1, best_sq);
        }
        // the far side can only win if the splitting plane is closer
        // than the current best
        if axis_delta * axis_delta < *best_sq {
            if let Some(child) = far {
                self.search(child, qx, qy, depth + 1, best_sq);
            }
        }
    }
}

fn build_recursive(points: &mut [Point2D], depth: usize, nodes: &mut Vec<Node>) -> Option<usize> {
    if points.is_empty() {
        return None;
    }

    let mid = points.len() / 2;
    if depth % 2 == 0 {
        points.select_nth_unstable_by_key(mid, |p| p.x);
    } else {
        points.select_nth_unstable_by_key(mid, |p| p.y);
    }
    let median = points[mid];

    let (left_half, rest) = points.split_at_mut(mid);
    let right_half = &mut rest[1..];

    let left = build_recursive(left_half, depth + 1, nodes);
    let right = build_recursive(right_half, depth + 1, nodes);

    nodes.push(Node {
        point: median,
        left,
        right,
    });
    Some(nodes.len() - 1)
}
