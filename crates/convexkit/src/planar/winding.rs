//! Winding-number containment for arbitrary (convex or not) boundaries.
//!
//! The boundary is cyclic: the last vertex connects back to the first. Edge
//! endpoints are compared half-open (`<=` below, `>` above) so that a query on
//! the same height as a vertex is counted exactly once.

use super::predicates::{side, Side};
use crate::accessor::{to_vec2, PointAccess};

/// Signed number of times `polygon` winds around `pt` (+1 per counter-clockwise turn).
pub fn winding_number<Q: PointAccess, P: PointAccess>(pt: &Q, polygon: &[P]) -> i32 {
    let q = to_vec2(pt);
    let n = polygon.len();
    let mut wn = 0;
    for k in 0..n {
        let a = to_vec2(&polygon[k]);
        let b = to_vec2(&polygon[(k + 1) % n]);
        if a.y <= q.y {
            // upward crossing with q strictly left of the edge
            if b.y > q.y && side(a, b, q) == Side::Left {
                wn += 1;
            }
        } else if b.y <= q.y && side(a, b, q) == Side::Right {
            // downward crossing with q strictly right of the edge
            wn -= 1;
        }
    }
    wn
}

/// True when the winding number of `polygon` around `pt` is non-zero.
///
/// Points exactly on the boundary follow the half-open edge rule and are not
/// guaranteed to classify either way. An empty polygon contains nothing.
#[inline]
pub fn point_in_polygon<Q: PointAccess, P: PointAccess>(pt: &Q, polygon: &[P]) -> bool {
    winding_number(pt, polygon) != 0
}
