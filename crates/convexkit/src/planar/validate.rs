//! Caller-side checks for the preconditions of `clip`.
//!
//! The algorithms never run these; they are O(n) helpers for drivers and tests
//! that want to reject bad input before walking it.

use super::predicates::{cross, edge_cross};
use crate::accessor::{to_vec2, PointAccess};
use crate::cfg::TURNING_EPS;

/// Shoelace area; positive for a right-handed (counter-clockwise) boundary.
pub fn signed_area<P: PointAccess>(polygon: &[P]) -> f64 {
    let n = polygon.len();
    let mut twice = 0.0;
    for k in 0..n {
        let p = to_vec2(&polygon[k]);
        let q = to_vec2(&polygon[(k + 1) % n]);
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

#[inline]
pub fn is_right_handed<P: PointAccess>(polygon: &[P]) -> bool {
    signed_area(polygon) > 0.0
}

/// Convex, right-handed and simple: every corner turns left or goes straight,
/// and the boundary turns exactly once around (total turning 2π).
pub fn is_convex<P: PointAccess>(polygon: &[P]) -> bool {
    let n = polygon.len();
    if n < 3 || !is_right_handed(polygon) {
        return false;
    }
    let mut turning = 0.0;
    for k in 0..n {
        let p0 = to_vec2(&polygon[k]);
        let p1 = to_vec2(&polygon[(k + 1) % n]);
        let p2 = to_vec2(&polygon[(k + 2) % n]);
        if cross(p0, p1, p2) < 0.0 {
            return false;
        }
        let turn = edge_cross(p0, p1, p1, p2);
        let along = (p1 - p0).dot(&(p2 - p1));
        turning += turn.atan2(along);
    }
    (turning - std::f64::consts::TAU).abs() < TURNING_EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_orientation() {
        let ccw = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert!((signed_area(&ccw) - 1.0).abs() < 1e-12);
        assert!(is_right_handed(&ccw));
        assert!(is_convex(&ccw));

        let mut cw = ccw;
        cw.reverse();
        assert!(!is_right_handed(&cw));
        assert!(!is_convex(&cw));
    }

    #[test]
    fn reflex_and_star_shapes_are_rejected() {
        let dart = [[0.0, 0.0], [2.0, 0.0], [1.0, 0.5], [1.0, 2.0]];
        assert!(is_right_handed(&dart));
        assert!(!is_convex(&dart));

        // pentagram: every corner turns left, but it winds twice
        let star: Vec<[f64; 2]> = (0..5)
            .map(|k| {
                let a = std::f64::consts::TAU * (2 * k) as f64 / 5.0;
                [a.cos(), a.sin()]
            })
            .collect();
        assert!(!is_convex(&star));
    }

    #[test]
    fn too_few_vertices() {
        assert!(!is_convex::<[f64; 2]>(&[]));
        assert!(!is_convex(&[[0.0, 0.0], [1.0, 0.0]]));
        assert_eq!(signed_area::<[f64; 2]>(&[]), 0.0);
    }
}
