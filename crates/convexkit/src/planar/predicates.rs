//! Orientation predicate and point equality shared by every planar routine.
//!
//! All "left turn" and "inside half-plane" questions reduce to `cross`, so the
//! sign convention is fixed here: positive means `q` lies left of `p0 → p1`.

use nalgebra::Vector2;

use crate::accessor::{to_vec2, PointAccess};
use crate::cfg::ALMOST_EQUAL_ULPS;

/// Position of a point relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    On,
    Right,
}

impl Side {
    /// Classify the sign of a cross product. NaN maps to `On`.
    #[inline]
    pub fn from_cross(c: f64) -> Self {
        if c > 0.0 {
            Side::Left
        } else if c < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }
}

/// `(p1 - p0) × (q - p0)`: twice the signed area of the triangle.
#[inline]
pub fn cross(p0: Vector2<f64>, p1: Vector2<f64>, q: Vector2<f64>) -> f64 {
    let d = p1 - p0;
    let e = q - p0;
    d.x * e.y - d.y * e.x
}

#[inline]
pub fn side(p0: Vector2<f64>, p1: Vector2<f64>, q: Vector2<f64>) -> Side {
    Side::from_cross(cross(p0, p1, q))
}

/// `side` for any point representation; coordinates are widened to `f64`.
#[inline]
pub fn orientation<P: PointAccess, Q: PointAccess>(p0: &P, p1: &P, q: &Q) -> Side {
    side(to_vec2(p0), to_vec2(p1), to_vec2(q))
}

/// Cross product of the edge directions `p0 → p1` and `q0 → q1`.
#[inline]
pub fn edge_cross(p0: Vector2<f64>, p1: Vector2<f64>, q0: Vector2<f64>, q1: Vector2<f64>) -> f64 {
    let a = p1 - p0;
    let b = q1 - q0;
    a.x * b.y - a.y * b.x
}

/// Relative equality: squared distance within a few ULPs of the combined
/// squared magnitude, floored at `f64::MIN_POSITIVE` near the origin.
#[inline]
pub fn almost_equal(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    let dist_sq = (a - b).norm_squared();
    let mag = a.norm_squared() + b.norm_squared();
    dist_sq <= f64::EPSILON * mag * ALMOST_EQUAL_ULPS || dist_sq < f64::MIN_POSITIVE
}
