//! Regular polygon construction through the mutable point accessors.

use std::f64::consts::TAU;

use crate::accessor::{Coord, PointAccess};

/// Overwrite `out` with the vertices of a regular `out.len()`-gon on the unit
/// circle, counter-clockwise, first vertex at angle `theta`.
pub fn regular_polygon_into<P: PointAccess>(theta: f64, out: &mut [P]) {
    let step = TAU / out.len() as f64;
    for (i, p) in out.iter_mut().enumerate() {
        let angle = i as f64 * step + theta;
        *p.x_mut() = P::Scalar::from_f64(angle.cos());
        *p.y_mut() = P::Scalar::from_f64(angle.sin());
    }
}

/// Regular `n`-gon on the unit circle (right-handed), first vertex at `theta`.
pub fn regular_polygon<P: PointAccess + Default + Clone>(n: usize, theta: f64) -> Vec<P> {
    let mut out = vec![P::default(); n];
    regular_polygon_into(theta, &mut out);
    out
}
