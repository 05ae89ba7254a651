//! Convex hull reduction (monotone chain) over index arrays.
//!
//! The chain is built on indices into a widened copy of the coordinates; the
//! caller's slice is only touched once, by a final swap pass that moves the hull
//! vertices to the front in right-handed order.
//!
//! Contract
//! - Fewer than 3 points: nothing is reordered and the input length is returned.
//! - Otherwise the prefix `[0, k)` holds the hull, starting at the leftmost
//!   (then lowest) vertex and turning left. Collinear boundary points and exact
//!   duplicates are not hull vertices; an all-collinear input yields its two
//!   extreme points, an all-identical input a single point.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::predicates::{side, Side};
use crate::accessor::{to_vec2, PointAccess};

/// Rearrange `points` so that its prefix holds the convex hull; returns the
/// hull vertex count (the new logical end).
pub fn reduce_to_convex_hull<P: PointAccess>(points: &mut [P]) -> usize {
    let n = points.len();
    if n < 3 {
        return n;
    }
    let coords: Vec<Vector2<f64>> = points.iter().map(to_vec2).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| by_x_then_y(coords[i], coords[j]));
    order.dedup_by(|later, kept| coords[*later] == coords[*kept]);

    let hull = if order.len() < 3 {
        order
    } else {
        monotone_chain(&coords, &order)
    };
    move_to_front(points, &hull);
    tracing::debug!(input = n, hull = hull.len(), "convex hull reduced");
    hull.len()
}

/// Container form: reduce, then shrink `poly` to the hull.
///
/// Inputs with fewer than 3 points keep their size.
pub fn convex_hull_in_place<P: PointAccess>(poly: &mut Vec<P>) -> usize {
    let k = reduce_to_convex_hull(poly);
    poly.truncate(k);
    poly.len()
}

/// Hull of `points` as a fresh vector; the input is left untouched.
pub fn convex_hull<P: PointAccess + Clone>(points: &[P]) -> Vec<P> {
    let mut out = points.to_vec();
    convex_hull_in_place(&mut out);
    out
}

#[inline]
fn by_x_then_y(a: Vector2<f64>, b: Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Andrew's chain on pre-sorted, deduplicated indices (at least 3).
///
/// Ascending pass builds the lower chain, descending pass the upper chain; a
/// candidate is accepted only after every trailing non-left turn is discarded.
fn monotone_chain(coords: &[Vector2<f64>], order: &[usize]) -> Vec<usize> {
    let turns_left =
        |a: usize, b: usize, c: usize| side(coords[a], coords[b], coords[c]) == Side::Left;
    let mut chain: Vec<usize> = Vec::with_capacity(order.len() + 1);
    for &i in order {
        while chain.len() >= 2 && !turns_left(chain[chain.len() - 2], chain[chain.len() - 1], i) {
            chain.pop();
        }
        chain.push(i);
    }
    // The rightmost point is shared by both chains and must never be popped.
    let lower_len = chain.len() + 1;
    for &i in order.iter().rev().skip(1) {
        while chain.len() >= lower_len
            && !turns_left(chain[chain.len() - 2], chain[chain.len() - 1], i)
        {
            chain.pop();
        }
        chain.push(i);
    }
    // Last element closes the loop onto the leftmost point.
    chain.pop();
    chain
}

/// Permute `points` so that slot `k` holds the point that sat at `picks[k]`.
fn move_to_front<P>(points: &mut [P], picks: &[usize]) {
    let n = points.len();
    let mut slot_of: Vec<usize> = (0..n).collect();
    let mut held: Vec<usize> = (0..n).collect();
    for (dst, &orig) in picks.iter().enumerate() {
        let src = slot_of[orig];
        if src == dst {
            continue;
        }
        let displaced = held[dst];
        points.swap(dst, src);
        held.swap(dst, src);
        slot_of[orig] = dst;
        slot_of[displaced] = src;
    }
}
