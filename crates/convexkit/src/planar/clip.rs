//! Intersection of two convex, right-handed polygons by a dual boundary walk.
//!
//! Model
//! - One edge cursor per polygon. Each step intersects the two current edges,
//!   records a crossing if there is one, then advances exactly one cursor: the
//!   one whose edge is "behind" with respect to the other's half-plane.
//! - An inside flag remembers which boundary currently runs inside the other.
//!   At each crossing it is set from the local geometry: the boundary whose
//!   outgoing direction points strictly into the other polygon's corner (or
//!   half-plane, away from vertices) is inside. When the inside polygon's
//!   cursor advances, the vertex it leaves behind is part of the intersection
//!   boundary and is emitted.
//! - The walk stops when a crossing repeats the first one after some other
//!   point has been emitted (full lap), or after `2 * (|A| + |B|)` steps. A
//!   vertex shared by both polygons is hit on several consecutive edge pairs;
//!   those repeats do not close the walk.
//! - No crossing at all means containment or disjointness; one vertex of each
//!   polygon is tested against the other with the winding number.
//!
//! Preconditions (not checked): both inputs convex, right-handed, simple.
//! Violations give wrong geometry, never a panic. `validate::is_convex` checks
//! them up front when a caller wants to.
//!
//! Degeneracies
//! - Coincident edges running the same way: the edge whose head lags along the
//!   shared direction advances; the shared stretch contributes its endpoints
//!   through the regular crossing/vertex rules.
//! - Coincident edges running opposite ways: the polygons lie on opposite sides
//!   of a common line, so the intersection has no area (`Touching`).
//! - Parallel edges with both heads outside the other's half-plane: `Disjoint`.
//! - Either polygon with fewer than 3 vertices: `Degenerate`, empty output.

use nalgebra::Vector2;
use tracing::{debug, trace};

use super::predicates::{almost_equal, edge_cross, side, Side};
use super::winding::point_in_polygon;
use crate::accessor::{make_point, to_vec2, PointAccess};

/// Classified intersection of segments `a0 → a1` and `b0 → b1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// Proper crossing at `point = a0 + u_a (a1 - a0) = b0 + u_b (b1 - b0)`.
    Crossing {
        point: Vector2<f64>,
        u_a: f64,
        u_b: f64,
    },
    /// Lines parallel and distinct.
    Parallel,
    /// Lines identical (segments may or may not overlap).
    Coincident,
    /// Lines cross outside at least one segment.
    Disjoint,
}

/// Parametric segment intersection.
///
/// Both parameters share the denominator `(b1 - b0) × (a1 - a0)`; when it
/// vanishes the quotients are NaN (coincident) or infinite (parallel).
pub fn segment_intersection(
    a0: Vector2<f64>,
    a1: Vector2<f64>,
    b0: Vector2<f64>,
    b1: Vector2<f64>,
) -> SegmentIntersection {
    let da = a1 - a0;
    let db = b1 - b0;
    let w = a0 - b0;
    let denom = db.y * da.x - db.x * da.y;
    let u_a = (db.x * w.y - db.y * w.x) / denom;
    let u_b = (da.x * w.y - da.y * w.x) / denom;

    if u_a.is_nan() && u_b.is_nan() {
        return SegmentIntersection::Coincident;
    }
    if !u_a.is_finite() || !u_b.is_finite() {
        return SegmentIntersection::Parallel;
    }
    if !(0.0..=1.0).contains(&u_a) || !(0.0..=1.0).contains(&u_b) {
        return SegmentIntersection::Disjoint;
    }
    SegmentIntersection::Crossing {
        point: a0 + da * u_a,
        u_a,
        u_b,
    }
}

/// How `clip_convex` arrived at its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipOutcome {
    /// Boundaries cross; the payload counts distinct crossings seen.
    Crossings(usize),
    /// No crossing and B lies inside A; output is B.
    BInsideA,
    /// No crossing and A lies inside B; output is A.
    AInsideB,
    /// No common interior.
    Disjoint,
    /// Boundaries meet in a point or a segment only; no common interior.
    Touching,
    /// An input has fewer than 3 vertices.
    Degenerate,
}

impl ClipOutcome {
    /// True when a non-empty intersection polygon was produced.
    #[inline]
    pub fn produced(&self) -> bool {
        matches!(
            self,
            ClipOutcome::Crossings(_) | ClipOutcome::BInsideA | ClipOutcome::AInsideB
        )
    }
}

/// Which boundary is currently inside the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Inside {
    Unknown,
    A,
    B,
}

/// Interior directions at a boundary point: strictly left of both the incoming
/// and the outgoing edge. Away from vertices both are the edge direction.
#[derive(Clone, Copy, Debug)]
struct Corner {
    incoming: Vector2<f64>,
    outgoing: Vector2<f64>,
}

impl Corner {
    #[inline]
    fn admits(&self, d: Vector2<f64>) -> bool {
        self.incoming.perp(&d) > 0.0 && self.outgoing.perp(&d) > 0.0
    }
}

/// Current directed edge `cur → next` of a cyclic vertex slice.
struct EdgeCursor<'a, P> {
    poly: &'a [P],
    cur: usize,
    next: usize,
}

impl<'a, P: PointAccess> EdgeCursor<'a, P> {
    fn new(poly: &'a [P]) -> Self {
        Self {
            poly,
            cur: 0,
            next: 1 % poly.len(),
        }
    }

    #[inline]
    fn segment(&self) -> (Vector2<f64>, Vector2<f64>) {
        (to_vec2(&self.poly[self.cur]), to_vec2(&self.poly[self.next]))
    }

    #[inline]
    fn head(&self) -> &'a P {
        &self.poly[self.next]
    }

    #[inline]
    fn vertex(&self, k: usize) -> Vector2<f64> {
        to_vec2(&self.poly[k % self.poly.len()])
    }

    /// Boundary corner at `x`, a point on the current edge. Points that
    /// coincide with an edge endpoint take that vertex's corner.
    fn corner_at(&self, x: Vector2<f64>) -> Corner {
        let n = self.poly.len();
        let (a0, a1) = self.segment();
        if almost_equal(x, a1) {
            let a2 = self.vertex(self.next + 1);
            Corner {
                incoming: a1 - a0,
                outgoing: a2 - a1,
            }
        } else if almost_equal(x, a0) {
            let prev = self.vertex(self.cur + n - 1);
            Corner {
                incoming: a0 - prev,
                outgoing: a1 - a0,
            }
        } else {
            Corner {
                incoming: a1 - a0,
                outgoing: a1 - a0,
            }
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.cur = self.next;
        self.next = (self.next + 1) % self.poly.len();
    }
}

/// Output buffer that never repeats a vertex back to back.
///
/// Comparisons use the unrounded `f64` coordinates, so narrowing to `f32` on
/// output does not defeat the duplicate check.
struct Emitter<'o, P> {
    out: &'o mut Vec<P>,
    first: Option<Vector2<f64>>,
    last: Option<Vector2<f64>>,
    /// Some point other than the first has been emitted.
    left_first: bool,
}

impl<'o, P: PointAccess + Default + Clone> Emitter<'o, P> {
    fn new(out: &'o mut Vec<P>) -> Self {
        out.clear();
        Self {
            out,
            first: None,
            last: None,
            left_first: false,
        }
    }

    /// Append unless `at` repeats the previous point; true when appended.
    fn push(&mut self, at: Vector2<f64>, point: P) -> bool {
        if self.last.is_some_and(|l| almost_equal(l, at)) {
            return false;
        }
        let first = *self.first.get_or_insert(at);
        self.left_first |= !almost_equal(first, at);
        self.last = Some(at);
        self.out.push(point);
        true
    }

    fn crossing(&mut self, at: Vector2<f64>) -> bool {
        self.push(at, make_point(at.x, at.y))
    }

    fn vertex(&mut self, p: &P) {
        self.push(to_vec2(p), p.clone());
    }

    #[inline]
    fn left_first(&self) -> bool {
        self.left_first
    }

    fn copy_all(&mut self, poly: &[P]) {
        self.out.extend_from_slice(poly);
    }

    fn discard(&mut self) {
        self.out.clear();
    }

    /// Drop a trailing vertex that repeats the first one.
    fn close(&mut self) {
        if self.out.len() > 1 {
            if let (Some(f), Some(l)) = (self.first, self.last) {
                if almost_equal(f, l) {
                    self.out.pop();
                }
            }
        }
    }
}

/// Intersect convex right-handed polygons `a` and `b` into `out`.
///
/// `out` is cleared first and holds the right-handed intersection boundary
/// afterwards (empty unless `outcome.produced()`).
pub fn clip_convex<P>(a: &[P], b: &[P], out: &mut Vec<P>) -> ClipOutcome
where
    P: PointAccess + Default + Clone,
{
    let mut emit = Emitter::new(out);
    if a.len() < 3 || b.len() < 3 {
        debug!(a = a.len(), b = b.len(), "clip skipped: degenerate input");
        return ClipOutcome::Degenerate;
    }

    let mut ea = EdgeCursor::new(a);
    let mut eb = EdgeCursor::new(b);
    let mut inside = Inside::Unknown;
    let mut first: Option<Vector2<f64>> = None;
    let mut crossings = 0usize;
    let max_steps = 2 * (a.len() + b.len());

    for step in 0..max_steps {
        let (a0, a1) = ea.segment();
        let (b0, b1) = eb.segment();
        let hit = segment_intersection(a0, a1, b0, b1);
        // head of each current edge against the other's directed edge
        let a_head = side(b0, b1, a1);
        let b_head = side(a0, a1, b1);

        if let SegmentIntersection::Crossing { point, .. } = hit {
            match first {
                Some(f) if almost_equal(point, f) && emit.left_first() => {
                    trace!(step, "walk closed on first crossing");
                    break;
                }
                Some(_) => {}
                None => first = Some(point),
            }
            if emit.crossing(point) {
                crossings += 1;
            }
            let corner_a = ea.corner_at(point);
            let corner_b = eb.corner_at(point);
            if corner_b.admits(corner_a.outgoing) {
                inside = Inside::A;
            } else if corner_a.admits(corner_b.outgoing) {
                inside = Inside::B;
            }
            trace!(step, a = ea.cur, b = eb.cur, x = point.x, y = point.y, ?inside, "crossing");
        }

        let dir_a = a1 - a0;
        let dir_b = b1 - b0;
        let aligned = dir_a.dot(&dir_b);
        let turn = edge_cross(a0, a1, b0, b1);

        if hit == SegmentIntersection::Coincident && aligned < 0.0 {
            debug!(step, "clip: boundaries touch along antiparallel edges");
            emit.discard();
            return ClipOutcome::Touching;
        }
        if turn == 0.0 && a_head == Side::Right && b_head == Side::Right {
            debug!(step, "clip: parallel edges separate the polygons");
            emit.discard();
            return ClipOutcome::Disjoint;
        }

        let advance_a = if hit == SegmentIntersection::Coincident && aligned > 0.0 {
            // same line, same way: move the edge whose head is behind
            (b1 - a1).dot(&dir_a) > 0.0
        } else if turn >= 0.0 {
            b_head == Side::Left
        } else {
            a_head != Side::Left
        };

        if advance_a {
            if inside == Inside::A {
                emit.vertex(ea.head());
            }
            ea.advance();
        } else {
            if inside == Inside::B {
                emit.vertex(eb.head());
            }
            eb.advance();
        }
        trace!(step, advanced = if advance_a { "a" } else { "b" }, "advance");
    }

    if first.is_none() {
        let outcome = if point_in_polygon(&b[0], a) {
            emit.copy_all(b);
            ClipOutcome::BInsideA
        } else if point_in_polygon(&a[0], b) {
            emit.copy_all(a);
            ClipOutcome::AInsideB
        } else {
            ClipOutcome::Disjoint
        };
        debug!(?outcome, "clip: no boundary crossing");
        return outcome;
    }

    emit.close();
    if emit.out.len() < 3 {
        // boundaries met in a point or along a segment only
        debug!(crossings, vertices = emit.out.len(), "clip: contact without area");
        emit.discard();
        return ClipOutcome::Touching;
    }
    debug!(crossings, vertices = emit.out.len(), "clip: boundary walk finished");
    ClipOutcome::Crossings(crossings)
}

/// Intersect convex right-handed polygons; `true` when `out` holds a non-empty
/// intersection polygon.
#[inline]
pub fn intersect_convex_polygons<P>(a: &[P], b: &[P], out: &mut Vec<P>) -> bool
where
    P: PointAccess + Default + Clone,
{
    clip_convex(a, b, out).produced()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn segments_cross_in_the_middle() {
        let hit = segment_intersection(
            vector![0.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![2.0, 0.0],
        );
        match hit {
            SegmentIntersection::Crossing { point, u_a, u_b } => {
                assert!((point - vector![1.0, 1.0]).norm() < 1e-12);
                assert!((u_a - 0.5).abs() < 1e-12 && (u_b - 0.5).abs() < 1e-12);
            }
            other => panic!("expected crossing, got {other:?}"),
        }
    }

    #[test]
    fn segment_degeneracies_are_classified() {
        let parallel = segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
        );
        assert_eq!(parallel, SegmentIntersection::Parallel);

        let coincident = segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![3.0, 0.0],
        );
        assert_eq!(coincident, SegmentIntersection::Coincident);

        let short = segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, -1.0],
            vector![2.0, 1.0],
        );
        assert_eq!(short, SegmentIntersection::Disjoint);
    }

    #[test]
    fn shared_endpoint_counts_as_crossing() {
        let hit = segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
        );
        assert!(matches!(
            hit,
            SegmentIntersection::Crossing { u_a, u_b, .. } if u_a == 1.0 && u_b == 0.0
        ));
    }

    #[test]
    fn corner_at_vertices_and_edge_interior() {
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let cursor = EdgeCursor::new(&square[..]);

        let head = cursor.corner_at(vector![1.0, 0.0]);
        assert_eq!((head.incoming, head.outgoing), (vector![1.0, 0.0], vector![0.0, 1.0]));
        assert!(head.admits(vector![-1.0, 1.0]));
        assert!(!head.admits(vector![1.0, 1.0]));
        assert!(!head.admits(vector![0.0, 1.0]));

        let tail = cursor.corner_at(vector![0.0, 0.0]);
        assert_eq!((tail.incoming, tail.outgoing), (vector![0.0, -1.0], vector![1.0, 0.0]));
        assert!(tail.admits(vector![1.0, 1.0]));
        assert!(!tail.admits(vector![-1.0, 1.0]));

        let mid = cursor.corner_at(vector![0.5, 0.0]);
        assert!(mid.admits(vector![-1.0, 1.0]) && mid.admits(vector![1.0, 1.0]));
        assert!(!mid.admits(vector![1.0, 0.0]));
    }

    #[test]
    fn outcome_produced_flags() {
        assert!(ClipOutcome::Crossings(2).produced());
        assert!(ClipOutcome::BInsideA.produced());
        assert!(!ClipOutcome::Touching.produced());
        assert!(!ClipOutcome::Degenerate.produced());
    }
}
