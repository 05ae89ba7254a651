//! Planar algorithms on point sequences.
//!
//! Purpose
//! - Convex hull reduction, winding-number containment and convex polygon
//!   intersection over any point type implementing `PointAccess`.
//! - Every routine is a pure function of its inputs. Scratch buffers are local
//!   to the call (or passed in by the caller), so independent calls can run on
//!   different threads without coordination.
//!
//! Conventions
//! - A polygon is a slice of vertices with an implicit closing edge.
//! - Right-handed means counter-clockwise: successive edges turn left.
//! - All arithmetic is `f64`, whatever the point's scalar type.
//!
//! Code cross-refs: `accessor::PointAccess`, `predicates::Side`,
//! `clip::ClipOutcome`.

pub mod clip;
pub mod hull;
pub mod predicates;
pub mod rand;
pub mod shape;
pub mod validate;
pub mod winding;

pub use clip::{
    clip_convex, intersect_convex_polygons, segment_intersection, ClipOutcome,
    SegmentIntersection,
};
pub use hull::{convex_hull, convex_hull_in_place, reduce_to_convex_hull};
pub use predicates::{almost_equal, cross, edge_cross, orientation, side, Side};
pub use shape::{regular_polygon, regular_polygon_into};
pub use validate::{is_convex, is_right_handed, signed_area};
pub use winding::{point_in_polygon, winding_number};
