//! Curated flat API for drivers.
//!
//! - One `use convexkit::api::*` brings in every algorithm, the accessor
//!   helpers and the sampler, without the module tree.
//! - Names that would be ambiguous out of context are renamed on export.

// point access
pub use crate::accessor::{
    get_x, get_x_mut, get_y, get_y_mut, make_point, to_vec2, Coord, PointAccess,
};
// hull
pub use crate::planar::hull::{convex_hull, convex_hull_in_place, reduce_to_convex_hull};
// containment
pub use crate::planar::winding::{point_in_polygon, winding_number};
// intersection
pub use crate::planar::clip::{
    clip_convex, intersect_convex_polygons, segment_intersection, ClipOutcome,
    SegmentIntersection,
};
// predicates and checks
pub use crate::planar::predicates::{almost_equal, orientation, Side};
pub use crate::planar::shape::{regular_polygon, regular_polygon_into};
pub use crate::planar::validate::{is_convex, is_right_handed, signed_area};
// random polygons
pub use crate::planar::rand::{
    draw_convex_polygon, RadialCfg as PolygonSamplerCfg, ReplayToken as PolygonReplay,
    SampleError, VertexCount,
};
