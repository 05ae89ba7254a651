//! Planar convex-polygon kernels over caller-defined point types.
//!
//! Modules
//! - `accessor`: the `PointAccess` capability and `impl_point_access!`.
//! - `planar`: hull reduction, winding-number containment, convex
//!   intersection, plus shape/validation helpers and a seeded sampler.
//! - `api`: curated flat re-exports for drivers (the CLI uses these).
//!
//! API Policy
//! - Algorithms take slices of any `P: PointAccess` and never allocate on
//!   behalf of the caller beyond the output vector they are handed.
//! - Nothing here installs a `tracing` subscriber; events are emitted at
//!   `debug`/`trace` and cost nothing when no subscriber listens.

pub mod accessor;
pub mod api;
mod cfg;
pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use accessor::{Coord, PointAccess};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::accessor::{make_point, to_vec2, Coord, PointAccess};
    pub use crate::impl_point_access;
    pub use crate::planar::rand::{draw_convex_polygon, RadialCfg, ReplayToken, VertexCount};
    pub use crate::planar::{
        clip_convex, convex_hull, convex_hull_in_place, intersect_convex_polygons,
        point_in_polygon, reduce_to_convex_hull, regular_polygon, ClipOutcome,
    };
    pub use nalgebra::Vector2 as Vec2;
}
