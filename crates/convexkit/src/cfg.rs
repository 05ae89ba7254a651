//! Tolerance defaults for planar predicates (internal).
//!
//! Policy
//! - Fixed constants; every algorithm in `planar` reads them from here so the
//!   same point is "the same" everywhere.

/// Precision, in units in the last place, for `almost_equal`.
pub(crate) const ALMOST_EQUAL_ULPS: f64 = 2.0;
/// Allowed deviation (radians) of a convex boundary's total turning from 2π.
pub(crate) const TURNING_EPS: f64 = 1e-6;
