//! Point accessors: uniform read/write of planar coordinates.
//!
//! Purpose
//! - Let every routine in `planar` operate on arbitrary point types, whether
//!   they expose coordinates as public fields or as accessor methods.
//! - Resolution is static. A type either implements `PointAccess` or the call
//!   site fails to compile; there is no runtime dispatch and no fallback.
//!
//! Conventions
//! - Reads are widened to `f64` (`to_vec2`) before any predicate runs, so `f32`
//!   points lose no precision inside the algorithms.
//! - Writes go through `x_mut`/`y_mut`. Synthesized points (`make_point`,
//!   `regular_polygon_into`) therefore work for every implementor.
//! - Field-based and method-based user types get an impl from
//!   `impl_point_access!`; nalgebra vectors/points, `[T; 2]` and `(T, T)` are
//!   covered here.
//!
//! ```compile_fail
//! use convexkit::planar::point_in_polygon;
//!
//! struct Bare {
//!     a: f64,
//! }
//! // `Bare` exposes no x/y capability: rejected at compile time.
//! let _ = point_in_polygon(&Bare { a: 0.0 }, &[Bare { a: 1.0 }]);
//! ```

use nalgebra::{Point2, Scalar, Vector2};
use std::fmt::Debug;

/// Scalar usable as a point coordinate.
pub trait Coord: Copy + PartialOrd + Debug {
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;
}

impl Coord for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Coord for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

/// Capability: read and write the `x`/`y` coordinates of a planar point.
///
/// Getters return by value; the `_mut` variants hand out a mutable reference so
/// coordinates can be assigned in place.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not expose planar x/y coordinates",
    label = "`{Self}` does not implement `PointAccess`",
    note = "implement `PointAccess`, or use `impl_point_access!(T: S, fields x, y)` \
            / `impl_point_access!(T: S, methods x / x_mut, y / y_mut)`"
)]
pub trait PointAccess {
    type Scalar: Coord;

    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
    fn x_mut(&mut self) -> &mut Self::Scalar;
    fn y_mut(&mut self) -> &mut Self::Scalar;
}

/// Implement `PointAccess` for a user type.
///
/// - `impl_point_access!(Pt: f32, fields x, y)` for public (or crate-visible)
///   fields.
/// - `impl_point_access!(Pt: f64, methods x / x_mut, y / y_mut)` for types that
///   expose inherent getters `fn x(&self) -> S` and `fn x_mut(&mut self) -> &mut S`.
#[macro_export]
macro_rules! impl_point_access {
    ($ty:ty : $scalar:ty, fields $x:ident, $y:ident) => {
        impl $crate::accessor::PointAccess for $ty {
            type Scalar = $scalar;
            #[inline]
            fn x(&self) -> $scalar {
                self.$x
            }
            #[inline]
            fn y(&self) -> $scalar {
                self.$y
            }
            #[inline]
            fn x_mut(&mut self) -> &mut $scalar {
                &mut self.$x
            }
            #[inline]
            fn y_mut(&mut self) -> &mut $scalar {
                &mut self.$y
            }
        }
    };
    ($ty:ty : $scalar:ty, methods $x:ident / $x_mut:ident, $y:ident / $y_mut:ident) => {
        impl $crate::accessor::PointAccess for $ty {
            type Scalar = $scalar;
            // Inherent methods win over trait methods in path resolution.
            #[inline]
            fn x(&self) -> $scalar {
                <$ty>::$x(self)
            }
            #[inline]
            fn y(&self) -> $scalar {
                <$ty>::$y(self)
            }
            #[inline]
            fn x_mut(&mut self) -> &mut $scalar {
                <$ty>::$x_mut(self)
            }
            #[inline]
            fn y_mut(&mut self) -> &mut $scalar {
                <$ty>::$y_mut(self)
            }
        }
    };
}

impl<T: Coord + Scalar> PointAccess for Vector2<T> {
    type Scalar = T;
    #[inline]
    fn x(&self) -> T {
        self.x
    }
    #[inline]
    fn y(&self) -> T {
        self.y
    }
    #[inline]
    fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }
    #[inline]
    fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }
}

impl<T: Coord + Scalar> PointAccess for Point2<T> {
    type Scalar = T;
    #[inline]
    fn x(&self) -> T {
        self.x
    }
    #[inline]
    fn y(&self) -> T {
        self.y
    }
    #[inline]
    fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }
    #[inline]
    fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }
}

impl<T: Coord> PointAccess for [T; 2] {
    type Scalar = T;
    #[inline]
    fn x(&self) -> T {
        self[0]
    }
    #[inline]
    fn y(&self) -> T {
        self[1]
    }
    #[inline]
    fn x_mut(&mut self) -> &mut T {
        &mut self[0]
    }
    #[inline]
    fn y_mut(&mut self) -> &mut T {
        &mut self[1]
    }
}

impl<T: Coord> PointAccess for (T, T) {
    type Scalar = T;
    #[inline]
    fn x(&self) -> T {
        self.0
    }
    #[inline]
    fn y(&self) -> T {
        self.1
    }
    #[inline]
    fn x_mut(&mut self) -> &mut T {
        &mut self.0
    }
    #[inline]
    fn y_mut(&mut self) -> &mut T {
        &mut self.1
    }
}

#[inline]
pub fn get_x<P: PointAccess>(p: &P) -> P::Scalar {
    p.x()
}

#[inline]
pub fn get_y<P: PointAccess>(p: &P) -> P::Scalar {
    p.y()
}

#[inline]
pub fn get_x_mut<P: PointAccess>(p: &mut P) -> &mut P::Scalar {
    p.x_mut()
}

#[inline]
pub fn get_y_mut<P: PointAccess>(p: &mut P) -> &mut P::Scalar {
    p.y_mut()
}

/// Widen a point to an `f64` column vector.
#[inline]
pub fn to_vec2<P: PointAccess>(p: &P) -> Vector2<f64> {
    Vector2::new(p.x().to_f64(), p.y().to_f64())
}

/// Build a point of type `P` from `f64` coordinates (narrowing if needed).
#[inline]
pub fn make_point<P: PointAccess + Default>(x: f64, y: f64) -> P {
    let mut p = P::default();
    *p.x_mut() = P::Scalar::from_f64(x);
    *p.y_mut() = P::Scalar::from_f64(y);
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct FieldPt {
        x: f32,
        y: f32,
    }
    crate::impl_point_access!(FieldPt: f32, fields x, y);

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct MethodPt {
        c: [f64; 2],
    }
    impl MethodPt {
        fn x(&self) -> f64 {
            self.c[0]
        }
        fn y(&self) -> f64 {
            self.c[1]
        }
        fn x_mut(&mut self) -> &mut f64 {
            &mut self.c[0]
        }
        fn y_mut(&mut self) -> &mut f64 {
            &mut self.c[1]
        }
    }
    crate::impl_point_access!(MethodPt: f64, methods x / x_mut, y / y_mut);

    #[test]
    fn field_and_method_points_read_alike() {
        let f = FieldPt { x: 0.5, y: -2.0 };
        let m = MethodPt { c: [0.5, -2.0] };
        assert_eq!(to_vec2(&f), to_vec2(&m));
        assert_eq!(get_x(&f), 0.5f32);
        assert_eq!(get_y(&m), -2.0);
    }

    #[test]
    fn mutable_access_assigns_in_place() {
        let mut f = FieldPt::default();
        *get_x_mut(&mut f) = 3.0;
        *get_y_mut(&mut f) = 4.0;
        assert_eq!(f, FieldPt { x: 3.0, y: 4.0 });

        let mut m = MethodPt::default();
        *get_y_mut(&mut m) = 7.5;
        assert_eq!(m.c, [0.0, 7.5]);

        let mut v = Vector2::new(1.0f64, 2.0);
        *get_x_mut(&mut v) += 1.0;
        assert_eq!(v, Vector2::new(2.0, 2.0));
    }

    #[test]
    fn make_point_narrows_to_f32() {
        let p: FieldPt = make_point(0.1, 1.0 / 3.0);
        assert_eq!(p.x, 0.1f32);
        assert_eq!(p.y, (1.0f64 / 3.0) as f32);
        let t: (f64, f64) = make_point(-1.0, 2.0);
        assert_eq!(t, (-1.0, 2.0));
        let a: [f32; 2] = make_point(0.25, 0.75);
        assert_eq!(a, [0.25, 0.75]);
    }

    #[test]
    fn nalgebra_point_and_vector() {
        let p = Point2::new(1.5f32, -0.5);
        let v = Vector2::new(1.5f64, -0.5);
        assert_eq!(to_vec2(&p), v);
    }
}
