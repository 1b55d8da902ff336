// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::Error;

/// A 2D point.
///
/// Points double as displacement vectors: the power-basis coefficients of a
/// Bézier curve are stored as points, so addition, subtraction and scaling
/// are all defined directly on `Point`.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Point = Point::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Linearly interpolate between two points.
    ///
    /// Returns [`Error::InvalidInput`] if `t` is NaN and
    /// [`Error::ParameterOutOfRange`] if it is outside of `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(10.0, 4.0);
    /// assert_eq!(a.lerp(b, 0.5).unwrap(), Point::new(5.0, 2.0));
    /// assert!(a.lerp(b, 1.5).is_err());
    /// ```
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Result<Point, Error> {
        if t.is_nan() {
            return Err(Error::InvalidInput(t));
        }
        if !(0.0..=1.0).contains(&t) {
            return Err(Error::ParameterOutOfRange(t));
        }
        Ok(self + (other - self) * t)
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Dot product, treating both points as vectors.
    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product, treating both points as vectors.
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this point NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<(f64, f64)> for Point {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl From<Point> for (f64, f64) {
    #[inline(always)]
    fn from(v: Point) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, other: Point) {
        *self = *self + other;
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, other: Point) {
        *self = *self - other;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Point {
        other * self
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline(always)]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline(always)]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        assert_eq!(
            Point::new(1., 2.) + Point::new(3., 4.),
            Point::new(4., 6.)
        );
        assert_eq!(
            Point::new(3., 2.) - Point::new(1., 2.),
            Point::new(2., 0.)
        );
        assert_eq!(Point::new(3., 2.) * 3., Point::new(9., 6.));
        assert_eq!(-2. * Point::new(3., 2.), Point::new(-6., -4.));
        assert_eq!(-Point::new(1., -1.), Point::new(-1., 1.));
    }

    #[test]
    fn min_max() {
        let a = Point::new(1., 5.);
        let b = Point::new(3., 2.);
        assert_eq!(a.min(b), Point::new(1., 2.));
        assert_eq!(a.max(b), Point::new(3., 5.));
    }

    #[test]
    fn lerp_in_range() {
        let a = Point::new(1., 1.);
        let b = Point::new(5., 3.);
        assert_eq!(a.lerp(b, 0.0), Ok(a));
        assert_eq!(a.lerp(b, 1.0), Ok(b));
        assert_eq!(a.lerp(b, 0.25), Ok(Point::new(2., 1.5)));
    }

    #[test]
    fn lerp_domain_errors() {
        let a = Point::new(1., 1.);
        let b = Point::new(5., 3.);
        assert_eq!(a.lerp(b, -0.1), Err(Error::ParameterOutOfRange(-0.1)));
        assert_eq!(a.lerp(b, 1.5), Err(Error::ParameterOutOfRange(1.5)));
        assert!(matches!(a.lerp(b, f64::NAN), Err(Error::InvalidInput(_))));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn distance() {
        let p1 = Point::new(-11., 1.);
        let p2 = Point::new(-7., -2.);
        assert_eq!(p1.distance(p2), 5.);
    }

    #[test]
    fn display() {
        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{}", p), "(0.12345, 9.87654)");
        assert_eq!(format!("{:.2}", p), "(0.12, 9.88)");
        assert_eq!(format!("{:?}", Point::new(3., 2.)), "(3.0, 2.0)");
    }
}
