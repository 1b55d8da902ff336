// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{
    BoundingBox, Ellipse, Error, Intersection, Intersections, ParamCurve, ParamCurvePoly, Point,
    Polynomial, Shape,
};

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        self.p0.distance(self.p1)
    }

    /// The midpoint of the line.
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// The parameter of the point on the infinite line through this segment
    /// closest to `p`; in `[0, 1]` for points alongside the segment.
    ///
    /// Returns NaN for a degenerate line.
    pub(crate) fn project(&self, p: Point) -> f64 {
        let d = self.p1 - self.p0;
        (p - self.p0).dot(d) / d.dot(d)
    }

    /// The implicit equation of the infinite line, evaluated along a curve.
    ///
    /// Returns the polynomial `dy·(x(t) - x0) - dx·(y(t) - y0)`, whose roots
    /// are the parameters where the curve crosses the line.
    pub(crate) fn implicit_along(&self, x: &Polynomial, y: &Polynomial) -> Polynomial {
        let d = self.p1 - self.p0;
        let x = x - &Polynomial::new(&[self.p0.x]);
        let y = y - &Polynomial::new(&[self.p0.y]);
        x * d.y - y * d.x
    }

    /// Intersect this segment with another.
    ///
    /// Parallel segments, including overlapping collinear ones, have no
    /// reported intersection. `t` is the parameter on `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::{Line, Point};
    ///
    /// let a = Line::new((0.0, 0.0), (4.0, 4.0));
    /// let b = Line::new((0.0, 4.0), (4.0, 0.0));
    /// let hits = a.intersect_line(&b);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].point, Point::new(2.0, 2.0));
    /// assert_eq!(hits[0].t, Some(0.5));
    /// ```
    pub fn intersect_line(&self, other: &Line) -> Intersections {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps_inclusive(&other.bounding_box()) {
            return result;
        }
        let ab = self.p1 - self.p0;
        let cd = other.p1 - other.p0;
        let pcd = ab.cross(cd);
        if pcd == 0.0 {
            return result;
        }
        let w = other.p0 - self.p0;
        let t = w.cross(cd) / pcd;
        let u = w.cross(ab) / pcd;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            result.push(Intersection::new(self.eval(t), t));
        }
        result
    }

    /// Intersect this segment with an ellipse.
    ///
    /// `t` is the parameter on the line.
    pub fn intersect_ellipse(&self, ellipse: &Ellipse) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps_inclusive(&ellipse.bounding_box()) {
            return Ok(result);
        }
        for t in ellipse.line_parameters(self)? {
            result.push(Intersection::new(self.eval(t), t));
        }
        Ok(result)
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0 + (self.p1 - self.p0) * t
    }

    fn split(&self, t: f64) -> Result<(Line, Line), Error> {
        let mid = self.p0.lerp(self.p1, t)?;
        Ok((Line::new(self.p0, mid), Line::new(mid, self.p1)))
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurvePoly for Line {
    fn polynomials(&self) -> (Polynomial, Polynomial) {
        let d = self.p1 - self.p0;
        (
            Polynomial::new(&[d.x, self.p0.x]),
            Polynomial::new(&[d.y, self.p0.y]),
        )
    }
}

impl Shape for Line {
    #[inline]
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.p0, self.p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_eval_and_split() {
        let l = Line::new((0.0, 0.0), (10.0, 4.0));
        assert_eq!(l.eval(0.5), Point::new(5.0, 2.0));
        assert!((l.length() - 116.0_f64.sqrt()).abs() < 1e-12);
        let (a, b) = l.split(0.25).unwrap();
        assert_eq!(a.p1, Point::new(2.5, 1.0));
        assert_eq!(b.p0, a.p1);
        assert_eq!(l.split(2.0), Err(Error::ParameterOutOfRange(2.0)));
    }

    #[test]
    fn line_polynomials() {
        let l = Line::new((1.0, 2.0), (4.0, -2.0));
        let (x, y) = l.polynomials();
        assert_eq!(x.eval(0.5), Ok(2.5));
        assert_eq!(y.eval(0.5), Ok(0.0));
    }

    #[test]
    fn line_bounding_box() {
        let l = Line::new((5.0, 1.0), (2.0, 3.0));
        assert_eq!(l.bounding_box(), BoundingBox::new(2.0, 1.0, 3.0, 2.0));
    }

    #[test]
    fn line_line_intersection() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let b = Line::new((2.0, -1.0), (2.0, 3.0));
        let hits = a.intersect_line(&b);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].point, Point::new(2.0, 0.0));
        assert_eq!(hits[0].t, Some(0.2));
        assert_eq!(b.intersect_line(&a)[0].t, Some(0.25));
    }

    #[test]
    fn line_line_misses() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        // Crossing point beyond the end of `a`.
        assert!(a.intersect_line(&Line::new((12.0, -1.0), (12.0, 1.0))).is_empty());
        // Parallel.
        assert!(a.intersect_line(&Line::new((0.0, 1.0), (10.0, 1.0))).is_empty());
        // Collinear and overlapping.
        assert!(a.intersect_line(&Line::new((5.0, 0.0), (15.0, 0.0))).is_empty());
    }

    #[test]
    fn line_ellipse_intersection() {
        let e = Ellipse::new((40.0, 50.0), 20.0, 10.0);
        let l = Line::new((0.0, 50.0), (80.0, 50.0));
        let mut hits = l.intersect_ellipse(&e).unwrap();
        hits.sort_by(|a, b| a.point.x.total_cmp(&b.point.x));
        assert_eq!(hits.len(), 2);
        assert!((hits[0].point.x - 20.0).abs() < 1e-9);
        assert!((hits[1].point.x - 60.0).abs() < 1e-9);
        assert!((hits[0].t.unwrap() - 0.25).abs() < 1e-12);

        let outside = Line::new((0.0, 0.0), (10.0, 10.0));
        assert!(outside.intersect_ellipse(&e).unwrap().is_empty());
    }

    #[test]
    fn implicit_along_curve() {
        let l = Line::new((0.0, 1.0), (2.0, 1.0));
        let (x, y) = Line::new((1.0, 0.0), (1.0, 4.0)).polynomials();
        let p = l.implicit_along(&x, &y);
        // Crosses y = 1 at a quarter of the way up.
        assert_eq!(p.roots().unwrap().as_slice(), &[0.25]);
    }
}
