// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::resultant::{correlate_roots, cubic_resultant};
use crate::{
    BoundingBox, Ellipse, Error, Intersection, Intersections, Line, ParamCurve,
    ParamCurveExtrema, ParamCurvePoly, Point, Polynomial, Shape,
};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The power-basis coefficients `[c0, c1, c2, c3]`, with
    /// `B(t) = c0 + c1·t + c2·t² + c3·t³`.
    #[inline]
    pub fn power_basis(&self) -> [Point; 4] {
        let c3 = -self.p0 + (self.p1 * 3.0 + (self.p2 * -3.0 + self.p3));
        let c2 = self.p0 * 3.0 + (self.p1 * -6.0 + self.p2 * 3.0);
        let c1 = self.p0 * -3.0 + self.p1 * 3.0;
        [self.p0, c1, c2, c3]
    }

    /// Intersect with another cubic Bézier.
    ///
    /// The resultant is a polynomial of degree 9 in the parameter `s` of
    /// `other`, whose roots in `[0, 1]` are found by isolation. Each root is
    /// substituted back into `self` and solved for `t` along each axis
    /// separately; the intersection is kept when the two solutions agree.
    ///
    /// `t` is the parameter on `self`; the point is evaluated on `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::CubicBez;
    ///
    /// let a = CubicBez::new((1.0, 1.0), (5.0, 1.0), (5.0, 2.0), (4.0, 2.0));
    /// let b = CubicBez::new((2.0, 2.0), (1.0, 3.0), (3.0, 3.0), (4.0, 1.0));
    /// let hits = a.intersect_cubic_bez(&b).unwrap();
    /// assert_eq!(hits.len(), 1);
    /// assert!((hits[0].t.unwrap() - 0.34755).abs() < 1e-4);
    /// ```
    pub fn intersect_cubic_bez(&self, other: &CubicBez) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return Ok(result);
        }

        let [c10, c11, c12, c13] = self.power_basis();
        let [c20, c21, c22, c23] = other.power_basis();
        let resultant = cubic_resultant(&[c10, c11, c12, c13], &[c20, c21, c22, c23]).simplified();
        log::trace!("cubic/cubic resultant of degree {:?}", resultant.degree());

        for s in resultant.roots_in_interval(0.0, 1.0)? {
            let x_roots = Polynomial::new(&[
                c13.x,
                c12.x,
                c11.x,
                c10.x - c20.x - s * c21.x - s * s * c22.x - s * s * s * c23.x,
            ])
            .roots()?;
            let y_roots = Polynomial::new(&[
                c13.y,
                c12.y,
                c11.y,
                c10.y - c20.y - s * c21.y - s * s * c22.y - s * s * s * c23.y,
            ])
            .roots()?;
            log::trace!("s = {s}: x roots {x_roots:?}, y roots {y_roots:?}");
            match correlate_roots(&x_roots, &y_roots) {
                Some(t) => {
                    let point = c23 * (s * s * s) + (c22 * (s * s) + (c21 * s + c20));
                    result.push(Intersection::new(point, t));
                }
                None => log::debug!("dropping resultant root {s}: x and y roots disagree"),
            }
        }
        Ok(result)
    }

    /// Intersect with an ellipse.
    ///
    /// `t` is the parameter on `self`.
    pub fn intersect_ellipse(&self, ellipse: &Ellipse) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps(&ellipse.bounding_box()) {
            return Ok(result);
        }
        for t in ellipse.cubic_parameters(self)? {
            result.push(Intersection::new(self.eval(t), t));
        }
        Ok(result)
    }

    /// Intersect with a line segment.
    ///
    /// `t` is the parameter on `self`.
    pub fn intersect_line(&self, line: &Line) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps_inclusive(&line.bounding_box()) {
            return Ok(result);
        }
        let (x, y) = self.polynomials();
        for t in line.implicit_along(&x, &y).roots()? {
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let point = self.eval(t);
            if (0.0..=1.0).contains(&line.project(point)) {
                result.push(Intersection::new(point, t));
            }
        }
        Ok(result)
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        self.p0 * (mt * mt * mt)
            + (self.p1 * (mt * mt * 3.0) + (self.p2 * (mt * 3.0) + self.p3 * t) * t) * t
    }

    /// De Casteljau subdivision.
    fn split(&self, t: f64) -> Result<(CubicBez, CubicBez), Error> {
        let p01 = self.p0.lerp(self.p1, t)?;
        let p12 = self.p1.lerp(self.p2, t)?;
        let p23 = self.p2.lerp(self.p3, t)?;
        let p012 = p01.lerp(p12, t)?;
        let p123 = p12.lerp(p23, t)?;
        let mid = p012.lerp(p123, t)?;
        Ok((
            CubicBez::new(self.p0, p01, p012, mid),
            CubicBez::new(mid, p123, p23, self.p3),
        ))
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurvePoly for CubicBez {
    fn polynomials(&self) -> (Polynomial, Polynomial) {
        let [c0, c1, c2, c3] = self.power_basis();
        (
            Polynomial::new(&[c3.x, c2.x, c1.x, c0.x]),
            Polynomial::new(&[c3.y, c2.y, c1.y, c0.y]),
        )
    }
}

impl ParamCurveExtrema for CubicBez {}

impl Shape for CubicBez {
    fn bounding_box(&self) -> BoundingBox {
        self.extrema_bounding_box()
    }
}
