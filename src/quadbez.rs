// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::resultant::{correlate_roots, quad_resultant};
use crate::{
    BoundingBox, Ellipse, Error, Intersection, Intersections, Line, ParamCurve,
    ParamCurveExtrema, ParamCurvePoly, Point, Polynomial, Shape,
};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct QuadBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline(always)]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// The power-basis coefficients `[c0, c1, c2]`, with
    /// `B(t) = c0 + c1·t + c2·t²`.
    #[inline]
    pub fn power_basis(&self) -> [Point; 3] {
        let c2 = self.p0 + (self.p1 * -2.0 + self.p2);
        let c1 = self.p0 * -2.0 + self.p1 * 2.0;
        [self.p0, c1, c2]
    }

    /// Intersect with another quadratic Bézier.
    ///
    /// `t` is the parameter on `self`; the point is evaluated on `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::QuadBez;
    ///
    /// let a = QuadBez::new((23.0, 24.0), (59.0, 47.0), (94.0, 37.0));
    /// let b = QuadBez::new((41.0, 66.0), (23.0, 43.0), (71.0, 10.0));
    /// let hits = a.intersect_quad_bez(&b).unwrap();
    /// assert_eq!(hits.len(), 1);
    /// assert!((hits[0].point.x - 43.4383952995705).abs() < 1e-6);
    /// ```
    pub fn intersect_quad_bez(&self, other: &QuadBez) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return Ok(result);
        }

        let [c10, c11, c12] = self.power_basis();
        let [c20, c21, c22] = other.power_basis();
        let resultant = quad_resultant(&[c10, c11, c12], &[c20, c21, c22]);
        log::trace!("quad/quad resultant: {resultant}");

        for s in resultant.roots()? {
            if !(0.0..=1.0).contains(&s) {
                continue;
            }
            let x_roots = Polynomial::new(&[c12.x, c11.x, c10.x - c20.x - s * c21.x - s * s * c22.x])
                .roots()?;
            let y_roots = Polynomial::new(&[c12.y, c11.y, c10.y - c20.y - s * c21.y - s * s * c22.y])
                .roots()?;
            log::trace!("s = {s}: x roots {x_roots:?}, y roots {y_roots:?}");
            match correlate_roots(&x_roots, &y_roots) {
                Some(t) => {
                    let point = c22 * (s * s) + (c21 * s + c20);
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
        let [c0, c1, c2] = self.power_basis();
        for t in ellipse.quad_parameters(self)? {
            result.push(Intersection::new(c2 * (t * t) + (c1 * t + c0), t));
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

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        self.p0 * (mt * mt) + (self.p1 * (mt * 2.0) + self.p2 * t) * t
    }

    /// De Casteljau subdivision.
    fn split(&self, t: f64) -> Result<(QuadBez, QuadBez), Error> {
        let p01 = self.p0.lerp(self.p1, t)?;
        let p12 = self.p1.lerp(self.p2, t)?;
        let mid = p01.lerp(p12, t)?;
        Ok((
            QuadBez::new(self.p0, p01, mid),
            QuadBez::new(mid, p12, self.p2),
        ))
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurvePoly for QuadBez {
    fn polynomials(&self) -> (Polynomial, Polynomial) {
        let [c0, c1, c2] = self.power_basis();
        (
            Polynomial::new(&[c2.x, c1.x, c0.x]),
            Polynomial::new(&[c2.y, c1.y, c0.y]),
        )
    }
}

impl ParamCurveExtrema for QuadBez {}

impl Shape for QuadBez {
    fn bounding_box(&self) -> BoundingBox {
        self.extrema_bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_log::test;

    use super::*;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!(p0.distance(p1) < epsilon, "{p0:?} != {p1:?}");
    }

    fn random_quad(rng: &mut StdRng) -> QuadBez {
        let mut p = || Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        QuadBez::new(p(), p(), p())
    }

    #[test]
    fn quadbez_power_basis_matches_eval() {
        let q = QuadBez::new((3.0, 2.0), (7.0, 10.0), (-1.0, 4.0));
        let (x, y) = q.polynomials();
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let p = Point::new(x.eval(t).unwrap(), y.eval(t).unwrap());
            assert_near(p, q.eval(t), 1e-12);
        }
    }

    #[test]
    fn quadbez_split() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        let (a, b) = q.split(0.3).unwrap();
        assert_eq!(a.p0, q.p0);
        assert_eq!(b.p2, q.p2);
        assert_near(a.p2, q.eval(0.3), 1e-12);
        assert_near(a.eval(0.5), q.eval(0.15), 1e-12);
        assert_near(b.eval(0.5), q.eval(0.65), 1e-12);
        assert_eq!(q.split(-0.5), Err(Error::ParameterOutOfRange(-0.5)));
    }

    #[test]
    fn quadbez_extrema() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn quadbez_bounding_box_is_tight() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        let bb = q.bounding_box();
        assert!((bb.x - 0.0).abs() < 1e-9);
        assert!((bb.width - 10.0).abs() < 1e-9);
        // The apex is at height 5, half the control point's height.
        assert!((bb.height - 5.0).abs() < 1e-6);
    }

    #[test]
    fn quadbez_quadbez_intersection() {
        let a = QuadBez::new((23.0, 24.0), (59.0, 47.0), (94.0, 37.0));
        let b = QuadBez::new((41.0, 66.0), (23.0, 43.0), (71.0, 10.0));
        let hits = a.intersect_quad_bez(&b).unwrap();
        assert_eq!(hits.len(), 1);
        assert_near(
            hits[0].point,
            Point::new(43.4383952995705, 34.429430465203474),
            1e-9,
        );
        let t = hits[0].t.unwrap();
        assert!((t - 0.28499468430069186).abs() < 1e-9);
        assert_near(a.eval(t), hits[0].point, 1e-6);
    }

    #[test]
    fn quadbez_disjoint_boxes_short_circuit() {
        let a = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        let b = QuadBez::new((20.0, 0.0), (25.0, 10.0), (30.0, 0.0));
        assert!(a.intersect_quad_bez(&b).unwrap().is_empty());
        let e = Ellipse::new((50.0, 50.0), 10.0, 10.0);
        assert!(a.intersect_ellipse(&e).unwrap().is_empty());
    }

    #[test]
    fn quadbez_line_intersection() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        let l = Line::new((0.0, 2.5), (10.0, 2.5));
        let mut hits = q.intersect_line(&l).unwrap();
        hits.sort_by(|a, b| a.point.x.total_cmp(&b.point.x));
        assert_eq!(hits.len(), 2);
        // y(t) = 20t(1 - t) = 2.5 at t = (1 ± √0.5) / 2.
        let t0 = (1.0 - 0.5_f64.sqrt()) / 2.0;
        assert!((hits[0].t.unwrap() - t0).abs() < 1e-12);
        assert!((hits[0].point.y - 2.5).abs() < 1e-12);

        // Same line but too short to reach the curve.
        let short = Line::new((4.0, 2.5), (6.0, 2.5));
        assert!(q.intersect_line(&short).unwrap().is_empty());
    }

    #[test]
    fn quadbez_bounding_box_contains_curve() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let q = random_quad(&mut rng);
            let bb = q.bounding_box();
            let tolerance = 1e-9;
            let grown = BoundingBox::new(
                bb.x - tolerance,
                bb.y - tolerance,
                bb.width + 2.0 * tolerance,
                bb.height + 2.0 * tolerance,
            );
            for i in 0..=20 {
                let p = q.eval(f64::from(i) / 20.0);
                assert!(grown.contains_point(p), "{q:?} {bb:?} {p:?}");
            }
        }
    }

    #[test]
    fn quadbez_intersections_lie_on_both_curves() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let a = random_quad(&mut rng);
            let b = random_quad(&mut rng);
            for hit in a.intersect_quad_bez(&b).unwrap() {
                let t = hit.t.unwrap();
                assert!((0.0..=1.0).contains(&t));
                assert_near(a.eval(t), hit.point, 0.1);
            }
        }
    }
}
