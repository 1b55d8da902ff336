// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implements axis-aligned ellipses.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::resultant::{bezout, Conic};
use crate::{
    BoundingBox, CubicBez, Error, Intersection, Intersections, Line, ParamCurve, ParamCurvePoly,
    Point, Polynomial, QuadBez, Roots, Shape,
};

/// The control point offset, relative to the radius, of the four-arc cubic
/// approximation of an ellipse.
const KAPPA: f64 = 0.5522848;

/// An axis-aligned ellipse.
///
/// An ellipse is described implicitly, so it has no curve parameter:
/// intersections queried on an ellipse report `t = None`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    /// The center.
    pub center: Point,
    /// The radius along the x axis.
    pub rx: f64,
    /// The radius along the y axis.
    pub ry: f64,
}

impl Ellipse {
    /// A new ellipse from its center and radii.
    #[inline]
    pub fn new(center: impl Into<Point>, rx: f64, ry: f64) -> Ellipse {
        Ellipse {
            center: center.into(),
            rx,
            ry,
        }
    }

    /// A new circle.
    #[inline]
    pub fn circle(center: impl Into<Point>, radius: f64) -> Ellipse {
        Ellipse::new(center, radius, radius)
    }

    /// The implicit equation of the ellipse,
    /// `ry²·(x - cx)² + rx²·(y - cy)² - rx²·ry² = 0`, expanded into a conic.
    pub fn implicit(&self) -> Conic {
        let Point { x: cx, y: cy } = self.center;
        let rx2 = self.rx * self.rx;
        let ry2 = self.ry * self.ry;
        Conic::new([
            ry2,
            0.0,
            rx2,
            -2.0 * ry2 * cx,
            -2.0 * rx2 * cy,
            ry2 * cx * cx + rx2 * cy * cy - rx2 * ry2,
        ])
    }

    /// Approximate the ellipse with four cubic Béziers.
    ///
    /// The arcs start at the leftmost point and run through the top, right
    /// and bottom points (in y-down coordinates), each spanning a quadrant.
    pub fn to_cubic_bezs(&self) -> [CubicBez; 4] {
        let Point { x: cx, y: cy } = self.center;
        let (rx, ry) = (self.rx, self.ry);
        let ox = rx * KAPPA;
        let oy = ry * KAPPA;
        let xe = cx + rx;
        let ye = cy + ry;
        [
            CubicBez::new(
                (cx - rx, cy),
                (cx - rx, cy - oy),
                (cx - ox, cy - ry),
                (cx, cy - ry),
            ),
            CubicBez::new((cx, cy - ry), (cx + ox, cy - ry), (xe, cy - oy), (xe, cy)),
            CubicBez::new((xe, cy), (xe, cy + oy), (cx + ox, ye), (cx, ye)),
            CubicBez::new((cx, ye), (cx - ox, ye), (cx - rx, cy + oy), (cx - rx, cy)),
        ]
    }

    /// Intersect with another ellipse.
    ///
    /// The Bézout resultant of the two implicit equations gives the candidate
    /// `y` coordinates, and this ellipse's equation at each `y` gives the
    /// candidate `x` coordinates. Candidates are kept only when they satisfy
    /// both equations to within a tolerance relative to their coefficients.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::Ellipse;
    ///
    /// let a = Ellipse::new((40.0, 50.0), 20.0, 10.0);
    /// let b = Ellipse::new((60.0, 50.0), 20.0, 30.0);
    /// let hits = a.intersect_ellipse(&b).unwrap();
    /// assert_eq!(hits.len(), 2);
    /// assert!(hits.iter().all(|hit| hit.t.is_none()));
    /// ```
    pub fn intersect_ellipse(&self, other: &Ellipse) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return Ok(result);
        }

        let a = self.implicit();
        let b = other.implicit();
        let resultant = bezout(&a, &b);
        log::trace!("ellipse/ellipse resultant: {resultant}");
        let tolerance_a = a.residual_tolerance();
        let tolerance_b = b.residual_tolerance();

        for y in resultant.roots()? {
            for x in a.x_polynomial(y).roots()? {
                let point = Point::new(x, y);
                let residual_a = a.residual(point);
                let residual_b = b.residual(point);
                if residual_a.abs() < tolerance_a && residual_b.abs() < tolerance_b {
                    result.push(Intersection::implicit(point));
                } else {
                    log::debug!(
                        "rejecting candidate {point}: residuals {residual_a}, {residual_b}"
                    );
                }
            }
        }
        Ok(result)
    }

    /// Intersect with a quadratic Bézier.
    pub fn intersect_quad_bez(&self, quad: &QuadBez) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps(&quad.bounding_box()) {
            return Ok(result);
        }
        let [c0, c1, c2] = quad.power_basis();
        for t in self.quad_parameters(quad)? {
            result.push(Intersection::implicit(c2 * (t * t) + (c1 * t + c0)));
        }
        Ok(result)
    }

    /// Intersect with a cubic Bézier.
    pub fn intersect_cubic_bez(&self, cubic: &CubicBez) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps(&cubic.bounding_box()) {
            return Ok(result);
        }
        for t in self.cubic_parameters(cubic)? {
            result.push(Intersection::implicit(cubic.eval(t)));
        }
        Ok(result)
    }

    /// Intersect with a line segment.
    pub fn intersect_line(&self, line: &Line) -> Result<Intersections, Error> {
        let mut result = Intersections::new();
        if !self.bounding_box().overlaps_inclusive(&line.bounding_box()) {
            return Ok(result);
        }
        for t in self.line_parameters(line)? {
            result.push(Intersection::implicit(line.eval(t)));
        }
        Ok(result)
    }

    /// Parameters in `[0, 1]` where a quadratic Bézier meets the ellipse.
    ///
    /// Substituting the power basis into the implicit equation gives a
    /// quartic in `t`.
    pub(crate) fn quad_parameters(&self, quad: &QuadBez) -> Result<Roots, Error> {
        let [c0, c1, c2] = quad.power_basis();
        let Point { x: cx, y: cy } = self.center;
        let rx2 = self.rx * self.rx;
        let ry2 = self.ry * self.ry;

        let quartic = Polynomial::new(&[
            ry2 * c2.x * c2.x + rx2 * c2.y * c2.y,
            2.0 * (ry2 * c2.x * c1.x + rx2 * c2.y * c1.y),
            ry2 * (2.0 * c2.x * c0.x + c1.x * c1.x) + rx2 * (2.0 * c2.y * c0.y + c1.y * c1.y)
                - 2.0 * (ry2 * cx * c2.x + rx2 * cy * c2.y),
            2.0 * (ry2 * c1.x * (c0.x - cx) + rx2 * c1.y * (c0.y - cy)),
            ry2 * (c0.x * c0.x + cx * cx) + rx2 * (c0.y * c0.y + cy * cy)
                - 2.0 * (ry2 * cx * c0.x + rx2 * cy * c0.y)
                - rx2 * ry2,
        ]);
        log::trace!("ellipse/quad polynomial: {quartic}");

        let mut roots = quartic.roots()?;
        roots.retain(|t| (0.0..=1.0).contains(&*t));
        Ok(roots)
    }

    /// Parameters in `[0, 1]` where a cubic Bézier meets the ellipse.
    ///
    /// The substitution gives a sextic, solved by isolation on `[0, 1]`.
    pub(crate) fn cubic_parameters(&self, cubic: &CubicBez) -> Result<Roots, Error> {
        let (x, y) = cubic.polynomials();
        let rx2 = self.rx * self.rx;
        let ry2 = self.ry * self.ry;
        let dx = &x - &Polynomial::new(&[self.center.x]);
        let dy = &y - &Polynomial::new(&[self.center.y]);
        let sextic = ((&dx * &dx) * ry2 + (&dy * &dy) * rx2 - Polynomial::new(&[rx2 * ry2]))
            .simplified();
        log::trace!("ellipse/cubic polynomial: {sextic}");
        sextic.roots_in_interval(0.0, 1.0)
    }

    /// Parameters in `[0, 1]` where a line segment meets the ellipse.
    pub(crate) fn line_parameters(&self, line: &Line) -> Result<Roots, Error> {
        let rx2 = self.rx * self.rx;
        let ry2 = self.ry * self.ry;
        let d = line.p1 - line.p0;
        let o = line.p0 - self.center;
        let quadratic = Polynomial::new(&[
            ry2 * d.x * d.x + rx2 * d.y * d.y,
            2.0 * (ry2 * d.x * o.x + rx2 * d.y * o.y),
            ry2 * o.x * o.x + rx2 * o.y * o.y - rx2 * ry2,
        ]);
        let mut roots = quadratic.roots()?;
        roots.retain(|t| (0.0..=1.0).contains(&*t));
        Ok(roots)
    }
}

impl Shape for Ellipse {
    #[inline]
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.center.x - self.rx,
            self.center.y - self.ry,
            2.0 * self.rx,
            2.0 * self.ry,
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!(p0.distance(p1) < epsilon, "{p0:?} != {p1:?}");
    }

    fn sorted_by_y(mut hits: Intersections) -> Intersections {
        hits.sort_by(|a, b| a.point.y.total_cmp(&b.point.y));
        hits
    }

    fn on_ellipse(e: &Ellipse, p: Point) -> bool {
        let u = (p.x - e.center.x) / e.rx;
        let v = (p.y - e.center.y) / e.ry;
        (u * u + v * v - 1.0).abs() < 1e-6
    }

    #[test]
    fn ellipse_bounding_box() {
        let e = Ellipse::new((40.0, 50.0), 20.0, 10.0);
        assert_eq!(e.bounding_box(), BoundingBox::new(20.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn ellipse_implicit() {
        let e = Ellipse::new((40.0, 50.0), 20.0, 10.0);
        let conic = e.implicit();
        assert_eq!(
            conic.coeffs,
            [100.0, 0.0, 400.0, -8000.0, -40000.0, 1_120_000.0]
        );
        for p in [(20.0, 50.0), (60.0, 50.0), (40.0, 40.0), (40.0, 60.0)] {
            assert_eq!(conic.residual(p.into()), 0.0);
        }
    }

    #[test]
    fn ellipse_to_cubic_bezs() {
        let e = Ellipse::new((40.0, 50.0), 20.0, 10.0);
        let arcs = e.to_cubic_bezs();
        assert_eq!(arcs[0].p0, Point::new(20.0, 50.0));
        assert_eq!(arcs[0].p1, Point::new(20.0, 44.477152000000004));
        assert_eq!(arcs[0].p3, Point::new(40.0, 40.0));
        assert_eq!(arcs[1].p3, Point::new(60.0, 50.0));
        assert_eq!(arcs[2].p3, Point::new(40.0, 60.0));
        assert_eq!(arcs[3].p3, arcs[0].p0);
        for pair in arcs.windows(2) {
            assert_eq!(pair[0].p3, pair[1].p0);
        }
        // The midpoints of the arcs are close to the ellipse.
        for arc in &arcs {
            let p = arc.eval(0.5);
            let u = (p.x - 40.0) / 20.0;
            let v = (p.y - 50.0) / 10.0;
            assert!((u * u + v * v - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn ellipse_ellipse_intersection() {
        let a = Ellipse::new((40.0, 50.0), 20.0, 10.0);
        let b = Ellipse::new((60.0, 50.0), 20.0, 30.0);
        let hits = sorted_by_y(a.intersect_ellipse(&b).unwrap());
        assert_eq!(hits.len(), 2);
        assert_near(hits[0].point, Point::new(41.13999063669846, 40.01625794919259), 1e-6);
        assert_near(hits[1].point, Point::new(41.13999063670464, 59.98374205080722), 1e-6);
        assert!(hits.iter().all(|hit| hit.t.is_none()));
    }

    #[test]
    fn ellipse_quadbez_intersection() {
        let e = Ellipse::new((40.0, 50.0), 20.0, 10.0);
        let q = QuadBez::new((25.0, 30.0), (20.0, 50.0), (25.0, 70.0));
        let hits = sorted_by_y(e.intersect_quad_bez(&q).unwrap());
        assert_eq!(hits.len(), 2);
        assert_near(hits[0].point, Point::new(22.654919008431115, 45.0213414106831), 1e-6);
        assert_near(hits[1].point, Point::new(22.65491900843112, 54.97865858931689), 1e-6);
        assert!(hits.iter().all(|hit| hit.t.is_none()));

        // Asking the curve gives the same points, with parameters.
        let mirrored = sorted_by_y(q.intersect_ellipse(&e).unwrap());
        assert_eq!(mirrored.len(), 2);
        for (hit, mirror) in hits.iter().zip(&mirrored) {
            assert_eq!(hit.point, mirror.point);
            assert_near(q.eval(mirror.t.unwrap()), mirror.point, 1e-9);
        }
    }

    #[test]
    fn ellipse_cubicbez_intersection() {
        let e = Ellipse::new((40.0, 50.0), 20.0, 10.0);
        let c = CubicBez::new((25.0, 30.0), (20.0, 50.0), (40.0, 60.0), (25.0, 70.0));
        let hits = sorted_by_y(e.intersect_cubic_bez(&c).unwrap());
        assert_eq!(hits.len(), 2);
        assert_near(hits[0].point, Point::new(25.02217291521465, 43.3730720574855), 1e-6);
        assert_near(hits[1].point, Point::new(30.399714001834568, 58.77260663583576), 1e-6);
        for hit in &hits {
            assert!(hit.t.is_none());
            assert!(on_ellipse(&e, hit.point));
        }
    }

    #[test]
    fn ellipse_line_intersection() {
        let e = Ellipse::circle((0.0, 0.0), 5.0);
        let l = Line::new((-10.0, 3.0), (10.0, 3.0));
        let hits = e.intersect_line(&l).unwrap();
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            assert!(hit.t.is_none());
            assert!((hit.point.x.abs() - 4.0).abs() < 1e-12);
            assert!(on_ellipse(&e, hit.point));
        }
        // A segment that ends inside the circle crosses it once.
        let inside = Line::new((-10.0, 3.0), (0.0, 3.0));
        assert_eq!(e.intersect_line(&inside).unwrap().len(), 1);
    }

    #[test]
    fn ellipse_disjoint_boxes_short_circuit() {
        let a = Ellipse::new((0.0, 0.0), 10.0, 5.0);
        let b = Ellipse::new((30.0, 0.0), 10.0, 5.0);
        assert!(a.intersect_ellipse(&b).unwrap().is_empty());
        let q = QuadBez::new((50.0, 50.0), (60.0, 60.0), (70.0, 50.0));
        assert!(a.intersect_quad_bez(&q).unwrap().is_empty());
        let c = CubicBez::new((50.0, 50.0), (60.0, 60.0), (70.0, 60.0), (80.0, 50.0));
        assert!(a.intersect_cubic_bez(&c).unwrap().is_empty());
    }

    #[test]
    fn concentric_ellipses_do_not_meet() {
        let a = Ellipse::new((0.0, 0.0), 10.0, 5.0);
        let b = Ellipse::new((0.0, 0.0), 4.0, 2.0);
        assert!(a.intersect_ellipse(&b).unwrap().is_empty());
    }
}
