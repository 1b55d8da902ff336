// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implicit conics and the resultants behind the intersection queries.
//!
//! Every curve/curve query eliminates one coordinate: the resultant is a
//! polynomial in a single curve parameter (or, for two conics, in `y`)
//! whose real roots are the candidate intersections. The formulas below are
//! the expanded Bézout determinants for each pair of degrees.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::common::{ELLIPSE_RESIDUAL_EPSILON, ROOT_CORRELATION_TOLERANCE};
use crate::{Point, Polynomial};

/// An implicit conic `A·x² + B·xy + C·y² + D·x + E·y + F = 0`.
///
/// The coefficients are stored in that order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conic {
    /// `[A, B, C, D, E, F]`.
    pub coeffs: [f64; 6],
}

impl Conic {
    /// A conic from its coefficients `[A, B, C, D, E, F]`.
    #[inline]
    pub const fn new(coeffs: [f64; 6]) -> Conic {
        Conic { coeffs }
    }

    /// The value of the implicit equation at `p`; zero on the conic.
    #[inline]
    pub fn residual(&self, p: Point) -> f64 {
        let a = &self.coeffs;
        (a[0] * p.x + a[1] * p.y + a[3]) * p.x + (a[2] * p.y + a[4]) * p.y + a[5]
    }

    /// The largest residual accepted for a point on this conic.
    ///
    /// This scales with the quadratic coefficients, so it is independent of
    /// how the equation was normalized.
    #[inline]
    pub fn residual_tolerance(&self) -> f64 {
        let a = &self.coeffs;
        (a[0] * a[0] + 2.0 * a[1] * a[1] + a[2] * a[2]) * ELLIPSE_RESIDUAL_EPSILON
    }

    /// The conic restricted to the horizontal line at `y`, as a polynomial in `x`.
    pub fn x_polynomial(&self, y: f64) -> Polynomial {
        let a = &self.coeffs;
        Polynomial::new(&[a[0], a[3] + y * a[1], a[5] + y * (a[4] + y * a[2])])
    }
}

/// The Bézout resultant of two conics, a polynomial of degree at most 4 in `y`.
///
/// Every intersection of the conics has a `y` coordinate among its roots.
/// Identical conics give the zero polynomial.
///
/// # Examples
///
/// ```
/// use bezout::resultant::{bezout, Conic};
///
/// // Unit circles centered at (0, 0) and (1, 0).
/// let a = Conic::new([1.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
/// let b = Conic::new([1.0, 0.0, 1.0, -2.0, 0.0, 0.0]);
/// let ys = bezout(&a, &b).roots().unwrap();
/// assert_eq!(ys.len(), 2);
/// assert!(ys.iter().all(|y| (y.abs() - 0.75_f64.sqrt()).abs() < 1e-12));
/// ```
pub fn bezout(e1: &Conic, e2: &Conic) -> Polynomial {
    let (e1, e2) = (&e1.coeffs, &e2.coeffs);
    let m = |i: usize, j: usize| e1[i] * e2[j] - e2[i] * e1[j];
    let ab = m(0, 1);
    let ac = m(0, 2);
    let ad = m(0, 3);
    let ae = m(0, 4);
    let af = m(0, 5);
    let bc = m(1, 2);
    let be = m(1, 4);
    let bf = m(1, 5);
    let cd = m(2, 3);
    let de = m(3, 4);
    let df = m(3, 5);
    let bf_plus_de = bf + de;
    let be_minus_cd = be - cd;
    Polynomial::new(&[
        ab * bc - ac * ac,
        ab * be_minus_cd + ad * bc - 2.0 * ac * ae,
        ab * bf_plus_de + ad * be_minus_cd - ae * ae - 2.0 * ac * af,
        ab * df + ad * bf_plus_de - 2.0 * ae * af,
        ad * df - af * af,
    ])
}

/// The resultant of two cubic curves, a polynomial of degree at most 9.
///
/// Both curves are given by their power-basis coefficients (constant term
/// first). The resultant is a polynomial in the parameter of the second
/// curve; its roots in `[0, 1]` are where the second curve meets the first.
pub fn cubic_resultant(first: &[Point; 4], second: &[Point; 4]) -> Polynomial {
    let [c10, c11, c12, c13] = *first;
    let [c20, c21, c22, c23] = *second;
    let second_rest = [c21, c22, c23];

    let a = c13.x * c12.y - c12.x * c13.y;
    let b = c13.x * c11.y - c11.x * c13.y;
    let d = b;

    // Each row is a polynomial in s, constant term first.
    let mut c = [c13.x * c10.y - c10.x * c13.y + c20.x * c13.y - c13.x * c20.y, 0.0, 0.0, 0.0];
    let mut e = [
        c13.x * c10.y + c12.x * c11.y - c11.x * c12.y - c10.x * c13.y + c20.x * c13.y
            - c13.x * c20.y,
        0.0,
        0.0,
        0.0,
    ];
    let mut f = [c12.x * c10.y - c10.x * c12.y + c20.x * c12.y - c12.x * c20.y, 0.0, 0.0, 0.0];
    let mut i = [c11.x * c10.y - c10.x * c11.y + c20.x * c11.y - c11.x * c20.y, 0.0, 0.0, 0.0];
    for (k, p) in second_rest.iter().enumerate() {
        c[k + 1] = p.x * c13.y - c13.x * p.y;
        e[k + 1] = c[k + 1];
        f[k + 1] = p.x * c12.y - c12.x * p.y;
        i[k + 1] = p.x * c11.y - c11.x * p.y;
    }
    let g = c;
    let h = f;

    Polynomial::new(&[
        -c[3] * e[3] * g[3],
        -c[3] * e[3] * g[2] - c[3] * e[2] * g[3] - c[2] * e[3] * g[3],
        -c[3] * e[3] * g[1]
            - c[3] * e[2] * g[2]
            - c[2] * e[3] * g[2]
            - c[3] * e[1] * g[3]
            - c[2] * e[2] * g[3]
            - c[1] * e[3] * g[3],
        -c[3] * e[3] * g[0]
            - c[3] * e[2] * g[1]
            - c[2] * e[3] * g[1]
            - c[3] * e[1] * g[2]
            - c[2] * e[2] * g[2]
            - c[1] * e[3] * g[2]
            - c[3] * e[0] * g[3]
            - c[2] * e[1] * g[3]
            - c[1] * e[2] * g[3]
            - c[0] * e[3] * g[3]
            + b * f[3] * g[3]
            + c[3] * d * h[3]
            - a * f[3] * h[3]
            + a * e[3] * i[3],
        -c[3] * e[2] * g[0]
            - c[2] * e[3] * g[0]
            - c[3] * e[1] * g[1]
            - c[2] * e[2] * g[1]
            - c[1] * e[3] * g[1]
            - c[3] * e[0] * g[2]
            - c[2] * e[1] * g[2]
            - c[1] * e[2] * g[2]
            - c[0] * e[3] * g[2]
            + b * f[3] * g[2]
            - c[2] * e[0] * g[3]
            - c[1] * e[1] * g[3]
            - c[0] * e[2] * g[3]
            + b * f[2] * g[3]
            + c[3] * d * h[2]
            - a * f[3] * h[2]
            + c[2] * d * h[3]
            - a * f[2] * h[3]
            + a * e[3] * i[2]
            + a * e[2] * i[3],
        -c[3] * e[1] * g[0]
            - c[2] * e[2] * g[0]
            - c[1] * e[3] * g[0]
            - c[3] * e[0] * g[1]
            - c[2] * e[1] * g[1]
            - c[1] * e[2] * g[1]
            - c[0] * e[3] * g[1]
            + b * f[3] * g[1]
            - c[2] * e[0] * g[2]
            - c[1] * e[1] * g[2]
            - c[0] * e[2] * g[2]
            + b * f[2] * g[2]
            - c[1] * e[0] * g[3]
            - c[0] * e[1] * g[3]
            + b * f[1] * g[3]
            + c[3] * d * h[1]
            - a * f[3] * h[1]
            + c[2] * d * h[2]
            - a * f[2] * h[2]
            + c[1] * d * h[3]
            - a * f[1] * h[3]
            + a * e[3] * i[1]
            + a * e[2] * i[2]
            + a * e[1] * i[3],
        -c[3] * e[0] * g[0]
            - c[2] * e[1] * g[0]
            - c[1] * e[2] * g[0]
            - c[0] * e[3] * g[0]
            + b * f[3] * g[0]
            - c[2] * e[0] * g[1]
            - c[1] * e[1] * g[1]
            - c[0] * e[2] * g[1]
            + b * f[2] * g[1]
            - c[1] * e[0] * g[2]
            - c[0] * e[1] * g[2]
            + b * f[1] * g[2]
            - c[0] * e[0] * g[3]
            + b * f[0] * g[3]
            + c[3] * d * h[0]
            - a * f[3] * h[0]
            + c[2] * d * h[1]
            - a * f[2] * h[1]
            + c[1] * d * h[2]
            - a * f[1] * h[2]
            + c[0] * d * h[3]
            - a * f[0] * h[3]
            + a * e[3] * i[0]
            + a * e[2] * i[1]
            + a * e[1] * i[2]
            - b * d * i[3]
            + a * e[0] * i[3],
        -c[2] * e[0] * g[0]
            - c[1] * e[1] * g[0]
            - c[0] * e[2] * g[0]
            + b * f[2] * g[0]
            - c[1] * e[0] * g[1]
            - c[0] * e[1] * g[1]
            + b * f[1] * g[1]
            - c[0] * e[0] * g[2]
            + b * f[0] * g[2]
            + c[2] * d * h[0]
            - a * f[2] * h[0]
            + c[1] * d * h[1]
            - a * f[1] * h[1]
            + c[0] * d * h[2]
            - a * f[0] * h[2]
            + a * e[2] * i[0]
            + a * e[1] * i[1]
            - b * d * i[2]
            + a * e[0] * i[2],
        -c[1] * e[0] * g[0] - c[0] * e[1] * g[0] + b * f[1] * g[0] - c[0] * e[0] * g[1]
            + b * f[0] * g[1]
            + c[1] * d * h[0]
            - a * f[1] * h[0]
            + c[0] * d * h[1]
            - a * f[0] * h[1]
            + a * e[1] * i[0]
            - b * d * i[1]
            + a * e[0] * i[1],
        -c[0] * e[0] * g[0] + b * f[0] * g[0] + c[0] * d * h[0] - a * f[0] * h[0] - b * d * i[0]
            + a * e[0] * i[0],
    ])
}

/// The resultant of two quadratic curves, a polynomial of degree at most 4.
///
/// As with [`cubic_resultant`], the curves are given in the power basis and
/// the result is a polynomial in the parameter of the second curve.
pub fn quad_resultant(first: &[Point; 3], second: &[Point; 3]) -> Polynomial {
    let [c10, c11, c12] = *first;
    let [c20, c21, c22] = *second;

    let a = c12.x * c11.y - c11.x * c12.y;
    let b = c22.x * c11.y - c11.x * c22.y;
    let c = c21.x * c11.y - c11.x * c21.y;
    let d = c11.x * (c10.y - c20.y) + c11.y * (-c10.x + c20.x);
    let e = c22.x * c12.y - c12.x * c22.y;
    let f = c21.x * c12.y - c12.x * c21.y;
    let g = c12.x * (c10.y - c20.y) + c12.y * (-c10.x + c20.x);

    Polynomial::new(&[
        -e * e,
        -2.0 * e * f,
        a * b - f * f - 2.0 * e * g,
        a * c - 2.0 * f * g,
        a * d - g * g,
    ])
}

/// Matches the roots of `x(t) = px` against the roots of `y(t) = py`.
///
/// Returns the first root of `x_roots` in `[0, 1]` that agrees with some
/// root of `y_roots` to within [`ROOT_CORRELATION_TOLERANCE`]; that is the
/// parameter at which the curve passes through `(px, py)`.
///
/// [`ROOT_CORRELATION_TOLERANCE`]: crate::common::ROOT_CORRELATION_TOLERANCE
pub fn correlate_roots(x_roots: &[f64], y_roots: &[f64]) -> Option<f64> {
    x_roots
        .iter()
        .copied()
        .filter(|x| (0.0..=1.0).contains(x))
        .find(|x| {
            y_roots
                .iter()
                .any(|y| (x - y).abs() < ROOT_CORRELATION_TOLERANCE)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(cx: f64, cy: f64, r: f64) -> Conic {
        Conic::new([1.0, 0.0, 1.0, -2.0 * cx, -2.0 * cy, cx * cx + cy * cy - r * r])
    }

    #[test]
    fn conic_residual() {
        let c = circle(1.0, 2.0, 3.0);
        assert_eq!(c.residual(Point::new(4.0, 2.0)), 0.0);
        assert_eq!(c.residual(Point::new(1.0, -1.0)), 0.0);
        assert!(c.residual(Point::new(1.0, 2.0)) < 0.0);
        assert!(c.residual(Point::new(10.0, 2.0)) > 0.0);
        assert_eq!(c.residual_tolerance(), 2e-3);
    }

    #[test]
    fn conic_x_polynomial() {
        // At y = 2 the circle crosses x = -2 and x = 4.
        let c = circle(1.0, 2.0, 3.0);
        let mut xs = c.x_polynomial(2.0).roots().unwrap();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs.as_slice(), &[-2.0, 4.0]);
    }

    #[test]
    fn bezout_of_circles() {
        let p = bezout(&circle(0.0, 0.0, 1.0), &circle(1.0, 0.0, 1.0)).simplified();
        assert_eq!(p.coeffs(), &[3.0, 0.0, -4.0]);
    }

    #[test]
    fn bezout_of_identical_conics_vanishes() {
        let c = circle(3.0, -1.0, 2.0);
        assert_eq!(bezout(&c, &c).simplified().degree(), None);
    }

    #[test]
    fn quad_resultant_roots_are_intersections() {
        // y = 2x - x² against y = 2 - 2x + x²/2, both with x = 2t.
        let first = [Point::new(0.0, 0.0), Point::new(2.0, 4.0), Point::new(0.0, -4.0)];
        let second = [Point::new(0.0, 2.0), Point::new(2.0, -4.0), Point::new(0.0, 2.0)];
        let r = quad_resultant(&first, &second).simplified();
        assert_eq!(r.coeffs(), &[-32.0, 128.0, -96.0]);
        let mut roots = r.roots().unwrap();
        roots.sort_by(f64::total_cmp);
        assert!((roots[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((roots[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cubic_resultant_degree() {
        let first = [
            Point::new(1.0, 1.0),
            Point::new(12.0, 0.0),
            Point::new(-12.0, 3.0),
            Point::new(3.0, -3.0),
        ];
        let second = [
            Point::new(2.0, 2.0),
            Point::new(-3.0, 3.0),
            Point::new(9.0, -3.0),
            Point::new(-4.0, -1.0),
        ];
        let r = cubic_resultant(&first, &second).simplified();
        assert_eq!(r.degree(), Some(9));
    }

    #[test]
    fn correlation() {
        assert_eq!(correlate_roots(&[0.25, 0.5], &[0.5 + 5e-5]), Some(0.5));
        assert_eq!(correlate_roots(&[0.5], &[0.5 + 2e-4]), None);
        // Out of range x roots never match.
        assert_eq!(correlate_roots(&[1.5, 0.25], &[1.5, 0.25]), Some(0.25));
        assert_eq!(correlate_roots(&[], &[0.3]), None);
    }
}
