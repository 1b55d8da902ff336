// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for curves parametrized by a scalar.

use crate::{BoundingBox, Error, Point, Polynomial, Roots};

/// A curve parametrized by a scalar.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// Split the curve at parameter `t` into the parts before and after it.
    ///
    /// Fails with [`Error::ParameterOutOfRange`] if `t` is outside of `[0, 1]`
    /// and with [`Error::InvalidInput`] if it is NaN.
    fn split(&self, t: f64) -> Result<(Self, Self), Error>;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A curve whose coordinates are polynomials in its parameter.
pub trait ParamCurvePoly: ParamCurve {
    /// The coordinate polynomials `x(t)` and `y(t)` in the power basis.
    fn polynomials(&self) -> (Polynomial, Polynomial);
}

/// A polynomial curve that reports its extrema.
pub trait ParamCurveExtrema: ParamCurvePoly {
    /// Compute the extrema of the curve.
    ///
    /// Only extrema within the interior of the curve count; the result
    /// holds the parameters in `[0, 1]` where `x'(t)` or `y'(t)` vanishes,
    /// sorted in increasing order.
    fn extrema(&self) -> Roots {
        let (x, y) = self.polynomials();
        // The derivatives have degree at most 2.
        let mut result = x.deriv().isolate(0.0, 1.0);
        result.extend(y.deriv().isolate(0.0, 1.0));
        result.sort_by(f64::total_cmp);
        result
    }

    /// The tight bounding box of the curve.
    ///
    /// This is the box around the endpoints and every extremum, so it can be
    /// much smaller than the box of the control polygon.
    fn extrema_bounding_box(&self) -> BoundingBox {
        let extrema = self.extrema();
        let points = [self.start(), self.end()]
            .into_iter()
            .chain(extrema.iter().map(|&t| self.eval(t)));
        BoundingBox::enclosing(points).unwrap_or_default()
    }
}
