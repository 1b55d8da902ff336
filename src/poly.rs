// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Univariate real polynomials and their roots.

use core::fmt;
use core::ops::{Add, DivAssign, Mul, Sub};

use arrayvec::ArrayVec;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::common::{
    sign, BISECTION_ACCURACY, BISECTION_TOLERANCE, MAX_ISOLATION_DEGREE, NEWTON_ACCURACY,
    NEWTON_MAX_ITERATIONS, SIMPLIFY_TOLERANCE, ZERO_TOLERANCE,
};
use crate::Error;

/// Real roots returned by the solvers.
///
/// Four values fit inline, which covers every closed-form case; higher
/// degree isolation spills to the heap.
pub type Roots = SmallVec<[f64; 4]>;

/// A polynomial of dynamic degree.
///
/// Coefficients are stored in increasing order of degree, so `coeffs()[0]`
/// is the constant term. The ten inline slots cover every polynomial built
/// by the intersection routines (the cubic/cubic resultant has degree 9).
///
/// Polynomials only change through `&mut self` methods ([`simplify`] and
/// `/=`); solvers that need a trimmed polynomial work on a clone.
///
/// [`simplify`]: Polynomial::simplify
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    coeffs: SmallVec<[f64; 10]>,
}

/// An interval guaranteed to contain every real root of a polynomial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootBounds {
    /// Lower end of the interval.
    pub min_x: f64,
    /// Upper end of the interval.
    pub max_x: f64,
}

/// A root bracket and the function values at its ends.
#[derive(Clone, Copy)]
struct Bracket {
    min: f64,
    max: f64,
    y_min: f64,
    y_max: f64,
}

impl Polynomial {
    /// Constructs a polynomial from coefficients in decreasing order of degree.
    ///
    /// `Polynomial::new(&[1.0, -7.0, 10.0])` is `t² - 7t + 10`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::Polynomial;
    ///
    /// let p = Polynomial::new(&[3.0, 2.0, 1.0]);
    /// assert_eq!(p.coeffs(), &[1.0, 2.0, 3.0]);
    /// assert_eq!(p.degree(), Some(2));
    /// ```
    pub fn new(coeffs: &[f64]) -> Polynomial {
        Polynomial {
            coeffs: coeffs.iter().rev().copied().collect(),
        }
    }

    /// Constructs a polynomial from coefficients in increasing order of degree.
    ///
    /// The first coefficient provided will be the constant term, the second will
    /// be the linear term, and so on.
    pub fn from_coeffs(coeffs: impl IntoIterator<Item = f64>) -> Polynomial {
        Polynomial {
            coeffs: coeffs.into_iter().collect(),
        }
    }

    /// The zero polynomial, which has no coefficients.
    pub fn zero() -> Polynomial {
        Polynomial::default()
    }

    /// The coefficients of this polynomial.
    ///
    /// In the returned slice, the coefficient of `t^i` is at index `i`.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The degree of this polynomial, or `None` for the zero polynomial.
    ///
    /// Like the coefficient storage, this only looks at the number of
    /// coefficients: call [`simplify`](Polynomial::simplify) first to drop
    /// vanishing leading terms.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Evaluates this polynomial at `x` using Horner's scheme.
    ///
    /// Returns [`Error::InvalidInput`] if `x` is NaN.
    pub fn eval(&self, x: f64) -> Result<f64, Error> {
        if x.is_nan() {
            return Err(Error::InvalidInput(x));
        }
        Ok(self.horner(x))
    }

    fn horner(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Returns the polynomial that's the derivative of this polynomial.
    pub fn deriv(&self) -> Polynomial {
        // The zero polynomial and constants both differentiate to zero,
        // which `skip(1)` handles without a special case.
        Polynomial {
            coeffs: self
                .coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * i as f64)
                .collect(),
        }
    }

    /// Removes leading coefficients whose magnitude is at most `tolerance`.
    pub fn simplify(&mut self, tolerance: f64) {
        while let Some(&c) = self.coeffs.last() {
            if c.abs() <= tolerance {
                self.coeffs.pop();
            } else {
                break;
            }
        }
    }

    /// Returns this polynomial with leading terms below
    /// [`SIMPLIFY_TOLERANCE`] removed.
    #[must_use]
    pub fn simplified(mut self) -> Polynomial {
        self.simplify(SIMPLIFY_TOLERANCE);
        self
    }

    /// Finds the real roots of a polynomial of degree at most 4.
    ///
    /// Leading coefficients below [`SIMPLIFY_TOLERANCE`] are ignored, so a
    /// nominal quartic with a vanishing leading term is solved as a cubic.
    /// Constants and the zero polynomial have no roots. Degrees above 4 are
    /// rejected with [`Error::UnsupportedDegree`]; use
    /// [`roots_in_interval`](Polynomial::roots_in_interval) for those.
    ///
    /// Roots are reported in no particular order, and repeated roots may be
    /// reported once or twice depending on the closed form that finds them.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::Polynomial;
    ///
    /// let roots = Polynomial::new(&[1.0, -7.0, 10.0]).roots().unwrap();
    /// assert_eq!(roots.as_slice(), &[5.0, 2.0]);
    /// ```
    pub fn roots(&self) -> Result<Roots, Error> {
        let poly = self.clone().simplified();
        let mut result = Roots::new();
        match poly.degree() {
            None | Some(0) => {}
            Some(1) => result.extend(poly.linear_root()),
            Some(2) => result.extend(poly.quadratic_roots()),
            Some(3) => result.extend(poly.cubic_roots()),
            Some(4) => result = poly.quartic_roots()?,
            Some(degree) => return Err(Error::UnsupportedDegree { degree, max: 4 }),
        }
        Ok(result)
    }

    /// The root of a linear polynomial.
    ///
    /// Returns `None` if this is not a degree 1 polynomial or its slope is zero.
    pub fn linear_root(&self) -> Option<f64> {
        if self.degree() != Some(1) || self.coeffs[1] == 0.0 {
            return None;
        }
        Some(-self.coeffs[0] / self.coeffs[1])
    }

    /// The real roots of a quadratic polynomial.
    ///
    /// With a positive discriminant, the roots are returned as
    /// `(-b + √d) / 2a` followed by `(-b - √d) / 2a`. A zero discriminant
    /// gives the double root once. Returns nothing if this is not a degree 2
    /// polynomial.
    pub fn quadratic_roots(&self) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if self.degree() != Some(2) {
            return result;
        }
        let a = self.coeffs[2];
        let b = self.coeffs[1] / a;
        let c = self.coeffs[0] / a;
        let d = b * b - 4.0 * c;
        if d > 0.0 {
            let e = d.sqrt();
            result.push(0.5 * (-b + e));
            result.push(0.5 * (-b - e));
        } else if d == 0.0 {
            result.push(0.5 * -b);
        }
        result
    }

    /// The real roots of a cubic polynomial, using Cardano's method.
    ///
    /// The discriminant is treated as zero when it is within
    /// [`zero_error_estimate`](Polynomial::zero_error_estimate) of zero. In
    /// that repeated-root case two values are returned: the simple root and
    /// the repeated one (reported once). For `t³` that is `[-0.0, 0.0]`.
    /// Returns nothing if this is not a degree 3 polynomial.
    pub fn cubic_roots(&self) -> ArrayVec<f64, 3> {
        let mut result = ArrayVec::new();
        if self.degree() != Some(3) {
            return result;
        }
        const ONETHIRD: f64 = 1. / 3.;
        let c3 = self.coeffs[3];
        let c2 = self.coeffs[2] / c3;
        let c1 = self.coeffs[1] / c3;
        let c0 = self.coeffs[0] / c3;

        // Depressed cubic u³ + a·u + b with t = u - offset.
        let a = (3.0 * c1 - c2 * c2) / 3.0;
        let b = (2.0 * c2 * c2 * c2 - 9.0 * c1 * c2 + 27.0 * c0) / 27.0;
        let offset = c2 / 3.0;
        let mut discriminant = b * b / 4.0 + a * a * a / 27.0;
        let half_b = b / 2.0;

        if discriminant.abs() <= self.zero_error_estimate(None) {
            discriminant = 0.0;
        }

        if discriminant > 0.0 {
            let e = discriminant.sqrt();
            let mut tmp = -half_b + e;
            let mut root = if tmp >= 0.0 {
                tmp.powf(ONETHIRD)
            } else {
                -(-tmp).powf(ONETHIRD)
            };
            tmp = -half_b - e;
            if tmp >= 0.0 {
                root += tmp.powf(ONETHIRD);
            } else {
                root -= (-tmp).powf(ONETHIRD);
            }
            result.push(root - offset);
        } else if discriminant < 0.0 {
            let distance = (-a / 3.0).sqrt();
            let angle = (-discriminant).sqrt().atan2(-half_b) / 3.0;
            let cos = angle.cos();
            let sin = angle.sin();
            let sqrt3 = 3.0_f64.sqrt();
            result.push(2.0 * distance * cos - offset);
            result.push(-distance * (cos + sqrt3 * sin) - offset);
            result.push(-distance * (cos - sqrt3 * sin) - offset);
        } else {
            let tmp = if half_b >= 0.0 {
                -half_b.powf(ONETHIRD)
            } else {
                (-half_b).powf(ONETHIRD)
            };
            result.push(2.0 * tmp - offset);
            result.push(-tmp - offset);
        }
        result
    }

    /// The real roots of a quartic polynomial.
    ///
    /// No closed form is used. The roots of the derivative split the real
    /// line into monotonic pieces; extrema whose value is within the
    /// [zero error estimate](Polynomial::zero_error_estimate) are double roots,
    /// and every piece whose ends change sign is refined with
    /// [`newton_secant_bisection`](Polynomial::newton_secant_bisection) inside
    /// the [root bounds](Polynomial::bounds).
    ///
    /// Returns nothing if this is not a degree 4 polynomial.
    pub fn quartic_roots(&self) -> Result<Roots, Error> {
        let mut results = Roots::new();
        if self.degree() != Some(4) {
            return Ok(results);
        }
        let n = 4;

        let mut poly = self.clone();
        poly /= poly.coeffs[n];
        if poly.coeffs[0].abs() < 10.0 * ZERO_TOLERANCE * poly.coeffs[3].abs() {
            poly.coeffs[0] = 0.0;
        }

        let poly_d = poly.deriv();
        let mut derrt = poly_d.roots()?;
        derrt.sort_by(f64::total_cmp);

        let rb = self.bounds();
        let max_abs_x = rb.min_x.abs().max(rb.max_x.abs());
        let zero_epsilon = self.zero_error_estimate(Some(max_abs_x));
        let dery: SmallVec<[f64; 4]> = derrt
            .iter()
            .map(|&x| {
                let y = poly.horner(x);
                if y.abs() < zero_epsilon {
                    0.0
                } else {
                    y
                }
            })
            .collect();

        let dx = (0.1 * (rb.max_x - rb.min_x) / n as f64).max(ZERO_TOLERANCE);
        // Starting guess and bracket for each sign-changing piece.
        let mut guesses: SmallVec<[(f64, f64, f64); 4]> = SmallVec::new();

        if let Some(nr) = derrt.len().checked_sub(1) {
            let mut i = 0;
            if dery[0] != 0.0 {
                if sign(dery[0]) != sign(poly.horner(derrt[0] - dx) - dery[0]) {
                    guesses.push((derrt[0] - dx, rb.min_x, derrt[0]));
                }
            } else {
                results.push(derrt[0]);
                results.push(derrt[0]);
                i += 1;
            }

            while i < nr {
                if dery[i + 1] == 0.0 {
                    results.push(derrt[i + 1]);
                    results.push(derrt[i + 1]);
                    i += 1;
                } else if sign(dery[i]) != sign(dery[i + 1]) {
                    guesses.push((0.5 * (derrt[i] + derrt[i + 1]), derrt[i], derrt[i + 1]));
                }
                i += 1;
            }

            if dery[nr] != 0.0 && sign(dery[nr]) != sign(poly.horner(derrt[nr] + dx) - dery[nr]) {
                guesses.push((derrt[nr] + dx, derrt[nr], rb.max_x));
            }
        }

        for (guess, min, max) in guesses {
            let root = Polynomial::newton_secant_bisection(
                guess,
                |x| poly.horner(x),
                |x| poly_d.horner(x),
                NEWTON_MAX_ITERATIONS,
                Some((min, max)),
            )?;
            log::trace!("quartic root {root} refined from {guess} in [{min}, {max}]");
            results.push(root);
        }

        Ok(results)
    }

    /// Finds the roots within `[min, max]`.
    ///
    /// The roots of the derivative are isolated first (recursively), which
    /// splits the interval into pieces on which this polynomial is monotonic;
    /// each piece is then searched with [`bisect`](Polynomial::bisect). This is
    /// the workhorse for bounding boxes and for the resultants of
    /// intersection queries.
    ///
    /// Constants and the zero polynomial have no roots. Polynomials of degree
    /// above [`MAX_ISOLATION_DEGREE`] are rejected with
    /// [`Error::UnsupportedDegree`].
    ///
    /// [`MAX_ISOLATION_DEGREE`]: crate::common::MAX_ISOLATION_DEGREE
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::Polynomial;
    ///
    /// // (t - 0.25)(t - 0.75)
    /// let p = Polynomial::new(&[1.0, -1.0, 0.1875]);
    /// let roots = p.roots_in_interval(0.0, 1.0).unwrap();
    /// assert_eq!(roots.len(), 2);
    /// assert!((roots[0] - 0.25).abs() < 1e-4);
    /// assert!((roots[1] - 0.75).abs() < 1e-4);
    /// ```
    pub fn roots_in_interval(&self, min: f64, max: f64) -> Result<Roots, Error> {
        if let Some(degree) = self.degree() {
            if degree > MAX_ISOLATION_DEGREE {
                return Err(Error::UnsupportedDegree {
                    degree,
                    max: MAX_ISOLATION_DEGREE,
                });
            }
        }
        Ok(self.isolate(min, max))
    }

    /// Root isolation without the degree check; recursion depth is the degree.
    pub(crate) fn isolate(&self, min: f64, max: f64) -> Roots {
        let mut roots = Roots::new();
        match self.degree() {
            None | Some(0) => {}
            Some(1) => roots.extend(self.bisect(min, max)),
            Some(_) => {
                let droots = self.deriv().isolate(min, max);
                if let (Some(&first), Some(&last)) = (droots.first(), droots.last()) {
                    roots.extend(self.bisect(min, first));
                    for pair in droots.windows(2) {
                        roots.extend(self.bisect(pair[0], pair[1]));
                    }
                    roots.extend(self.bisect(last, max));
                } else {
                    // Monotonic on [min, max], so at most one root.
                    roots.extend(self.bisect(min, max));
                }
            }
        }
        roots
    }

    /// [`bisection`](Polynomial::bisection) with the default tolerance
    /// ([`BISECTION_TOLERANCE`]) and accuracy ([`BISECTION_ACCURACY`]).
    ///
    /// [`BISECTION_TOLERANCE`]: crate::common::BISECTION_TOLERANCE
    /// [`BISECTION_ACCURACY`]: crate::common::BISECTION_ACCURACY
    pub fn bisect(&self, min: f64, max: f64) -> Option<f64> {
        self.bisection(min, max, BISECTION_TOLERANCE, BISECTION_ACCURACY)
    }

    /// Bracketed bisection on `[min, max]`.
    ///
    /// An endpoint whose value is within `tolerance` of zero is returned
    /// directly. Otherwise the values at the ends must differ in sign, or
    /// `None` is returned. The number of halvings is bounded by what it takes
    /// to shrink the bracket to `accuracy` decimal digits; the search also
    /// stops as soon as a midpoint value is within `tolerance` of zero.
    pub fn bisection(&self, mut min: f64, mut max: f64, tolerance: f64, accuracy: u32) -> Option<f64> {
        let mut min_value = self.horner(min);
        let max_value = self.horner(max);
        if min_value.abs() <= tolerance {
            return Some(min);
        }
        if max_value.abs() <= tolerance {
            return Some(max);
        }
        if min_value * max_value > 0.0 {
            return None;
        }

        let width_digits = (max - min).ln();
        let accuracy_digits = core::f64::consts::LN_10 * f64::from(accuracy);
        let max_iterations = ((width_digits + accuracy_digits) / core::f64::consts::LN_2).ceil();
        // A NaN or negative count (empty or inverted bracket) means no iterations.
        let max_iterations = max_iterations.max(0.0) as usize;

        let mut result = None;
        for _ in 0..max_iterations {
            let mid = 0.5 * (min + max);
            result = Some(mid);
            let value = self.horner(mid);
            if value.abs() <= tolerance {
                break;
            }
            if value * min_value < 0.0 {
                max = mid;
            } else {
                min = mid;
                min_value = value;
            }
        }
        result
    }

    /// Newton's method safeguarded by secant and bisection steps.
    ///
    /// Starting from `x0`, this takes Newton steps on `f` with derivative
    /// `df`. A zero derivative reuses the previous nonzero one. When a
    /// `bracket` is given, its ends must have function values of opposite
    /// signs; the bracket is narrowed at every iterate, and a Newton step that
    /// would leave it is replaced with a secant step, or with a bisection
    /// aimed towards the smaller end value when the end values are very
    /// lopsided.
    ///
    /// Iteration stops when the correction falls below `10^-14` relative to
    /// `x`, when it starts cycling between two values, or after
    /// `max_iterations`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvertedBracket`] if the bracket has `min > max`.
    /// - [`Error::NoSignChange`] if `f` has the same sign at both ends of the
    ///   bracket.
    /// - [`Error::ZeroDerivative`] if the derivative is zero at the first
    ///   iterate or at two consecutive iterates.
    pub fn newton_secant_bisection(
        x0: f64,
        f: impl Fn(f64) -> f64,
        df: impl Fn(f64) -> f64,
        max_iterations: usize,
        bracket: Option<(f64, f64)>,
    ) -> Result<f64, Error> {
        const RATIO_LIMIT: f64 = 50.0;
        // In [0, 0.5).
        const AIMED_BISECT_OFFSET: f64 = 0.25;

        let min_correction_factor = 10.0_f64.powi(-NEWTON_ACCURACY);
        let mut bracket = match bracket {
            Some((min, max)) => {
                if min > max {
                    return Err(Error::InvertedBracket { min, max });
                }
                let y_min = f(min);
                let y_max = f(max);
                if sign(y_min) == sign(y_max) {
                    return Err(Error::NoSignChange { min, max });
                }
                Some(Bracket {
                    min,
                    max,
                    y_min,
                    y_max,
                })
            }
            None => None,
        };

        let mut x = x0;
        let mut prev_dfx = 0.0;
        let mut prev_x_ef_correction = 0.0;
        let is_enough_correction = |x: f64, x_correction: f64, prev_x_ef_correction: f64| {
            x_correction.abs() <= min_correction_factor * x.abs()
                || prev_x_ef_correction == x - x_correction - x
        };

        for _ in 0..max_iterations {
            let mut dfx = df(x);
            if dfx == 0.0 {
                if prev_dfx == 0.0 {
                    return Err(Error::ZeroDerivative(x));
                }
                dfx = prev_dfx;
            }
            prev_dfx = dfx;

            let y = f(x);
            let mut x_correction = y / dfx;
            let mut x_new = x - x_correction;
            if is_enough_correction(x, x_correction, prev_x_ef_correction) {
                break;
            }

            if let Some(b) = bracket.as_mut() {
                if sign(y) == sign(b.y_max) {
                    b.max = x;
                    b.y_max = y;
                } else if sign(y) == sign(b.y_min) {
                    b.min = x;
                    b.y_min = y;
                } else {
                    // f(x) is exactly zero.
                    x = x_new;
                    break;
                }

                if x_new < b.min || x_new > b.max {
                    if sign(b.y_min) == sign(b.y_max) {
                        break;
                    }
                    let dy = b.y_max - b.y_min;
                    let dx = b.max - b.min;
                    x_correction = if dy == 0.0 {
                        x - (b.min + dx * 0.5)
                    } else if (dy / b.y_min.min(b.y_max)).abs() > RATIO_LIMIT {
                        let aim = if b.y_min.abs() < b.y_max.abs() {
                            -AIMED_BISECT_OFFSET
                        } else {
                            AIMED_BISECT_OFFSET
                        };
                        x - (b.min + dx * (0.5 + aim))
                    } else {
                        x - (b.min - (b.y_min / dy) * dx)
                    };
                    x_new = x - x_correction;
                    if is_enough_correction(x, x_correction, prev_x_ef_correction) {
                        break;
                    }
                }
            }

            prev_x_ef_correction = x - x_new;
            x = x_new;
        }

        Ok(x)
    }

    /// Fujiwara's upper bounds on the real roots.
    ///
    /// Positive roots are at most `max_x` and negative roots at least `min_x`.
    /// A side with no roots (by the coefficient signs) gets a zero bound.
    /// See <https://en.wikipedia.org/wiki/Properties_of_polynomial_roots>.
    pub fn bounds_upper_real_fujiwara(&self) -> RootBounds {
        let Some(n) = self.degree() else {
            return RootBounds {
                min_x: -0.0,
                max_x: 0.0,
            };
        };
        let an = self.coeffs[n];
        let a: SmallVec<[f64; 10]> = if an != 1.0 {
            self.coeffs.iter().map(|v| v / an).collect()
        } else {
            self.coeffs.clone()
        };

        let mut max_pos = 0.0_f64;
        let mut max_neg = 0.0_f64;
        for (i, &ai) in a.iter().enumerate().take(n) {
            let v = if i == 0 { ai / 2.0 } else { ai };
            let bi = v.abs().powf(1.0 / (n - i) as f64);
            if ai < 0.0 && max_pos < bi {
                max_pos = bi;
            }
            let bounds_negative = if n % 2 == i % 2 { ai < 0.0 } else { ai > 0.0 };
            if bounds_negative && max_neg < bi {
                max_neg = bi;
            }
        }

        RootBounds {
            min_x: -2.0 * max_neg,
            max_x: 2.0 * max_pos,
        }
    }

    /// Fujiwara's lower bounds on the magnitude of the real roots.
    ///
    /// These are the reciprocals of the upper bounds of the reversed
    /// polynomial.
    pub fn bounds_lower_real_fujiwara(&self) -> RootBounds {
        let reversed = Polynomial {
            coeffs: self.coeffs.iter().rev().copied().collect(),
        };
        let res = reversed.bounds_upper_real_fujiwara();
        RootBounds {
            min_x: 1.0 / res.min_x,
            max_x: 1.0 / res.max_x,
        }
    }

    /// An interval containing all real roots.
    ///
    /// Starts from the upper Fujiwara bounds; when one side has no roots it is
    /// tightened with the lower bound of the other side.
    pub fn bounds(&self) -> RootBounds {
        let urb = self.bounds_upper_real_fujiwara();
        let mut rb = urb;
        if urb.min_x == 0.0 && urb.max_x == 0.0 {
            return rb;
        }
        if urb.min_x == 0.0 {
            rb.min_x = self.bounds_lower_real_fujiwara().max_x;
        } else if urb.max_x == 0.0 {
            rb.max_x = self.bounds_lower_real_fujiwara().min_x;
        }
        if rb.min_x > rb.max_x {
            rb.min_x = 0.0;
            rb.max_x = 0.0;
        }
        rb
    }

    /// Estimates the largest value a floating point evaluation could produce
    /// when the exact value is zero.
    ///
    /// `max_abs_x` is the largest argument of interest; when `None` it is
    /// taken from [`bounds`](Polynomial::bounds). Nearly tangent intersections
    /// produce resultant values this small, and they must still count as roots.
    pub fn zero_error_estimate(&self, max_abs_x: Option<f64>) -> f64 {
        let Some(n) = self.degree() else {
            return 0.0;
        };
        let max_abs_x = max_abs_x.unwrap_or_else(|| {
            let rb = self.bounds();
            rb.min_x.abs().max(rb.max_x.abs())
        });
        if max_abs_x < 0.001 {
            return 2.0 * self.horner(ZERO_TOLERANCE).abs();
        }
        let an = self.coeffs[n];
        let largest_term = self
            .coeffs
            .iter()
            .enumerate()
            .fold(0.0_f64, |m, (i, v)| {
                let nm = (v / an) * max_abs_x.powi(i as i32);
                if nm > m {
                    nm
                } else {
                    m
                }
            });
        10.0 * ZERO_TOLERANCE * largest_term
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial {
            coeffs: (0..len)
                .map(|i| self.coeffs.get(i).unwrap_or(&0.0) + rhs.coeffs.get(i).unwrap_or(&0.0))
                .collect(),
        }
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial {
            coeffs: (0..len)
                .map(|i| self.coeffs.get(i).unwrap_or(&0.0) - rhs.coeffs.get(i).unwrap_or(&0.0))
                .collect(),
        }
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let len = (self.coeffs.len() + rhs.coeffs.len()).saturating_sub(1);
        let mut coeffs: SmallVec<[f64; 10]> = SmallVec::from_elem(0.0, len);
        for (i, c) in self.coeffs.iter().enumerate() {
            for (j, d) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += c * d;
            }
        }
        Polynomial { coeffs }
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(mut self, scalar: f64) -> Polynomial {
        for c in &mut self.coeffs {
            *c *= scalar;
        }
        self
    }
}

impl DivAssign<f64> for Polynomial {
    fn div_assign(&mut self, scalar: f64) {
        for c in &mut self.coeffs {
            *c /= scalar;
        }
    }
}

impl fmt::Display for Polynomial {
    /// Writes the polynomial in `t`, highest degree first, with coefficients
    /// rounded to three decimals, e.g. `t^2 - 7t + 10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            let value = (c * 1000.0).round() / 1000.0;
            if value == 0.0 {
                continue;
            }
            if first {
                if value < 0.0 {
                    f.write_str("-")?;
                }
            } else {
                f.write_str(if value < 0.0 { " - " } else { " + " })?;
            }
            first = false;
            let value = value.abs();
            if i == 0 || value != 1.0 {
                write!(f, "{value}")?;
            }
            if i > 0 {
                f.write_str("t")?;
            }
            if i > 1 {
                write!(f, "^{i}")?;
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
