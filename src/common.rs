// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations and numeric tolerances.
//!
//! All tolerances used by the root finders and intersection routines are
//! fixed constants; none of them can be changed at run time.

#![allow(missing_docs)]

#[cfg(not(feature = "std"))]
mod sealed {
    /// A [sealed trait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/)
    /// which stops [`super::FloatFuncs`] from being implemented outside bezout.
    pub trait FloatFuncsSealed {}
}

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {

        /// Since core doesn't depend upon libm, this provides libm implementations
        /// of float functions which are typically provided by the std library, when
        /// the `std` feature is not enabled.
        ///
        /// For documentation see the respective functions in the std library.
        #[cfg(not(feature = "std"))]
        pub trait FloatFuncs : Sized + sealed::FloatFuncsSealed {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl sealed::FloatFuncsSealed for f64 {}

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("bezout requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn ceil(self) -> Self => ceil;
    fn cos(self) -> Self => cos;
    fn hypot(self, other: Self) -> Self => hypot;
    fn ln(self) -> Self => log;
    fn powf(self, n: Self) -> Self => pow;
    fn powi(self, n: i32) -> Self => pow;
    fn round(self) -> Self => round;
    fn sin(self) -> Self => sin;
    fn sqrt(self) -> Self => sqrt;
}

/// Maximum allowed disagreement between an x-root and a y-root for them to be
/// accepted as the same intersection parameter.
pub const ROOT_CORRELATION_TOLERANCE: f64 = 1e-4;

/// Number of decimal digits the Newton refinement aims for; corrections
/// smaller than `10^-NEWTON_ACCURACY` relative to `x` stop the iteration.
pub const NEWTON_ACCURACY: i32 = 14;

/// Number of iterations given to the Newton refinement of a quartic root.
pub const NEWTON_MAX_ITERATIONS: usize = 32;

/// A function value at or below this magnitude ends a bisection.
pub const BISECTION_TOLERANCE: f64 = 1e-6;

/// Decimal digits of accuracy used to bound the bisection iteration count.
pub const BISECTION_ACCURACY: u32 = 15;

/// Relative tolerance under which a value is considered numerical noise.
pub const ZERO_TOLERANCE: f64 = 1e-15;

/// High-order coefficients at or below this magnitude are trimmed by
/// [`Polynomial::simplify`](crate::Polynomial::simplify) before solving.
pub const SIMPLIFY_TOLERANCE: f64 = 1e-12;

/// Scale of the conic residual accepted when validating ellipse/ellipse
/// candidates.
pub const ELLIPSE_RESIDUAL_EPSILON: f64 = 1e-3;

/// Largest degree accepted by
/// [`Polynomial::roots_in_interval`](crate::Polynomial::roots_in_interval).
///
/// This is the degree of the cubic/cubic resultant, the largest polynomial
/// the intersection routines build.
pub const MAX_ISOLATION_DEGREE: usize = 9;

/// The sign of a number.
///
/// Returns `1.0` or `-1.0` for nonzero numbers, the argument itself for
/// `0.0` and `-0.0` (so the sign of zero is preserved), and NaN for NaN.
///
/// # Examples
///
/// ```
/// use bezout::common::sign;
///
/// assert_eq!(sign(3.5), 1.0);
/// assert_eq!(sign(-0.1), -1.0);
/// assert!(sign(-0.0).is_sign_negative());
/// assert!(sign(f64::NAN).is_nan());
/// ```
#[inline]
pub fn sign(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        x
    } else if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::sign;

    #[test]
    fn sign_of_numbers() {
        assert_eq!(sign(1.0), 1.0);
        assert_eq!(sign(1e-300), 1.0);
        assert_eq!(sign(-1.0), -1.0);
        assert_eq!(sign(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn sign_of_zero_keeps_zero_sign() {
        assert_eq!(sign(0.0), 0.0);
        assert!(sign(0.0).is_sign_positive());
        assert_eq!(sign(-0.0), 0.0);
        assert!(sign(-0.0).is_sign_negative());
    }

    #[test]
    fn sign_of_nan() {
        assert!(sign(f64::NAN).is_nan());
    }
}
