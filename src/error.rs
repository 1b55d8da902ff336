// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the geometry and root-finding routines.

/// An error raised when an operation is called outside of its domain.
///
/// Not finding an intersection is never an error: intersection queries
/// report that case as an empty result.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A NaN was passed where a real number is required.
    #[error("expected a real number, found {0}")]
    InvalidInput(f64),
    /// An interpolation or split parameter was outside of `[0, 1]`.
    #[error("parameter {0} is outside of [0, 1]")]
    ParameterOutOfRange(f64),
    /// A root bracket had its lower bound above its upper bound.
    #[error("bracket [{min}, {max}] has min greater than max")]
    InvertedBracket {
        /// The lower bound that was given.
        min: f64,
        /// The upper bound that was given.
        max: f64,
    },
    /// The function values at the ends of a root bracket have the same sign.
    #[error("function values at {min} and {max} must have opposite signs")]
    NoSignChange {
        /// The lower bound of the bracket.
        min: f64,
        /// The upper bound of the bracket.
        max: f64,
    },
    /// The derivative vanished at two consecutive Newton iterates.
    #[error("derivative is zero at {0}")]
    ZeroDerivative(f64),
    /// The polynomial degree is beyond what the solver handles.
    #[error("polynomial of degree {degree} is not supported (maximum is {max})")]
    UnsupportedDegree {
        /// The degree of the polynomial.
        degree: usize,
        /// The largest supported degree.
        max: usize,
    },
    /// A segment of a Bézier chain does not start where the previous one ends.
    #[error("segment {index} of the chain is not connected to segment {previous}")]
    DisconnectedChain {
        /// Index of the segment that does not connect.
        index: usize,
        /// Index of the segment before it.
        previous: usize,
    },
}
