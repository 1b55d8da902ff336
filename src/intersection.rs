// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection results.

use smallvec::SmallVec;

use crate::Point;

/// A point where two shapes meet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    /// The intersection point.
    pub point: Point,
    /// The parameter of the intersection on the curve the query was made on.
    ///
    /// This is `None` when the query was made on an ellipse, which is
    /// described implicitly and has no parameter.
    pub t: Option<f64>,
}

/// The intersections found by a query.
///
/// Four results are stored inline; only the cubic/cubic query can exceed that.
pub type Intersections = SmallVec<[Intersection; 4]>;

impl Intersection {
    /// An intersection at `point`, with parameter `t` on the queried curve.
    #[inline]
    pub fn new(point: Point, t: f64) -> Intersection {
        Intersection { point, t: Some(t) }
    }

    /// An intersection without a curve parameter.
    #[inline]
    pub fn implicit(point: Point) -> Intersection {
        Intersection { point, t: None }
    }
}
