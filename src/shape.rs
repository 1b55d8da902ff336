// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for shapes.

use crate::BoundingBox;

/// A shape with a known extent.
///
/// This is all a [`Canvas`](crate::Canvas) needs to know about a shape, and
/// it is the pre-filter of every intersection query.
pub trait Shape {
    /// The smallest axis-aligned box that encloses the shape.
    fn bounding_box(&self) -> BoundingBox;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn bounding_box(&self) -> BoundingBox {
        (**self).bounding_box()
    }
}
