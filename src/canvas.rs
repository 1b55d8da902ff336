// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawing surface.

use core::fmt;

use crate::{BoundingBox, Shape};

/// A drawing surface of a given size, with its origin at `(0, 0)`.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    /// The width.
    pub width: f64,
    /// The height.
    pub height: f64,
}

impl Canvas {
    /// Create a new canvas.
    #[inline(always)]
    pub const fn new(width: f64, height: f64) -> Canvas {
        Canvas { width, height }
    }

    /// Whether the shape's bounding box lies strictly inside the canvas.
    ///
    /// A shape touching any edge is not contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::{Canvas, Ellipse};
    ///
    /// let canvas = Canvas::new(100.0, 80.0);
    /// assert!(canvas.contains(&Ellipse::new((50.0, 40.0), 20.0, 10.0)));
    /// assert!(!canvas.contains(&Ellipse::new((50.0, 40.0), 50.0, 10.0)));
    /// ```
    pub fn contains(&self, shape: &impl Shape) -> bool {
        let bb = shape.bounding_box();
        bb.x > 0.0 && bb.y > 0.0 && bb.max_x() < self.width && bb.max_y() < self.height
    }
}

impl Shape for Canvas {
    #[inline]
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width, self.height)
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Canvas({:?}W×{:?}H)", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubicBez, Line};

    #[test]
    fn canvas_contains_shapes() {
        let canvas = Canvas::new(200.0, 100.0);
        let inside = CubicBez::new((10.0, 10.0), (50.0, 90.0), (150.0, 90.0), (190.0, 10.0));
        assert!(canvas.contains(&inside));

        // Wider than it is tall: a square-canvas mixup would reject this.
        let wide = Line::new((1.0, 50.0), (199.0, 50.0));
        assert!(canvas.contains(&wide));
        let tall = Line::new((50.0, 1.0), (50.0, 199.0));
        assert!(!canvas.contains(&tall));
    }

    #[test]
    fn canvas_edges_are_exclusive() {
        let canvas = Canvas::new(100.0, 100.0);
        assert!(!canvas.contains(&Line::new((0.0, 10.0), (50.0, 50.0))));
        assert!(!canvas.contains(&Line::new((10.0, 0.0), (50.0, 50.0))));
        assert!(!canvas.contains(&Line::new((10.0, 10.0), (100.0, 50.0))));
        assert!(!canvas.contains(&Line::new((10.0, 10.0), (50.0, 100.0))));
        assert!(canvas.contains(&Line::new((0.5, 0.5), (99.5, 99.5))));
    }

    #[test]
    fn canvas_bounding_box() {
        let canvas = Canvas::new(640.0, 480.0);
        assert_eq!(canvas.bounding_box(), BoundingBox::new(0.0, 0.0, 640.0, 480.0));
        assert!(!canvas.contains(&canvas));
        assert_eq!(format!("{canvas:?}"), "Canvas(640.0W×480.0H)");
    }
}
