// Copyright 2025 the Bezout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

use core::fmt;

use crate::Point;

/// An axis-aligned box given by its origin and size.
///
/// Boxes are the cheap pre-filter of every intersection query: two shapes
/// whose boxes do not [overlap](BoundingBox::overlaps) cannot intersect.
///
/// Degenerate boxes (zero width or height, as produced by an axis-aligned
/// line) are valid values.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// The minimum x coordinate.
    pub x: f64,
    /// The minimum y coordinate.
    pub y: f64,
    /// The extent along the x axis.
    pub width: f64,
    /// The extent along the y axis.
    pub height: f64,
}

impl BoundingBox {
    /// A new box from its origin and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
        BoundingBox {
            x,
            y,
            width,
            height,
        }
    }

    /// A new box from two opposite corners.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> BoundingBox {
        let p0 = p0.into();
        let p1 = p1.into();
        let min = p0.min(p1);
        let max = p0.max(p1);
        BoundingBox::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// The smallest box containing every point of `points`.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<BoundingBox> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(BoundingBox::from_points(min, max))
    }

    /// The minimum corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The maximum x coordinate.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// The maximum y coordinate.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// The center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// Whether the open interiors of the two boxes intersect.
    ///
    /// This is symmetric, and a box with positive width and height overlaps
    /// itself. Boxes that only share an edge do not overlap, and neither does
    /// a degenerate box; see [`overlaps_inclusive`](BoundingBox::overlaps_inclusive)
    /// for the closed test.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezout::BoundingBox;
    ///
    /// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    /// let b = BoundingBox::new(5.0, 5.0, 10.0, 10.0);
    /// let c = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
    /// assert!(a.overlaps(&b) && b.overlaps(&a));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }

    /// Whether the closed boxes intersect, including shared edges and corners.
    #[inline]
    pub fn overlaps_inclusive(&self, other: &BoundingBox) -> bool {
        self.x <= other.max_x()
            && self.max_x() >= other.x
            && self.y <= other.max_y()
            && self.max_y() >= other.y
    }

    /// Whether `point` lies in the box, boundary included.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// Whether `other` lies entirely in this box, boundary included.
    #[inline]
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.max_x() <= self.max_x()
            && other.y >= self.y
            && other.max_y() <= self.max_y()
    }

    /// Is this box degenerate?
    ///
    /// A box with zero width or height is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// The smallest box enclosing two boxes.
    #[inline]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::from_points(
            self.origin().min(other.origin()),
            Point::new(self.max_x().max(other.max_x()), self.max_y().max(other.max_y())),
        )
    }

    /// Whether the box coordinates are all finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl fmt::Debug for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox {{ x: {:?}, y: {:?}, width: {:?}, height: {:?} }}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{} at {}", self.width, self.height, self.origin())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn random_box(rng: &mut StdRng) -> BoundingBox {
        BoundingBox::new(
            rng.random_range(0.0..100.0),
            rng.random_range(0.0..100.0),
            rng.random_range(0.0..30.0),
            rng.random_range(0.0..30.0),
        )
    }

    #[test]
    fn from_points_normalizes() {
        let b = BoundingBox::from_points((10.0, 2.0), (4.0, 8.0));
        assert_eq!(b, BoundingBox::new(4.0, 2.0, 6.0, 6.0));
        assert_eq!(b.max_x(), 10.0);
        assert_eq!(b.max_y(), 8.0);
        assert_eq!(b.center(), Point::new(7.0, 5.0));
    }

    #[test]
    fn enclosing_points() {
        let pts = [
            Point::new(1.0, 5.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -1.0),
        ];
        assert_eq!(
            BoundingBox::enclosing(pts),
            Some(BoundingBox::new(-2.0, -1.0, 6.0, 6.0))
        );
        assert_eq!(BoundingBox::enclosing(core::iter::empty::<Point>()), None);
    }

    #[test]
    fn overlap_edges_and_degenerate() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let touching = BoundingBox::new(10.0, 0.0, 5.0, 5.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps_inclusive(&touching));

        let flat = BoundingBox::new(2.0, 5.0, 4.0, 0.0);
        assert!(flat.is_empty());
        assert!(!flat.overlaps(&flat));
        assert!(flat.overlaps_inclusive(&flat));
        assert!(a.overlaps(&flat));
    }

    #[test]
    fn overlap_symmetric_and_reflexive() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let a = random_box(&mut rng);
            let b = random_box(&mut rng);
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} {b:?}");
            assert_eq!(a.overlaps_inclusive(&b), b.overlaps_inclusive(&a));
            if a.width > 0.0 && a.height > 0.0 {
                assert!(a.overlaps(&a));
            }
        }
    }

    #[test]
    fn containment() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.contains_point(Point::new(10.0, 0.0)));
        assert!(!a.contains_point(Point::new(10.1, 0.0)));
        assert!(a.contains(&BoundingBox::new(1.0, 1.0, 9.0, 2.0)));
        assert!(!a.contains(&BoundingBox::new(1.0, 1.0, 9.5, 2.0)));
    }

    #[test]
    fn is_empty() {
        assert!(!BoundingBox::new(0.0, 0.0, 1.0, 1.0).is_empty());
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 1.0).is_empty());
        assert!(BoundingBox::default().is_empty());
    }

    #[test]
    fn union() {
        let a = BoundingBox::new(0.0, 0.0, 2.0, 2.0);
        let b = BoundingBox::new(5.0, -1.0, 1.0, 1.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, -1.0, 6.0, 3.0));
    }
}
