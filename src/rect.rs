// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::ops::{Add, Sub};

use crate::{GeometryError, Line, Point, Vec2};

/// An axis-aligned rectangle, anchored at its top-left corner.
///
/// In a y-down space `(x, y)` is the top-left corner and the rectangle
/// extends `width` to the right and `height` down.
///
/// Nothing forbids a negative width or height, but such a rectangle is
/// empty: it contains no point and overlaps nothing. Use [`Rect::try_new`]
/// to reject negative extents instead, or [`Rect::abs`] to flip them.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y: f64,
    /// The extent along the x axis.
    pub width: f64,
    /// The extent along the y axis.
    pub height: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from its top-left corner and extents.
    #[inline(always)]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// A new rectangle, rejecting negative or non-finite parameters.
    ///
    /// ```
    /// use planar::{GeometryError, Rect};
    ///
    /// assert!(Rect::try_new(0.0, 0.0, 10.0, 0.0).is_ok());
    /// assert_eq!(
    ///     Rect::try_new(0.0, 0.0, -1.0, 5.0),
    ///     Err(GeometryError::NegativeExtent { width: -1.0, height: 5.0 })
    /// );
    /// ```
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Rect, GeometryError> {
        let rect = Rect::new(x, y, width, height);
        if !rect.is_finite() {
            tracing::debug!(x, y, width, height, "rejected non-finite rectangle");
            return Err(GeometryError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            tracing::debug!(width, height, "rejected rectangle with negative extent");
            return Err(GeometryError::NegativeExtent { width, height });
        }
        Ok(rect)
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        let x = p0.x.min(p1.x);
        let y = p0.y.min(p1.y);
        Rect::new(x, y, p0.x.max(p1.x) - x, p0.y.max(p1.y) - y)
    }

    /// A new rectangle from its top-left corner and a size vector.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Vec2>) -> Rect {
        let origin = origin.into();
        let size = size.into();
        Rect::new(origin.x, origin.y, size.x, size.y)
    }

    /// A new rectangle centered on `center`.
    #[inline]
    pub fn from_center_size(center: impl Into<Point>, width: f64, height: f64) -> Rect {
        let center = center.into();
        Rect::new(center.x - 0.5 * width, center.y - 0.5 * height, width, height)
    }

    /// The maximum x coordinate (right edge).
    #[inline]
    pub fn x1(&self) -> f64 {
        self.x + self.width
    }

    /// The maximum y coordinate (bottom edge in y-down spaces).
    #[inline]
    pub fn y1(&self) -> f64 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// The area of the rectangle.
    ///
    /// Negative when exactly one extent is negative.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether this rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    pub fn abs(&self) -> Rect {
        Rect::from_points(self.origin(), Point::new(self.x1(), self.y1()))
    }

    /// Whether `point` lies inside the rectangle.
    ///
    /// The boundary is included, so a zero-size rectangle still contains
    /// its own corner. A rectangle with a negative extent contains nothing.
    ///
    /// ```
    /// use planar::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(rect.contains(Point::new(10.0, 5.0)));
    /// assert!(!rect.contains(Point::new(10.1, 5.0)));
    /// ```
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.x1() && point.y >= self.y && point.y <= self.y1()
    }

    /// The intersection of two rectangles.
    ///
    /// Returns `None` unless the shared region has positive width and
    /// height, so rectangles that only touch along an edge do not
    /// intersect.
    ///
    /// ```
    /// use planar::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    /// assert_eq!(a.intersect(b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
    /// ```
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.x1().min(other.x1());
        let y1 = self.y1().min(other.y1());
        let rect = Rect::new(x0, y0, x1 - x0, y1 - y0);
        (!rect.is_empty()).then_some(rect)
    }

    /// Whether two rectangles share a region of positive area.
    #[inline]
    pub fn overlaps(&self, other: Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    pub fn union(&self, other: Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.x1().max(other.x1());
        let y1 = self.y1().max(other.y1());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    /// Thus, a succession of `union_pt` operations on a series of
    /// points yields their enclosing rectangle.
    ///
    /// Results are valid only if width and height are non-negative.
    pub fn union_pt(&self, pt: Point) -> Rect {
        let x0 = self.x.min(pt.x);
        let y0 = self.y.min(pt.y);
        let x1 = self.x1().max(pt.x);
        let y1 = self.y1().max(pt.y);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Expand a rectangle by a constant amount in both directions.
    ///
    /// The logic simply applies the amount in each direction. If rectangle
    /// area or added dimensions are negative, this could give odd results.
    #[inline]
    pub fn inflate(&self, width: f64, height: f64) -> Rect {
        Rect::new(
            self.x - width,
            self.y - height,
            self.width + 2.0 * width,
            self.height + 2.0 * height,
        )
    }

    /// The point of the rectangle closest to `point`.
    ///
    /// Points inside are returned unchanged.
    #[inline]
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            point.x.max(self.x).min(self.x1()),
            point.y.max(self.y).min(self.y1()),
        )
    }

    /// The four corners, clockwise on screen from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        let (x0, y0, x1, y1) = (self.x, self.y, self.x1(), self.y1());
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    /// The four edges, in the order of [`corners`](Rect::corners).
    pub fn edges(&self) -> [Line; 4] {
        let [a, b, c, d] = self.corners();
        [Line::new(a, b), Line::new(b, c), Line::new(c, d), Line::new(d, a)]
    }

    /// Is this rectangle [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Is this rectangle [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.width.is_nan() || self.height.is_nan()
    }
}

impl From<(Point, Point)> for Rect {
    fn from(points: (Point, Point)) -> Rect {
        Rect::from_points(points.0, points.1)
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, v: Vec2) -> Rect {
        Rect::new(self.x + v.x, self.y + v.y, self.width, self.height)
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, v: Vec2) -> Rect {
        Rect::new(self.x - v.x, self.y - v.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{GeometryError, Point, Rect, Vec2};

    #[test]
    fn from_points_normalizes() {
        let r = Rect::from_points((10.0, 2.0), (4.0, 8.0));
        assert_eq!(r, Rect::new(4.0, 2.0, 6.0, 6.0));
        assert_eq!(Rect::new(10.0, 10.0, -4.0, -2.0).abs(), Rect::new(6.0, 8.0, 4.0, 2.0));
    }

    #[test]
    fn try_new_rejects_bad_extents() {
        assert_eq!(
            Rect::try_new(1.0, 2.0, 3.0, 4.0),
            Ok(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(
            Rect::try_new(0.0, 0.0, 3.0, -4.0),
            Err(GeometryError::NegativeExtent {
                width: 3.0,
                height: -4.0
            })
        );
        assert_eq!(
            Rect::try_new(f64::NAN, 0.0, 3.0, 4.0),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    fn contains_boundary() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        for corner in r.corners() {
            assert!(r.contains(corner));
        }
        assert!(r.contains(Point::new(5.0, 0.0)));
        assert!(!r.contains(Point::new(5.0, -0.001)));

        let degenerate = Rect::new(3.0, 3.0, 0.0, 0.0);
        assert!(degenerate.contains(Point::new(3.0, 3.0)));
        assert!(!degenerate.contains(Point::new(3.0, 3.1)));
    }

    #[test]
    fn negative_extent_is_empty() {
        let r = Rect::new(10.0, 10.0, -5.0, 5.0);
        assert!(r.is_empty());
        assert!(!r.contains(Point::new(7.0, 12.0)));
        assert!(!r.contains(Point::new(10.0, 12.0)));
        assert!(!r.overlaps(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(!Rect::new(0.0, 0.0, 100.0, 100.0).overlaps(r));
    }

    #[test]
    fn intersect_overlap_rect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert!(a.overlaps(b));

        // Touching edges share no area.
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(c), None);
        assert!(!a.overlaps(c));

        let inner = Rect::new(2.0, 3.0, 1.0, 1.0);
        assert_eq!(a.intersect(inner), Some(inner));
    }

    #[test]
    fn intersect_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let a = Rect::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
                rng.random_range(-10.0..40.0),
                rng.random_range(-10.0..40.0),
            );
            let b = Rect::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
                rng.random_range(-10.0..40.0),
                rng.random_range(-10.0..40.0),
            );
            assert_eq!(a.overlaps(b), b.overlaps(a));
            assert_eq!(a.intersect(b), b.intersect(a));
        }
    }

    #[test]
    fn union_and_inflate() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, -1.0, 1.0, 1.0);
        assert_eq!(a.union(b), Rect::new(0.0, -1.0, 6.0, 3.0));
        assert_eq!(a.union_pt(Point::new(-1.0, 4.0)), Rect::new(-1.0, 0.0, 3.0, 4.0));
        assert_eq!(a.inflate(1.0, 0.5), Rect::new(-1.0, -0.5, 4.0, 3.0));
    }

    #[test]
    fn clamp_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(r.clamp_point(Point::new(-3.0, 2.0)), Point::new(0.0, 2.0));
        assert_eq!(r.clamp_point(Point::new(12.0, 9.0)), Point::new(10.0, 5.0));
        assert_eq!(r.clamp_point(Point::new(4.0, 4.0)), Point::new(4.0, 4.0));
    }

    #[test]
    fn translate() {
        let r = Rect::new(1.0, 1.0, 3.0, 3.0) + Vec2::new(2.0, -1.0);
        assert_eq!(r, Rect::new(3.0, 0.0, 3.0, 3.0));
        assert_eq!(r.center(), Point::new(4.5, 1.5));
    }
}
