// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Triangle shape

use core::ops::{Add, Sub};

use crate::{Line, Point, Rect, Vec2};

/// Triangle
//     A
//     *
//    / \
//   /   \
//  *-----*
//  B     C
///
/// No winding order is assumed; the vertices may run either way.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// vertex a
    pub a: Point,
    /// vertex b
    pub b: Point,
    /// vertex c
    pub c: Point,
}

impl Triangle {
    /// The empty triangle at the origin
    pub const ZERO: Self = Self::from_coords((0., 0.), (0., 0.), (0., 0.));

    /// A new [`Triangle`] from three vertices ([`Point`]s)
    #[inline]
    pub fn new(a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// A new [`Triangle`] from three float vertex coordinates
    #[inline]
    pub const fn from_coords(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        Self {
            a: Point::new(a.0, a.1),
            b: Point::new(b.0, b.1),
            c: Point::new(c.0, c.1),
        }
    }

    /// The vertices in order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The edges `ab`, `bc` and `ca`.
    #[inline]
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    /// The centroid of the [`Triangle`]
    #[inline]
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    /// The signed area of the [`Triangle`]
    ///
    /// Positive when the vertices run clockwise on screen (y down).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * (self.b - self.a).cross(self.c - self.a)
    }

    /// The area of the [`Triangle`]
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether the vertices are collinear, so the triangle has no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        (self.b - self.a).cross(self.c - self.a) == 0.0
    }

    /// Whether `point` lies inside the triangle or on its boundary.
    ///
    /// Works for either winding. A collinear triangle contains exactly the
    /// points of its edges.
    ///
    /// ```
    /// use planar::{Point, Triangle};
    ///
    /// let cw = Triangle::from_coords((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
    /// let ccw = Triangle::from_coords((0.0, 0.0), (0.0, 10.0), (10.0, 0.0));
    /// for p in [Point::new(2.0, 2.0), Point::new(5.0, 5.0), Point::new(6.0, 6.0)] {
    ///     assert_eq!(cw.contains(p), ccw.contains(p));
    /// }
    /// ```
    pub fn contains(&self, point: Point) -> bool {
        if self.is_degenerate() {
            return self.edges().iter().any(|edge| {
                (edge.p1 - edge.p0).cross(point - edge.p0) == 0.0
                    && edge.bounding_box().contains(point)
            });
        }
        let d1 = (self.b - self.a).cross(point - self.a);
        let d2 = (self.c - self.b).cross(point - self.b);
        let d3 = (self.a - self.c).cross(point - self.c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    /// The smallest rectangle enclosing the triangle.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.a, self.b).union_pt(self.c)
    }

    /// Is this [`Triangle`] [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Is this [`Triangle`] [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.a.is_nan() || self.b.is_nan() || self.c.is_nan()
    }
}

impl From<(Point, Point, Point)> for Triangle {
    fn from(points: (Point, Point, Point)) -> Triangle {
        Triangle::new(points.0, points.1, points.2)
    }
}

impl Add<Vec2> for Triangle {
    type Output = Triangle;

    #[inline]
    fn add(self, v: Vec2) -> Triangle {
        Triangle::new(self.a + v, self.b + v, self.c + v)
    }
}

impl Sub<Vec2> for Triangle {
    type Output = Triangle;

    #[inline]
    fn sub(self, v: Vec2) -> Triangle {
        Triangle::new(self.a - v, self.b - v, self.c - v)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Point, Rect, Triangle, Vec2};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-12, "{x} != {y}");
    }

    #[test]
    fn centroid_and_area() {
        let test = Triangle::from_coords((-90.0, 0.0), (90.0, 0.0), (0.0, 30.0));
        assert_eq!(test.centroid(), Point::new(0.0, 10.0));
        assert_approx_eq(test.area(), 2700.0);
        assert_approx_eq(test.signed_area(), 2700.0);
        assert_approx_eq(
            Triangle::new(test.a, test.c, test.b).signed_area(),
            -2700.0,
        );
        assert_eq!(test.bounding_box(), Rect::new(-90.0, 0.0, 180.0, 30.0));
    }

    #[test]
    fn contains_inside_and_boundary() {
        let t = Triangle::from_coords((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        assert!(t.contains(Point::new(1.0, 1.0)));
        assert!(t.contains(Point::new(0.0, 0.0)));
        assert!(t.contains(Point::new(5.0, 0.0)));
        assert!(t.contains(Point::new(5.0, 5.0)));
        assert!(!t.contains(Point::new(5.1, 5.1)));
        assert!(!t.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn contains_is_winding_agnostic() {
        // Integer coordinates keep every cross product exact, boundary
        // and collinear cases included.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let mut pt = || {
                Point::new(
                    f64::from(rng.random_range(-6..6_i32)),
                    f64::from(rng.random_range(-6..6_i32)),
                )
            };
            let (a, b, c, p) = (pt(), pt(), pt(), pt());
            let t = Triangle::new(a, b, c);
            let expected = t.contains(p);
            assert_eq!(Triangle::new(a, c, b).contains(p), expected);
            assert_eq!(Triangle::new(b, a, c).contains(p), expected);
            assert_eq!(Triangle::new(c, b, a).contains(p), expected);
        }
    }

    #[test]
    fn degenerate_triangles() {
        let flat = Triangle::from_coords((0.0, 0.0), (5.0, 0.0), (10.0, 0.0));
        assert!(flat.is_degenerate());
        assert!(flat.contains(Point::new(7.0, 0.0)));
        assert!(!flat.contains(Point::new(11.0, 0.0)));
        assert!(!flat.contains(Point::new(7.0, 0.1)));

        let dot = Triangle::from_coords((2.0, 2.0), (2.0, 2.0), (2.0, 2.0));
        assert!(dot.contains(Point::new(2.0, 2.0)));
        assert!(!dot.contains(Point::new(2.0, 3.0)));
    }

    #[test]
    fn translate() {
        let t = Triangle::from_coords((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)) + Vec2::new(2.0, 3.0);
        assert_eq!(t.vertices(), [Point::new(2.0, 3.0), Point::new(3.0, 3.0), Point::new(2.0, 4.0)]);
    }
}
