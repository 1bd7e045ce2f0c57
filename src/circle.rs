// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};
use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::arc::arc_subdivisions;
use crate::common::solve_quadratic;
use crate::{Line, ParamCurve, Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
///
/// A negative radius describes an empty circle: it contains no point and
/// touches nothing. A zero radius behaves as the single point `center`.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline(always)]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Whether the circle covers no points: its radius is negative or NaN.
    ///
    /// A zero radius is not empty; it covers the center.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius.is_nan() || self.radius < 0.0
    }

    /// Whether `pt` lies inside the circle, boundary included.
    ///
    /// ```
    /// use planar::{Circle, Point};
    ///
    /// let c = Circle::new((0.0, 0.0), 5.0);
    /// assert!(c.contains(Point::new(3.0, 4.0)));
    /// assert!(!c.contains(Point::new(3.0, 4.1)));
    /// ```
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        !self.is_empty() && (pt - self.center).hypot2() <= self.radius * self.radius
    }

    /// Whether two circles touch or overlap.
    ///
    /// True when the distance between centers is at most the sum of the
    /// radii.
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.center.distance(other.center) <= self.radius + other.radius
    }

    /// Whether the segment passes within the circle.
    #[inline]
    pub fn intersects_line(&self, line: &Line) -> bool {
        !self.is_empty() && line.nearest(self.center).distance_sq <= self.radius * self.radius
    }

    /// Whether the circle touches the rectangle's boundary or interior.
    ///
    /// A rectangle with a negative extent is empty and touches nothing.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() || rect.width.is_nan() || rect.height.is_nan() {
            return false;
        }
        if rect.width < 0.0 || rect.height < 0.0 {
            return false;
        }
        let nearest = rect.clamp_point(self.center);
        (self.center - nearest).hypot2() <= self.radius * self.radius
    }

    /// The points where a segment crosses the circle's boundary.
    ///
    /// Returns up to two points, ordered along the segment. A segment that
    /// lies entirely inside the circle returns none; a tangent returns one.
    pub fn intersect_line(&self, line: &Line) -> ArrayVec<Point, 2> {
        let mut result = ArrayVec::new();
        if self.is_empty() {
            return result;
        }
        let d = line.p1 - line.p0;
        let f = line.p0 - self.center;
        let roots = solve_quadratic(f.hypot2() - self.radius * self.radius, 2.0 * f.dot(d), d.hypot2());
        for t in roots {
            if (0.0..=1.0).contains(&t) {
                result.push(line.eval(t));
            }
        }
        result
    }

    /// The smallest rectangle enclosing the circle.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        Rect::new(self.center.x - r, self.center.y - r, 2.0 * r, 2.0 * r)
    }

    /// The area of the circle.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// The circumference of the circle.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius.abs()
    }

    /// The circle's boundary as a closed polygon within `tolerance`.
    ///
    /// The last vertex connects back to the first; the first vertex is at
    /// angle zero and the rest follow clockwise on screen.
    pub fn outline(&self, tolerance: f64) -> Vec<Point> {
        let r = self.radius.abs();
        if r == 0.0 {
            return alloc::vec![self.center];
        }
        let n = arc_subdivisions(r, TAU, tolerance).max(3);
        let step = TAU / n as f64;
        (0..n)
            .map(|i| {
                let (s, c) = (i as f64 * step).sin_cos();
                self.center + Vec2::new(c * r, s * r)
            })
            .collect()
    }

    /// Is this circle [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Circle, Line, Point, Rect};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn contains_boundary() {
        let c = Circle::new((0.0, 0.0), 5.0);
        assert!(c.contains(Point::new(5.0, 0.0)));
        assert!(c.contains(Point::new(0.0, -5.0)));
        assert!(!c.contains(Point::new(5.0001, 0.0)));

        let dot = Circle::new((2.0, 2.0), 0.0);
        assert!(dot.contains(Point::new(2.0, 2.0)));
        assert!(!dot.contains(Point::new(2.0, 2.0001)));

        let empty = Circle::new((0.0, 0.0), -5.0);
        assert!(!empty.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn circle_overlap() {
        let a = Circle::new((0.0, 0.0), 5.0);
        assert!(a.overlaps(&Circle::new((8.0, 0.0), 5.0)));
        assert!(!a.overlaps(&Circle::new((11.0, 0.0), 5.0)));
        // Tangent circles touch.
        assert!(a.overlaps(&Circle::new((10.0, 0.0), 5.0)));
        assert!(!a.overlaps(&Circle::new((1.0, 0.0), -5.0)));
    }

    #[test]
    fn circle_overlap_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = Circle::new(
                (rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0)),
                rng.random_range(0.0..10.0),
            );
            let b = Circle::new(
                (rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0)),
                rng.random_range(0.0..10.0),
            );
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn circle_line() {
        let c = Circle::new((0.0, 0.0), 5.0);
        assert!(c.intersects_line(&Line::new((-10.0, 3.0), (10.0, 3.0))));
        assert!(c.intersects_line(&Line::new((-10.0, 5.0), (10.0, 5.0))));
        assert!(!c.intersects_line(&Line::new((-10.0, 6.0), (10.0, 6.0))));
        // Clamped to the segment: the infinite line would pass through.
        assert!(!c.intersects_line(&Line::new((6.0, 0.0), (10.0, 0.0))));
        // Fully inside.
        assert!(c.intersects_line(&Line::new((-1.0, 0.0), (1.0, 0.0))));
        // Zero-length line.
        assert!(c.intersects_line(&Line::new((1.0, 1.0), (1.0, 1.0))));
    }

    #[test]
    fn circle_line_points() {
        let c = Circle::new((0.0, 0.0), 5.0);
        let through = c.intersect_line(&Line::new((-10.0, 0.0), (10.0, 0.0)));
        assert_eq!(through.len(), 2);
        assert_approx_eq(through[0].x, -5.0);
        assert_approx_eq(through[1].x, 5.0);

        let half = c.intersect_line(&Line::new((0.0, 0.0), (0.0, 10.0)));
        assert_eq!(half.len(), 1);
        assert_approx_eq(half[0].y, 5.0);

        let tangent = c.intersect_line(&Line::new((-10.0, 5.0), (10.0, 5.0)));
        assert_eq!(tangent.len(), 1);
        assert_approx_eq(tangent[0].x, 0.0);

        assert!(c.intersect_line(&Line::new((-1.0, 0.0), (1.0, 0.0))).is_empty());
        assert!(c.intersect_line(&Line::new((-10.0, 6.0), (10.0, 6.0))).is_empty());
    }

    #[test]
    fn circle_rect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Circle::new((5.0, 5.0), 1.0).intersects_rect(&r));
        assert!(Circle::new((-2.0, 5.0), 2.0).intersects_rect(&r));
        assert!(!Circle::new((-2.0, 5.0), 1.9).intersects_rect(&r));
        // Corner region measures to the corner.
        assert!(!Circle::new((-3.0, -3.0), 4.0).intersects_rect(&r));
        assert!(Circle::new((-3.0, -3.0), 4.3).intersects_rect(&r));
        assert!(!Circle::new((5.0, 5.0), 100.0).intersects_rect(&Rect::new(0.0, 0.0, -1.0, 1.0)));
    }

    #[test]
    fn outline_within_tolerance() {
        let c = Circle::new((3.0, 4.0), 20.0);
        let tolerance = 0.05;
        let outline = c.outline(tolerance);
        assert!(outline.len() >= 3);
        for (i, p) in outline.iter().enumerate() {
            assert_approx_eq(p.distance(c.center), 20.0);
            let next = outline[(i + 1) % outline.len()];
            let mid = p.midpoint(next);
            assert!(20.0 - mid.distance(c.center) <= tolerance + 1e-12);
        }
        assert_eq!(Circle::new((1.0, 1.0), 0.0).outline(0.1).len(), 1);
    }

    #[test]
    fn measures() {
        let c = Circle::new((5.0, 5.0), 5.0);
        assert_approx_eq(c.area(), 25.0 * PI);
        assert_approx_eq(c.perimeter(), 10.0 * PI);
        assert_eq!(c.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
