// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::param_curve::subdivisions_for_accel;
use crate::{CubicBez, ParamCurve, Point, Rect, Vec2};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct QuadBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline(always)]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    #[inline]
    pub fn raise(&self) -> CubicBez {
        CubicBez::new(
            self.p0,
            self.p0 + (2.0 / 3.0) * (self.p1 - self.p0),
            self.p2 + (2.0 / 3.0) * (self.p1 - self.p2),
            self.p2,
        )
    }

    /// Subdivide into halves, using de Casteljau.
    pub fn subdivide(&self) -> (QuadBez, QuadBez) {
        let pm = self.eval(0.5);
        (
            QuadBez::new(self.p0, self.p0.midpoint(self.p1), pm),
            QuadBez::new(pm, self.p1.midpoint(self.p2), self.p2),
        )
    }

    /// Parameters in `(0, 1)` where the curve turns around in x or y.
    pub fn extrema(&self) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let dd = d1 - d0;
        for (n, d) in [(-d0.x, dd.x), (-d0.y, dd.y)] {
            if d != 0.0 {
                let t = n / d;
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        result.sort_by(f64::total_cmp);
        result
    }

    /// The smallest rectangle enclosing the curve.
    ///
    /// This is tighter than the box around the control points.
    pub fn bounding_box(&self) -> Rect {
        self.extrema()
            .into_iter()
            .fold(Rect::from_points(self.p0, self.p2), |r, t| {
                r.union_pt(self.eval(t))
            })
    }

    /// Is this quadratic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }

    /// Is this quadratic Bezier curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan()
    }
}

impl ParamCurve for QuadBez {
    /// Bernstein form; `t = 0` and `t = 1` reproduce the endpoints exactly.
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt;
        let b = 2.0 * mt * t;
        let c = t * t;
        Point::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y,
        )
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p2
    }

    fn flatten_count(&self, tolerance: f64) -> usize {
        let accel = 2.0 * (self.p0.to_vec2() - 2.0 * self.p1.to_vec2() + self.p2.to_vec2()).hypot();
        subdivisions_for_accel(accel, tolerance)
    }
}

impl Add<Vec2> for QuadBez {
    type Output = QuadBez;

    #[inline]
    fn add(self, v: Vec2) -> QuadBez {
        QuadBez::new(self.p0 + v, self.p1 + v, self.p2 + v)
    }
}

impl Sub<Vec2> for QuadBez {
    type Output = QuadBez;

    #[inline]
    fn sub(self, v: Vec2) -> QuadBez {
        QuadBez::new(self.p0 - v, self.p1 - v, self.p2 - v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParamCurve, Point, QuadBez, Rect};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn quadbez_eval() {
        let q = QuadBez::new((0.0, 0.0), (10.0, 10.0), (20.0, 0.0));
        assert_eq!(q.eval(0.5), Point::new(10.0, 5.0));
        assert_eq!(q.eval(0.0), q.p0);
        assert_eq!(q.eval(1.0), q.p2);
        assert_near(q.eval(0.25), Point::new(5.0, 3.75), 1e-12);
    }

    #[test]
    fn quadbez_raise() {
        let q = QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8));
        let c = q.raise();
        assert_eq!(c.p0, q.p0);
        assert_eq!(c.p3, q.p2);
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert_near(q.eval(t), c.eval(t), 1e-12);
        }
    }

    #[test]
    fn quadbez_subdivide() {
        let q = QuadBez::new((0.0, 0.0), (4.0, 8.0), (8.0, 0.0));
        let (a, b) = q.subdivide();
        assert_eq!(a.p2, b.p0);
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert_near(a.eval(t), q.eval(0.5 * t), 1e-12);
            assert_near(b.eval(t), q.eval(0.5 + 0.5 * t), 1e-12);
        }
    }

    #[test]
    fn quadbez_bounding_box() {
        let q = QuadBez::new((0.0, 0.0), (10.0, 10.0), (20.0, 0.0));
        assert_eq!(q.extrema().as_slice(), &[0.5]);
        assert_eq!(q.bounding_box(), Rect::new(0.0, 0.0, 20.0, 5.0));

        let straight = QuadBez::new((0.0, 0.0), (1.0, 1.0), (2.0, 2.0));
        assert!(straight.extrema().is_empty());
    }

    #[test]
    fn quadbez_flatten() {
        let q = QuadBez::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
        let tolerance = 0.1;
        let points = q.flatten(tolerance);
        assert_eq!(points.first(), Some(&q.p0));
        assert_eq!(points.last(), Some(&q.p2));
        // Deviation of each chord midpoint from the curve stays in bounds.
        let n = points.len() - 1;
        for i in 0..n {
            let mid = points[i].midpoint(points[i + 1]);
            let on_curve = q.eval((i as f64 + 0.5) / n as f64);
            assert!(mid.distance(on_curve) <= tolerance);
        }

        let line_like = QuadBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0));
        assert_eq!(line_like.flatten(0.1).len(), 2);
    }
}
