// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::param_curve::subdivisions_for_accel;
use crate::{ParamCurve, Point, Rect, Vec2};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Subdivide into halves, using de Casteljau.
    pub fn subdivide(&self) -> (CubicBez, CubicBez) {
        let pm = self.eval(0.5);
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        (
            CubicBez::new(self.p0, p01, p01.midpoint(p12), pm),
            CubicBez::new(pm, p12.midpoint(p23), p23, self.p3),
        )
    }

    /// Parameters in `(0, 1)` where the curve turns around in x or y,
    /// sorted ascending.
    pub fn extrema(&self) -> ArrayVec<f64, 4> {
        fn one_coord(result: &mut ArrayVec<f64, 4>, d0: f64, d1: f64, d2: f64) {
            let a = d0 - 2.0 * d1 + d2;
            let b = 2.0 * (d1 - d0);
            let c = d0;
            let roots = solve_quadratic(c, b, a);
            for &t in &roots {
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        one_coord(&mut result, d0.x, d1.x, d2.x);
        one_coord(&mut result, d0.y, d1.y, d2.y);
        result.sort_by(f64::total_cmp);
        result
    }

    /// The smallest rectangle enclosing the curve.
    pub fn bounding_box(&self) -> Rect {
        self.extrema()
            .into_iter()
            .fold(Rect::from_points(self.p0, self.p3), |r, t| {
                r.union_pt(self.eval(t))
            })
    }

    /// Is this cubic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this cubic Bezier curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        )
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p3
    }

    fn flatten_count(&self, tolerance: f64) -> usize {
        // The second derivative is linear in t, so its magnitude peaks at
        // an endpoint.
        let dd0 = self.p0.to_vec2() - 2.0 * self.p1.to_vec2() + self.p2.to_vec2();
        let dd1 = self.p1.to_vec2() - 2.0 * self.p2.to_vec2() + self.p3.to_vec2();
        let accel = 6.0 * dd0.hypot().max(dd1.hypot());
        subdivisions_for_accel(accel, tolerance)
    }
}

impl Add<Vec2> for CubicBez {
    type Output = CubicBez;

    #[inline]
    fn add(self, v: Vec2) -> CubicBez {
        CubicBez::new(self.p0 + v, self.p1 + v, self.p2 + v, self.p3 + v)
    }
}

impl Sub<Vec2> for CubicBez {
    type Output = CubicBez;

    #[inline]
    fn sub(self, v: Vec2) -> CubicBez {
        CubicBez::new(self.p0 - v, self.p1 - v, self.p2 - v, self.p3 - v)
    }
}
