// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use alloc::vec::Vec;

use crate::{CubicBez, Line, Point, QuadBez};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The default tolerance used when approximating curves with polylines.
///
/// This is the maximum distance, in the caller's units, between a curve
/// and the polyline standing in for it.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Upper bound on the number of segments a single curve flattens into.
///
/// Guards against absurd tolerances (zero, negative, NaN) producing
/// unbounded allocations.
pub(crate) const MAX_FLATTEN_SEGMENTS: usize = 4096;

/// A curve parametrized by a scalar.
///
/// If the result is interpreted as a point, this represents a curve.
/// Evaluation is total: `t` outside `0..=1` extrapolates rather than
/// clamping, so callers that want clamping (an animation ping-pong, a UI
/// scrubber) do it themselves.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }

    /// Number of uniform parameter steps needed so that the polyline
    /// through the sampled points stays within `tolerance` of the curve.
    fn flatten_count(&self, tolerance: f64) -> usize;

    /// Approximate the curve with a polyline.
    ///
    /// The result starts at [`start`](ParamCurve::start), ends at
    /// [`end`](ParamCurve::end), and always holds at least two points.
    fn flatten(&self, tolerance: f64) -> Vec<Point> {
        let n = self.flatten_count(tolerance).clamp(1, MAX_FLATTEN_SEGMENTS);
        let step = (n as f64).recip();
        let mut points = Vec::with_capacity(n + 1);
        points.push(self.start());
        for i in 1..n {
            points.push(self.eval(i as f64 * step));
        }
        points.push(self.end());
        points
    }
}

/// Segment count for uniform subdivision of a polynomial curve.
///
/// `accel` bounds the magnitude of the second derivative over `0..=1`.
/// Chords of a curve over a parameter step `h` deviate from it by at most
/// `accel * h² / 8`.
pub(crate) fn subdivisions_for_accel(accel: f64, tolerance: f64) -> usize {
    let n = (accel / (8.0 * tolerance)).sqrt().ceil();
    if n.is_finite() && n >= 1.0 {
        (n as usize).min(MAX_FLATTEN_SEGMENTS)
    } else if n.is_nan() || n == f64::INFINITY {
        // Zero, negative or NaN tolerance on a curved input.
        if accel > 0.0 {
            MAX_FLATTEN_SEGMENTS
        } else {
            1
        }
    } else {
        1
    }
}

/// The nearest position on a curve to some point.
///
/// This is returned by [`Line::nearest`].
#[derive(Debug, Clone, Copy)]
pub struct Nearest {
    /// The square of the distance from the nearest position on the curve
    /// to the given point.
    pub distance_sq: f64,
    /// The position on the curve of the nearest point, as a parameter.
    pub t: f64,
}

/// The point at `amount` along the segment from `p1` to `p2`.
///
/// Computed as `p1 * (1 - amount) + p2 * amount`, so the endpoints are
/// reproduced exactly.
///
/// ```
/// use planar::{point_at_line, Point};
///
/// let p = point_at_line(Point::new(0.0, 0.0), Point::new(10.0, 20.0), 0.25);
/// assert_eq!(p, Point::new(2.5, 5.0));
/// ```
#[inline]
pub fn point_at_line(p1: Point, p2: Point, amount: f64) -> Point {
    Line::new(p1, p2).eval(amount)
}

/// The point at `amount` along a quadratic Bézier curve.
///
/// ```
/// use planar::{point_at_quad, Point};
///
/// let p = point_at_quad((0.0, 0.0).into(), (10.0, 10.0).into(), (20.0, 0.0).into(), 0.5);
/// assert_eq!(p, Point::new(10.0, 5.0));
/// ```
#[inline]
pub fn point_at_quad(p1: Point, c: Point, p2: Point, amount: f64) -> Point {
    QuadBez::new(p1, c, p2).eval(amount)
}

/// The point at `amount` along a cubic Bézier curve.
#[inline]
pub fn point_at_cubic(p1: Point, c1: Point, c2: Point, p2: Point, amount: f64) -> Point {
    CubicBez::new(p1, c1, c2, p2).eval(amount)
}
