// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ellipse arc.

use core::ops::{Add, Sub};

use crate::collision::polyline_distance_sq;
use crate::common::{to_degrees, to_radians, wrap};
use crate::param_curve::MAX_FLATTEN_SEGMENTS;
use crate::{ParamCurve, Point, Rect, Vec2, DEFAULT_TOLERANCE};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single elliptical arc segment.
///
/// Angles are in degrees, measured from the positive x axis, and
/// increase clockwise on screen. The arc runs from `start_angle` to
/// `end_angle`; when `end_angle` is smaller it runs counter-clockwise.
///
/// The sign of each radius is ignored: an arc with negative radii is
/// drawn and hit tested exactly like the one with their absolute values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's centre point.
    pub center: Point,
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction.
    pub radii: Vec2,
    /// The start angle in degrees.
    pub start_angle: f64,
    /// The end angle in degrees.
    pub end_angle: f64,
}

impl Arc {
    /// Create a new `Arc`.
    #[inline(always)]
    pub fn new(
        center: impl Into<Point>,
        radii: impl Into<Vec2>,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center: center.into(),
            radii: radii.into(),
            start_angle,
            end_angle,
        }
    }

    /// Create a circular arc.
    #[inline]
    pub fn circular(center: impl Into<Point>, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self::new(center, Vec2::new(radius, radius), start_angle, end_angle)
    }

    /// The signed sweep in degrees; positive sweeps run clockwise.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether both radii have the same magnitude.
    #[inline]
    pub fn is_circular(&self) -> bool {
        self.radii.x.abs() == self.radii.y.abs()
    }

    /// The radii with their signs dropped.
    #[inline]
    fn abs_radii(&self) -> Vec2 {
        Vec2::new(self.radii.x.abs(), self.radii.y.abs())
    }

    /// Create a new `Arc` running the other way.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> Arc {
        Self {
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            ..*self
        }
    }

    /// Whether `pt` lies on the arc drawn with the given stroke width.
    ///
    /// Circular arcs are tested exactly, with round caps at both ends.
    /// Elliptical arcs are tested against their flattened outline.
    pub fn contains(&self, pt: Point, stroke_width: f64) -> bool {
        let half = 0.5 * stroke_width;
        if half.is_nan() || half < 0.0 {
            return false;
        }
        let half_sq = half * half;
        if self.is_circular() {
            let r = self.radii.x.abs();
            let v = pt - self.center;
            let angle = to_degrees(v.y.atan2(v.x));
            if angle_in_sweep(angle, self.start_angle, self.end_angle)
                && (v.hypot() - r).abs() <= half
            {
                return true;
            }
            return pt.distance_squared(self.start()) <= half_sq
                || pt.distance_squared(self.end()) <= half_sq;
        }
        let tolerance = DEFAULT_TOLERANCE.min(0.25 * stroke_width);
        polyline_distance_sq(&self.flatten(tolerance), pt) <= half_sq
    }

    /// A conservative bounding box: the box of the full ellipse.
    pub fn bounding_box(&self) -> Rect {
        let r = self.abs_radii();
        Rect::from_points(self.center - r, self.center + r)
    }

    /// Is this arc finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.radii.is_finite()
            && self.start_angle.is_finite()
            && self.end_angle.is_finite()
    }

    /// Is this arc NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan()
            || self.radii.is_nan()
            || self.start_angle.is_nan()
            || self.end_angle.is_nan()
    }
}

impl ParamCurve for Arc {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let angle = self.start_angle + t * self.sweep();
        point_on_ellipse(self.center, self.abs_radii(), angle)
    }

    fn flatten_count(&self, tolerance: f64) -> usize {
        let r = self.radii.x.abs().max(self.radii.y.abs());
        arc_subdivisions(r, to_radians(self.sweep()).abs(), tolerance)
    }
}

impl Add<Vec2> for Arc {
    type Output = Arc;

    #[inline]
    fn add(self, v: Vec2) -> Arc {
        Arc {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for Arc {
    type Output = Arc;

    #[inline]
    fn sub(self, v: Vec2) -> Arc {
        Arc {
            center: self.center - v,
            ..self
        }
    }
}

/// The point at `angle` degrees on an axis-aligned ellipse.
#[inline]
pub(crate) fn point_on_ellipse(center: Point, radii: Vec2, angle: f64) -> Point {
    let (angle_sin, angle_cos) = to_radians(angle).sin_cos();
    center
        + Vec2 {
            x: angle_cos * radii.x,
            y: angle_sin * radii.y,
        }
}

/// Slack in degrees when comparing a direction against the ends of a sweep.
const SWEEP_EPSILON: f64 = 1e-9;

/// Whether the direction `angle` lies within the sweep from `start` to
/// `end`, all in degrees. Either direction of sweep is accepted, and a
/// sweep of a full turn or more covers every angle.
///
/// Directions within [`SWEEP_EPSILON`] of either end count as inside.
pub(crate) fn angle_in_sweep(angle: f64, start: f64, end: f64) -> bool {
    let lo = start.min(end);
    let span = (end - start).abs();
    if span >= 360.0 {
        return true;
    }
    // A direction a hair before `lo` wraps to just under (or exactly) 360.
    let offset = wrap(angle - lo, 0.0, 360.0);
    offset <= span + SWEEP_EPSILON || offset >= 360.0 - SWEEP_EPSILON
}

/// Segment count for an arc of `radius` turning through `sweep` radians.
///
/// The sagitta of each chord is held to `tolerance`.
pub(crate) fn arc_subdivisions(radius: f64, sweep: f64, tolerance: f64) -> usize {
    if radius.is_nan() || radius <= 0.0 || sweep.is_nan() || sweep <= 0.0 {
        return 1;
    }
    if tolerance.is_nan() || tolerance <= 0.0 {
        return MAX_FLATTEN_SEGMENTS;
    }
    let step = 2.0 * (1.0 - tolerance / radius).max(-1.0).acos();
    let n = (sweep / step).ceil();
    if n.is_finite() && n >= 1.0 {
        (n as usize).min(MAX_FLATTEN_SEGMENTS)
    } else if n < 1.0 {
        1
    } else {
        MAX_FLATTEN_SEGMENTS
    }
}
