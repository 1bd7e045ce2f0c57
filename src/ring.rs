// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annular sectors.

use alloc::vec::Vec;
use core::ops::{Add, Sub};

use crate::arc::{angle_in_sweep, arc_subdivisions, point_on_ellipse};
use crate::common::{to_degrees, to_radians};
use crate::{Point, Rect, Vec2, DEFAULT_TOLERANCE};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A segment of a ring: the region between two concentric circles,
/// limited to a sweep of angles.
///
/// Angles are in degrees and increase clockwise on screen. Only the
/// magnitude of each radius counts: a negative radius behaves like its
/// absolute value. If `inner_radius` exceeds `outer_radius` the two are
/// swapped for hit testing; the outline still follows the fields as given.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    /// The center.
    pub center: Point,
    /// The inner radius.
    pub inner_radius: f64,
    /// The outer radius.
    pub outer_radius: f64,
    /// The angle where the sector starts, in degrees.
    pub start_angle: f64,
    /// The angle where the sector ends, in degrees.
    pub end_angle: f64,
}

impl Ring {
    /// Create a `Ring` out of its constituent parts.
    pub fn new(
        center: impl Into<Point>,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Ring {
            center: center.into(),
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
        }
    }

    /// The closed outline of the sector.
    ///
    /// Traces the inner arc from `start_angle` to `end_angle`, then the
    /// outer arc back from `end_angle` to `start_angle`. The last vertex
    /// connects back to the first. Both arcs use the same number of steps,
    /// chosen so that the outer arc stays within `tolerance`.
    pub fn outline(&self, tolerance: f64) -> Vec<Point> {
        let sweep = self.end_angle - self.start_angle;
        let (inner, outer) = (self.inner_radius.abs(), self.outer_radius.abs());
        let n = arc_subdivisions(inner.max(outer), to_radians(sweep).abs(), tolerance);
        let step = sweep / n as f64;
        let mut points = Vec::with_capacity(2 * (n + 1));
        let inner = Vec2::new(inner, inner);
        let outer = Vec2::new(outer, outer);
        for i in 0..=n {
            points.push(point_on_ellipse(self.center, inner, self.start_angle + i as f64 * step));
        }
        for i in (0..=n).rev() {
            points.push(point_on_ellipse(self.center, outer, self.start_angle + i as f64 * step));
        }
        points
    }

    /// Whether `pt` lies in the sector, boundary included.
    ///
    /// ```
    /// use planar::{Point, Ring};
    ///
    /// // The lower half of a ring, since angles run clockwise with y down.
    /// let ring = Ring::new((0.0, 0.0), 5.0, 10.0, 0.0, 180.0);
    /// assert!(ring.contains(Point::new(0.0, 7.0)));
    /// assert!(!ring.contains(Point::new(0.0, -7.0)));
    /// assert!(!ring.contains(Point::new(0.0, 2.0)));
    /// ```
    pub fn contains(&self, pt: Point) -> bool {
        let (inner, outer) = (self.inner_radius.abs(), self.outer_radius.abs());
        let lo = inner.min(outer);
        let hi = inner.max(outer);
        let v = pt - self.center;
        let dist2 = v.hypot2();
        if !(dist2 >= lo * lo && dist2 <= hi * hi) {
            return false;
        }
        if dist2 == 0.0 {
            // Only reachable with a zero inner radius, where the center is
            // the apex of the sector.
            return true;
        }
        angle_in_sweep(to_degrees(v.y.atan2(v.x)), self.start_angle, self.end_angle)
    }

    /// A conservative bounding box: the box of the outer circle.
    pub fn bounding_box(&self) -> Rect {
        let r = self.inner_radius.abs().max(self.outer_radius.abs());
        Rect::from_center_size(self.center, 2.0 * r, 2.0 * r)
    }

    /// Is this ring finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.inner_radius.is_finite()
            && self.outer_radius.is_finite()
            && self.start_angle.is_finite()
            && self.end_angle.is_finite()
    }

    /// Is this ring NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan()
            || self.inner_radius.is_nan()
            || self.outer_radius.is_nan()
            || self.start_angle.is_nan()
            || self.end_angle.is_nan()
    }
}

impl Add<Vec2> for Ring {
    type Output = Ring;

    #[inline]
    fn add(self, v: Vec2) -> Ring {
        Ring {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for Ring {
    type Output = Ring;

    #[inline]
    fn sub(self, v: Vec2) -> Ring {
        Ring {
            center: self.center - v,
            ..self
        }
    }
}

/// The closed outline of an annular sector, at [`DEFAULT_TOLERANCE`].
///
/// See [`Ring::outline`].
pub fn ring_outline(
    center: impl Into<Point>,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Vec<Point> {
    Ring::new(center, inner_radius, outer_radius, start_angle, end_angle).outline(DEFAULT_TOLERANCE)
}
