// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options and polyline helpers for hit testing.

use crate::{Line, Point, DEFAULT_TOLERANCE};

/// Options for hit testing and overlap tests on [`Shape`](crate::Shape).
///
/// Closed shapes (rectangles, circles, triangles, polygons, rings) are
/// filled; the stroke width applies to open shapes (points, lines, curves,
/// arcs), which are treated as drawn with a round pen of that width.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOpts {
    /// Width of the pen used for open shapes.
    pub stroke_width: f64,
    /// Maximum distance between a curve and the polyline used to test it.
    pub tolerance: f64,
}

impl Default for HitOpts {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl HitOpts {
    /// Creates hit test options with the specified stroke width.
    pub fn new(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            ..Default::default()
        }
    }

    /// Builder method for setting the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Builder method for setting the flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Half the stroke width, or `None` when the width is negative or NaN.
    #[inline]
    pub(crate) fn half_width(&self) -> Option<f64> {
        let half = 0.5 * self.stroke_width;
        (half >= 0.0).then_some(half)
    }
}

/// The segments of a polyline, closing the loop when `closed` is set.
///
/// A single point yields one zero-length segment.
pub(crate) fn segments(points: &[Point], closed: bool) -> impl Iterator<Item = Line> + '_ {
    let n = points.len();
    let count = match (n, closed) {
        (0, _) => 0,
        (1, _) => 1,
        (_, false) => n - 1,
        (_, true) => n,
    };
    (0..count).map(move |i| Line::new(points[i], points[(i + 1) % n]))
}

/// Squared distance from `pt` to an open polyline.
///
/// Infinite for an empty slice.
pub(crate) fn polyline_distance_sq(points: &[Point], pt: Point) -> f64 {
    segments(points, false)
        .map(|seg| seg.nearest(pt).distance_sq)
        .fold(f64::INFINITY, f64::min)
}

/// Squared distance between two segments; zero when they meet.
pub(crate) fn segment_distance_sq(a: &Line, b: &Line) -> f64 {
    if a.intersects(b) {
        return 0.0;
    }
    a.nearest(b.p0)
        .distance_sq
        .min(a.nearest(b.p1).distance_sq)
        .min(b.nearest(a.p0).distance_sq)
        .min(b.nearest(a.p1).distance_sq)
}
