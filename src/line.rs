// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::{Add, Sub};

use crate::{Nearest, ParamCurve, Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single line segment.
///
/// A line whose endpoints coincide is degenerate; every operation on it
/// behaves as if it were the single point `p0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

/// How two line segments meet.
///
/// Returned by [`Line::intersect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineIntersection {
    /// The segments share no point.
    None,
    /// The segments meet at exactly one point.
    Point(Point),
    /// The segments are collinear and share this sub-segment.
    ///
    /// The overlap runs in the direction of the segment `intersect` was
    /// called on.
    Overlap(Line),
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Create a line from raw endpoint coordinates.
    #[inline(always)]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line {
            p0: Point::new(x1, y1),
            p1: Point::new(x2, y2),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Whether both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    /// Find the position on the segment nearest to `p`.
    ///
    /// The projection is clamped to the segment, so points beyond either
    /// end measure to that endpoint.
    #[inline]
    pub fn nearest(&self, p: Point) -> Nearest {
        let d = self.p1 - self.p0;
        let v = p - self.p0;

        // Projection parameter of `p` onto s(t) = (1-t) * p0 + t * p1.
        //
        // This is infinite or NaN when the segment has zero length; the
        // clamp below maps both to 0, leaving the distance to `p0`.
        let t = d.dot(v) / d.hypot2();

        #[expect(
            clippy::manual_clamp,
            reason = "`clamp` propagates NaN; chained `max` and `min` map it to 0"
        )]
        let t = { t.max(0.).min(1.) };

        let distance_sq = (v - t * d).hypot2();

        Nearest { distance_sq, t }
    }

    /// Distance from `p` to the closest point of the segment.
    #[inline]
    pub fn distance_to(&self, p: Point) -> f64 {
        self.nearest(p).distance_sq.sqrt()
    }

    /// Whether `p` lies on this segment drawn with the given stroke
    /// `thickness`.
    ///
    /// True when the distance from `p` to the segment (not the infinite
    /// line) is at most `thickness / 2`. A zero thickness only accepts
    /// points exactly on the segment.
    ///
    /// ```
    /// use planar::{Line, Point};
    ///
    /// let line = Line::new((0.0, 0.0), (10.0, 0.0));
    /// assert!(line.contains_point(Point::new(5.0, 2.0), 4.0));
    /// assert!(!line.contains_point(Point::new(5.0, 2.5), 4.0));
    /// assert!(!line.contains_point(Point::new(13.0, 0.0), 4.0));
    /// ```
    #[inline]
    pub fn contains_point(&self, p: Point, thickness: f64) -> bool {
        let half = 0.5 * thickness;
        half >= 0.0 && self.nearest(p).distance_sq <= half * half
    }

    /// Computes the point where two lines, if extended to infinity, would cross.
    ///
    /// Returns `None` for parallel lines, including collinear ones.
    pub fn crossing_point(self, other: Line) -> Option<Point> {
        let ab = self.p1 - self.p0;
        let cd = other.p1 - other.p0;
        let pcd = ab.cross(cd);
        if pcd == 0.0 {
            return None;
        }
        let h = ab.cross(self.p0 - other.p0) / pcd;
        Some(other.p0 + cd * h)
    }

    /// Intersect two segments.
    ///
    /// Segments that cross or touch at a single point report that point.
    /// Collinear segments sharing more than a point report the shared
    /// sub-segment as [`LineIntersection::Overlap`]. Parallel segments and
    /// segments that would only meet if extended report
    /// [`LineIntersection::None`].
    ///
    /// The parallel test is exact; nearly parallel segments are solved
    /// as crossing segments.
    pub fn intersect(&self, other: &Line) -> LineIntersection {
        let r = self.p1 - self.p0;
        let s = other.p1 - other.p0;
        let qp = other.p0 - self.p0;

        let rr = r.hypot2();
        let ss = s.hypot2();
        if rr == 0.0 {
            return if other.nearest(self.p0).distance_sq == 0.0 {
                LineIntersection::Point(self.p0)
            } else {
                LineIntersection::None
            };
        }
        if ss == 0.0 {
            return if self.nearest(other.p0).distance_sq == 0.0 {
                LineIntersection::Point(other.p0)
            } else {
                LineIntersection::None
            };
        }

        let denom = r.cross(s);
        if denom == 0.0 {
            if qp.cross(r) != 0.0 {
                // Parallel, on different lines.
                return LineIntersection::None;
            }
            return self.collinear_overlap(other);
        }

        let t = qp.cross(s) / denom;
        let u = qp.cross(r) / denom;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            LineIntersection::Point(self.eval(t))
        } else {
            LineIntersection::None
        }
    }

    /// The single point where two segments meet, if there is one.
    ///
    /// Collinear segments that overlap along a stretch have no single
    /// intersection point and return `None`; use [`Line::intersect`] to
    /// recover the overlap.
    ///
    /// ```
    /// use planar::{Line, Point};
    ///
    /// let a = Line::new((0.0, 0.0), (10.0, 0.0));
    /// let b = Line::new((5.0, -5.0), (5.0, 5.0));
    /// assert_eq!(a.intersection_point(&b), Some(Point::new(5.0, 0.0)));
    /// ```
    pub fn intersection_point(&self, other: &Line) -> Option<Point> {
        match self.intersect(other) {
            LineIntersection::Point(p) => Some(p),
            LineIntersection::None | LineIntersection::Overlap(_) => None,
        }
    }

    /// Whether two segments share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Line) -> bool {
        !matches!(self.intersect(other), LineIntersection::None)
    }

    // Both segments are non-degenerate and lie on the same infinite line.
    fn collinear_overlap(&self, other: &Line) -> LineIntersection {
        let r = self.p1 - self.p0;
        let rr = r.hypot2();
        let t0 = (other.p0 - self.p0).dot(r) / rr;
        let t1 = (other.p1 - self.p0).dot(r) / rr;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        tracing::trace!(lo, hi, "collinear segments");
        if lo > hi {
            LineIntersection::None
        } else if lo == hi {
            LineIntersection::Point(self.eval(lo))
        } else {
            LineIntersection::Overlap(Line::new(self.eval(lo), self.eval(hi)))
        }
    }

    /// The smallest rectangle enclosing both endpoints.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }

    /// Is this line [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl From<(Point, Vec2)> for Line {
    #[inline(always)]
    fn from((origin, displacement): (Point, Vec2)) -> Self {
        Line::new(origin, origin + displacement)
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p1
    }

    #[inline(always)]
    fn flatten_count(&self, _tolerance: f64) -> usize {
        1
    }
}

impl Add<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn add(self, v: Vec2) -> Line {
        Line::new(self.p0 + v, self.p1 + v)
    }
}

impl Sub<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn sub(self, v: Vec2) -> Line {
        Line::new(self.p0 - v, self.p1 - v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, LineIntersection, ParamCurve, Point, Vec2};

    #[test]
    fn line_reversed() {
        let l = Line::new((0.0, 0.0), (1.0, 1.0));
        let f = l.reversed();

        assert_eq!(l.p0, f.p1);
        assert_eq!(l.p1, f.p0);

        // Reversing it again should result in the original line
        assert_eq!(l, f.reversed());
    }

    #[test]
    fn line_midpoint() {
        let l = Line::new((0.0, 0.0), (2.0, 4.0));
        assert_eq!(l.midpoint(), Point::new(1.0, 2.0));
    }

    #[test]
    fn line_nearest() {
        const EPSILON: f64 = 1e-9;

        let line = Line::new((-4., 0.), (2., 1.));

        // Projects onto the line segment end point.
        let point = Point::new(4., 0.);
        let nearest = line.nearest(point);
        assert_eq!(nearest.t, 1.);
        assert!((nearest.distance_sq - line.p1.distance_squared(point)).abs() < EPSILON);

        // Projects onto the line segment start point.
        let point = Point::new(0., -50.);
        let nearest = line.nearest(point);
        assert_eq!(nearest.t, 0.);
        assert!((nearest.distance_sq - line.p0.distance_squared(point)).abs() < EPSILON);

        // Projects onto the line segment proper.
        let point = Point::new(-1., 0.5);
        let nearest = line.nearest(point);
        assert!(nearest.t > 0. && nearest.t < 1.);
        assert!(
            (line.eval(nearest.t).distance_squared(point) - nearest.distance_sq).abs() < EPSILON
        );
        assert!(line.eval(nearest.t * 0.95).distance_squared(point) > nearest.distance_sq);
        assert!(line.eval(nearest.t * 1.05).distance_squared(point) > nearest.distance_sq);
    }

    #[test]
    fn degenerate_line_is_a_point() {
        let l = Line::new((3.0, 3.0), (3.0, 3.0));
        assert!(l.is_degenerate());
        let nearest = l.nearest(Point::new(6.0, 7.0));
        assert_eq!(nearest.t, 0.0);
        assert_eq!(nearest.distance_sq, 25.0);
        assert!(l.contains_point(Point::new(3.0, 4.0), 2.0));
        assert!(!l.contains_point(Point::new(3.0, 4.5), 2.0));
        assert!(l.contains_point(Point::new(3.0, 3.0), 0.0));
    }

    #[test]
    fn contains_point_clamps_to_segment() {
        let l = Line::new((0.0, 0.0), (10.0, 0.0));
        assert!(l.contains_point(Point::new(0.0, 0.0), 0.0));
        assert!(l.contains_point(Point::new(-1.0, 0.0), 2.0));
        assert!(!l.contains_point(Point::new(-1.5, 0.0), 2.0));
        assert!(!l.contains_point(Point::new(5.0, 0.0), -1.0));
    }

    #[test]
    fn crossing_segments() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let b = Line::new((5.0, -5.0), (5.0, 5.0));
        assert_eq!(a.intersect(&b), LineIntersection::Point(Point::new(5.0, 0.0)));
        assert_eq!(b.intersect(&a), LineIntersection::Point(Point::new(5.0, 0.0)));

        let diag = Line::new((0.0, 0.0), (4.0, 4.0));
        let anti = Line::new((0.0, 4.0), (4.0, 0.0));
        assert_eq!(diag.intersection_point(&anti), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn segments_that_only_meet_when_extended() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let b = Line::new((5.0, 1.0), (5.0, 5.0));
        assert_eq!(a.intersect(&b), LineIntersection::None);
        assert!(a.crossing_point(b).is_some());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_endpoints() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let b = Line::new((10.0, 0.0), (10.0, 10.0));
        assert_eq!(a.intersection_point(&b), Some(Point::new(10.0, 0.0)));
    }

    #[test]
    fn parallel_segments() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let b = Line::new((0.0, 1.0), (10.0, 1.0));
        assert_eq!(a.intersect(&b), LineIntersection::None);
        assert_eq!(a.crossing_point(b), None);
    }

    #[test]
    fn collinear_segments() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));

        let overlapping = Line::new((15.0, 0.0), (5.0, 0.0));
        assert_eq!(
            a.intersect(&overlapping),
            LineIntersection::Overlap(Line::new((5.0, 0.0), (10.0, 0.0)))
        );
        assert_eq!(a.intersection_point(&overlapping), None);
        assert!(a.intersects(&overlapping));

        let touching = Line::new((10.0, 0.0), (20.0, 0.0));
        assert_eq!(
            a.intersect(&touching),
            LineIntersection::Point(Point::new(10.0, 0.0))
        );

        let disjoint = Line::new((11.0, 0.0), (20.0, 0.0));
        assert_eq!(a.intersect(&disjoint), LineIntersection::None);

        assert_eq!(a.intersect(&a), LineIntersection::Overlap(a));
    }

    #[test]
    fn degenerate_segment_intersection() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let on = Line::new((4.0, 0.0), (4.0, 0.0));
        let off = Line::new((4.0, 1.0), (4.0, 1.0));
        assert_eq!(a.intersect(&on), LineIntersection::Point(Point::new(4.0, 0.0)));
        assert_eq!(on.intersect(&a), LineIntersection::Point(Point::new(4.0, 0.0)));
        assert_eq!(a.intersect(&off), LineIntersection::None);
        assert_eq!(on.intersect(&on), LineIntersection::Point(Point::new(4.0, 0.0)));
    }

    #[test]
    fn translate() {
        let l = Line::new((1.0, 1.0), (2.0, 3.0)) + Vec2::new(1.0, -1.0);
        assert_eq!(l, Line::new((2.0, 0.0), (3.0, 2.0)));
    }
}
