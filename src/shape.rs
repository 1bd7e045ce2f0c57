// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of primitive shapes, with hit and overlap tests.

use alloc::vec::Vec;
use core::ops::{Add, Sub};

use crate::collision::{polyline_distance_sq, segment_distance_sq, segments};
use crate::{
    Arc, Circle, CubicBez, HitOpts, Line, ParamCurve, Point, QuadBez, Rect, RegularPolygon, Ring,
    Triangle, Vec2,
};

/// Any of the primitive shapes.
///
/// Rectangles, circles, triangles, polygons and rings are closed and
/// filled. Points, lines, curves and arcs are open; they take up the
/// area swept by a round pen of the [`HitOpts::stroke_width`] in use.
///
/// ```
/// use planar::{Circle, Line, Point, Shape};
///
/// let circle = Shape::from(Circle::new((0.0, 0.0), 5.0));
/// let line = Shape::from(Line::new((-10.0, 5.0), (10.0, 5.0)));
/// assert!(circle.overlaps(&line));
/// assert!(circle.hit_test(Point::new(3.0, 4.0), Default::default()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A single point.
    Point(Point),
    /// A line segment.
    Line(Line),
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A circle.
    Circle(Circle),
    /// A triangle.
    Triangle(Triangle),
    /// A regular polygon.
    Polygon(RegularPolygon),
    /// A quadratic Bézier curve.
    QuadBez(QuadBez),
    /// A cubic Bézier curve.
    CubicBez(CubicBez),
    /// An annular sector.
    Ring(Ring),
    /// An elliptical arc.
    Arc(Arc),
}

impl Shape {
    /// Whether the shape encloses an area.
    pub fn is_closed(&self) -> bool {
        match self {
            Shape::Rect(_)
            | Shape::Circle(_)
            | Shape::Triangle(_)
            | Shape::Polygon(_)
            | Shape::Ring(_) => true,
            Shape::Point(_) | Shape::Line(_) | Shape::QuadBez(_) | Shape::CubicBez(_) | Shape::Arc(_) => {
                false
            }
        }
    }

    /// Whether the shape covers no points at all.
    ///
    /// This is the case for a rectangle with a negative extent and a
    /// circle with a negative radius. Zero-sized shapes are not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Rect(r) => {
                r.width.is_nan() || r.height.is_nan() || r.width < 0.0 || r.height < 0.0
            }
            Shape::Circle(c) => c.is_empty(),
            _ => false,
        }
    }

    /// The smallest rectangle enclosing the shape, ignoring stroke width.
    ///
    /// Rings and arcs report the box of their full circle or ellipse.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Point(p) => Rect::from_points(*p, *p),
            Shape::Line(l) => l.bounding_box(),
            Shape::Rect(r) => *r,
            Shape::Circle(c) => c.bounding_box(),
            Shape::Triangle(t) => t.bounding_box(),
            Shape::Polygon(p) => p.bounding_box(),
            Shape::QuadBez(q) => q.bounding_box(),
            Shape::CubicBez(c) => c.bounding_box(),
            Shape::Ring(r) => r.bounding_box(),
            Shape::Arc(a) => a.bounding_box(),
        }
    }

    /// The shape as a polyline, with curves flattened within `tolerance`.
    ///
    /// For closed shapes the last vertex connects back to the first.
    pub fn outline(&self, tolerance: f64) -> Vec<Point> {
        match self {
            Shape::Point(p) => alloc::vec![*p],
            Shape::Line(l) => alloc::vec![l.p0, l.p1],
            Shape::Rect(r) => r.corners().to_vec(),
            Shape::Circle(c) => c.outline(tolerance),
            Shape::Triangle(t) => t.vertices().to_vec(),
            Shape::Polygon(p) => p.vertices().into_vec(),
            Shape::QuadBez(q) => q.flatten(tolerance),
            Shape::CubicBez(c) => c.flatten(tolerance),
            Shape::Ring(r) => r.outline(tolerance),
            Shape::Arc(a) => a.flatten(tolerance),
        }
    }

    /// Whether `pt` lies on the shape.
    ///
    /// Closed shapes are tested exactly, boundary included. Open shapes
    /// accept points within half the stroke width; Bézier curves are
    /// flattened to `opts.tolerance` first.
    pub fn hit_test(&self, pt: Point, opts: HitOpts) -> bool {
        match self {
            Shape::Point(p) => opts
                .half_width()
                .is_some_and(|half| pt.distance_squared(*p) <= half * half),
            Shape::Line(l) => l.contains_point(pt, opts.stroke_width),
            Shape::Rect(r) => r.contains(pt),
            Shape::Circle(c) => c.contains(pt),
            Shape::Triangle(t) => t.contains(pt),
            Shape::Polygon(p) => p.contains(pt),
            Shape::QuadBez(q) => stroke_contains(&q.flatten(opts.tolerance), pt, opts),
            Shape::CubicBez(c) => stroke_contains(&c.flatten(opts.tolerance), pt, opts),
            Shape::Ring(r) => r.contains(pt),
            Shape::Arc(a) => a.contains(pt, opts.stroke_width),
        }
    }

    /// Whether two shapes share at least one point, with default options.
    ///
    /// The default [`HitOpts`] draws open shapes with a pen one unit wide,
    /// so a point half a unit outside a circle still overlaps it even
    /// though [`Circle::contains`] rejects it. Pass a zero stroke width to
    /// [`Shape::overlaps_with`] for bare geometry.
    ///
    /// See [`Shape::overlaps_with`].
    #[inline]
    pub fn overlaps(&self, other: &Shape) -> bool {
        self.overlaps_with(other, HitOpts::default())
    }

    /// Whether two shapes share at least one point.
    ///
    /// Circle and rectangle pairs, circles against lines or points, and
    /// pairs of lines are tested exactly. Rectangle pairs follow
    /// [`Rect::overlaps`], so rectangles touching along an edge do not
    /// overlap. Every other pair compares polyline outlines: the shapes
    /// overlap when an edge of one comes within reach of an edge of the
    /// other, or when one lies inside the other closed shape.
    ///
    /// The result does not depend on the argument order.
    pub fn overlaps_with(&self, other: &Shape, opts: HitOpts) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let mut reach = 0.0;
        for shape in [self, other] {
            if !shape.is_closed() {
                match opts.half_width() {
                    Some(half) => reach += half,
                    None => return false,
                }
            }
        }
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.overlaps(b),
            (Shape::Rect(a), Shape::Rect(b)) => a.overlaps(*b),
            (Shape::Circle(c), Shape::Rect(r)) | (Shape::Rect(r), Shape::Circle(c)) => {
                c.intersects_rect(r)
            }
            (Shape::Circle(c), Shape::Line(l)) | (Shape::Line(l), Shape::Circle(c)) => {
                Circle::new(c.center, c.radius + reach).intersects_line(l)
            }
            (Shape::Circle(c), Shape::Point(p)) | (Shape::Point(p), Shape::Circle(c)) => {
                Circle::new(c.center, c.radius + reach).contains(*p)
            }
            (Shape::Line(a), Shape::Line(b)) => segment_distance_sq(a, b) <= reach * reach,
            _ => self.outlines_overlap(other, opts, reach),
        }
    }

    fn outlines_overlap(&self, other: &Shape, opts: HitOpts, reach: f64) -> bool {
        let ours = self.outline(opts.tolerance);
        let theirs = other.outline(opts.tolerance);
        if self.is_closed() && theirs.first().is_some_and(|&p| self.hit_test(p, opts)) {
            return true;
        }
        if other.is_closed() && ours.first().is_some_and(|&p| other.hit_test(p, opts)) {
            return true;
        }
        let reach_sq = reach * reach;
        let hit = segments(&ours, self.is_closed()).any(|a| {
            segments(&theirs, other.is_closed()).any(|b| segment_distance_sq(&a, &b) <= reach_sq)
        });
        hit
    }
}

fn stroke_contains(polyline: &[Point], pt: Point, opts: HitOpts) -> bool {
    opts.half_width()
        .is_some_and(|half| polyline_distance_sq(polyline, pt) <= half * half)
}

impl From<Point> for Shape {
    fn from(p: Point) -> Shape {
        Shape::Point(p)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Shape {
        Shape::Line(l)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Shape {
        Shape::Rect(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Shape {
        Shape::Circle(c)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Shape {
        Shape::Triangle(t)
    }
}

impl From<RegularPolygon> for Shape {
    fn from(p: RegularPolygon) -> Shape {
        Shape::Polygon(p)
    }
}

impl From<QuadBez> for Shape {
    fn from(q: QuadBez) -> Shape {
        Shape::QuadBez(q)
    }
}

impl From<CubicBez> for Shape {
    fn from(c: CubicBez) -> Shape {
        Shape::CubicBez(c)
    }
}

impl From<Ring> for Shape {
    fn from(r: Ring) -> Shape {
        Shape::Ring(r)
    }
}

impl From<Arc> for Shape {
    fn from(a: Arc) -> Shape {
        Shape::Arc(a)
    }
}

impl Add<Vec2> for Shape {
    type Output = Shape;

    fn add(self, v: Vec2) -> Shape {
        match self {
            Shape::Point(p) => Shape::Point(p + v),
            Shape::Line(l) => Shape::Line(l + v),
            Shape::Rect(r) => Shape::Rect(r + v),
            Shape::Circle(c) => Shape::Circle(c + v),
            Shape::Triangle(t) => Shape::Triangle(t + v),
            Shape::Polygon(p) => Shape::Polygon(p + v),
            Shape::QuadBez(q) => Shape::QuadBez(q + v),
            Shape::CubicBez(c) => Shape::CubicBez(c + v),
            Shape::Ring(r) => Shape::Ring(r + v),
            Shape::Arc(a) => Shape::Arc(a + v),
        }
    }
}

impl Sub<Vec2> for Shape {
    type Output = Shape;

    #[inline]
    fn sub(self, v: Vec2) -> Shape {
        self + (-v)
    }
}
