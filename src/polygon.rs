// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regular polygons and point-in-polygon tests.

use core::ops::{Add, Sub};

use smallvec::SmallVec;

use crate::{GeometryError, Line, Point, Rect, Vec2};

/// A regular polygon: `sides` vertices evenly spaced on a circle.
///
/// The first vertex sits at `rotation` degrees from the positive x axis,
/// and the rest follow clockwise on screen, `360 / sides` degrees apart.
/// The fields are validated on construction, so a value of this type
/// always has at least three sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularPolygon {
    center: Point,
    sides: u32,
    radius: f64,
    rotation: f64,
}

impl RegularPolygon {
    /// Create a regular polygon.
    ///
    /// Fails with [`GeometryError::TooFewSides`] when `sides < 3`, and with
    /// [`GeometryError::NonFinite`] when any other parameter is NaN or
    /// infinite.
    ///
    /// ```
    /// use planar::{GeometryError, Point, RegularPolygon};
    ///
    /// let square = RegularPolygon::new(Point::ZERO, 4, 10.0, 45.0).unwrap();
    /// assert_eq!(square.vertices().len(), 4);
    ///
    /// assert_eq!(
    ///     RegularPolygon::new(Point::ZERO, 2, 10.0, 0.0),
    ///     Err(GeometryError::TooFewSides { sides: 2 })
    /// );
    /// ```
    pub fn new(
        center: impl Into<Point>,
        sides: u32,
        radius: f64,
        rotation: f64,
    ) -> Result<Self, GeometryError> {
        let center = center.into();
        if sides < 3 {
            tracing::debug!(sides, "rejected regular polygon with too few sides");
            return Err(GeometryError::TooFewSides { sides });
        }
        if !(center.is_finite() && radius.is_finite() && rotation.is_finite()) {
            tracing::debug!(?center, radius, rotation, "rejected non-finite regular polygon");
            return Err(GeometryError::NonFinite);
        }
        Ok(RegularPolygon {
            center,
            sides,
            radius,
            rotation,
        })
    }

    /// The center of the circumscribed circle.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The number of sides, at least 3.
    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// The distance from the center to each vertex.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The angle of the first vertex, in degrees.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// The vertices, starting at `rotation` and running clockwise.
    ///
    /// The loop is implicitly closed: the last vertex connects back to the
    /// first.
    pub fn vertices(&self) -> SmallVec<[Point; 8]> {
        let step = 360.0 / f64::from(self.sides);
        (0..self.sides)
            .map(|i| self.center + self.radius * Vec2::from_angle(self.rotation + f64::from(i) * step))
            .collect()
    }

    /// The edges of the closed vertex loop.
    pub fn edges(&self) -> impl Iterator<Item = Line> {
        let vertices = self.vertices();
        let n = vertices.len();
        (0..n).map(move |i| Line::new(vertices[i], vertices[(i + 1) % n]))
    }

    /// Whether `pt` lies inside the polygon or on its boundary.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        polygon_contains(&self.vertices(), pt)
    }

    /// The smallest rectangle enclosing the vertices.
    pub fn bounding_box(&self) -> Rect {
        let vertices = self.vertices();
        vertices
            .iter()
            .fold(Rect::from_points(vertices[0], vertices[0]), |r, &p| r.union_pt(p))
    }
}

impl Add<Vec2> for RegularPolygon {
    type Output = RegularPolygon;

    #[inline]
    fn add(self, v: Vec2) -> RegularPolygon {
        RegularPolygon {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for RegularPolygon {
    type Output = RegularPolygon;

    #[inline]
    fn sub(self, v: Vec2) -> RegularPolygon {
        RegularPolygon {
            center: self.center - v,
            ..self
        }
    }
}

/// The vertices of a regular polygon.
///
/// Shorthand for [`RegularPolygon::new`] followed by
/// [`RegularPolygon::vertices`].
///
/// ```
/// use planar::{regular_polygon_vertices, Point};
///
/// let v = regular_polygon_vertices(Point::ZERO, 4, 10.0, 0.0).unwrap();
/// assert!(v[1].distance(Point::new(0.0, 10.0)) < 1e-9);
/// ```
pub fn regular_polygon_vertices(
    center: impl Into<Point>,
    sides: u32,
    radius: f64,
    rotation: f64,
) -> Result<SmallVec<[Point; 8]>, GeometryError> {
    Ok(RegularPolygon::new(center, sides, radius, rotation)?.vertices())
}

/// Whether `pt` lies inside the closed loop through `vertices`.
///
/// Uses the even-odd rule, so self-intersecting loops alternate between
/// inside and outside. Points on an edge count as inside. An empty slice
/// contains nothing; one or two vertices contain only the points of their
/// edges.
pub fn polygon_contains(vertices: &[Point], pt: Point) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if on_segment(a, b, pt) {
            return true;
        }
        if (a.y > pt.y) != (b.y > pt.y) {
            let x = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if pt.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

// Exact for representable inputs; no tolerance is applied.
fn on_segment(a: Point, b: Point, pt: Point) -> bool {
    (b - a).cross(pt - a) == 0.0 && Rect::from_points(a, b).contains(pt)
}

#[cfg(test)]
mod tests {
    use crate::{polygon_contains, regular_polygon_vertices, GeometryError, Point, RegularPolygon};

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn square_vertices_run_clockwise() {
        let v = regular_polygon_vertices(Point::ZERO, 4, 10.0, 0.0).unwrap();
        assert_eq!(v.len(), 4);
        assert_near(v[0], Point::new(10.0, 0.0));
        assert_near(v[1], Point::new(0.0, 10.0));
        assert_near(v[2], Point::new(-10.0, 0.0));
        assert_near(v[3], Point::new(0.0, -10.0));
    }

    #[test]
    fn rotation_and_center() {
        let hex = RegularPolygon::new((5.0, 5.0), 6, 2.0, 30.0).unwrap();
        let v = hex.vertices();
        assert_eq!(v.len(), 6);
        for p in &v {
            assert!((p.distance(hex.center()) - 2.0).abs() < 1e-12);
        }
        assert_near(v[0], Point::new(5.0 + 3f64.sqrt(), 6.0));
        assert_eq!(hex.edges().count(), 6);
    }

    #[test]
    fn rejects_bad_parameters() {
        for sides in 0..3 {
            assert_eq!(
                RegularPolygon::new(Point::ZERO, sides, 1.0, 0.0),
                Err(GeometryError::TooFewSides { sides })
            );
        }
        assert_eq!(
            RegularPolygon::new(Point::ZERO, 5, f64::INFINITY, 0.0),
            Err(GeometryError::NonFinite)
        );
        assert_eq!(
            RegularPolygon::new((f64::NAN, 0.0), 5, 1.0, 0.0),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    fn contains_regular() {
        let diamond = RegularPolygon::new(Point::ZERO, 4, 10.0, 0.0).unwrap();
        assert!(diamond.contains(Point::ZERO));
        assert!(diamond.contains(Point::new(4.0, 4.0)));
        assert!(!diamond.contains(Point::new(6.0, 6.0)));

        // Axis-aligned square, so boundary points are exact.
        let square = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        assert!(polygon_contains(&square, Point::new(4.0, 2.0)));
        assert!(polygon_contains(&square, Point::new(0.0, 0.0)));
        assert!(!polygon_contains(&square, Point::new(4.5, 2.0)));
    }

    #[test]
    fn contains_concave() {
        // An L shape.
        let l = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(6.0, 4.0),
            Point::new(6.0, 6.0),
            Point::new(0.0, 6.0),
        ];
        assert!(polygon_contains(&l, Point::new(1.0, 1.0)));
        assert!(polygon_contains(&l, Point::new(5.0, 5.0)));
        assert!(!polygon_contains(&l, Point::new(4.0, 2.0)));
        assert!(!polygon_contains(&l, Point::new(-1.0, 5.0)));
        // The ray passes exactly through vertices.
        assert!(polygon_contains(&l, Point::new(1.0, 4.0)));
        assert!(!polygon_contains(&l, Point::new(-1.0, 4.0)));
    }

    #[test]
    fn degenerate_loops() {
        assert!(!polygon_contains(&[], Point::ZERO));
        assert!(polygon_contains(&[Point::new(1.0, 1.0)], Point::new(1.0, 1.0)));
        assert!(!polygon_contains(&[Point::new(1.0, 1.0)], Point::ZERO));
        let seg = [Point::new(0.0, 0.0), Point::new(2.0, 2.0)];
        assert!(polygon_contains(&seg, Point::new(1.0, 1.0)));
        assert!(!polygon_contains(&seg, Point::new(1.0, 0.0)));
    }

    #[test]
    fn bounding_box() {
        let diamond = RegularPolygon::new((1.0, 1.0), 4, 10.0, 0.0).unwrap();
        let bbox = diamond.bounding_box();
        assert!((bbox.x + 9.0).abs() < 1e-9);
        assert!((bbox.width - 20.0).abs() < 1e-9);
    }
}
