// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D camera mapping between world and screen coordinates.

use crate::common::to_radians;
use crate::{Matrix4, Point};

/// A 2D camera.
///
/// The camera looks at `target` in world space and draws it at `offset`
/// on screen, rotated by `rotation` degrees (clockwise on screen) and
/// scaled by `zoom`.
///
/// A zoom of zero collapses the world to a single point, so the mapping
/// back to world space is undefined; [`Camera2D::screen_to_world`] then
/// returns non-finite coordinates. A negative zoom mirrors the view.
///
/// ```
/// use planar::{Camera2D, Point};
///
/// let camera = Camera2D::new((100.0, 50.0), (400.0, 300.0), 0.0, 2.0);
/// let screen = camera.world_to_screen(Point::new(110.0, 50.0));
/// assert_eq!(screen, Point::new(420.0, 300.0));
/// assert_eq!(camera.screen_to_world(screen), Point::new(110.0, 50.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera2D {
    /// The world point the camera looks at.
    pub target: Point,
    /// Where `target` appears on screen.
    pub offset: Point,
    /// Rotation in degrees, clockwise on screen.
    pub rotation: f64,
    /// Scale factor; 1 is unscaled.
    pub zoom: f64,
}

impl Default for Camera2D {
    /// The identity camera: `target` and `offset` at the origin, no
    /// rotation, zoom 1.
    fn default() -> Self {
        Camera2D::IDENTITY
    }
}

impl Camera2D {
    /// The camera whose mapping leaves every point unchanged.
    pub const IDENTITY: Camera2D = Camera2D {
        target: Point::ZERO,
        offset: Point::ZERO,
        rotation: 0.0,
        zoom: 1.0,
    };

    /// Create a camera.
    #[inline]
    pub fn new(target: impl Into<Point>, offset: impl Into<Point>, rotation: f64, zoom: f64) -> Self {
        Camera2D {
            target: target.into(),
            offset: offset.into(),
            rotation,
            zoom,
        }
    }

    /// The world-to-screen transform.
    ///
    /// Moves `target` to the origin, scales by `zoom`, rotates, then moves
    /// the origin to `offset`. The order is significant.
    pub fn matrix(&self) -> Matrix4 {
        Matrix4::translate(-self.target.x, -self.target.y, 0.0)
            .then(Matrix4::scale(self.zoom, self.zoom, 1.0))
            .then(Matrix4::rotate([0.0, 0.0, 1.0], to_radians(self.rotation)))
            .then(Matrix4::translate(self.offset.x, self.offset.y, 0.0))
    }

    /// The screen-to-world transform.
    ///
    /// Non-finite when the camera is singular, such as with zero zoom.
    #[inline]
    pub fn inverse_matrix(&self) -> Matrix4 {
        self.matrix().inverse()
    }

    /// Map a world point to the screen.
    #[inline]
    pub fn world_to_screen(&self, world: Point) -> Point {
        self.matrix() * world
    }

    /// Map a screen point back to the world.
    ///
    /// For a camera with nonzero zoom this undoes
    /// [`world_to_screen`](Camera2D::world_to_screen) up to rounding.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let inverse = self.inverse_matrix();
        if !inverse.is_finite() {
            tracing::trace!(zoom = self.zoom, "screen_to_world on a singular camera");
        }
        inverse * screen
    }
}
