// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D geometry kernel for interactive graphics.
//!
//! Planar maps points between world and screen space through a 2D camera,
//! evaluates and flattens lines and Bézier curves, builds outlines for
//! regular polygons and ring sectors, and answers hit and overlap
//! questions between primitive shapes. Everything is a plain value type;
//! there is no shared state.
//!
//! Angles are in degrees at every public entry point and increase
//! clockwise on screen, since the y axis points down.
//!
//! # Examples
//!
//! Mapping the cursor into the world:
//! ```
//! use planar::{Camera2D, Point};
//!
//! let camera = Camera2D::new((100.0, 50.0), (400.0, 300.0), 0.0, 2.0);
//! let cursor = Point::new(420.0, 300.0);
//! assert_eq!(camera.screen_to_world(cursor), Point::new(110.0, 50.0));
//! ```
//!
//! Collision tests between primitives:
//! ```
//! use planar::{Circle, Line, Point, Rect};
//!
//! let a = Circle::new((0.0, 0.0), 5.0);
//! assert!(a.overlaps(&Circle::new((8.0, 0.0), 5.0)));
//!
//! let r = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert_eq!(r.intersect(Rect::new(5.0, 5.0, 10.0, 10.0)), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
//!
//! let l = Line::new((0.0, 0.0), (10.0, 0.0));
//! assert_eq!(l.intersection_point(&Line::new((5.0, -5.0), (5.0, 5.0))), Some(Point::new(5.0, 0.0)));
//! ```
//!
//! Mixed shapes go through [`Shape`]:
//! ```
//! use planar::{HitOpts, Point, QuadBez, Shape, Triangle};
//!
//! let curve = Shape::from(QuadBez::new((0.0, 0.0), (10.0, 10.0), (20.0, 0.0)));
//! let tri = Shape::from(Triangle::from_coords((8.0, 0.0), (12.0, 0.0), (10.0, 4.0)));
//! assert!(curve.overlaps_with(&tri, HitOpts::new(3.0)));
//! assert!(curve.hit_test(Point::new(10.0, 5.0), HitOpts::default()));
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of Planar and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types.
//! - `schemars`: Add best-effort support for using Planar types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Planar requires that an allocator is available (i.e. it uses [alloc]).
//!
//! Rejected constructor input is reported through [tracing][] at `debug`
//! level; no subscriber is installed by this crate.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [tracing]: https://docs.rs/tracing

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![allow(
    trivial_numeric_casts,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::missing_assert_message,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::unseparated_literal_suffix,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("planar requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod arc;
mod camera;
mod circle;
mod collision;
pub mod common;
mod cubicbez;
mod error;
mod line;
mod matrix;
mod param_curve;
mod point;
mod polygon;
mod quadbez;
mod rect;
mod ring;
mod shape;
mod triangle;
mod vec2;

pub use crate::arc::Arc;
pub use crate::camera::Camera2D;
pub use crate::circle::Circle;
pub use crate::collision::HitOpts;
pub use crate::cubicbez::CubicBez;
pub use crate::error::GeometryError;
pub use crate::line::{Line, LineIntersection};
pub use crate::matrix::Matrix4;
pub use crate::param_curve::{
    point_at_cubic, point_at_line, point_at_quad, Nearest, ParamCurve, DEFAULT_TOLERANCE,
};
pub use crate::point::Point;
pub use crate::polygon::{polygon_contains, regular_polygon_vertices, RegularPolygon};
pub use crate::quadbez::QuadBez;
pub use crate::rect::Rect;
pub use crate::ring::{ring_outline, Ring};
pub use crate::shape::Shape;
pub use crate::triangle::Triangle;
pub use crate::vec2::Vec2;
