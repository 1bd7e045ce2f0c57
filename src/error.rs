// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by validating constructors.

use core::error::Error as CoreError;
use core::fmt;

/// A caller passed parameters that do not describe a shape.
///
/// Geometric outcomes such as "no intersection" are never errors; this
/// type only reports broken preconditions, returned by constructors like
/// [`RegularPolygon::new`](crate::RegularPolygon::new) and
/// [`Rect::try_new`](crate::Rect::try_new).
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    /// A regular polygon needs at least three sides.
    TooFewSides {
        /// The rejected side count.
        sides: u32,
    },
    /// A rectangle was given a negative width or height.
    NegativeExtent {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
    /// A parameter was NaN or infinite.
    NonFinite,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewSides { sides } => {
                write!(f, "regular polygon needs at least 3 sides, got {sides}")
            }
            GeometryError::NegativeExtent { width, height } => {
                write!(f, "negative rectangle extent {width}x{height}")
            }
            GeometryError::NonFinite => write!(f, "non-finite shape parameter"),
        }
    }
}

impl CoreError for GeometryError {}

#[cfg(test)]
mod tests {
    use super::GeometryError;

    #[test]
    fn display() {
        assert_eq!(
            GeometryError::TooFewSides { sides: 2 }.to_string(),
            "regular polygon needs at least 3 sides, got 2"
        );
        assert_eq!(
            GeometryError::NegativeExtent {
                width: -1.0,
                height: 2.5
            }
            .to_string(),
            "negative rectangle extent -1x2.5"
        );
        assert_eq!(
            GeometryError::NonFinite.to_string(),
            "non-finite shape parameter"
        );
    }

    #[test]
    fn is_error() {
        fn takes_error(_: &dyn core::error::Error) {}
        takes_error(&GeometryError::NonFinite);
    }
}
