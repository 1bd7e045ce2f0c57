// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common scalar operations.

#![allow(missing_docs)]

use core::f64::consts::PI;

use arrayvec::ArrayVec;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("planar requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn acos(self) -> Self => acos;
    fn atan2(self, other: Self) -> Self => atan2;
    fn ceil(self) -> Self => ceil;
    fn floor(self) -> Self => floor;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// Linearly interpolate between two scalars.
///
/// `amount` is not clamped, so values outside `0..=1` extrapolate.
///
/// ```
/// use planar::common::lerp;
///
/// assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
/// assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
/// ```
#[inline]
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + amount * (end - start)
}

/// Map `value` from the range `start..end` onto `0..1`.
///
/// This is the inverse of [`lerp`]. A zero-length range produces a
/// non-finite result.
#[inline]
pub fn normalize(value: f64, start: f64, end: f64) -> f64 {
    (value - start) / (end - start)
}

/// Map `value` from one range onto another.
#[inline]
pub fn remap(value: f64, input_start: f64, input_end: f64, output_start: f64, output_end: f64) -> f64 {
    (value - input_start) / (input_end - input_start) * (output_end - output_start) + output_start
}

/// Wrap `value` into the half-open range `min..max`.
///
/// ```
/// use planar::common::wrap;
///
/// assert_eq!(wrap(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(wrap(-90.0, 0.0, 360.0), 270.0);
/// ```
#[inline]
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    value - (max - min) * ((value - min) / (max - min)).floor()
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0, in ascending order.
///
/// If the equation is nearly linear, the root of the linear part is
/// returned alone. When all coefficients are zero, so that every x
/// satisfies the equation, a single `0.0` is returned.
///
/// ```
/// use planar::common::solve_quadratic;
///
/// let roots = solve_quadratic(-4.0, 0.0, 1.0);
/// assert_eq!(roots.as_slice(), &[-2.0, 2.0]);
/// assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
/// ```
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == 0.0 && c1 == 0.0 {
            result.push(0.0);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1 = if !arg.is_finite() {
        // sc1 * sc1 overflowed; take one root of sc1 x + x² = 0 and
        // recover the other from the product of the roots.
        -sc1
    } else {
        if arg < 0.0 {
            return result;
        } else if arg == 0.0 {
            result.push(-0.5 * sc1);
            return result;
        }
        -0.5 * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}

/// Convert an angle in degrees to radians.
#[inline]
pub(crate) fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Convert an angle in radians to degrees.
#[inline]
pub(crate) fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}
