// Copyright 2024 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 4×4 matrices for homogeneous transforms.

use core::ops::{Mul, MulAssign};

use crate::{Line, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 4×4 matrix acting on homogeneous 3D points.
///
/// Cells are stored row-major: the cell at `row`, `col` lives at index
/// `row * 4 + col`, and translation occupies the last column. Points are
/// treated as column vectors, so `(A * B) * p == A * (B * p)`: the
/// right-hand matrix is applied first. [`Matrix4::then`] composes in
/// reading order instead.
///
/// 2D geometry is embedded by placing points at `z = 0`; see the
/// `Mul<Point>` implementation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4([f64; 16]);

impl Matrix4 {
    /// The identity matrix.
    pub const IDENTITY: Matrix4 = Matrix4::scale(1.0, 1.0, 1.0);

    /// Construct a matrix from row-major cells.
    #[inline(always)]
    pub const fn new(cells: [f64; 16]) -> Matrix4 {
        Matrix4(cells)
    }

    /// A matrix representing translation.
    #[inline]
    pub const fn translate(dx: f64, dy: f64, dz: f64) -> Matrix4 {
        Matrix4([
            1.0, 0.0, 0.0, dx, //
            0.0, 1.0, 0.0, dy, //
            0.0, 0.0, 1.0, dz, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// A matrix representing non-uniform scaling about the origin.
    #[inline]
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Matrix4 {
        Matrix4([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// A matrix representing rotation by `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis is used as given. Rotating
    /// about +Z by a positive angle turns +X toward +Y, which is clockwise
    /// on a y-down screen.
    ///
    /// Unlike the shape APIs, this takes radians: it is the raw algebra
    /// underneath the degree-based entry points.
    pub fn rotate(axis: [f64; 3], angle: f64) -> Matrix4 {
        let [mut x, mut y, mut z] = axis;
        let len2 = x * x + y * y + z * z;
        if len2 != 1.0 && len2 != 0.0 {
            let inv_len = len2.sqrt().recip();
            x *= inv_len;
            y *= inv_len;
            z *= inv_len;
        }
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Matrix4([
            x * x * t + c,
            x * y * t - z * s,
            x * z * t + y * s,
            0.0,
            y * x * t + z * s,
            y * y * t + c,
            y * z * t - x * s,
            0.0,
            z * x * t - y * s,
            z * y * t + x * s,
            z * z * t + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// The cell at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is 4 or greater.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) out of range");
        self.0[row * 4 + col]
    }

    /// Get the row-major cells.
    #[inline(always)]
    pub fn as_cells(self) -> [f64; 16] {
        self.0
    }

    /// Compose in reading order: the result applies `self`, then `other`.
    ///
    /// This is `other * self`.
    #[inline]
    #[must_use]
    pub fn then(self, other: Matrix4) -> Matrix4 {
        other * self
    }

    /// The transpose of this matrix.
    #[must_use]
    pub fn transpose(self) -> Matrix4 {
        let m = &self.0;
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = m[row * 4 + col];
            }
        }
        Matrix4(out)
    }

    /// The determinant.
    pub fn determinant(self) -> f64 {
        let c = Cofactors::new(&self.0);
        c.determinant()
    }

    /// Compute the inverse transform.
    ///
    /// Uses the adjugate divided by the determinant. A singular matrix
    /// (for example a camera with zero zoom) is not detected: the result
    /// contains infinite or NaN cells, which [`Matrix4::is_finite`]
    /// reports.
    #[must_use]
    pub fn inverse(self) -> Matrix4 {
        let m = &self.0;
        let c = Cofactors::new(m);
        let inv_det = c.determinant().recip();

        // a{row}{col}, matching the cell layout.
        let (a00, a01, a02, a03) = (m[0], m[1], m[2], m[3]);
        let (a10, a11, a12, a13) = (m[4], m[5], m[6], m[7]);
        let (a20, a21, a22, a23) = (m[8], m[9], m[10], m[11]);
        let (a30, a31, a32, a33) = (m[12], m[13], m[14], m[15]);
        let Cofactors {
            b00,
            b01,
            b02,
            b03,
            b04,
            b05,
            b06,
            b07,
            b08,
            b09,
            b10,
            b11,
        } = c;

        Matrix4([
            (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            (-a01 * b11 + a02 * b10 - a03 * b09) * inv_det,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            (-a21 * b05 + a22 * b04 - a23 * b03) * inv_det,
            (-a10 * b11 + a12 * b08 - a13 * b07) * inv_det,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            (-a30 * b05 + a32 * b02 - a33 * b01) * inv_det,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            (-a00 * b10 + a01 * b08 - a03 * b06) * inv_det,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
            (-a20 * b04 + a21 * b02 - a23 * b00) * inv_det,
            (-a10 * b09 + a11 * b07 - a12 * b06) * inv_det,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
            (-a30 * b03 + a31 * b01 - a32 * b00) * inv_det,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
        ])
    }

    /// Apply the full transform to a homogeneous point with `w = 1`.
    ///
    /// The projective row is ignored; the transforms built here are all
    /// affine.
    #[inline]
    pub fn transform_point3(self, p: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        let [x, y, z] = p;
        [
            m[0] * x + m[1] * y + m[2] * z + m[3],
            m[4] * x + m[5] * y + m[6] * z + m[7],
            m[8] * x + m[9] * y + m[10] * z + m[11],
        ]
    }

    /// Is this matrix [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Is this matrix [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }
}

/// 2×2 sub-determinants shared by the determinant and the adjugate.
#[derive(Clone, Copy)]
struct Cofactors {
    b00: f64,
    b01: f64,
    b02: f64,
    b03: f64,
    b04: f64,
    b05: f64,
    b06: f64,
    b07: f64,
    b08: f64,
    b09: f64,
    b10: f64,
    b11: f64,
}

impl Cofactors {
    fn new(m: &[f64; 16]) -> Self {
        let (a00, a01, a02, a03) = (m[0], m[1], m[2], m[3]);
        let (a10, a11, a12, a13) = (m[4], m[5], m[6], m[7]);
        let (a20, a21, a22, a23) = (m[8], m[9], m[10], m[11]);
        let (a30, a31, a32, a33) = (m[12], m[13], m[14], m[15]);
        Cofactors {
            b00: a00 * a11 - a01 * a10,
            b01: a00 * a12 - a02 * a10,
            b02: a00 * a13 - a03 * a10,
            b03: a01 * a12 - a02 * a11,
            b04: a01 * a13 - a03 * a11,
            b05: a02 * a13 - a03 * a12,
            b06: a20 * a31 - a21 * a30,
            b07: a20 * a32 - a22 * a30,
            b08: a20 * a33 - a23 * a30,
            b09: a21 * a32 - a22 * a31,
            b10: a21 * a33 - a23 * a31,
            b11: a22 * a33 - a23 * a32,
        }
    }

    #[inline]
    fn determinant(&self) -> f64 {
        self.b00 * self.b11 - self.b01 * self.b10 + self.b02 * self.b09 + self.b03 * self.b08
            - self.b04 * self.b07
            + self.b05 * self.b06
    }
}

impl Default for Matrix4 {
    #[inline(always)]
    fn default() -> Matrix4 {
        Matrix4::IDENTITY
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, other: Matrix4) -> Matrix4 {
        let a = &self.0;
        let b = &other.0;
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = a[row * 4] * b[col]
                    + a[row * 4 + 1] * b[4 + col]
                    + a[row * 4 + 2] * b[8 + col]
                    + a[row * 4 + 3] * b[12 + col];
            }
        }
        Matrix4(out)
    }
}

impl MulAssign for Matrix4 {
    #[inline]
    fn mul_assign(&mut self, other: Matrix4) {
        *self = self.mul(other);
    }
}

impl Mul<Point> for Matrix4 {
    type Output = Point;

    /// Map a 2D point, embedded at `z = 0`, and drop the resulting `z`.
    #[inline]
    fn mul(self, other: Point) -> Point {
        let [x, y, _] = self.transform_point3([other.x, other.y, 0.0]);
        Point::new(x, y)
    }
}

impl Mul<Line> for Matrix4 {
    type Output = Line;

    #[inline]
    fn mul(self, other: Line) -> Line {
        Line::new(self * other.p0, self * other.p1)
    }
}

#[cfg(feature = "mint")]
impl From<Matrix4> for mint::RowMatrix4<f64> {
    fn from(m: Matrix4) -> mint::RowMatrix4<f64> {
        let c = m.0;
        let row = |r: usize| mint::Vector4 {
            x: c[r * 4],
            y: c[r * 4 + 1],
            z: c[r * 4 + 2],
            w: c[r * 4 + 3],
        };
        mint::RowMatrix4 {
            x: row(0),
            y: row(1),
            z: row(2),
            w: row(3),
        }
    }
}

#[cfg(feature = "mint")]
impl From<mint::RowMatrix4<f64>> for Matrix4 {
    fn from(m: mint::RowMatrix4<f64>) -> Matrix4 {
        Matrix4([
            m.x.x, m.x.y, m.x.z, m.x.w, //
            m.y.x, m.y.y, m.y.z, m.y.w, //
            m.z.x, m.z.y, m.z.z, m.z.w, //
            m.w.x, m.w.y, m.w.z, m.w.w,
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix4, Point};
    use core::f64::consts::PI;

    const Z: [f64; 3] = [0.0, 0.0, 1.0];

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    fn matrix_assert_near(m0: Matrix4, m1: Matrix4) {
        for (a, b) in m0.as_cells().iter().zip(m1.as_cells()) {
            assert!((a - b).abs() < 1e-9, "{m0:?} != {m1:?}");
        }
    }

    #[test]
    fn matrix_basic() {
        let p = Point::new(3.0, 4.0);

        assert_near(Matrix4::default() * p, p);
        assert_near(Matrix4::scale(2.0, 2.0, 1.0) * p, Point::new(6.0, 8.0));
        assert_near(Matrix4::rotate(Z, 0.0) * p, p);
        assert_near(Matrix4::rotate(Z, PI / 2.0) * p, Point::new(-4.0, 3.0));
        assert_near(
            Matrix4::translate(5.0, 6.0, 0.0) * p,
            Point::new(8.0, 10.0),
        );
    }

    #[test]
    fn rotate_normalizes_axis() {
        matrix_assert_near(
            Matrix4::rotate([0.0, 0.0, 7.0], 1.0),
            Matrix4::rotate(Z, 1.0),
        );
        // A quarter turn about +X takes +Y to +Z.
        let [x, y, z] = Matrix4::rotate([1.0, 0.0, 0.0], PI / 2.0).transform_point3([0.0, 1.0, 0.0]);
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12 && (z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn matrix_mul() {
        let m1 = Matrix4::translate(1.0, 2.0, 3.0) * Matrix4::rotate([1.0, 2.0, 3.0], 0.7);
        let m2 = Matrix4::scale(0.5, 3.0, 2.0) * Matrix4::rotate(Z, -1.3);

        let px = Point::new(1.0, 0.0);
        let py = Point::new(0.0, 1.0);
        let pxy = Point::new(1.0, 1.0);
        let [ax, ay, az] = m1.transform_point3(m2.transform_point3([2.0, -1.0, 0.5]));
        let [bx, by, bz] = (m1 * m2).transform_point3([2.0, -1.0, 0.5]);
        assert!((ax - bx).abs() + (ay - by).abs() + (az - bz).abs() < 1e-9);
        let m2_flat = Matrix4::scale(0.5, 3.0, 1.0) * Matrix4::rotate(Z, -1.3);
        let m1_flat = Matrix4::translate(1.0, 2.0, 0.0) * Matrix4::rotate(Z, 0.7);
        assert_near(m1_flat * (m2_flat * px), (m1_flat * m2_flat) * px);
        assert_near(m1_flat * (m2_flat * py), (m1_flat * m2_flat) * py);
        assert_near(m1_flat * (m2_flat * pxy), (m1_flat * m2_flat) * pxy);
    }

    #[test]
    fn then_reads_left_to_right() {
        let t = Matrix4::translate(10.0, 0.0, 0.0);
        let s = Matrix4::scale(2.0, 2.0, 1.0);
        let p = Point::new(1.0, 1.0);
        // Translate, then scale.
        assert_near(t.then(s) * p, Point::new(22.0, 2.0));
        // Scale, then translate.
        assert_near(s.then(t) * p, Point::new(12.0, 2.0));
    }

    #[test]
    fn matrix_inv() {
        let m = Matrix4::translate(3.0, -7.0, 2.0)
            * Matrix4::rotate([0.3, -1.0, 2.0], 1.1)
            * Matrix4::scale(2.0, 0.5, 4.0);
        matrix_assert_near(m * m.inverse(), Matrix4::IDENTITY);
        matrix_assert_near(m.inverse() * m, Matrix4::IDENTITY);
        matrix_assert_near(m.inverse().inverse(), m);
        assert!((m.determinant() - 4.0).abs() < 1e-9);
        assert!((m.inverse().determinant() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn transpose_round_trip() {
        let m = Matrix4::translate(1.0, 2.0, 3.0) * Matrix4::rotate(Z, 0.4);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().get(3, 0), 1.0);
        assert_eq!(m.get(0, 3), 1.0);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let m = Matrix4::scale(0.0, 0.0, 1.0);
        assert_eq!(m.determinant(), 0.0);
        let inv = m.inverse();
        assert!(!inv.is_finite());
    }
}
