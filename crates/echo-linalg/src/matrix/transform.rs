// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scale/rotation/translation builders and TRS decomposition.
//!
//! All builders follow the row-vector convention, so the canonical affine
//! chain is `from_scale(s) * from_axis_angle(axis, deg) * from_translation(t)`.
//! Angles are degrees.

use crate::scalar::deg_to_rad;
use crate::{
    telemetry, Matrix, Matrix2x2, Matrix3x2, Matrix3x3, Matrix4x3, Matrix4x4, Quaternion, Scalar,
    Vector2, Vector3, Vector4,
};

impl<T: Scalar> Matrix2x2<T> {
    /// Anti-clockwise rotation by `degrees`.
    pub fn from_rotation(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::from_rows([[c, s], [-s, c]])
    }

    /// Non-uniform scale.
    pub fn from_scale(scale: Vector2<T>) -> Self {
        Self::from_diagonal(scale)
    }
}

impl<T: Scalar> Matrix3x2<T> {
    /// 2D affine matrix from a linear part and a translation row.
    pub fn from_linear_translation(linear: Matrix2x2<T>, translation: Vector2<T>) -> Self {
        let [r0, r1] = linear.rows;
        Self::from_rows([r0, r1, translation.to_array()])
    }

    /// Translation by `translation`.
    pub fn from_translation(translation: Vector2<T>) -> Self {
        Self::from_linear_translation(Matrix2x2::identity(), translation)
    }

    /// Non-uniform scale.
    pub fn from_scale(scale: Vector2<T>) -> Self {
        Self::from_linear_translation(Matrix2x2::from_scale(scale), Vector2::zero())
    }

    /// Anti-clockwise rotation by `degrees`.
    pub fn from_rotation(degrees: T) -> Self {
        Self::from_linear_translation(Matrix2x2::from_rotation(degrees), Vector2::zero())
    }

    /// Upper 2x2 block.
    pub fn linear(&self) -> Matrix2x2<T> {
        Matrix::from_rows([self.rows[0], self.rows[1]])
    }

    /// Row 3.
    pub fn translation(&self) -> Vector2<T> {
        self.row(2)
    }

    /// Transforms a point, translation included.
    pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
        point.extend(T::one()) * *self
    }

    /// Transforms a direction, translation ignored.
    pub fn transform_direction(&self, direction: Vector2<T>) -> Vector2<T> {
        direction * self.linear()
    }
}

impl<T: Scalar> Matrix3x3<T> {
    /// Non-uniform scale.
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from_diagonal(scale)
    }

    /// Uniform scale.
    pub fn from_uniform_scale(scale: T) -> Self {
        Self::from_diagonal(Vector3::splat(scale))
    }

    /// Rotation about +X, anti-clockwise looking toward the origin.
    pub fn from_rotation_x(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[l, o, o], [o, c, s], [o, -s, c]])
    }

    /// Rotation about +Y, anti-clockwise looking toward the origin.
    pub fn from_rotation_y(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, o, -s], [o, l, o], [s, o, c]])
    }

    /// Rotation about +Z, anti-clockwise looking toward the origin.
    pub fn from_rotation_z(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, s, o], [-s, c, o], [o, o, l]])
    }

    /// Rotation about an arbitrary axis.
    ///
    /// A zero-length axis yields the identity exactly; any other axis is
    /// normalised first.
    pub fn from_axis_angle(axis: Vector3<T>, degrees: T) -> Self {
        if axis.length_squared() == T::zero() {
            telemetry::zero_rotation_axis("Matrix::from_axis_angle");
            return Self::identity();
        }
        Self::from_quaternion(&Quaternion::from_axis_angle(axis, degrees))
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// The input is not normalised; a non-unit quaternion yields a matrix
    /// that also scales.
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        let [x, y, z, w] = q.to_array();
        let one = T::one();
        let two = T::two();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);
        Self::from_rows([
            [one - two * (yy + zz), two * (xy + zw), two * (xz - yw)],
            [two * (xy - zw), one - two * (xx + zz), two * (yz + xw)],
            [two * (xz + yw), two * (yz - xw), one - two * (xx + yy)],
        ])
    }

    /// Rotation from Euler angles; see [`Quaternion::from_euler_angles`].
    pub fn from_euler_angles(pitch: T, yaw: T, roll: T) -> Self {
        Self::from_quaternion(&Quaternion::from_euler_angles(pitch, yaw, roll))
    }

    /// Row lengths, i.e. the scale of a scale-then-rotate matrix.
    pub fn scale(&self) -> Vector3<T> {
        Vector3::new(self.row(0).length(), self.row(1).length(), self.row(2).length())
    }

    /// Rotation with row scale stripped first.
    ///
    /// A zero-length row (a degenerate scale) makes the result NaN.
    pub fn rotation(&self) -> Quaternion<T> {
        let unscaled = Self::from_rows(self.rows.map(|row| {
            let row = Vector3::from_array(row);
            (row / row.length()).to_array()
        }));
        Quaternion::from_rotation_matrix(&unscaled)
    }
}

impl<T: Scalar> Matrix4x3<T> {
    /// Affine matrix from a linear 3x3 block and a translation row.
    pub fn from_linear_translation(linear: Matrix3x3<T>, translation: Vector3<T>) -> Self {
        let [r0, r1, r2] = linear.rows;
        Self::from_rows([r0, r1, r2, translation.to_array()])
    }

    /// Affine matrix with a linear block and no translation.
    pub fn from_linear(linear: Matrix3x3<T>) -> Self {
        Self::from_linear_translation(linear, Vector3::zero())
    }

    /// Upper 3x3 block.
    pub fn linear(&self) -> Matrix3x3<T> {
        Matrix::from_rows([self.rows[0], self.rows[1], self.rows[2]])
    }

    /// Row 4.
    pub fn translation(&self) -> Vector3<T> {
        self.row(3)
    }

    /// Overwrites row 4.
    pub fn set_translation(&mut self, translation: Vector3<T>) {
        self.rows[3] = translation.to_array();
    }

    /// Transforms a point, translation included.
    pub fn transform_point(&self, point: Vector3<T>) -> Vector3<T> {
        point.extend(T::one()) * *self
    }
}

impl<T: Scalar> Matrix4x4<T> {
    /// Embeds a linear 3x3 block with `M44 = 1` and zero translation.
    pub fn from_linear(linear: Matrix3x3<T>) -> Self {
        let o = T::zero();
        let [[a, b, c], [d, e, f], [g, h, i]] = linear.rows;
        Self::from_rows([[a, b, c, o], [d, e, f, o], [g, h, i, o], [o, o, o, T::one()]])
    }

    /// Promotes an affine 4x3 matrix; column 4 becomes `(0, 0, 0, 1)`.
    pub fn from_affine(affine: Matrix4x3<T>) -> Self {
        let mut out = Self::from_linear(affine.linear());
        out.set_translation(affine.translation());
        out
    }

    /// Drops column 4.
    pub fn to_affine(&self) -> Matrix4x3<T> {
        Matrix4x3::from_linear_translation(self.linear(), self.translation())
    }

    /// Upper 3x3 block.
    pub fn linear(&self) -> Matrix3x3<T> {
        Matrix::from_rows(core::array::from_fn(|r| {
            core::array::from_fn(|c| self.rows[r][c])
        }))
    }

    /// Row 4, columns 1..3.
    pub fn translation(&self) -> Vector3<T> {
        self.row(3).truncate()
    }

    /// Overwrites row 4, columns 1..3; M44 is kept.
    pub fn set_translation(&mut self, translation: Vector3<T>) {
        let [x, y, z] = translation.to_array();
        self.rows[3][0] = x;
        self.rows[3][1] = y;
        self.rows[3][2] = z;
    }

    /// Column 4 (M14, M24, M34, M44).
    pub fn projection(&self) -> Vector4<T> {
        self.column(3)
    }

    /// Transforms a point with the homogeneous divide.
    ///
    /// Affine matrices have `w == 1` so the divide is exact; a projected
    /// point with `w == 0` comes back infinite or NaN.
    pub fn transform_point(&self, point: Vector3<T>) -> Vector3<T> {
        let h = point.extend(T::one()) * *self;
        h.truncate() / h.w()
    }
}

macro_rules! impl_affine_builders {
    ($($ty:ident),*) => {$(
        impl<T: Scalar> $ty<T> {
            /// Translation by `translation`.
            pub fn from_translation(translation: Vector3<T>) -> Self {
                let mut out = Self::from_linear(Matrix3x3::identity());
                out.set_translation(translation);
                out
            }

            /// Non-uniform scale.
            pub fn from_scale(scale: Vector3<T>) -> Self {
                Self::from_linear(Matrix3x3::from_scale(scale))
            }

            /// Uniform scale.
            pub fn from_uniform_scale(scale: T) -> Self {
                Self::from_linear(Matrix3x3::from_uniform_scale(scale))
            }

            /// See [`Matrix3x3::from_rotation_x`].
            pub fn from_rotation_x(degrees: T) -> Self {
                Self::from_linear(Matrix3x3::from_rotation_x(degrees))
            }

            /// See [`Matrix3x3::from_rotation_y`].
            pub fn from_rotation_y(degrees: T) -> Self {
                Self::from_linear(Matrix3x3::from_rotation_y(degrees))
            }

            /// See [`Matrix3x3::from_rotation_z`].
            pub fn from_rotation_z(degrees: T) -> Self {
                Self::from_linear(Matrix3x3::from_rotation_z(degrees))
            }

            /// See [`Matrix3x3::from_axis_angle`].
            pub fn from_axis_angle(axis: Vector3<T>, degrees: T) -> Self {
                Self::from_linear(Matrix3x3::from_axis_angle(axis, degrees))
            }

            /// See [`Matrix3x3::from_quaternion`].
            pub fn from_quaternion(q: &Quaternion<T>) -> Self {
                Self::from_linear(Matrix3x3::from_quaternion(q))
            }

            /// See [`Quaternion::from_euler_angles`].
            pub fn from_euler_angles(pitch: T, yaw: T, roll: T) -> Self {
                Self::from_linear(Matrix3x3::from_euler_angles(pitch, yaw, roll))
            }

            /// Row lengths of the upper 3x3 block.
            pub fn scale(&self) -> Vector3<T> {
                self.linear().scale()
            }

            /// Rotation of the upper 3x3 block with scale stripped.
            pub fn rotation(&self) -> Quaternion<T> {
                self.linear().rotation()
            }

            /// Transforms a direction; translation is ignored.
            pub fn transform_direction(&self, direction: Vector3<T>) -> Vector3<T> {
                direction * self.linear()
            }
        }
    )*};
}

impl_affine_builders!(Matrix4x3, Matrix4x4);
