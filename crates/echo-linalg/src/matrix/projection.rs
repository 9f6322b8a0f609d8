// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Projection and view matrix builders.
//!
//! Every projection builder validates its arguments before constructing
//! anything and reports the first offending parameter as
//! [`MathError::InvalidArgument`]. View space is right-handed (the camera
//! looks down -Z) and clip-space depth maps to `[0, 1]`.

use crate::{telemetry, MathError, Matrix4x4, Scalar, Vector3};

fn reject<T>(
    builder: &'static str,
    parameter: &'static str,
    reason: &'static str,
) -> Result<T, MathError> {
    let err = MathError::InvalidArgument { parameter, reason };
    telemetry::rejected_argument(builder, &err);
    Err(err)
}

fn check_perspective_planes<T: Scalar>(
    builder: &'static str,
    near: T,
    far: T,
) -> Result<(), MathError> {
    if near.is_nan() || near <= T::zero() {
        return reject(builder, "near", "must be positive");
    }
    if far.is_nan() || far <= T::zero() {
        return reject(builder, "far", "must be positive");
    }
    if near >= far {
        return reject(builder, "near", "must be less than far");
    }
    Ok(())
}

fn check_orthographic_depth<T: Scalar>(
    builder: &'static str,
    near: T,
    far: T,
) -> Result<(), MathError> {
    if near.is_nan() || far.is_nan() || near == far {
        return reject(builder, "near", "must differ from far");
    }
    Ok(())
}

/// Depth scale `far / (near - far)`, or exactly `-1` for an infinite far
/// plane.
fn negative_far_range<T: Scalar>(near: T, far: T) -> T {
    if far.is_positive_infinity() {
        -T::one()
    } else {
        far / (near - far)
    }
}

impl<T: Scalar> Matrix4x4<T> {
    /// Orthographic projection of a view volume centred on the view axis.
    ///
    /// # Errors
    /// [`MathError::InvalidArgument`] when `width` or `height` is zero or
    /// `near == far`. NaN never passes a check.
    pub fn orthographic(width: T, height: T, near: T, far: T) -> Result<Self, MathError> {
        const BUILDER: &str = "Matrix4x4::orthographic";
        let zero = T::zero();
        if width.is_nan() || width == zero {
            return reject(BUILDER, "width", "must be non-zero");
        }
        if height.is_nan() || height == zero {
            return reject(BUILDER, "height", "must be non-zero");
        }
        check_orthographic_depth(BUILDER, near, far)?;
        let range = T::one() / (near - far);
        let mut m = Self::zero();
        m.rows[0][0] = T::two() / width;
        m.rows[1][1] = T::two() / height;
        m.rows[2][2] = range;
        m.rows[3][2] = near * range;
        m.rows[3][3] = T::one();
        Ok(m)
    }

    /// Orthographic projection of an arbitrary view-space box.
    ///
    /// # Errors
    /// [`MathError::InvalidArgument`] when `left == right`,
    /// `bottom == top`, or `near == far`. NaN never passes a check.
    pub fn orthographic_off_center(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self, MathError> {
        const BUILDER: &str = "Matrix4x4::orthographic_off_center";
        if left.is_nan() || right.is_nan() || left == right {
            return reject(BUILDER, "left", "must differ from right");
        }
        if bottom.is_nan() || top.is_nan() || bottom == top {
            return reject(BUILDER, "bottom", "must differ from top");
        }
        check_orthographic_depth(BUILDER, near, far)?;
        let range = T::one() / (near - far);
        let mut m = Self::zero();
        m.rows[0][0] = T::two() / (right - left);
        m.rows[1][1] = T::two() / (top - bottom);
        m.rows[2][2] = range;
        m.rows[3][0] = (left + right) / (left - right);
        m.rows[3][1] = (top + bottom) / (bottom - top);
        m.rows[3][2] = near * range;
        m.rows[3][3] = T::one();
        Ok(m)
    }

    /// Perspective projection from the near-plane extent.
    ///
    /// `far` may be `+∞`, which produces the infinite-far-plane matrix.
    ///
    /// # Errors
    /// [`MathError::InvalidArgument`] when `near <= 0`, `far <= 0`, or
    /// `near >= far`, and when either plane is NaN.
    ///
    /// # Examples
    /// ```
    /// use echo_linalg::Matrix4x4;
    /// let m = Matrix4x4::perspective(2.0_f64, 2.0, 1.0, f64::INFINITY).unwrap();
    /// assert_eq!(m.m(3, 3), -1.0);
    /// assert_eq!(m.m(4, 3), -1.0);
    /// assert!(Matrix4x4::perspective(2.0_f64, 2.0, 0.0, 10.0).is_err());
    /// ```
    pub fn perspective(width: T, height: T, near: T, far: T) -> Result<Self, MathError> {
        check_perspective_planes("Matrix4x4::perspective", near, far)?;
        let two_near = T::two() * near;
        Ok(Self::perspective_rows(
            two_near / width,
            two_near / height,
            T::zero(),
            T::zero(),
            near,
            far,
        ))
    }

    /// Perspective projection of an off-axis frustum given by the near-plane
    /// rectangle.
    ///
    /// # Errors
    /// As [`Matrix4x4::perspective`].
    pub fn perspective_off_center(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self, MathError> {
        check_perspective_planes("Matrix4x4::perspective_off_center", near, far)?;
        let two_near = T::two() * near;
        Ok(Self::perspective_rows(
            two_near / (right - left),
            two_near / (top - bottom),
            (left + right) / (right - left),
            (top + bottom) / (top - bottom),
            near,
            far,
        ))
    }

    /// Perspective projection from a vertical field of view in degrees.
    ///
    /// # Errors
    /// [`MathError::InvalidArgument`] when the field of view is outside
    /// `(0, 180)` or the planes fail the [`Matrix4x4::perspective`] checks.
    pub fn perspective_field_of_view(
        field_of_view: T,
        aspect_ratio: T,
        near: T,
        far: T,
    ) -> Result<Self, MathError> {
        const BUILDER: &str = "Matrix4x4::perspective_field_of_view";
        let straight = T::from_literal(180.0);
        if field_of_view.is_nan() || field_of_view <= T::zero() || field_of_view >= straight {
            return reject(BUILDER, "field_of_view", "must be in (0, 180) degrees");
        }
        check_perspective_planes(BUILDER, near, far)?;
        let y_scale = T::one() / (crate::scalar::deg_to_rad(field_of_view) * T::half()).tan();
        let x_scale = y_scale / aspect_ratio;
        Ok(Self::perspective_rows(x_scale, y_scale, T::zero(), T::zero(), near, far))
    }

    fn perspective_rows(x_scale: T, y_scale: T, x_shift: T, y_shift: T, near: T, far: T) -> Self {
        let depth = negative_far_range(near, far);
        let mut m = Self::zero();
        m.rows[0][0] = x_scale;
        m.rows[1][1] = y_scale;
        m.rows[2][0] = x_shift;
        m.rows[2][1] = y_shift;
        m.rows[2][2] = depth;
        m.rows[2][3] = -T::one();
        m.rows[3][2] = near * depth;
        m
    }

    /// Right-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// No validation: when `eye == target` or the view direction is parallel
    /// to `up` the result contains NaN or infinite components. Use
    /// [`Matrix4x4::try_look_at`] to reject such input.
    pub fn look_at(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Self {
        let z = (eye - target).normalized();
        let x = up.cross(&z).normalized();
        Self::view_rows(eye, x, z)
    }

    /// Checked [`Matrix4x4::look_at`].
    ///
    /// # Errors
    /// [`MathError::InvalidArgument`] when `eye` and `target` coincide or
    /// `up` is parallel to the view direction (within
    /// [`crate::scalar::EPSILON`]).
    pub fn try_look_at(
        eye: Vector3<T>,
        target: Vector3<T>,
        up: Vector3<T>,
    ) -> Result<Self, MathError> {
        const BUILDER: &str = "Matrix4x4::try_look_at";
        let Some(z) = (eye - target).try_normalized() else {
            return reject(BUILDER, "target", "must differ from eye");
        };
        let Some(x) = up.cross(&z).try_normalized() else {
            return reject(BUILDER, "up", "must not be parallel to the view direction");
        };
        Ok(Self::view_rows(eye, x, z))
    }

    fn view_rows(eye: Vector3<T>, x: Vector3<T>, z: Vector3<T>) -> Self {
        let y = z.cross(&x);
        let o = T::zero();
        Self::from_rows([
            [x.x(), y.x(), z.x(), o],
            [x.y(), y.y(), z.y(), o],
            [x.z(), y.z(), z.z(), o],
            [-x.dot(&eye), -y.dot(&eye), -z.dot(&eye), T::one()],
        ])
    }
}
