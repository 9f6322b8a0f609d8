// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Matrix4x4, Quaternion, Scalar, Vector3};

/// Decomposed affine transform: scale, then rotation, then translation.
///
/// Conventions:
/// - `rotation` is a unit quaternion; it is not re-normalised on
///   construction.
/// - `scale` is non-uniform and applied before rotation and translation.
/// - [`Transform::to_matrix`] builds `S * R * T` under the row-vector
///   convention, which is the composition order [`Transform::from_matrix`]
///   assumes when reading a matrix back.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform<T> {
    translation: Vector3<T>,
    rotation: Quaternion<T>,
    scale: Vector3<T>,
}

/// Single-precision [`Transform`].
pub type Transformf = Transform<f32>;
/// Double-precision [`Transform`].
pub type Transformd = Transform<f64>;

impl<T: Scalar> Transform<T> {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zero(),
            rotation: Quaternion::identity(),
            scale: Vector3::one(),
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub fn new(translation: Vector3<T>, rotation: Quaternion<T>, scale: Vector3<T>) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Reads translation, rotation, and scale back out of a matrix built in
    /// scale → rotate → translate order.
    ///
    /// Column 4 is ignored. Sheared matrices decompose without error but do
    /// not round-trip.
    #[must_use]
    pub fn from_matrix(matrix: &Matrix4x4<T>) -> Self {
        Self {
            translation: matrix.translation(),
            rotation: matrix.rotation(),
            scale: matrix.scale(),
        }
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vector3<T> {
        self.translation
    }

    /// Rotation component.
    #[must_use]
    pub fn rotation(&self) -> Quaternion<T> {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vector3<T> {
        self.scale
    }

    /// Composes the 4x4 matrix `S * R * T`.
    ///
    /// # Examples
    /// ```
    /// use echo_linalg::{Quaternion, Transform, Vector3};
    /// let t = Transform::new(
    ///     Vector3::new(1.0_f64, 2.0, 3.0),
    ///     Quaternion::identity(),
    ///     Vector3::new(2.0, 2.0, 2.0),
    /// );
    /// let p = t.to_matrix().transform_point(Vector3::new(1.0, 1.0, 1.0));
    /// assert_eq!(p.to_array(), [3.0, 4.0, 5.0]);
    /// ```
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4x4<T> {
        let s = Matrix4x4::from_scale(self.scale);
        let r = Matrix4x4::from_quaternion(&self.rotation);
        let t = Matrix4x4::from_translation(self.translation);
        s * r * t
    }

    /// Applies the transform to a point without building the matrix.
    #[must_use]
    pub fn transform_point(&self, point: Vector3<T>) -> Vector3<T> {
        self.rotation.rotate_vector(point * self.scale) + self.translation
    }

    /// Interpolates translation and scale linearly and rotation spherically.
    #[must_use]
    pub fn lerp(&self, to: &Self, amount: T) -> Self {
        Self {
            translation: self.translation.lerp(to.translation, amount),
            rotation: self.rotation.slerp(to.rotation, amount),
            scale: self.scale.lerp(to.scale, amount),
        }
    }
}

impl<T: Scalar> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}
