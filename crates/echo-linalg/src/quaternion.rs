// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Index, Mul, MulAssign, Neg, Sub};

use crate::scalar::{clamp, deg_to_rad, rad_to_deg};
use crate::{telemetry, Matrix3x3, Scalar, Vector3};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * Represents a rotation only when unit length; the type does not enforce
///   it. Normalise after long composition chains or interpolation.
/// * Every angle taken or returned by the public API is in degrees.
/// * `q` and `-q` describe the same rotation (double cover).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion<T> {
    data: [T; 4],
}

/// Single-precision [`Quaternion`].
pub type Quaternionf = Quaternion<f32>;
/// Double-precision [`Quaternion`].
pub type Quaterniond = Quaternion<f64>;

/// Which formula [`Quaternion::from_rotation_matrix`] uses.
///
/// Selection order is fixed: a positive trace wins; otherwise M11 is
/// compared against M22 and M33, then M22 against M33. Ties fall through to
/// the later branch, so a matrix with `M11 == M22 > M33` takes
/// [`RotationBranch::DominantY`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RotationBranch {
    /// `trace > 0`: W is solved first.
    TracePositive,
    /// M11 is the largest diagonal element: X is solved first.
    DominantX,
    /// M22 is the largest remaining diagonal element: Y is solved first.
    DominantY,
    /// Fallback: Z is solved first.
    DominantZ,
}

impl RotationBranch {
    /// Selects the extraction branch for a pure-rotation 3x3 matrix.
    pub fn select<T: Scalar>(m: &Matrix3x3<T>) -> Self {
        let [[m11, _, _], [_, m22, _], [_, _, m33]] = m.rows;
        if m.trace() > T::zero() {
            Self::TracePositive
        } else if m11 > m22 && m11 > m33 {
            Self::DominantX
        } else if m22 > m33 {
            Self::DominantY
        } else {
            Self::DominantZ
        }
    }
}

impl<T> Quaternion<T> {
    /// Creates a quaternion from components.
    ///
    /// Use [`Quaternion::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }
}

impl<T: Scalar> Quaternion<T> {
    /// Returns the identity quaternion.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Builds a quaternion from its vector part and scalar part.
    pub fn from_parts(vector: Vector3<T>, w: T) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), w)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// W (scalar) component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// The `(x, y, z)` vector part.
    pub fn vector_part(&self) -> Vector3<T> {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Returns `true` for the exact identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared norm.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalises in place. A zero quaternion becomes NaN.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the unit quaternion with the same orientation.
    pub fn normalized(self) -> Self {
        let inv = T::one() / self.length();
        self * inv
    }

    /// Conjugate `(-x, -y, -z, w)`; the inverse rotation for unit input.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], self.data[3])
    }

    /// Multiplicative inverse `conjugate / length²`.
    pub fn inverse(&self) -> Self {
        self.conjugate() * (T::one() / self.length_squared())
    }

    /// Constructs a rotation about `axis` by `degrees`.
    ///
    /// The axis is normalised internally. An axis with
    /// `length_squared() == 0` yields the identity quaternion exactly.
    pub fn from_axis_angle(axis: Vector3<T>, degrees: T) -> Self {
        if axis.length_squared() == T::zero() {
            telemetry::zero_rotation_axis("Quaternion::from_axis_angle");
            return Self::identity();
        }
        // Rescale before normalising so large axes do not overflow the length.
        let largest = axis
            .to_array()
            .into_iter()
            .fold(T::zero(), |acc, c| acc.max(c.abs()));
        let axis = (axis / largest).normalized();
        let half = deg_to_rad(degrees) * T::half();
        let (sin_half, cos_half) = half.sin_cos();
        Self::from_parts(axis * sin_half, cos_half)
    }

    /// Rotation from Euler angles in degrees.
    ///
    /// `pitch` rotates about +X, `yaw` about +Y, and `roll` about +Z. The
    /// rotations apply roll first, then pitch, then yaw:
    /// `q = q_yaw * q_pitch * q_roll`.
    pub fn from_euler_angles(pitch: T, yaw: T, roll: T) -> Self {
        let q_roll = Self::from_axis_angle(Vector3::unit_z(), roll);
        let q_pitch = Self::from_axis_angle(Vector3::unit_x(), pitch);
        let q_yaw = Self::from_axis_angle(Vector3::unit_y(), yaw);
        q_yaw * q_pitch * q_roll
    }

    /// Extracts the rotation of a pure-rotation matrix.
    ///
    /// The branch is chosen by [`RotationBranch::select`] so the divisor is
    /// never the smallest available term. The result is normalised.
    /// Matrices carrying scale should go through [`Matrix3x3::rotation`],
    /// which strips it first.
    ///
    /// # Examples
    /// ```
    /// use echo_linalg::{Matrix3x3, Quaternion, Vector3};
    /// let q = Quaternion::from_axis_angle(Vector3::new(0.0_f64, 0.0, 1.0), 180.0);
    /// let m = Matrix3x3::from_quaternion(&q);
    /// let back = Quaternion::from_rotation_matrix(&m);
    /// assert!(back.dot(&q).abs() > 1.0 - 1e-12);
    /// ```
    pub fn from_rotation_matrix(m: &Matrix3x3<T>) -> Self {
        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = m.rows;
        let one = T::one();
        let q = match RotationBranch::select(m) {
            RotationBranch::TracePositive => {
                let s = T::half() / (m.trace() + one).sqrt();
                Self::new(
                    (m23 - m32) * s,
                    (m31 - m13) * s,
                    (m12 - m21) * s,
                    T::quarter() / s,
                )
            }
            RotationBranch::DominantX => {
                let s = T::two() * (one + m11 - m22 - m33).sqrt();
                Self::new(
                    T::quarter() * s,
                    (m12 + m21) / s,
                    (m13 + m31) / s,
                    (m23 - m32) / s,
                )
            }
            RotationBranch::DominantY => {
                let s = T::two() * (one + m22 - m11 - m33).sqrt();
                Self::new(
                    (m12 + m21) / s,
                    T::quarter() * s,
                    (m23 + m32) / s,
                    (m31 - m13) / s,
                )
            }
            RotationBranch::DominantZ => {
                let s = T::two() * (one + m33 - m11 - m22).sqrt();
                Self::new(
                    (m13 + m31) / s,
                    (m23 + m32) / s,
                    T::quarter() * s,
                    (m12 - m21) / s,
                )
            }
        };
        q.normalized()
    }

    /// Equivalent rotation matrix; see [`Matrix3x3::from_quaternion`].
    pub fn to_rotation_matrix(&self) -> Matrix3x3<T> {
        Matrix3x3::from_quaternion(self)
    }

    /// Decomposes a unit quaternion into `(axis, degrees)`.
    ///
    /// Near-identity rotations have no meaningful axis; `+X` is returned with
    /// the (near-zero) angle.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let q = self.normalized();
        let w = clamp(q.w(), -T::one(), T::one());
        let angle = rad_to_deg(T::two() * w.acos());
        let sin_half = (T::one() - w * w).sqrt();
        if sin_half <= T::degenerate_threshold() {
            return (Vector3::unit_x(), angle);
        }
        (q.vector_part() / sin_half, angle)
    }

    /// Rotates `v` by this (unit) quaternion: `q v q*`.
    pub fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let u = self.vector_part();
        let t = u.cross(&v) * T::two();
        v + t * self.w() + u.cross(&t)
    }

    /// Rotation that applies `self` first and `then` second.
    pub fn concatenate(&self, then: &Self) -> Self {
        *then * *self
    }

    /// Normalised linear interpolation along the shorter arc.
    pub fn lerp(self, to: Self, amount: T) -> Self {
        let to = if self.dot(&to) < T::zero() { -to } else { to };
        (self * (T::one() - amount) + to * amount).normalized()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Nearly parallel inputs fall back to normalised linear interpolation.
    pub fn slerp(self, to: Self, amount: T) -> Self {
        let one = T::one();
        let mut cos_omega = self.dot(&to);
        let mut end = to;
        if cos_omega < T::zero() {
            cos_omega = -cos_omega;
            end = -to;
        }
        if cos_omega > one - T::degenerate_threshold() {
            return (self * (one - amount) + end * amount).normalized();
        }
        let omega = cos_omega.acos();
        let inv_sin = one / omega.sin();
        let from_weight = ((one - amount) * omega).sin() * inv_sin;
        let to_weight = (amount * omega).sin() * inv_sin;
        self * from_weight + end * to_weight
    }

    /// Rotation angle in degrees between two unit quaternions.
    pub fn angle_between(&self, other: &Self) -> T {
        let d = clamp(self.dot(other).abs(), T::zero(), T::one());
        rad_to_deg(T::two() * d.acos())
    }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| f(self.data[i], other.data[i])),
        }
    }
}

/// Hamilton product of two quaternions (`self * rhs`).
///
/// The result rotates by `rhs` first and `self` second, so a matrix chain
/// `from_quaternion(a) * from_quaternion(b)` corresponds to `b * a`.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = rhs.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self {
            data: self.data.map(|c| c * rhs),
        }
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            data: self.data.map(|c| -c),
        }
    }
}

impl<T> Index<usize> for Quaternion<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

/// Converts `(x, y, z, w)` verbatim; normalisation is not enforced.
impl<T> From<[T; 4]> for Quaternion<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "({x}, {y}, {z}; {w})")
    }
}
