// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{MathError, Scalar};

/// Fixed-size vector of `N` scalar components.
///
/// * Components are `(x, y[, z][, w])`; use the [`Vector2`], [`Vector3`], and
///   [`Vector4`] aliases rather than naming `N` directly.
/// * Value type: every operation returns a new vector or replaces `self` in
///   place.
/// * Under the crate's row-vector convention a point transforms as
///   `v * M`; see [`crate::Matrix`].
///
/// # Examples
/// ```
/// use echo_linalg::Vector3;
/// let a = Vector3::new(1.0_f32, 0.0, 0.0);
/// let b = Vector3::new(0.0_f32, 1.0, 0.0);
/// assert_eq!(a.cross(&b).to_array(), [0.0, 0.0, 1.0]);
/// assert_eq!(a.dot(&b), 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

/// Two-component vector.
pub type Vector2<T> = Vector<T, 2>;
/// Three-component vector.
pub type Vector3<T> = Vector<T, 3>;
/// Four-component vector.
pub type Vector4<T> = Vector<T, 4>;

/// Single-precision [`Vector2`].
pub type Vector2f = Vector2<f32>;
/// Single-precision [`Vector3`].
pub type Vector3f = Vector3<f32>;
/// Single-precision [`Vector4`].
pub type Vector4f = Vector4<f32>;
/// Double-precision [`Vector2`].
pub type Vector2d = Vector2<f64>;
/// Double-precision [`Vector3`].
pub type Vector3d = Vector3<f64>;
/// Double-precision [`Vector4`].
pub type Vector4d = Vector4<f64>;

impl<T, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from its components in `(x, y, z, w)` order.
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Returns the components as an array.
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// The all-ones vector.
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// Checked component read.
    pub fn get(&self, index: usize) -> Result<T, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::OutOfRange { index, len: N })
    }

    /// Checked component write.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::OutOfRange { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared distance between two points.
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Normalises the vector in place.
    ///
    /// No degeneracy guard: a zero vector becomes NaN in every component,
    /// which is how [`crate::Matrix4x4::look_at`] signals colinear input.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// See [`Vector::normalize`] for the zero-length behaviour.
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Returns the unit vector, or `None` when the length is at most
    /// [`crate::scalar::EPSILON`].
    pub fn try_normalized(self) -> Option<Self> {
        let len = self.length();
        if len <= T::degenerate_threshold() {
            return None;
        }
        Some(self / len)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, T::min)
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, T::max)
    }

    /// Component-wise clamp to `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }

    /// Linear interpolation: `self` at `amount = 0`, `to` at `amount = 1`.
    pub fn lerp(self, to: Self, amount: T) -> Self {
        self + (to - self) * amount
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Applies `f` to every component.
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| f(self.data[i])),
        }
    }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| f(self.data[i], other.data[i])),
        }
    }
}

impl<T> Vector<T, 2> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// X component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Unit vector along +X.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Unit vector along +Y.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Appends a Z component.
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.data[0], self.data[1], z)
    }
}

impl<T> Vector<T, 3> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }
}

impl<T: Scalar> Vector<T, 3> {
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

    /// Unit vector along +X.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along +Y.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along +Z.
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends a W component.
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Drops the Z component.
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.data[0], self.data[1])
    }
}

impl<T> Vector<T, 4> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }
}

impl<T: Scalar> Vector<T, 4> {
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

    /// W component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Unit vector along +W.
    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Drops the W component.
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self { data: value }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Component-wise (Hadamard) product.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

/// Component-wise quotient.
impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self.map(|a| a / rhs)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
