// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Small dense matrices from 2x2 to 4x4.
//!
//! The generic [`Matrix`] carries the shape-independent algebra; the
//! submodules add what only some shapes support:
//! - `square`: identity, trace, diagonal, in-place transpose.
//! - `inverse`: determinants, minors, cofactors, adjugate inversion.
//! - `transform`: scale/rotation/translation builders and TRS decomposition.
//! - `projection`: orthographic, perspective, and look-at builders.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{MathError, Scalar, Vector};

mod inverse;
mod projection;
mod square;
mod transform;

pub use inverse::Minors;

/// Row-major `R`×`C` matrix.
///
/// - Stored row-major; [`Matrix::m`] uses the 1-indexed `M{row}{col}` naming
///   (`m(1, 1)` is M11) while `Index<(usize, usize)>` is 0-indexed.
/// - Row-vector convention: points transform as `v * M`, so `A * B` applies
///   `A` first and translation lives in the last row.
/// - No invariant: a matrix need not be square, orthogonal, or invertible.
///
/// # Examples
/// ```
/// use echo_linalg::{Matrix2x3, Matrix3x2};
/// let a = Matrix2x3::from_rows([[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// let b: Matrix3x2<f32> = a.transposed();
/// let product = a * b;
/// assert_eq!(product.m(1, 1), 14.0);
/// assert_eq!(product.m(2, 2), 77.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) rows: [[T; C]; R],
}

/// 2x2 matrix.
pub type Matrix2x2<T> = Matrix<T, 2, 2>;
/// 2x3 matrix.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 2x4 matrix.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;
/// 3x2 matrix (2D affine transform under the row-vector convention).
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3x3 matrix.
pub type Matrix3x3<T> = Matrix<T, 3, 3>;
/// 3x4 matrix.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// 4x2 matrix.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// 4x3 matrix (3D affine transform under the row-vector convention).
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
/// 4x4 matrix.
pub type Matrix4x4<T> = Matrix<T, 4, 4>;

macro_rules! precision_aliases {
    ($($generic:ident => $single:ident, $double:ident;)*) => {$(
        #[doc = concat!("Single-precision [`", stringify!($generic), "`].")]
        pub type $single = $generic<f32>;
        #[doc = concat!("Double-precision [`", stringify!($generic), "`].")]
        pub type $double = $generic<f64>;
    )*};
}

precision_aliases! {
    Matrix2x2 => Matrix2x2f, Matrix2x2d;
    Matrix2x3 => Matrix2x3f, Matrix2x3d;
    Matrix2x4 => Matrix2x4f, Matrix2x4d;
    Matrix3x2 => Matrix3x2f, Matrix3x2d;
    Matrix3x3 => Matrix3x3f, Matrix3x3d;
    Matrix3x4 => Matrix3x4f, Matrix3x4d;
    Matrix4x2 => Matrix4x2f, Matrix4x2d;
    Matrix4x3 => Matrix4x3f, Matrix4x3d;
    Matrix4x4 => Matrix4x4f, Matrix4x4d;
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLUMNS: usize = C;

    /// Creates a matrix from row-major data.
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self { rows }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub fn zero() -> Self {
        Self {
            rows: [[T::zero(); C]; R],
        }
    }

    /// Creates a matrix from column-major data.
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        Self {
            rows: core::array::from_fn(|r| core::array::from_fn(|c| columns[c][r])),
        }
    }

    /// Creates a matrix from row vectors.
    pub fn from_row_vectors(rows: [Vector<T, C>; R]) -> Self {
        Self {
            rows: core::array::from_fn(|r| rows[r].data),
        }
    }

    /// Returns the row-major data.
    pub fn to_rows(self) -> [[T; C]; R] {
        self.rows
    }

    /// Returns the column-major data.
    pub fn to_columns(self) -> [[T; R]; C] {
        self.transposed().rows
    }

    /// Element `M{row}{col}` using 1-based indices.
    ///
    /// Panics when either index is zero or exceeds the shape.
    pub fn m(&self, row: usize, col: usize) -> T {
        self.rows[row - 1][col - 1]
    }

    /// Checked element read using 0-based indices.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MathError> {
        self.try_row(row)?.get(col)
    }

    /// Checked element write using 0-based indices.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MathError> {
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(MathError::OutOfRange { index: row, len: R })?;
        let cell = cells
            .get_mut(col)
            .ok_or(MathError::OutOfRange { index: col, len: C })?;
        *cell = value;
        Ok(())
    }

    /// Row `index` (0-based) as a vector. Panics when out of range.
    pub fn row(&self, index: usize) -> Vector<T, C> {
        Vector::from_array(self.rows[index])
    }

    /// Column `index` (0-based) as a vector. Panics when out of range.
    pub fn column(&self, index: usize) -> Vector<T, R> {
        Vector::from_array(core::array::from_fn(|r| self.rows[r][index]))
    }

    /// Checked row view.
    pub fn try_row(&self, index: usize) -> Result<Vector<T, C>, MathError> {
        self.rows
            .get(index)
            .map(|row| Vector::from_array(*row))
            .ok_or(MathError::OutOfRange { index, len: R })
    }

    /// Checked column view.
    pub fn try_column(&self, index: usize) -> Result<Vector<T, R>, MathError> {
        if index >= C {
            return Err(MathError::OutOfRange { index, len: C });
        }
        Ok(self.column(index))
    }

    /// Returns the transpose; defined for every shape.
    pub fn transposed(&self) -> Matrix<T, C, R> {
        Matrix {
            rows: core::array::from_fn(|r| core::array::from_fn(|c| self.rows[c][r])),
        }
    }

    /// Returns `true` when every element is finite.
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|e| e.is_finite())
    }

    /// Applies `f` to every element.
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self {
            rows: core::array::from_fn(|r| core::array::from_fn(|c| f(self.rows[r][c]))),
        }
    }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            rows: core::array::from_fn(|r| {
                core::array::from_fn(|c| f(self.rows[r][c], other.rows[r][c]))
            }),
        }
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self { rows }
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self.map(|a| a / rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Matrix product `self * rhs` for any compatible shapes.
///
/// Under the row-vector convention the result applies `self` first.
impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        let mut out = [[T::zero(); C]; R];
        for row in 0..R {
            for col in 0..C {
                let mut sum = T::zero();
                for k in 0..K {
                    sum += self.rows[row][k] * rhs.rows[k][col];
                }
                out[row][col] = sum;
            }
        }
        Matrix { rows: out }
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<&Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = *self * *rhs;
    }
}

/// Column-vector product `M * v`.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;
    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::from_array(core::array::from_fn(|r| {
            Vector::from_array(self.rows[r]).dot(&rhs)
        }))
    }
}

/// Row-vector product `v * M`, the convention used by the transform builders.
impl<T: Scalar, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;
    fn mul(self, rhs: Matrix<T, R, C>) -> Vector<T, C> {
        Vector::from_array(core::array::from_fn(|c| rhs.column(c).dot(&self)))
    }
}

impl<T: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Vector::from_array(*row))?;
        }
        write!(f, "]")
    }
}
