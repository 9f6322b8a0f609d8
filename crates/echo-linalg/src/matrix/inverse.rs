// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Determinants and inversion by the adjugate method.
//!
//! Matrix order is bounded at 4, so the classical cofactor expansion is used
//! instead of elimination. Determinants are recomputed on every call.

use crate::{telemetry, Matrix, Matrix2x2, Matrix3x3, Scalar};

/// Determinant and minor access shared by every invertible square shape.
///
/// Implemented for 2x2, 3x3, and 4x4; it is the bound that lets
/// [`Matrix::invert`] be written once for all three orders. The inherent
/// [`Matrix::determinant`] and [`Matrix::minor`] methods are the usual
/// entry points.
pub trait Minors<T> {
    /// Determinant of the whole matrix.
    fn det(&self) -> T;

    /// Determinant of the submatrix left after deleting `row` and `col`
    /// (0-based).
    fn minor_det(&self, row: usize, col: usize) -> T;
}

/// Copies `rows` without `row` and `col` into an `M`×`M` array (`M = N - 1`).
fn strike<T: Scalar, const N: usize, const M: usize>(
    rows: &[[T; N]; N],
    row: usize,
    col: usize,
) -> [[T; M]; M] {
    debug_assert!(M + 1 == N && row < N && col < N);
    let mut out = [[T::zero(); M]; M];
    let kept_rows = rows.iter().enumerate().filter(|&(r, _)| r != row);
    for (dst, (_, src)) in out.iter_mut().zip(kept_rows) {
        let kept = src.iter().enumerate().filter(|&(c, _)| c != col);
        for (cell, (_, &value)) in dst.iter_mut().zip(kept) {
            *cell = value;
        }
    }
    out
}

#[inline]
fn checkerboard<T: Scalar>(row: usize, col: usize, value: T) -> T {
    if (row + col) % 2 == 1 {
        -value
    } else {
        value
    }
}

impl<T: Scalar> Matrix<T, 2, 2> {
    /// Determinant `M11·M22 − M12·M21`.
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Minor of element (`row`, `col`), 0-based: the single element left
    /// after deleting that row and column.
    pub fn minor(&self, row: usize, col: usize) -> T {
        debug_assert!(row < 2 && col < 2);
        self.rows[1 - row][1 - col]
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    /// Determinant by direct expansion along the first row.
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Submatrix without `row` and `col` (0-based).
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix2x2<T> {
        Matrix::from_rows(strike(&self.rows, row, col))
    }

    /// Minor of element (`row`, `col`), 0-based.
    pub fn minor(&self, row: usize, col: usize) -> T {
        self.submatrix(row, col).determinant()
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// Determinant by cofactor expansion along the first row using 3x3
    /// minors.
    ///
    /// Integer-valued inputs of moderate size produce an exact result, so
    /// a matrix with two identical rows yields exactly zero.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, col| {
            acc + self.rows[0][col] * self.cofactor(0, col)
        })
    }

    /// Submatrix without `row` and `col` (0-based).
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix3x3<T> {
        Matrix::from_rows(strike(&self.rows, row, col))
    }

    /// Minor of element (`row`, `col`), 0-based.
    pub fn minor(&self, row: usize, col: usize) -> T {
        self.submatrix(row, col).determinant()
    }
}

macro_rules! impl_minors {
    ($($n:literal),*) => {$(
        impl<T: Scalar> Minors<T> for Matrix<T, $n, $n> {
            fn det(&self) -> T {
                self.determinant()
            }

            fn minor_det(&self, row: usize, col: usize) -> T {
                self.minor(row, col)
            }
        }
    )*};
}

impl_minors!(2, 3, 4);

impl<T: Scalar, const N: usize> Matrix<T, N, N>
where
    Self: Minors<T>,
{
    /// Cofactor of element (`row`, `col`), 0-based: the minor negated when
    /// `row + col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        checkerboard(row, col, self.minor_det(row, col))
    }

    /// Matrix of minors.
    pub fn minors(&self) -> Self {
        Self::from_rows(core::array::from_fn(|r| {
            core::array::from_fn(|c| self.minor_det(r, c))
        }))
    }

    /// Matrix of cofactors.
    pub fn cofactors(&self) -> Self {
        self.minors().signed_checkerboard()
    }

    /// Adjugate: the transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactors().transposed()
    }

    /// Returns `false` when the determinant is exactly zero.
    pub fn is_invertible(&self) -> bool {
        self.det() != T::zero()
    }

    /// Replaces the matrix with its inverse.
    ///
    /// A matrix whose determinant is exactly zero is left unchanged; this is
    /// a no-op, not an error. Check [`Matrix::is_invertible`] or use
    /// [`Matrix::try_inverse`] to detect singular input.
    ///
    /// # Examples
    /// ```
    /// use echo_linalg::Matrix2x2;
    /// let mut m = Matrix2x2::from_rows([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// m.invert();
    /// assert!((m.m(1, 1) - 0.6).abs() < 1e-12);
    /// assert!((m.m(1, 2) + 0.7).abs() < 1e-12);
    ///
    /// let mut singular = Matrix2x2::from_rows([[1.0_f64, 2.0], [2.0, 4.0]]);
    /// singular.invert();
    /// assert_eq!(singular.to_rows(), [[1.0, 2.0], [2.0, 4.0]]);
    /// ```
    pub fn invert(&mut self) {
        let determinant = self.det();
        if determinant == T::zero() {
            telemetry::singular_matrix(N, determinant);
            return;
        }
        let adjugate = self.minors().signed_checkerboard().transposed();
        *self = adjugate * (T::one() / determinant);
    }

    /// Returns the inverted copy; `self` is not modified.
    ///
    /// Singular input returns an unchanged copy, matching [`Matrix::invert`].
    pub fn inverse(&self) -> Self {
        let mut out = *self;
        out.invert();
        out
    }

    /// Returns the inverse, or `None` when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        self.is_invertible().then(|| self.inverse())
    }

    fn signed_checkerboard(self) -> Self {
        Self::from_rows(core::array::from_fn(|r| {
            core::array::from_fn(|c| checkerboard(r, c, self.rows[r][c]))
        }))
    }
}
