// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Matrix, Scalar, Vector};

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::from_diagonal(Vector::one())
    }

    /// Diagonal matrix with `diagonal` on the main diagonal.
    pub fn from_diagonal(diagonal: Vector<T, N>) -> Self {
        let mut rows = [[T::zero(); N]; N];
        for i in 0..N {
            rows[i][i] = diagonal.data[i];
        }
        Self { rows }
    }

    /// Returns `true` for the exact identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Main diagonal (M11, M22, ...).
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_array(core::array::from_fn(|i| self.rows[i][i]))
    }

    /// Sum of the main diagonal; recomputed on every call.
    pub fn trace(&self) -> T {
        self.diagonal().data.iter().fold(T::zero(), |acc, &d| acc + d)
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix3x3, Matrix4x4};

    #[test]
    fn trace_and_diagonal_track_mutation() {
        let mut m = Matrix3x3::from_rows([[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.trace(), 15.0);
        m[(1, 1)] = -5.0;
        assert_eq!(m.trace(), 5.0);
        assert_eq!(m.diagonal().to_array(), [1.0, -5.0, 9.0]);
    }

    #[test]
    fn in_place_transpose_swaps_off_diagonal() {
        let mut m = Matrix3x3::from_rows([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        m.transpose();
        assert_eq!(m.to_rows(), [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
    }

    #[test]
    fn identity_is_identity() {
        assert!(Matrix4x4::<f32>::identity().is_identity());
        assert!(!Matrix4x4::<f32>::zero().is_identity());
        assert_eq!(Matrix4x4::<f64>::identity().trace(), 4.0);
    }
}
