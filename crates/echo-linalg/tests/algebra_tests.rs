// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_linalg::scalar::{clamp, deg_to_rad, rad_to_deg};
use echo_linalg::{
    MathError, Matrix2x3, Matrix3x2, Matrix3x3, Matrix4x2, Matrix4x4f, Scalar, Vector2, Vector3,
    Vector3f, Vector4,
};

#[test]
fn one_implementation_serves_both_precisions() {
    fn trace_of_rotation<T: Scalar>(degrees: T) -> T {
        Matrix3x3::from_rotation_z(degrees).trace()
    }
    assert!((trace_of_rotation(60.0_f32) - 2.0).abs() < 1e-6);
    assert!((trace_of_rotation(60.0_f64) - 2.0).abs() < 1e-15);
}

#[test]
fn one_based_accessor_matches_zero_based_index() {
    let m = Matrix4x4f::from_rows([
        [11.0, 12.0, 13.0, 14.0],
        [21.0, 22.0, 23.0, 24.0],
        [31.0, 32.0, 33.0, 34.0],
        [41.0, 42.0, 43.0, 44.0],
    ]);
    assert_eq!(m.m(2, 3), 23.0);
    assert_eq!(m[(1, 2)], 23.0);
    assert_eq!(m.get(3, 3), Ok(44.0));
    assert_eq!(m.get(4, 0), Err(MathError::OutOfRange { index: 4, len: 4 }));
    assert_eq!(m.row(3).to_array(), [41.0, 42.0, 43.0, 44.0]);
    assert_eq!(m.column(0).to_array(), [11.0, 21.0, 31.0, 41.0]);
    assert!(m.try_column(4).is_err());
}

#[test]
fn rectangular_products_have_the_expected_shape() {
    let a = Matrix4x2::from_rows([[1.0_f64, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, -1.0]]);
    let b = Matrix2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let c = a * b;
    assert_eq!(c.row(2).to_array(), [5.0, 7.0, 9.0]);
    assert_eq!(c.row(3).to_array(), [-2.0, -1.0, 0.0]);
    let t: Matrix3x2<f64> = b.transposed();
    assert_eq!(t.to_columns(), b.to_rows());
}

#[test]
fn row_and_column_vector_products_differ() {
    let m = Matrix3x3::from_rows([[1.0_f32, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let v = Vector3::new(1.0_f32, 1.0, 1.0);
    assert_eq!((v * m).to_array(), [1.0, 3.0, 1.0]);
    assert_eq!((m * v).to_array(), [3.0, 1.0, 1.0]);
}

#[test]
fn matrix_arithmetic_is_componentwise() {
    let a = Matrix3x3::from_rows([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let i = Matrix3x3::identity();
    assert_eq!((a + i).trace(), 18.0);
    assert_eq!(a - a, Matrix3x3::zero());
    assert_eq!((a * 2.0).m(3, 3), 18.0);
    assert_eq!((a / 2.0).m(1, 2), 1.0);
    assert_eq!((-a).m(2, 1), -4.0);
    let mut b = a;
    b *= i;
    assert_eq!(b, a);
    let planar = Matrix3x2::from_rows([[1.0_f32, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    assert_eq!(planar.to_string(), "[(1, 2), (3, 4), (5, 6)]");
}

#[test]
fn vector_basics() {
    let a = Vector3f::new(3.0, 4.0, 0.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(a.length_squared(), 25.0);
    assert_eq!(a.normalized().to_array(), [0.6, 0.8, 0.0]);
    assert_eq!(Vector3f::zero().try_normalized(), None);
    assert!(!Vector3f::zero().normalized().is_finite());
    assert_eq!(a.distance(&Vector3::new(3.0, 0.0, 0.0)), 4.0);
    assert_eq!(
        a.clamp(Vector3::splat(0.0), Vector3::splat(3.5)).to_array(),
        [3.0, 3.5, 0.0]
    );
    assert_eq!(a.lerp(Vector3::zero(), 0.5).to_array(), [1.5, 2.0, 0.0]);
    assert_eq!((2.0_f32 * a).to_array(), [6.0, 8.0, 0.0]);
    assert_eq!(a.to_string(), "(3, 4, 0)");
}

#[test]
fn vector_widening_and_narrowing() {
    let v = Vector2::new(1.0_f64, 2.0).extend(3.0).extend(4.0);
    assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(v.truncate().truncate(), Vector2::new(1.0, 2.0));
    assert_eq!(Vector3::<f64>::unit_x().cross(&Vector3::unit_y()), Vector3::unit_z());
}

#[test]
fn scalar_helpers() {
    assert_eq!(clamp(5.0_f32, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0_f64, -1.0, 1.0), -1.0);
    assert!((deg_to_rad(180.0_f64) - core::f64::consts::PI).abs() < 1e-15);
    assert!((rad_to_deg(core::f32::consts::FRAC_PI_2) - 90.0).abs() < 1e-4);
    assert_eq!(f32::from_int(3), Some(3.0));
}
