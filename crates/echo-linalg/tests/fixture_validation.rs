// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Reference-value harness for inversion, rotation builders, and projection.
//!
//! Every fixture is evaluated at both precisions: `f64` against the file's
//! tolerance and `f32` against a looser single-precision tolerance.

#![allow(missing_docs)]

use once_cell::sync::Lazy;
use serde::Deserialize;

use echo_linalg::{Matrix, Matrix4x4, Quaternion, Scalar, Vector3};

static RAW_FIXTURES: &str = include_str!("fixtures/linalg-fixtures.json");

static FIXTURES: Lazy<LinalgFixtures> = Lazy::new(|| {
    let fixtures: LinalgFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse linalg fixtures");
    fixtures.validate();
    fixtures
});

const SINGLE: Tolerance = Tolerance {
    absolute: 1e-5,
    relative: 1e-5,
};

#[derive(Debug, Deserialize)]
struct LinalgFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    inversion: Vec<InversionFixture>,
    axis_angle: Vec<AxisAngleFixture>,
    euler: Vec<EulerFixture>,
    perspective_field_of_view: Vec<FieldOfViewFixture>,
    look_at: Vec<LookAtFixture>,
}

impl LinalgFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "linalg fixtures set '{name}' must not be empty");
        }

        ensure("inversion", &self.inversion);
        ensure("axis_angle", &self.axis_angle);
        ensure("euler", &self.euler);
        ensure("perspective_field_of_view", &self.perspective_field_of_view);
        ensure("look_at", &self.look_at);
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f64,
    #[serde(default = "Tolerance::default_relative")]
    relative: f64,
}

impl Tolerance {
    const fn default_absolute() -> f64 {
        1e-9
    }

    const fn default_relative() -> f64 {
        1e-9
    }

    fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InversionFixture {
    matrix: Vec<Vec<f64>>,
    determinant: f64,
    inverse: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct AxisAngleFixture {
    axis: [f64; 3],
    degrees: f64,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct EulerFixture {
    pitch: f64,
    yaw: f64,
    roll: f64,
    quaternion: [f64; 4],
    matrix: [[f64; 3]; 3],
}

#[derive(Debug, Deserialize)]
struct FieldOfViewFixture {
    field_of_view: f64,
    aspect_ratio: f64,
    near: f64,
    far: f64,
    expected: [[f64; 4]; 4],
}

#[derive(Debug, Deserialize)]
struct LookAtFixture {
    eye: [f64; 3],
    target: [f64; 3],
    up: [f64; 3],
    expected: [[f64; 4]; 4],
}

fn cast<T: Scalar>(value: f64) -> T {
    T::from_literal(value)
}

fn vec3<T: Scalar>(v: [f64; 3]) -> Vector3<T> {
    Vector3::new(cast(v[0]), cast(v[1]), cast(v[2]))
}

fn square<T: Scalar, const N: usize>(rows: &[Vec<f64>]) -> Matrix<T, N, N> {
    assert_eq!(rows.len(), N, "fixture matrix must be {N}x{N}");
    Matrix::from_rows(core::array::from_fn(|r| {
        assert_eq!(rows[r].len(), N, "fixture matrix must be {N}x{N}");
        core::array::from_fn(|c| cast(rows[r][c]))
    }))
}

fn assert_scalar<T: Scalar>(actual: T, expected: f64, tol: &Tolerance, ctx: &str) {
    let actual = actual.to_f64().expect("scalar converts to f64");
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_rows<T: Scalar, const R: usize, const C: usize>(
    actual: &Matrix<T, R, C>,
    expected: &[[f64; C]; R],
    tol: &Tolerance,
    ctx: &str,
) {
    for (r, row) in expected.iter().enumerate() {
        for (c, &e) in row.iter().enumerate() {
            assert_scalar(actual[(r, c)], e, tol, &format!("{ctx}[{r}][{c}]"));
        }
    }
}

fn check_inversion<T: Scalar>(tol: &Tolerance) {
    for (i, fx) in FIXTURES.inversion.iter().enumerate() {
        let ctx = format!("inversion[{i}]");
        match fx.matrix.len() {
            2 => check_inverse_of::<T, 2>(fx, tol, &ctx),
            3 => check_inverse_of::<T, 3>(fx, tol, &ctx),
            4 => check_inverse_of::<T, 4>(fx, tol, &ctx),
            n => panic!("{ctx}: unsupported order {n}"),
        }
    }
}

fn check_inverse_of<T: Scalar, const N: usize>(
    fx: &InversionFixture,
    tol: &Tolerance,
    ctx: &str,
) where
    Matrix<T, N, N>: echo_linalg::Minors<T>,
{
    let m: Matrix<T, N, N> = square(&fx.matrix);
    assert_scalar(
        echo_linalg::Minors::det(&m),
        fx.determinant,
        tol,
        &format!("{ctx}.determinant"),
    );
    let expected: [[f64; N]; N] =
        core::array::from_fn(|r| core::array::from_fn(|c| fx.inverse[r][c]));
    assert_rows(&m.inverse(), &expected, tol, &format!("{ctx}.inverse"));
}

fn check_axis_angle<T: Scalar>(tol: &Tolerance) {
    for (i, fx) in FIXTURES.axis_angle.iter().enumerate() {
        let q = Quaternion::<T>::from_axis_angle(vec3(fx.axis), cast(fx.degrees));
        for (k, (&a, &e)) in q.to_array().iter().zip(fx.expected.iter()).enumerate() {
            assert_scalar(a, e, tol, &format!("axis_angle[{i}][{k}]"));
        }
    }
}

fn check_euler<T: Scalar>(tol: &Tolerance) {
    for (i, fx) in FIXTURES.euler.iter().enumerate() {
        let (p, y, r) = (cast::<T>(fx.pitch), cast::<T>(fx.yaw), cast::<T>(fx.roll));
        let q = Quaternion::from_euler_angles(p, y, r);
        for (k, (&a, &e)) in q.to_array().iter().zip(fx.quaternion.iter()).enumerate() {
            assert_scalar(a, e, tol, &format!("euler[{i}].quaternion[{k}]"));
        }
        let m = echo_linalg::Matrix3x3::from_euler_angles(p, y, r);
        assert_rows(&m, &fx.matrix, tol, &format!("euler[{i}].matrix"));
    }
}

fn check_field_of_view<T: Scalar>(tol: &Tolerance) {
    for (i, fx) in FIXTURES.perspective_field_of_view.iter().enumerate() {
        let m = Matrix4x4::<T>::perspective_field_of_view(
            cast(fx.field_of_view),
            cast(fx.aspect_ratio),
            cast(fx.near),
            cast(fx.far),
        )
        .expect("fixture arguments are valid");
        assert_rows(&m, &fx.expected, tol, &format!("perspective_field_of_view[{i}]"));
    }
}

fn check_look_at<T: Scalar>(tol: &Tolerance) {
    for (i, fx) in FIXTURES.look_at.iter().enumerate() {
        let m = Matrix4x4::<T>::look_at(vec3(fx.eye), vec3(fx.target), vec3(fx.up));
        assert_rows(&m, &fx.expected, tol, &format!("look_at[{i}]"));
    }
}

#[test]
fn inversion_matches_reference_double() {
    check_inversion::<f64>(&FIXTURES.tolerance);
}

#[test]
fn inversion_matches_reference_single() {
    check_inversion::<f32>(&SINGLE);
}

#[test]
fn axis_angle_matches_reference() {
    check_axis_angle::<f64>(&FIXTURES.tolerance);
    check_axis_angle::<f32>(&SINGLE);
}

#[test]
fn euler_angles_match_reference() {
    check_euler::<f64>(&FIXTURES.tolerance);
    check_euler::<f32>(&SINGLE);
}

#[test]
fn field_of_view_matches_reference() {
    check_field_of_view::<f64>(&FIXTURES.tolerance);
    check_field_of_view::<f32>(&SINGLE);
}

#[test]
fn look_at_matches_reference() {
    check_look_at::<f64>(&FIXTURES.tolerance);
    check_look_at::<f32>(&SINGLE);
}
