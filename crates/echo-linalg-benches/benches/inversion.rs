#![allow(missing_docs)]
//! Benchmark: adjugate inversion across matrix orders and precisions.
//!
//! The determinant and every minor are recomputed per call, so cost should
//! track the order (2, 3, 4) and stay flat across inputs of the same order.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use echo_linalg::{Matrix2x2, Matrix3x3, Matrix4x4, Scalar, Vector3};

fn vec3<T: Scalar>(x: f64, y: f64, z: f64) -> Vector3<T> {
    Vector3::new(T::from_literal(x), T::from_literal(y), T::from_literal(z))
}

fn sample_4x4<T: Scalar>() -> Matrix4x4<T> {
    Matrix4x4::from_scale(vec3(2.0, 0.5, 3.0))
        * Matrix4x4::from_axis_angle(vec3(1.0, -2.0, 0.5), T::from_literal(47.0))
        * Matrix4x4::from_translation(vec3(10.0, -4.0, 2.5))
}

fn bench_inverse_by_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_f64");
    let m2 = Matrix2x2::from_rows([[4.0_f64, 7.0], [2.0, 6.0]]);
    let m3 = Matrix3x3::from_rows([[2.0_f64, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
    let m4 = sample_4x4::<f64>();
    group.bench_function(BenchmarkId::from_parameter(2), |b| {
        b.iter(|| black_box(black_box(m2).inverse()));
    });
    group.bench_function(BenchmarkId::from_parameter(3), |b| {
        b.iter(|| black_box(black_box(m3).inverse()));
    });
    group.bench_function(BenchmarkId::from_parameter(4), |b| {
        b.iter(|| black_box(black_box(m4).inverse()));
    });
    group.finish();
}

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_4x4");
    let m32 = sample_4x4::<f32>();
    let m64 = sample_4x4::<f64>();
    group.bench_function("f32", |b| b.iter(|| black_box(black_box(m32).inverse())));
    group.bench_function("f64", |b| b.iter(|| black_box(black_box(m64).inverse())));
    group.bench_function("singular_no_op", |b| {
        let singular = Matrix4x4::<f64>::zero();
        b.iter(|| black_box(black_box(singular).inverse()));
    });
    group.finish();
}

criterion_group!(benches, bench_inverse_by_order, bench_precision);
criterion_main!(benches);
