// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-linalg: precision-generic linear algebra for Echo.
//!
//! One implementation of vectors, 2x2 to 4x4 matrices, and quaternions is
//! written against the [`Scalar`] capability trait and instantiated for `f32`
//! and `f64` through aliases (`Matrix4x4f`, `Quaterniond`, ...).
//!
//! Conventions shared by every module:
//! - Row vectors: points transform as `v * M`; `A * B` applies `A` first.
//! - Canonical affine order is scale → rotate → translate (→ project), and
//!   the decomposition helpers ([`Matrix4x4::translation`],
//!   [`Matrix4x4::rotation`], [`Matrix4x4::scale`], [`Transform`]) assume it.
//! - Public angles are degrees.
//! - Degenerate input follows a fixed policy: inverting a singular matrix is
//!   a no-op, a zero rotation axis yields the identity, and projection
//!   builders fail fast with [`MathError::InvalidArgument`].
//!
//! Enable the `telemetry` feature to get `tracing` events for those
//! fallbacks.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::float_cmp,
    clippy::needless_range_loop
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod scalar;

mod error;
mod matrix;
mod quaternion;
mod telemetry;
mod transform;
mod vector;

// Re-exports for stable public API
pub use error::MathError;
pub use matrix::{
    Matrix, Matrix2x2, Matrix2x2d, Matrix2x2f, Matrix2x3, Matrix2x3d, Matrix2x3f, Matrix2x4,
    Matrix2x4d, Matrix2x4f, Matrix3x2, Matrix3x2d, Matrix3x2f, Matrix3x3, Matrix3x3d, Matrix3x3f,
    Matrix3x4, Matrix3x4d, Matrix3x4f, Matrix4x2, Matrix4x2d, Matrix4x2f, Matrix4x3, Matrix4x3d,
    Matrix4x3f, Matrix4x4, Matrix4x4d, Matrix4x4f, Minors,
};
pub use quaternion::{Quaternion, Quaterniond, Quaternionf, RotationBranch};
pub use scalar::Scalar;
pub use transform::{Transform, Transformd, Transformf};
pub use vector::{
    Vector, Vector2, Vector2d, Vector2f, Vector3, Vector3d, Vector3f, Vector4, Vector4d, Vector4f,
};
