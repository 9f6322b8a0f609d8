// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Optional `tracing` hooks for degenerate-input fallbacks.
//!
//! Compiled to no-ops unless the `telemetry` feature is enabled.

use core::fmt::Debug;

use crate::MathError;

#[inline]
pub(crate) fn singular_matrix<T: Debug>(order: usize, determinant: T) {
    #[cfg(feature = "telemetry")]
    tracing::trace!(order, ?determinant, "singular matrix left unchanged by invert");
    #[cfg(not(feature = "telemetry"))]
    let _ = (order, determinant);
}

#[inline]
pub(crate) fn zero_rotation_axis(builder: &'static str) {
    #[cfg(feature = "telemetry")]
    tracing::trace!(builder, "zero-length rotation axis; returning identity");
    #[cfg(not(feature = "telemetry"))]
    let _ = builder;
}

#[inline]
pub(crate) fn rejected_argument(builder: &'static str, err: &MathError) {
    #[cfg(feature = "telemetry")]
    tracing::debug!(builder, %err, "matrix builder rejected its arguments");
    #[cfg(not(feature = "telemetry"))]
    let _ = (builder, err);
}
