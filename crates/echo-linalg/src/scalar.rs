// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric capability abstraction for Echo linear algebra.
//!
//! Every vector, matrix, and quaternion in this crate is written once against
//! [`Scalar`] and instantiated for `f32` and `f64` through type aliases; there
//! is no per-precision copy of any algorithm.
//!
//! Capability contract:
//! - Arithmetic: `+`, `-`, `*`, `/`, unary `-`, and the assigning forms.
//! - Ordering: `PartialOrd` (comparisons drive branch selection in rotation
//!   extraction and argument validation in projection builders).
//! - Identities: `zero()` and `one()`.
//! - Transcendentals: `sqrt`, `sin`, `cos`, `tan` (angles in radians).
//! - Checked construction of constants from literals and integers.
//! - Infinity predicates (the infinite far plane in perspective builders).
//!
//! The trait itself never fails. Errors only arise in the algorithms that use
//! it (see [`crate::MathError`]).

use core::fmt::{Debug, Display};

use num_traits::{Float, FromPrimitive, NumAssign};

/// Degeneracy threshold shared by every precision.
///
/// This is not a precision bound: lengths at or below `EPSILON` are treated
/// as zero by the checked helpers (`Vector::try_normalized`,
/// `Matrix4x4::try_look_at`) so callers can detect degenerate input.
pub const EPSILON: f64 = 1e-6;

/// Scalar type usable by the generic vector/matrix/quaternion family.
///
/// Blanket-implemented for any floating-point type that provides the
/// `num-traits` float surface, so user-defined float newtypes qualify as long
/// as they implement those traits.
///
/// # Examples
/// ```
/// use echo_linalg::Scalar;
/// assert_eq!(f32::from_literal(0.25), 0.25_f32);
/// assert_eq!(f64::from_int(-1), Some(-1.0));
/// assert!(f32::INFINITY.is_positive_infinity());
/// assert!(!f64::NEG_INFINITY.is_positive_infinity());
/// ```
pub trait Scalar:
    Float + FromPrimitive + NumAssign + Debug + Display + Default + Send + Sync + 'static
{
    /// Builds a constant from an `f64` literal.
    ///
    /// Never panics: a value beyond the range of `Self` rounds to the
    /// infinity of the same sign, and NaN stays NaN. Every literal used inside
    /// this crate is exactly representable in `f32`.
    fn from_literal(value: f64) -> Self {
        <Self as FromPrimitive>::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Checked construction from an integer; `None` when not representable.
    fn from_int(value: i32) -> Option<Self> {
        <Self as FromPrimitive>::from_i32(value)
    }

    /// The constant `2`.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The constant `0.5`.
    fn half() -> Self {
        Self::from_literal(0.5)
    }

    /// The constant `0.25`.
    fn quarter() -> Self {
        Self::from_literal(0.25)
    }

    /// Returns `true` only for `+∞`.
    fn is_positive_infinity(self) -> bool {
        self.is_infinite() && self.is_sign_positive()
    }

    /// [`EPSILON`] converted to `Self`.
    fn degenerate_threshold() -> Self {
        Self::from_literal(EPSILON)
    }
}

impl<T> Scalar for T where
    T: Float + FromPrimitive + NumAssign + Debug + Display + Default + Send + Sync + 'static
{
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// Callers must pass `min <= max`; the result is unspecified otherwise.
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad<T: Scalar>(value: T) -> T {
    value.to_radians()
}

/// Converts radians to degrees.
pub fn rad_to_deg<T: Scalar>(value: T) -> T {
    value.to_degrees()
}
