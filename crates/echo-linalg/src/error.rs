// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised by the fail-fast parts of the kernel.
///
/// Degenerate math (singular inversion, zero rotation axis) is never an
/// error; see the individual operations for their fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A builder precondition was violated; nothing was constructed.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the violated precondition.
        reason: &'static str,
    },
    /// Checked component access outside the value's dimensions.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of addressable elements along that dimension.
        len: usize,
    },
}
