//! Scheme-level error types.

use thiserror::Error;

/// Errors raised by individual sequence schemes.
///
/// Every variant carries the offending values so the failure can be diagnosed
/// without inspecting scheme internals. These are hard failures: no scheme
/// retries or degrades, and a failed call produces no output at all.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::sobol;
/// use sampler_core::SequenceError;
///
/// let err = sobol(16, 64).unwrap_err();
/// assert_eq!(err, SequenceError::DimensionTooLarge { dim: 64, max: 40 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceError {
    /// Requested dimensionality exceeds what the scheme's tables support.
    #[error("sequence supports at most {max} dimensions, requested {dim}")]
    DimensionTooLarge {
        /// Requested dimensionality.
        dim: usize,
        /// Largest supported dimensionality.
        max: usize,
    },

    /// A tensor-product or mirrored sample count does not fit in `usize`.
    #[error("sample count for order {order} over {dim} dimensions overflows")]
    SampleCountOverflow {
        /// Per-axis order (or nesting level) of the request.
        order: usize,
        /// Requested dimensionality.
        dim: usize,
    },
}
