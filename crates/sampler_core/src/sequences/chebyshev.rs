//! Chebyshev node tensor rules.

use std::f64::consts::PI;

use crate::error::SequenceError;
use crate::matrix::SampleMatrix;

use super::{nested_order, tensor_product};

/// Generates Chebyshev nodes over the full tensor product of `dim` axes.
///
/// The 1-D nodes are `cos(k*pi/(order+1))/2 + 1/2` for `k = order..1`,
/// i.e. the interior Chebyshev points mapped from `[-1, 1]` onto `[0, 1]`
/// and listed in ascending order. For `dim > 1` the nodes are expanded over
/// every axis combination, giving shape `(dim, order^dim)` with the last
/// axis varying fastest.
///
/// # Errors
///
/// Returns [`SequenceError::SampleCountOverflow`] when `order^dim` does not
/// fit in `usize`.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use sampler_core::sequences::chebyshev;
///
/// let points = chebyshev(3, 1).unwrap();
/// assert_relative_eq!(points.get(0, 0), 0.146446609406726, max_relative = 1e-14);
/// assert_relative_eq!(points.get(0, 1), 0.5);
/// assert_relative_eq!(points.get(0, 2), 0.853553390593274, max_relative = 1e-14);
/// ```
pub fn chebyshev(order: usize, dim: usize) -> Result<SampleMatrix, SequenceError> {
    tensor_product(&chebyshev_nodes(order), dim)
}

/// Generates nested Chebyshev nodes at refinement level `order`.
///
/// Delegates to [`chebyshev`] with `2^order - 1` nodes per axis; successive
/// levels reuse every node of the previous level.
///
/// # Errors
///
/// Returns [`SequenceError::SampleCountOverflow`] when the per-axis node
/// count or the tensor-product column count does not fit in `usize`.
pub fn nested_chebyshev(order: usize, dim: usize) -> Result<SampleMatrix, SequenceError> {
    let per_axis = nested_order(order, dim)?;
    chebyshev(per_axis, dim)
}

fn chebyshev_nodes(order: usize) -> Vec<f64> {
    let denominator = order as f64 + 1.0;
    (1..=order)
        .rev()
        .map(|k| 0.5 * (k as f64 * PI / denominator).cos() + 0.5)
        .collect()
}
