//! Regular grid tensor rules.

use crate::error::SequenceError;
use crate::matrix::SampleMatrix;

use super::{nested_order, tensor_product};

/// Generates an equidistant interior grid over the full tensor product of
/// `dim` axes.
///
/// The 1-D nodes are `k/(order+1)` for `k = 1..order`: the open uniform grid,
/// excluding both endpoints. For `dim > 1` the nodes are expanded over every
/// axis combination, giving shape `(dim, order^dim)` with the last axis
/// varying fastest.
///
/// # Errors
///
/// Returns [`SequenceError::SampleCountOverflow`] when `order^dim` does not
/// fit in `usize`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::regular_grid;
///
/// let points = regular_grid(4, 1).unwrap();
/// assert_eq!(points.row(0), &[0.2, 0.4, 0.6, 0.8]);
/// ```
pub fn regular_grid(order: usize, dim: usize) -> Result<SampleMatrix, SequenceError> {
    tensor_product(&grid_nodes(order), dim)
}

/// Generates a nested grid at refinement level `order`.
///
/// Delegates to [`regular_grid`] with `2^order - 1` nodes per axis. The node
/// set at level `n` is `k/2^n` for `k = 1..2^n - 1`, so every level contains
/// the dyadic nodes of all coarser levels.
///
/// # Errors
///
/// Returns [`SequenceError::SampleCountOverflow`] when the per-axis node
/// count or the tensor-product column count does not fit in `usize`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::nested_grid;
///
/// let points = nested_grid(2, 1).unwrap();
/// assert_eq!(points.row(0), &[0.25, 0.5, 0.75]);
/// ```
pub fn nested_grid(order: usize, dim: usize) -> Result<SampleMatrix, SequenceError> {
    let per_axis = nested_order(order, dim)?;
    regular_grid(per_axis, dim)
}

fn grid_nodes(order: usize) -> Vec<f64> {
    let denominator = order as f64 + 1.0;
    (1..=order).map(|k| k as f64 / denominator).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dim1_reference() {
        let points = regular_grid(4, 1).unwrap();
        assert_eq!(points.row(0), &[0.2, 0.4, 0.6, 0.8]);
    }

    #[test]
    fn test_grid_excludes_endpoints() {
        let points = regular_grid(99, 1).unwrap();
        let row = points.row(0);
        assert!(row[0] > 0.0);
        assert!(row[98] < 1.0);
    }

    #[test]
    fn test_grid_tensor_product_rows() {
        let points = regular_grid(2, 2).unwrap();
        assert_eq!(points.shape(), (2, 4));
        assert_eq!(points.row(0), &[1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0]);
        assert_eq!(points.row(1), &[1.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0]);
    }

    #[test]
    fn test_nested_grid_levels_are_nested() {
        let coarse = nested_grid(2, 1).unwrap();
        let fine = nested_grid(3, 1).unwrap();

        assert_eq!(coarse.row(0), &[0.25, 0.5, 0.75]);
        assert_eq!(fine.columns(), 7);
        for &node in coarse.row(0) {
            assert!(fine.row(0).contains(&node));
        }
    }

    #[test]
    fn test_nested_grid_level_overflow() {
        let err = nested_grid(70, 2).unwrap_err();
        assert_eq!(err, SequenceError::SampleCountOverflow { order: 70, dim: 2 });
    }
}
