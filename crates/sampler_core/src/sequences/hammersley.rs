//! Hammersley low-discrepancy point set.

use crate::matrix::SampleMatrix;

use super::halton::halton;

/// Generates the first `order` Hammersley points in `dim` dimensions.
///
/// The first `dim - 1` axes are the Halton set; the final axis is the uniform
/// open grid `(i + 1) / (order + 1)`. The construction assumes the total
/// point count is fixed in advance. At `dim = 1` the output is just the grid
/// axis.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::hammersley;
///
/// let points = hammersley(4, 2);
/// assert_eq!(points.row(0), &[0.5, 0.25, 0.75, 0.125]);
/// assert_eq!(points.row(1), &[0.2, 0.4, 0.6, 0.8]);
/// ```
pub fn hammersley(order: usize, dim: usize) -> SampleMatrix {
    let mut out = SampleMatrix::zeros(dim, order);
    if dim == 0 {
        return out;
    }

    if dim > 1 {
        let leading = halton(order, dim - 1);
        for d in 0..dim - 1 {
            out.row_mut(d).copy_from_slice(leading.row(d));
        }
    }

    let last = out.row_mut(dim - 1);
    for (i, slot) in last.iter_mut().enumerate() {
        *slot = (i as f64 + 1.0) / (order as f64 + 1.0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hammersley_dim1_is_uniform_grid() {
        let points = hammersley(4, 1);
        let row = points.row(0);
        assert_relative_eq!(row[0], 0.2);
        assert_relative_eq!(row[1], 0.4);
        assert_relative_eq!(row[2], 0.6);
        assert_relative_eq!(row[3], 0.8);
    }

    #[test]
    fn test_hammersley_leading_axes_match_halton() {
        let points = hammersley(8, 3);
        let expected = halton(8, 2);
        assert_eq!(points.row(0), expected.row(0));
        assert_eq!(points.row(1), expected.row(1));
    }

    #[test]
    fn test_hammersley_final_axis_open_grid() {
        let points = hammersley(3, 2);
        let last = points.row(1);
        assert_relative_eq!(last[0], 0.25);
        assert_relative_eq!(last[1], 0.5);
        assert_relative_eq!(last[2], 0.75);
    }

    #[test]
    fn test_hammersley_shape() {
        assert_eq!(hammersley(10, 4).shape(), (4, 10));
        assert_eq!(hammersley(0, 2).shape(), (2, 0));
    }
}
