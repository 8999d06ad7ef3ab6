//! Sobol' low-discrepancy sequence.
//!
//! Gray-code (Antonov-Saleev) construction over per-dimension binary
//! direction numbers. The direction numbers are built from the primitive
//! polynomials and initial values of Bratley & Fox, "Algorithm 659:
//! Implementing Sobol's quasirandom sequence generator", ACM TOMS 14(1),
//! 1988, which covers up to 40 dimensions.

use crate::error::SequenceError;
use crate::matrix::SampleMatrix;

/// Largest dimensionality the direction-number table covers.
pub const SOBOL_MAX_DIMENSION: usize = 40;

/// Primitive polynomials over GF(2), one per dimension, encoded as bit masks
/// (bit `i` is the coefficient of `x^i`).
const POLYNOMIALS: [u32; SOBOL_MAX_DIMENSION] = [
    1, 3, 7, 11, 13, 19, 25, 37, 59, 47, //
    61, 55, 41, 67, 97, 91, 109, 103, 115, 131, //
    193, 137, 145, 143, 241, 157, 185, 167, 229, 171, //
    213, 191, 253, 203, 211, 239, 247, 285, 369, 299,
];

/// Initial direction values `m_1 .. m_deg` per dimension (zero-padded).
/// Row `d` pairs with `POLYNOMIALS[d]`; only the first `deg(poly)` entries
/// are read.
const INITIAL_DIRECTIONS: [[u64; 8]; SOBOL_MAX_DIMENSION] = [
    [1, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0, 0],
    [1, 3, 7, 0, 0, 0, 0, 0],
    [1, 1, 5, 0, 0, 0, 0, 0],
    [1, 3, 1, 1, 0, 0, 0, 0],
    [1, 1, 3, 7, 0, 0, 0, 0],
    [1, 3, 3, 9, 9, 0, 0, 0],
    [1, 3, 7, 13, 3, 0, 0, 0],
    [1, 1, 5, 11, 27, 0, 0, 0],
    [1, 3, 5, 1, 15, 0, 0, 0],
    [1, 1, 7, 3, 29, 0, 0, 0],
    [1, 3, 7, 7, 21, 0, 0, 0],
    [1, 1, 1, 9, 23, 37, 0, 0],
    [1, 3, 3, 5, 19, 33, 0, 0],
    [1, 1, 3, 13, 11, 7, 0, 0],
    [1, 1, 7, 13, 25, 5, 0, 0],
    [1, 3, 5, 11, 7, 11, 0, 0],
    [1, 1, 1, 3, 13, 39, 0, 0],
    [1, 3, 1, 15, 17, 63, 13, 0],
    [1, 1, 5, 5, 1, 27, 33, 0],
    [1, 3, 3, 3, 25, 17, 115, 0],
    [1, 1, 3, 15, 29, 15, 41, 0],
    [1, 3, 1, 7, 3, 23, 79, 0],
    [1, 3, 7, 9, 31, 29, 17, 0],
    [1, 1, 5, 13, 11, 3, 29, 0],
    [1, 3, 1, 9, 5, 21, 119, 0],
    [1, 1, 3, 1, 23, 13, 75, 0],
    [1, 3, 3, 11, 27, 31, 73, 0],
    [1, 1, 7, 7, 19, 25, 105, 0],
    [1, 3, 5, 5, 21, 9, 7, 0],
    [1, 1, 1, 15, 5, 49, 59, 0],
    [1, 1, 1, 1, 1, 33, 65, 0],
    [1, 3, 5, 15, 17, 19, 21, 0],
    [1, 1, 7, 11, 13, 29, 3, 0],
    [1, 3, 7, 5, 7, 11, 113, 0],
    [1, 1, 5, 3, 15, 19, 61, 0],
    [1, 3, 1, 1, 9, 27, 89, 7],
    [1, 1, 3, 7, 31, 15, 45, 23],
    [1, 3, 3, 9, 9, 25, 107, 39],
];

/// Generates the first `order` Sobol' points in `dim` dimensions.
///
/// The sequence starts at index 1: the all-zeros origin point is skipped, so
/// the one-dimensional output begins 0.5, 0.75, 0.25, 0.375, ... Successive
/// points differ by a single direction-number XOR (Gray-code ordering), which
/// keeps generation at O(order × dim).
///
/// # Errors
///
/// Returns [`SequenceError::DimensionTooLarge`] when `dim` exceeds
/// [`SOBOL_MAX_DIMENSION`].
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::sobol;
///
/// let points = sobol(4, 2).unwrap();
/// assert_eq!(points.row(0), &[0.5, 0.75, 0.25, 0.375]);
/// assert_eq!(points.row(1), &[0.5, 0.25, 0.75, 0.375]);
/// ```
pub fn sobol(order: usize, dim: usize) -> Result<SampleMatrix, SequenceError> {
    if dim > SOBOL_MAX_DIMENSION {
        return Err(SequenceError::DimensionTooLarge {
            dim,
            max: SOBOL_MAX_DIMENSION,
        });
    }
    if dim == 0 {
        return Ok(SampleMatrix::zeros(0, order));
    }

    // Start index 1 skips the origin; the highest index visited fixes the
    // number of direction-number columns needed.
    let skip = 1usize;
    let highest_index = (skip + order) as u64;
    let maxcol = ((64 - highest_index.leading_zeros()) as usize + 1).min(63);
    let recipd = 0.5f64.powi(maxcol as i32);

    let directions = direction_table(dim, maxcol);
    let mut lastq = vec![0u64; dim];
    for n in 0..skip {
        advance(&mut lastq, &directions, n);
    }

    let mut out = SampleMatrix::zeros(dim, order);
    for i in 0..order {
        for (d, &q) in lastq.iter().enumerate() {
            out.set(d, i, q as f64 * recipd);
        }
        advance(&mut lastq, &directions, skip + i);
    }
    Ok(out)
}

/// XORs in the direction numbers for the transition from point `n` to `n+1`.
#[inline]
fn advance(lastq: &mut [u64], directions: &[Vec<u64>], n: usize) {
    // Position of the lowest zero bit of n, per Antonov-Saleev.
    let column = (n as u64).trailing_ones() as usize;
    for (q, row) in lastq.iter_mut().zip(directions) {
        *q ^= row[column];
    }
}

/// Builds the scaled direction-number table: `dim` rows of `maxcol` columns,
/// with column `j` pre-multiplied by `2^(maxcol - 1 - j)`.
fn direction_table(dim: usize, maxcol: usize) -> Vec<Vec<u64>> {
    let mut table = Vec::with_capacity(dim);
    for d in 0..dim {
        let mut v = vec![0u64; maxcol];
        if d == 0 {
            // Dimension one: every direction value is 1.
            v.fill(1);
        } else {
            let poly = POLYNOMIALS[d];
            let degree = (31 - poly.leading_zeros()) as usize;
            let m = degree.min(maxcol);
            v[..m].copy_from_slice(&INITIAL_DIRECTIONS[d][..m]);

            for j in degree..maxcol {
                let mut value = v[j - degree];
                for k in 1..=degree {
                    if (poly >> (degree - k)) & 1 == 1 {
                        value ^= v[j - k] << k;
                    }
                }
                v[j] = value;
            }
        }
        for (j, slot) in v.iter_mut().enumerate() {
            *slot <<= (maxcol - 1 - j) as u32;
        }
        table.push(v);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sobol_dim1_reference_values() {
        let points = sobol(8, 1).unwrap();
        assert_eq!(
            points.row(0),
            &[0.5, 0.75, 0.25, 0.375, 0.875, 0.625, 0.125, 0.1875]
        );
    }

    #[test]
    fn test_sobol_dim2_reference_values() {
        let points = sobol(4, 2).unwrap();
        assert_eq!(points.row(0), &[0.5, 0.75, 0.25, 0.375]);
        assert_eq!(points.row(1), &[0.5, 0.25, 0.75, 0.375]);
    }

    #[test]
    fn test_sobol_dimension_limit() {
        assert!(sobol(8, SOBOL_MAX_DIMENSION).is_ok());
        let err = sobol(8, SOBOL_MAX_DIMENSION + 1).unwrap_err();
        assert_eq!(err, SequenceError::DimensionTooLarge { dim: 41, max: 40 });
    }

    #[test]
    fn test_sobol_full_table_in_unit_cube() {
        let points = sobol(64, SOBOL_MAX_DIMENSION).unwrap();
        assert_eq!(points.shape(), (40, 64));
        assert!(points.values().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_sobol_points_are_distinct() {
        let points = sobol(128, 1).unwrap();
        let mut seen = points.row(0).to_vec();
        seen.sort_by(f64::total_cmp);
        seen.dedup();
        assert_eq!(seen.len(), 128);
    }

    #[test]
    fn test_sobol_row_means_balanced() {
        let points = sobol(256, 3).unwrap();
        for d in 0..3 {
            let mean: f64 = points.row(d).iter().sum::<f64>() / 256.0;
            assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
        }
    }

    #[test]
    fn test_sobol_deterministic() {
        assert_eq!(sobol(100, 10).unwrap(), sobol(100, 10).unwrap());
    }
}
