//! Korobov lattice rule.

use crate::matrix::SampleMatrix;

/// Default multiplier for the Korobov generating vector.
pub const DEFAULT_KOROBOV_BASE: u64 = 17797;

/// Generates an `order`-point Korobov lattice in `dim` dimensions with the
/// default base.
///
/// See [`korobov_with_base`] for the construction.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::korobov;
///
/// let points = korobov(4, 2);
/// assert_eq!(points.row(0), &[0.2, 0.4, 0.6, 0.8]);
/// assert_eq!(points.row(1), &[0.4, 0.8, 0.2, 0.6]);
/// ```
pub fn korobov(order: usize, dim: usize) -> SampleMatrix {
    korobov_with_base(order, dim, DEFAULT_KOROBOV_BASE)
}

/// Generates an `order`-point Korobov lattice in `dim` dimensions.
///
/// The lattice is a rank-1 rule over the modulus `order + 1`: the generating
/// vector is `z_0 = 1`, `z_{d+1} = z_d * base mod (order + 1)`, and entry
/// `(d, i)` is `((i + 1) * z_d mod (order + 1)) / (order + 1)`. The final
/// lattice column (which is identically zero) is dropped, leaving `order`
/// columns.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::korobov_with_base;
///
/// let points = korobov_with_base(4, 2, 1234);
/// assert_eq!(points.row(1), &[0.8, 0.6, 0.4, 0.2]);
/// ```
pub fn korobov_with_base(order: usize, dim: usize, base: u64) -> SampleMatrix {
    let modulus = order as u128 + 1;

    let mut out = SampleMatrix::zeros(dim, order);
    let mut z: u128 = 1;
    for d in 0..dim {
        let row = out.row_mut(d);
        for (i, slot) in row.iter_mut().enumerate() {
            *slot = ((i as u128 + 1) * z % modulus) as f64 / modulus as f64;
        }
        z = z * base as u128 % modulus;
    }
    out
}
