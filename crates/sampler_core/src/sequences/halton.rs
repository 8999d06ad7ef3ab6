//! Halton low-discrepancy point set.

use crate::matrix::SampleMatrix;

use super::primes::first_primes;
use super::van_der_corput::van_der_corput;

/// Generates the first `order` Halton points in `dim` dimensions.
///
/// Axis `d` is the van der Corput sequence in base `p_d`, the `d`-th prime,
/// evaluated from index 1 with no burn-in. Using coprime bases per axis keeps
/// the points from aligning across dimensions.
///
/// # Convention
///
/// Index 0 (which maps to the origin) is skipped and no burn-in is applied,
/// so the one-dimensional sequence starts 0.5, 0.25, 0.75, 0.125, ...
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::halton;
///
/// let points = halton(4, 2);
/// assert_eq!(points.shape(), (2, 4));
/// assert_eq!(points.row(0), &[0.5, 0.25, 0.75, 0.125]);
/// ```
pub fn halton(order: usize, dim: usize) -> SampleMatrix {
    let bases = first_primes(dim);
    let mut out = SampleMatrix::zeros(dim, order);
    for (d, &base) in bases.iter().enumerate() {
        let row = out.row_mut(d);
        for (i, slot) in row.iter_mut().enumerate() {
            *slot = van_der_corput(i as u64 + 1, base);
        }
    }
    out
}
