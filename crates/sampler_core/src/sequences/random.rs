//! Plain pseudo-random sampling.

use crate::matrix::SampleMatrix;
use crate::rng::SamplerRng;

/// Fills a `(dim, order)` matrix with independent uniform draws on `[0, 1)`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{sequences::random, SamplerRng};
///
/// let mut rng = SamplerRng::from_seed(42);
/// let points = random(128, 3, &mut rng);
/// assert_eq!(points.shape(), (3, 128));
/// ```
pub fn random(order: usize, dim: usize, rng: &mut SamplerRng) -> SampleMatrix {
    let mut out = SampleMatrix::zeros(dim, order);
    rng.fill_uniform(out.values_mut());
    out
}
