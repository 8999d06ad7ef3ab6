//! Latin hypercube sampling.

use crate::matrix::SampleMatrix;
use crate::rng::SamplerRng;

/// Draws `order` Latin hypercube points in `dim` dimensions.
///
/// Each axis is split into `order` equal strata and every stratum receives
/// exactly one point, placed uniformly at random within it. Axes are
/// stratified independently: each uses its own random permutation of the
/// strata, so the projection of the sample onto any single axis is a
/// perfectly balanced design while the joint placement stays random.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{sequences::latin_hypercube, SamplerRng};
///
/// let mut rng = SamplerRng::from_seed(42);
/// let points = latin_hypercube(10, 2, &mut rng);
/// assert_eq!(points.shape(), (2, 10));
/// assert!(points.values().iter().all(|&v| (0.0..1.0).contains(&v)));
/// ```
pub fn latin_hypercube(order: usize, dim: usize, rng: &mut SamplerRng) -> SampleMatrix {
    let mut out = SampleMatrix::zeros(dim, order);
    if order == 0 {
        return out;
    }
    let mut strata: Vec<usize> = (0..order).collect();
    for d in 0..dim {
        rng.shuffle(&mut strata);
        let row = out.row_mut(d);
        for (i, &stratum) in strata.iter().enumerate() {
            row[i] = (stratum as f64 + rng.gen_uniform()) / order as f64;
        }
    }
    out
}
