//! Mappings from the unit hypercube onto target domains.

use sampler_core::SampleMatrix;
use sampler_dist::Distribution;

/// A mapping applied to unit-hypercube samples after generation.
///
/// Transforms consume the matrix so they can rewrite the buffer in place;
/// every implementation preserves the matrix shape.
pub trait Transform {
    /// Maps unit-hypercube samples onto the target domain.
    fn apply(&self, samples: SampleMatrix) -> SampleMatrix;
}

/// Leaves samples on the unit hypercube.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, samples: SampleMatrix) -> SampleMatrix {
        samples
    }
}

/// Rescales axis `d` linearly from `[0, 1]` onto `[lower[d], upper[d]]`.
#[derive(Debug, Clone)]
pub struct AffineRescale {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl AffineRescale {
    /// Creates a rescale onto the given per-axis bounds.
    ///
    /// Callers validate the bounds; this type only applies them.
    pub(crate) fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        debug_assert_eq!(lower.len(), upper.len());
        Self { lower, upper }
    }
}

impl Transform for AffineRescale {
    fn apply(&self, mut samples: SampleMatrix) -> SampleMatrix {
        debug_assert_eq!(samples.dim(), self.lower.len(), "one bound pair per axis");
        for d in 0..samples.dim() {
            let lower = self.lower[d];
            let width = self.upper[d] - lower;
            for value in samples.row_mut(d) {
                *value = lower + *value * width;
            }
        }
        samples
    }
}

/// Maps samples through the inverse CDF of a distribution.
#[derive(Clone, Copy)]
pub struct InverseCdf<'a> {
    dist: &'a dyn Distribution,
}

impl<'a> InverseCdf<'a> {
    /// Wraps a distribution as a transform.
    pub(crate) fn new(dist: &'a dyn Distribution) -> Self {
        Self { dist }
    }
}

impl Transform for InverseCdf<'_> {
    fn apply(&self, samples: SampleMatrix) -> SampleMatrix {
        self.dist.inv(samples)
    }
}
