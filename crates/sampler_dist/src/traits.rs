//! Core trait connecting sample generators to probability spaces.

use sampler_core::SampleMatrix;

/// A probability distribution that can absorb unit-hypercube samples.
///
/// Implementors map a `(dimension, n)` matrix of probabilities on `[0, 1)`
/// through their inverse cumulative distribution function, axis by axis,
/// yielding samples in the distribution's own support. The matrix is taken
/// by value so implementations can transform the buffer in place.
///
/// The trait is object-safe; generators hold `&dyn Distribution` and never
/// need to know the concrete type.
pub trait Distribution {
    /// Number of axes the distribution spans.
    ///
    /// Univariate distributions report 1; joint distributions report the
    /// number of marginals.
    fn dimension(&self) -> usize;

    /// Maps probabilities through the inverse CDF.
    ///
    /// Expects `probabilities.dim() == self.dimension()`. Values outside
    /// `[0, 1)` are clamped into the valid range rather than rejected, so
    /// boundary samples from closed-interval schemes stay finite.
    fn inv(&self, probabilities: SampleMatrix) -> SampleMatrix;
}
