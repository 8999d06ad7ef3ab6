//! Uniform distribution on a closed interval.

use crate::error::DistributionError;
use crate::traits::Distribution;
use sampler_core::SampleMatrix;

/// Uniform distribution on `[lower, upper]`.
///
/// # Examples
///
/// ```rust
/// use sampler_dist::Uniform;
///
/// let dist = Uniform::new(-1.0, 3.0).unwrap();
/// assert_eq!(dist.quantile(0.5), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uniform {
    lower: f64,
    upper: f64,
}

impl Uniform {
    /// Creates a uniform distribution on `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidBounds`] unless both bounds are
    /// finite and `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(DistributionError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound of the support.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the support.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Inverse CDF: linear interpolation across the support.
    #[inline]
    pub fn quantile(&self, q: f64) -> f64 {
        self.lower + q.clamp(0.0, 1.0) * (self.upper - self.lower)
    }
}

impl Default for Uniform {
    /// Standard uniform distribution on the unit interval.
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }
}

impl Distribution for Uniform {
    fn dimension(&self) -> usize {
        1
    }

    fn inv(&self, mut probabilities: SampleMatrix) -> SampleMatrix {
        for value in probabilities.values_mut() {
            *value = self.quantile(*value);
        }
        probabilities
    }
}
