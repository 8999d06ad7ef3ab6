//! Gaussian distribution.

use crate::error::DistributionError;
use crate::quantile::inverse_standard_normal;
use crate::traits::Distribution;
use sampler_core::SampleMatrix;

/// Gaussian distribution with configurable mean and standard deviation.
///
/// The inverse CDF routes through [`inverse_standard_normal`], so mapped
/// samples stay finite even for probabilities of exactly 0 or 1.
///
/// # Examples
///
/// ```rust
/// use sampler_dist::Normal;
///
/// let dist = Normal::new(10.0, 2.0).unwrap();
/// assert_eq!(dist.quantile(0.5), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Creates a Gaussian with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::NonFiniteParameter`] for a NaN or
    /// infinite mean and [`DistributionError::NonPositiveScale`] unless
    /// `std_dev` is finite and strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::NonFiniteParameter {
                name: "mean",
                value: mean,
            });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(DistributionError::NonPositiveScale {
                name: "std_dev",
                value: std_dev,
            });
        }
        Ok(Self { mean, std_dev })
    }

    /// Mean of the distribution.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the distribution.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Inverse CDF.
    #[inline]
    pub fn quantile(&self, q: f64) -> f64 {
        self.mean + self.std_dev * inverse_standard_normal(q)
    }
}

impl Default for Normal {
    /// Standard Gaussian (zero mean, unit variance).
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl Distribution for Normal {
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
