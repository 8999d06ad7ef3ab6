//! Joint distributions over independent marginals.

use crate::error::DistributionError;
use crate::traits::Distribution;
use crate::univariate::{FoldedCauchy, Normal, Uniform};
use sampler_core::SampleMatrix;

/// A univariate family usable as one axis of a [`Joint`] distribution.
///
/// Closed enum dispatch keeps joints `Clone` and serialisable without boxing
/// trait objects.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marginal {
    /// Uniform on an interval.
    Uniform(Uniform),
    /// Gaussian.
    Normal(Normal),
    /// Folded Cauchy.
    FoldedCauchy(FoldedCauchy),
}

impl Marginal {
    /// Inverse CDF of the wrapped family.
    #[inline]
    pub fn quantile(&self, q: f64) -> f64 {
        match self {
            Marginal::Uniform(dist) => dist.quantile(q),
            Marginal::Normal(dist) => dist.quantile(q),
            Marginal::FoldedCauchy(dist) => dist.quantile(q),
        }
    }
}

impl From<Uniform> for Marginal {
    fn from(dist: Uniform) -> Self {
        Marginal::Uniform(dist)
    }
}

impl From<Normal> for Marginal {
    fn from(dist: Normal) -> Self {
        Marginal::Normal(dist)
    }
}

impl From<FoldedCauchy> for Marginal {
    fn from(dist: FoldedCauchy) -> Self {
        Marginal::FoldedCauchy(dist)
    }
}

impl Distribution for Marginal {
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

/// Product distribution of independent marginals, one per axis.
///
/// Axis `d` of the probability matrix is mapped through marginal `d`; axes
/// never interact, so the joint inverse CDF is a row-wise application of the
/// univariate ones.
///
/// # Examples
///
/// ```rust
/// use sampler_dist::{Joint, Normal, Uniform};
///
/// let joint = Joint::new(vec![
///     Uniform::new(0.0, 10.0).unwrap().into(),
///     Normal::default().into(),
/// ])
/// .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Joint {
    marginals: Vec<Marginal>,
}

impl Joint {
    /// Creates a joint distribution from its marginals.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::EmptyJoint`] when `marginals` is empty.
    pub fn new(marginals: Vec<Marginal>) -> Result<Self, DistributionError> {
        if marginals.is_empty() {
            return Err(DistributionError::EmptyJoint);
        }
        Ok(Self { marginals })
    }

    /// The marginals, in axis order.
    #[inline]
    pub fn marginals(&self) -> &[Marginal] {
        &self.marginals
    }
}

impl Distribution for Joint {
    fn dimension(&self) -> usize {
        self.marginals.len()
    }

    fn inv(&self, mut probabilities: SampleMatrix) -> SampleMatrix {
        debug_assert_eq!(
            probabilities.dim(),
            self.marginals.len(),
            "one probability row per marginal"
        );
        for (d, marginal) in self.marginals.iter().enumerate() {
            for value in probabilities.row_mut(d) {
                *value = marginal.quantile(*value);
            }
        }
        probabilities
    }
}
