//! Sampling domains and their resolution into transforms.

use crate::error::SamplerError;
use crate::transform::{AffineRescale, Identity, InverseCdf, Transform};
use sampler_dist::Distribution;
use std::fmt;

/// An axis-aligned box given by per-axis bounds.
///
/// Bounds are validated at construction: every axis needs finite bounds with
/// `lower < upper`.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::Bounds;
///
/// let unit_square = Bounds::per_axis(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
/// assert_eq!(unit_square.dimension(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Single-axis bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidDomain`] unless both bounds are finite
    /// and `lower < upper`.
    pub fn interval(lower: f64, upper: f64) -> Result<Self, SamplerError> {
        Self::per_axis(vec![lower], vec![upper])
    }

    /// Per-axis bounds; axis `d` spans `[lower[d], upper[d]]`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidDomain`] when the vectors are empty,
    /// have different lengths, or any axis has non-finite or non-increasing
    /// bounds.
    pub fn per_axis(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, SamplerError> {
        if lower.is_empty() {
            return Err(SamplerError::InvalidDomain(
                "bounds must cover at least one axis".to_string(),
            ));
        }
        if lower.len() != upper.len() {
            return Err(SamplerError::InvalidDomain(format!(
                "lower bounds have {} axes but upper bounds have {}",
                lower.len(),
                upper.len()
            )));
        }
        for (d, (lo, hi)) in lower.iter().zip(&upper).enumerate() {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(SamplerError::InvalidDomain(format!(
                    "axis {d}: lower bound {lo} is not strictly below upper bound {hi}"
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Number of axes the box spans.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Lower bounds, one per axis.
    #[inline]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bounds, one per axis.
    #[inline]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}

/// Where generated samples should live.
///
/// A domain fixes the dimensionality of the sample matrix and the mapping
/// applied after unit-hypercube generation:
///
/// - [`Domain::Dimension`]: samples stay on the unit hypercube
/// - [`Domain::Bounds`]: samples are rescaled into an axis-aligned box
/// - [`Domain::Distribution`]: samples are mapped through an inverse CDF
#[derive(Clone)]
pub enum Domain<'a> {
    /// Unit hypercube with the given number of axes.
    Dimension(usize),
    /// Axis-aligned box.
    Bounds(Bounds),
    /// Probability distribution, sampled through its inverse CDF.
    Distribution(&'a dyn Distribution),
}

impl Domain<'_> {
    /// Splits the domain into its dimensionality and the transform mapping
    /// unit-hypercube samples onto it.
    pub(crate) fn resolve(&self) -> Result<(usize, DomainTransform<'_>), SamplerError> {
        match self {
            Domain::Dimension(0) => Err(SamplerError::InvalidDomain(
                "dimension must be at least 1".to_string(),
            )),
            Domain::Dimension(dim) => Ok((*dim, DomainTransform::Identity(Identity))),
            Domain::Bounds(bounds) => Ok((
                bounds.dimension(),
                DomainTransform::Rescale(AffineRescale::new(
                    bounds.lower.clone(),
                    bounds.upper.clone(),
                )),
            )),
            Domain::Distribution(dist) => {
                let dim = dist.dimension();
                if dim == 0 {
                    return Err(SamplerError::InvalidDomain(
                        "distribution reports zero axes".to_string(),
                    ));
                }
                Ok((dim, DomainTransform::Quantile(InverseCdf::new(*dist))))
            }
        }
    }
}

impl Default for Domain<'_> {
    /// One axis on the unit interval.
    fn default() -> Self {
        Domain::Dimension(1)
    }
}

impl fmt::Debug for Domain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Dimension(dim) => f.debug_tuple("Dimension").field(dim).finish(),
            Domain::Bounds(bounds) => f.debug_tuple("Bounds").field(bounds).finish(),
            Domain::Distribution(dist) => {
                write!(f, "Distribution(dimension = {})", dist.dimension())
            }
        }
    }
}

impl From<usize> for Domain<'_> {
    fn from(dim: usize) -> Self {
        Domain::Dimension(dim)
    }
}

impl From<Bounds> for Domain<'_> {
    fn from(bounds: Bounds) -> Self {
        Domain::Bounds(bounds)
    }
}

impl<'a, D: Distribution> From<&'a D> for Domain<'a> {
    fn from(dist: &'a D) -> Self {
        Domain::Distribution(dist)
    }
}

/// Resolved transform for a domain, dispatched statically.
pub(crate) enum DomainTransform<'a> {
    Identity(Identity),
    Rescale(AffineRescale),
    Quantile(InverseCdf<'a>),
}

impl Transform for DomainTransform<'_> {
    fn apply(&self, samples: sampler_core::SampleMatrix) -> sampler_core::SampleMatrix {
        match self {
            DomainTransform::Identity(t) => t.apply(samples),
            DomainTransform::Rescale(t) => t.apply(samples),
            DomainTransform::Quantile(t) => t.apply(samples),
        }
    }
}
