//! Antithetic variate selection and order reconciliation.

use crate::error::SamplerError;
use sampler_core::antithetic::mirror_axes;
use sampler_core::{SampleMatrix, SequenceError};

/// Which axes receive antithetic mirroring.
///
/// A broadcast value applies to every axis of the resolved domain; an
/// explicit mask selects axes individually and must either match the domain
/// dimensionality or hold a single entry to broadcast.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::AntitheticAxes;
///
/// let all: AntitheticAxes = true.into();
/// let first_only: AntitheticAxes = vec![true, false].into();
/// assert_ne!(all, first_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntitheticAxes {
    /// The same choice on every axis.
    Broadcast(bool),
    /// Per-axis selection.
    Mask(Vec<bool>),
}

impl AntitheticAxes {
    /// Mirror every axis.
    pub fn all() -> Self {
        AntitheticAxes::Broadcast(true)
    }

    /// Expands the selection to one flag per axis.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::AntitheticMaskMismatch`] when an explicit
    /// mask has neither length 1 nor length `dim`.
    pub(crate) fn resolve(&self, dim: usize) -> Result<Vec<bool>, SamplerError> {
        match self {
            AntitheticAxes::Broadcast(on) => Ok(vec![*on; dim]),
            AntitheticAxes::Mask(mask) if mask.len() == dim => Ok(mask.clone()),
            AntitheticAxes::Mask(mask) if mask.len() == 1 => Ok(vec![mask[0]; dim]),
            AntitheticAxes::Mask(mask) => Err(SamplerError::AntitheticMaskMismatch {
                expected: dim,
                got: mask.len(),
            }),
        }
    }
}

impl From<bool> for AntitheticAxes {
    fn from(on: bool) -> Self {
        AntitheticAxes::Broadcast(on)
    }
}

impl From<Vec<bool>> for AntitheticAxes {
    fn from(mask: Vec<bool>) -> Self {
        AntitheticAxes::Mask(mask)
    }
}

impl From<&[bool]> for AntitheticAxes {
    fn from(mask: &[bool]) -> Self {
        AntitheticAxes::Mask(mask.to_vec())
    }
}

impl<const N: usize> From<[bool; N]> for AntitheticAxes {
    fn from(mask: [bool; N]) -> Self {
        AntitheticAxes::Mask(mask.to_vec())
    }
}

/// Reconciled plan for one antithetic generation.
///
/// Mirroring multiplies the column count, so the scheme runs at a reduced
/// internal order and the mirrored matrix is cut back to the requested
/// count. The internal order starts from the logarithm of the sample
/// surplus and grows until `internal ^ dim` covers the request, matching
/// the expansion of the tensor-grid schemes. Sequence schemes whose column
/// count is linear in the order can therefore come up short; the truncation
/// simply keeps what was produced.
#[derive(Debug, Clone)]
pub(crate) struct AntitheticPlan {
    mask: Vec<bool>,
    internal_order: usize,
    keep: usize,
}

impl AntitheticPlan {
    /// Reconciles the requested order against the mirrored expansion.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidSampleCount`] unless `order > dim`.
    pub(crate) fn reconcile(
        order: usize,
        dim: usize,
        mask: Vec<bool>,
    ) -> Result<Self, SamplerError> {
        if order <= dim {
            return Err(SamplerError::InvalidSampleCount { order, dim });
        }
        let mut internal = ((order - dim) as f64).ln() as usize;
        if internal < 1 {
            internal = 1;
        }
        while saturating_pow(internal, dim) < order as u128 {
            internal += 1;
        }
        Ok(Self {
            mask,
            internal_order: internal,
            keep: order,
        })
    }

    /// Order the underlying scheme is asked for.
    pub(crate) fn internal_order(&self) -> usize {
        self.internal_order
    }

    /// Mirrors the base samples and truncates to the requested count.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::SampleCountOverflow`] when the mirrored
    /// column count would not fit in `usize`.
    pub(crate) fn expand(&self, samples: SampleMatrix) -> Result<SampleMatrix, SamplerError> {
        let flips = self.mask.iter().filter(|&&on| on).count() as u32;
        let overflow = || {
            SamplerError::from(SequenceError::SampleCountOverflow {
                order: self.internal_order,
                dim: self.mask.len(),
            })
        };
        let variants = 1usize.checked_shl(flips).ok_or_else(overflow)?;
        samples
            .columns()
            .checked_mul(variants)
            .ok_or_else(overflow)?;

        let mut mirrored = mirror_axes(&samples, &self.mask);
        mirrored.truncate_columns(self.keep);
        Ok(mirrored)
    }
}

fn saturating_pow(base: usize, exp: usize) -> u128 {
    if base <= 1 {
        return base as u128;
    }
    if exp >= 128 {
        return u128::MAX;
    }
    (base as u128).checked_pow(exp as u32).unwrap_or(u128::MAX)
}
