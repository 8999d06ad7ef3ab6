//! Error types for the sample-generation engine.

use sampler_core::SequenceError;
use thiserror::Error;

/// Errors surfaced by [`Sampler::generate`](crate::Sampler::generate) and
/// request construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplerError {
    /// The rule token did not match any known sampling scheme.
    #[error("unrecognised sampling rule '{rule}', expected one of {known}")]
    UnrecognisedRule {
        /// Token as supplied by the caller.
        rule: String,
        /// Comma-separated list of accepted tokens.
        known: String,
    },

    /// The domain cannot be sampled (zero axes, inverted bounds, ...).
    #[error("invalid sampling domain: {0}")]
    InvalidDomain(String),

    /// Antithetic variates need strictly more samples than axes to
    /// reconcile the internal order.
    #[error("antithetic sampling requires order > dim, got order {order} with dim {dim}")]
    InvalidSampleCount {
        /// Requested number of samples.
        order: usize,
        /// Dimensionality of the domain.
        dim: usize,
    },

    /// The antithetic mask length matches neither 1 nor the domain
    /// dimensionality.
    #[error("antithetic mask covers {got} axes but the domain spans {expected}")]
    AntitheticMaskMismatch {
        /// Axes the domain spans.
        expected: usize,
        /// Entries in the supplied mask.
        got: usize,
    },

    /// A sequence scheme rejected the order/dimension combination.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
