//! Error types for distribution construction.

use thiserror::Error;

/// Errors raised while validating distribution parameters.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// Interval bounds are inverted or degenerate.
    #[error("lower bound {lower} is not strictly below upper bound {upper}")]
    InvalidBounds {
        /// Lower bound supplied.
        lower: f64,
        /// Upper bound supplied.
        upper: f64,
    },

    /// A scale-type parameter was zero, negative, or non-finite.
    #[error("'{name}' must be positive and finite, got {value}")]
    NonPositiveScale {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A location or shape parameter was NaN or infinite.
    #[error("'{name}' must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A joint distribution was built without any marginals.
    #[error("joint distribution requires at least one marginal")]
    EmptyJoint,
}
