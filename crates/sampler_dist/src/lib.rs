//! # Sampler Distributions (L2: Probability Layer)
//!
//! Probability distributions and their inverse cumulative distribution
//! functions, used to map unit-hypercube samples onto target domains.
//!
//! This crate provides:
//! - The [`Distribution`] trait connecting sample generators to probability
//!   spaces
//! - Univariate marginals (uniform, Gaussian, folded Cauchy)
//! - Joint distributions assembled from independent marginals
//! - A rational approximation of the inverse Gaussian CDF
//!
//! ## Design Principles
//!
//! - **Quantile-based mapping**: distributions consume probabilities on
//!   `[0, 1)` and return values in their own support
//! - **Closed-form inverses** throughout, keeping the mapping allocation-free
//! - **Validated constructors**: parameter errors surface at construction,
//!   not during sampling

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod joint;
pub mod quantile;
pub mod traits;
pub mod univariate;

pub use error::DistributionError;
pub use joint::{Joint, Marginal};
pub use traits::Distribution;
pub use univariate::{FoldedCauchy, Normal, Uniform};
