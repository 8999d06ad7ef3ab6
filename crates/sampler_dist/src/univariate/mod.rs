//! Univariate distribution families.
//!
//! Each family validates its parameters at construction and exposes a
//! closed-form `quantile` used both directly (through the [`Distribution`]
//! implementation on each type) and by joint distributions.
//!
//! [`Distribution`]: crate::traits::Distribution

mod folded_cauchy;
mod normal;
mod uniform;

pub use folded_cauchy::FoldedCauchy;
pub use normal::Normal;
pub use uniform::Uniform;
