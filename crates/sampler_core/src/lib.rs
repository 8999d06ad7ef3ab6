//! # sampler_core: Sequence Schemes and Sample Containers
//!
//! ## Layer 1 (Foundation) Role
//!
//! sampler_core is the bottom layer of the three-layer workspace, providing:
//! - The dense sample-matrix container (`matrix`)
//! - A seeded, reproducible RNG wrapper (`rng`)
//! - The low-discrepancy and stochastic sequence schemes (`sequences`)
//! - The antithetic-variate mirroring primitive (`antithetic`)
//! - Scheme-level error types (`error`)
//!
//! ## Zero Upper-Layer Dependency Principle
//!
//! Layer 1 has no dependencies on other sampler_* crates, with minimal
//! external dependencies:
//! - rand: seeded pseudo-random generation for the stochastic schemes
//! - thiserror: error type derivation
//! - serde: serialisation support (optional)
//!
//! All points produced by the schemes in this crate live on the unit
//! hyper-cube `[0, 1]^dim`; mapping into a target space is the concern of
//! the layers above.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::sequences::{halton, sobol};
//! use sampler_core::SamplerRng;
//!
//! // Deterministic low-discrepancy points: shape (dim, order)
//! let points = halton(4, 1);
//! assert_eq!(points.row(0), &[0.5, 0.25, 0.75, 0.125]);
//!
//! // Sobol' points start at the second sequence element (the origin is skipped)
//! let points = sobol(4, 2).unwrap();
//! assert_eq!(points.get(0, 0), 0.5);
//!
//! // Stochastic schemes draw from an explicitly seeded generator
//! let mut rng = SamplerRng::from_seed(42);
//! let noise = sampler_core::sequences::random(128, 3, &mut rng);
//! assert_eq!(noise.shape(), (3, 128));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for [`SampleMatrix`] and [`SequenceError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod antithetic;
pub mod error;
pub mod matrix;
pub mod rng;
pub mod sequences;

pub use error::SequenceError;
pub use matrix::SampleMatrix;
pub use rng::SamplerRng;
