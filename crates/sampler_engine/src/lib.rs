//! # Sampler Engine (L3: Orchestration)
//!
//! Front door of the variata-rust workspace: turns a [`SampleRequest`] into
//! a `(dim, order)` sample matrix by dispatching one of ten sampling schemes
//! and mapping the result onto the requested domain.
//!
//! This crate provides:
//! - [`Sampler`], the engine owning the random source
//! - [`SampleRequest`], a chainable description of one generation job
//! - [`Rule`], the scheme taxonomy with short-token parsing
//! - [`Domain`] and [`Bounds`], the supported sample spaces
//! - [`AntitheticAxes`], per-axis antithetic variate selection
//!
//! ## Quick Start
//!
//! ```rust
//! use sampler_engine::{Bounds, Rule, SampleRequest, Sampler};
//!
//! let mut sampler = Sampler::from_seed(42);
//!
//! // Four Halton points on the unit interval.
//! let request = SampleRequest::new(4).rule(Rule::Halton);
//! let samples = sampler.generate(&request).unwrap();
//! assert_eq!(samples.row(0), &[0.5, 0.25, 0.75, 0.125]);
//!
//! // Sobol' points rescaled onto [-1, 1] x [-1, 1].
//! let bounds = Bounds::per_axis(vec![-1.0, -1.0], vec![1.0, 1.0]).unwrap();
//! let request = SampleRequest::new(128).domain(bounds).rule(Rule::Sobol);
//! let samples = sampler.generate(&request).unwrap();
//! assert_eq!(samples.shape(), (2, 128));
//! ```
//!
//! ## Layering
//!
//! - `sampler_core` (L1): sample matrices, seeded RNG, sequence schemes
//! - `sampler_dist` (L2): distributions and inverse CDFs
//! - `sampler_engine` (L3): rule dispatch, domains, variance reduction

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod antithetic;
pub mod domain;
pub mod error;
pub mod generator;
pub mod rule;
pub mod transform;

pub use antithetic::AntitheticAxes;
pub use domain::{Bounds, Domain};
pub use error::SamplerError;
pub use generator::{SampleRequest, Sampler};
pub use rule::Rule;
pub use transform::{AffineRescale, Identity, InverseCdf, Transform};

pub use sampler_core::SampleMatrix;
