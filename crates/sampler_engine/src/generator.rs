//! Sample generation orchestration.

use crate::antithetic::{AntitheticAxes, AntitheticPlan};
use crate::domain::Domain;
use crate::error::SamplerError;
use crate::rule::Rule;
use crate::transform::Transform;
use sampler_core::sequences::{
    chebyshev, halton, hammersley, korobov, latin_hypercube, nested_chebyshev, nested_grid,
    random, regular_grid, sobol,
};
use sampler_core::{SampleMatrix, SamplerRng};

/// One sample-generation job: how many samples, where they live, which
/// scheme produces them, and whether antithetic variates apply.
///
/// Requests are assembled with chained setters; unset fields fall back to a
/// single unit-interval axis sampled pseudo-randomly.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::{Bounds, Rule, SampleRequest};
///
/// let bounds = Bounds::interval(-1.0, 1.0).unwrap();
/// let request = SampleRequest::new(100)
///     .domain(bounds)
///     .rule(Rule::Sobol)
///     .antithetic(true);
/// assert_eq!(request.order(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct SampleRequest<'a> {
    order: usize,
    domain: Domain<'a>,
    rule: Rule,
    antithetic: Option<AntitheticAxes>,
}

impl<'a> SampleRequest<'a> {
    /// Starts a request for `order` samples on one unit-interval axis with
    /// the pseudo-random rule.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            domain: Domain::default(),
            rule: Rule::Random,
            antithetic: None,
        }
    }

    /// Sets the sampling domain.
    ///
    /// Accepts anything convertible: a dimension count, [`Bounds`], or a
    /// reference to a [`Distribution`].
    ///
    /// [`Bounds`]: crate::Bounds
    /// [`Distribution`]: sampler_dist::Distribution
    pub fn domain(mut self, domain: impl Into<Domain<'a>>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Sets the sampling rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the sampling rule from its token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::UnrecognisedRule`] for an unknown token.
    pub fn rule_named(self, token: &str) -> Result<Self, SamplerError> {
        Ok(self.rule(token.parse()?))
    }

    /// Requests antithetic variates on the given axes.
    pub fn antithetic(mut self, axes: impl Into<AntitheticAxes>) -> Self {
        self.antithetic = Some(axes.into());
        self
    }

    /// Requested number of samples.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Selected sampling rule.
    #[inline]
    pub fn selected_rule(&self) -> Rule {
        self.rule
    }
}

/// Sample-generation engine.
///
/// Owns the random source feeding the stochastic rules, so repeated
/// generation from the same seed replays the same matrices while the
/// deterministic rules are unaffected by the engine state.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::{Rule, SampleRequest, Sampler};
///
/// let mut sampler = Sampler::from_seed(42);
/// let request = SampleRequest::new(4).rule(Rule::Halton);
/// let samples = sampler.generate(&request).unwrap();
/// assert_eq!(samples.row(0), &[0.5, 0.25, 0.75, 0.125]);
/// ```
pub struct Sampler {
    rng: SamplerRng,
}

impl Sampler {
    /// Creates an engine with a fixed seed for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SamplerRng::from_seed(seed),
        }
    }

    /// Creates an engine seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SamplerRng::from_entropy(),
        }
    }

    /// Seed of the underlying random source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generates the sample matrix described by `request`.
    ///
    /// The returned matrix has one row per domain axis and, outside the
    /// tensor-grid and antithetic cases, `request.order()` columns.
    ///
    /// # Errors
    ///
    /// - [`SamplerError::InvalidDomain`] when the domain spans zero axes or
    ///   carries unusable bounds
    /// - [`SamplerError::InvalidSampleCount`] when antithetic variates are
    ///   requested with `order <= dim`
    /// - [`SamplerError::AntitheticMaskMismatch`] when the mask length fits
    ///   neither the domain nor broadcasting
    /// - [`SamplerError::Sequence`] when the scheme rejects the order or
    ///   dimension (Sobol' above 40 axes, tensor grids past `usize`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_engine::{Rule, SampleRequest, Sampler};
    /// use sampler_dist::Normal;
    ///
    /// let dist = Normal::default();
    /// let mut sampler = Sampler::from_seed(7);
    /// let request = SampleRequest::new(64).domain(&dist).rule(Rule::Sobol);
    /// let samples = sampler.generate(&request).unwrap();
    /// assert_eq!(samples.shape(), (1, 64));
    /// ```
    pub fn generate(&mut self, request: &SampleRequest<'_>) -> Result<SampleMatrix, SamplerError> {
        let (dim, transform) = request.domain.resolve()?;
        tracing::debug!(
            rule = request.rule.token(),
            order = request.order,
            dim,
            antithetic = request.antithetic.is_some(),
            "generating samples"
        );

        let unit = match &request.antithetic {
            Some(axes) => {
                let mask = axes.resolve(dim)?;
                let plan = AntitheticPlan::reconcile(request.order, dim, mask)?;
                let base = self.draw(request.rule, plan.internal_order(), dim)?;
                plan.expand(base)?
            }
            None => self.draw(request.rule, request.order, dim)?,
        };

        let samples = transform.apply(unit);
        tracing::debug!(
            rows = samples.dim(),
            columns = samples.columns(),
            "sample matrix ready"
        );
        Ok(samples)
    }

    /// Runs the selected scheme on the unit hypercube.
    fn draw(&mut self, rule: Rule, order: usize, dim: usize) -> Result<SampleMatrix, SamplerError> {
        let samples = match rule {
            Rule::Random => random(order, dim, &mut self.rng),
            Rule::Halton => halton(order, dim),
            Rule::Hammersley => hammersley(order, dim),
            Rule::Korobov => korobov(order, dim),
            Rule::Sobol => sobol(order, dim)?,
            Rule::Chebyshev => chebyshev(order, dim)?,
            Rule::NestedChebyshev => nested_chebyshev(order, dim)?,
            Rule::Grid => regular_grid(order, dim)?,
            Rule::NestedGrid => nested_grid(order, dim)?,
            Rule::LatinHypercube => latin_hypercube(order, dim, &mut self.rng),
        };
        Ok(samples)
    }
}
