//! Sampling rule taxonomy.

use crate::error::SamplerError;
use std::fmt;
use std::str::FromStr;

/// The sampling schemes the engine can dispatch to.
///
/// Each rule has a short token used in configuration and logs. Tokens parse
/// case-insensitively:
///
/// ```rust
/// use sampler_engine::Rule;
///
/// assert_eq!("h".parse::<Rule>().unwrap(), Rule::Halton);
/// assert_eq!("NC".parse::<Rule>().unwrap(), Rule::NestedChebyshev);
/// assert!("Z".parse::<Rule>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// Independent pseudo-random draws (token `R`).
    Random,
    /// Halton low-discrepancy sequence (token `H`).
    Halton,
    /// Hammersley set: Halton axes plus one regular axis (token `M`).
    Hammersley,
    /// Korobov lattice (token `K`).
    Korobov,
    /// Sobol' low-discrepancy sequence (token `S`).
    Sobol,
    /// Tensor grid of Chebyshev nodes (token `C`).
    Chebyshev,
    /// Chebyshev grid with nesting-friendly counts (token `NC`).
    NestedChebyshev,
    /// Regular tensor grid (token `G`).
    Grid,
    /// Regular grid with nesting-friendly counts (token `NG`).
    NestedGrid,
    /// Latin hypercube sampling (token `L`).
    LatinHypercube,
}

impl Rule {
    /// Canonical short token for the rule.
    pub const fn token(&self) -> &'static str {
        match self {
            Rule::Random => "R",
            Rule::Halton => "H",
            Rule::Hammersley => "M",
            Rule::Korobov => "K",
            Rule::Sobol => "S",
            Rule::Chebyshev => "C",
            Rule::NestedChebyshev => "NC",
            Rule::Grid => "G",
            Rule::NestedGrid => "NG",
            Rule::LatinHypercube => "L",
        }
    }

    /// Every rule, in taxonomy order.
    pub const fn all() -> [Rule; 10] {
        [
            Rule::Random,
            Rule::Halton,
            Rule::Hammersley,
            Rule::Korobov,
            Rule::Sobol,
            Rule::Chebyshev,
            Rule::NestedChebyshev,
            Rule::Grid,
            Rule::NestedGrid,
            Rule::LatinHypercube,
        ]
    }

    /// True when repeated generation yields identical matrices without
    /// consuming random state.
    pub const fn is_deterministic(&self) -> bool {
        !matches!(self, Rule::Random | Rule::LatinHypercube)
    }

    fn known_tokens() -> String {
        Rule::all()
            .iter()
            .map(|rule| rule.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Rule {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_ascii_uppercase();
        Rule::all()
            .into_iter()
            .find(|rule| rule.token() == token)
            .ok_or_else(|| SamplerError::UnrecognisedRule {
                rule: s.to_string(),
                known: Rule::known_tokens(),
            })
    }
}
