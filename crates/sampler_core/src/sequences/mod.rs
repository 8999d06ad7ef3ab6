//! Sequence schemes producing points on the unit hyper-cube.
//!
//! Every scheme in this module returns a [`SampleMatrix`] whose entries lie in
//! `[0, 1]`. The schemes fall into three families:
//!
//! - **Sequence rules** ([`halton`], [`hammersley`], [`sobol`], [`korobov`]):
//!   deterministic, `order` columns per request.
//! - **Tensor rules** ([`chebyshev`], [`regular_grid`] and their nested
//!   variants): per-axis node sets expanded over the full Cartesian product,
//!   `order^dim` columns for `dim` axes. The nested variants interpret
//!   `order` as a refinement level with `2^order - 1` nodes per axis, so each
//!   level's nodes contain the previous level's.
//! - **Stochastic rules** ([`random`], [`latin_hypercube`]): draw from an
//!   explicitly injected [`SamplerRng`](crate::SamplerRng); reproducible under
//!   a pinned seed, `order` columns per request.
//!
//! Deterministic schemes are pure functions: identical arguments produce
//! bit-identical matrices, and they are safe to call concurrently.

mod chebyshev;
mod grid;
mod halton;
mod hammersley;
mod korobov;
mod latin_hypercube;
mod primes;
mod random;
mod sobol;
mod van_der_corput;

pub use chebyshev::{chebyshev, nested_chebyshev};
pub use grid::{nested_grid, regular_grid};
pub use halton::halton;
pub use hammersley::hammersley;
pub use korobov::{korobov, korobov_with_base, DEFAULT_KOROBOV_BASE};
pub use latin_hypercube::latin_hypercube;
pub use primes::{first_primes, is_prime};
pub use random::random;
pub use sobol::{sobol, SOBOL_MAX_DIMENSION};
pub use van_der_corput::van_der_corput;

use crate::error::SequenceError;
use crate::matrix::SampleMatrix;

/// Maps a nested-rule refinement level to its per-axis node count
/// `2^level - 1`.
pub(crate) fn nested_order(level: usize, dim: usize) -> Result<usize, SequenceError> {
    u32::try_from(level)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .map(|nodes| nodes - 1)
        .ok_or(SequenceError::SampleCountOverflow { order: level, dim })
}

/// Expands a 1-D node set over the full Cartesian product of `dim` axes.
///
/// Column `j` holds the combination whose axis-`d` node index is
/// `(j / per_axis^(dim-1-d)) % per_axis`: the last axis varies fastest. The
/// resulting shape is `(dim, per_axis^dim)`.
pub(crate) fn tensor_product(nodes: &[f64], dim: usize) -> Result<SampleMatrix, SequenceError> {
    if dim == 0 {
        return Ok(SampleMatrix::zeros(0, 0));
    }
    let per_axis = nodes.len();
    let overflow = SequenceError::SampleCountOverflow {
        order: per_axis,
        dim,
    };
    let exponent = u32::try_from(dim).map_err(|_| overflow.clone())?;
    let columns = per_axis.checked_pow(exponent).ok_or(overflow.clone())?;
    columns.checked_mul(dim).ok_or(overflow)?;

    let mut out = SampleMatrix::zeros(dim, columns);
    for d in 0..dim {
        let stride = per_axis.pow((dim - 1 - d) as u32);
        let row = out.row_mut(d);
        for (j, slot) in row.iter_mut().enumerate() {
            *slot = nodes[(j / stride) % per_axis];
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_product_single_axis() {
        let m = tensor_product(&[0.25, 0.5, 0.75], 1).unwrap();
        assert_eq!(m.shape(), (1, 3));
        assert_eq!(m.row(0), &[0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_tensor_product_last_axis_fastest() {
        let m = tensor_product(&[0.25, 0.75], 2).unwrap();
        assert_eq!(m.shape(), (2, 4));
        assert_eq!(m.row(0), &[0.25, 0.25, 0.75, 0.75]);
        assert_eq!(m.row(1), &[0.25, 0.75, 0.25, 0.75]);
    }

    #[test]
    fn test_tensor_product_empty_nodes() {
        let m = tensor_product(&[], 3).unwrap();
        assert_eq!(m.shape(), (3, 0));
    }

    #[test]
    fn test_tensor_product_overflow() {
        let nodes = vec![0.5; 10_000];
        let err = tensor_product(&nodes, 32).unwrap_err();
        assert_eq!(
            err,
            SequenceError::SampleCountOverflow {
                order: 10_000,
                dim: 32
            }
        );
    }

    mod property_tests {
        use super::super::*;
        use crate::rng::SamplerRng;
        use proptest::prelude::*;

        fn order_strategy() -> impl Strategy<Value = usize> {
            1usize..200
        }

        fn dim_strategy() -> impl Strategy<Value = usize> {
            1usize..8
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn prop_halton_unit_cube(order in order_strategy(), dim in dim_strategy()) {
                let m = halton(order, dim);
                prop_assert_eq!(m.shape(), (dim, order));
                prop_assert!(m.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
            }

            #[test]
            fn prop_hammersley_unit_cube(order in order_strategy(), dim in dim_strategy()) {
                let m = hammersley(order, dim);
                prop_assert_eq!(m.shape(), (dim, order));
                prop_assert!(m.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
            }

            #[test]
            fn prop_sobol_unit_cube(order in order_strategy(), dim in dim_strategy()) {
                let m = sobol(order, dim).unwrap();
                prop_assert_eq!(m.shape(), (dim, order));
                prop_assert!(m.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
            }

            #[test]
            fn prop_korobov_unit_cube(order in order_strategy(), dim in dim_strategy()) {
                let m = korobov(order, dim);
                prop_assert_eq!(m.shape(), (dim, order));
                prop_assert!(m.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
            }

            #[test]
            fn prop_latin_hypercube_unit_cube(order in order_strategy(), dim in dim_strategy()) {
                let mut rng = SamplerRng::from_seed(2024);
                let m = latin_hypercube(order, dim, &mut rng);
                prop_assert_eq!(m.shape(), (dim, order));
                prop_assert!(m.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
            }

            #[test]
            fn prop_deterministic_schemes_idempotent(order in order_strategy(), dim in dim_strategy()) {
                prop_assert_eq!(halton(order, dim), halton(order, dim));
                prop_assert_eq!(hammersley(order, dim), hammersley(order, dim));
                prop_assert_eq!(korobov(order, dim), korobov(order, dim));
                prop_assert_eq!(sobol(order, dim).unwrap(), sobol(order, dim).unwrap());
            }

            #[test]
            fn prop_tensor_rules_column_count(order in 1usize..6, dim in 1usize..4) {
                let expected = order.pow(dim as u32);
                prop_assert_eq!(regular_grid(order, dim).unwrap().shape(), (dim, expected));
                prop_assert_eq!(chebyshev(order, dim).unwrap().shape(), (dim, expected));
            }
        }
    }
}
