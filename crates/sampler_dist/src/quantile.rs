//! Inverse cumulative distribution function of the standard Gaussian.

use num_traits::Float;

// Acklam's rational-approximation coefficients, highest power first.
const CENTRAL_NUM: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const CENTRAL_DEN: [f64; 6] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
    1.0,
];
const TAIL_NUM: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const TAIL_DEN: [f64; 5] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
    1.0,
];

/// Probability below which the tail expansion takes over.
const TAIL_SPLIT: f64 = 0.02425;

/// Inverse CDF of the standard Gaussian distribution.
///
/// Uses Acklam's piecewise rational approximation: a central rational
/// function on `[0.02425, 0.97575]` and a log-scaled expansion in each tail,
/// with relative error below `1.2e-9` across the whole range. Inputs are
/// clamped to the largest open interval representable in `F`, so `q = 0.0`
/// and `q = 1.0` map to large finite values rather than infinities.
///
/// # Type Parameters
///
/// * `F` - Floating-point type (e.g., `f64`)
///
/// # Examples
///
/// ```rust
/// use sampler_dist::quantile::inverse_standard_normal;
///
/// assert_eq!(inverse_standard_normal(0.5), 0.0);
/// let z: f64 = inverse_standard_normal(0.975);
/// assert!((z - 1.959964).abs() < 1e-6);
/// ```
pub fn inverse_standard_normal<F: Float>(q: F) -> F {
    let half = F::from(0.5).unwrap();
    let low = F::min_positive_value();
    let high = F::one() - F::epsilon() * half;
    let q = q.max(low).min(high);

    let split = F::from(TAIL_SPLIT).unwrap();
    if q < split {
        // Lower tail.
        let t = (-(F::one() + F::one()) * q.ln()).sqrt();
        polynomial(&TAIL_NUM, t) / polynomial(&TAIL_DEN, t)
    } else if q > F::one() - split {
        // Upper tail, by symmetry.
        let t = (-(F::one() + F::one()) * (F::one() - q).ln()).sqrt();
        -polynomial(&TAIL_NUM, t) / polynomial(&TAIL_DEN, t)
    } else {
        let u = q - half;
        let r = u * u;
        u * polynomial(&CENTRAL_NUM, r) / polynomial(&CENTRAL_DEN, r)
    }
}

/// Horner evaluation with coefficients given highest power first.
#[inline]
fn polynomial<F: Float>(coefficients: &[f64], x: F) -> F {
    coefficients
        .iter()
        .fold(F::zero(), |acc, &c| acc * x + F::from(c).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // Abramowitz & Stegun 7.1.26 erf approximation, accurate to ~1.5e-7.
    // Serves as an independent CDF for round-trip checks.
    fn standard_normal_cdf(x: f64) -> f64 {
        let z = x / std::f64::consts::SQRT_2;
        let sign = z.signum();
        let z = z.abs();
        let t = 1.0 / (1.0 + 0.3275911 * z);
        let poly = t
            * (0.254829592
                + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
        let erf = 1.0 - poly * (-z * z).exp();
        0.5 * (1.0 + sign * erf)
    }

    #[test]
    fn test_median_is_zero() {
        assert_eq!(inverse_standard_normal(0.5_f64), 0.0);
    }

    #[test]
    fn test_known_quantiles() {
        assert_relative_eq!(
            inverse_standard_normal(0.975_f64),
            1.959963984540054,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            inverse_standard_normal(0.01_f64),
            -2.3263478740408408,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            inverse_standard_normal(0.8413447460685429_f64),
            1.0,
            max_relative = 1e-7
        );
    }

    #[test]
    fn test_symmetry() {
        for &q in &[0.001, 0.01, 0.1, 0.25, 0.4, 0.49] {
            assert_relative_eq!(
                inverse_standard_normal(q),
                -inverse_standard_normal(1.0 - q),
                max_relative = 1e-8
            );
        }
    }

    #[test]
    fn test_round_trip_against_reference_cdf() {
        for i in 1..100 {
            let q = i as f64 / 100.0;
            let x = inverse_standard_normal(q);
            assert_abs_diff_eq!(standard_normal_cdf(x), q, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_monotonic() {
        let mut previous = f64::NEG_INFINITY;
        for i in 1..1000 {
            let x = inverse_standard_normal(i as f64 / 1000.0);
            assert!(x > previous);
            previous = x;
        }
    }

    #[test]
    fn test_boundaries_stay_finite() {
        assert!(inverse_standard_normal(0.0_f64).is_finite());
        assert!(inverse_standard_normal(1.0_f64).is_finite());
        assert!(inverse_standard_normal(0.0_f64) < -8.0);
        assert!(inverse_standard_normal(1.0_f64) > 8.0);
    }

    #[test]
    fn test_deep_tail() {
        let z = inverse_standard_normal(1e-300_f64);
        assert!(z.is_finite());
        assert!(z < -37.0);
    }

    #[test]
    fn test_works_with_f32() {
        let z: f32 = inverse_standard_normal(0.975_f32);
        assert_abs_diff_eq!(z, 1.959964, epsilon = 1e-4);
    }

    mod property_tests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(512))]

            #[test]
            fn prop_strictly_increasing(q in 0.0001_f64..0.949, gap in 0.001_f64..0.05) {
                prop_assert!(inverse_standard_normal(q) < inverse_standard_normal(q + gap));
            }

            #[test]
            fn prop_round_trip_through_cdf(q in 0.001_f64..0.999) {
                let x = inverse_standard_normal(q);
                prop_assert!((super::standard_normal_cdf(x) - q).abs() < 1e-6);
            }

            #[test]
            fn prop_antisymmetric_about_median(q in 0.0001_f64..0.4999) {
                let lower = inverse_standard_normal(q);
                let upper = inverse_standard_normal(1.0 - q);
                prop_assert!((lower + upper).abs() <= lower.abs() * 1e-8 + 1e-12);
            }

            #[test]
            fn prop_finite_on_closed_interval(q in 0.0_f64..=1.0) {
                prop_assert!(inverse_standard_normal(q).is_finite());
            }
        }
    }
}
