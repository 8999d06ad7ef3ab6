//! Van der Corput radical-inverse sequence.

/// Computes the base-`b` radical inverse of `index`.
///
/// The digits of `index` in base `base` are mirrored across the radix point:
/// index 6 in base 2 is `110`, so its radical inverse is `0.011` = 0.375.
/// Index 0 maps to 0. The sequence over indices 1, 2, 3, ... fills `(0, 1)`
/// ever more densely and is the building block of the Halton and Hammersley
/// point sets.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::van_der_corput;
///
/// let first: Vec<f64> = (1..=4).map(|i| van_der_corput(i, 2)).collect();
/// assert_eq!(first, vec![0.5, 0.25, 0.75, 0.125]);
/// ```
pub fn van_der_corput(mut index: u64, base: u64) -> f64 {
    debug_assert!(base >= 2);
    let mut inverse = 0.0;
    let mut denominator = 1.0;
    while index > 0 {
        denominator *= base as f64;
        inverse += (index % base) as f64 / denominator;
        index /= base;
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_van_der_corput_base_two() {
        assert_eq!(van_der_corput(1, 2), 0.5);
        assert_eq!(van_der_corput(2, 2), 0.25);
        assert_eq!(van_der_corput(3, 2), 0.75);
        assert_eq!(van_der_corput(4, 2), 0.125);
        assert_eq!(van_der_corput(5, 2), 0.625);
        assert_eq!(van_der_corput(6, 2), 0.375);
        assert_eq!(van_der_corput(7, 2), 0.875);
        assert_eq!(van_der_corput(8, 2), 0.0625);
    }

    #[test]
    fn test_van_der_corput_base_three() {
        assert_relative_eq!(van_der_corput(1, 3), 1.0 / 3.0);
        assert_relative_eq!(van_der_corput(2, 3), 2.0 / 3.0);
        assert_relative_eq!(van_der_corput(3, 3), 1.0 / 9.0);
        assert_relative_eq!(van_der_corput(4, 3), 4.0 / 9.0);
        assert_relative_eq!(van_der_corput(5, 3), 7.0 / 9.0);
    }

    #[test]
    fn test_van_der_corput_zero_index() {
        assert_eq!(van_der_corput(0, 2), 0.0);
        assert_eq!(van_der_corput(0, 7), 0.0);
    }

    #[test]
    fn test_van_der_corput_stays_in_unit_interval() {
        for base in [2, 3, 5, 7, 11] {
            for index in 0..500 {
                let v = van_der_corput(index, base);
                assert!((0.0..1.0).contains(&v), "vdc({index}, {base}) = {v}");
            }
        }
    }
}
