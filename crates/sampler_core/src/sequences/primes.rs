//! Prime number helpers for radical-inverse bases.

/// Tests primality by trial division.
///
/// Intended for the small primes used as radical-inverse bases; not a
/// general-purpose primality test for cryptographic sizes.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut factor = 3;
    while factor * factor <= n {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }
    true
}

/// Returns the first `n` primes, in ascending order.
///
/// Halton and Hammersley use these as their per-axis van der Corput bases:
/// axis `d` reverses digits in base `first_primes(dim)[d]`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sequences::first_primes;
///
/// assert_eq!(first_primes(5), vec![2, 3, 5, 7, 11]);
/// ```
pub fn first_primes(n: usize) -> Vec<u64> {
    let mut primes = Vec::with_capacity(n);
    let mut candidate = 2;
    while primes.len() < n {
        if is_prime(candidate) {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}
