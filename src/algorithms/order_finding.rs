// src/algorithms/order_finding.rs
//
// Order-finding factorization: the classical analogue of the period-finding
// step in Shor's algorithm
// Complexity: O(order) multiplications per attempt, worst case O(n)
// Best for: small demonstration composites; the order loop is brute force

use log::debug;

use crate::core::random_source::RandomSource;
use crate::integer_math::exponentiation::power_mod;
use crate::integer_math::gcd::GCD;
use crate::integer_math::multiplicative_order::multiplicative_order;

/// Attempts to factor n by multiplicative order finding.
///
/// Each attempt draws a random base `a` in `[0, n)`. If `a` already shares
/// a factor with `n`, that gcd is the answer. Otherwise the order `r` of
/// `a` modulo `n` is computed by brute force; for an even `r`, the value
/// `x = a^(r/2) mod n` is a square root of 1 modulo `n`, and any root other
/// than ±1 splits `n` through `gcd(n, x - 1)`. A draw producing an odd
/// order or a degenerate relation (`x ≡ ±1`) costs one attempt and the
/// loop retries with a fresh base.
///
/// # Arguments
/// * `n` - The number to factor (must be composite and > 1)
/// * `rng` - Source of random bases; seed it for reproducible runs
/// * `max_attempts` - Maximum number of bases drawn before giving up
///
/// # Returns
/// Some((p, q)) where p * q = n and 1 < p, q < n, or None if no factor was
/// found within `max_attempts` (in particular when n is prime).
///
/// # Examples
/// ```
/// use shor::algorithms::order_finding::order_finding;
/// use shor::core::random_source::RandomSource;
///
/// let mut rng = RandomSource::from_seed(7);
/// let (p, q) = order_finding(15, &mut rng, 10000).unwrap();
/// assert_eq!(p * q, 15);
/// ```
pub fn order_finding(n: u64, rng: &mut RandomSource, max_attempts: usize) -> Option<(u64, u64)> {
    if n < 2 {
        return None;
    }

    for attempt in 1..=max_attempts {
        let a = rng.next_max(n);

        // step 1 - a shared factor of the raw draw is already an answer
        let p = GCD::find_gcd_pair(a, n);
        if p != 1 {
            if p < n {
                debug!("attempt {}: gcd({}, {}) = {} is a factor", attempt, a, n, p);
                return Some((p, n / p));
            }
            // only a == 0 lands here; the gcd is n itself and the base has
            // no multiplicative order
            debug!("attempt {}: drew 0, retrying", attempt);
            continue;
        }

        // step 2 - a is coprime to n, so its order is defined
        let r = multiplicative_order(a, n);
        if r & 1 == 1 {
            debug!("attempt {}: order {} of base {} is odd, retrying", attempt, r, a);
            continue;
        }

        // step 3 - gcd check on the square root of 1 given by a^(r/2)
        let x = power_mod(a, r >> 1, n);
        let p1 = GCD::find_gcd_pair(n, x - 1);
        let p2 = GCD::find_gcd_pair(n, x + 1);

        if p1 == 1 || p2 == 1 {
            debug!(
                "attempt {}: degenerate relation for base {} (order {}), retrying",
                attempt, a, r
            );
            continue;
        }

        // p1 divides n and is nontrivial; dividing rather than returning
        // (p1, p2) keeps the product exact when n is not squarefree
        debug!(
            "attempt {}: base {} with order {} splits {} = {} × {}",
            attempt, a, r, n, p1, n / p1
        );
        return Some((p1, n / p1));
    }

    debug!("no factor of {} found after {} attempts", n, max_attempts);
    None
}
