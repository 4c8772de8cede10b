// src/algorithms/mod.rs
//
// Public entry point wrapping the order-finding routine with input
// validation, logging, and a retry budget.

pub mod order_finding;

use log::info;

use crate::core::random_source::RandomSource;
use crate::factor::factor_pair::FactorPair;

/// Attempts to factor n into two nontrivial factors.
///
/// Validates the target, then runs the probabilistic order-finding loop
/// with the given attempt budget. The algorithm never fails on a valid
/// composite given enough attempts; a prime (or otherwise exhausted) target
/// surfaces as an error rather than looping forever.
///
/// # Arguments
/// * `n` - The number to factor
/// * `rng` - Source of random bases; seed it for reproducible runs
/// * `max_attempts` - Maximum number of bases drawn before giving up
///
/// # Returns
/// * `Ok(pair)` - A factorization with pair.p * pair.q == n, both factors > 1
/// * `Err(String)` - n was not factorable input, or the budget ran out
///
/// # Examples
/// ```
/// use shor::algorithms::factor;
/// use shor::core::random_source::RandomSource;
///
/// let mut rng = RandomSource::from_seed(1);
/// let pair = factor(21, &mut rng, 10000).unwrap();
/// assert_eq!(pair.p * pair.q, 21);
/// ```
pub fn factor(n: u64, rng: &mut RandomSource, max_attempts: usize) -> Result<FactorPair, String> {
    if n < 2 {
        return Err(format!(
            "cannot factor {}: the target must be composite and greater than 1",
            n
        ));
    }

    info!("Factoring {} by order finding (up to {} attempts)", n, max_attempts);

    match order_finding::order_finding(n, rng, max_attempts) {
        Some((p, q)) => {
            let pair = FactorPair::new(p, q);
            info!("✓ Found {} = {} × {}", n, pair.p, pair.q);
            Ok(pair)
        }
        None => {
            info!("✗ No factor of {} found after {} attempts", n, max_attempts);
            Err(format!(
                "no factor of {} found after {} attempts - {} may be prime",
                n, max_attempts, n
            ))
        }
    }
}
