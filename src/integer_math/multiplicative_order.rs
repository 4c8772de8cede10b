// src/integer_math/multiplicative_order.rs

use crate::integer_math::exponentiation::mul_mod;
use crate::integer_math::gcd::GCD;

/// Computes the multiplicative order of `t` modulo `modulus`: the smallest
/// `r >= 1` with `t^r ≡ 1 (mod modulus)`.
///
/// Brute force by repeated multiplication, O(order) steps and worst case
/// O(modulus). That cost is the point of the demonstration; do not expect
/// this to scale.
///
/// The caller must ensure `gcd(t, modulus) == 1` and `modulus >= 2`. A base
/// sharing a factor with the modulus has no order, and the loop would never
/// observe 1.
pub fn multiplicative_order(t: u64, modulus: u64) -> u64 {
    debug_assert!(modulus >= 2);
    debug_assert!(GCD::are_coprime(&[t, modulus]));

    let t = t % modulus;
    let mut result = t;
    let mut r = 1u64;

    while result != 1 {
        result = mul_mod(result, t, modulus);
        r += 1;
    }

    r
}
