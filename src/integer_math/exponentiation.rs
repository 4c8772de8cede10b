// src/integer_math/exponentiation.rs

/// Computes `(a * b) mod modulus` with a 128-bit intermediate, so the
/// product of two values below the modulus can never wrap.
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Modular exponentiation by repeated squaring.
///
/// Reduces at every step, so intermediates stay below the modulus and the
/// result is `base^exponent mod modulus` for any `u64` inputs with
/// `modulus > 0`. `power_mod(base, 0, modulus)` is `1 % modulus`.
pub fn power_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    let mut factor = base % modulus;
    let mut power = exponent;

    while power > 0 {
        if power & 1 == 1 {
            result = mul_mod(result, factor, modulus);
        }
        power >>= 1;
        factor = mul_mod(factor, factor, modulus);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_mod_zero_exponent() {
        assert_eq!(power_mod(5, 0, 7), 1);
        assert_eq!(power_mod(0, 0, 7), 1);
        assert_eq!(power_mod(5, 0, 1), 0); // 1 % 1
    }

    #[test]
    fn test_power_mod_known_values() {
        assert_eq!(power_mod(2, 10, 1000), 24);
        assert_eq!(power_mod(3, 5, 7), 5); // 243 mod 7
        assert_eq!(power_mod(7, 1, 15), 7);
        assert_eq!(power_mod(4, 2, 15), 1);
    }

    #[test]
    fn test_power_mod_halving_recurrence() {
        let cases = [(2u64, 13u64, 1000u64), (7, 20, 15), (123, 45, 677), (10, 18, 19)];
        for (base, e, m) in cases {
            let half = power_mod(base, e / 2, m);
            let mut expected = mul_mod(half, half, m);
            if e & 1 == 1 {
                expected = mul_mod(expected, base % m, m);
            }
            assert_eq!(power_mod(base, e, m), expected);
        }
    }

    #[test]
    fn test_power_mod_no_overflow_near_word_size() {
        // Fermat: a^(p-1) ≡ 1 (mod p) for prime p; the intermediate squares
        // here exceed 64 bits many times over
        let p = 1_000_000_007u64;
        assert_eq!(power_mod(123_456_789, p - 1, p), 1);
        assert_eq!(mul_mod(p - 1, p - 1, p), 1);
    }
}
