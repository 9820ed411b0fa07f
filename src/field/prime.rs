//! Prime-field arithmetic on arbitrary-precision integers.
//!
//! All operations reduce into `[0, m)` and are exact; no step passes through a
//! fixed-width integer or a float. Inputs may be arbitrarily large
//! non-negative integers and are reduced on entry.
//!
//! The infallible helpers require a non-zero modulus; they divide by it.
//! [`mod_inverse`] and the interpolation layer reject degenerate moduli with a
//! typed error instead.
//!
//! # Security
//! - **Not constant-time**: `BigUint` arithmetic is data-dependent. This path
//!   is for integrity auditing, not for hiding the secret from a co-resident
//!   attacker.

use core::mem;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::Error;

/// `(a + b) mod m`.
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a % m + b % m) % m
}

/// `(a - b) mod m`, normalized into `[0, m)`.
///
/// `m` is added before subtracting so the unsigned subtraction can never
/// underflow, covering differences such as `0 - x_j` in the Lagrange basis.
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a % m + m - b % m) % m
}

/// `(a * b) mod m`.
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a % m * (b % m)) % m
}

/// Multiplicative inverse of `a` modulo `m`, via the extended Euclidean
/// algorithm.
///
/// Returns `b` with `(a * b) mod m == 1`, or [`Error::NoInverse`] when
/// `gcd(a, m) != 1`. The `a ≡ 0 (mod m)` case lands here too; it is how a
/// repeated x-coordinate that slipped past set validation surfaces instead of
/// producing a silently wrong result.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, Error> {
    if m.is_zero() {
        return Err(Error::NoInverse);
    }

    // Extended Euclid on (m, a mod m), tracking only the Bezout coefficient
    // of `a`. Signed intermediates are unavoidable here.
    let mut r0 = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut r1 = BigInt::from_biguint(Sign::Plus, a % m);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r = &r0 - &q * &r1;
        r0 = mem::replace(&mut r1, r);
        let t = &t0 - &q * &t1;
        t0 = mem::replace(&mut t1, t);
    }

    // r0 is now gcd(a, m).
    if !r0.is_one() {
        return Err(Error::NoInverse);
    }

    let m_int = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut t = t0 % &m_int;
    if t.sign() == Sign::Minus {
        t += &m_int;
    }
    Ok(t.magnitude().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn m13() -> BigUint {
        BigUint::from(13u32)
    }

    #[test]
    fn test_mod_add_sub() {
        let m = m13();
        assert_eq!(
            mod_add(&BigUint::from(7u32), &BigUint::from(9u32), &m),
            BigUint::from(3u32)
        );
        // 0 - 5 must normalize to m - 5, not underflow.
        assert_eq!(
            mod_sub(&BigUint::from(0u32), &BigUint::from(5u32), &m),
            BigUint::from(8u32)
        );
        assert_eq!(
            mod_sub(&BigUint::from(5u32), &BigUint::from(5u32), &m),
            BigUint::from(0u32)
        );
    }

    #[test]
    fn test_mod_mul_reduces_inputs() {
        let m = m13();
        // 100 * 100 = 10000 = 769*13 + 3
        assert_eq!(
            mod_mul(&BigUint::from(100u32), &BigUint::from(100u32), &m),
            BigUint::from(3u32)
        );
    }

    #[test]
    fn test_mod_inverse_known() {
        let m = m13();
        // 5 * 8 = 40 = 1 mod 13
        assert_eq!(mod_inverse(&BigUint::from(5u32), &m), Ok(BigUint::from(8u32)));
        assert_eq!(mod_inverse(&BigUint::from(1u32), &m), Ok(BigUint::from(1u32)));
    }

    #[test]
    fn test_mod_inverse_of_zero_fails() {
        let m = m13();
        assert_eq!(mod_inverse(&BigUint::from(0u32), &m), Err(Error::NoInverse));
        // Multiples of m reduce to zero as well.
        assert_eq!(mod_inverse(&BigUint::from(26u32), &m), Err(Error::NoInverse));
    }

    #[test]
    fn test_mod_inverse_zero_modulus_fails() {
        assert_eq!(
            mod_inverse(&BigUint::from(3u32), &BigUint::from(0u32)),
            Err(Error::NoInverse)
        );
    }

    #[test]
    fn test_mod_inverse_non_coprime_fails() {
        let m = BigUint::from(12u32);
        assert_eq!(mod_inverse(&BigUint::from(8u32), &m), Err(Error::NoInverse));
        // 5 is coprime to 12: 5 * 5 = 25 = 1 mod 12.
        assert_eq!(mod_inverse(&BigUint::from(5u32), &m), Ok(BigUint::from(5u32)));
    }

    proptest! {
        #[test]
        fn prop_inverse_round_trip(a in 1u128..u128::MAX) {
            // 2^521 - 1 is prime, so every non-zero residue is invertible.
            let m = (BigUint::one() << 521u32) - BigUint::one();
            let a = BigUint::from(a);
            let inv = mod_inverse(&a, &m).unwrap();
            prop_assert_eq!(mod_mul(&a, &inv, &m), BigUint::one());
        }

        #[test]
        fn prop_sub_then_add_round_trips(a in 0u128..u128::MAX, b in 0u128..u128::MAX) {
            let m = (BigUint::one() << 521u32) - BigUint::one();
            let a = BigUint::from(a) % &m;
            let b = BigUint::from(b) % &m;
            let d = mod_sub(&a, &b, &m);
            prop_assert_eq!(mod_add(&d, &b, &m), a);
        }
    }
}
