// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, ModInverse};
use num_traits::{One, Zero};

use crate::{Error, Result};

/// L(u, n) = (u - 1) / n
///
/// Defined for `u ≡ 1 (mod n)`. A zero `u` means the value being decrypted
/// shares a factor with the modulus, reported as [`Error::InvalidCiphertext`].
#[inline]
pub(crate) fn l_function(u: &BigUint, n: &BigUint) -> Result<BigUint> {
    if u.is_zero() {
        return Err(Error::InvalidCiphertext);
    }
    Ok((u - BigUint::one()) / n)
}

/// Computes a⁻¹ mod m, or `None` when `gcd(a, m) != 1`.
pub(crate) fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    a.mod_inverse(m)?.to_biguint()
}

/// Reduces `a - b` into `[0, m)` without going negative.
///
/// Both operands must already be reduced modulo `m`.
#[inline]
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    if a >= b { (a - b) % m } else { (m - (b - a) % m) % m }
}

/// Converts a recovered plaintext into its minimal big-endian form.
///
/// Zero maps to an empty vector. Both `b""` and `b"\x00"` encrypt to the same
/// integer, so the distinction cannot survive a roundtrip.
pub(crate) fn biguint_to_bytes_minimal(m: &BigUint) -> Vec<u8> {
    if m.is_zero() {
        return Vec::new();
    }
    m.to_bytes_be()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn l_function_divides_after_decrement() {
        let n = BigUint::from(7u32);
        let u = BigUint::from(7u32 * 5 + 1);
        assert_eq!(l_function(&u, &n).unwrap(), BigUint::from(5u32));
    }

    #[test]
    fn l_function_rejects_zero() {
        let n = BigUint::from(7u32);
        assert_eq!(l_function(&BigUint::zero(), &n), Err(Error::InvalidCiphertext));
    }

    #[test]
    fn inverse_exists_for_coprime() {
        let inv = mod_inverse(&BigUint::from(3u32), &BigUint::from(11u32)).unwrap();
        assert_eq!(inv, BigUint::from(4u32));
    }

    #[test]
    fn inverse_missing_for_shared_factor() {
        assert!(mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32)).is_none());
    }

    #[test]
    fn sub_mod_wraps_negative_difference() {
        let m = BigUint::from(11u32);
        assert_eq!(sub_mod(&BigUint::from(3u32), &BigUint::from(8u32), &m), BigUint::from(6u32));
        assert_eq!(sub_mod(&BigUint::from(8u32), &BigUint::from(3u32), &m), BigUint::from(5u32));
        assert_eq!(sub_mod(&BigUint::from(4u32), &BigUint::from(4u32), &m), BigUint::zero());
    }

    #[test]
    fn minimal_bytes_for_zero_is_empty() {
        assert!(biguint_to_bytes_minimal(&BigUint::zero()).is_empty());
        assert_eq!(biguint_to_bytes_minimal(&BigUint::from(256u32)), vec![1, 0]);
    }
}
