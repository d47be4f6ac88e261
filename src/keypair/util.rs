// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prime search and CRT precomputation for Paillier key generation.

use num_bigint_dig::BigUint;
use num_traits::One;

use crate::crypto::util::{l_function, mod_inverse};
use crate::random::RandomSource;
use crate::Result;

/// Draws two distinct primes of `bits` bits each.
///
/// The first prime is searched on the rayon pool while the second is searched
/// on the calling thread. Both searches complete before the results are
/// compared; on a collision only the first prime is redrawn. Any draw failure
/// is returned as-is and no prime is handed out.
pub(crate) fn generate_distinct_primes<R>(source: &R, bits: usize) -> Result<(BigUint, BigUint)>
where
    R: RandomSource + ?Sized,
{
    let (p_result, q_result) =
        rayon::join(|| source.random_prime(bits), || source.random_prime(bits));

    let q = q_result?;
    let mut p = p_result?;

    while p == q {
        tracing::debug!(bits, "prime collision, redrawing");
        p = source.random_prime(bits)?;
    }

    Ok((p, q))
}

/// CRT decryption helper for one prime factor.
///
/// hp = L((1 - n) mod p², p)⁻¹ mod p
///
/// With g = n + 1 the binomial expansion gives g^(p-1) ≡ 1 - n (mod p²), so
/// no exponentiation is needed. Returns `None` when the inverse does not
/// exist, which only happens for malformed factors.
pub(crate) fn crt_helper(p: &BigUint, p_squared: &BigUint, n: &BigUint) -> Option<BigUint> {
    // (1 - n) mod p², kept non-negative
    let n_mod = n % p_squared;
    let gp = (p_squared + BigUint::one() - n_mod) % p_squared;

    let lp = l_function(&gp, p).ok()?;
    mod_inverse(&lp, p)
}
