// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Randomness used by key generation and encryption.
//!
//! The core never reads entropy directly; every draw goes through a
//! [`RandomSource`]. [`OsRandom`] is the default and is backed by the
//! operating system CSPRNG.

use num_bigint_dig::{BigUint, RandBigInt, RandPrime};
use rand::SeedableRng;
use rand::rngs::{OsRng, StdRng};

use crate::{Error, Result};

/// Supplier of cryptographically secure random integers and primes.
///
/// Implementations must be `Sync`: key generation draws both primes
/// concurrently from the same source.
pub trait RandomSource: Sync {
    /// Uniformly random integer in `[0, bound)`.
    fn random_below(&self, bound: &BigUint) -> Result<BigUint>;

    /// Random prime of exactly `bits` bits with the two top bits set, so the
    /// product of two such primes is exactly `2 * bits` long.
    fn random_prime(&self, bits: usize) -> Result<BigUint>;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn random_below(&self, bound: &BigUint) -> Result<BigUint> {
        (**self).random_below(bound)
    }

    fn random_prime(&self, bits: usize) -> Result<BigUint> {
        (**self).random_prime(bits)
    }
}

/// Operating system backed random source.
///
/// Each draw seeds a fresh `StdRng` from `OsRng`. Seeding is the only step
/// that touches the OS and the only one that can fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    fn rng() -> Result<StdRng> {
        StdRng::from_rng(OsRng).map_err(|e| Error::RandomnessFailure(e.to_string()))
    }
}

impl RandomSource for OsRandom {
    fn random_below(&self, bound: &BigUint) -> Result<BigUint> {
        Ok(Self::rng()?.gen_biguint_below(bound))
    }

    fn random_prime(&self, bits: usize) -> Result<BigUint> {
        Ok(Self::rng()?.gen_prime(bits))
    }
}


#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::testing::SeededRandom;
    use super::*;

    use num_bigint_dig::prime::probably_prime;

    #[test]
    fn os_random_below_respects_bound() {
        let bound = BigUint::from(1000u32);
        for _ in 0..100 {
            assert!(OsRandom.random_below(&bound).unwrap() < bound);
        }
    }

    #[test]
    fn os_random_prime_has_exact_length() {
        for bits in [32, 64, 128, 256] {
            let p = OsRandom.random_prime(bits).unwrap();
            assert_eq!(p.bits(), bits);
            assert!(probably_prime(&p, 20));
        }
    }

    #[test]
    fn product_of_two_primes_has_double_length() {
        let p = OsRandom.random_prime(64).unwrap();
        let q = OsRandom.random_prime(64).unwrap();
        assert_eq!((&p * &q).bits(), 128);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);
        assert_eq!(a.random_prime(128).unwrap(), b.random_prime(128).unwrap());
    }

    #[test]
    fn reference_forwards_to_source() {
        let source = SeededRandom::new(1);
        let by_ref: &dyn RandomSource = &source;
        let bound = BigUint::from(10u32);
        assert!(by_ref.random_below(&bound).unwrap() < bound);
    }
}
