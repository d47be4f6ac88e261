// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Encrypt;
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PublicKey;
use crate::random::{OsRandom, RandomSource};

use num_bigint_dig::BigUint;
use num_traits::One;

impl Encrypt for PublicKey {
    fn encrypt_and_nonce<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<(Ciphertext, BigUint)> {
        self.encrypt_and_nonce_from(&OsRandom, plaintext)
    }

    fn encrypt_with_nonce<P: AsRef<[u8]>>(
        &self,
        nonce: &BigUint,
        plaintext: P,
    ) -> Result<Ciphertext> {
        let m = BigUint::from_bytes_be(plaintext.as_ref());
        if m >= self.n {
            return Err(Error::MessageTooLarge);
        }

        // c = g^m · r^n mod n²
        //
        // With g = n + 1 the binomial theorem collapses g^m to 1 + m·n mod n²,
        // leaving a single exponentiation for the nonce.
        let gm = (BigUint::one() + &m * &self.n) % &self.n_squared;
        let rn = nonce.modpow(&self.n, &self.n_squared);
        let c = (gm * rn) % &self.n_squared;

        Ok(Ciphertext::new(c))
    }
}

impl PublicKey {
    /// Encrypt with a nonce drawn from `source`, returning both.
    ///
    /// The nonce is drawn from `[1, n)`; a zero nonce would send every
    /// plaintext to the ciphertext `0`.
    pub fn encrypt_and_nonce_from<R, P>(
        &self,
        source: &R,
        plaintext: P,
    ) -> Result<(Ciphertext, BigUint)>
    where
        R: RandomSource + ?Sized,
        P: AsRef<[u8]>,
    {
        let nonce = self.draw_nonce(source)?;
        let ciphertext = self.encrypt_with_nonce(&nonce, plaintext)?;
        Ok((ciphertext, nonce))
    }

    fn draw_nonce<R: RandomSource + ?Sized>(&self, source: &R) -> Result<BigUint> {
        let bound = &self.n - BigUint::one();
        Ok(source.random_below(&bound)? + BigUint::one())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::keypair::KeyPair;
    use crate::random::testing::{FailingRandom, SeededRandom};

    use num_traits::Zero;

    fn create_test_keypair() -> KeyPair {
        KeyPair::generate_with_size(256).unwrap()
    }

    #[test]
    fn matches_textbook_formula() {
        let keypair = create_test_keypair();
        let pk = keypair.public_key();
        let m = BigUint::from(4242u32);
        let r = BigUint::from(987_654_321u64);

        let c = pk.encrypt_with_nonce(&r, m.to_bytes_be()).unwrap();

        let expected = (pk.g().modpow(&m, pk.n_squared()) * r.modpow(pk.n(), pk.n_squared()))
            % pk.n_squared();
        assert_eq!(c.value(), &expected);
    }

    #[test]
    fn nonce_one_leaves_only_generator_term() {
        let keypair = create_test_keypair();
        let pk = keypair.public_key();
        let m = BigUint::from(7u32);

        let c = pk.encrypt_with_nonce(&BigUint::one(), m.to_bytes_be()).unwrap();

        assert_eq!(c.value(), &((BigUint::one() + &m * pk.n()) % pk.n_squared()));
    }

    #[test]
    fn drawn_nonce_is_nonzero_and_below_modulus() {
        let keypair = create_test_keypair();
        let source = SeededRandom::new(99);

        for _ in 0..50 {
            let (_, nonce) = keypair.public_key().encrypt_and_nonce_from(&source, [1u8]).unwrap();
            assert!(!nonce.is_zero());
            assert!(&nonce < keypair.public_key().n());
        }
    }

    #[test]
    fn seeded_source_reproduces_ciphertext() {
        let keypair = create_test_keypair();
        let pk = keypair.public_key();

        let (c1, r1) = pk.encrypt_and_nonce_from(&SeededRandom::new(5), b"abc").unwrap();
        let (c2, r2) = pk.encrypt_and_nonce_from(&SeededRandom::new(5), b"abc").unwrap();

        assert_eq!(r1, r2);
        assert_eq!(c1, c2);
    }

    #[test]
    fn randomness_failure_produces_no_ciphertext() {
        let keypair = create_test_keypair();

        let result = keypair.public_key().encrypt_and_nonce_from(&FailingRandom, [1u8]);
        assert!(matches!(result, Err(Error::RandomnessFailure(_))));
    }

    #[test]
    fn oversized_message_from_source_is_rejected() {
        let keypair = create_test_keypair();
        let n = keypair.public_key().n().to_bytes_be();

        let result = keypair.public_key().encrypt_and_nonce_from(&SeededRandom::new(1), n);
        assert_eq!(result.err(), Some(Error::MessageTooLarge));
    }
}
