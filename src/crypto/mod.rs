// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod decrypt;
mod encrypt;
mod homomorphic;
pub(crate) mod util;

use crate::ciphertext::Ciphertext;
use crate::error::Result;

use num_bigint_dig::BigUint;

/// Encrypts a single plaintext integer.
///
/// Plaintexts are unsigned big-endian byte strings and must encode an integer
/// strictly smaller than the public modulus `n`.
pub trait Encrypt {
    /// Encrypt under a fresh random nonce.
    fn encrypt<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<Ciphertext> {
        self.encrypt_and_nonce(plaintext).map(|(ciphertext, _)| ciphertext)
    }

    /// Encrypt under a fresh random nonce and return the nonce as well.
    ///
    /// The nonce is what a proof of correct encryption needs; treat it as
    /// secret.
    fn encrypt_and_nonce<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<(Ciphertext, BigUint)>;

    /// Encrypt deterministically under a caller-supplied nonce.
    ///
    /// The nonce must lie in `[1, n)` and must never be reused.
    fn encrypt_with_nonce<P: AsRef<[u8]>>(&self, nonce: &BigUint, plaintext: P)
    -> Result<Ciphertext>;
}

/// Decrypts a single ciphertext into the minimal big-endian plaintext bytes.
pub trait Decrypt {
    /// Recover the plaintext `m` from a ciphertext `c`.
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>>;
}

/// Operations on ciphertexts that need only the public key.
///
/// None of these draw randomness, so the results are linkable to their
/// inputs. Constants are unsigned big-endian integers and are used as given,
/// without reduction modulo `n`.
pub trait Homomorphic {
    /// E(a) · E(b) mod n² = E(a + b)
    fn add_cipher(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext;

    /// E(m) · g^k mod n² = E(m + k)
    fn add<K: AsRef<[u8]>>(&self, ciphertext: &Ciphertext, constant: K) -> Ciphertext;

    /// E(m)^k mod n² = E(m · k)
    fn mul<K: AsRef<[u8]>>(&self, ciphertext: &Ciphertext, constant: K) -> Ciphertext;
}


#[cfg(test)]
mod test_decryption {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::Error;
    use crate::keypair::KeyPair;

    use num_traits::{One, Zero};

    fn create_test_keypair() -> KeyPair {
        KeyPair::generate_with_size(512).unwrap()
    }

    #[test]
    fn ciphertext_equal_to_n_squared_is_rejected() {
        let keypair = create_test_keypair();
        let c = Ciphertext::new(keypair.public_key().n_squared().clone());

        assert_eq!(keypair.decrypt(&c).err(), Some(Error::CiphertextTooLarge));
    }

    #[test]
    fn ciphertext_just_below_n_squared_is_accepted() {
        let keypair = create_test_keypair();
        let c = Ciphertext::new(keypair.public_key().n_squared() - BigUint::one());

        assert!(keypair.decrypt(&c).is_ok());
    }

    #[test]
    fn zero_ciphertext_is_invalid() {
        let keypair = create_test_keypair();
        let c = Ciphertext::new(BigUint::zero());

        assert_eq!(keypair.decrypt(&c).err(), Some(Error::InvalidCiphertext));
    }

    #[test]
    fn ciphertext_sharing_a_factor_is_invalid() {
        let keypair = create_test_keypair();
        let c = Ciphertext::new(keypair.private_key().q.clone());

        assert_eq!(keypair.decrypt(&c).err(), Some(Error::InvalidCiphertext));
    }

    #[test]
    fn ciphertext_from_bytes_decrypts() {
        let keypair = create_test_keypair();
        let m = BigUint::from(123_456_789u64);

        let bytes = keypair.encrypt(m.to_bytes_be()).unwrap().to_bytes();
        let plaintext = keypair.decrypt(&Ciphertext::from(&bytes)).unwrap();

        assert_eq!(m, BigUint::from_bytes_be(&plaintext));
    }
}
