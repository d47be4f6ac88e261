// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Homomorphic;
use crate::ciphertext::Ciphertext;
use crate::keypair::PublicKey;

use num_bigint_dig::BigUint;

// Constants are deliberately not reduced modulo n. For k >= n the result is
// still a well-formed ciphertext, but since g has order n in Z*_{n²} the
// plaintext of `add` wraps to (m + k) mod n, and `mul` raises the nonce term
// by the unreduced k.
impl Homomorphic for PublicKey {
    fn add_cipher(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        Ciphertext::new((a.value() * b.value()) % &self.n_squared)
    }

    fn add<K: AsRef<[u8]>>(&self, ciphertext: &Ciphertext, constant: K) -> Ciphertext {
        let k = BigUint::from_bytes_be(constant.as_ref());
        let gk = self.g.modpow(&k, &self.n_squared);
        Ciphertext::new((ciphertext.value() * gk) % &self.n_squared)
    }

    fn mul<K: AsRef<[u8]>>(&self, ciphertext: &Ciphertext, constant: K) -> Ciphertext {
        let k = BigUint::from_bytes_be(constant.as_ref());
        Ciphertext::new(ciphertext.value().modpow(&k, &self.n_squared))
    }
}
