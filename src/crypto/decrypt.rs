// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Decrypt, util};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PrivateKey;

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::Zero;

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        let c = ciphertext.value();
        if c >= self.public_key.n_squared() {
            return Err(Error::CiphertextTooLarge);
        }

        // Decrypt modulo p² and q² separately, where exponentiation is far
        // cheaper than modulo n², then recombine with the CRT.
        //
        // mp = L(c^(p-1) mod p², p) · hp mod p
        // mq = L(c^(q-1) mod q², q) · hq mod q
        let mp = Self::residue(c, &self.p, &self.p_squared, &self.p_minus_1, &self.hp)?;
        let mq = Self::residue(c, &self.q, &self.q_squared, &self.q_minus_1, &self.hq)?;

        Ok(util::biguint_to_bytes_minimal(&self.crt(&mp, &mq)))
    }
}

impl PrivateKey {
    /// Plaintext residue modulo one prime factor.
    fn residue(
        c: &BigUint,
        prime: &BigUint,
        prime_squared: &BigUint,
        prime_minus_1: &BigUint,
        h: &BigUint,
    ) -> Result<BigUint> {
        let cp = c.modpow(prime_minus_1, prime_squared);
        let lp = util::l_function(&cp, prime)?;
        Ok((lp * h) % prime)
    }

    /// Garner recombination.
    ///
    /// u = (mq - mp) · p⁻¹ mod q
    /// m = mp + u·p mod n
    fn crt(&self, mp: &BigUint, mq: &BigUint) -> BigUint {
        let mq_minus_mp = util::sub_mod(mq, &(mp % &self.q), &self.q);
        let u = (mq_minus_mp * &self.p_inv_mod_q) % &self.q;
        (mp + u * &self.p) % self.public_key.n()
    }

    /// Textbook decryption over the full modulus, skipping the CRT split.
    ///
    /// m = L(c^λ mod n², n) · μ mod n, with λ = lcm(p-1, q-1) and
    /// μ = L(g^λ mod n², n)⁻¹ mod n.
    ///
    /// Several times slower than [`Decrypt::decrypt`]. It exists to
    /// cross-check the CRT path and always returns the same plaintext.
    pub fn decrypt_full_modulus(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        let pk = &self.public_key;
        let c = ciphertext.value();
        if c >= pk.n_squared() {
            return Err(Error::CiphertextTooLarge);
        }

        // The CRT path rejects these through the L function; here c^λ is not
        // necessarily zero, so check divisibility directly.
        if (c % &self.p).is_zero() || (c % &self.q).is_zero() {
            return Err(Error::InvalidCiphertext);
        }

        let lambda = self.p_minus_1.lcm(&self.q_minus_1);

        let gl = pk.g().modpow(&lambda, pk.n_squared());
        let mu = util::mod_inverse(&util::l_function(&gl, pk.n())?, pk.n())
            .ok_or(Error::InvalidPrivateKey)?;

        let cl = c.modpow(&lambda, pk.n_squared());
        let m = (util::l_function(&cl, pk.n())? * mu) % pk.n();

        Ok(util::biguint_to_bytes_minimal(&m))
    }
}
