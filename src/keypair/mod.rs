// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod util;

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::random::{OsRandom, RandomSource};
use crate::{Decrypt, Encrypt, Homomorphic};

use num_bigint_dig::BigUint;
use num_bigint_dig::prime::probably_prime;
use num_traits::{One, Zero};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Miller-Rabin rounds used when validating externally supplied factors.
const PRIMALITY_ROUNDS: usize = 20;

/// Public parameters of the cryptosystem.
///
/// `n = p·q` for two equal-length primes, which makes `g = n + 1` a valid
/// generator. `n²` is cached since every operation reduces modulo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) g: BigUint,
    pub(crate) n_squared: BigUint,
}

impl PublicKey {
    /// Construct a public key from its modulus.
    ///
    /// The modulus must be odd and greater than one.
    pub fn new(n: BigUint) -> Result<Self> {
        if n <= BigUint::one() || (&n % 2u32).is_zero() {
            return Err(Error::InvalidPublicKey);
        }

        let g = &n + BigUint::one();
        let n_squared = &n * &n;

        Ok(Self { n, g, n_squared })
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the generator `g = n + 1`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return `n²`, the ciphertext modulus.
    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }

    /// Return the bit length of the modulus.
    pub fn bit_length(&self) -> usize {
        self.n.bits()
    }

    /// Byte length of a ciphertext padded to the width of `n²`.
    pub fn ciphertext_len(&self) -> usize {
        self.n_squared.bits().div_ceil(8)
    }
}

/// Secret key material.
///
/// Holds the factorization of `n` together with every value CRT decryption
/// needs. All of it is computed once in [`PrivateKey::from_primes`] and never
/// changes afterwards. Sensitive fields are zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) p_squared: BigUint,
    pub(crate) q_squared: BigUint,
    pub(crate) p_minus_1: BigUint,
    pub(crate) q_minus_1: BigUint,

    /// p⁻¹ mod q, used for CRT recombination.
    pub(crate) p_inv_mod_q: BigUint,

    /// L(g^(p-1) mod p², p)⁻¹ mod p
    pub(crate) hp: BigUint,

    /// L(g^(q-1) mod q², q)⁻¹ mod q
    pub(crate) hq: BigUint,
}

impl PrivateKey {
    /// Build a private key from two distinct primes of equal bit length.
    ///
    /// This is the only way to construct a private key; the CRT values are
    /// derived here and the result is immutable.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<Self> {
        let two = BigUint::from(2u32);
        if p <= two || q <= two || p == q || p.bits() != q.bits() {
            return Err(Error::InvalidPrivateKey);
        }
        if !probably_prime(&p, PRIMALITY_ROUNDS) || !probably_prime(&q, PRIMALITY_ROUNDS) {
            return Err(Error::InvalidPrivateKey);
        }

        let public_key = PublicKey::new(&p * &q)?;
        let n = public_key.n();

        let p_squared = &p * &p;
        let q_squared = &q * &q;
        let p_minus_1 = &p - BigUint::one();
        let q_minus_1 = &q - BigUint::one();

        let p_inv_mod_q =
            crate::crypto::util::mod_inverse(&p, &q).ok_or(Error::InvalidPrivateKey)?;
        let hp = util::crt_helper(&p, &p_squared, n).ok_or(Error::InvalidPrivateKey)?;
        let hq = util::crt_helper(&q, &q_squared, n).ok_or(Error::InvalidPrivateKey)?;

        Ok(Self {
            public_key,
            p,
            q,
            p_squared,
            q_squared,
            p_minus_1,
            q_minus_1,
            p_inv_mod_q,
            hp,
            hq,
        })
    }

    /// Return a reference to the associated public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// A complete key pair consisting of public and private components.
///
/// Secret material is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters (2048-bit modulus).
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build()
    }

    /// Generate a key pair with a custom modulus size.
    pub fn generate_with_size(bit_length: usize) -> Result<Self> {
        KeyPairBuilder::new().bit_length(bit_length).build()
    }

    /// Wrap an existing private key.
    pub fn from_private_key(secret: PrivateKey) -> Self {
        let public = secret.public_key().clone();
        Self { public, secret }
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

impl Encrypt for KeyPair {
    fn encrypt_and_nonce<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<(Ciphertext, BigUint)> {
        self.public.encrypt_and_nonce(plaintext)
    }

    fn encrypt_with_nonce<P: AsRef<[u8]>>(
        &self,
        nonce: &BigUint,
        plaintext: P,
    ) -> Result<Ciphertext> {
        self.public.encrypt_with_nonce(nonce, plaintext)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        self.secret.decrypt(ciphertext)
    }
}

impl Homomorphic for KeyPair {
    fn add_cipher(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        self.public.add_cipher(a, b)
    }

    fn add<K: AsRef<[u8]>>(&self, ciphertext: &Ciphertext, constant: K) -> Ciphertext {
        self.public.add(ciphertext, constant)
    }

    fn mul<K: AsRef<[u8]>>(&self, ciphertext: &Ciphertext, constant: K) -> Ciphertext {
        self.public.mul(ciphertext, constant)
    }
}

/// Builder for generating key pairs with configurable parameters.
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    bit_length: usize,
}

impl KeyPairBuilder {
    /// Minimum recommended for production (NIST/ENISA standard)
    pub const MIN_SECURE_BITS: usize = 2048;

    /// Absolute minimum enforced in production builds
    #[cfg(not(feature = "allow-weak-keys"))]
    pub const MIN_BITS: usize = 128;

    #[cfg(feature = "allow-weak-keys")]
    pub const MIN_BITS: usize = 64;

    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self { bit_length: Self::MIN_SECURE_BITS }
    }

    /// Set the desired modulus bit length.
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.bit_length = bits;
        self
    }

    /// Generate the key pair from the operating system CSPRNG.
    pub fn build(self) -> Result<KeyPair> {
        self.build_with(&OsRandom)
    }

    /// Generate the key pair from the given random source.
    ///
    /// Blocks until both primes are found. No partial key is returned on
    /// failure.
    pub fn build_with<R: RandomSource + ?Sized>(self, source: &R) -> Result<KeyPair> {
        if self.bit_length < Self::MIN_BITS || self.bit_length % 2 != 0 {
            return Err(Error::InvalidKeySize { min: Self::MIN_BITS, actual: self.bit_length });
        }

        if self.bit_length < Self::MIN_SECURE_BITS {
            tracing::warn!(
                bits = self.bit_length,
                min_secure = Self::MIN_SECURE_BITS,
                "generating cryptographically weak Paillier key"
            );
        }

        tracing::debug!(bits = self.bit_length, "generating Paillier key pair");

        let (p, q) = util::generate_distinct_primes(source, self.bit_length / 2)?;
        let secret = PrivateKey::from_primes(p, q)?;

        tracing::debug!(bits = secret.public_key().bit_length(), "Paillier key pair generated");

        Ok(KeyPair::from_private_key(secret))
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}
