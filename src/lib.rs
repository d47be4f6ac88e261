// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paillier Cryptosystem
//!
//! Probabilistic public-key encryption with additive homomorphism, based on
//! the decisional composite residuosity assumption modulo n².
//!
//! Reference: [Paillier (1999), EUROCRYPT](https://link.springer.com/chapter/10.1007/3-540-48910-X_16)
//!
//! Keys use `g = n + 1`, which turns encryption into a single modular
//! exponentiation. Decryption works modulo p² and q² and recombines the
//! residues with the Chinese Remainder Theorem.
//!
//! ## Homomorphic operations
//!
//! - [`Homomorphic::add_cipher`]: E(a) ⊕ E(b) = E(a + b)
//! - [`Homomorphic::add`]: E(m) ⊕ k = E(m + k)
//! - [`Homomorphic::mul`]: E(m) ⊗ k = E(m · k)
//!
//! ## Security
//!
//! Semantically secure against passive adversaries. Ciphertexts are
//! malleable by design. No operation here runs in constant time. The private
//! key is zeroized on drop via the `zeroize` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paillier_crt::{Decrypt, Encrypt, Homomorphic, KeyPair};
//! use num_bigint_dig::BigUint;
//!
//! let keypair = KeyPair::generate_with_size(2048).expect("key generation failed");
//!
//! let c15 = keypair.encrypt(BigUint::from(15u32).to_bytes_be()).expect("encryption failed");
//! let c20 = keypair.encrypt(BigUint::from(20u32).to_bytes_be()).expect("encryption failed");
//!
//! let sum = keypair.add_cipher(&c15, &c20);
//! let decrypted = keypair.decrypt(&sum).expect("decryption failed");
//! assert_eq!(BigUint::from_bytes_be(&decrypted), BigUint::from(35u32));
//! ```

mod ciphertext;
mod crypto;
mod error;
mod keypair;
pub mod random;

pub use ciphertext::*;
pub use crypto::{Decrypt, Encrypt, Homomorphic};
pub use error::*;
pub use keypair::*;
pub use random::{OsRandom, RandomSource};

pub use num_bigint_dig::BigUint;
