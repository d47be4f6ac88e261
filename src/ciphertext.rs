// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::ops::Deref;

use num_bigint_dig::BigUint;

/// A Paillier ciphertext, an integer in `[0, N²)`.
///
/// Carries no reference to the key it was produced under; combining
/// ciphertexts from different keys yields garbage, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Minimal unsigned big-endian encoding.
    ///
    /// The width is not fixed; framing layers should pad to the byte length
    /// of `N²` themselves.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }

    pub fn into_inner(self) -> BigUint {
        self.value
    }
}

impl Deref for Ciphertext {
    type Target = BigUint;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> From<T> for Ciphertext
where
    T: AsRef<[u8]>,
{
    fn from(data: T) -> Self {
        Self {
            value: BigUint::from_bytes_be(data.as_ref()),
        }
    }
}
