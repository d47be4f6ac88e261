// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during key generation, encryption and decryption.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("random source failure: {0}")]
    RandomnessFailure(String),

    #[error("Message exceeds the public key modulus")]
    MessageTooLarge,

    #[error("Ciphertext exceeds the squared public key modulus")]
    CiphertextTooLarge,

    #[error("Ciphertext is not invertible under this key")]
    InvalidCiphertext,

    #[error("Invalid key size: must be an even number of bits >= {min}, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid private key")]
    InvalidPrivateKey,
}

pub type Result<T> = std::result::Result<T, Error>;
