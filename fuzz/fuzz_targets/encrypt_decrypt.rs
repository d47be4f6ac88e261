#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier_crt::{Ciphertext, Decrypt, Encrypt, Error, KeyPair};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    // Small key for throughput; requires the `allow-weak-keys` feature.
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(64).unwrap());
    let n = keypair.public_key().n();

    let m = BigUint::from_bytes_be(data);
    match keypair.encrypt(data) {
        Ok(ciphertext) => {
            assert!(&m < n);
            let plaintext = keypair.decrypt(&ciphertext).expect("valid ciphertext must decrypt");
            assert_eq!(m, BigUint::from_bytes_be(&plaintext), "roundtrip failed");
        }
        Err(err) => {
            assert_eq!(err, Error::MessageTooLarge);
            assert!(&m >= n);
        }
    }

    // Arbitrary bytes as a ciphertext must never panic.
    let crt = keypair.decrypt(&Ciphertext::from(data));
    let full = keypair.private_key().decrypt_full_modulus(&Ciphertext::from(data));
    assert_eq!(crt, full);
});
