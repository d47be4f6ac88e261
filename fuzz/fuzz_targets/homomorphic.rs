#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier_crt::{Ciphertext, Decrypt, Encrypt, Homomorphic, KeyPair};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(64).unwrap());
    let n = keypair.public_key().n();

    let third = data.len() / 3;
    let (m1_bytes, rest) = data.split_at(third);
    let (m2_bytes, k_bytes) = rest.split_at(third);

    let m1 = BigUint::from_bytes_be(m1_bytes);
    let m2 = BigUint::from_bytes_be(m2_bytes);
    let k = BigUint::from_bytes_be(k_bytes);

    let (Ok(c1), Ok(c2)) = (keypair.encrypt(m1_bytes), keypair.encrypt(m2_bytes)) else {
        return;
    };

    let decrypt = |c: &Ciphertext| BigUint::from_bytes_be(&keypair.decrypt(c).unwrap());

    assert_eq!(decrypt(&keypair.add_cipher(&c1, &c2)), (&m1 + &m2) % n);
    assert_eq!(decrypt(&keypair.add(&c1, k_bytes)), (&m1 + &k) % n);
    assert_eq!(decrypt(&keypair.mul(&c1, k_bytes)), (&m1 * &k) % n);
});
