#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;

static KEYPAIR: Lazy<(onion_envelope::PublicKey, onion_envelope::SecretKey)> =
    Lazy::new(|| onion_envelope::generate_keypair().unwrap());

fuzz_target!(|data: &[u8]| {
    let (_pk, sk) = &*KEYPAIR;

    // Arbitrary bytes must decrypt to NotForMe or a hard error, never a
    // panic and never a plaintext-shaped false accept.
    let _ = onion_envelope::hybrid_decrypt(data, sk);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = onion_envelope::decrypt_challenge(text, sk);
    }
});
