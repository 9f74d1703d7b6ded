//! Single-layer hybrid roundtrips, wrong-key behavior, tamper detection,
//! key identity, and challenge flows.

use std::sync::OnceLock;

use onion_envelope::wire::{
    AEAD_TAG_BYTES, KEY_MATERIAL_BYTES, MIN_ENVELOPE_BYTES, MODULUS_BITS, NONCE_BYTES,
    OAEP_CAPACITY_BYTES, RSA_BLOCK_BYTES, SYMMETRIC_KEY_BYTES,
};
use onion_envelope::{
    decrypt_challenge, encrypt_challenge, generate_keypair, hybrid_decrypt, hybrid_encrypt,
    Error, PeelOutcome, PublicKey, SecretKey,
};

// RSA-4096 generation is expensive; share two keypairs across the file.
fn keys() -> &'static [(PublicKey, SecretKey); 2] {
    static KEYS: OnceLock<[(PublicKey, SecretKey); 2]> = OnceLock::new();
    KEYS.get_or_init(|| [generate_keypair().unwrap(), generate_keypair().unwrap()])
}

#[test]
fn wire_constants() {
    assert_eq!(MODULUS_BITS, 4096);
    assert_eq!(RSA_BLOCK_BYTES, 512);
    assert_eq!(NONCE_BYTES, 12);
    assert_eq!(SYMMETRIC_KEY_BYTES, 32);
    assert_eq!(KEY_MATERIAL_BYTES, 44);
    assert_eq!(MIN_ENVELOPE_BYTES, 512 + 16);
    assert_eq!(OAEP_CAPACITY_BYTES, 382);
}

#[test]
fn roundtrip_basic() {
    let (pk, sk) = &keys()[0];
    let envelope = hybrid_encrypt(b"hello onion world", pk).unwrap();
    assert_eq!(
        hybrid_decrypt(&envelope, sk).unwrap(),
        PeelOutcome::Peeled(b"hello onion world".to_vec())
    );
}

#[test]
fn roundtrip_empty_payload() {
    let (pk, sk) = &keys()[0];
    let envelope = hybrid_encrypt(b"", pk).unwrap();
    assert_eq!(envelope.len(), MIN_ENVELOPE_BYTES);
    assert_eq!(
        hybrid_decrypt(&envelope, sk).unwrap(),
        PeelOutcome::Peeled(vec![])
    );
}

#[test]
fn roundtrip_large_payload() {
    let (pk, sk) = &keys()[0];
    let payload = vec![0xABu8; 65536];
    let envelope = hybrid_encrypt(&payload, pk).unwrap();
    assert_eq!(
        hybrid_decrypt(&envelope, sk).unwrap(),
        PeelOutcome::Peeled(payload)
    );
}

#[test]
fn envelope_layout() {
    let (pk, _) = &keys()[0];
    let envelope = hybrid_encrypt(b"data", pk).unwrap();
    // rsa_block[512] || gcm(payload)[len + 16]
    assert_eq!(envelope.len(), RSA_BLOCK_BYTES + 4 + AEAD_TAG_BYTES);
}

#[test]
fn fresh_randomness_per_envelope() {
    let (pk, _) = &keys()[0];
    let a = hybrid_encrypt(b"same payload", pk).unwrap();
    let b = hybrid_encrypt(b"same payload", pk).unwrap();
    assert_ne!(a, b);
}

#[test]
fn wrong_key_is_not_for_me() {
    let (pk, _) = &keys()[0];
    let (_, other_sk) = &keys()[1];
    let envelope = hybrid_encrypt(b"addressed elsewhere", pk).unwrap();
    assert_eq!(
        hybrid_decrypt(&envelope, other_sk).unwrap(),
        PeelOutcome::NotForMe
    );
}

#[test]
fn tamper_symmetric_region_is_corrupt() {
    let (pk, sk) = &keys()[0];
    let mut envelope = hybrid_encrypt(b"data", pk).unwrap();
    let last = envelope.len() - 1;
    envelope[last] ^= 0x01;
    assert!(matches!(
        hybrid_decrypt(&envelope, sk),
        Err(Error::CorruptData(_))
    ));
}

#[test]
fn tamper_every_ciphertext_byte_is_detected() {
    let (pk, sk) = &keys()[0];
    let envelope = hybrid_encrypt(b"bits", pk).unwrap();
    for i in RSA_BLOCK_BYTES..envelope.len() {
        let mut tampered = envelope.clone();
        tampered[i] ^= 0x80;
        assert!(
            matches!(hybrid_decrypt(&tampered, sk), Err(Error::CorruptData(_))),
            "flip at byte {i} went undetected"
        );
    }
}

#[test]
fn tamper_key_block_reads_as_not_for_me() {
    // A damaged OAEP block fails the padding check exactly like a
    // wrong-key attempt does; the two are indistinguishable by design.
    let (pk, sk) = &keys()[0];
    let mut envelope = hybrid_encrypt(b"data", pk).unwrap();
    envelope[10] ^= 0x01;
    assert_eq!(hybrid_decrypt(&envelope, sk).unwrap(), PeelOutcome::NotForMe);
}

#[test]
fn truncated_envelope_is_corrupt() {
    let (pk, sk) = &keys()[0];
    let envelope = hybrid_encrypt(b"data", pk).unwrap();
    for cut in [0, 10, RSA_BLOCK_BYTES, envelope.len() - AEAD_TAG_BYTES] {
        assert!(matches!(
            hybrid_decrypt(&envelope[..cut], sk),
            Err(Error::CorruptData(_))
        ));
    }
}

// ---------------------------------------------------------------------------
// Key identity
// ---------------------------------------------------------------------------

#[test]
fn fingerprint_is_stable_and_well_formed() {
    let (pk, _) = &keys()[0];
    let fp1 = pk.fingerprint().unwrap();
    let fp2 = pk.fingerprint().unwrap();
    assert_eq!(fp1, fp2);
    assert_eq!(fp1.len(), 64);
    assert!(fp1.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn fingerprint_differs_between_keys() {
    let (pk_a, _) = &keys()[0];
    let (pk_b, _) = &keys()[1];
    assert_ne!(pk_a.fingerprint().unwrap(), pk_b.fingerprint().unwrap());
}

#[test]
fn public_key_export_import_roundtrip() {
    let (pk, sk) = &keys()[0];
    let encoded = pk.to_spki_base64().unwrap();
    let imported = PublicKey::from_spki_base64(&encoded).unwrap();
    assert_eq!(imported.fingerprint().unwrap(), pk.fingerprint().unwrap());

    // The re-imported key still addresses the same secret key.
    let envelope = hybrid_encrypt(b"via imported key", &imported).unwrap();
    assert_eq!(
        hybrid_decrypt(&envelope, sk).unwrap(),
        PeelOutcome::Peeled(b"via imported key".to_vec())
    );
}

#[test]
fn derived_public_key_matches() {
    let (pk, sk) = &keys()[0];
    assert_eq!(
        sk.public_key().fingerprint().unwrap(),
        pk.fingerprint().unwrap()
    );
}

// ---------------------------------------------------------------------------
// Authentication challenges
// ---------------------------------------------------------------------------

#[test]
fn challenge_roundtrip() {
    let (pk, sk) = &keys()[0];
    let encrypted = encrypt_challenge("prove-you-hold-the-key", pk).unwrap();
    assert_eq!(
        decrypt_challenge(&encrypted, sk).unwrap(),
        "prove-you-hold-the-key"
    );
}

#[test]
fn challenge_wrong_key_is_hard_error() {
    let (pk, _) = &keys()[0];
    let (_, other_sk) = &keys()[1];
    let encrypted = encrypt_challenge("token", pk).unwrap();
    assert!(matches!(
        decrypt_challenge(&encrypted, other_sk),
        Err(Error::CorruptData(_))
    ));
}

#[test]
fn challenge_bad_base64_is_invalid_argument() {
    let (_, sk) = &keys()[0];
    assert!(matches!(
        decrypt_challenge("%%% not base64 %%%", sk),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn challenge_oversized_token_is_invalid_argument() {
    let (pk, _) = &keys()[0];
    let oversized = "x".repeat(OAEP_CAPACITY_BYTES + 1);
    assert!(matches!(
        encrypt_challenge(&oversized, pk),
        Err(Error::InvalidArgument(_))
    ));
}
