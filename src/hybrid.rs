//! One hybrid encryption layer.
//!
//! Bulk data goes under AES-256-GCM with a fresh key and nonce; the
//! `nonce || key` pair rides in front, wrapped under the recipient's
//! RSA-4096-OAEP-SHA512 public key. See [`crate::wire`] for the layout.

use zeroize::Zeroizing;

use crate::aead;
use crate::error::{Error, Result};
use crate::keys::{OaepOutcome, PublicKey, SecretKey};
use crate::wire::{self, KEY_MATERIAL_BYTES, NONCE_BYTES, SYMMETRIC_KEY_BYTES};

/// Result of attempting to peel one layer.
///
/// `NotForMe` is an expected, frequent outcome during round decryption.
/// It is modelled as data rather than as an error so callers never filter
/// decrypt results by catching and classifying exceptions.
#[derive(Debug, PartialEq, Eq)]
pub enum PeelOutcome {
    /// The outermost layer was wrapped for this key; here is the inner
    /// payload (possibly still encrypted, possibly the final plaintext).
    Peeled(Vec<u8>),
    /// The outermost layer was wrapped for some other key.
    NotForMe,
}

/// Encrypt one layer of `payload` for `recipient`.
///
/// The symmetric key and nonce are drawn fresh from the CSPRNG inside this
/// call; nothing is reused across invocations.
pub fn hybrid_encrypt(payload: &[u8], recipient: &PublicKey) -> Result<Vec<u8>> {
    let key = aead::fresh_key()?;
    let nonce = aead::fresh_nonce()?;
    let symmetric_ciphertext = aead::seal(&key, &nonce, payload)?;

    let mut material = Zeroizing::new([0u8; KEY_MATERIAL_BYTES]);
    material[..NONCE_BYTES].copy_from_slice(&nonce);
    material[NONCE_BYTES..].copy_from_slice(key.as_slice());
    let key_block = recipient.wrap_oaep(material.as_slice())?;

    Ok(wire::join_envelope(&key_block, &symmetric_ciphertext))
}

/// Attempt to peel one layer of `envelope` with `sk`.
///
/// Outcomes:
/// - `Ok(Peeled(payload))` — the layer was addressed to this key.
/// - `Ok(NotForMe)` — OAEP unwrap failed the padding check: the layer was
///   wrapped for another key. Not an error.
/// - `Err(CorruptData)` — truncated envelope, wrong-length key material,
///   or a GCM authentication failure after a successful unwrap.
/// - `Err(Provider)` — the crypto facility itself failed.
pub fn hybrid_decrypt(envelope: &[u8], sk: &SecretKey) -> Result<PeelOutcome> {
    // The key-block length depends on the modulus; read it off the private
    // key before slicing.
    let parts = wire::split_envelope(envelope, sk.block_len())?;

    let material = match sk.unwrap_oaep(parts.key_block)? {
        OaepOutcome::Plaintext(m) => m,
        OaepOutcome::KeyMismatch => return Ok(PeelOutcome::NotForMe),
    };
    if material.len() != KEY_MATERIAL_BYTES {
        return Err(Error::CorruptData("wrapped key material has wrong length"));
    }

    let mut nonce = [0u8; NONCE_BYTES];
    nonce.copy_from_slice(&material[..NONCE_BYTES]);
    let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_BYTES]);
    key.copy_from_slice(&material[NONCE_BYTES..]);

    let payload = aead::open(&key, &nonce, parts.symmetric_ciphertext)?;
    Ok(PeelOutcome::Peeled(payload))
}
