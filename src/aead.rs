//! AEAD: AES-256-GCM.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use getrandom::getrandom;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::wire::{NONCE_BYTES, SYMMETRIC_KEY_BYTES};

/// Fresh random 12-byte nonce. Allocated inside each encryption call;
/// nonce buffers are never hoisted to shared or static state, which would
/// risk reuse under concurrency.
pub(crate) fn fresh_nonce() -> Result<[u8; NONCE_BYTES]> {
    let mut n = [0u8; NONCE_BYTES];
    getrandom(&mut n).map_err(|e| Error::Provider(e.to_string()))?;
    Ok(n)
}

/// Fresh random 256-bit key, zeroized on drop.
pub(crate) fn fresh_key() -> Result<Zeroizing<[u8; SYMMETRIC_KEY_BYTES]>> {
    let mut k = Zeroizing::new([0u8; SYMMETRIC_KEY_BYTES]);
    getrandom(k.as_mut_slice()).map_err(|e| Error::Provider(e.to_string()))?;
    Ok(k)
}

/// Seal (encrypt path). Output carries the 16-byte tag at the end.
pub(crate) fn seal(
    key: &[u8; SYMMETRIC_KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|e| Error::Provider(e.to_string()))?;
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| Error::Provider(e.to_string()))
}

/// Open (decrypt path). An authentication failure means the blob was
/// tampered with, or the asymmetric step "succeeded" on misparsed data —
/// a hard error either way.
pub(crate) fn open(
    key: &[u8; SYMMETRIC_KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|e| Error::Provider(e.to_string()))?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::CorruptData("symmetric authentication failed"))
}
