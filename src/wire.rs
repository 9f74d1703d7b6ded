//! Envelope layout.
//!
//! One envelope:
//!   rsa_block[512] || symmetric_ciphertext[16+]
//!
//! rsa_block = RSA-4096-OAEP-SHA512( nonce[12] || aes_key[32] )
//! symmetric_ciphertext = AES-256-GCM output, 16-byte tag included.
//!
//! There is no version byte or length prefix: the block length is fully
//! determined by the recipient key's modulus, which is a protocol-wide
//! constant. A decryptor must read the modulus size off its private key
//! before slicing.

use crate::error::{Error, Result};

/// RSA modulus size, fixed protocol-wide. Validated at key generation and
/// import rather than re-derived ad hoc per decryption.
pub const MODULUS_BITS: usize = 4096;

/// Asymmetric key-wrapping block length: modulus bits / 8.
pub const RSA_BLOCK_BYTES: usize = MODULUS_BITS / 8; // 512

/// AES-GCM nonce size.
pub const NONCE_BYTES: usize = 12;

/// Raw AES-256 key size.
pub const SYMMETRIC_KEY_BYTES: usize = 32;

/// Wrapped key material: nonce[12] || aes_key[32].
pub const KEY_MATERIAL_BYTES: usize = NONCE_BYTES + SYMMETRIC_KEY_BYTES; // 44

/// GCM authentication tag size.
pub const AEAD_TAG_BYTES: usize = 16;

/// Smallest well-formed envelope: one RSA block plus an empty-payload GCM
/// ciphertext (tag only).
pub const MIN_ENVELOPE_BYTES: usize = RSA_BLOCK_BYTES + AEAD_TAG_BYTES; // 528

/// OAEP-SHA512 plaintext capacity for a 4096-bit modulus: k - 2*hLen - 2.
pub const OAEP_CAPACITY_BYTES: usize = RSA_BLOCK_BYTES - 2 * 64 - 2; // 382

/// Borrowed view of a split envelope.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeParts<'a> {
    pub key_block: &'a [u8],
    pub symmetric_ciphertext: &'a [u8],
}

/// Split an envelope at `block_len`, the byte length of the decryptor's
/// modulus.
pub fn split_envelope(envelope: &[u8], block_len: usize) -> Result<EnvelopeParts<'_>> {
    if envelope.len() < block_len + AEAD_TAG_BYTES {
        return Err(Error::CorruptData("envelope shorter than one layer"));
    }
    Ok(EnvelopeParts {
        key_block: &envelope[..block_len],
        symmetric_ciphertext: &envelope[block_len..],
    })
}

/// Concatenate the two envelope regions.
pub fn join_envelope(key_block: &[u8], symmetric_ciphertext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(key_block.len() + symmetric_ciphertext.len());
    out.extend_from_slice(key_block);
    out.extend_from_slice(symmetric_ciphertext);
    out
}
