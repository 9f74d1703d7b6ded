//! Authentication challenges.
//!
//! A challenge is a short secret OAEP-encrypted straight to one known key —
//! small and fixed-size, so there is no symmetric layer. Unlike layered
//! messages, a challenge is always addressed to exactly one key: a
//! wrong-key failure here is protocol misuse and surfaces as a hard error,
//! never as a quiet "not mine".

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use crate::error::{Error, Result};
use crate::keys::{OaepOutcome, PublicKey, SecretKey};

/// Encrypt a challenge token to `recipient`, returning base64.
///
/// Fails with [`Error::InvalidArgument`] if the token exceeds the OAEP
/// capacity (382 bytes for a 4096-bit modulus with SHA-512).
pub fn encrypt_challenge(token: &str, recipient: &PublicKey) -> Result<String> {
    let block = recipient.wrap_oaep(token.as_bytes())?;
    Ok(BASE64_STANDARD.encode(block))
}

/// Decrypt a base64-encoded challenge with `sk` and UTF-8-decode it.
///
/// Every failure is hard: bad base64 is [`Error::InvalidArgument`]; a
/// wrong key or non-UTF-8 plaintext is [`Error::CorruptData`].
pub fn decrypt_challenge(challenge_base64: &str, sk: &SecretKey) -> Result<String> {
    let block = BASE64_STANDARD
        .decode(challenge_base64)
        .map_err(|_| Error::InvalidArgument("challenge is not valid base64"))?;

    match sk.unwrap_oaep(&block)? {
        OaepOutcome::Plaintext(token) => String::from_utf8(token.to_vec())
            .map_err(|_| Error::CorruptData("challenge plaintext is not valid UTF-8")),
        OaepOutcome::KeyMismatch => {
            Err(Error::CorruptData("challenge was not encrypted for this key"))
        }
    }
}
