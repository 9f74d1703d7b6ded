//! RSA-4096-OAEP keypairs, SPKI export, and fingerprints.
//!
//! Keys wrap the `rsa` crate types; the core never touches key material
//! beyond the modulus size (needed to slice envelopes) and the role split,
//! which the distinct [`PublicKey`] / [`SecretKey`] types enforce. The
//! modulus size is a protocol constant, checked at generation and import so
//! envelope parsing never has to guess.
//!
//! Private keys are not exportable through this API.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use rand_core::OsRng;
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::wire::{MODULUS_BITS, OAEP_CAPACITY_BYTES, RSA_BLOCK_BYTES};

/// OAEP with SHA-512 for both the label hash and MGF1 — the one scheme
/// used for layer wrapping and challenges alike.
fn oaep() -> Oaep {
    Oaep::new::<Sha512>()
}

/// Outcome of one OAEP unwrap attempt.
pub(crate) enum OaepOutcome {
    Plaintext(Zeroizing<Vec<u8>>),
    /// The padding check failed: the block was not produced for this key.
    KeyMismatch,
}

/// An RSA-4096 public key, used for layer wrapping and challenge
/// encryption. Public exponent 65537, OAEP-SHA512.
#[derive(Clone)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

impl PublicKey {
    fn from_inner(inner: RsaPublicKey) -> Result<Self> {
        if inner.n().bits() != MODULUS_BITS {
            return Err(Error::InvalidArgument("public key modulus must be 4096 bits"));
        }
        Ok(Self { inner })
    }

    /// Import from SPKI DER, validating the modulus size.
    pub fn from_spki_der(der: &[u8]) -> Result<Self> {
        let inner = RsaPublicKey::from_public_key_der(der)
            .map_err(|_| Error::InvalidArgument("not a valid SPKI RSA public key"))?;
        Self::from_inner(inner)
    }

    /// Import from the base64 encoding produced by [`to_spki_base64`].
    ///
    /// [`to_spki_base64`]: PublicKey::to_spki_base64
    pub fn from_spki_base64(encoded: &str) -> Result<Self> {
        let der = BASE64_STANDARD
            .decode(encoded)
            .map_err(|_| Error::InvalidArgument("public key is not valid base64"))?;
        Self::from_spki_der(&der)
    }

    /// Portable SPKI (DER) export.
    pub fn to_spki_der(&self) -> Result<Vec<u8>> {
        Ok(self
            .inner
            .to_public_key_der()
            .map_err(|e| Error::Provider(e.to_string()))?
            .as_bytes()
            .to_vec())
    }

    /// Base64 of the SPKI export — the interchange string format for
    /// sharing a key with other participants.
    pub fn to_spki_base64(&self) -> Result<String> {
        Ok(BASE64_STANDARD.encode(self.to_spki_der()?))
    }

    /// SHA-256 over the SPKI export, as lowercase zero-padded hex
    /// (64 characters).
    ///
    /// Two fingerprints are equal iff the keys export to identical bytes.
    pub fn fingerprint(&self) -> Result<String> {
        Ok(hex::encode(Sha256::digest(self.to_spki_der()?)))
    }

    /// OAEP-encrypt a short plaintext under this key.
    pub(crate) fn wrap_oaep(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        if plaintext.len() > OAEP_CAPACITY_BYTES {
            return Err(Error::InvalidArgument("plaintext exceeds OAEP capacity"));
        }
        let block = self
            .inner
            .encrypt(&mut OsRng, oaep(), plaintext)
            .map_err(|e| Error::Provider(e.to_string()))?;
        debug_assert_eq!(block.len(), RSA_BLOCK_BYTES);
        Ok(block)
    }
}

/// An RSA-4096 private key. Held inside the crate boundary; there is no
/// export path.
pub struct SecretKey {
    inner: RsaPrivateKey,
}

impl SecretKey {
    /// Derive the public half.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: RsaPublicKey::from(&self.inner),
        }
    }

    /// Modulus length in bytes — the envelope key-block length for this
    /// key. Read before slicing an envelope.
    pub(crate) fn block_len(&self) -> usize {
        self.inner.size()
    }

    /// OAEP-decrypt a block. A padding failure is reported as
    /// [`OaepOutcome::KeyMismatch`], the distinguishing wrong-key signal
    /// (the `rsa` crate surfaces it as `Error::Decryption`); anything else
    /// is a provider fault.
    pub(crate) fn unwrap_oaep(&self, block: &[u8]) -> Result<OaepOutcome> {
        match self.inner.decrypt(oaep(), block) {
            Ok(plaintext) => Ok(OaepOutcome::Plaintext(Zeroizing::new(plaintext))),
            Err(rsa::Error::Decryption) => Ok(OaepOutcome::KeyMismatch),
            Err(e) => Err(Error::Provider(e.to_string())),
        }
    }
}

/// Generate a fresh RSA-4096 keypair from the platform CSPRNG.
///
/// The public key can be shared freely (see [`PublicKey::to_spki_base64`]);
/// the secret key stays inside the process. Fails with
/// [`Error::Provider`] if the crypto facility is unavailable.
pub fn generate_keypair() -> Result<(PublicKey, SecretKey)> {
    let inner = RsaPrivateKey::new(&mut OsRng, MODULUS_BITS)
        .map_err(|e| Error::Provider(e.to_string()))?;
    if inner.size() != RSA_BLOCK_BYTES {
        return Err(Error::Provider(
            "generated key has unexpected modulus size".into(),
        ));
    }
    let public = PublicKey {
        inner: RsaPublicKey::from(&inner),
    };
    Ok((public, SecretKey { inner }))
}
