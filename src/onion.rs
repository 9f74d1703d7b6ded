//! Layered ("onion") encryption and round decryption.
//!
//! A layered message nests one hybrid envelope per recipient, wrapped in a
//! uniformly random order. Peeling is strictly last-in-first-out: only the
//! outermost layer's key holder can remove the current layer, and nobody —
//! including the transport — learns the wrapping order from the blob.

use crate::error::Result;
use crate::hybrid::{hybrid_decrypt, hybrid_encrypt, PeelOutcome};
use crate::keys::{PublicKey, SecretKey};
use crate::rng::secure_permute;

/// Wrap `message` once per recipient key, in a freshly permuted order.
///
/// The permutation is regenerated per call and never persisted, so the
/// caller-supplied key order says nothing about which layer is outermost.
///
/// Zero keys returns the message unchanged: no confidentiality has been
/// applied, and the caller must decide whether that is acceptable.
pub fn encrypt_layered(message: &[u8], recipients: &[PublicKey]) -> Result<Vec<u8>> {
    let mut order: Vec<&PublicKey> = recipients.iter().collect();
    secure_permute(&mut order)?;

    let mut blob = message.to_vec();
    for pk in order {
        blob = hybrid_encrypt(&blob, pk)?;
    }
    Ok(blob)
}

/// Attempt to peel each envelope in a round with one private key.
///
/// The output is positionally aligned with the input: `Some(inner)` where
/// the outermost layer peeled, `None` where it was wrapped for another key.
/// The explicit absence marker keeps input/output correspondence for
/// multi-round protocols instead of silently compacting the results.
///
/// Hard errors (corruption, provider faults) from any single envelope fail
/// the whole round: they indicate tampering or a logic bug, not an
/// addressing mismatch.
pub fn decrypt_round<E: AsRef<[u8]>>(
    envelopes: &[E],
    sk: &SecretKey,
) -> Result<Vec<Option<Vec<u8>>>> {
    envelopes
        .iter()
        .map(|envelope| match hybrid_decrypt(envelope.as_ref(), sk)? {
            PeelOutcome::Peeled(inner) => Ok(Some(inner)),
            PeelOutcome::NotForMe => Ok(None),
        })
        .collect()
}
