//! # onion-envelope
//!
//! Anonymous multi-recipient layered encryption: RSA-4096-OAEP-SHA512 +
//! AES-256-GCM.
//!
//! A plaintext is wrapped in one hybrid layer per recipient, in a securely
//! permuted order, producing a single opaque blob. Holders peel layers off
//! in rounds: each envelope either yields its inner payload or reports
//! "not for me" — never garbage, never a panic. The permutation keeps the
//! channel and the other participants from learning who is paired with
//! whom.
//!
//! ## Quick Start
//!
//! ```no_run
//! use onion_envelope::{decrypt_round, encrypt_layered, generate_keypair};
//!
//! # fn main() -> onion_envelope::Result<()> {
//! let (pk_a, sk_a) = generate_keypair()?;
//! let (pk_b, _sk_b) = generate_keypair()?;
//!
//! let blob = encrypt_layered(b"secret", &[pk_a, pk_b])?;
//!
//! // One round: Some(inner) if A's layer ended up outermost, else None.
//! let round = decrypt_round(&[blob], &sk_a)?;
//! assert_eq!(round.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Properties
//!
//! - **Fresh key and nonce per layer** — drawn inside each call, never
//!   hoisted to shared state
//! - **Unbiased ordering** — rejection-sampled Fisher-Yates permutation
//! - **Wrong key is data, not an error** — [`PeelOutcome::NotForMe`]
//! - **Tampering always surfaces** — GCM failures are hard errors
//!
//! ## What's NOT Provided
//!
//! - Key distribution or trust establishment
//! - Private-key storage at rest
//! - Traffic-analysis resistance beyond payload-level permutation

#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/onion-envelope/0.1.0")]

// ---------------------------------------------------------------------------
// Internal modules
// ---------------------------------------------------------------------------

mod aead;
mod challenge;
mod error;
mod hybrid;
mod keys;
mod onion;
mod rng;

// Layout constants are public for consumers that size buffers or frame
// transport; the split/join helpers carry no stability promise.
pub mod wire;

// ---------------------------------------------------------------------------
// Public interface
// ---------------------------------------------------------------------------

pub use challenge::{decrypt_challenge, encrypt_challenge};
pub use error::{Error, Result};
pub use hybrid::{hybrid_decrypt, hybrid_encrypt, PeelOutcome};
pub use keys::{generate_keypair, PublicKey, SecretKey};
pub use onion::{decrypt_round, encrypt_layered};
pub use rng::{secure_permute, secure_random_int, SecureRng};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
