//! Unified error types for onion-envelope.

use thiserror::Error;

/// Errors surfaced by the envelope core.
///
/// "Not addressed to this key" is deliberately absent from this enum: that
/// outcome is the [`PeelOutcome::NotForMe`](crate::PeelOutcome::NotForMe)
/// variant returned by [`hybrid_decrypt`](crate::hybrid_decrypt), not an
/// error. Everything here propagates to the caller; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input: a bad range, an undecodable key or challenge, an
    /// oversized OAEP plaintext. Caller's bug; fails before any work.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Tampering or a misparse: a truncated envelope, wrong-length wrapped
    /// key material, or a symmetric authentication failure after a
    /// successful asymmetric unwrap. Never silently dropped.
    #[error("corrupt data: {0}")]
    CorruptData(&'static str),

    /// The underlying cryptographic facility failed. Fatal for the current
    /// operation, not globally.
    #[error("crypto provider failure: {0}")]
    Provider(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
