//! Cryptographically secure uniform integers and permutations.
//!
//! All randomness comes from the platform CSPRNG via `getrandom`; there is
//! no non-cryptographic fallback. Integer draws use rejection sampling over
//! a 53-bit value — plain modular reduction would bias every range that
//! does not divide 2^53.

use getrandom::getrandom;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// CSPRNG bytes buffered per refill.
const BUF_BYTES: usize = 1024;

/// Largest supported range size: 2^53.
const RANGE_LIMIT: u128 = 1 << 53;

/// Buffered CSPRNG word source.
///
/// Batches `getrandom` calls for efficiency; every 32-bit word is consumed
/// at most once. The buffer is wiped on drop — the draw sequence reveals
/// the permutation a layer order was chosen with.
pub struct SecureRng {
    buf: [u8; BUF_BYTES],
    offset: usize,
}

impl SecureRng {
    /// Create a source with an exhausted buffer; the first draw refills it.
    pub fn new() -> Self {
        Self {
            buf: [0u8; BUF_BYTES],
            offset: BUF_BYTES,
        }
    }

    fn next_u32(&mut self) -> Result<u32> {
        if self.offset + 4 > BUF_BYTES {
            getrandom(&mut self.buf).map_err(|e| Error::Provider(e.to_string()))?;
            self.offset = 0;
        }
        let o = self.offset;
        self.offset += 4;
        Ok(u32::from_le_bytes([
            self.buf[o],
            self.buf[o + 1],
            self.buf[o + 2],
            self.buf[o + 3],
        ]))
    }

    /// Uniform integer in `[min, max]` inclusive.
    ///
    /// Requires `min <= max` and a range size of at most 2^53; violations
    /// fail with [`Error::InvalidArgument`] before any randomness is drawn.
    ///
    /// Each attempt combines two independent 32-bit words into a value in
    /// `[0, 2^53)`: the low 21 bits of the first word become the high bits,
    /// the full second word the low bits. Values at or above
    /// `2^53 - (2^53 mod range)` are discarded and redrawn.
    pub fn random_int(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(Error::InvalidArgument("min must be <= max"));
        }
        let range_size = (i128::from(max) - i128::from(min) + 1) as u128;
        if range_size > RANGE_LIMIT {
            return Err(Error::InvalidArgument("range size must be <= 2^53"));
        }

        let threshold = RANGE_LIMIT - (RANGE_LIMIT % range_size);
        loop {
            let hi = u64::from(self.next_u32()? & 0x1F_FFFF);
            let lo = u64::from(self.next_u32()?);
            let value = u128::from((hi << 32) | lo);
            if value < threshold {
                let v = i128::from(min) + (value % range_size) as i128;
                return Ok(v as i64);
            }
        }
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SecureRng {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// One-shot uniform integer in `[min, max]` inclusive.
pub fn secure_random_int(min: i64, max: i64) -> Result<i64> {
    SecureRng::new().random_int(min, max)
}

/// Fisher-Yates shuffle driven by [`SecureRng`], in place.
///
/// For `i` from the last index down to 1, draws `j = random_int(0, i)` and
/// swaps. With an unbiased integer source every one of the `n!` orderings
/// is equally likely.
pub fn secure_permute<T>(items: &mut [T]) -> Result<()> {
    let mut rng = SecureRng::new();
    for i in (1..items.len()).rev() {
        let j = rng.random_int(0, i as i64)? as usize;
        items.swap(i, j);
    }
    Ok(())
}
