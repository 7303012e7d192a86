// crates/flit-core/src/flit/codec.rs
//
// Flit64: 1..=9 byte prefix varint for u64.
//
// Wire layout (little-endian):
// - short form (v < 2^56): the trailing-zero count k of byte 0 gives the
//   chunk length k+1; the low (k+1)*8 bits shifted right by k+1 are the value.
// - long form (v >= 2^56): byte 0 = 0x00, then v as 8 LE bytes.

use super::bitscan::{lsb_index, msb_index};
use crate::error::{FlitError, Result};

/// Largest chunk, and the scratch `encode` / `decode_fast` need.
pub const MAX_ENCODED_LEN: usize = 9;

/// Values at or above this take the 9-byte sentinel form.
pub const LONG_FORM_THRESHOLD: u64 = 1 << 56;

/// Encode `value` into the front of `dest` and return the chunk length.
///
/// `dest` must hold at least [`MAX_ENCODED_LEN`] bytes no matter how small
/// `value` is: the short form stores a whole 8-byte word. Bytes past the
/// returned length are scratch and must be treated as unwritten.
///
/// Panics if `dest` is shorter than required.
#[inline]
pub fn encode(value: u64, dest: &mut [u8]) -> usize {
    if value >= LONG_FORM_THRESHOLD {
        dest[0] = 0;
        dest[1..MAX_ENCODED_LEN].copy_from_slice(&value.to_le_bytes());
        return MAX_ENCODED_LEN;
    }

    if value < 0x80 {
        dest[0] = ((value as u8) << 1) | 1;
        return 1;
    }

    let extra = msb_index(value | 1) / 7;
    let word = ((value << 1) | 1) << extra;
    dest[..8].copy_from_slice(&word.to_le_bytes());
    extra as usize + 1
}

/// Encode into a fresh array; `buf[..len]` is the chunk.
#[inline]
pub fn encode_to_array(value: u64) -> ([u8; MAX_ENCODED_LEN], usize) {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    let len = encode(value, &mut buf);
    (buf, len)
}

/// Chunk length `encode` would report for `value`, without writing anything.
#[inline]
pub fn encoded_len(value: u64) -> usize {
    if value >= LONG_FORM_THRESHOLD {
        MAX_ENCODED_LEN
    } else {
        (msb_index(value | 1) / 7) as usize + 1
    }
}

/// Decode one chunk from trusted input, returning `(value, bytes_consumed)`.
///
/// `src` must hold at least [`MAX_ENCODED_LEN`] bytes and start with a chunk
/// produced by [`encode`]. Only slice bounds are checked (a short `src`
/// panics); the marker is not validated and the long form is not checked for
/// canonical encoding. Use [`decode_safe`] for untrusted bytes.
#[inline]
pub fn decode_fast(src: &[u8]) -> (u64, usize) {
    let first = src[0];
    if first == 0 {
        return (read_le_u64(&src[1..MAX_ENCODED_LEN]), MAX_ENCODED_LEN);
    }

    let index = lsb_index(first) + 1;
    let word = read_le_u64(&src[..8]) & low_bytes_mask(index);
    (word >> index, index as usize)
}

/// End-pointer form of [`decode_fast`]: returns the value and the rest of `src`.
#[inline]
pub fn decode_fast_advance(src: &[u8]) -> (u64, &[u8]) {
    let (value, n) = decode_fast(src);
    (value, &src[n..])
}

/// Bounds-checked decode of one chunk, returning `(value, bytes_consumed)`.
///
/// Never reads past the end of `src`. Fails with [`FlitError::Truncated`]
/// when the chunk declares more bytes than are available, and with
/// [`FlitError::NonCanonical`] for a sentinel chunk carrying a value below
/// [`LONG_FORM_THRESHOLD`].
pub fn decode_safe(src: &[u8]) -> Result<(u64, usize)> {
    let Some(&first) = src.first() else {
        return Err(FlitError::Truncated { need: 1, have: 0 });
    };

    if first == 0 {
        if src.len() < MAX_ENCODED_LEN {
            return Err(FlitError::Truncated {
                need: MAX_ENCODED_LEN,
                have: src.len(),
            });
        }
        let value = read_le_u64(&src[1..MAX_ENCODED_LEN]);
        if value < LONG_FORM_THRESHOLD {
            return Err(FlitError::NonCanonical { value });
        }
        return Ok((value, MAX_ENCODED_LEN));
    }

    let index = lsb_index(first) + 1;
    let n = index as usize;
    if src.len() < n {
        return Err(FlitError::Truncated {
            need: n,
            have: src.len(),
        });
    }

    // Copy exactly n bytes; the zeroed tail already acts as the mask.
    let mut word = [0u8; 8];
    word[..n].copy_from_slice(&src[..n]);
    Ok((u64::from_le_bytes(word) >> index, n))
}

/// New-begin form of [`decode_safe`]: returns the value and the rest of `src`.
#[inline]
pub fn decode_safe_advance(src: &[u8]) -> Result<(u64, &[u8])> {
    let (value, n) = decode_safe(src)?;
    Ok((value, &src[n..]))
}

/// Mask keeping the low `bytes * 8` bits; `bytes` is in 1..=8.
#[inline(always)]
fn low_bytes_mask(bytes: u32) -> u64 {
    u64::MAX >> (64 - bytes * 8)
}

#[inline(always)]
fn read_le_u64(b: &[u8]) -> u64 {
    let mut w = [0u8; 8];
    w.copy_from_slice(&b[..8]);
    u64::from_le_bytes(w)
}
