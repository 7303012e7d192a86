// crates/flit-core/src/leb128.rs
//
// Plain unsigned LEB128, kept as the size baseline Flit64 is compared against.

use crate::error::{FlitError, Result};

pub fn put_u64(mut v: u64, out: &mut Vec<u8>) {
    while v >= 0x80 {
        out.push(((v as u8) & 0x7F) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
}

pub fn get_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    let mut acc: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        if *i >= bytes.len() {
            return Err(FlitError::Validation("leb128: eof".into()));
        }
        let b = bytes[*i];
        *i += 1;

        let low = (b & 0x7F) as u64;
        if shift >= 64 || ((low << shift) >> shift) != low {
            return Err(FlitError::Validation("leb128: overflow".into()));
        }
        acc |= low << shift;

        if (b & 0x80) == 0 {
            return Ok(acc);
        }
        shift += 7;
        if shift > 63 {
            return Err(FlitError::Validation("leb128: too long".into()));
        }
    }
}

pub fn encode_all(values: &[u64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * 2);
    for &v in values {
        put_u64(v, &mut out);
    }
    out
}

/// Decode a whole LEB128 stream; fails on a truncated or overlong varint.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<u64>> {
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < bytes.len() {
        out.push(get_u64(bytes, &mut i)?);
    }
    Ok(out)
}

/// Bytes `put_u64` emits for `v` (1..=10).
pub fn encoded_len(v: u64) -> usize {
    let bits = 64 - (v | 1).leading_zeros() as usize;
    (bits + 6) / 7
}
