// crates/flit-core/src/flit/stream.rs
//
// Caller-side buffers around the codec: append values to a Vec, walk a slice.

use super::codec::{decode_fast, decode_safe, encode, MAX_ENCODED_LEN};
use crate::error::Result;

/// Appends Flit64 chunks to an owned byte buffer.
#[derive(Debug, Default, Clone)]
pub struct FlitWriter {
    buf: Vec<u8>,
}

impl FlitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for roughly `values` small integers.
    pub fn with_capacity(values: usize) -> Self {
        Self {
            buf: Vec::with_capacity(values * 2 + MAX_ENCODED_LEN),
        }
    }

    /// Encode `value` and return the number of bytes appended.
    pub fn push(&mut self, value: u64) -> usize {
        let start = self.buf.len();
        self.buf.resize(start + MAX_ENCODED_LEN, 0);
        let n = encode(value, &mut self.buf[start..]);
        self.buf.truncate(start + n);
        n
    }

    pub fn extend_from_slice(&mut self, values: &[u64]) {
        for &v in values {
            self.push(v);
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

/// Sequential decoder over a borrowed chunk stream.
///
/// While at least [`MAX_ENCODED_LEN`] bytes remain, short chunks go through
/// the fast decoder; sentinel chunks and the tail go through the checked one,
/// so the reader never panics and still rejects non-canonical long forms.
#[derive(Debug, Clone)]
pub struct FlitReader<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> FlitReader<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.src[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Decode the next value; `None` at a clean end of input.
    ///
    /// On error the cursor does not move.
    pub fn next_value(&mut self) -> Option<Result<u64>> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }

        let decoded = if rest.len() >= MAX_ENCODED_LEN && rest[0] != 0 {
            Ok(decode_fast(rest))
        } else {
            decode_safe(rest)
        };

        Some(decoded.map(|(value, n)| {
            self.pos += n;
            value
        }))
    }
}

impl Iterator for FlitReader<'_> {
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value()
    }
}

/// Encode `values` back to back.
pub fn encode_all(values: &[u64]) -> Vec<u8> {
    let mut w = FlitWriter::with_capacity(values.len());
    w.extend_from_slice(values);
    w.into_inner()
}

/// Decode a whole chunk stream; fails on any malformed or truncated chunk.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<u64>> {
    FlitReader::new(bytes).collect()
}
