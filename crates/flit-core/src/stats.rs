// crates/flit-core/src/stats.rs

use crate::error::Result;
use crate::flit::{decode_safe, encoded_len, MAX_ENCODED_LEN};

/// Chunk counts per length class (index 0 = 1-byte chunks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthHistogram {
    pub counts: [u64; MAX_ENCODED_LEN],
    pub values: u64,
    pub bytes: u64,
}

impl LengthHistogram {
    pub fn from_values(values: &[u64]) -> Self {
        let mut h = Self::default();
        for &v in values {
            h.record(encoded_len(v));
        }
        h
    }

    /// Walk an encoded stream with the checked decoder.
    pub fn scan(bytes: &[u8]) -> Result<Self> {
        let mut h = Self::default();
        let mut i = 0usize;
        while i < bytes.len() {
            let (_v, n) = decode_safe(&bytes[i..])?;
            h.record(n);
            i += n;
        }
        Ok(h)
    }

    fn record(&mut self, len: usize) {
        self.counts[len - 1] += 1;
        self.values += 1;
        self.bytes += len as u64;
    }

    pub fn mean_len(&self) -> f64 {
        if self.values == 0 {
            0.0
        } else {
            self.bytes as f64 / self.values as f64
        }
    }

    /// Size of the same values stored as plain u64s.
    pub fn fixed_width_bytes(&self) -> u64 {
        self.values * 8
    }
}
