// crates/flit-core/src/flit/bitscan.rs
//
// Bit-scan helpers. Both compile down to a single tzcnt/lzcnt (or bsf/bsr).

/// 0-based index of the least significant set bit of `b`.
///
/// `b` must be non-zero; the decoders check the sentinel byte first.
#[inline(always)]
pub fn lsb_index(b: u8) -> u32 {
    debug_assert!(b != 0, "lsb_index of zero");
    b.trailing_zeros()
}

/// 0-based index of the most significant set bit of `w`.
///
/// `w` must be non-zero; the encoder passes `value | 1`.
#[inline(always)]
pub fn msb_index(w: u64) -> u32 {
    debug_assert!(w != 0, "msb_index of zero");
    63 - w.leading_zeros()
}
